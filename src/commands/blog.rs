use crate::services::posts::generate_posts;
use crate::*;

pub fn handle_blog_commands(cli: &Cli, project: &Project) -> anyhow::Result<bool> {
    let Commands::Blog { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        BlogCommands::Generate {
            posts_dir,
            output,
            include_drafts,
        } => {
            let posts_dir = posts_dir.clone().unwrap_or_else(|| project.posts_dir());
            let output = output.clone().unwrap_or_else(|| project.posts_output());
            let scan = generate_posts(&posts_dir, *include_drafts)?;
            save_json(&output, &scan.posts)?;
            audit(
                project,
                "blog_generate",
                serde_json::json!({"count": scan.posts.len(), "skipped": scan.skipped}),
            );
            let report = GenerateReport {
                count: scan.posts.len(),
                output: output.display().to_string(),
                skipped: scan.skipped,
            };
            print_one(cli.json, report, |r| {
                format!("generated {} posts to {}", r.count, r.output)
            })?;
        }
        BlogCommands::List { tag } => {
            let posts = site::load_posts(&project.posts_output())?;
            let hits: Vec<&Post> = site::posts_with_tag(&posts, tag.as_deref());
            print_out(cli.json, &hits, |p| {
                format!("{}\t{}\t{}\t{}", p.date, p.slug, p.title, p.tags.join(","))
            })?;
        }
        BlogCommands::Tags => {
            let posts = site::load_posts(&project.posts_output())?;
            print_out(cli.json, &site::all_tags(&posts), |t| t.to_string())?;
        }
        BlogCommands::Show { slug } => {
            let posts = site::load_posts(&project.posts_output())?;
            let p = site::show_post(&posts, slug)?;
            if cli.json {
                print_one(true, p, |_| String::new())?;
            } else {
                println!("title: {}", p.title);
                println!("date: {}", p.date);
                if !p.tags.is_empty() {
                    println!("tags: {}", p.tags.join(", "));
                }
                if !p.description.is_empty() {
                    println!("description: {}", p.description);
                }
                println!();
                println!("{}", p.content.trim_end());
            }
        }
    }

    Ok(true)
}
