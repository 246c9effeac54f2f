use crate::services::travel::{
    add_location, check_locations, remove_location, set_location, LocationEdit,
};
use crate::*;

pub fn handle_travel_commands(cli: &Cli, project: &Project) -> anyhow::Result<bool> {
    let Commands::Travel { command } = &cli.command else {
        return Ok(false);
    };

    let path = project.travel_output();
    let mut locations = site::load_travel(&path)?;

    match command {
        TravelCommands::List => {
            let items: Vec<TravelSummary> = locations.iter().map(site::summarize).collect();
            if !cli.json {
                let photos: usize = items.iter().map(|i| i.photos).sum();
                println!("{} locations · {} photos", items.len(), photos);
            }
            print_out(cli.json, &items, |l| {
                format!(
                    "{}\t{}\t{}\t{}\t{} photos{}",
                    l.id,
                    l.name,
                    if l.country.is_empty() { "-" } else { l.country.as_str() },
                    if l.date.is_empty() { "-" } else { l.date.as_str() },
                    l.photos,
                    if l.needs_coordinates {
                        "\tcoordinates not set"
                    } else {
                        ""
                    }
                )
            })?;
        }
        TravelCommands::Show { id } => {
            let l = site::show_location(&locations, id)?;
            if cli.json {
                print_one(true, l, |_| String::new())?;
            } else {
                println!("id: {}", l.id);
                println!("name: {}", l.name);
                println!("country: {}", l.country);
                println!("date: {}", l.date);
                println!(
                    "coordinates: {}, {}{}",
                    l.coordinates[0],
                    l.coordinates[1],
                    if l.auto_geo { " (exif)" } else { "" }
                );
                if let Some(slug) = &l.blog_slug {
                    println!("blog: {}", slug);
                }
                if !l.description.is_empty() {
                    println!("description: {}", l.description);
                }
                println!("cover: {}", l.cover_image);
                for p in &l.photos {
                    println!("photo: {}\t{}", p.src, p.caption);
                }
            }
        }
        TravelCommands::Set {
            id,
            name,
            country,
            description,
            date,
            blog_slug,
            clear_blog_slug,
            coordinates,
        } => {
            let coordinates = coordinates
                .as_deref()
                .map(site::parse_coordinates)
                .transpose()?;
            let blog_slug = if *clear_blog_slug {
                Some(None)
            } else {
                blog_slug.clone().map(Some)
            };
            let edit = LocationEdit {
                name: name.clone(),
                country: country.clone(),
                description: description.clone(),
                date: date.clone(),
                blog_slug,
                coordinates,
            };
            let updated = set_location(&mut locations, id, edit)?;
            save_json(&path, &locations)?;
            audit(project, "travel_set", serde_json::json!({"id": id}));
            print_one(cli.json, updated, |l| format!("updated {}", l.id))?;
        }
        TravelCommands::Add { id, name } => {
            let month = chrono::Local::now().format("%Y-%m").to_string();
            let added = add_location(&mut locations, id, name.clone(), month)?;
            site::validate(&locations)?;
            save_json(&path, &locations)?;
            audit(project, "travel_add", serde_json::json!({"id": id}));
            print_one(cli.json, added, |l| format!("added {}", l.id))?;
        }
        TravelCommands::Remove { id } => {
            let removed = remove_location(&mut locations, id)?;
            save_json(&path, &locations)?;
            audit(project, "travel_remove", serde_json::json!({"id": id}));
            print_one(cli.json, removed, |l| format!("removed {}", l.id))?;
        }
        TravelCommands::Check => {
            let report = check_locations(&locations);
            let ok = report.overall == "ok";
            print_status(cli.json, ok, report, |r| {
                let mut lines = vec![format!("overall: {}", r.overall)];
                lines.extend(
                    r.checks
                        .iter()
                        .filter(|c| c.status != "ok")
                        .map(|c| format!("{}\t{}", c.name, c.status)),
                );
                lines.join("\n")
            })?;
            if !ok {
                std::process::exit(1);
            }
        }
    }

    Ok(true)
}
