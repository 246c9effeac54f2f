use crate::domain::models::{FrontMatter, Post};
use std::collections::HashSet;
use std::path::Path;

/// Posts scanned from a directory, plus the files that could not be read.
#[derive(Debug, Default)]
pub struct PostScan {
    pub posts: Vec<Post>,
    pub skipped: Vec<String>,
}

pub fn generate_posts(posts_dir: &Path, include_drafts: bool) -> anyhow::Result<PostScan> {
    let mut scan = PostScan::default();
    if !posts_dir.exists() {
        log::warn!("posts directory {} does not exist", posts_dir.display());
        return Ok(scan);
    }

    let mut names: Vec<String> = std::fs::read_dir(posts_dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|n| n.ends_with(".md"))
        .collect();
    names.sort();

    let mut seen = HashSet::new();
    for name in names {
        let raw = match std::fs::read_to_string(posts_dir.join(&name)) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("could not read {}: {}", name, e);
                scan.skipped.push(name);
                continue;
            }
        };
        let slug = name.trim_end_matches(".md").to_string();
        match parse_post(&slug, &raw) {
            Ok(post) if !(post.published || include_drafts) => {
                log::debug!("skipping draft {}", name)
            }
            Ok(post) if !seen.insert(post.slug.clone()) => {
                log::warn!("{}: slug `{}` is already taken", name, post.slug);
                scan.skipped.push(name);
            }
            Ok(post) => scan.posts.push(post),
            Err(e) => {
                log::warn!("bad front matter in {}: {}", name, e);
                scan.skipped.push(name);
            }
        }
    }

    sort_posts(&mut scan.posts);
    Ok(scan)
}

/// Newest first; equal dates fall back to slug order.
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
}

/// A non-empty `slug` key in the front matter replaces the file-name slug.
pub fn parse_post(slug: &str, raw: &str) -> anyhow::Result<Post> {
    let (fm_yaml, body) = split_frontmatter(raw);
    let fm: FrontMatter = if fm_yaml.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str(fm_yaml)?
    };
    let mut extra = fm.extra;
    let slug = match extra.remove("slug") {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => s,
        _ => slug.to_string(),
    };
    for key in RESERVED_KEYS {
        extra.remove(*key);
    }
    Ok(Post {
        slug,
        title: fm.title,
        date: fm.date,
        tags: fm.tags,
        description: fm.description,
        published: fm.published,
        extra,
        content: body.to_string(),
    })
}

/// Keys `Post` writes itself; leaving them in `extra` would serialize them twice.
const RESERVED_KEYS: &[&str] = &["title", "date", "tags", "description", "published", "content"];

/// Splits a `---` delimited YAML header from the body. The body starts on
/// the line after the closing delimiter.
fn split_frontmatter(content: &str) -> (&str, &str) {
    let trimmed = content.trim_start();
    let Some(after) = strip_delimiter_line(trimmed) else {
        return ("", content);
    };
    let mut offset = 0;
    for line in after.split_inclusive('\n') {
        if let Some(body) = strip_delimiter_line(&after[offset..]) {
            return (&after[..offset], body);
        }
        offset += line.len();
    }
    ("", content)
}

/// Strips a leading line that is exactly `---`, returning what follows it.
fn strip_delimiter_line(s: &str) -> Option<&str> {
    let rest = s.strip_prefix("---")?;
    let rest = rest.strip_prefix('\r').unwrap_or(rest);
    if rest.is_empty() {
        return Some("");
    }
    rest.strip_prefix('\n')
}
