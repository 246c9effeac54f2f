use crate::domain::constants::TRAVEL_PREFIX;
use crate::domain::models::{Photo, PhotoMeta, ProcessReport, TravelLocation};
use crate::services::config::Project;
use crate::services::exif::read_photo_meta;
use crate::services::storage::{list_files_with_ext, list_subdirs, save_json};
use crate::site;
use std::collections::HashSet;
use std::path::Path;

pub struct PhotoUrls<'a> {
    pub base_url: &'a str,
    pub local: bool,
}

impl PhotoUrls<'_> {
    pub fn url(&self, location_id: &str, file: &str) -> String {
        if self.local {
            format!("/{}/{}/{}", TRAVEL_PREFIX, location_id, file)
        } else {
            format!(
                "{}/{}/{}/{}",
                self.base_url.trim_end_matches('/'),
                TRAVEL_PREFIX,
                location_id,
                file
            )
        }
    }
}

/// Scans the staging directory and rewrites the travel data file.
pub fn process_staging(project: &Project, local: bool) -> anyhow::Result<ProcessReport> {
    let staging = project.staging_dir();
    if !staging.exists() {
        std::fs::create_dir_all(&staging)?;
        log::info!(
            "created {}; add photo directories like {}/tokyo-2023/ and run again",
            staging.display(),
            staging.display()
        );
        return Ok(ProcessReport {
            status: "created_staging".to_string(),
            ..Default::default()
        });
    }

    let dirs = list_subdirs(&staging)?;
    if dirs.is_empty() {
        log::info!(
            "no location directories in {}; create directories like tokyo-2023/",
            staging.display()
        );
        return Ok(ProcessReport {
            status: "no_locations".to_string(),
            ..Default::default()
        });
    }

    let output = project.travel_output();
    let existing = site::load_travel(&output)?;
    let urls = PhotoUrls {
        base_url: &project.config.photos.base_url,
        local,
    };

    let mut report = ProcessReport {
        status: "generated".to_string(),
        output: Some(output.display().to_string()),
        ..Default::default()
    };
    let mut locations = Vec::new();
    for dir in &dirs {
        let Some(fresh) =
            build_location(dir, &project.config.photos.extensions, &urls, &read_photo_meta)?
        else {
            report.skipped.push(dir_name(dir));
            continue;
        };
        let merged = merge_location(fresh, existing.iter().find(|l| l.id == dir_name(dir)));
        if merged.needs_coordinates() {
            log::warn!(
                "{}: no GPS data found; set coordinates with `folio travel set {} --coordinates LAT,LNG`",
                merged.id,
                merged.id
            );
        }
        locations.push(merged);
    }

    let scanned: HashSet<String> = locations.iter().map(|l| l.id.clone()).collect();
    locations.extend(existing.into_iter().filter(|l| !scanned.contains(&l.id)));
    sort_locations(&mut locations);
    save_json(&output, &locations)?;

    report.locations = locations.len();
    report.auto_positioned = locations.iter().filter(|l| l.auto_geo).count();
    report.manual_positioning = locations.iter().filter(|l| l.needs_coordinates()).count();
    Ok(report)
}

/// Builds a fresh location record from one staging directory, or `None` when
/// the directory holds no images.
pub fn build_location(
    dir: &Path,
    extensions: &[String],
    urls: &PhotoUrls<'_>,
    read_meta: &dyn Fn(&Path) -> anyhow::Result<PhotoMeta>,
) -> anyhow::Result<Option<TravelLocation>> {
    let id = dir_name(dir);
    let files = list_files_with_ext(dir, extensions)?;
    if files.is_empty() {
        log::info!("skipping {} (no images)", id);
        return Ok(None);
    }
    log::info!("processing {}: {} photos", id, files.len());

    let mut photos = Vec::with_capacity(files.len());
    let mut coordinates = None;
    let mut date = None;
    for file in &files {
        let meta = read_meta(&dir.join(file)).unwrap_or_else(|e| {
            log::warn!("could not read EXIF from {}: {}", file, e);
            PhotoMeta::default()
        });
        photos.push(Photo {
            src: urls.url(&id, file),
            caption: caption_for(file),
            auto_geo: meta.coordinates.is_some(),
        });
        if coordinates.is_none() {
            coordinates = meta.coordinates;
        }
        if date.is_none() {
            date = meta.date;
        }
    }

    Ok(Some(TravelLocation {
        name: pretty_name(&id),
        country: String::new(),
        coordinates: coordinates.unwrap_or([0.0, 0.0]),
        date: date.unwrap_or_default(),
        cover_image: urls.url(&id, pick_cover(&files)),
        photos,
        description: String::new(),
        blog_slug: None,
        auto_geo: coordinates.is_some(),
        id,
    }))
}

/// Manual edits in `existing` win over the fresh scan's placeholders.
pub fn merge_location(mut fresh: TravelLocation, existing: Option<&TravelLocation>) -> TravelLocation {
    let Some(existing) = existing else {
        return fresh;
    };
    if !existing.name.is_empty() {
        fresh.name = existing.name.clone();
    }
    if !existing.country.is_empty() {
        fresh.country = existing.country.clone();
    }
    if !existing.description.is_empty() {
        fresh.description = existing.description.clone();
    }
    if existing.blog_slug.as_deref().is_some_and(|s| !s.is_empty()) {
        fresh.blog_slug = existing.blog_slug.clone();
    }
    if !fresh.auto_geo {
        fresh.coordinates = existing.coordinates;
    }
    if fresh.date.is_empty() {
        fresh.date = existing.date.clone();
    }
    fresh
}

/// Newest first by `YYYY-MM`; stable for equal dates.
pub fn sort_locations(locations: &mut [TravelLocation]) {
    locations.sort_by(|a, b| b.date.cmp(&a.date));
}

/// `cover.*` if present, else the first file.
pub fn pick_cover(files: &[String]) -> &str {
    files
        .iter()
        .find(|f| f.to_ascii_lowercase().starts_with("cover"))
        .or_else(|| files.first())
        .map(String::as_str)
        .unwrap_or("")
}

/// `tokyo-2023` becomes `Tokyo`; `new-york-2024` becomes `New York`.
pub fn pretty_name(id: &str) -> String {
    let mut words: Vec<&str> = id.split('-').filter(|w| !w.is_empty()).collect();
    if words.len() > 1
        && words
            .last()
            .is_some_and(|w| w.chars().all(|c| c.is_ascii_digit()))
    {
        words.pop();
    }
    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `IMG_001-night.jpg` becomes `IMG 001 night`.
pub fn caption_for(file: &str) -> String {
    let stem = match file.rfind('.') {
        Some(i) if i > 0 => &file[..i],
        _ => file,
    };
    stem.replace(['_', '-'], " ")
}

fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
