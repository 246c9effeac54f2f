use crate::domain::constants::NEW_LOCATION_NAME;
use crate::domain::models::{CheckItem, TravelCheckReport, TravelLocation};
use crate::site::{self, SiteError};
use std::collections::HashSet;

/// Field edits for one location; `None` leaves a field untouched.
#[derive(Debug, Default)]
pub struct LocationEdit {
    pub name: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub blog_slug: Option<Option<String>>,
    pub coordinates: Option<[f64; 2]>,
}

pub fn set_location(
    locations: &mut [TravelLocation],
    id: &str,
    edit: LocationEdit,
) -> anyhow::Result<TravelLocation> {
    let coordinates = match edit.coordinates {
        Some([lat, lng]) => Some(site::validate_coordinates(lat, lng)?),
        None => None,
    };
    let date = edit.date.as_deref().map(site::validate_month).transpose()?;
    let loc = site::show_location_mut(locations, id)?;
    if let Some(v) = edit.name {
        loc.name = v;
    }
    if let Some(v) = edit.country {
        loc.country = v;
    }
    if let Some(v) = edit.description {
        loc.description = v;
    }
    if let Some(v) = date {
        loc.date = v;
    }
    if let Some(v) = edit.blog_slug {
        loc.blog_slug = v.filter(|s| !s.is_empty());
    }
    if let Some(c) = coordinates {
        loc.coordinates = c;
        // Hand-placed pins are never EXIF-derived.
        loc.auto_geo = false;
    }
    Ok(loc.clone())
}

pub fn add_location(
    locations: &mut Vec<TravelLocation>,
    id: &str,
    name: Option<String>,
    date: String,
) -> anyhow::Result<TravelLocation> {
    if id.trim().is_empty() {
        anyhow::bail!("location id must not be empty");
    }
    if locations.iter().any(|l| l.id == id) {
        return Err(SiteError::DuplicateLocation(id.to_string()).into());
    }
    let loc = TravelLocation {
        id: id.to_string(),
        name: name.unwrap_or_else(|| NEW_LOCATION_NAME.to_string()),
        country: String::new(),
        coordinates: [0.0, 0.0],
        date,
        cover_image: String::new(),
        photos: vec![],
        description: String::new(),
        blog_slug: None,
        auto_geo: false,
    };
    locations.push(loc.clone());
    Ok(loc)
}

pub fn remove_location(locations: &mut Vec<TravelLocation>, id: &str) -> anyhow::Result<TravelLocation> {
    let idx = locations
        .iter()
        .position(|l| l.id == id)
        .ok_or_else(|| SiteError::LocationNotFound(id.to_string()))?;
    Ok(locations.remove(idx))
}

pub fn check_locations(locations: &[TravelLocation]) -> TravelCheckReport {
    let mut checks = Vec::new();

    let mut seen = HashSet::new();
    let dupes: Vec<&str> = locations
        .iter()
        .filter(|l| !seen.insert(l.id.as_str()))
        .map(|l| l.id.as_str())
        .collect();
    checks.push(CheckItem {
        name: "unique_ids".to_string(),
        status: if dupes.is_empty() {
            "ok".to_string()
        } else {
            format!("duplicate: {}", dupes.join(", "))
        },
    });

    for l in locations {
        let [lat, lng] = l.coordinates;
        let status = if site::validate_coordinates(lat, lng).is_err() {
            "out_of_range"
        } else if l.needs_coordinates() {
            "missing"
        } else {
            "ok"
        };
        checks.push(CheckItem {
            name: format!("coordinates:{}", l.id),
            status: status.to_string(),
        });
    }

    let overall = if checks.iter().all(|c| c.status == "ok") {
        "ok"
    } else {
        "needs_attention"
    }
    .to_string();
    TravelCheckReport { overall, checks }
}
