use crate::domain::models::{Post, TravelLocation, TravelSummary};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum SiteError {
    #[error("post not found: {0}")]
    PostNotFound(String),
    #[error("location not found: {0}")]
    LocationNotFound(String),
    #[error("duplicate location id: {0}")]
    DuplicateLocation(String),
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),
    #[error("invalid date `{0}`; expected YYYY-MM")]
    InvalidDate(String),
    #[error("storage cli `{0}` not found; install it with `npm install -g wrangler` and run `wrangler login`")]
    UploaderMissing(String),
    #[error("invalid data in {path}: {reason}")]
    InvalidData { path: String, reason: String },
}

impl SiteError {
    pub fn code(&self) -> &'static str {
        match self {
            SiteError::PostNotFound(_) => "POST_NOT_FOUND",
            SiteError::LocationNotFound(_) => "LOCATION_NOT_FOUND",
            SiteError::DuplicateLocation(_) => "DUPLICATE_LOCATION",
            SiteError::InvalidCoordinates(_) => "INVALID_COORDINATES",
            SiteError::InvalidDate(_) => "INVALID_DATE",
            SiteError::UploaderMissing(_) => "UPLOADER_MISSING",
            SiteError::InvalidData { .. } => "INVALID_DATA",
        }
    }
}

pub fn load_posts(path: &Path) -> anyhow::Result<Vec<Post>> {
    if !path.exists() {
        anyhow::bail!(
            "posts data not found at {}; run `folio blog generate` first",
            path.display()
        );
    }
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| {
        SiteError::InvalidData {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// A missing file is an empty list; a file that does not parse is an error.
pub fn load_travel(path: &Path) -> anyhow::Result<Vec<TravelLocation>> {
    if !path.exists() {
        return Ok(vec![]);
    }
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| {
        SiteError::InvalidData {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

pub fn show_post<'a>(posts: &'a [Post], slug: &str) -> anyhow::Result<&'a Post> {
    posts
        .iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| SiteError::PostNotFound(slug.to_string()).into())
}

pub fn posts_with_tag<'a>(posts: &'a [Post], tag: Option<&str>) -> Vec<&'a Post> {
    match tag {
        None => posts.iter().collect(),
        Some(t) => posts
            .iter()
            .filter(|p| p.tags.iter().any(|x| x.eq_ignore_ascii_case(t)))
            .collect(),
    }
}

pub fn all_tags(posts: &[Post]) -> Vec<String> {
    posts
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn show_location<'a>(
    locations: &'a [TravelLocation],
    id: &str,
) -> anyhow::Result<&'a TravelLocation> {
    locations
        .iter()
        .find(|l| l.id == id)
        .ok_or_else(|| SiteError::LocationNotFound(id.to_string()).into())
}

pub fn show_location_mut<'a>(
    locations: &'a mut [TravelLocation],
    id: &str,
) -> anyhow::Result<&'a mut TravelLocation> {
    locations
        .iter_mut()
        .find(|l| l.id == id)
        .ok_or_else(|| SiteError::LocationNotFound(id.to_string()).into())
}

pub fn summarize(l: &TravelLocation) -> TravelSummary {
    TravelSummary {
        id: l.id.clone(),
        name: l.name.clone(),
        country: l.country.clone(),
        date: l.date.clone(),
        photos: l.photos.len(),
        needs_coordinates: l.needs_coordinates(),
    }
}

pub fn validate_coordinates(lat: f64, lng: f64) -> Result<[f64; 2], SiteError> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(SiteError::InvalidCoordinates(format!("{},{}", lat, lng)));
    }
    Ok([lat, lng])
}

/// Parses `LAT,LNG`.
pub fn parse_coordinates(raw: &str) -> Result<[f64; 2], SiteError> {
    let invalid = || SiteError::InvalidCoordinates(raw.to_string());
    let (lat, lng) = raw.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;
    validate_coordinates(lat, lng)
}

/// Accepts `YYYY-MM`, or an empty string for "unknown".
pub fn validate_month(raw: &str) -> Result<String, SiteError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(String::new());
    }
    let valid = match raw.split_once('-') {
        Some((year, month)) => {
            year.len() == 4
                && month.len() == 2
                && year.chars().all(|c| c.is_ascii_digit())
                && matches!(month.parse::<u8>(), Ok(1..=12))
        }
        None => false,
    };
    if valid {
        Ok(raw.to_string())
    } else {
        Err(SiteError::InvalidDate(raw.to_string()))
    }
}

pub fn validate(locations: &[TravelLocation]) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for l in locations {
        if !seen.insert(&l.id) {
            return Err(SiteError::DuplicateLocation(l.id.clone()).into());
        }
    }
    Ok(())
}
