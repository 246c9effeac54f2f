use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Front matter of a Markdown post. Unknown keys are carried through.
#[derive(Debug, Deserialize, Default)]
pub struct FrontMatter {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Post {
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub src: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub auto_geo: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TravelLocation {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
    /// `[latitude, longitude]`; `[0, 0]` without `auto_geo` means unset.
    #[serde(default)]
    pub coordinates: [f64; 2],
    /// `YYYY-MM`, or empty when unknown.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub blog_slug: Option<String>,
    #[serde(default)]
    pub auto_geo: bool,
}

impl TravelLocation {
    pub fn needs_coordinates(&self) -> bool {
        !self.auto_geo && self.coordinates == [0.0, 0.0]
    }
}

/// What EXIF gave us for one photo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoMeta {
    pub coordinates: Option<[f64; 2]>,
    pub date: Option<String>,
}

#[derive(Serialize)]
pub struct GenerateReport {
    pub count: usize,
    pub output: String,
    pub skipped: Vec<String>,
}

#[derive(Serialize, Default)]
pub struct ProcessReport {
    pub status: String,
    pub output: Option<String>,
    pub locations: usize,
    pub auto_positioned: usize,
    pub manual_positioning: usize,
    pub skipped: Vec<String>,
}

#[derive(Serialize, Clone)]
pub struct UploadItem {
    pub key: String,
    pub status: String,
}

#[derive(Serialize, Default)]
pub struct UploadReport {
    pub status: String,
    pub bucket: String,
    pub dry_run: bool,
    pub uploaded: usize,
    pub skipped: usize,
    pub failed: usize,
    pub items: Vec<UploadItem>,
}

#[derive(Serialize)]
pub struct TravelSummary {
    pub id: String,
    pub name: String,
    pub country: String,
    pub date: String,
    pub photos: usize,
    pub needs_coordinates: bool,
}

#[derive(Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct TravelCheckReport {
    pub overall: String,
    pub checks: Vec<CheckItem>,
}
