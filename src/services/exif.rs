use crate::domain::models::PhotoMeta;
use exif::{Exif, In, Rational, Tag, Value};
use std::path::Path;

pub fn read_photo_meta(path: &Path) -> anyhow::Result<PhotoMeta> {
    let file = std::fs::File::open(path)?;
    let mut reader = std::io::BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader)?;
    Ok(PhotoMeta {
        coordinates: extract_gps(&exif),
        date: extract_month(&exif),
    })
}

fn extract_gps(exif: &Exif) -> Option<[f64; 2]> {
    let lat = axis(exif, Tag::GPSLatitude, Tag::GPSLatitudeRef)?;
    let lng = axis(exif, Tag::GPSLongitude, Tag::GPSLongitudeRef)?;
    Some([lat, lng])
}

fn axis(exif: &Exif, value_tag: Tag, ref_tag: Tag) -> Option<f64> {
    let field = exif.get_field(value_tag, In::PRIMARY)?;
    let Value::Rational(ref dms) = field.value else {
        return None;
    };
    let reference = exif
        .get_field(ref_tag, In::PRIMARY)
        .and_then(|f| ascii(&f.value));
    dms_to_decimal(dms, reference.as_deref())
}

fn extract_month(exif: &Exif) -> Option<String> {
    [Tag::DateTimeOriginal, Tag::DateTime]
        .iter()
        .filter_map(|t| exif.get_field(*t, In::PRIMARY))
        .filter_map(|f| ascii(&f.value))
        .find_map(|s| month_from_exif_datetime(&s))
}

fn ascii(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(parts) => parts
            .first()
            .map(|b| String::from_utf8_lossy(b).trim_end_matches('\0').trim().to_string()),
        _ => None,
    }
}

/// Degrees/minutes/seconds to signed decimal degrees; `S` and `W` are negative.
pub fn dms_to_decimal(dms: &[Rational], reference: Option<&str>) -> Option<f64> {
    let part = |i: usize| -> Option<f64> {
        match dms.get(i) {
            Some(r) if r.denom != 0 => Some(r.to_f64()),
            Some(_) => None,
            None => Some(0.0),
        }
    };
    if dms.is_empty() {
        return None;
    }
    let value = part(0)? + part(1)? / 60.0 + part(2)? / 3600.0;
    if !value.is_finite() {
        return None;
    }
    match reference.map(|r| r.trim().to_ascii_uppercase()) {
        Some(r) if r == "S" || r == "W" => Some(-value),
        _ => Some(value),
    }
}

/// `2023:10:15 14:30:00` becomes `2023-10`.
pub fn month_from_exif_datetime(raw: &str) -> Option<String> {
    let mut parts = raw.split([':', ' ', '-']);
    let year = parts.next()?.trim();
    let month = parts.next()?.trim();
    let valid = year.len() == 4
        && month.len() == 2
        && year.chars().all(|c| c.is_ascii_digit())
        && month.chars().all(|c| c.is_ascii_digit())
        && year != "0000";
    valid.then(|| format!("{}-{}", year, month))
}
