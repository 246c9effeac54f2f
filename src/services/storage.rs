use crate::services::config::Project;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Appends one `{ts, action, data}` line to the project's audit log.
/// Failures are ignored.
pub fn audit(project: &Project, action: &str, data: serde_json::Value) {
    let path = project.audit_path();
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": chrono::Utc::now().to_rfc3339(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

/// Writes pretty JSON, creating parent directories as needed.
pub fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Lists subdirectories of `dir` by name, sorted.
pub fn list_subdirs(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            out.push(entry.path());
        }
    }
    out.sort();
    Ok(out)
}

/// File names in `dir` whose extension is in `extensions` (case-insensitive), sorted.
pub fn list_files_with_ext(dir: &Path, extensions: &[String]) -> anyhow::Result<Vec<String>> {
    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if has_extension(&name, extensions) {
            out.push(name);
        }
    }
    out.sort();
    Ok(out)
}

pub fn has_extension(name: &str, extensions: &[String]) -> bool {
    Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .map(|e| extensions.iter().any(|x| x.trim_start_matches('.').eq_ignore_ascii_case(&e)))
        .unwrap_or(false)
}
