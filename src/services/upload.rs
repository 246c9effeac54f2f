use crate::domain::constants::TRAVEL_PREFIX;
use crate::domain::models::{UploadItem, UploadReport};
use crate::services::config::Project;
use crate::services::storage::{list_files_with_ext, list_subdirs};
use crate::site::SiteError;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;
use wait_timeout::ChildExt;

/// The object-storage command-line tool, driven as a subprocess.
pub struct StorageCli<'a> {
    pub program: &'a str,
    pub bucket: &'a str,
    pub list_timeout: Duration,
    pub put_timeout: Duration,
}

struct RunOutput {
    success: bool,
    stdout: String,
    stderr: String,
}

#[derive(Deserialize)]
struct Listing {
    #[serde(default)]
    objects: Vec<ListedObject>,
}

#[derive(Deserialize)]
struct ListedObject {
    key: String,
}

impl<'a> StorageCli<'a> {
    pub fn from_project(project: &'a Project) -> Self {
        let storage = &project.config.storage;
        Self {
            program: &storage.cli,
            bucket: &storage.bucket,
            list_timeout: storage.list_timeout(),
            put_timeout: storage.put_timeout(),
        }
    }

    pub fn is_available(&self) -> bool {
        run_with_timeout(
            Command::new(self.program).arg("--version"),
            Duration::from_secs(10),
        )
        .map(|o| o.success)
        .unwrap_or(false)
    }

    /// Keys already stored under `prefix`. A failed listing counts as empty.
    pub fn list_keys(&self, prefix: &str) -> HashSet<String> {
        let out = run_with_timeout(
            Command::new(self.program)
                .args(["r2", "object", "list", self.bucket])
                .arg(format!("--prefix={}", prefix)),
            self.list_timeout,
        );
        match out {
            Ok(o) if o.success => parse_listing(&o.stdout),
            Ok(o) => {
                log::debug!("listing {} failed: {}", prefix, o.stderr.trim());
                HashSet::new()
            }
            Err(e) => {
                log::debug!("listing {} failed: {}", prefix, e);
                HashSet::new()
            }
        }
    }

    pub fn put(&self, key: &str, file: &Path) -> anyhow::Result<()> {
        let out = run_with_timeout(
            Command::new(self.program)
                .args(["r2", "object", "put"])
                .arg(format!("{}/{}", self.bucket, key))
                .arg(format!("--file={}", file.display()))
                .arg(format!("--content-type={}", content_type_for(key))),
            self.put_timeout,
        )?;
        if !out.success {
            anyhow::bail!("{}", out.stderr.trim());
        }
        Ok(())
    }
}

fn run_with_timeout(cmd: &mut Command, timeout: Duration) -> anyhow::Result<RunOutput> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    let status = match child.wait_timeout(timeout)? {
        Some(status) => status,
        None => {
            let _ = child.kill();
            let _ = child.wait();
            anyhow::bail!("timed out after {}s", timeout.as_secs());
        }
    };

    let collect = |h: Option<std::thread::JoinHandle<String>>| {
        h.and_then(|h| h.join().ok()).unwrap_or_default()
    };
    Ok(RunOutput {
        success: status.success(),
        stdout: collect(stdout),
        stderr: collect(stderr),
    })
}

fn drain<R: Read + Send + 'static>(mut r: R) -> std::thread::JoinHandle<String> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = r.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).to_string()
    })
}

/// Reads `{"objects": [{"key": ...}]}`, tolerating banner lines before the JSON.
pub fn parse_listing(raw: &str) -> HashSet<String> {
    let Some(start) = raw.find('{') else {
        return HashSet::new();
    };
    serde_json::from_str::<Listing>(&raw[start..])
        .map(|l| l.objects.into_iter().map(|o| o.key).collect())
        .unwrap_or_default()
}

pub fn object_key(location_id: &str, file: &str) -> String {
    format!("{}/{}/{}", TRAVEL_PREFIX, location_id, file)
}

pub fn content_type_for(name: &str) -> &'static str {
    let ext = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}

pub fn upload_staging(project: &Project, dry_run: bool) -> anyhow::Result<UploadReport> {
    let cli = StorageCli::from_project(project);
    let mut report = UploadReport {
        bucket: cli.bucket.to_string(),
        dry_run,
        ..Default::default()
    };

    if !cli.is_available() {
        return Err(SiteError::UploaderMissing(cli.program.to_string()).into());
    }

    let staging = project.staging_dir();
    if !staging.exists() {
        std::fs::create_dir_all(&staging)?;
        log::info!(
            "created {}; add photo directories like tokyo-2023/",
            staging.display()
        );
        report.status = "created_staging".to_string();
        return Ok(report);
    }

    let dirs = list_subdirs(&staging)?;
    if dirs.is_empty() {
        log::info!("no directories found in {}", staging.display());
        report.status = "no_locations".to_string();
        return Ok(report);
    }

    for dir in &dirs {
        let id = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let files = list_files_with_ext(dir, &project.config.storage.upload_extensions)?;
        if files.is_empty() {
            log::info!("{}: no images", id);
            continue;
        }
        log::info!("{}: {} photos", id, files.len());

        let existing = cli.list_keys(&format!("{}/{}/", TRAVEL_PREFIX, id));
        for file in &files {
            let key = object_key(&id, file);
            let status = if existing.contains(&key) {
                log::info!("  {} (already exists)", file);
                report.skipped += 1;
                "skipped"
            } else if dry_run {
                log::info!("  [dry run] would upload {}", key);
                report.uploaded += 1;
                "would_upload"
            } else {
                match cli.put(&key, &dir.join(file)) {
                    Ok(()) => {
                        log::info!("  uploaded {}", file);
                        report.uploaded += 1;
                        "uploaded"
                    }
                    Err(e) => {
                        log::error!("failed to upload {}: {}", key, e);
                        report.failed += 1;
                        "failed"
                    }
                }
            };
            report.items.push(UploadItem {
                key,
                status: status.to_string(),
            });
        }
    }

    report.status = if report.failed == 0 {
        "completed"
    } else {
        "completed_with_failures"
    }
    .to_string();
    Ok(report)
}
