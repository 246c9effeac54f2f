use crate::services::photos::process_staging;
use crate::services::upload::upload_staging;
use crate::*;

pub fn handle_photo_commands(cli: &Cli, project: &Project) -> anyhow::Result<bool> {
    let Commands::Photos { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        PhotoCommands::Process { local } => {
            let report = process_staging(project, *local)?;
            if report.status == "generated" {
                audit(
                    project,
                    "photos_process",
                    serde_json::json!({
                        "locations": report.locations,
                        "auto_positioned": report.auto_positioned,
                        "local": local,
                    }),
                );
            }
            print_one(cli.json, report, |r| match r.status.as_str() {
                "created_staging" => format!(
                    "created {}; add photo directories and run again",
                    project.staging_dir().display()
                ),
                "no_locations" => format!(
                    "no location directories found in {}",
                    project.staging_dir().display()
                ),
                _ => {
                    let mut out = format!(
                        "generated {} locations to {}\nauto-positioned: {}",
                        r.locations,
                        r.output.as_deref().unwrap_or(""),
                        r.auto_positioned
                    );
                    if r.manual_positioning > 0 {
                        out.push_str(&format!(
                            "\nmanual positioning needed: {}",
                            r.manual_positioning
                        ));
                    }
                    out
                }
            })?;
        }
        PhotoCommands::Upload { dry_run } => {
            let report = upload_staging(project, *dry_run)?;
            if !report.dry_run && !report.items.is_empty() {
                audit(
                    project,
                    "photos_upload",
                    serde_json::json!({
                        "bucket": report.bucket,
                        "uploaded": report.uploaded,
                        "skipped": report.skipped,
                        "failed": report.failed,
                    }),
                );
            }
            let failed = report.failed;
            print_status(cli.json, failed == 0, report, |r| {
                let mut out = format!(
                    "bucket: {}{}\nuploaded: {}\nskipped: {} (already in bucket)",
                    r.bucket,
                    if r.dry_run { " (dry run)" } else { "" },
                    r.uploaded,
                    r.skipped
                );
                if r.failed > 0 {
                    out.push_str(&format!("\nfailed: {}", r.failed));
                }
                if r.uploaded > 0 && !r.dry_run {
                    out.push_str(
                        "\nnext steps:\n  1. folio photos process\n  2. review travel-data.json (folio travel check)\n  3. git commit & push",
                    );
                }
                out
            })?;
            if failed > 0 {
                std::process::exit(1);
            }
        }
    }

    Ok(true)
}
