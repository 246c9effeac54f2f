use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod services;
mod site;

pub use cli::*;
pub use commands::{handle_blog_commands, handle_photo_commands, handle_travel_commands};
pub use domain::models::*;
pub use services::config::Project;
pub use services::output::{print_error, print_one, print_out, print_status};
pub use services::storage::{audit, save_json};
pub use site::SiteError;

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e
                .downcast_ref::<SiteError>()
                .map(|s| s.code())
                .unwrap_or("ERROR");
            print_error(cli.json, code, &format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let project = Project::open(&cli.root)?;
    log::debug!("site root {}", project.root.display());

    if handle_blog_commands(cli, &project)? {
        return Ok(());
    }
    if handle_photo_commands(cli, &project)? {
        return Ok(());
    }
    handle_travel_commands(cli, &project)?;
    Ok(())
}

/// Log records go to stderr so `--json` stdout stays parseable.
/// `FOLIO_LOG` takes env_logger filter syntax; the default is `info`.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("FOLIO_LOG", "info"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
