use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "Build-time data tooling for the portfolio, blog and travel site"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Site root (holds folio.toml, content/ and photos-staging/)"
    )]
    pub root: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Blog posts: generate posts.json and read it back
    Blog {
        #[command(subcommand)]
        command: BlogCommands,
    },
    /// Travel photos: EXIF scan and object-storage upload
    Photos {
        #[command(subcommand)]
        command: PhotoCommands,
    },
    /// Travel locations: read and edit travel-data.json
    Travel {
        #[command(subcommand)]
        command: TravelCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum BlogCommands {
    /// Read Markdown front matter into the posts JSON file
    Generate {
        #[arg(long, help = "Directory of Markdown posts")]
        posts_dir: Option<PathBuf>,
        #[arg(long, help = "Posts JSON file to write")]
        output: Option<PathBuf>,
        #[arg(long, default_value_t = false, help = "Keep posts without `published: true`")]
        include_drafts: bool,
    },
    List {
        #[arg(long)]
        tag: Option<String>,
    },
    Tags,
    Show {
        slug: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PhotoCommands {
    /// Scan staged photos and regenerate the travel data file
    Process {
        #[arg(long, default_value_t = false, help = "Use /travel/ paths instead of the CDN")]
        local: bool,
    },
    /// Upload staged photos to the bucket
    Upload {
        #[arg(long, default_value_t = false, help = "Preview without uploading")]
        dry_run: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum TravelCommands {
    List,
    Show {
        id: String,
    },
    Set {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, help = "YYYY-MM")]
        date: Option<String>,
        #[arg(long, conflicts_with = "clear_blog_slug")]
        blog_slug: Option<String>,
        #[arg(long, default_value_t = false)]
        clear_blog_slug: bool,
        #[arg(long, allow_hyphen_values = true, help = "LAT,LNG in decimal degrees")]
        coordinates: Option<String>,
    },
    Add {
        id: String,
        #[arg(long)]
        name: Option<String>,
    },
    Remove {
        id: String,
    },
    /// Report duplicate ids and missing or invalid coordinates
    Check,
}
