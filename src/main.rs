use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thumbgal::imaging::RustBackend;
use thumbgal::{config, gallery, output};

#[derive(Parser)]
#[command(name = "thumbgal")]
#[command(version)]
#[command(about = "Minimal HTML thumbnail gallery generator for folders of images")]
#[command(long_about = "\
Minimal HTML thumbnail gallery generator for folders of images

Scans a folder for *.png / *.jpg / *.jpeg files, generates a cached
thumbnail next to each one (photo.jpg -> photo_thumb.jpg), and renders an
HTML fragment of linked thumbnails through configurable string templates.

Thumbnails are regenerated only when missing; pass --no-cache to force a
full rebuild. Corrupt or undecodable images are reported per file and
skipped — the fragment still renders.

Run 'thumbgal gen-config' to print a documented gallery.toml.")]
struct Cli {
    /// Directory containing the source images
    #[arg(long, default_value = "photos", global = true)]
    source: PathBuf,

    /// URL prefix for generated links (overrides the config file)
    #[arg(long, global = true)]
    url_base: Option<String>,

    /// Path to the gallery.toml config file
    #[arg(long, default_value = "gallery.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate thumbnails and render the HTML fragment
    Build {
        /// Regenerate every thumbnail, ignoring cached files
        #[arg(long)]
        no_cache: bool,

        /// Write the fragment to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List discovered images and their thumbnail cache state
    List {
        /// Emit the inventory as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = config::load_config(&cli.config)?;
    if let Some(url_base) = cli.url_base {
        config.url_base = url_base;
    }

    match cli.command {
        Command::Build { no_cache, out } => {
            let gallery = config.build_gallery(&cli.source);
            let backend = RustBackend::new();
            let report = gallery.build_report(&backend, no_cache);

            output::print_build_report(&report);
            match out {
                Some(path) => {
                    std::fs::write(&path, &report.html)?;
                    println!("Wrote {}", path.display());
                }
                None => println!("{}", report.html),
            }
        }
        Command::List { json } => {
            let assets = gallery::discover(&cli.source, &config.url_base);
            if json {
                let inventory = output::format_asset_json(&assets);
                println!("{}", serde_json::to_string_pretty(&inventory)?);
            } else {
                output::print_asset_list(&assets);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
