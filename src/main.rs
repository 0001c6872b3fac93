use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use app_meta::config::{self, RawMetadata};
use app_meta::{ui, Field, Metadata};

#[derive(clap::Parser)]
#[command(
    name = "app-meta",
    about = "Validate and display build-time application metadata"
)]
struct Args {
    #[arg(short, long, help = "Metadata file path (default: ./appmeta.toml)")]
    config: Option<String>,

    #[arg(
        short,
        long,
        help = "Overlay APP_META_* environment variables on the file values"
    )]
    env: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print every set field and the runtime environment
    Show,
    /// Validate every field and report all problems
    Check,
    /// Print a single field; URLs print in normalized form
    /// (https://example.com becomes https://example.com/)
    Get {
        field: Field,
        #[arg(short, long, help = "Value to print when the field is not set")]
        default: Option<String>,
    },
    /// Print the build date with a strftime layout
    Date {
        #[arg(short, long, default_value = "%Y-%m-%dT%H:%M:%SZ")]
        format: String,
        #[arg(short, long, help = "Value to print when no date is set")]
        default: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("APP_META_LOG")
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_raw(args: &Args) -> Result<RawMetadata> {
    let raw = config::load_config(args.config.as_deref()).with_context(|| {
        format!(
            "Failed to load metadata from {}",
            args.config.as_deref().unwrap_or(config::CONFIG_FILE_NAME)
        )
    })?;

    if args.env {
        Ok(raw.merge(&RawMetadata::from_env()))
    } else {
        Ok(raw)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let raw = load_raw(&args)?;

    match args.command.as_ref().unwrap_or(&Command::Show) {
        Command::Check => {
            let errors = Metadata::diagnose(&raw);
            let meta = Metadata::load(&raw).ok();
            if !ui::print_check_results(&errors, meta.as_ref()) {
                std::process::exit(1);
            }
        }
        Command::Show => {
            let meta = load_metadata(&raw);
            ui::print_report(&meta);
        }
        Command::Get { field, default } => {
            let meta = load_metadata(&raw);
            let value = ui::format_field(&meta, *field);
            if raw.get(*field).is_empty() {
                println!("{}", default.as_deref().unwrap_or(&value));
            } else {
                println!("{}", value);
            }
        }
        Command::Date { format, default } => {
            let meta = load_metadata(&raw);
            let text = meta.date_format_or(format, default.as_deref().unwrap_or(""))?;
            println!("{}", text);
        }
    }

    Ok(())
}

/// Loads the snapshot, exiting on the first invalid field.
fn load_metadata(raw: &RawMetadata) -> Metadata {
    match Metadata::load(raw) {
        Ok(meta) => meta,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
