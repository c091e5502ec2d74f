//! Resource-name code generator
//!
//! Generates typed resource-name code from a TOML or JSON resource manifest.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use resname_define::ResourceManifest;
use resname_gen::errors::GeneratorError;
use resname_gen::options::GenerateOptions;
use resname_gen::output::generate_and_write;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// resname-gen - generates typed resource-name structs from resource descriptors
#[derive(Parser, Debug)]
#[command(name = "resname-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Resource manifest (TOML, or JSON when the extension is `.json`)
    #[arg(short, long)]
    manifest: PathBuf,

    /// Output file for generated code
    #[arg(short, long, default_value = "src/resource_names.rs")]
    output: PathBuf,

    /// Generator options as comma-separated `key=value` pairs
    /// (error_type, emit_error_type, header)
    #[arg(long, default_value = "")]
    opt: String,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Logs go to stderr so dry-run output on stdout stays clean.
fn init_tracing(verbose: u8) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string()
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = GenerateOptions::from_parameter(&cli.opt)?;
    let manifest = ResourceManifest::load(&cli.manifest)?;

    info!(
        manifest = %cli.manifest.display(),
        resources = manifest.resources.len(),
        dry_run = cli.dry_run,
        "generating resource names"
    );
    for resource in &manifest.resources {
        debug!(
            resource_type = %resource.resource_type,
            patterns = resource.patterns.len(),
            history = %resource.history,
            "loaded resource"
        );
    }

    generate_and_write(&manifest, &cli.output, &options, cli.dry_run)?;

    if !cli.dry_run {
        eprintln!(
            "{} {} resource(s) to {}",
            "Generated".green().bold(),
            manifest.resources.len(),
            cli.output.display().to_string().cyan()
        );
    }

    Ok(())
}
