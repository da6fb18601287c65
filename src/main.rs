use clap::Parser;
use std::path::PathBuf;
use thumbor_urls::arguments::{Arguments, FitIn, HAlign, VAlign};
use thumbor_urls::config::Config;
use thumbor_urls::urls::UrlGenerator;

/// Thumbor URLs - signed image URL generation from the command line
#[derive(Parser, Debug)]
#[command(name = "thumbor-urls")]
#[command(version, about, long_about = None)]
struct Args {
    /// Image URL or media path to generate a signed URL for
    image_url: String,

    /// Path to configuration file (built-in defaults are used when absent)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Named argument preset from the configuration
    #[arg(short, long)]
    alias: Option<String>,

    /// Target width in pixels
    #[arg(short = 'W', long)]
    width: Option<u32>,

    /// Target height in pixels
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Enable content-aware smart cropping
    #[arg(long)]
    smart: bool,

    /// Fit-in mode: fit-in, full-fit-in, adaptive-fit-in, adaptive-full-fit-in
    #[arg(long)]
    fit_in: Option<FitIn>,

    /// Horizontal crop alignment: left, center, right
    #[arg(long)]
    halign: Option<HAlign>,

    /// Vertical crop alignment: top, middle, bottom
    #[arg(long)]
    valign: Option<VAlign>,

    /// Filter pipeline entry, e.g. quality(80); repeatable
    #[arg(long = "filter")]
    filters: Vec<String>,
}

fn main() {
    // Initialize logging subsystem
    thumbor_urls::logging::init_subscriber().expect("Failed to initialize logging subsystem");

    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration from file, or fall back to the built-in defaults
    let config = match &args.config {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }),
        None => Config::default(),
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    tracing::debug!(
        server = %config.server,
        signing = config.security_key.is_some(),
        aliases = config.aliases.len(),
        "Configuration loaded"
    );

    let overrides = Arguments {
        width: args.width,
        height: args.height,
        smart: args.smart.then_some(true),
        fit_in: args.fit_in,
        halign: args.halign,
        valign: args.valign,
        filters: if args.filters.is_empty() {
            None
        } else {
            Some(args.filters.clone())
        },
        ..Default::default()
    };

    let generator = UrlGenerator::new(config);
    match generator.generate(&args.image_url, args.alias.as_deref(), &overrides) {
        Ok(url) => println!("{}", url),
        Err(e) => {
            eprintln!("Failed to generate URL: {}", e);
            std::process::exit(1);
        }
    }
}
