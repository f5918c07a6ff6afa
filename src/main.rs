//! SATY Navigation CLI
//!
//! Command-line interface for the shared navigation bar:
//! - Render the bar for a page path
//! - Inspect how a path resolves
//! - Inject the bar into a static site
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use saty_nav::{
    generate_default_config, inject_site, Config, InjectOptions, LoggingConfig, NavigationWidget,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "saty-nav")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Shared navigation bar for the SATY Analytics pages")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the navigation for a page path
    Render {
        /// URL path of the page, e.g. /pages/ml.html
        #[arg(short, long, default_value = "/index.html")]
        path: String,
        /// Print the stylesheet instead of the markup
        #[arg(long)]
        css: bool,
        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: OutputFormat,
    },

    /// Show the section, base path, and body class a path resolves to
    Page {
        /// URL path of the page
        #[arg(short, long)]
        path: String,
    },

    /// Inject the navigation into every HTML page under a site root
    Inject {
        /// Site root directory
        root: PathBuf,
        /// Write pages here instead of rewriting them in place
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load failures are returned, not logged: no subscriber exists yet
    let (config, source) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, Some(path.clone())),
        None => Config::load_default()?,
    };
    init_logging(&config.logging);

    tracing::debug!("SATY Navigation v{}", env!("CARGO_PKG_VERSION"));
    match &source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::debug!("Using default config with environment overrides"),
    }

    match cli.command {
        Commands::Render { path, css, format } => {
            let widget = NavigationWidget::with_config(&path, &config.nav);
            match format {
                OutputFormat::Html if css => print!("{}", widget.generate_nav_css()),
                OutputFormat::Html => println!("{}", widget.generate_nav_html()),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&widget.snapshot(css))?);
                }
            }
        }

        Commands::Page { path } => {
            let widget = NavigationWidget::with_config(&path, &config.nav);
            let page = widget.current_page();
            println!("page:       {}", page);
            println!("base path:  {:?}", widget.base_path().prefix());
            println!("body class: {}", page.body_class());
            for entry in widget.pages() {
                let marker = if entry.id == page { "*" } else { " " };
                println!("{} {:<12} {}", marker, entry.label, entry.href);
            }
        }

        Commands::Inject { root, out, dry_run } => {
            let options = InjectOptions {
                output_dir: out,
                dry_run,
            };
            let report = inject_site(&root, &config.nav, &config.site, &options)
                .with_context(|| format!("injecting navigation into {}", root.display()))?;

            println!(
                "{} pages scanned: {} updated, {} unchanged, {} skipped{}",
                report.scanned,
                report.updated,
                report.unchanged,
                report.skipped,
                if dry_run { " (dry run)" } else { "" }
            );
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Install the tracing subscriber. `RUST_LOG` wins over the configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("saty_nav={}", logging.level)));

    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries command output; logs go to stderr
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_arguments() {
        let cli = Cli::try_parse_from(["saty-nav", "render", "--path", "/pages/ml.html", "--css", "-f", "json"]).unwrap();
        match cli.command {
            Commands::Render { path, css, format } => {
                assert_eq!(path, "/pages/ml.html");
                assert!(css);
                assert!(matches!(format, OutputFormat::Json));
            }
            _ => panic!("expected render"),
        }

        let cli = Cli::try_parse_from(["saty-nav", "render"]).unwrap();
        match cli.command {
            Commands::Render { path, css, format } => {
                assert_eq!(path, "/index.html");
                assert!(!css);
                assert!(matches!(format, OutputFormat::Html));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_global_config_and_inject_arguments() {
        let cli = Cli::try_parse_from(["saty-nav", "inject", "site", "--out", "dist", "--dry-run", "-c", "nav.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("nav.toml")));
        match cli.command {
            Commands::Inject { root, out, dry_run } => {
                assert_eq!(root, PathBuf::from("site"));
                assert_eq!(out, Some(PathBuf::from("dist")));
                assert!(dry_run);
            }
            _ => panic!("expected inject"),
        }
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["saty-nav", "render", "--format", "xml"]).is_err());
        assert!(Cli::try_parse_from(["saty-nav", "page"]).is_err());
    }
}
