//! engg.pk content portal
//!
//! Renders one page of the portal to stdout: a listing filtered by the given
//! search text and selectors, a single record, or one of the static pages.

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use enggpk_portal::config::{Config, LogFormat};
use enggpk_portal::errors::ErrorResponse;
use enggpk_portal::{
    build_page, render, store, AppError, OutputFormat, PageRequest, Route, ROUTES,
};

#[derive(Parser)]
#[command(name = "enggpk")]
#[command(about = "Browse the engg.pk engineering community portal")]
struct Cli {
    /// Page path, e.g. /jobs
    #[arg(default_value = "/")]
    path: String,
    /// Free-text search (case-insensitive substring)
    #[arg(long, short)]
    search: Option<String>,
    /// Selector value as AXIS=VALUE, e.g. type=Internship
    #[arg(long = "filter", short = 'f', value_parser = parse_filter)]
    filters: Vec<(String, String)>,
    /// Show a single record by id
    #[arg(long)]
    id: Option<String>,
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,
    /// Reject selector values that are not among the page's options
    #[arg(long, default_value_t = false)]
    strict: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List every page path
    Routes,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((axis, value)) if !axis.trim().is_empty() => {
            Ok((axis.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected AXIS=VALUE, got '{}'", raw)),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    init_tracing(&config);

    let format = OutputFormat::from(cli.format);
    match run(cli, &config) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!("Request failed: {}", err);
            let body = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&ErrorResponse::new(&err)).ok(),
                OutputFormat::Text => None,
            };
            match body {
                Some(body) => println!("{}", body),
                None => eprintln!("{}", err),
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_tracing(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn run(cli: Cli, config: &Config) -> Result<String, AppError> {
    if let Some(Command::Routes) = cli.command {
        let mut out = String::new();
        for route in ROUTES {
            out.push_str(&format!(
                "{:<14} {:<20} {}\n",
                route.path(),
                route.nav_label(),
                route.page().document_title()
            ));
        }
        return Ok(out);
    }

    let store = store::load(config)?;

    let route = Route::resolve(&cli.path)?;
    tracing::info!(path = route.path(), "Route resolved");

    let request = PageRequest {
        route,
        search: cli.search,
        filters: cli.filters,
        id: cli.id,
        strict: cli.strict || config.strict_filters,
    };

    let page = build_page(&store, &request)?;
    render(&page, cli.format.into())
}
