use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Arg, Command};
use cosmic_portfolio::config::{ClientOptions, ContentConfig};
use cosmic_portfolio::error::{Error, Result};
use cosmic_portfolio::page::PageKind;
use cosmic_portfolio::Portfolio;

fn cli() -> Command<'static> {
    Command::new("portfolio-render")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render the portfolio from a Cosmic bucket as static HTML")
        .arg(
            Arg::new("project")
                .short('p')
                .long("project")
                .value_name("SLUG")
                .takes_value(true)
                .help("Render the detail page of one project instead of the home page"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .takes_value(true)
                .help("Write the page to FILE instead of stdout"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .takes_value(true)
                .help("Per-request timeout"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Fail early when the bucket configuration is incomplete"),
        )
}

async fn run() -> Result<PageKind> {
    let matches = cli().get_matches();

    let mut config = ContentConfig::from_env();
    if let Some(seconds) = matches.value_of("timeout") {
        let seconds: u64 = seconds
            .parse()
            .map_err(|_| Error::config(format!("Invalid timeout: {}", seconds)))?;
        let options: ClientOptions = config.options.clone();
        config = config.with_options(options.with_request_timeout(Some(Duration::from_secs(seconds))));
    }
    if matches.is_present("check") {
        config.validate()?;
    }
    tracing::debug!(?config, "loaded configuration");

    let portfolio = Portfolio::new(&config)?;
    let page = match matches.value_of("project") {
        Some(slug) => portfolio.render_project(slug).await?,
        None => portfolio.render_home().await?,
    };

    match matches.value_of("output").map(PathBuf::from) {
        Some(path) => {
            std::fs::write(&path, &page.html)?;
            tracing::info!(path = %path.display(), kind = ?page.kind, "page written");
        }
        None => println!("{}", page.html),
    }
    Ok(page.kind)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(PageKind::Home | PageKind::Project) => ExitCode::SUCCESS,
        Ok(kind) => {
            tracing::warn!(status = kind.status_code(), "rendered {:?} page", kind);
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
