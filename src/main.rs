use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use zodiac_horoscope::connector::api::controller::SignController;
use zodiac_horoscope::{serve, Commands, Container, ContainerConfig, Router};

#[derive(Parser)]
#[command(name = "zodiac-horoscope")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if dotenv_loaded {
        info!("Loaded environment from .env");
    }

    match cli.command {
        Commands::Sign { day, month } => {
            println!("{}", SignController::new().resolve(day, month)?);
        }

        Commands::Serve { host, port } => {
            let ip: IpAddr = host
                .parse()
                .with_context(|| format!("invalid host address: {host}"))?;
            let container = build_container()?;
            serve(Arc::new(container), SocketAddr::new(ip, port)).await?;
        }

        command => {
            let container = build_container()?;
            let router = Router::new(&container);
            println!("{}", router.route(command).await?);
        }
    }

    Ok(())
}

/// Fails before anything is served when the provider credential is missing.
fn build_container() -> Result<Container> {
    let config = ContainerConfig::from_env()?;
    info!("Using model {} at {}", config.model, config.base_url);
    Ok(Container::new(&config)?)
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["zodiac-horoscope", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 5000);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn sign_takes_day_then_month() {
        let cli = Cli::try_parse_from(["zodiac-horoscope", "sign", "25", "3"]).unwrap();
        match cli.command {
            Commands::Sign { day, month } => assert_eq!((day, month), (25, 3)),
            _ => panic!("expected sign"),
        }
    }

    #[test]
    fn horoscope_requires_year() {
        let res = Cli::try_parse_from(["zodiac-horoscope", "horoscope", "25", "3"]);
        assert!(res.is_err(), "year should be required");
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["zodiac-horoscope", "sign", "1", "1", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }
}
