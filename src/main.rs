use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use royale_tools::calculate::{compute_card_stats, compute_war_stats, estimate_deck_strength, win_rate};
use royale_tools::client::{ApiConfig, ClientError, DataSource, RoyaleClient};
use royale_tools::config::AppConfig;
use royale_tools::report;

#[derive(Parser)]
#[command(name = "royale-tools")]
#[command(about = "Clash Royale clan management toolkit")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a player's profile summary
    Player {
        /// Player tag (defaults to player_tag from the config)
        #[arg(long)]
        tag: Option<String>,
    },

    /// Show a player's card collection progression
    Cards {
        /// Player tag (defaults to player_tag from the config)
        #[arg(long)]
        tag: Option<String>,
    },

    /// Show a player's upcoming chest cycle
    Chests {
        /// Player tag (defaults to player_tag from the config)
        #[arg(long)]
        tag: Option<String>,
    },

    /// Show a player's clan war performance and deck estimate
    War {
        /// Player tag (defaults to player_tag from the config)
        #[arg(long)]
        tag: Option<String>,

        /// Clan tag (defaults to clan_tag from the config)
        #[arg(long)]
        clan: Option<String>,
    },
}

/// Pick the tag from the flag or the configured default.
fn resolve_tag(flag: Option<String>, configured: &Option<String>, what: &str) -> Result<String> {
    match flag.or_else(|| configured.clone()) {
        Some(tag) => Ok(tag),
        None => bail!("No {what} given: pass --{what} or set it in the config file"),
    }
}

fn build_client(config: &AppConfig) -> Result<RoyaleClient> {
    let client = RoyaleClient::new(ApiConfig {
        base_url: config.api.base_url.clone(),
        token: config.api.token.clone(),
        timeout: Duration::from_secs(config.api.timeout_seconds),
    })
    .context("Failed to create API client")?;
    Ok(client)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    config.validate().context("Invalid configuration")?;

    match cli.command {
        Commands::Player { tag } => {
            let tag = resolve_tag(tag, &config.player_tag, "tag")?;
            let client = build_client(&config)?;

            let profile = client.fetch_player(&tag).await?;
            print!("{}", report::render_player(&profile));
        }

        Commands::Cards { tag } => {
            let tag = resolve_tag(tag, &config.player_tag, "tag")?;
            let client = build_client(&config)?;

            let profile = client.fetch_player(&tag).await?;
            let catalog = client.fetch_card_catalog().await?;
            let stats = compute_card_stats(&profile.cards, &catalog)?;
            print!("{}", report::render_card_report(&stats));
        }

        Commands::Chests { tag } => {
            let tag = resolve_tag(tag, &config.player_tag, "tag")?;
            let client = build_client(&config)?;

            let chests = client.fetch_upcoming_chests(&tag).await?;
            print!("{}", report::render_chests(&chests));
        }

        Commands::War { tag, clan } => {
            let tag = resolve_tag(tag, &config.player_tag, "tag")?;
            let clan = resolve_tag(clan, &config.clan_tag, "clan")?;
            let client = build_client(&config)?;

            let profile = client.fetch_player(&tag).await?;
            let catalog = client.fetch_card_catalog().await?;
            let war_log = client.fetch_war_log(&clan).await?;

            // A clan outside war season has no current race
            let current = match client.fetch_current_war(&clan).await {
                Ok(race) => Some(race),
                Err(ClientError::NotFound { .. }) => {
                    tracing::warn!("No current river race for {}", clan);
                    None
                }
                Err(e) => return Err(e.into()),
            };

            let war_report = compute_war_stats(&tag, &clan, &war_log, current.as_ref());
            let card_stats = compute_card_stats(&profile.cards, &catalog)?;
            let estimate = estimate_deck_strength(
                &card_stats.best32,
                win_rate(profile.wins, profile.losses),
            );
            print!("{}", report::render_war_report(&war_report, &estimate));
        }
    }

    Ok(())
}
