use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cod4snap::application::{CaptureService, find_player};
use cod4snap::domain::ports::ConsolePort;
use cod4snap::infrastructure::{
    AppConfig, CliArgs, Command, ConfigStore, DiscordWebhook, ImgbbClient, PollingWatcher,
    RconConsole, StdoutFeedback,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

async fn run_players(console: &dyn ConsolePort) -> Result<()> {
    let players = console.status().await?;
    if players.is_empty() {
        println!("No players connected.");
        return Ok(());
    }

    for player in &players {
        let tag = if player.is_bot() { "  [bot]" } else { "" };
        println!("{:>3}  {}{tag}", player.cid(), player.clean_name());
    }
    Ok(())
}

async fn run_capture(
    config: &AppConfig,
    console: Arc<dyn ConsolePort>,
    target: &str,
    requester: &str,
) -> Result<()> {
    config.validate()?;

    let server_label = match &config.server.label {
        Some(label) => label.clone(),
        None => match console.cvar("sv_hostname").await {
            Ok(hostname) => hostname,
            Err(e) => {
                warn!(error = %e, "Could not read sv_hostname, using fallback label");
                "CoD4 Server".to_string()
            }
        },
    };

    let players = console.status().await?;
    let player = find_player(&players, target)?;
    let name = player.clean_name();

    let watcher = Arc::new(PollingWatcher::new(
        config.screenshot_dir()?,
        config.watch.attempts,
        Duration::from_secs(config.watch.interval_secs),
    ));
    let image_host = Arc::new(ImgbbClient::new(
        config.imgbb_api_key()?,
        config.imgbb.link_expire,
    )?);
    let webhook = Arc::new(DiscordWebhook::new(
        config.discord_webhook()?,
        config.discord.username.clone(),
    )?);
    let feedback = Arc::new(StdoutFeedback::new());

    let service = CaptureService::new(
        console,
        watcher,
        image_host,
        webhook,
        feedback,
        server_label,
    );

    let handle = service.request(player, requester).await?;
    println!("Screenshot of {name} was taken.");

    handle.await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();

    let store = ConfigStore::new()?;
    let mut config = store.load_config(args.config.as_deref())?;
    config.merge_with_args(&args);

    init_logging(&config)?;

    info!(version = cod4snap::VERSION, "Starting cod4snap");

    let console: Arc<dyn ConsolePort> = Arc::new(RconConsole::new(
        config.server.rcon_address.clone(),
        config.rcon_password()?,
    ));

    match &args.command {
        Command::Players => run_players(&*console).await,
        Command::Capture { target, requester } => {
            run_capture(&config, console, target, requester).await
        }
    }
}
