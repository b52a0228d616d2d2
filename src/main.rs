use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use freenas_api_client::config::{Config, DEFAULT_LIMIT, DEFAULT_OFFSET};
use freenas_api_client::jails::{JailApi, MountpointApi, TemplateApi};
use freenas_api_client::storage::{DatasetApi, DiskApi, ScrubApi, SnapshotApi, TaskApi, VolumeApi};
use freenas_api_client::{FreeNasClient, WebsocketClient};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/Default.toml")]
    config: String,

    /// FreeNAS host (overrides config)
    #[arg(long, env = "FREENAS_HOSTNAME")]
    hostname: Option<String>,

    /// Basic auth username (overrides config)
    #[arg(long, env = "FREENAS_USERNAME")]
    username: Option<String>,

    /// Basic auth password (overrides config)
    #[arg(long, env = "FREENAS_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Maximum number of entries to list
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: u32,

    /// Offset of the first listed entry
    #[arg(long, default_value_t = DEFAULT_OFFSET)]
    offset: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Volumes,
    /// Datasets of a volume
    Datasets {
        volume: String,
    },
    Disks,
    Scrubs,
    Snapshots,
    /// Periodic snapshot tasks
    Tasks,
    Jails,
    Templates,
    Mountpoints,
    /// Call a WebSocket (v2.0) API method, e.g. `system.info`
    Call {
        method: String,
        /// JSON-encoded parameters
        params: Option<String>,
    },
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn call_websocket(
    config: &Config,
    method: &str,
    params: Option<&str>,
) -> Result<serde_json::Value> {
    let params: Option<serde_json::Value> = params
        .map(serde_json::from_str)
        .transpose()
        .context("Parameters are not valid JSON")?;

    let websocket = config.websocket.clone().unwrap_or_default();
    let client = WebsocketClient::from_config(&config.freenas, &websocket);
    client.connect().await?;
    let result = client.call(method, params).await;
    client.disconnect().await?;
    Ok(result?)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = Config::load(&args.config)?;

    // Override with CLI arguments if provided
    if let Some(hostname) = args.hostname {
        config.freenas.hostname = hostname;
    }
    if let Some(username) = args.username {
        config.freenas.username = Some(username);
    }
    if let Some(password) = args.password {
        config.freenas.password = Some(secrecy::SecretString::from(password));
    }

    info!("FreeNAS host: {}", config.freenas.hostname);

    let client = FreeNasClient::new(&config.freenas).context("Failed to create client")?;
    let storage = client.storage();
    let jails = client.jails();
    let (limit, offset) = (args.limit, args.offset);

    match args.command {
        Command::Volumes => print_json(&storage.get_volumes(limit, offset).await?),
        Command::Datasets { volume } => {
            print_json(&storage.get_datasets(&volume, limit, offset).await?)
        }
        Command::Disks => print_json(&storage.get_disks(limit, offset).await?),
        Command::Scrubs => print_json(&storage.get_scrubs(limit, offset).await?),
        Command::Snapshots => print_json(&storage.get_snapshots(limit, offset).await?),
        Command::Tasks => print_json(&storage.get_tasks(limit, offset).await?),
        Command::Jails => print_json(&jails.get_jails(limit, offset).await?),
        Command::Templates => print_json(&jails.get_templates(limit, offset).await?),
        Command::Mountpoints => print_json(&jails.get_mountpoints(limit, offset).await?),
        Command::Call { method, params } => {
            print_json(&call_websocket(&config, &method, params.as_deref()).await?)
        }
    }
}
