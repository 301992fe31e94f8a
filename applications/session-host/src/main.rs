/// Soul Session Host - headless playback session service
use clap::Parser;
use soul_session_host::{Flow, HostCommand, HostConfig, SessionHost};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "soul-session-host")]
#[command(about = "Headless playback session service driven from stdin", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "SOUL_SESSION_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the resume record
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Refuse every foreground promotion
    #[arg(long)]
    deny_foreground: bool,

    /// Run without notification permission
    #[arg(long)]
    no_notification_permission: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "soul_session=info,soul_storage=info,soul_session_host=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = HostConfig::load(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }
    if cli.deny_foreground {
        config.platform.deny_foreground = true;
    }
    if cli.no_notification_permission {
        config.platform.notification_permission = false;
    }
    config.validate()?;

    tracing::info!("Starting Soul Session Host");
    tracing::info!("Data directory: {}", config.storage.data_dir.display());

    let mut host = SessionHost::open(&config, true)?;
    host.start()?;

    run(&mut host).await?;

    host.shutdown();
    tracing::info!("Soul Session Host stopped");
    Ok(())
}

/// Feed stdin lines to the host until quit, EOF, Ctrl-C or termination
async fn run(host: &mut SessionHost) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("Input closed");
                    return Ok(());
                };

                let command = match HostCommand::parse(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(e) => {
                        tracing::warn!("{}", e);
                        continue;
                    }
                };

                match host.execute(command) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Exit) => return Ok(()),
                    Err(e) => tracing::warn!("{}", e),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                return Ok(());
            }
        }
    }
}
