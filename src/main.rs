use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use nowplaying_bridge::config::{AppConfig, Environment};
use nowplaying_bridge::doctor::check_automation;
use nowplaying_bridge::helper::paths;
use nowplaying_bridge::logging;
use nowplaying_bridge::runner::SystemRunner;
use nowplaying_bridge::server::{self, AppState};

/// HTTP bridge for Music and Spotify now-playing state 🎵
#[derive(Parser, Debug)]
#[command(name = "nowplaying-bridge", version, about)]
struct Args {
    /// Config file (default: <config dir>/nowplaying-bridge/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Listen address, overrides `server.bind`
    #[arg(long, env = "NOWPLAYING_BIND", global = true)]
    bind: Option<SocketAddr>,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Default)]
enum Command {
    /// Serve the HTTP endpoint (default)
    #[default]
    Serve,
    /// Print the resolved helper interpreter, script and cover directory
    Paths,
    /// Script every app once so macOS asks for automation permission
    CheckAutomation,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    human_panic::setup_panic!();

    let args = Args::parse();
    let _log_guard = logging::init(args.log_dir.as_deref())?;

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    let env = Environment::from_process();

    match args.command.unwrap_or_default() {
        Command::Serve => {
            let addr = config.server.bind;
            let state = AppState::new(config, env, Arc::new(SystemRunner));
            server::serve(state, addr).await?;
            info!("Bridge stopped");
        }
        Command::Paths => match paths::resolve(&config, &env) {
            Ok(resolved) => {
                println!("interpreter: {}", resolved.interpreter.display());
                println!("script:      {}", resolved.script.display());
                println!("covers:      {}", resolved.covers_dir.display());
            }
            Err(err) => {
                eprintln!("{err}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::CheckAutomation => {
            let steps = tokio::task::spawn_blocking(|| check_automation(&SystemRunner)).await?;
            let mut failed = false;
            for step in &steps {
                match &step.outcome {
                    Ok(output) => println!("{:<14} ok   {}", step.label, output),
                    Err(err) => {
                        failed = true;
                        println!("{:<14} FAIL {}", step.label, err);
                    }
                }
            }
            if failed {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
