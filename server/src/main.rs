mod broadcaster;
mod id_generator;
mod relay;
mod server_config;
mod web_server;
mod ws_handler;

use clap::Parser;
use std::path::PathBuf;

use common::{log, logger};

use broadcaster::Broadcaster;
use relay::RoomRelay;
use server_config::ServerConfig;
use web_server::run_web_server;

#[derive(Parser)]
#[command(name = "tictactoe_server")]
struct Args {
    /// Path to a YAML config file; defaults apply when absent.
    #[arg(long)]
    config: Option<String>,

    /// Overrides the bind address from the config.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_logger();

    let mut config = ServerConfig::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_address = bind;
        config.validate()?;
    }

    let relay = RoomRelay::new(config.room_id_length);
    let broadcaster = Broadcaster::new();

    log!("Tic-tac-toe relay server starting");

    run_web_server(
        relay,
        broadcaster,
        config.bind_address,
        PathBuf::from(config.static_files_path),
    )
    .await;

    Ok(())
}
