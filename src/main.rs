use anyhow::Result;
use generic_write::{config, run_server};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let sink = config::sink_kind()?;
    info!("Starting generic write server with {sink:?} sink...");

    run_server(&config::listen_addr(), sink.build()).await
}
