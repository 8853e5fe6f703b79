use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use common::{METRIC_NAME_LABEL, Metric, Sample};
use generic_write_client::{WriteClient, config};
use log::{info, warn};

fn demo_batch(timestamp_ms: i64) -> Vec<Sample> {
    let up: Metric = [
        (METRIC_NAME_LABEL, "up"),
        ("job", "generic-write-demo"),
        ("instance", "localhost"),
    ]
    .into_iter()
    .collect();
    let requests: Metric = [
        (METRIC_NAME_LABEL, "demo_requests_total"),
        ("job", "generic-write-demo"),
    ]
    .into_iter()
    .collect();

    vec![
        Sample::new(up, 1.0, timestamp_ms),
        Sample::new(requests, 42.0, timestamp_ms),
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let addr = config::server_addr();
    let timeout = config::timeout()?;
    let client = WriteClient::new(&addr, timeout)
        .with_context(|| format!("Failed to create client for {addr}"))?;

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis();
    let batch = demo_batch(i64::try_from(now)?);

    info!(
        "Sending {} samples to {addr} via {} client",
        batch.len(),
        client.name()
    );

    if let Err(e) = client.store(&batch).await {
        warn!("Failed to send batch: {e}");
        return Err(e.into());
    }

    info!("Batch acknowledged");
    Ok(())
}
