use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use common::{GenericWrite, GenericWriteServer, WriteRequest, WriteResponse};
use futures_util::StreamExt;
use log::{debug, info};
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tonic::{Request, Response, Status, transport::Server};

use crate::decode::dispatch;
use crate::sink::Sink;

/// `GenericWrite` handler. Holds nothing but the sink, so one value serves
/// every concurrent call.
#[derive(Clone)]
pub struct WriteReceiver {
    sink: Arc<dyn Sink>,
}

impl WriteReceiver {
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self { sink }
    }

    pub fn into_service(self) -> GenericWriteServer<Self> {
        GenericWriteServer::new(self)
    }
}

#[tonic::async_trait]
impl GenericWrite for WriteReceiver {
    async fn write(
        &self,
        request: Request<WriteRequest>,
    ) -> Result<Response<WriteResponse>, Status> {
        let request = request.into_inner();
        let samples = dispatch(&request, self.sink.as_ref());
        debug!(
            "Received write with {} series, {} samples",
            request.timeseries.len(),
            samples
        );
        Ok(Response::new(WriteResponse {}))
    }
}

/// Serves `GenericWrite` on `addr` until SIGINT or SIGTERM.
pub async fn run_server(addr: &str, sink: Arc<dyn Sink>) -> Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .with_context(|| format!("invalid listen address: {addr}"))?;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    let handle = signals.handle();

    info!("Listening for generic writes on {addr}");

    let served = Server::builder()
        .add_service(WriteReceiver::new(sink).into_service())
        .serve_with_shutdown(addr, async move {
            signals.next().await;
            info!("Shutdown signal received");
        })
        .await;

    handle.close();
    served.with_context(|| format!("server on {addr} failed"))?;

    info!("Server stopped gracefully");
    Ok(())
}
