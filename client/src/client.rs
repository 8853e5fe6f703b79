use std::time::Duration;

use common::{GenericWriteClient, Sample, WriteRequest};
use log::{debug, info};
use tokio::time::Instant;
use tonic::{
    Code, Request, Status,
    transport::{Channel, Endpoint},
};

use crate::encode::encode;
use crate::error::ClientError;

/// Sends sample batches to a generic write server, one call per batch.
///
/// Cloning is cheap and clones share the underlying channel.
#[derive(Clone, Debug)]
pub struct WriteClient {
    client: GenericWriteClient<Channel>,
    timeout: Duration,
}

impl WriteClient {
    /// Creates a client for `address` (`host:port` or a full `http://` URI).
    ///
    /// The channel connects lazily, so an unreachable server is not an error
    /// here; the transport keeps reconnecting in the background. Must be
    /// called from within a Tokio runtime.
    pub fn new(address: &str, timeout: Duration) -> Result<Self, ClientError> {
        let channel = Endpoint::from_shared(endpoint_uri(address))?
            .connect_timeout(timeout)
            .connect_lazy();

        info!("Created generic write client for {address} (timeout {timeout:?})");

        Ok(Self {
            client: GenericWriteClient::new(channel),
            timeout,
        })
    }

    /// Sends `samples` in a single `Write` call bounded by the client timeout.
    ///
    /// The deadline travels to the server as `grpc-timeout` and is also
    /// enforced locally, so expiry always reports `DeadlineExceeded`.
    pub async fn store(&self, samples: &[Sample]) -> Result<(), ClientError> {
        let deadline = Instant::now() + self.timeout;
        let request = self.write_request(samples);
        let mut client = self.client.clone();

        debug!("Writing {} series", samples.len());

        match tokio::time::timeout_at(deadline, client.write(request)).await {
            Ok(Ok(_)) => Ok(()),
            // tonic servers answer an expired grpc-timeout with Cancelled
            Ok(Err(status)) if status.code() == Code::Cancelled && Instant::now() >= deadline => {
                Err(self.deadline_exceeded())
            }
            Ok(Err(status)) => Err(status.into()),
            Err(_) => Err(self.deadline_exceeded()),
        }
    }

    fn write_request(&self, samples: &[Sample]) -> Request<WriteRequest> {
        let mut request = Request::new(encode(samples));
        request.set_timeout(self.timeout);
        request
    }

    fn deadline_exceeded(&self) -> ClientError {
        Status::deadline_exceeded(format!(
            "write did not complete within {:?}",
            self.timeout
        ))
        .into()
    }

    pub fn name(&self) -> &'static str {
        "generic"
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn endpoint_uri(address: &str) -> String {
    if address.contains("://") {
        address.to_string()
    } else {
        format!("http://{address}")
    }
}
