//! Wire schema and metric model shared by the generic write server and client.

pub mod model;

pub mod proto {
    tonic::include_proto!("generic");
}

pub use model::{METRIC_NAME_LABEL, Metric, Sample};
pub use proto::{
    LabelPair, TimeSeries, WriteRequest, WriteResponse,
    generic_write_client::GenericWriteClient,
    generic_write_server::{GenericWrite, GenericWriteServer},
};
