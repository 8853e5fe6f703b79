use common::{LabelPair, Metric, WriteRequest};

use crate::sink::Sink;

/// Builds a metric from wire labels. A repeated name keeps its last value.
pub fn metric_from_labels(labels: &[LabelPair]) -> Metric {
    labels
        .iter()
        .map(|label| (label.name.as_str(), label.value.as_str()))
        .collect()
}

/// Hands every series of `request` to `sink` in request order and returns the
/// number of samples dispatched.
///
/// Nothing is validated: empty label sets, NaN values and out-of-order
/// timestamps are passed through as received.
pub fn dispatch(request: &WriteRequest, sink: &dyn Sink) -> usize {
    let mut samples = 0;
    for series in &request.timeseries {
        sink.emit_metric(&metric_from_labels(&series.labels));
        for sample in &series.samples {
            sink.emit_sample(sample);
        }
        samples += series.samples.len();
    }
    samples
}
