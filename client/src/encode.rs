use common::{LabelPair, Sample, TimeSeries, WriteRequest, proto};

/// Builds a write request with one single-sample series per input sample.
///
/// Samples sharing a label set are not merged and keep their input order.
pub fn encode(samples: &[Sample]) -> WriteRequest {
    WriteRequest {
        timeseries: samples.iter().map(time_series).collect(),
    }
}

fn time_series(sample: &Sample) -> TimeSeries {
    let labels = sample
        .metric
        .iter()
        .map(|(name, value)| LabelPair {
            name: name.to_string(),
            value: value.to_string(),
        })
        .collect();

    TimeSeries {
        labels,
        samples: vec![proto::Sample {
            value: sample.value,
            timestamp_ms: sample.timestamp_ms,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Metric;

    fn metric(labels: &[(&str, &str)]) -> Metric {
        labels.iter().copied().collect()
    }

    #[test]
    fn empty_batch_encodes_to_empty_request() {
        assert!(encode(&[]).timeseries.is_empty());
    }

    #[test]
    fn single_sample() {
        let request = encode(&[Sample::new(metric(&[("job", "a")]), 1.5, 1000)]);
        assert_eq!(
            request,
            WriteRequest {
                timeseries: vec![TimeSeries {
                    labels: vec![LabelPair {
                        name: "job".into(),
                        value: "a".into(),
                    }],
                    samples: vec![proto::Sample {
                        value: 1.5,
                        timestamp_ms: 1000,
                    }],
                }],
            }
        );
    }

    #[test]
    fn one_series_per_sample_without_coalescing() {
        let up = metric(&[("__name__", "up"), ("job", "a")]);
        let batch = vec![
            Sample::new(up.clone(), 1.0, 3000),
            Sample::new(metric(&[("job", "b")]), 0.0, 1000),
            Sample::new(up.clone(), 2.0, 2000),
        ];

        let request = encode(&batch);
        assert_eq!(request.timeseries.len(), batch.len());

        for (series, sample) in request.timeseries.iter().zip(&batch) {
            assert_eq!(series.labels.len(), sample.metric.len());
            assert_eq!(series.samples.len(), 1);
            assert_eq!(series.samples[0].value, sample.value);
            assert_eq!(series.samples[0].timestamp_ms, sample.timestamp_ms);
        }
        assert_eq!(request.timeseries[0].labels, request.timeseries[2].labels);
    }

    #[test]
    fn labels_follow_name_order() {
        let request = encode(&[Sample::new(
            metric(&[("zone", "eu"), ("__name__", "up"), ("job", "a")]),
            1.0,
            0,
        )]);
        let names: Vec<_> = request.timeseries[0]
            .labels
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(names, ["__name__", "job", "zone"]);
    }

    #[test]
    fn empty_metric_has_no_labels() {
        let request = encode(&[Sample::new(Metric::new(), 3.0, 7)]);
        assert!(request.timeseries[0].labels.is_empty());
        assert_eq!(request.timeseries[0].samples.len(), 1);
    }
}
