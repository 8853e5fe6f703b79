//! Destinations for decoded series.
//!
//! A [`Sink`] receives one `emit_metric` call per series followed by one
//! `emit_sample` call per sample of that series. Sinks are shared across
//! concurrently handled requests and must be `Send + Sync`.

use std::sync::{Mutex, PoisonError};

use common::{Metric, proto};
use log::info;

pub trait Sink: Send + Sync {
    fn emit_metric(&self, metric: &Metric);
    fn emit_sample(&self, sample: &proto::Sample);
}

/// Formats a sample the way the console and log sinks print it.
///
/// Infinities render as `+Inf` / `-Inf`, the form Prometheus tooling prints.
pub fn sample_line(sample: &proto::Sample) -> String {
    format!("  {} {}", format_value(sample.value), sample.timestamp_ms)
}

fn format_value(value: f64) -> String {
    if value == f64::INFINITY {
        "+Inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{value:.6}")
    }
}

/// Prints series to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn emit_metric(&self, metric: &Metric) {
        println!("{metric}");
    }

    fn emit_sample(&self, sample: &proto::Sample) {
        println!("{}", sample_line(sample));
    }
}

/// Writes series through the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl Sink for LogSink {
    fn emit_metric(&self, metric: &Metric) {
        info!(target: "generic_write::sink", "{metric}");
    }

    fn emit_sample(&self, sample: &proto::Sample) {
        info!(target: "generic_write::sink", "{}", sample_line(sample));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Emitted {
    Metric(Metric),
    Sample(proto::Sample),
}

/// Keeps everything it receives in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    emitted: Mutex<Vec<Emitted>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and returns everything emitted so far.
    pub fn take(&self) -> Vec<Emitted> {
        std::mem::take(&mut *self.emitted.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn push(&self, item: Emitted) {
        self.emitted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(item);
    }
}

impl Sink for MemorySink {
    fn emit_metric(&self, metric: &Metric) {
        self.push(Emitted::Metric(metric.clone()));
    }

    fn emit_sample(&self, sample: &proto::Sample) {
        self.push(Emitted::Sample(sample.clone()));
    }
}
