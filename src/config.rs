use std::env;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Result, anyhow};

use crate::sink::{ConsoleSink, LogSink, Sink};

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:1234";

pub const LISTEN_ADDR_ENV: &str = "GENERIC_WRITE_LISTEN_ADDR";

pub const SINK_ENV: &str = "GENERIC_WRITE_SINK";

pub fn listen_addr() -> String {
    env::var(LISTEN_ADDR_ENV).unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
}

/// Where the server writes decoded series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SinkKind {
    #[default]
    Console,
    Log,
}

impl SinkKind {
    pub fn build(self) -> Arc<dyn Sink> {
        match self {
            SinkKind::Console => Arc::new(ConsoleSink),
            SinkKind::Log => Arc::new(LogSink),
        }
    }
}

impl FromStr for SinkKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(SinkKind::Console),
            "log" => Ok(SinkKind::Log),
            other => Err(anyhow!(
                "{SINK_ENV} must be \"console\" or \"log\", got {other:?}"
            )),
        }
    }
}

pub fn sink_kind() -> Result<SinkKind> {
    match env::var(SINK_ENV) {
        Ok(raw) => raw.parse(),
        Err(_) => Ok(SinkKind::default()),
    }
}
