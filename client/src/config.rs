use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_SERVER_ADDR: &str = "http://127.0.0.1:1234";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const SERVER_ADDR_ENV: &str = "GENERIC_WRITE_SERVER_ADDR";

pub const TIMEOUT_ENV: &str = "GENERIC_WRITE_TIMEOUT_MS";

pub fn server_addr() -> String {
    env::var(SERVER_ADDR_ENV).unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string())
}

pub fn timeout() -> Result<Duration> {
    match env::var(TIMEOUT_ENV) {
        Ok(raw) => parse_timeout_ms(&raw),
        Err(_) => Ok(DEFAULT_TIMEOUT),
    }
}

fn parse_timeout_ms(raw: &str) -> Result<Duration> {
    let ms = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{TIMEOUT_ENV} must be a number of milliseconds, got {raw:?}"))?;
    Ok(Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_milliseconds() {
        assert_eq!(parse_timeout_ms("250").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_timeout_ms(" 5 ").unwrap(), Duration::from_millis(5));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timeout_ms("10s").is_err());
        assert!(parse_timeout_ms("-1").is_err());
    }
}
