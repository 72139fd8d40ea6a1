//! Daemon configuration, read once from the environment at startup

use anyhow::{anyhow, Context, Result};
use notify_core::application::worker::constants::DEFAULT_ENQUEUE_TIMEOUT;
use notify_core::domain::{QueueConfig, DEFAULT_QUEUE_SIZE, DEFAULT_WORKERS};
use notify_infra_rpc::DEFAULT_REQUEST_TIMEOUT;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 12000;
const DEFAULT_PRESENCE_URL: &str = "http://127.0.0.1:12001";
const DEFAULT_SOCKET_URL: &str = "http://127.0.0.1:12002";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct DaemonConfig {
    pub queue: QueueConfig,
    pub rpc_host: String,
    pub rpc_port: u16,
    pub enqueue_timeout: Duration,
    pub presence_url: String,
    pub socket_url: String,
    pub downstream_timeout: Duration,
    pub call_timeout: Option<Duration>,
    pub log_format: LogFormat,
}

impl DaemonConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys take their defaults,
    /// malformed values are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let workers = parse_or(&lookup, "NOTIFY_WORKERS", DEFAULT_WORKERS)?;
        let capacity = parse_or(&lookup, "NOTIFY_QUEUE_SIZE", DEFAULT_QUEUE_SIZE)?;
        let queue = QueueConfig::new(workers, capacity);
        queue.validate().map_err(|e| anyhow!("{}", e))?;

        let enqueue_timeout = parse_opt::<u64, _>(&lookup, "NOTIFY_ENQUEUE_TIMEOUT_MS")?
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_ENQUEUE_TIMEOUT);
        let downstream_timeout = parse_opt::<u64, _>(&lookup, "NOTIFY_DOWNSTREAM_TIMEOUT_MS")?
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        let call_timeout =
            parse_opt::<u64, _>(&lookup, "NOTIFY_CALL_TIMEOUT_MS")?.map(Duration::from_millis);

        let log_format = match lookup("NOTIFY_LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(anyhow!(
                    "NOTIFY_LOG_FORMAT must be 'json' or 'pretty', got '{}'",
                    other
                ))
            }
        };

        Ok(Self {
            queue,
            rpc_host: lookup("NOTIFY_RPC_HOST").unwrap_or_else(|| DEFAULT_RPC_HOST.to_string()),
            rpc_port: parse_or(&lookup, "NOTIFY_RPC_PORT", DEFAULT_RPC_PORT)?,
            enqueue_timeout,
            presence_url: lookup("NOTIFY_PRESENCE_URL")
                .unwrap_or_else(|| DEFAULT_PRESENCE_URL.to_string()),
            socket_url: lookup("NOTIFY_SOCKET_URL")
                .unwrap_or_else(|| DEFAULT_SOCKET_URL.to_string()),
            downstream_timeout,
            call_timeout,
            log_format,
        })
    }
}

fn parse_opt<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("invalid value for {}: '{}'", key, raw))
        })
        .transpose()
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_opt(lookup, key)?.unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<DaemonConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DaemonConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.queue.worker_count, 10);
        assert_eq!(config.queue.capacity, 100);
        assert_eq!(config.rpc_host, "127.0.0.1");
        assert_eq!(config.rpc_port, 12000);
        assert_eq!(config.enqueue_timeout, Duration::from_secs(1));
        assert_eq!(config.downstream_timeout, Duration::from_secs(5));
        assert_eq!(config.call_timeout, None);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("NOTIFY_WORKERS", "4"),
            ("NOTIFY_QUEUE_SIZE", "8"),
            ("NOTIFY_RPC_PORT", "13000"),
            ("NOTIFY_CALL_TIMEOUT_MS", "250"),
            ("NOTIFY_PRESENCE_URL", "http://presence:1"),
            ("NOTIFY_LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.queue, QueueConfig::new(4, 8));
        assert_eq!(config.rpc_port, 13000);
        assert_eq!(config.call_timeout, Some(Duration::from_millis(250)));
        assert_eq!(config.presence_url, "http://presence:1");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_malformed_number_is_rejected() {
        let err = config(&[("NOTIFY_WORKERS", "ten")]).unwrap_err();
        assert!(err.to_string().contains("NOTIFY_WORKERS"));
    }

    #[test]
    fn test_zero_workers_is_rejected() {
        assert!(config(&[("NOTIFY_WORKERS", "0")]).is_err());
        assert!(config(&[("NOTIFY_QUEUE_SIZE", "0")]).is_err());
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        assert!(config(&[("NOTIFY_LOG_FORMAT", "xml")]).is_err());
    }
}
