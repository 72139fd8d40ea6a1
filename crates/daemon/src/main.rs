//! Notify Service - Main Entry Point

mod config;
mod telemetry;

use anyhow::{Context, Result};
use config::{DaemonConfig, LogFormat};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use notify_api_rpc::{RpcServer, RpcServerConfig};
use notify_core::application::worker::constants::SHUTDOWN_DRAIN_TIMEOUT;
use notify_core::application::{ChannelQueue, FanOutHandler};
use notify_core::port::TracingReporter;
use notify_infra_rpc::{ClientConfig, RpcDeviceSender, RpcPresenceResolver};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration (malformed values abort startup)
    let config = DaemonConfig::from_env()?;

    // 2. Initialize logging
    init_logging(config.log_format)?;
    info!("Notify Service v{} starting...", VERSION);

    // 3. Downstream clients
    let presence = RpcPresenceResolver::new(
        &ClientConfig::new(&config.presence_url).with_request_timeout(config.downstream_timeout),
    )
    .context("Presence client creation failed")?;
    let sockets = RpcDeviceSender::new(
        &ClientConfig::new(&config.socket_url).with_request_timeout(config.downstream_timeout),
    )
    .context("Socket client creation failed")?;

    // 4. Fan-out handler (DI wiring)
    let mut handler = FanOutHandler::new(
        Arc::new(presence),
        Arc::new(sockets),
        Arc::new(TracingReporter),
    );
    if let Some(limit) = config.call_timeout {
        handler = handler.with_call_timeout(limit);
    }

    // 5. Queue + workers
    let queue = Arc::new(ChannelQueue::new(config.queue)?);
    info!(
        workers = config.queue.worker_count,
        capacity = config.queue.capacity,
        presence_url = %config.presence_url,
        socket_url = %config.socket_url,
        "Starting queue..."
    );

    let queue_task = {
        let queue = queue.clone();
        let handler = Arc::new(handler);
        tokio::spawn(async move {
            if let Err(e) = queue.start(handler).await {
                error!(error = %e, "Queue failed");
            }
        })
    };

    // 6. Start JSON-RPC server
    let rpc_config = RpcServerConfig {
        host: config.rpc_host.clone(),
        port: config.rpc_port,
        enqueue_timeout: config.enqueue_timeout,
    };
    let (addr, rpc_handle) = RpcServer::new(rpc_config, queue.clone())
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    info!(addr = %addr, "System ready. Waiting for messages...");
    info!("Press Ctrl+C to shutdown");

    // 7. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Draining queue...");

    // 8. Graceful shutdown: stop intake first, then let workers drain
    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;
    queue.close();

    match tokio::time::timeout(SHUTDOWN_DRAIN_TIMEOUT, queue_task).await {
        Ok(_) => info!("Shutdown complete."),
        Err(_) => warn!(
            timeout_secs = SHUTDOWN_DRAIN_TIMEOUT.as_secs(),
            buffered = queue.stats().buffered,
            "Drain timed out; exiting with messages still buffered"
        ),
    }

    telemetry::shutdown_telemetry();
    Ok(())
}

/// Install the single global subscriber: env filter, fmt output and the
/// optional OTLP layer.
fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("notify=info"))
        .context("Failed to create env filter")?;

    let endpoint = telemetry::otlp_endpoint();
    let (otel, otel_error) = match endpoint.as_deref().map(telemetry::init_telemetry) {
        Some(Ok(layer)) => (layer, None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };
    let otel_attached = otel.is_some();

    let registry = tracing_subscriber::registry().with(otel).with(env_filter);
    match format {
        LogFormat::Json => {
            // Production: JSON structured logging
            registry.with(fmt::layer().json()).init();
        }
        LogFormat::Pretty => {
            registry.with(fmt::layer().pretty()).init();
        }
    }

    match (endpoint, otel_error) {
        (None, _) => {
            tracing::debug!("OpenTelemetry not configured (OTEL_EXPORTER_OTLP_ENDPOINT not set)")
        }
        (Some(endpoint), Some(e)) => warn!(
            endpoint = %endpoint,
            error = ?e,
            "Failed to initialize OpenTelemetry (continuing without it)"
        ),
        (Some(endpoint), None) if otel_attached => {
            info!(endpoint = %endpoint, "OpenTelemetry export enabled")
        }
        (Some(endpoint), None) => warn!(
            endpoint = %endpoint,
            "OpenTelemetry endpoint set but feature 'telemetry' not enabled"
        ),
    }

    Ok(())
}
