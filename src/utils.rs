//! Process-level helpers.

use tokio::signal;
use tracing::{info, warn};

/// Resolve once the process receives Ctrl+C or SIGTERM.
///
/// Used as the graceful-shutdown trigger for `axum::serve`. If a signal
/// handler cannot be installed, the failure is logged and that signal is
/// never observed; the server keeps running and can still be stopped by the
/// other signal. A running service is not aborted over a handler
/// registration failure.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Ctrl+C handler unavailable: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("SIGTERM handler unavailable: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_shutdown_signal_pends_until_signaled() {
        let result = tokio::time::timeout(Duration::from_millis(50), shutdown_signal()).await;

        assert!(
            result.is_err(),
            "shutdown_signal should stay pending while no signal arrives"
        );
    }
}
