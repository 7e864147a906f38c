use anyhow::Result;
use tokio_util::sync::CancellationToken;

/// Resolves once the process receives SIGINT/SIGTERM (Ctrl+C elsewhere).
pub async fn wait_for_shutdown() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::select! {
            _ = sigterm.recv() => {},
            _ = sigint.recv()  => {},
            _ = tokio::signal::ctrl_c() => {},
        }
        Ok(())
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        Ok(())
    }
}

/// Token cancelled on the first shutdown signal. Must be called inside a Tokio runtime.
pub fn shutdown_token() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        match wait_for_shutdown().await {
            Ok(()) => {
                tracing::info!("shutdown signal received");
                trigger.cancel();
            }
            Err(e) => tracing::warn!(error = %e, "cannot install signal handlers"),
        }
    });
    token
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn token_stays_live_without_signal() {
        let token = shutdown_token();
        let waited = tokio::time::timeout(Duration::from_millis(50), token.cancelled()).await;
        assert!(waited.is_err(), "token must not cancel on its own");
    }
}
