use crate::{error, warn};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Cancels `c_tok` on the first process interrupt. Interrupts arriving while the loop
/// is already shutting down are only logged.
pub fn register_interrupt(c_tok: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Unable to listen for interrupts: {e}");
                return;
            }
            if c_tok.is_cancelled() {
                warn!("Interrupt received, shutdown already in progress.");
            } else {
                warn!("Interrupt received, terminating mission.");
                c_tok.cancel();
            }
        }
    })
}
