use super::SchedulerError;
use std::sync::atomic::{AtomicBool, Ordering};

static LOOP_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Serializes tests that construct a control loop.
#[cfg(test)]
pub(crate) static SERIAL: std::sync::LazyLock<tokio::sync::Mutex<()>> =
    std::sync::LazyLock::new(|| tokio::sync::Mutex::new(()));

/// Proof that the holder is the only control loop in the process.
/// Released when dropped.
#[derive(Debug)]
pub struct InstanceGuard(());

impl InstanceGuard {
    pub fn acquire() -> Result<Self, SchedulerError> {
        LOOP_ACTIVE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self(()))
            .map_err(|_| SchedulerError::AlreadyActive)
    }

    pub fn is_held() -> bool { LOOP_ACTIVE.load(Ordering::Acquire) }
}

impl Drop for InstanceGuard {
    fn drop(&mut self) { LOOP_ACTIVE.store(false, Ordering::Release); }
}
