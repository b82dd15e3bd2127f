use strum_macros::Display;

/// Lifecycle of the control loop, published through a `watch` channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LoopState {
    Running,
    CancelRequested,
    Stopped,
}
