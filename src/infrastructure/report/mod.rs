//! Reporter implementations.
//!
//! - [`TracingReporter`] - the diagnostic log proper
//! - [`ChannelReporter`] - hands outcomes to whoever is waiting for them

pub mod channel_reporter;
pub mod tracing_reporter;

pub use channel_reporter::ChannelReporter;
pub use tracing_reporter::TracingReporter;
