//! SMTP probe core: handshake stage table, session transport, probe
//! engine, host iteration and catch-all detection.
//!
//! One verification drives at most one SMTP socket at a time: the host
//! iteration opens a fresh session per candidate, and the catch-all
//! prober opens one more against the host that answered.

mod catchall;
mod engine;
mod error;
mod hosts;
mod options;
mod session;
mod stage;
mod types;
mod util;

pub use error::ProbeError;
pub use options::ProbeOptions;
pub use stage::StagePlan;
pub use types::ProbeResult;

pub(crate) use catchall::detect_catch_all;
pub(crate) use hosts::probe_hosts;
