//! DNS MX resolution.
//!
//! The public entry point is [`check_mx`], which performs an async lookup
//! using the system resolver and returns a [`MxStatus`] describing the
//! outcome. The [`LookupMx`] trait is the seam the verification
//! orchestrator is generic over.

mod error;
mod resolver;
mod types;

pub use error::MxError as Error;
pub use resolver::{LookupMx, check_mx};
pub use types::{MxRecord, MxStatus};

pub(crate) use resolver::resolve_with;
