#![forbid(unsafe_code)]
//! mailprobe: SMTP-level email deliverability probing (library + HTTP service + CLI).

pub mod config;
pub mod disposable;
pub mod http;
pub mod mx;
pub mod probe;
pub mod validator;
pub mod verify;

pub use config::{ConfigError, ServerConfig};
pub use disposable::is_disposable_domain;
pub use mx::{Error as MxError, LookupMx, MxRecord, MxStatus, check_mx};
pub use probe::{ProbeError, ProbeOptions, ProbeResult, StagePlan};
pub use validator::{
    EmailError, NormalizedEmail, ValidationMode, ValidationReport, normalize_email, validate_email,
};
pub use verify::{VerificationReport, verify_email};
