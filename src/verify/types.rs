use serde::{Deserialize, Serialize};

/// The complete verdict for one address, serialized in camelCase on the
/// wire. Built fresh per request, filled progressively as checks pass,
/// discarded after the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    pub email: String,
    pub format_valid: bool,
    pub disposable: bool,
    pub mx_found: bool,
    pub connected: bool,
    pub mailbox_exists: bool,
    pub catch_all: bool,
}

impl VerificationReport {
    /// All-false report for `email`; the orchestrator's starting point.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            format_valid: false,
            disposable: false,
            mx_found: false,
            connected: false,
            mailbox_exists: false,
            catch_all: false,
        }
    }
}
