/// Flags accumulated during one probe. Each field only ever moves from
/// `false` to `true`; nothing resets them within a session.
///
/// The engine fills `connected` and `mailbox_exists`; `catch_all` is
/// derived later by the orchestrator from the synthetic-address probe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeResult {
    pub connected: bool,
    pub mailbox_exists: bool,
    pub catch_all: bool,
}

/// A complete SMTP reply: the final status code and the joined text of
/// all its lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SmtpReply {
    pub(crate) code: u16,
    pub(crate) message: String,
}
