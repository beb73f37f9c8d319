use std::time::Duration;

/// Controls how the probe engine interrogates SMTP servers.
///
/// `helo_domain` and `mail_from` are baked into the stage plan at
/// startup; they never vary per target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOptions {
    pub port: u16,
    pub helo_domain: String,
    pub mail_from: String,
    /// Deadline for TCP establishment. Later stages carry no deadline:
    /// a server that greets and then stalls holds the session open.
    pub connect_timeout: Duration,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            port: 25,
            helo_domain: "mail.example.org".to_string(),
            mail_from: "name@example.org".to_string(),
            connect_timeout: Duration::from_secs(3),
        }
    }
}
