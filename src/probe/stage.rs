use std::borrow::Cow;

use super::options::ProbeOptions;

/// Position in the fixed handshake sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stage {
    Connect,
    Ehlo,
    MailFrom,
    RcptTo,
    Quit,
}

/// Payload a stage sends when it begins: either a line fixed at startup
/// or one rendered per target address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Fixed(String),
    RcptTo,
}

impl Command {
    pub(crate) fn render<'a>(&'a self, target: &str) -> Cow<'a, str> {
        match self {
            Self::Fixed(line) => Cow::Borrowed(line.as_str()),
            Self::RcptTo => Cow::Owned(format!("RCPT TO:<{target}>")),
        }
    }
}

/// One row of the handshake table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StageSpec {
    pub(crate) stage: Stage,
    pub(crate) command: Option<Command>,
    pub(crate) expect: u16,
}

/// The ordered handshake table. Built once at startup, traversed by
/// cursor index, shared read-only across requests. The catch-all probe
/// reuses the same plan with a synthetic target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagePlan {
    stages: Vec<StageSpec>,
}

impl StagePlan {
    pub fn new(options: &ProbeOptions) -> Self {
        let stages = vec![
            StageSpec {
                stage: Stage::Connect,
                command: None,
                expect: 220,
            },
            StageSpec {
                stage: Stage::Ehlo,
                command: Some(Command::Fixed(format!("EHLO {}", options.helo_domain))),
                expect: 250,
            },
            StageSpec {
                stage: Stage::MailFrom,
                command: Some(Command::Fixed(format!("MAIL FROM:<{}>", options.mail_from))),
                expect: 250,
            },
            StageSpec {
                stage: Stage::RcptTo,
                command: Some(Command::RcptTo),
                expect: 250,
            },
            StageSpec {
                stage: Stage::Quit,
                command: Some(Command::Fixed("QUIT".to_string())),
                expect: 221,
            },
        ];
        Self { stages }
    }

    pub(crate) fn stages(&self) -> &[StageSpec] {
        &self.stages
    }
}

impl Default for StagePlan {
    fn default() -> Self {
        Self::new(&ProbeOptions::default())
    }
}
