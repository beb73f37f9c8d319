use tracing::debug;

use crate::mx::MxRecord;

use super::engine;
use super::options::ProbeOptions;
use super::stage::StagePlan;
use super::types::ProbeResult;

/// Outcome of walking the MX list: the accumulated flags plus, when a
/// host produced a greeting, which one it was. The catch-all probe
/// targets that same host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HostScan {
    pub(crate) result: ProbeResult,
    pub(crate) responding_host: Option<String>,
}

/// Visits hosts strictly in ascending-preference order, one socket at a
/// time, never concurrently. A host that yields no greeting (connect
/// timeout, refusal, or a non-220 banner) is skipped. The first host
/// that answers settles the result, even when it rejects the mailbox.
/// An exhausted list yields the all-false default.
pub(crate) async fn probe_hosts(
    records: &[MxRecord],
    target: &str,
    plan: &StagePlan,
    options: &ProbeOptions,
) -> HostScan {
    let mut result = ProbeResult::default();

    for record in records {
        match engine::probe_host(&record.exchange, target, plan, options).await {
            Ok(attempt) => {
                result.connected = attempt.connected;
                result.mailbox_exists = attempt.mailbox_exists;
                if attempt.connected {
                    return HostScan {
                        result,
                        responding_host: Some(record.exchange.clone()),
                    };
                }
            }
            Err(err) => {
                debug!(host = %record.exchange, error = %err, "host unreachable, trying next");
            }
        }
    }

    HostScan {
        result,
        responding_host: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_record_list_yields_default() {
        let plan = StagePlan::default();
        let options = ProbeOptions::default();
        let scan = probe_hosts(&[], "user@example.com", &plan, &options).await;
        assert_eq!(scan.result, ProbeResult::default());
        assert!(scan.responding_host.is_none());
    }
}
