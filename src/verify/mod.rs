//! Orchestration of one full verification: format validation,
//! disposable lookup, MX resolution, host probing and catch-all
//! detection, in that order, with every later step gated on the
//! earlier ones.

mod types;

pub use types::VerificationReport;

use tracing::debug;

use crate::disposable::is_disposable_domain;
use crate::mx::{self, LookupMx, MxRecord, MxStatus};
use crate::probe::{self, ProbeOptions, StagePlan};
use crate::validator::{NormalizedEmail, ValidationMode, normalize_email};

/// Runs the whole pipeline for one address. Never fails: network
/// problems degrade to false flags in the report, surfacing only in
/// the debug log.
pub async fn verify_email<R>(
    email: &str,
    resolver: &R,
    plan: &StagePlan,
    options: &ProbeOptions,
) -> VerificationReport
where
    R: LookupMx + Sync,
{
    let mut report = VerificationReport::new(email);

    let normalized = match normalize_email(email, ValidationMode::Strict) {
        Ok(normalized) => normalized,
        Err(err) => {
            debug!(email, error = %err, "normalization failed");
            return report;
        }
    };
    if !normalized.valid {
        debug!(email, reasons = ?normalized.reasons, "format validation failed");
        return report;
    }
    report.format_valid = true;

    report.disposable = is_disposable_domain(&normalized.domain);

    let records = resolve_hosts(resolver, &normalized).await;
    if records.is_empty() {
        return report;
    }
    report.mx_found = true;

    let scan = probe::probe_hosts(&records, email.trim(), plan, options).await;
    report.connected = scan.result.connected;
    report.mailbox_exists = scan.result.mailbox_exists;
    if !report.mailbox_exists {
        return report;
    }

    if let Some(host) = scan.responding_host {
        report.catch_all = probe::detect_catch_all(&host, &normalized.domain, plan, options).await;
    }

    report
}

/// MX hosts for the probe, ascending preference. Resolution failures
/// degrade to an empty list; they never reach the caller.
async fn resolve_hosts<R>(resolver: &R, normalized: &NormalizedEmail) -> Vec<MxRecord>
where
    R: LookupMx + Sync,
{
    let domain = if normalized.ascii_domain.is_empty() {
        normalized.domain.as_str()
    } else {
        normalized.ascii_domain.as_str()
    };
    match mx::resolve_with(resolver, domain).await {
        Ok(MxStatus::Records(records)) => records,
        Ok(MxStatus::NoRecords) => Vec::new(),
        Err(err) => {
            debug!(%domain, error = %err, "MX resolution failed");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mx::tests::StubResolver;
    use crate::probe::tests::{accepting_session, rejecting_session, spawn_mock_server};
    use trust_dns_resolver::error::ResolveError;

    fn stub_with_host() -> StubResolver {
        StubResolver::new(|domain| {
            assert_eq!(domain, "example.com");
            Ok(vec![MxRecord::new(10, "127.0.0.1")])
        })
    }

    fn probe_options(port: u16) -> ProbeOptions {
        ProbeOptions {
            port,
            ..ProbeOptions::default()
        }
    }

    #[tokio::test]
    async fn invalid_format_short_circuits_without_lookup() {
        let resolver = StubResolver::new(|_| panic!("resolver must not be consulted"));
        let plan = StagePlan::default();
        let options = ProbeOptions::default();

        let report = verify_email("not-an-email", &resolver, &plan, &options).await;
        assert_eq!(report, VerificationReport::new("not-an-email"));
    }

    #[tokio::test]
    async fn missing_mx_records_short_circuit() {
        let resolver = StubResolver::new(|_| Ok(Vec::new()));
        let plan = StagePlan::default();
        let options = ProbeOptions::default();

        let report = verify_email("user@example.com", &resolver, &plan, &options).await;
        assert!(report.format_valid);
        assert!(!report.mx_found);
        assert!(!report.connected);
        assert!(!report.mailbox_exists);
    }

    #[tokio::test]
    async fn resolver_failure_degrades_to_mx_not_found() {
        let resolver = StubResolver::new(|_| Err(ResolveError::from("dns unavailable")));
        let plan = StagePlan::default();
        let options = ProbeOptions::default();

        let report = verify_email("user@example.com", &resolver, &plan, &options).await;
        assert!(report.format_valid);
        assert!(!report.mx_found);
    }

    #[tokio::test]
    async fn disposable_domain_is_informational() {
        let resolver = StubResolver::new(|domain| {
            assert_eq!(domain, "mailinator.com");
            Ok(Vec::new())
        });
        let plan = StagePlan::default();
        let options = ProbeOptions::default();

        let report = verify_email("anyone@mailinator.com", &resolver, &plan, &options).await;
        assert!(report.format_valid);
        assert!(report.disposable);
        assert!(!report.mx_found);
    }

    #[tokio::test]
    #[ignore = "requires loopback TCP binding"]
    async fn confirmed_mailbox_with_rejected_synthetic_is_not_catch_all() {
        let (port, handle) = spawn_mock_server(vec![
            accepting_session("RCPT TO:<user@example.com>"),
            rejecting_session("RCPT TO:<"),
        ])
        .await;
        let resolver = stub_with_host();
        let plan = StagePlan::default();
        let options = probe_options(port);

        let report = verify_email("user@example.com", &resolver, &plan, &options).await;
        assert!(report.format_valid);
        assert!(report.mx_found);
        assert!(report.connected);
        assert!(report.mailbox_exists);
        assert!(!report.catch_all);
        handle.await.expect("server task");
    }

    #[tokio::test]
    #[ignore = "requires loopback TCP binding"]
    async fn accepting_synthetic_recipient_flags_catch_all() {
        let (port, handle) = spawn_mock_server(vec![
            accepting_session("RCPT TO:<user@example.com>"),
            accepting_session("RCPT TO:<"),
        ])
        .await;
        let resolver = stub_with_host();
        let plan = StagePlan::default();
        let options = probe_options(port);

        let report = verify_email("user@example.com", &resolver, &plan, &options).await;
        assert!(report.mailbox_exists);
        assert!(report.catch_all);
        handle.await.expect("server task");
    }

    #[tokio::test]
    #[ignore = "requires loopback TCP binding"]
    async fn rejected_mailbox_skips_catch_all_probe() {
        let (port, handle) =
            spawn_mock_server(vec![rejecting_session("RCPT TO:<ghost@example.com>")]).await;
        let resolver = stub_with_host();
        let plan = StagePlan::default();
        let options = probe_options(port);

        let report = verify_email("ghost@example.com", &resolver, &plan, &options).await;
        assert!(report.connected);
        assert!(!report.mailbox_exists);
        assert!(!report.catch_all);
        // The mock scripted a single session; a second connection would
        // leave the server task pending and fail the join below.
        handle.await.expect("server task");
    }
}
