use tracing::debug;

use super::engine;
use super::options::ProbeOptions;
use super::stage::StagePlan;
use super::util::random_local_part;

/// Probes `host` once more with a synthetic address on `domain` to see
/// whether the server accepts arbitrary recipients. Runs only after the
/// real address was accepted, over a fresh connection to the host that
/// answered. Any failure reports `false`, never an error.
pub(crate) async fn detect_catch_all(
    host: &str,
    domain: &str,
    plan: &StagePlan,
    options: &ProbeOptions,
) -> bool {
    let synthetic = format!("{}@{domain}", random_local_part(24));
    match engine::probe_host(host, &synthetic, plan, options).await {
        Ok(result) => result.mailbox_exists,
        Err(err) => {
            debug!(host, error = %err, "catch-all probe failed");
            false
        }
    }
}
