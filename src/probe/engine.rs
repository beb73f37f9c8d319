use tokio::io::{AsyncRead, AsyncWrite};
use tracing::debug;

use super::error::ProbeError;
use super::options::ProbeOptions;
use super::session::SmtpSession;
use super::stage::{Stage, StagePlan};
use super::types::ProbeResult;

/// Connects to `host` and drives the full handshake for `target`.
///
/// `Err` is reserved for the connect phase (timeout, refusal before a
/// greeting). Every failure after the connection is established is
/// folded into the returned flags.
pub(crate) async fn probe_host(
    host: &str,
    target: &str,
    plan: &StagePlan,
    options: &ProbeOptions,
) -> Result<ProbeResult, ProbeError> {
    let mut session = SmtpSession::connect(host, options.port, options.connect_timeout).await?;
    Ok(run_stages(&mut session, plan, target, host).await)
}

/// Traverses the stage table by cursor: send the stage's command (when
/// it has one), read the reply, compare status codes. A code mismatch
/// or any I/O failure ends the session immediately with the flags
/// accumulated so far; stages past the failed one, QUIT included, are
/// never attempted.
pub(crate) async fn run_stages<S>(
    session: &mut SmtpSession<S>,
    plan: &StagePlan,
    target: &str,
    host: &str,
) -> ProbeResult
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut result = ProbeResult::default();

    for spec in plan.stages() {
        if let Some(command) = &spec.command {
            let line = command.render(target);
            if let Err(err) = session.send_command(&line).await {
                debug!(host, stage = ?spec.stage, error = %err, "probe write failed");
                return result;
            }
        }
        let reply = match session.read_reply().await {
            Ok(reply) => reply,
            Err(err) => {
                debug!(host, stage = ?spec.stage, error = %err, "probe read failed");
                return result;
            }
        };
        if reply.code != spec.expect {
            debug!(
                host,
                stage = ?spec.stage,
                code = reply.code,
                expected = spec.expect,
                "unexpected reply, ending probe"
            );
            return result;
        }
        match spec.stage {
            Stage::Connect => result.connected = true,
            Stage::RcptTo => result.mailbox_exists = true,
            _ => {}
        }
    }

    result
}
