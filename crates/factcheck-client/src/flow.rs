//! One submit -> verify -> complete cycle
use factcheck_core::{FactcheckError, ValidatedClaim, VerificationContext, VerificationSession};
use tracing::debug;

use crate::client::VerifyClient;

/// Drive the session through a single verification
///
/// Validation failures return early, before any request is sent; the session
/// is left in its error phase with the validation message. Transport and
/// HTTP failures are folded into the session as user-facing messages, so the
/// only `Err` here is a rejected claim or an illegal transition.
pub async fn run_verification(
    session: &mut VerificationSession,
    client: &VerifyClient,
) -> Result<(), FactcheckError> {
    let claim = session.submit()?;
    complete_verification(session, client, &claim).await
}

/// Send a claim the session already accepted and record the outcome
///
/// The session must be loading, i.e. `submit()` returned `claim`.
pub async fn complete_verification(
    session: &mut VerificationSession,
    client: &VerifyClient,
    claim: &ValidatedClaim,
) -> Result<(), FactcheckError> {
    let ctx = VerificationContext::new();
    debug!(trace_id = %ctx.trace_id, "session entered loading");

    match client.verify_with_context(claim, &ctx).await {
        Ok(response) => session.succeed(response),
        Err(err) => session.fail(err.user_message()),
    }
}
