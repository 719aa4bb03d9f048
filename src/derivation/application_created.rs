//! Variable derivation for `public.progression.application-created`.
//!
//! The review workflow only concerns applications raised by a prosecutor or
//! the defence; internal creator types derive a complete map with the flag
//! false and the gateway skips the start pre-emptively.

use super::helpers::is_prosecutor_or_defence;
use super::DerivationContext;
use crate::constants::task_types;
use crate::events::payloads::CourtApplication;
use crate::variables::ProcessVariables;

/// Derive the variable map for a newly created court application
pub async fn derive_application_variables(
    ctx: &DerivationContext,
    application: &CourtApplication,
) -> ProcessVariables {
    let mut vars = ProcessVariables::for_identity(&ctx.identity);

    vars.set("applicationId", application.id.clone());
    vars.set_opt_text("caseId", application.case_id.as_deref());
    vars.set_opt_text("applicationType", application.application_type.as_deref());
    vars.set(
        "isApplicationProsecutorOrDefence",
        is_prosecutor_or_defence(application.creator_type.as_deref()),
    );
    // Urgent applications put the review task at the head of the queue
    vars.set("executeInstantly", application.urgent);

    let review = ctx
        .resolver
        .resolve(task_types::REVIEW_APPLICATION, &application.id, ctx.as_of)
        .await;
    vars.set(
        crate::constants::variables::WORK_QUEUE,
        review.work_queue_id.clone(),
    );
    review.write_unprefixed(&mut vars);

    vars
}
