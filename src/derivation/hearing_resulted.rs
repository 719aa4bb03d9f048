//! Variable derivation for `public.progression.hearing-resulted`.
//!
//! One variable map per case on the hearing; the caller fans out one
//! process instance per derived map under a composite business key.

use super::helpers::{has_custodial_results, person_display_name, select_work_queue};
use super::DerivationContext;
use crate::constants::{task_types, variables as names};
use crate::events::payloads::{Hearing, ProsecutionCase};
use crate::variables::ProcessVariables;

/// Derive the variable map for one case resulted at a hearing
pub async fn derive_case_variables(
    ctx: &DerivationContext,
    hearing: &Hearing,
    case: &ProsecutionCase,
) -> ProcessVariables {
    let mut vars = ProcessVariables::for_identity(&ctx.identity);

    vars.set("caseId", case.id.clone());
    vars.set_opt_text("caseUrn", case.urn.as_deref());
    vars.set_opt_text("caseStatus", case.status.as_deref());
    vars.set("hearingId", hearing.id.clone());
    vars.set_opt_text("hearingDate", hearing.hearing_date.as_deref());
    vars.set_opt_text(names::JURISDICTION, hearing.jurisdiction_type.as_deref());

    // Lead defendant; placeholders when the node is absent so the process
    // still starts.
    let lead = case.defendants.first();
    vars.set_opt_text("defendantId", lead.and_then(|d| d.id.as_deref()));
    vars.set(
        "defendantName",
        lead.map(|d| person_display_name(d.first_name.as_deref(), d.last_name.as_deref()))
            .unwrap_or_default(),
    );

    vars.set("hasCustodialResults", has_custodial_results(case));

    // Two sibling tasks from one workflow: each carries an independent copy
    // of its reference data under its own prefix.
    let review = ctx
        .resolver
        .resolve(task_types::REVIEW_RESULTS, &case.id, ctx.as_of)
        .await;
    let transfer = ctx
        .resolver
        .resolve(task_types::TRANSFER_TO_CROWN, &case.id, ctx.as_of)
        .await;

    vars.set(
        names::WORK_QUEUE,
        select_work_queue(hearing.jurisdiction_type.as_deref(), &review.work_queue_id),
    );
    vars.merge_task(review.into_task_variables(task_types::REVIEW_RESULTS));
    vars.merge_task(transfer.into_task_variables(task_types::TRANSFER_TO_CROWN));

    vars
}
