//! Variable derivation for `public.progression.document-added`.
//!
//! The document workflow creates a review task and an indexing task; each
//! carries an independent prefixed copy of its reference data.

use super::helpers::select_work_queue;
use super::DerivationContext;
use crate::constants::{task_types, variables as names};
use crate::events::payloads::DocumentAddedPayload;
use crate::variables::ProcessVariables;

/// Derive the variable map for a document added to a case
pub async fn derive_document_variables(
    ctx: &DerivationContext,
    payload: &DocumentAddedPayload,
) -> ProcessVariables {
    let mut vars = ProcessVariables::for_identity(&ctx.identity);

    vars.set("documentId", payload.document.id.clone());
    vars.set_opt_text("documentName", payload.document.name.as_deref());
    vars.set_opt_text(
        "documentTypeId",
        payload.document.document_type_id.as_deref(),
    );
    vars.set_opt_text("caseId", payload.case_id.as_deref());
    vars.set_opt_text("caseUrn", payload.case_urn.as_deref());
    vars.set_opt_text(names::JURISDICTION, payload.jurisdiction_type.as_deref());

    let review = ctx
        .resolver
        .resolve(task_types::REVIEW_DOCUMENT, &payload.document.id, ctx.as_of)
        .await;
    let index = ctx
        .resolver
        .resolve(task_types::INDEX_DOCUMENT, &payload.document.id, ctx.as_of)
        .await;

    vars.set(
        names::WORK_QUEUE,
        select_work_queue(
            payload.jurisdiction_type.as_deref(),
            &review.work_queue_id,
        ),
    );
    vars.merge_task(review.into_task_variables(task_types::REVIEW_DOCUMENT));
    vars.merge_task(index.into_task_variables(task_types::INDEX_DOCUMENT));

    vars
}
