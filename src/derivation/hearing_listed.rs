//! Variable derivation for `public.progression.hearing-listed`.
//!
//! One variable map per hearing. Drives the interpreter-booking workflow:
//! the booking task is only raised by the process graph when
//! `hasInterpreter` is true, but the map is always complete so the process
//! can start and end itself on the no-interpreter path.

use super::helpers::{has_interpreter, interpreter_note, select_work_queue};
use super::DerivationContext;
use crate::constants::{task_types, variables as names};
use crate::events::payloads::Hearing;
use crate::logging::log_reference_data_warning;
use crate::variables::ProcessVariables;

/// Derive the variable map for a listed hearing
pub async fn derive_hearing_variables(
    ctx: &DerivationContext,
    hearing: &Hearing,
) -> ProcessVariables {
    let mut vars = ProcessVariables::for_identity(&ctx.identity);

    vars.set("hearingId", hearing.id.clone());
    vars.set_opt_text("hearingDate", hearing.hearing_date.as_deref());
    vars.set_opt_text(names::JURISDICTION, hearing.jurisdiction_type.as_deref());
    vars.set_opt_text(
        "courtCentre",
        hearing
            .court_centre
            .as_ref()
            .and_then(|centre| centre.name.as_deref()),
    );

    vars.set("hasInterpreter", has_interpreter(&hearing.prosecution_cases));
    vars.set("note", interpreter_note(&hearing.prosecution_cases));
    vars.set(
        "referCourtHearing",
        refer_court_hearing(ctx, hearing).await,
    );

    let booking = ctx
        .resolver
        .resolve(task_types::BOOK_INTERPRETER, &hearing.id, ctx.as_of)
        .await;
    vars.set(
        names::WORK_QUEUE,
        select_work_queue(hearing.jurisdiction_type.as_deref(), &booking.work_queue_id),
    );
    booking.write_unprefixed(&mut vars);

    vars
}

/// Whether the hearing needs manual court referral.
///
/// True when the listed room cannot be confirmed against the directory:
/// missing room identifiers, an unknown room, or a failed lookup all refer.
async fn refer_court_hearing(ctx: &DerivationContext, hearing: &Hearing) -> bool {
    let Some(centre) = hearing.court_centre.as_ref() else {
        return true;
    };
    let (Some(centre_id), Some(room_id)) = (centre.id.as_deref(), centre.room_id.as_deref())
    else {
        return true;
    };

    match ctx.reference_data.court_room(centre_id, room_id).await {
        Ok(Some(_)) => false,
        Ok(None) => true,
        Err(e) => {
            log_reference_data_warning("court_room", room_id, &e.to_string());
            true
        }
    }
}
