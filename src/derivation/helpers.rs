//! Shared derivation helpers: name composition, routing flags, custodial
//! detection, and interpreter note aggregation.

use crate::constants::{creator_types, jurisdictions, results, work_queues};
use crate::events::payloads::{Defendant, ProsecutionCase};

/// Compose a person display name as `firstName lastName`.
///
/// Absent parts collapse cleanly: a missing node yields an empty string so
/// workflows still start with placeholders.
pub fn person_display_name(first_name: Option<&str>, last_name: Option<&str>) -> String {
    match (
        first_name.unwrap_or_default().trim(),
        last_name.unwrap_or_default().trim(),
    ) {
        ("", "") => String::new(),
        (first, "") => first.to_string(),
        ("", last) => last.to_string(),
        (first, last) => format!("{first} {last}"),
    }
}

/// Whether the creator type qualifies an application for review.
///
/// Exhaustive over the known qualifying values; anything else, including
/// unknown future values, defaults conservatively to false.
pub fn is_prosecutor_or_defence(creator_type: Option<&str>) -> bool {
    matches!(
        creator_type,
        Some(creator_types::PROSECUTOR) | Some(creator_types::DEFENCE)
    )
}

/// Whether a single result code counts as custodial.
///
/// A code qualifies when it is in the custodial set and not excluded by the
/// invalid-for-transfer set.
fn is_custodial_code(code: &str) -> bool {
    results::CUSTODIAL_RESULT_CODES.contains(&code)
        && !results::INVALID_FOR_TRANSFER_CODES.contains(&code)
}

/// Whether any defendant on the case carries a custodial result.
///
/// Per-defendant filter first, then an OR-reduction to case level.
pub fn has_custodial_results(case: &ProsecutionCase) -> bool {
    case.defendants.iter().any(defendant_has_custodial_result)
}

fn defendant_has_custodial_result(defendant: &Defendant) -> bool {
    defendant
        .results
        .iter()
        .any(|result| is_custodial_code(&result.code))
}

/// Whether any defendant across the given cases needs an interpreter
pub fn has_interpreter(cases: &[ProsecutionCase]) -> bool {
    cases
        .iter()
        .flat_map(|case| case.defendants.iter())
        .any(|defendant| {
            defendant
                .interpreter_language
                .as_deref()
                .is_some_and(|language| !language.trim().is_empty())
        })
}

/// Aggregate interpreter languages into a single note string.
///
/// Format: `[ URN1 = name1 : lang1,name2 : lang2 ][ URN2 = ... ]`, grouped
/// per case in the input order of the event payload. Cases with no
/// qualifying defendant are omitted; an empty string is valid output when
/// nobody qualifies.
pub fn interpreter_note(cases: &[ProsecutionCase]) -> String {
    let mut note = String::new();
    for case in cases {
        let entries: Vec<String> = case
            .defendants
            .iter()
            .filter_map(|defendant| {
                let language = defendant.interpreter_language.as_deref()?.trim();
                if language.is_empty() {
                    return None;
                }
                let name = person_display_name(
                    defendant.first_name.as_deref(),
                    defendant.last_name.as_deref(),
                );
                Some(format!("{name} : {language}"))
            })
            .collect();

        if entries.is_empty() {
            continue;
        }
        let urn = case.urn.as_deref().unwrap_or_default();
        note.push_str(&format!("[ {} = {} ]", urn, entries.join(",")));
    }
    note
}

/// Select the work queue for a task, honoring jurisdiction routing.
///
/// CROWN always routes to the Crown Court Admin queue, overriding any
/// task-type default; every other jurisdiction defers to the default.
pub fn select_work_queue(jurisdiction: Option<&str>, task_type_default: &str) -> String {
    if jurisdiction == Some(jurisdictions::CROWN) {
        work_queues::CROWN_COURT_ADMIN.to_string()
    } else {
        task_type_default.to_string()
    }
}
