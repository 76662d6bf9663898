use serde::Deserialize;
use serde_json::Value;

use crate::model::block::{ContentBlock, Priority, ScheduleEntry, ScheduleStatus};
use crate::parse::ids::IdSource;

/// An entry as the generator writes it, before trimming and id assignment
#[derive(Debug, Deserialize)]
struct RawEntry {
    time: String,
    activity: String,
    status: ScheduleStatus,
    priority: Priority,
    #[serde(default)]
    assignee: Option<String>,
}

/// Decode the lines collected after an `@schedule` marker.
///
/// The lines are joined without a separator and must form a JSON object with
/// a non-empty `entries` array. Entries missing a field, with an empty time
/// or activity, or with an unknown status or priority are dropped one by one.
/// Returns `None` when nothing survives; malformed payloads never surface as
/// errors.
pub fn decode_schedule(lines: &[String], ids: &mut dyn IdSource) -> Option<ContentBlock> {
    let joined = lines.concat();
    let candidate = joined.trim();

    if !candidate.contains("\"entries\"") || !candidate.starts_with('{') || !candidate.ends_with('}')
    {
        tracing::debug!("schedule payload is not an entries object, dropping");
        return None;
    }

    let document: Value = match serde_json::from_str(candidate) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "schedule payload is not valid JSON, dropping");
            return None;
        }
    };

    let raw_entries = match document.get("entries").and_then(Value::as_array) {
        Some(entries) if !entries.is_empty() => entries,
        _ => {
            tracing::debug!("schedule payload has no entries, dropping");
            return None;
        }
    };

    let valid: Vec<RawEntry> = raw_entries
        .iter()
        .filter_map(|value| serde_json::from_value::<RawEntry>(value.clone()).ok())
        .filter(|entry| !entry.time.is_empty() && !entry.activity.is_empty())
        .collect();

    if valid.len() < raw_entries.len() {
        tracing::debug!(
            dropped = raw_entries.len() - valid.len(),
            kept = valid.len(),
            "filtered invalid schedule entries"
        );
    }

    if valid.is_empty() {
        return None;
    }

    let block_id = ids.next_id();
    let entries = valid
        .into_iter()
        .map(|raw| ScheduleEntry {
            id: ids.next_id(),
            time: raw.time.trim().to_string(),
            activity: raw.activity.trim().to_string(),
            status: raw.status,
            priority: raw.priority,
            assignee: raw.assignee.map(|a| a.trim().to_string()),
        })
        .collect();

    Some(ContentBlock::Schedule {
        id: block_id,
        entries,
    })
}
