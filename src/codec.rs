//! Codec for the local-mirror snapshot.
//!
//! Encoding is JSON with due dates rendered in the canonical
//! point-in-time format (RFC 3339, UTC). Decoding re-normalizes every
//! due date back to midnight UTC: due dates are calendar dates, and a
//! round trip through a timestamp must not let time-of-day or timezone
//! offsets drift the date. Absent or unparsable input decodes to the
//! empty state rather than failing the caller.

use chrono::{DateTime, NaiveTime, Utc};

use crate::error::{Error, Result};
use crate::history::State;
use crate::task::Task;

/// Render a state snapshot for single-key persistence.
pub fn encode(state: &State) -> Result<String> {
    Ok(serde_json::to_string(state)?)
}

/// Parse a stored snapshot, substituting the empty state when the blob
/// is missing or unusable.
pub fn decode(raw: Option<&str>) -> State {
    let Some(raw) = raw else {
        return State::empty();
    };
    match try_decode(raw) {
        Ok(state) => state,
        Err(err) => {
            tracing::warn!(error = %err, "discarding unreadable mirror snapshot");
            State::empty()
        }
    }
}

/// Strict variant of [`decode`]: surfaces the parse failure instead of
/// recovering.
pub fn try_decode(raw: &str) -> Result<State> {
    let state: State = serde_json::from_str(raw)
        .map_err(|err| Error::Deserialization(err.to_string()))?;
    Ok(normalize(state))
}

fn normalize(mut state: State) -> State {
    normalize_snapshot(&mut state.tasks);
    for snapshot in state.past.iter_mut().chain(state.future.iter_mut()) {
        normalize_snapshot(snapshot);
    }
    state
}

fn normalize_snapshot(tasks: &mut [Task]) {
    for task in tasks {
        task.due_date = midnight_utc(task.due_date);
    }
}

/// Truncate an instant to midnight UTC on its calendar day.
pub fn midnight_utc(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}
