//! Checklist session state: loading defaults, response selection, and
//! flattening into persistable result records.
//!
//! A session is a plain value owned by one checklist screen. It is created
//! from the activity catalog, mutated through [`ChecklistSession::select`]
//! and the note setters, and converted exactly once into
//! [`NewChecklistResult`] rows at save time. Nothing here touches the
//! database.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::DbId;

/// Reserved activity id used to mark the general-observation record among
/// persisted results. Real activity ids are positive rowids.
pub const GENERAL_OBSERVATION_ACTIVITY_ID: DbId = -1;

/// Checklist category a maintenance activity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistCategory {
    Preventivo,
    Correctivo,
    Diagnostico,
}

impl ChecklistCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecklistCategory::Preventivo => "preventivo",
            ChecklistCategory::Correctivo => "correctivo",
            ChecklistCategory::Diagnostico => "diagnostico",
        }
    }
}

impl fmt::Display for ChecklistCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChecklistCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preventivo" => Ok(ChecklistCategory::Preventivo),
            "correctivo" => Ok(ChecklistCategory::Correctivo),
            "diagnostico" => Ok(ChecklistCategory::Diagnostico),
            other => Err(CoreError::Validation(format!(
                "Invalid checklist category '{other}'. Must be one of: preventivo, correctivo, diagnostico"
            ))),
        }
    }
}

/// Whether an activity accepts one or many selected responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Single,
    Multi,
}

impl SelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::Single => "single",
            SelectionMode::Multi => "multi",
        }
    }
}

impl FromStr for SelectionMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(SelectionMode::Single),
            "multi" => Ok(SelectionMode::Multi),
            other => Err(CoreError::Validation(format!(
                "Invalid selection mode '{other}'. Must be one of: single, multi"
            ))),
        }
    }
}

/// A maintenance checklist item presented to the technician.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: DbId,
    pub name: String,
    pub category: ChecklistCategory,
    pub selection_mode: SelectionMode,
}

/// One selectable answer option for an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateResponse {
    pub id: DbId,
    pub activity_id: DbId,
    /// Display label shown to the technician.
    pub label: String,
    /// Opaque value persisted in result records.
    pub value: String,
    /// Marks the affirmative-path response for the activity.
    pub is_affirmative: bool,
}

/// An activity together with its ordered candidate responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityWithResponses {
    pub activity: Activity,
    pub responses: Vec<CandidateResponse>,
}

/// Per-activity state within a checklist session.
///
/// Invariants: every response in `selected` belongs to `activity`, entries
/// are unique by response id, and for single-mode activities the set holds
/// at most one response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistEntry {
    pub activity: Activity,
    pub responses: Vec<CandidateResponse>,
    pub selected: Vec<CandidateResponse>,
    pub note: String,
}

/// In-memory state of one checklist screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistSession {
    pub category: ChecklistCategory,
    pub entries: Vec<ChecklistEntry>,
    pub general_observation: String,
}

/// One row to append to `checklist_results`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewChecklistResult {
    pub equipment_code: String,
    pub activity_id: DbId,
    pub value: String,
    pub note: String,
}

/// Default-selection predicate: matches the "not necessary" response by its
/// display label, case-insensitively. Kept as a named function because the
/// label match is load-bearing for the loader's default policy.
pub fn is_not_necessary_label(label: &str) -> bool {
    label.trim().eq_ignore_ascii_case("no fue necesario")
}

impl ChecklistSession {
    /// Build a session from the loaded catalog, applying the default
    /// selection policy: outside `diagnostico`, an activity with a
    /// "no fue necesario" response gets that response pre-selected as the
    /// sole default. An empty catalog yields an empty (valid) session.
    pub fn new(category: ChecklistCategory, activities: Vec<ActivityWithResponses>) -> Self {
        let entries = activities
            .into_iter()
            .map(|item| {
                let selected = if category == ChecklistCategory::Diagnostico {
                    Vec::new()
                } else {
                    item.responses
                        .iter()
                        .find(|r| is_not_necessary_label(&r.label))
                        .cloned()
                        .map_or_else(Vec::new, |r| vec![r])
                };
                ChecklistEntry {
                    activity: item.activity,
                    responses: item.responses,
                    selected,
                    note: String::new(),
                }
            })
            .collect();

        ChecklistSession {
            category,
            entries,
            general_observation: String::new(),
        }
    }

    /// Build a session with no selections at all, regardless of category.
    /// Used when replaying client-submitted selections on save.
    pub fn unselected(category: ChecklistCategory, activities: Vec<ActivityWithResponses>) -> Self {
        let mut session = Self::new(category, activities);
        for entry in &mut session.entries {
            entry.selected.clear();
        }
        session
    }

    /// Toggle or set `response` for the activity identified by
    /// `activity_id`.
    ///
    /// Single-mode activities replace their selected set with the singleton
    /// unconditionally; multi-mode activities toggle membership by response
    /// id. Every other activity is left untouched. An unknown `activity_id`
    /// is a benign no-op.
    pub fn select(&mut self, activity_id: DbId, response: CandidateResponse) {
        let Some(entry) = self.entry_mut(activity_id) else {
            return;
        };

        match entry.activity.selection_mode {
            SelectionMode::Single => {
                entry.selected = vec![response];
            }
            SelectionMode::Multi => {
                if let Some(pos) = entry.selected.iter().position(|r| r.id == response.id) {
                    entry.selected.remove(pos);
                } else {
                    entry.selected.push(response);
                }
            }
        }
    }

    /// Replace the free-text note of the matching activity. No-op when no
    /// activity matches.
    pub fn set_note(&mut self, activity_id: DbId, text: impl Into<String>) {
        if let Some(entry) = self.entry_mut(activity_id) {
            entry.note = text.into();
        }
    }

    /// Replace the session-level general observation.
    pub fn set_general_observation(&mut self, text: impl Into<String>) {
        self.general_observation = text.into();
    }

    /// Look up a candidate response by activity id and response id.
    pub fn response(&self, activity_id: DbId, response_id: DbId) -> Option<&CandidateResponse> {
        self.entries
            .iter()
            .find(|e| e.activity.id == activity_id)?
            .responses
            .iter()
            .find(|r| r.id == response_id)
    }

    /// Flatten the session into persistable result rows: one per selected
    /// response (carrying that activity's note), plus exactly one
    /// general-observation record when the observation is non-blank. That
    /// record uses [`GENERAL_OBSERVATION_ACTIVITY_ID`] and stores the
    /// category string in its value field.
    pub fn results(&self, equipment_code: &str) -> Vec<NewChecklistResult> {
        let mut rows: Vec<NewChecklistResult> = self
            .entries
            .iter()
            .flat_map(|entry| {
                entry.selected.iter().map(|response| NewChecklistResult {
                    equipment_code: equipment_code.to_string(),
                    activity_id: entry.activity.id,
                    value: response.value.clone(),
                    note: entry.note.clone(),
                })
            })
            .collect();

        if !self.general_observation.trim().is_empty() {
            rows.push(NewChecklistResult {
                equipment_code: equipment_code.to_string(),
                activity_id: GENERAL_OBSERVATION_ACTIVITY_ID,
                value: self.category.to_string(),
                note: self.general_observation.clone(),
            });
        }

        rows
    }

    fn entry_mut(&mut self, activity_id: DbId) -> Option<&mut ChecklistEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.activity.id == activity_id)
    }
}
