//! Analysis results produced by the intelligence service.
//!
//! A `ThreadIntel` is immutable once produced: re-analyzing a thread creates
//! a new record rather than mutating the old one, so a stale in-flight
//! analysis can never race newer thread content.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Importance, IntentType};

/// One deadline mention found in a thread.
///
/// Several candidates may exist per thread. Consumers display the best one
/// but must preserve the full list for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadlineCandidate {
    /// The text the deadline was extracted from, e.g. "by Friday EOD".
    pub raw_text: String,
    pub normalized: Option<DateTime<Utc>>,
    /// Extraction confidence in `[0, 1]`.
    pub confidence: f32,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedEntity {
    pub entity_type: String,
    pub value: String,
    pub confidence: f32,
}

/// Per-attachment analysis, tied to the parent analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentIntel {
    pub attachment_id: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub document_type: String,
    pub importance: Importance,
}

/// Complete analysis of one thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadIntel {
    pub thread_id: String,
    pub summary: String,
    pub intent: IntentType,
    pub urgency_score: u8,
    pub main_ask: Option<String>,
    pub decision_needed: Option<String>,
    pub extracted_deadlines: Vec<DeadlineCandidate>,
    pub entities: Vec<ExtractedEntity>,
    pub attachment_summaries: Vec<AttachmentIntel>,
    pub suggested_action: Option<String>,
    pub suggested_reply_points: Vec<String>,
    pub model_version: String,
    pub processed_at: DateTime<Utc>,
}

impl ThreadIntel {
    /// The deadline candidate to act on: highest confidence wins, with
    /// confidence ties broken toward the earlier date. Candidates without a
    /// normalized date cannot be scheduled against and are skipped.
    pub fn best_deadline(&self) -> Option<&DeadlineCandidate> {
        self.extracted_deadlines
            .iter()
            .filter(|c| c.normalized.is_some())
            .min_by(|a, b| {
                b.confidence
                    .partial_cmp(&a.confidence)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.normalized.cmp(&b.normalized))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftTone {
    Brief,
    Normal,
    Formal,
}

impl DraftTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftTone::Brief => "brief",
            DraftTone::Normal => "normal",
            DraftTone::Formal => "formal",
        }
    }
}

/// A generated reply draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub draft_id: String,
    pub thread_id: String,
    pub content: String,
    pub tone: DraftTone,
    /// Bracketed placeholders left in the content for the user to fill in.
    pub placeholders: Vec<String>,
    pub has_unresolved_placeholders: bool,
    pub references_attachments: bool,
    pub references_deadlines: bool,
    pub model_version: Option<String>,
    pub created_at: DateTime<Utc>,
}
