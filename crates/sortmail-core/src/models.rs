use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classification of the response an email thread requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentType {
    ActionRequired,
    Fyi,
    Scheduling,
    Urgent,
    Unknown,
}

impl IntentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentType::ActionRequired => "action_required",
            IntentType::Fyi => "fyi",
            IntentType::Scheduling => "scheduling",
            IntentType::Urgent => "urgent",
            IntentType::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Reply,
    Schedule,
    Review,
    Followup,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Reply => "reply",
            TaskType::Schedule => "schedule",
            TaskType::Review => "review",
            TaskType::Followup => "followup",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    DoNow,
    DoToday,
    CanWait,
}

impl PriorityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLevel::DoNow => "do_now",
            PriorityLevel::DoToday => "do_today",
            PriorityLevel::CanWait => "can_wait",
        }
    }

    /// Display label used as the prefix of a priority explanation.
    pub fn label(&self) -> &'static str {
        match self {
            PriorityLevel::DoNow => "Do now",
            PriorityLevel::DoToday => "Do today",
            PriorityLevel::CanWait => "Can wait",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffortLevel {
    Quick,
    DeepWork,
}

impl EffortLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffortLevel::Quick => "quick",
            EffortLevel::DeepWork => "deep_work",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Dismissed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Dismissed => "dismissed",
        }
    }
}

/// Importance of an attachment as judged by analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    High,
    Medium,
    Low,
}

/// A grouped email conversation with one subject line.
///
/// `urgency_score` is a backend-assigned signal in `[0, 100]`. Consistency
/// between `urgency_score` and `intent` is displayed, not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub thread_id: String,
    pub subject: String,
    pub summary: String,
    pub intent: IntentType,
    pub urgency_score: u8,
    pub last_updated: DateTime<Utc>,
    pub has_attachments: bool,
    /// Sender and recipient addresses, used for VIP matching.
    pub participants: Vec<String>,
}

/// The display shape returned by thread listings (no participants).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadListItem {
    pub thread_id: String,
    pub subject: String,
    pub summary: String,
    pub intent: IntentType,
    pub urgency_score: u8,
    pub last_updated: DateTime<Utc>,
    pub has_attachments: bool,
}

/// An actionable item derived from exactly one source thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: Uuid,
    pub thread_id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub task_type: TaskType,
    pub priority: PriorityLevel,
    pub priority_score: f32,
    pub priority_explanation: String,
    pub effort: EffortLevel,
    pub deadline: Option<DateTime<Utc>>,
    /// Raw text the deadline was extracted from, kept for display.
    pub deadline_source: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Identity record for the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub picture_url: Option<String>,
}

/// A sent thread awaiting a reply.
///
/// Days pending are never stored: they are recomputed from `sent_at` against
/// an injected "now" on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitingItem {
    pub id: String,
    pub recipient: String,
    pub subject: String,
    pub sent_at: DateTime<Utc>,
    pub avatar: Option<String>,
}

impl WaitingItem {
    /// Whole days elapsed since the message was sent, saturating at zero.
    pub fn days_pending(&self, now: DateTime<Utc>) -> u32 {
        let days = (now - self.sent_at).num_days();
        u32::try_from(days).unwrap_or(0)
    }
}

/// Aggregate counts shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub do_now: u32,
    pub do_today: u32,
    pub can_wait: u32,
    pub waiting_for: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Gmail,
    Outlook,
}

/// A linked mailbox, as surfaced by `GET /api/connected-accounts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedAccount {
    pub id: String,
    pub provider: Provider,
    pub email: Option<String>,
    pub sync_status: String,
    pub last_sync_at: Option<DateTime<Utc>>,
}
