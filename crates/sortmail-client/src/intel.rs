//! Intelligence service facade.
//!
//! The long-running model operations live behind `IntelService` so the rest
//! of the SDK never knows whether it is talking to the real backend or a
//! deterministic double. `CannedIntel` takes an injected `Delay` strategy
//! instead of hardcoding simulated latency.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use sortmail_core::api::DraftRequest;
use sortmail_core::{
    DeadlineCandidate, Draft, DraftTone, IntentType, Thread, ThreadIntel, ThreadListItem,
};

use crate::endpoints::Api;
use crate::error::IntelError;

#[async_trait]
pub trait IntelService: Send + Sync {
    /// Natural-language digest of the given threads.
    async fn generate_briefing(&self, threads: &[ThreadListItem]) -> Result<String, IntelError>;

    /// Full analysis of one thread. Produces a new immutable intel record.
    async fn analyze_thread(&self, thread: &Thread) -> Result<ThreadIntel, IntelError>;

    /// A reply draft in the requested tone.
    async fn generate_draft_reply(
        &self,
        thread: &Thread,
        tone: DraftTone,
    ) -> Result<Draft, IntelError>;
}

/// Injectable pause, so test doubles can simulate model latency without
/// baking timers into logic.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn pause(&self);
}

pub struct NoDelay;

#[async_trait]
impl Delay for NoDelay {
    async fn pause(&self) {}
}

pub struct FixedDelay(pub std::time::Duration);

#[async_trait]
impl Delay for FixedDelay {
    async fn pause(&self) {
        tokio::time::sleep(self.0).await;
    }
}

/// Intelligence driven by the backend service.
pub struct BackendIntel {
    api: Api,
}

impl BackendIntel {
    pub fn new(api: Api) -> Self {
        BackendIntel { api }
    }
}

#[async_trait]
impl IntelService for BackendIntel {
    async fn generate_briefing(&self, threads: &[ThreadListItem]) -> Result<String, IntelError> {
        // The briefing is composed client-side from already-analyzed
        // threads; there is no backend endpoint for it.
        Ok(compose_briefing(threads))
    }

    async fn analyze_thread(&self, thread: &Thread) -> Result<ThreadIntel, IntelError> {
        Ok(self.api.refresh_thread(&thread.thread_id).await?)
    }

    async fn generate_draft_reply(
        &self,
        thread: &Thread,
        tone: DraftTone,
    ) -> Result<Draft, IntelError> {
        let request = DraftRequest {
            thread_id: thread.thread_id.clone(),
            tone,
            additional_context: None,
        };
        Ok(self.api.create_draft(&request).await?)
    }
}

/// Deterministic offline intelligence: fixed rules, no model calls.
pub struct CannedIntel {
    delay: Box<dyn Delay>,
    model_version: String,
    pinned_at: Option<DateTime<Utc>>,
}

impl CannedIntel {
    pub fn new(delay: Box<dyn Delay>) -> Self {
        CannedIntel {
            delay,
            model_version: "canned-v1".to_string(),
            pinned_at: None,
        }
    }

    /// Pin `processed_at`/`created_at` so outputs are fully reproducible.
    pub fn pinned(delay: Box<dyn Delay>, at: DateTime<Utc>) -> Self {
        CannedIntel {
            delay,
            model_version: "canned-v1".to_string(),
            pinned_at: Some(at),
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.pinned_at.unwrap_or_else(Utc::now)
    }
}

#[async_trait]
impl IntelService for CannedIntel {
    async fn generate_briefing(&self, threads: &[ThreadListItem]) -> Result<String, IntelError> {
        self.delay.pause().await;
        Ok(compose_briefing(threads))
    }

    async fn analyze_thread(&self, thread: &Thread) -> Result<ThreadIntel, IntelError> {
        self.delay.pause().await;
        let deadlines: Vec<DeadlineCandidate> = Vec::new();
        Ok(ThreadIntel {
            thread_id: thread.thread_id.clone(),
            summary: thread.summary.clone(),
            intent: thread.intent,
            urgency_score: thread.urgency_score,
            main_ask: None,
            decision_needed: decision_needed(thread.intent),
            suggested_action: suggested_action(thread.intent, &deadlines),
            suggested_reply_points: reply_points(thread.intent, &deadlines, thread.has_attachments),
            extracted_deadlines: deadlines,
            entities: vec![],
            attachment_summaries: vec![],
            model_version: self.model_version.clone(),
            processed_at: self.now(),
        })
    }

    async fn generate_draft_reply(
        &self,
        thread: &Thread,
        tone: DraftTone,
    ) -> Result<Draft, IntelError> {
        self.delay.pause().await;

        let greeting = match tone {
            DraftTone::Brief => "",
            DraftTone::Normal => "Hi,\n\n",
            DraftTone::Formal => "Hello,\n\n",
        };
        let mut content = format!(
            "{}Thanks for your note on \"{}\".",
            greeting, thread.subject
        );
        for point in reply_points(thread.intent, &[], thread.has_attachments) {
            content.push_str("\n- ");
            content.push_str(&point);
        }
        content.push_str("\n\nBest,\n[Your name]");

        Ok(Draft {
            draft_id: format!("{}-{}", thread.thread_id, tone.as_str()),
            thread_id: thread.thread_id.clone(),
            content,
            tone,
            placeholders: vec!["[Your name]".to_string()],
            has_unresolved_placeholders: true,
            references_attachments: thread.has_attachments,
            references_deadlines: false,
            model_version: Some(self.model_version.clone()),
            created_at: self.now(),
        })
    }
}

fn decision_needed(intent: IntentType) -> Option<String> {
    match intent {
        IntentType::ActionRequired => Some("Action required - review and respond".to_string()),
        IntentType::Scheduling => Some("Confirm or propose meeting time".to_string()),
        _ => None,
    }
}

fn suggested_action(intent: IntentType, deadlines: &[DeadlineCandidate]) -> Option<String> {
    match intent {
        IntentType::Urgent => Some("Respond immediately".to_string()),
        IntentType::ActionRequired => Some(match deadlines.first() {
            Some(deadline) => format!("Respond before {}", deadline.raw_text),
            None => "Review and respond".to_string(),
        }),
        IntentType::Scheduling => {
            Some("Confirm availability or propose alternative".to_string())
        }
        _ => None,
    }
}

fn reply_points(
    intent: IntentType,
    deadlines: &[DeadlineCandidate],
    has_attachments: bool,
) -> Vec<String> {
    let mut points = Vec::new();
    if intent == IntentType::ActionRequired {
        points.push("Acknowledge receipt".to_string());
        points.push("State your decision or next steps".to_string());
    }
    if let Some(deadline) = deadlines.first() {
        points.push(format!("Reference the deadline: {}", deadline.raw_text));
    }
    if has_attachments {
        points.push("Confirm you reviewed the attachments".to_string());
    }
    points
}

/// Deterministic digest of a thread list: counts by intent, then the most
/// urgent subjects. Same inputs, same briefing.
pub fn compose_briefing(threads: &[ThreadListItem]) -> String {
    if threads.is_empty() {
        return "Inbox is clear: nothing needs your attention.".to_string();
    }

    let count = |intent: IntentType| threads.iter().filter(|t| t.intent == intent).count();
    let mut briefing = format!(
        "{} threads in view: {} urgent, {} awaiting action, {} scheduling, {} FYI.",
        threads.len(),
        count(IntentType::Urgent),
        count(IntentType::ActionRequired),
        count(IntentType::Scheduling),
        count(IntentType::Fyi),
    );

    let mut pressing: Vec<&ThreadListItem> = threads.iter().collect();
    pressing.sort_by(|a, b| {
        b.urgency_score
            .cmp(&a.urgency_score)
            .then_with(|| a.thread_id.cmp(&b.thread_id))
    });
    for thread in pressing.iter().take(3).filter(|t| t.urgency_score >= 70) {
        briefing.push_str(&format!(
            " Most pressing: \"{}\" (urgency {}).",
            thread.subject, thread.urgency_score
        ));
    }

    briefing
}
