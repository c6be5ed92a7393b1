//! Priority/task derivation.
//!
//! `derive_task` maps a thread (plus its optional analysis) to at most one
//! task candidate. The function is pure: "now" is an explicit argument and
//! every heuristic is driven only by the inputs, so identical inputs always
//! produce identical output.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::intel::ThreadIntel;
use crate::models::{
    EffortLevel, Importance, IntentType, PriorityLevel, Task, TaskStatus, TaskType, Thread,
};

#[derive(Debug, Error)]
pub enum TriageError {
    /// Malformed thread or intel. Derivation fails instead of defaulting a
    /// task into existence.
    #[error("invalid input: {0}")]
    Validation(String),
}

/// Scoring weights and windows for task derivation.
///
/// The weights and the decay window are product tunables, kept as named
/// configuration rather than literals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Weight of the backend urgency score in the priority score.
    #[serde(default = "default_urgency_weight")]
    pub urgency_weight: f32,

    /// Weight of deadline proximity in the priority score.
    #[serde(default = "default_deadline_weight")]
    pub deadline_weight: f32,

    /// Days out at which deadline proximity decays to zero.
    #[serde(default = "default_deadline_horizon_days")]
    pub deadline_horizon_days: i64,

    /// Deadlines inside this window (or overdue) bucket as `do_now`.
    #[serde(default = "default_do_now_within_hours")]
    pub do_now_within_hours: i64,

    /// Deadlines inside this window bucket as `do_today`.
    #[serde(default = "default_do_today_within_days")]
    pub do_today_within_days: i64,

    /// High-importance senders: full addresses or `@domain` suffixes.
    #[serde(default)]
    pub vip_senders: Vec<String>,
}

fn default_urgency_weight() -> f32 {
    0.6
}

fn default_deadline_weight() -> f32 {
    0.4
}

fn default_deadline_horizon_days() -> i64 {
    14
}

fn default_do_now_within_hours() -> i64 {
    24
}

fn default_do_today_within_days() -> i64 {
    7
}

impl Default for TriageConfig {
    fn default() -> Self {
        TriageConfig {
            urgency_weight: default_urgency_weight(),
            deadline_weight: default_deadline_weight(),
            deadline_horizon_days: default_deadline_horizon_days(),
            do_now_within_hours: default_do_now_within_hours(),
            do_today_within_days: default_do_today_within_days(),
            vip_senders: Vec::new(),
        }
    }
}

/// A derived task before creation: no id, owner, or status yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskCandidate {
    pub thread_id: String,
    pub title: String,
    pub description: Option<String>,
    pub task_type: TaskType,
    pub priority: PriorityLevel,
    pub priority_score: f32,
    pub priority_explanation: String,
    pub effort: EffortLevel,
    pub deadline: Option<DateTime<Utc>>,
    pub deadline_source: Option<String>,
    /// Carried from the source thread for ordering tie-breaks.
    pub last_updated: DateTime<Utc>,
}

impl TaskCandidate {
    /// Stamp identity, owner, and status to turn the candidate into a task.
    pub fn into_task(self, task_id: Uuid, user_id: impl Into<String>, now: DateTime<Utc>) -> Task {
        Task {
            task_id,
            thread_id: self.thread_id,
            user_id: user_id.into(),
            title: self.title,
            description: self.description,
            task_type: self.task_type,
            priority: self.priority,
            priority_score: self.priority_score,
            priority_explanation: self.priority_explanation,
            effort: self.effort,
            deadline: self.deadline,
            deadline_source: self.deadline_source,
            status: TaskStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Derive at most one task candidate from a thread.
///
/// Returns `Ok(None)` for pure-FYI threads: `fyi` intent with no extracted
/// deadline and no suggested action warrants no task.
pub fn derive_task(
    thread: &Thread,
    intel: Option<&ThreadIntel>,
    now: DateTime<Utc>,
    config: &TriageConfig,
) -> Result<Option<TaskCandidate>, TriageError> {
    validate(thread, intel)?;

    // The analysis is authoritative over the thread's own display fields.
    let intent = intel.map_or(thread.intent, |i| i.intent);
    let urgency = intel.map_or(thread.urgency_score, |i| i.urgency_score);
    let best = intel.and_then(|i| i.best_deadline());
    let deadline = best.and_then(|c| c.normalized);
    let deadline_source = best.map(|c| c.raw_text.clone());
    let suggested_action = intel.and_then(|i| i.suggested_action.clone());

    if intent == IntentType::Fyi && deadline.is_none() && suggested_action.is_none() {
        return Ok(None);
    }

    let vip = is_vip_sender(&thread.participants, &config.vip_senders);
    let (priority, priority_explanation) = classify(intent, deadline, vip, now, config);
    let priority_score = score(urgency, deadline, now, config);

    let needs_review = match intel {
        Some(i) => i
            .attachment_summaries
            .iter()
            .any(|a| a.importance == Importance::High),
        None => thread.has_attachments,
    };
    let task_type = if intent == IntentType::Scheduling {
        TaskType::Schedule
    } else if needs_review {
        TaskType::Review
    } else if matches!(intent, IntentType::Urgent | IntentType::ActionRequired) {
        TaskType::Reply
    } else {
        TaskType::Followup
    };
    let effort = if matches!(task_type, TaskType::Reply | TaskType::Schedule) && !needs_review {
        EffortLevel::Quick
    } else {
        EffortLevel::DeepWork
    };

    Ok(Some(TaskCandidate {
        thread_id: thread.thread_id.clone(),
        title: thread.subject.clone(),
        description: intel.and_then(|i| i.main_ask.clone()).or(suggested_action),
        task_type,
        priority,
        priority_score,
        priority_explanation,
        effort,
        deadline,
        deadline_source,
        last_updated: thread.last_updated,
    }))
}

/// Sort candidates into display order: score descending, then earliest
/// deadline (no deadline last), then most recently active thread, then
/// thread id. The order is total, so repeated sorts are stable.
pub fn sort_candidates(candidates: &mut [TaskCandidate]) {
    candidates.sort_by(candidate_order);
}

pub fn candidate_order(a: &TaskCandidate, b: &TaskCandidate) -> Ordering {
    b.priority_score
        .partial_cmp(&a.priority_score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| match (a.deadline, b.deadline) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| b.last_updated.cmp(&a.last_updated))
        .then_with(|| a.thread_id.cmp(&b.thread_id))
}

fn validate(thread: &Thread, intel: Option<&ThreadIntel>) -> Result<(), TriageError> {
    if thread.thread_id.trim().is_empty() {
        return Err(TriageError::Validation("thread_id is empty".to_string()));
    }
    if thread.urgency_score > 100 {
        return Err(TriageError::Validation(format!(
            "thread urgency_score {} out of range 0..=100",
            thread.urgency_score
        )));
    }

    let Some(intel) = intel else {
        return Ok(());
    };

    if intel.thread_id != thread.thread_id {
        return Err(TriageError::Validation(format!(
            "intel thread_id {:?} does not match thread {:?}",
            intel.thread_id, thread.thread_id
        )));
    }
    if intel.urgency_score > 100 {
        return Err(TriageError::Validation(format!(
            "intel urgency_score {} out of range 0..=100",
            intel.urgency_score
        )));
    }
    for c in &intel.extracted_deadlines {
        if !(0.0..=1.0).contains(&c.confidence) {
            return Err(TriageError::Validation(format!(
                "deadline confidence {} out of range 0..=1",
                c.confidence
            )));
        }
    }
    for e in &intel.entities {
        if !(0.0..=1.0).contains(&e.confidence) {
            return Err(TriageError::Validation(format!(
                "entity confidence {} out of range 0..=1",
                e.confidence
            )));
        }
    }

    Ok(())
}

fn classify(
    intent: IntentType,
    deadline: Option<DateTime<Utc>>,
    vip: bool,
    now: DateTime<Utc>,
    config: &TriageConfig,
) -> (PriorityLevel, String) {
    if let Some(d) = deadline {
        let until = d - now;
        if until <= Duration::hours(config.do_now_within_hours) {
            let reason = if until < Duration::zero() {
                "deadline overdue".to_string()
            } else {
                format!("deadline within {}h", config.do_now_within_hours)
            };
            let level = PriorityLevel::DoNow;
            return (level, format!("{}: {}", level.label(), reason));
        }
    }

    let mut reasons = Vec::new();
    if let Some(d) = deadline {
        if d - now <= Duration::days(config.do_today_within_days) {
            reasons.push(format!("deadline within {} days", config.do_today_within_days));
        }
    }
    if intent == IntentType::Urgent {
        reasons.push("urgent intent".to_string());
    }
    if vip {
        reasons.push("VIP sender".to_string());
    }

    if reasons.is_empty() {
        let level = PriorityLevel::CanWait;
        (level, format!("{}: no pressing deadline", level.label()))
    } else {
        let level = PriorityLevel::DoToday;
        (level, format!("{}: {}", level.label(), reasons.join(" + ")))
    }
}

/// Weighted priority score in `[0, 100]`, computed even when the bucket is
/// coarse so the UI sort order stays total.
fn score(
    urgency: u8,
    deadline: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    config: &TriageConfig,
) -> f32 {
    let proximity = deadline.map_or(0.0, |d| deadline_proximity(d, now, config));
    (config.urgency_weight * f32::from(urgency) + config.deadline_weight * proximity)
        .clamp(0.0, 100.0)
}

/// 100 when overdue or inside the do-now window, decaying linearly to 0 at
/// the horizon.
fn deadline_proximity(deadline: DateTime<Utc>, now: DateTime<Utc>, config: &TriageConfig) -> f32 {
    let knee_hours = config.do_now_within_hours as f32;
    let horizon_hours = (config.deadline_horizon_days * 24) as f32;
    let until_hours = (deadline - now).num_minutes() as f32 / 60.0;

    if until_hours <= knee_hours {
        100.0
    } else if until_hours >= horizon_hours {
        0.0
    } else {
        100.0 * (horizon_hours - until_hours) / (horizon_hours - knee_hours)
    }
}

fn is_vip_sender(participants: &[String], vip_senders: &[String]) -> bool {
    participants.iter().any(|participant| {
        let participant = participant.trim().to_lowercase();
        vip_senders.iter().any(|entry| {
            let entry = entry.trim().to_lowercase();
            if entry.starts_with('@') {
                participant.ends_with(&entry)
            } else {
                participant == entry
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intel::{AttachmentIntel, DeadlineCandidate};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap()
    }

    fn thread(id: &str) -> Thread {
        Thread {
            thread_id: id.to_string(),
            subject: format!("Subject for {}", id),
            summary: "A summary".to_string(),
            intent: IntentType::ActionRequired,
            urgency_score: 50,
            last_updated: Utc.with_ymd_and_hms(2024, 3, 3, 12, 0, 0).unwrap(),
            has_attachments: false,
            participants: vec!["alice@client.example".to_string()],
        }
    }

    fn intel(thread: &Thread) -> ThreadIntel {
        ThreadIntel {
            thread_id: thread.thread_id.clone(),
            summary: thread.summary.clone(),
            intent: thread.intent,
            urgency_score: thread.urgency_score,
            main_ask: None,
            decision_needed: None,
            extracted_deadlines: vec![],
            entities: vec![],
            attachment_summaries: vec![],
            suggested_action: None,
            suggested_reply_points: vec![],
            model_version: "test-model".to_string(),
            processed_at: now(),
        }
    }

    fn deadline_in(hours: i64, confidence: f32) -> DeadlineCandidate {
        DeadlineCandidate {
            raw_text: format!("in {} hours", hours),
            normalized: Some(now() + Duration::hours(hours)),
            confidence,
            source: "body".to_string(),
        }
    }

    #[test]
    fn test_deadline_under_24h_is_do_now() {
        let t = thread("t1");
        let mut i = intel(&t);
        i.extracted_deadlines = vec![deadline_in(18, 0.9)];

        let task = derive_task(&t, Some(&i), now(), &TriageConfig::default())
            .expect("should derive")
            .expect("should produce a task");
        assert_eq!(task.priority, PriorityLevel::DoNow);
        assert_eq!(task.deadline_source.as_deref(), Some("in 18 hours"));
    }

    #[test]
    fn test_overdue_deadline_is_do_now_with_full_proximity() {
        let t = thread("t1");
        let mut i = intel(&t);
        i.extracted_deadlines = vec![deadline_in(-6, 0.9)];

        let task = derive_task(&t, Some(&i), now(), &TriageConfig::default())
            .expect("should derive")
            .expect("should produce a task");
        assert_eq!(task.priority, PriorityLevel::DoNow);
        assert_eq!(task.priority_explanation, "Do now: deadline overdue");
        // 0.6 * 50 + 0.4 * 100
        assert!((task.priority_score - 70.0).abs() < 1e-4);
    }

    #[test]
    fn test_deadline_within_week_is_do_today() {
        let t = thread("t1");
        let mut i = intel(&t);
        i.extracted_deadlines = vec![deadline_in(3 * 24, 0.9)];

        let task = derive_task(&t, Some(&i), now(), &TriageConfig::default())
            .expect("should derive")
            .expect("should produce a task");
        assert_eq!(task.priority, PriorityLevel::DoToday);
        assert_eq!(task.priority_explanation, "Do today: deadline within 7 days");
    }

    #[test]
    fn test_far_deadline_is_can_wait_with_zero_proximity() {
        let t = thread("t1");
        let mut i = intel(&t);
        i.extracted_deadlines = vec![deadline_in(20 * 24, 0.9)];

        let task = derive_task(&t, Some(&i), now(), &TriageConfig::default())
            .expect("should derive")
            .expect("should produce a task");
        assert_eq!(task.priority, PriorityLevel::CanWait);
        // Proximity is zero past the horizon, only urgency contributes.
        assert!((task.priority_score - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_fyi_without_deadline_or_action_yields_no_task() {
        let mut t = thread("t1");
        t.intent = IntentType::Fyi;
        let i = {
            let mut i = intel(&t);
            i.intent = IntentType::Fyi;
            i
        };

        let result = derive_task(&t, Some(&i), now(), &TriageConfig::default())
            .expect("should derive");
        assert!(result.is_none());

        // Same holds with no intel at all.
        let result = derive_task(&t, None, now(), &TriageConfig::default()).expect("should derive");
        assert!(result.is_none());
    }

    #[test]
    fn test_fyi_with_suggested_action_yields_task() {
        let mut t = thread("t1");
        t.intent = IntentType::Fyi;
        let mut i = intel(&t);
        i.intent = IntentType::Fyi;
        i.suggested_action = Some("Forward to the team".to_string());

        let task = derive_task(&t, Some(&i), now(), &TriageConfig::default())
            .expect("should derive")
            .expect("should produce a task");
        assert_eq!(task.task_type, TaskType::Followup);
        assert_eq!(task.description.as_deref(), Some("Forward to the team"));
    }

    #[test]
    fn test_urgent_intent_without_deadline_is_do_today() {
        let mut t = thread("t1");
        t.intent = IntentType::Urgent;

        let task = derive_task(&t, None, now(), &TriageConfig::default())
            .expect("should derive")
            .expect("should produce a task");
        assert_eq!(task.priority, PriorityLevel::DoToday);
        assert_eq!(task.priority_explanation, "Do today: urgent intent");
        assert_eq!(task.task_type, TaskType::Reply);
        assert_eq!(task.effort, EffortLevel::Quick);
    }

    #[test]
    fn test_vip_sender_promotes_to_do_today() {
        let t = thread("t1");
        let config = TriageConfig {
            vip_senders: vec!["@client.example".to_string()],
            ..TriageConfig::default()
        };

        let task = derive_task(&t, None, now(), &config)
            .expect("should derive")
            .expect("should produce a task");
        assert_eq!(task.priority, PriorityLevel::DoToday);
        assert_eq!(task.priority_explanation, "Do today: VIP sender");
    }

    #[test]
    fn test_vip_exact_address_match_is_case_insensitive() {
        let mut t = thread("t1");
        t.participants = vec!["Boss@Example.com".to_string()];
        let config = TriageConfig {
            vip_senders: vec!["boss@example.com".to_string()],
            ..TriageConfig::default()
        };

        let task = derive_task(&t, None, now(), &config)
            .expect("should derive")
            .expect("should produce a task");
        assert_eq!(task.priority, PriorityLevel::DoToday);
    }

    #[test]
    fn test_combined_do_today_reasons_join_deterministically() {
        let mut t = thread("t1");
        t.intent = IntentType::Urgent;
        let config = TriageConfig {
            vip_senders: vec!["@client.example".to_string()],
            ..TriageConfig::default()
        };

        let task = derive_task(&t, None, now(), &config)
            .expect("should derive")
            .expect("should produce a task");
        assert_eq!(
            task.priority_explanation,
            "Do today: urgent intent + VIP sender"
        );
    }

    #[test]
    fn test_urgent_thread_18h_deadline_scenario() {
        let mut t = thread("t1");
        t.intent = IntentType::Urgent;
        t.urgency_score = 90;
        let mut i = intel(&t);
        i.intent = IntentType::Urgent;
        i.urgency_score = 90;
        i.extracted_deadlines = vec![deadline_in(18, 0.95)];

        let task = derive_task(&t, Some(&i), now(), &TriageConfig::default())
            .expect("should derive")
            .expect("should produce a task");
        assert_eq!(task.priority, PriorityLevel::DoNow);
        assert_eq!(task.task_type, TaskType::Reply);
        assert_eq!(task.effort, EffortLevel::Quick);
        // 0.6 * 90 + 0.4 * 100
        assert!((task.priority_score - 94.0).abs() < 1e-4);
    }

    #[test]
    fn test_high_importance_attachment_requires_review() {
        let t = thread("t1");
        let mut i = intel(&t);
        i.attachment_summaries = vec![AttachmentIntel {
            attachment_id: "a1".to_string(),
            summary: "Revised contract".to_string(),
            key_points: vec!["Payment terms changed".to_string()],
            document_type: "pdf".to_string(),
            importance: Importance::High,
        }];

        let task = derive_task(&t, Some(&i), now(), &TriageConfig::default())
            .expect("should derive")
            .expect("should produce a task");
        assert_eq!(task.task_type, TaskType::Review);
        assert_eq!(task.effort, EffortLevel::DeepWork);
    }

    #[test]
    fn test_attachments_without_intel_require_review() {
        let mut t = thread("t1");
        t.has_attachments = true;

        let task = derive_task(&t, None, now(), &TriageConfig::default())
            .expect("should derive")
            .expect("should produce a task");
        assert_eq!(task.task_type, TaskType::Review);
        assert_eq!(task.effort, EffortLevel::DeepWork);
    }

    #[test]
    fn test_scheduling_intent_is_quick_schedule_task() {
        let mut t = thread("t1");
        t.intent = IntentType::Scheduling;

        let task = derive_task(&t, None, now(), &TriageConfig::default())
            .expect("should derive")
            .expect("should produce a task");
        assert_eq!(task.task_type, TaskType::Schedule);
        assert_eq!(task.effort, EffortLevel::Quick);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let mut t = thread("t1");
        t.intent = IntentType::Urgent;
        let mut i = intel(&t);
        i.intent = IntentType::Urgent;
        i.extracted_deadlines = vec![deadline_in(30, 0.7), deadline_in(50, 0.7)];

        let config = TriageConfig::default();
        let first = derive_task(&t, Some(&i), now(), &config).expect("should derive");
        let second = derive_task(&t, Some(&i), now(), &config).expect("should derive");
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_thread_id_fails_validation() {
        let mut t = thread("t1");
        t.thread_id = "  ".to_string();

        let err = derive_task(&t, None, now(), &TriageConfig::default()).unwrap_err();
        assert!(matches!(err, TriageError::Validation(_)));
    }

    #[test]
    fn test_out_of_range_urgency_fails_validation() {
        let mut t = thread("t1");
        t.urgency_score = 150;

        let err = derive_task(&t, None, now(), &TriageConfig::default()).unwrap_err();
        assert!(matches!(err, TriageError::Validation(_)));
    }

    #[test]
    fn test_mismatched_intel_fails_validation() {
        let t = thread("t1");
        let mut i = intel(&t);
        i.thread_id = "other".to_string();

        let err = derive_task(&t, Some(&i), now(), &TriageConfig::default()).unwrap_err();
        assert!(matches!(err, TriageError::Validation(_)));
    }

    #[test]
    fn test_out_of_range_confidence_fails_validation() {
        let t = thread("t1");
        let mut i = intel(&t);
        i.extracted_deadlines = vec![deadline_in(10, 1.5)];

        let err = derive_task(&t, Some(&i), now(), &TriageConfig::default()).unwrap_err();
        assert!(matches!(err, TriageError::Validation(_)));
    }

    fn candidate_for(id: &str, hours: Option<i64>, urgency: u8) -> TaskCandidate {
        let mut t = thread(id);
        t.urgency_score = urgency;
        let mut i = intel(&t);
        if let Some(hours) = hours {
            i.extracted_deadlines = vec![deadline_in(hours, 0.9)];
        }
        derive_task(&t, Some(&i), now(), &TriageConfig::default())
            .expect("should derive")
            .expect("should produce a task")
    }

    #[test]
    fn test_sort_order_is_total_and_stable() {
        let a = candidate_for("a", Some(18), 50);
        let b = candidate_for("b", Some(12), 50);
        let c = candidate_for("c", None, 80);
        let d = candidate_for("d", None, 80);

        let mut forward = vec![a.clone(), b.clone(), c.clone(), d.clone()];
        let mut reverse = vec![d, c, b, a];
        sort_candidates(&mut forward);
        sort_candidates(&mut reverse);

        let order: Vec<&str> = forward.iter().map(|t| t.thread_id.as_str()).collect();
        // Equal scores break by earliest deadline, then by thread id for the
        // deadline-less pair (identical last_updated).
        assert_eq!(order, vec!["b", "a", "c", "d"]);
        assert_eq!(forward, reverse);

        let resorted = {
            let mut again = forward.clone();
            sort_candidates(&mut again);
            again
        };
        assert_eq!(forward, resorted);
    }

    #[test]
    fn test_tasks_without_deadline_sort_after_equal_score_with_deadline() {
        // Force a score tie so only the deadline tie-break decides.
        let mut with_deadline = candidate_for("a", Some(18), 50);
        let mut without = candidate_for("b", None, 50);
        with_deadline.priority_score = 70.0;
        without.priority_score = 70.0;

        let mut list = vec![without.clone(), with_deadline.clone()];
        sort_candidates(&mut list);
        assert_eq!(list[0].thread_id, "a");
        assert_eq!(list[1].thread_id, "b");
    }

    #[test]
    fn test_into_task_stamps_identity_and_status() {
        let candidate = candidate_for("a", Some(18), 50);
        let id = Uuid::new_v4();
        let created = now() + Duration::minutes(5);
        let task = candidate.clone().into_task(id, "user-1", created);

        assert_eq!(task.task_id, id);
        assert_eq!(task.user_id, "user-1");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.created_at, created);
        assert_eq!(task.updated_at, created);
        assert_eq!(task.priority, candidate.priority);
        assert_eq!(task.thread_id, candidate.thread_id);
    }

    #[test]
    fn test_proximity_decays_linearly_between_knee_and_horizon() {
        let config = TriageConfig::default();
        // Midpoint between 24h and 336h is 180h; proximity should be 50.
        let mid = deadline_proximity(now() + Duration::hours(180), now(), &config);
        assert!((mid - 50.0).abs() < 1e-3);

        let near = deadline_proximity(now() + Duration::hours(24), now(), &config);
        assert!((near - 100.0).abs() < 1e-3);

        let far = deadline_proximity(now() + Duration::hours(336), now(), &config);
        assert!(far.abs() < 1e-3);
    }
}
