//! Domain contracts and the pure triage engine for the SortMail client SDK.
//!
//! This crate has no I/O: it defines the wire shapes exchanged with the
//! backend (`models`, `intel`, `api`) and the deterministic rules that turn
//! an analyzed email thread into a prioritized task (`triage`).

pub mod api;
pub mod intel;
pub mod models;
pub mod triage;

pub use intel::{AttachmentIntel, DeadlineCandidate, Draft, DraftTone, ExtractedEntity, ThreadIntel};
pub use models::{
    ConnectedAccount, DashboardStats, EffortLevel, Importance, IntentType, PriorityLevel, Provider,
    Task, TaskStatus, TaskType, Thread, ThreadListItem, User, WaitingItem,
};
pub use triage::{derive_task, sort_candidates, TaskCandidate, TriageConfig, TriageError};
