//! Request and response shapes for the backend HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::intel::DraftTone;
use crate::models::{
    ConnectedAccount, DashboardStats, PriorityLevel, Task, TaskStatus, ThreadListItem, WaitingItem,
};

// ============================================================================
// Thread API Types
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThreadListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadListResponse {
    pub threads: Vec<ThreadListItem>,
    pub total: u32,
    pub page: u32,
    pub limit: u32,
}

// ============================================================================
// Task API Types
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskListQuery {
    pub status: Option<TaskStatus>,
    pub priority: Option<PriorityLevel>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskUpdateRequest {
    pub status: Option<TaskStatus>,
    pub priority: Option<PriorityLevel>,
}

// ============================================================================
// Draft API Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftRequest {
    pub thread_id: String,
    pub tone: DraftTone,
    pub additional_context: Option<String>,
}

// ============================================================================
// Auth API Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUrlResponse {
    pub auth_url: String,
}

// ============================================================================
// Dashboard & Sync API Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub priority_tasks: Vec<Task>,
    pub waiting_for: Vec<WaitingItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncTriggerResponse {
    pub triggered: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncStatusResponse {
    pub status: String,
    pub last_sync_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectedAccountsResponse {
    pub accounts: Vec<ConnectedAccount>,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

// ============================================================================
// Error Types
// ============================================================================

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
