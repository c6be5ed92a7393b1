//! Typed operations over the backend API paths.

use uuid::Uuid;

use sortmail_core::api::{
    AuthUrlResponse, ConnectedAccountsResponse, DashboardResponse, DraftRequest, HealthResponse,
    SyncStatusResponse, SyncTriggerResponse, TaskListQuery, TaskUpdateRequest, ThreadListQuery,
    ThreadListResponse,
};
use sortmail_core::{DashboardStats, Draft, Task, Thread, ThreadIntel, User, WaitingItem};

use crate::error::ClientError;
use crate::http::Http;

#[derive(Clone)]
pub struct Api {
    http: Http,
}

impl Api {
    pub fn new(http: Http) -> Self {
        Api { http }
    }

    pub(crate) fn http(&self) -> &Http {
        &self.http
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    pub async fn me(&self) -> Result<User, ClientError> {
        self.http.get("/api/auth/me").await
    }

    pub async fn auth_url(&self) -> Result<AuthUrlResponse, ClientError> {
        self.http.get("/api/auth/google").await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let _: serde_json::Value = self.http.post_empty("/api/auth/logout").await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Threads
    // ------------------------------------------------------------------

    pub async fn list_threads(
        &self,
        query: &ThreadListQuery,
    ) -> Result<ThreadListResponse, ClientError> {
        self.http.get_query("/api/threads", query).await
    }

    pub async fn get_thread(&self, thread_id: &str) -> Result<Thread, ClientError> {
        self.http.get(&format!("/api/threads/{}", thread_id)).await
    }

    /// Request a fresh analysis. The result is a new immutable intel
    /// record; the previous one is never mutated in place.
    pub async fn refresh_thread(&self, thread_id: &str) -> Result<ThreadIntel, ClientError> {
        self.http
            .post_empty(&format!("/api/threads/{}/refresh", thread_id))
            .await
    }

    // ------------------------------------------------------------------
    // Tasks
    // ------------------------------------------------------------------

    pub async fn list_tasks(&self, query: &TaskListQuery) -> Result<Vec<Task>, ClientError> {
        self.http.get_query("/api/tasks", query).await
    }

    pub async fn update_task(
        &self,
        task_id: Uuid,
        request: &TaskUpdateRequest,
    ) -> Result<Task, ClientError> {
        self.http
            .patch(&format!("/api/tasks/{}", task_id), request)
            .await
    }

    pub async fn delete_task(&self, task_id: Uuid) -> Result<(), ClientError> {
        self.http.delete(&format!("/api/tasks/{}", task_id)).await
    }

    // ------------------------------------------------------------------
    // Drafts
    // ------------------------------------------------------------------

    pub async fn create_draft(&self, request: &DraftRequest) -> Result<Draft, ClientError> {
        self.http.post("/api/drafts", request).await
    }

    pub async fn get_draft(&self, draft_id: &str) -> Result<Draft, ClientError> {
        self.http.get(&format!("/api/drafts/{}", draft_id)).await
    }

    pub async fn regenerate_draft(&self, draft_id: &str) -> Result<Draft, ClientError> {
        self.http
            .post_empty(&format!("/api/drafts/{}/regenerate", draft_id))
            .await
    }

    // ------------------------------------------------------------------
    // Dashboard, reminders, sync
    // ------------------------------------------------------------------

    pub async fn dashboard(&self) -> Result<DashboardResponse, ClientError> {
        self.http.get("/api/dashboard").await
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        self.http.get("/api/dashboard/stats").await
    }

    pub async fn reminders(&self) -> Result<Vec<WaitingItem>, ClientError> {
        self.http.get("/api/reminders").await
    }

    pub async fn trigger_sync(&self) -> Result<SyncTriggerResponse, ClientError> {
        self.http.post_empty("/api/emails/sync").await
    }

    pub async fn sync_status(&self) -> Result<SyncStatusResponse, ClientError> {
        self.http.get("/api/emails/sync/status").await
    }

    pub async fn connected_accounts(&self) -> Result<ConnectedAccountsResponse, ClientError> {
        self.http.get("/api/connected-accounts").await
    }

    /// Unauthenticated liveness probe.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.http.get("/health").await
    }
}
