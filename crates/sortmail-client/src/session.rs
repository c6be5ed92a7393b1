//! Session bootstrap and lifecycle.
//!
//! The credential strategy is a bearer token: one opaque token string,
//! persisted through a `CredentialStore` and attached by the transport.
//! Cookies are not used anywhere. All credential writes go through the
//! `SessionManager`, so the stored token has a single writer.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, RwLock, Weak};

use async_trait::async_trait;
use tokio::sync::watch;
use url::Url;

use sortmail_core::User;

use crate::endpoints::Api;
use crate::error::ClientError;

/// Shared read-only view of the active bearer token. The transport reads
/// it; only the session manager writes it.
#[derive(Clone, Default)]
pub struct TokenCell(Arc<RwLock<Option<String>>>);

impl TokenCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<String> {
        match self.0.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub(crate) fn set(&self, token: String) {
        match self.0.write() {
            Ok(mut guard) => *guard = Some(token),
            Err(poisoned) => *poisoned.into_inner() = Some(token),
        }
    }

    pub(crate) fn clear(&self) {
        match self.0.write() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}

/// Receiver of the transport's unauthorized notifications.
#[async_trait]
pub trait SessionSink: Send + Sync {
    async fn session_invalidated(&self);
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Unknown,
    Checking,
    Authenticated(User),
    LoggingOut,
    Unauthenticated,
}

impl SessionState {
    /// Whether the bootstrap check has finished. Hosts must render a
    /// neutral state until then, never a flash of either outcome.
    pub fn is_settled(&self) -> bool {
        !matches!(self, SessionState::Unknown | SessionState::Checking)
    }
}

/// Persistence for the one credential artifact.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn load(&self) -> anyhow::Result<Option<String>>;
    async fn store(&self, token: &str) -> anyhow::Result<()>;
    async fn clear(&self) -> anyhow::Result<()>;
}

/// Token cache on disk, mode 0600 on unix.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileCredentialStore { path: path.into() }
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> anyhow::Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                let token = content.trim();
                Ok(if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn store(&self, token: &str) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.path, token).await?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600)).await?;
        }
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        MemoryCredentialStore {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> anyhow::Result<Option<String>> {
        Ok(self.token.lock().unwrap_or_else(|p| p.into_inner()).clone())
    }

    async fn store(&self, token: &str) -> anyhow::Result<()> {
        *self.token.lock().unwrap_or_else(|p| p.into_inner()) = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        *self.token.lock().unwrap_or_else(|p| p.into_inner()) = None;
        Ok(())
    }
}

/// Outcome of `SessionManager::bootstrap`.
#[derive(Debug, Clone, PartialEq)]
pub struct BootOutcome {
    pub state: SessionState,
    /// The redirect URL with the one-time token parameter removed, when one
    /// was consumed. Hosts must replace the visible address with this so the
    /// token never leaks through history or referrers.
    pub sanitized_url: Option<Url>,
}

/// Take the one-time `token` parameter out of an OAuth redirect URL.
///
/// Returns the token and the URL with the parameter stripped, preserving
/// every other query parameter. Returns `None` when no token is present.
pub fn consume_redirect_token(url: &Url) -> Option<(String, Url)> {
    let token = url
        .query_pairs()
        .find(|(key, value)| key == "token" && !value.is_empty())
        .map(|(_, value)| value.into_owned())?;

    let remaining: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "token")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut sanitized = url.clone();
    sanitized.set_query(None);
    if !remaining.is_empty() {
        sanitized.query_pairs_mut().extend_pairs(remaining);
    }

    Some((token, sanitized))
}

pub struct SessionManager {
    api: Api,
    store: Arc<dyn CredentialStore>,
    token: TokenCell,
    state_tx: watch::Sender<SessionState>,
}

impl SessionManager {
    /// Build the manager and register it as the transport's 401 sink.
    pub fn new(api: Api, store: Arc<dyn CredentialStore>, token: TokenCell) -> Arc<Self> {
        let (state_tx, _) = watch::channel(SessionState::Unknown);
        let manager = Arc::new(SessionManager {
            api,
            store,
            token,
            state_tx,
        });
        let sink: Weak<SessionManager> = Arc::downgrade(&manager);
        manager.api.http().install_sink(sink);
        manager
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    pub fn state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    /// Establish the session at startup.
    ///
    /// A one-time token in the redirect URL wins over a stored one; it is
    /// persisted and the sanitized URL is returned for the host to apply.
    /// The credential is then verified against `/api/auth/me`. Verification
    /// failure of any kind clears the persisted credential and settles the
    /// session as unauthenticated.
    pub async fn bootstrap(&self, redirect: Option<&Url>) -> BootOutcome {
        self.state_tx.send_replace(SessionState::Checking);

        let mut sanitized_url = None;
        if let Some((token, stripped)) = redirect.and_then(consume_redirect_token) {
            if let Err(e) = self.store.store(&token).await {
                tracing::warn!("could not persist redirect token: {:#}", e);
            }
            self.token.set(token);
            sanitized_url = Some(stripped);
        } else {
            match self.store.load().await {
                Ok(Some(token)) => self.token.set(token),
                Ok(None) => {}
                Err(e) => tracing::warn!("could not read credential store: {:#}", e),
            }
        }

        if self.token.get().is_none() {
            let state = SessionState::Unauthenticated;
            self.state_tx.send_replace(state.clone());
            return BootOutcome {
                state,
                sanitized_url,
            };
        }

        let state = match self.api.me().await {
            Ok(user) => {
                tracing::info!(email = %user.email, "session established");
                SessionState::Authenticated(user)
            }
            Err(e) => {
                tracing::info!("session verification failed: {}", e);
                self.clear_credential().await;
                SessionState::Unauthenticated
            }
        };
        self.state_tx.send_replace(state.clone());
        BootOutcome {
            state,
            sanitized_url,
        }
    }

    /// Fetch the identity provider URL. Not a state transition: the host
    /// hands control to the provider and the machine resumes at bootstrap
    /// on return.
    pub async fn login_url(&self) -> Result<String, ClientError> {
        Ok(self.api.auth_url().await?.auth_url)
    }

    /// End the session. Server-side invalidation is best effort; local
    /// credential material is cleared unconditionally.
    pub async fn logout(&self) {
        self.state_tx.send_replace(SessionState::LoggingOut);
        if let Err(e) = self.api.logout().await {
            tracing::warn!("server-side logout failed: {}", e);
        }
        self.clear_credential().await;
        self.state_tx.send_replace(SessionState::Unauthenticated);
    }

    /// The single entry point for asynchronous session expiry. Clears the
    /// credential and settles as unauthenticated exactly once; repeat calls
    /// while already unauthenticated are no-ops.
    pub async fn invalidate(&self) {
        if *self.state_tx.borrow() == SessionState::Unauthenticated {
            return;
        }
        tracing::info!("session invalidated");
        self.clear_credential().await;
        self.state_tx.send_replace(SessionState::Unauthenticated);
    }

    async fn clear_credential(&self) {
        self.token.clear();
        if let Err(e) = self.store.clear().await {
            tracing::warn!("could not clear credential store: {:#}", e);
        }
    }
}

#[async_trait]
impl SessionSink for SessionManager {
    async fn session_invalidated(&self) {
        self.invalidate().await;
    }
}
