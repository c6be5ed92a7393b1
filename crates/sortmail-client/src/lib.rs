//! Async client SDK for the SortMail backend.
//!
//! Assembles the transport, the typed endpoint layer, the session state
//! machine, and the intelligence facade. The pure triage rules live in
//! `sortmail-core`.

use std::sync::Arc;

pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod intel;
pub mod session;
pub mod views;

pub use config::{ClientConfig, PageTransport, RuntimeEnv};
pub use endpoints::Api;
pub use error::{ClientError, IntelError};
pub use intel::{BackendIntel, CannedIntel, Delay, FixedDelay, IntelService, NoDelay};
pub use session::{
    BootOutcome, CredentialStore, FileCredentialStore, MemoryCredentialStore, SessionManager,
    SessionState, TokenCell,
};
pub use views::{Applied, LatestOnly, RequestTag, ViewSequencer};

/// Fully wired client: typed API plus session manager sharing one token
/// cell, with the 401 sink installed.
pub struct Sortmail {
    pub api: Api,
    pub session: Arc<SessionManager>,
}

impl Sortmail {
    pub fn new(
        config: ClientConfig,
        store: Arc<dyn CredentialStore>,
    ) -> Result<Self, ClientError> {
        let token = TokenCell::new();
        let http = http::Http::new(&config, token.clone())?;
        let api = Api::new(http);
        let session = SessionManager::new(api.clone(), store, token);
        Ok(Sortmail { api, session })
    }
}
