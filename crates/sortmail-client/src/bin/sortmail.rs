use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use url::Url;
use uuid::Uuid;

use sortmail_client::{
    BackendIntel, CannedIntel, ClientConfig, CredentialStore, FileCredentialStore, IntelService,
    NoDelay, PageTransport, RuntimeEnv, SessionState, Sortmail,
};
use sortmail_core::api::{TaskListQuery, TaskUpdateRequest, ThreadListQuery};
use sortmail_core::{
    derive_task, sort_candidates, Draft, DraftTone, Task, TaskCandidate, TaskStatus, TriageConfig,
    User,
};

#[derive(Parser)]
#[command(name = "sortmail")]
#[command(about = "CLI for the SortMail email-triage backend")]
#[command(
    long_about = "A command-line client for the SortMail backend.\n\n\
    Signs in via the backend's OAuth flow, lists analyzed threads and derived\n\
    tasks, runs client-side triage, and generates briefings and reply drafts."
)]
struct Cli {
    /// Backend base URL to connect to.
    ///
    /// Required in production; development falls back to the local backend.
    #[arg(long, env = "SORTMAIL_API_URL", value_name = "URL")]
    base_url: Option<String>,

    /// Runtime environment ("development" or "production").
    ///
    /// In production an unset base URL is a fatal configuration error.
    #[arg(long, env = "SORTMAIL_ENV", default_value = "development")]
    env: String,

    /// Path of the bearer-token cache file.
    #[arg(long, env = "SORTMAIL_TOKEN_CACHE", default_value = ".sortmail_token")]
    token_cache: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in via the backend's OAuth provider
    ///
    /// Without --token, prints the provider URL to open in a browser.
    /// The redirect lands on a URL containing a one-time token parameter;
    /// pass that token back with --token to complete the sign-in.
    Login {
        /// One-time token from the OAuth redirect URL.
        #[arg(long, value_name = "TOKEN")]
        token: Option<String>,
    },

    /// Show the signed-in user
    Me,

    /// Browse analyzed email threads
    Threads {
        #[command(subcommand)]
        action: ThreadAction,
    },

    /// List and update derived tasks
    Tasks {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Run client-side triage over the current threads
    ///
    /// Fetches every thread, analyzes it, derives task candidates with the
    /// local priority rules, and prints them in display order.
    Triage {
        /// Use the deterministic offline analyzer instead of the backend.
        #[arg(long)]
        offline: bool,

        /// High-importance sender: a full address or an @domain suffix.
        /// May be given multiple times.
        #[arg(long = "vip", value_name = "ADDRESS")]
        vip: Vec<String>,
    },

    /// Print a briefing of the current threads
    Briefing {
        /// Use the deterministic offline analyzer instead of the backend.
        #[arg(long)]
        offline: bool,
    },

    /// Generate or fetch a reply draft
    Draft {
        /// Thread to draft a reply for.
        #[arg(value_name = "THREAD_ID")]
        thread_id: Option<String>,

        /// Tone of the reply: brief, normal, or formal.
        #[arg(long, default_value = "normal")]
        tone: String,

        /// Use the deterministic offline analyzer instead of the backend.
        #[arg(long)]
        offline: bool,

        /// Fetch an existing draft by id instead of generating one.
        #[arg(long, value_name = "DRAFT_ID", conflicts_with = "thread_id")]
        show: Option<String>,

        /// Regenerate an existing draft by id.
        #[arg(long, value_name = "DRAFT_ID", conflicts_with = "thread_id")]
        regenerate: Option<String>,
    },

    /// List sent threads still waiting for a reply
    Waiting,

    /// Show dashboard counts and priority tasks
    Dashboard,

    /// Trigger a mailbox sync, or show sync status
    Sync {
        /// Show the current sync status instead of triggering a sync.
        #[arg(long)]
        status: bool,
    },

    /// List connected mail accounts
    Accounts,

    /// Check that the backend is reachable
    Health,

    /// Sign out and discard the cached token
    Logout,
}

#[derive(Subcommand)]
enum ThreadAction {
    /// List threads with intent and urgency
    List {
        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show one thread in full
    Show {
        #[arg(value_name = "THREAD_ID")]
        id: String,
    },

    /// Request a fresh analysis of a thread
    Refresh {
        #[arg(value_name = "THREAD_ID")]
        id: String,
    },
}

#[derive(Subcommand)]
enum TaskAction {
    /// List tasks, optionally filtered by status
    List {
        /// Filter: pending, in_progress, completed, or dismissed.
        #[arg(long)]
        status: Option<String>,
    },

    /// Mark a task as completed
    Done {
        #[arg(value_name = "TASK_ID")]
        id: Uuid,
    },

    /// Dismiss a task
    Dismiss {
        #[arg(value_name = "TASK_ID")]
        id: Uuid,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let env = if cli.env.eq_ignore_ascii_case("production") {
        RuntimeEnv::Production
    } else {
        RuntimeEnv::Development
    };
    let config = ClientConfig::resolve(cli.base_url.as_deref(), env, PageTransport::Insecure)?;
    let store: Arc<dyn CredentialStore> = Arc::new(FileCredentialStore::new(&cli.token_cache));
    let client = Sortmail::new(config, store)?;

    match cli.command {
        Commands::Login { token } => login(&client, token).await?,
        Commands::Me => {
            let user = require_session(&client).await?;
            println!("{} <{}>", user.name.as_deref().unwrap_or("(no name)"), user.email);
        }
        Commands::Threads { action } => {
            require_session(&client).await?;
            handle_threads(&client, action).await?;
        }
        Commands::Tasks { action } => {
            require_session(&client).await?;
            handle_tasks(&client, action).await?;
        }
        Commands::Triage { offline, vip } => {
            require_session(&client).await?;
            triage(&client, offline, vip).await?;
        }
        Commands::Briefing { offline } => {
            require_session(&client).await?;
            let listing = client.api.list_threads(&ThreadListQuery::default()).await?;
            let service = intel_service(&client, offline);
            let briefing = service
                .generate_briefing(&listing.threads)
                .await
                .context("briefing unavailable")?;
            println!("{}", briefing);
        }
        Commands::Draft {
            thread_id,
            tone,
            offline,
            show,
            regenerate,
        } => {
            require_session(&client).await?;
            handle_draft(&client, thread_id, &tone, offline, show, regenerate).await?;
        }
        Commands::Waiting => {
            require_session(&client).await?;
            let items = client.api.reminders().await?;
            if items.is_empty() {
                println!("Nothing waiting on a reply.");
            }
            let now = Utc::now();
            for item in items {
                println!(
                    "{:>3}d  {} — {}",
                    item.days_pending(now),
                    item.recipient,
                    item.subject
                );
            }
        }
        Commands::Dashboard => {
            require_session(&client).await?;
            let dashboard = client.api.dashboard().await?;
            println!(
                "Do now: {}   Do today: {}   Can wait: {}   Waiting for: {}",
                dashboard.stats.do_now,
                dashboard.stats.do_today,
                dashboard.stats.can_wait,
                dashboard.stats.waiting_for
            );
            for task in &dashboard.priority_tasks {
                print_task(task);
            }
        }
        Commands::Sync { status } => {
            require_session(&client).await?;
            if status {
                let s = client.api.sync_status().await?;
                let last = s
                    .last_sync_at
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| "never".to_string());
                println!("Status: {} (last sync: {})", s.status, last);
                if let Some(error) = s.error {
                    println!("Error: {}", error);
                }
            } else {
                let result = client.api.trigger_sync().await?;
                println!("{}", result.message);
            }
        }
        Commands::Accounts => {
            require_session(&client).await?;
            let response = client.api.connected_accounts().await?;
            if response.accounts.is_empty() {
                println!("No connected accounts.");
            }
            for account in response.accounts {
                println!(
                    "{:?}  {}  ({})",
                    account.provider,
                    account.email.as_deref().unwrap_or("(no address)"),
                    account.sync_status
                );
            }
        }
        Commands::Health => {
            let health = client.api.health().await?;
            println!("Backend is {}.", health.status);
        }
        Commands::Logout => {
            client.session.logout().await;
            println!("Signed out.");
        }
    }

    Ok(())
}

async fn login(client: &Sortmail, token: Option<String>) -> anyhow::Result<()> {
    match token {
        None => {
            let url = client.session.login_url().await?;
            println!("Open this URL in a browser to sign in:\n\n  {}\n", url);
            println!("Then complete with: sortmail login --token <TOKEN>");
        }
        Some(token) => {
            // Model the OAuth redirect the browser would land on.
            let mut redirect = Url::parse("http://localhost/callback")?;
            redirect.query_pairs_mut().append_pair("token", &token);

            let outcome = client.session.bootstrap(Some(&redirect)).await;
            match outcome.state {
                SessionState::Authenticated(user) => println!("Signed in as {}.", user.email),
                _ => anyhow::bail!("token was rejected; request a new sign-in URL"),
            }
        }
    }
    Ok(())
}

/// Establish the session from the cached token, failing if it is missing
/// or no longer valid.
async fn require_session(client: &Sortmail) -> anyhow::Result<User> {
    let outcome = client.session.bootstrap(None).await;
    match outcome.state {
        SessionState::Authenticated(user) => Ok(user),
        _ => anyhow::bail!("not signed in; run `sortmail login` first"),
    }
}

async fn handle_threads(client: &Sortmail, action: ThreadAction) -> anyhow::Result<()> {
    match action {
        ThreadAction::List { page, limit } => {
            let listing = client
                .api
                .list_threads(&ThreadListQuery { page, limit })
                .await?;
            if listing.threads.is_empty() {
                println!("No threads.");
            }
            for thread in listing.threads {
                let marker = if thread.has_attachments { "@" } else { " " };
                println!(
                    "{:>3} {:<15} {} {}  [{}]",
                    thread.urgency_score,
                    thread.intent.as_str(),
                    marker,
                    thread.subject,
                    thread.thread_id
                );
            }
        }
        ThreadAction::Show { id } => {
            let thread = client.api.get_thread(&id).await?;
            println!("{}", thread.subject);
            println!("  intent: {} (urgency {})", thread.intent.as_str(), thread.urgency_score);
            println!("  updated: {}", thread.last_updated.to_rfc3339());
            println!("  participants: {}", thread.participants.join(", "));
            println!("  {}", thread.summary);
        }
        ThreadAction::Refresh { id } => {
            let intel = client.api.refresh_thread(&id).await?;
            println!("Analyzed with {}:", intel.model_version);
            println!("  {}", intel.summary);
            if let Some(action) = &intel.suggested_action {
                println!("  suggested: {}", action);
            }
            for deadline in &intel.extracted_deadlines {
                let when = deadline
                    .normalized
                    .map(|d| d.to_rfc3339())
                    .unwrap_or_else(|| "unresolved".to_string());
                println!(
                    "  deadline: {:?} -> {} (confidence {:.2})",
                    deadline.raw_text, when, deadline.confidence
                );
            }
        }
    }
    Ok(())
}

async fn handle_tasks(client: &Sortmail, action: TaskAction) -> anyhow::Result<()> {
    match action {
        TaskAction::List { status } => {
            let query = TaskListQuery {
                status: status.as_deref().map(parse_status).transpose()?,
                ..TaskListQuery::default()
            };
            let tasks = client.api.list_tasks(&query).await?;
            if tasks.is_empty() {
                println!("No tasks.");
            }
            for task in tasks {
                print_task(&task);
            }
        }
        TaskAction::Done { id } => {
            let request = TaskUpdateRequest {
                status: Some(TaskStatus::Completed),
                priority: None,
            };
            let task = client.api.update_task(id, &request).await?;
            println!("Completed: {}", task.title);
        }
        TaskAction::Dismiss { id } => {
            client.api.delete_task(id).await?;
            println!("Dismissed task {}.", id);
        }
    }
    Ok(())
}

async fn triage(client: &Sortmail, offline: bool, vip: Vec<String>) -> anyhow::Result<()> {
    let listing = client.api.list_threads(&ThreadListQuery::default()).await?;
    let service = intel_service(client, offline);
    let config = TriageConfig {
        vip_senders: vip,
        ..TriageConfig::default()
    };
    let now = Utc::now();

    let mut candidates = Vec::new();
    for item in listing.threads {
        let thread = client.api.get_thread(&item.thread_id).await?;
        let intel = match service.analyze_thread(&thread).await {
            Ok(intel) => Some(intel),
            Err(e) => {
                tracing::warn!(thread = %thread.thread_id, "analysis unavailable: {}", e);
                None
            }
        };
        match derive_task(&thread, intel.as_ref(), now, &config) {
            Ok(Some(candidate)) => candidates.push(candidate),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(thread = %thread.thread_id, "skipping malformed thread: {}", e)
            }
        }
    }

    sort_candidates(&mut candidates);
    if candidates.is_empty() {
        println!("Nothing to triage.");
    }
    for candidate in candidates {
        print_candidate(&candidate);
    }
    Ok(())
}

async fn handle_draft(
    client: &Sortmail,
    thread_id: Option<String>,
    tone: &str,
    offline: bool,
    show: Option<String>,
    regenerate: Option<String>,
) -> anyhow::Result<()> {
    let draft = if let Some(draft_id) = show {
        client.api.get_draft(&draft_id).await?
    } else if let Some(draft_id) = regenerate {
        client.api.regenerate_draft(&draft_id).await?
    } else {
        let thread_id = thread_id.context("a thread id is required to generate a draft")?;
        let thread = client.api.get_thread(&thread_id).await?;
        let service = intel_service(client, offline);
        service
            .generate_draft_reply(&thread, parse_tone(tone)?)
            .await
            .context("draft generation unavailable")?
    };
    print_draft(&draft);
    Ok(())
}

fn intel_service(client: &Sortmail, offline: bool) -> Box<dyn IntelService> {
    if offline {
        Box::new(CannedIntel::new(Box::new(NoDelay)))
    } else {
        Box::new(BackendIntel::new(client.api.clone()))
    }
}

fn parse_tone(s: &str) -> anyhow::Result<DraftTone> {
    match s.to_lowercase().as_str() {
        "brief" => Ok(DraftTone::Brief),
        "normal" => Ok(DraftTone::Normal),
        "formal" => Ok(DraftTone::Formal),
        other => anyhow::bail!("unknown tone {:?}; expected brief, normal, or formal", other),
    }
}

fn parse_status(s: &str) -> anyhow::Result<TaskStatus> {
    match s.to_lowercase().as_str() {
        "pending" => Ok(TaskStatus::Pending),
        "in_progress" => Ok(TaskStatus::InProgress),
        "completed" => Ok(TaskStatus::Completed),
        "dismissed" => Ok(TaskStatus::Dismissed),
        other => anyhow::bail!(
            "unknown status {:?}; expected pending, in_progress, completed, or dismissed",
            other
        ),
    }
}

fn print_task(task: &Task) {
    println!(
        "[{}] {:<8} {:>5.1}  {:<9} {}",
        &task.task_id.to_string()[..8],
        task.priority.as_str(),
        task.priority_score,
        task.effort.as_str(),
        task.title
    );
    println!("    {}", task.priority_explanation);
    if let Some(deadline) = task.deadline {
        let source = task.deadline_source.as_deref().unwrap_or("-");
        println!("    due {} ({})", deadline.to_rfc3339(), source);
    }
}

fn print_candidate(candidate: &TaskCandidate) {
    println!(
        "{:<8} {:>5.1}  {:<9} {}",
        candidate.priority.as_str(),
        candidate.priority_score,
        candidate.effort.as_str(),
        candidate.title
    );
    println!("    {}", candidate.priority_explanation);
    if let Some(description) = &candidate.description {
        println!("    {}", description);
    }
}

fn print_draft(draft: &Draft) {
    println!("{}", draft.content);
    if draft.has_unresolved_placeholders {
        println!("\nFill in before sending: {}", draft.placeholders.join(", "));
    }
}
