//! Central application state shared across egui views.
//!
//! Views call the action methods (`handle_login`, `submit_search`, ...) from
//! UI events. Each action starts a background request in the owning panel's
//! [`Pending`] slot; [`AppState::check_results`] runs once per frame, takes
//! whatever has arrived and applies it. Every error ends up in the notice
//! banner, except an expired session, which sends the user to the login view.
//! Team usage and success predictions are optional extras: their failures are
//! only logged, and the view shows what it has without them.

pub mod pending;

use std::path::PathBuf;

use tokio::runtime::{Handle, Runtime};
use tracing::{debug, info, warn};

use crate::client::{ApiClient, ClientContext, View};
use crate::egui_app::panels::admin::ACTIVITY_LIMIT;
use crate::egui_app::panels::analytics::{InsightFeed, RELEASE_LIMIT};
use crate::egui_app::panels::dashboard::RECENT_RELEASES;
use crate::egui_app::panels::workspace::{export_dir, status_update, write_export, ExportKind};
use crate::egui_app::panels::{
    AdminPanel, AnalyticsPanel, AuthForm, AuthMode, DashboardPanel, Notice, ProfilePanel,
    SearchPanel, WorkspacePanel,
};
use crate::egui_app::panels::profile::ProfileState;
use crate::shared::config::AppConfig;
use crate::shared::error::ClientError;
use crate::shared::tender::Tender;
use crate::shared::user::UserRecord;
use crate::shared::workspace::{StatusFilter, WorkspaceStatus};

pub use pending::Pending;

pub struct AppState {
    runtime: Runtime,
    pub context: ClientContext,
    pub current_view: View,
    pub notice: Option<Notice>,
    /// User as of the last frame
    pub user: Option<UserRecord>,
    pub auth: AuthForm,
    pub dashboard: DashboardPanel,
    pub search: SearchPanel,
    pub workspace: WorkspacePanel,
    pub profile: ProfilePanel,
    pub analytics: AnalyticsPanel,
    pub admin: AdminPanel,
    restoring: Pending<bool>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, ClientError> {
        let context = ClientContext::build(config)?;
        Self::with_context(context)
    }

    pub fn with_context(context: ClientContext) -> Result<Self, ClientError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("tenderdesk-net")
            .enable_all()
            .build()?;

        let mut state = Self {
            runtime,
            context,
            current_view: View::default(),
            notice: None,
            user: None,
            auth: AuthForm::default(),
            dashboard: DashboardPanel::default(),
            search: SearchPanel::default(),
            workspace: WorkspacePanel::default(),
            profile: ProfilePanel::default(),
            analytics: AnalyticsPanel::default(),
            admin: AdminPanel::default(),
            restoring: Pending::default(),
        };

        let session = state.context.session.clone();
        let handle = state.handle();
        state
            .restoring
            .start(&handle, async move { session.restore().await });
        state.load_dashboard();
        Ok(state)
    }

    fn handle(&self) -> Handle {
        self.runtime.handle().clone()
    }

    fn client(&self) -> ApiClient {
        self.context.client.clone()
    }

    pub fn is_restoring(&self) -> bool {
        self.restoring.is_busy()
    }

    pub fn is_loading(&self) -> bool {
        self.context.client.loading().is_visible()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Apply everything that arrived since the last frame
    pub fn check_results(&mut self) {
        self.sync_session();

        if let Some(restored) = self.restoring.poll() {
            self.user = self.context.session.current_user();
            if restored {
                self.enter(self.current_view);
            }
        }

        self.check_auth_result();
        self.check_dashboard();
        self.check_search();
        self.check_workspace();
        self.check_profile();
        self.check_analytics();
        self.check_admin();
    }

    // ---- session -------------------------------------------------------

    /// Catch sessions cleared behind our back (401 or lapsed token)
    fn sync_session(&mut self) {
        let snapshot = self.context.session.snapshot();
        if self.user.is_some() && !snapshot.is_authenticated() {
            self.expire_session();
            return;
        }
        self.user = snapshot.user;
    }

    fn expire_session(&mut self) {
        info!("Session expired, returning to login");
        self.context.session.logout();
        self.user = None;
        self.reset_panels();
        self.auth.mode = AuthMode::Login;
        self.current_view = View::Login;
        self.notice = Some(Notice::from(&ClientError::SessionExpired));
    }

    /// Unwrap a result, routing the error to the notice banner or the login view
    fn absorb<T>(&mut self, result: Result<T, ClientError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(ClientError::SessionExpired) => {
                self.expire_session();
                None
            }
            Err(e) => {
                warn!(error = %e, view = self.current_view.name(), "Request failed");
                self.notice = Some(Notice::from(&e));
                None
            }
        }
    }

    /// Like [`AppState::absorb`], but failures other than an expired session
    /// are logged instead of shown
    fn absorb_quietly<T>(&mut self, what: &str, result: Result<T, ClientError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(ClientError::SessionExpired) => {
                self.expire_session();
                None
            }
            Err(e) => {
                warn!(error = %e, what, "Optional request failed");
                None
            }
        }
    }

    fn reset_panels(&mut self) {
        self.dashboard = DashboardPanel::default();
        self.search.reset();
        self.workspace.reset();
        self.profile.reset();
        self.analytics.reset();
        self.admin.reset();
    }

    pub fn handle_login(&mut self) {
        self.auth.error = None;
        let email = self.auth.email.clone();
        let password = self.auth.password.clone();
        let session = self.context.session.clone();
        let handle = self.handle();
        self.auth
            .pending
            .start(&handle, async move { session.login(&email, &password).await });
    }

    pub fn handle_register(&mut self) {
        self.auth.error = None;
        if let Err(e) = self.auth.check_register() {
            self.auth.error = Some(e.to_string());
            return;
        }
        let full_name = self.auth.full_name.clone();
        let email = self.auth.email.clone();
        let password = self.auth.password.clone();
        let session = self.context.session.clone();
        let handle = self.handle();
        self.auth.pending.start(&handle, async move {
            session.register(&full_name, &email, &password).await
        });
    }

    pub fn check_auth_result(&mut self) {
        let Some(result) = self.auth.pending.poll() else {
            return;
        };
        match result {
            Ok(user) => {
                info!(user_id = user.id, "Authentication successful");
                self.auth.finish();
                let welcome = format!("Signed in as {}", user.email);
                self.user = Some(user);
                self.navigate(View::Dashboard);
                self.notice = Some(Notice::success(welcome));
            }
            Err(e) => {
                warn!(error = %e, "Authentication failed");
                self.auth.error = Some(e.to_string());
            }
        }
    }

    pub fn logout(&mut self) {
        self.context.session.logout();
        self.user = None;
        self.reset_panels();
        self.auth = AuthForm {
            email: std::mem::take(&mut self.auth.email),
            ..AuthForm::default()
        };
        self.current_view = View::Login;
        self.notice = Some(Notice::info("You have been logged out"));
    }

    // ---- navigation ----------------------------------------------------

    pub fn navigate(&mut self, target: View) {
        let snapshot = self.context.session.snapshot();
        let navigation = self.context.router.navigate(target, &snapshot);
        debug!(view = navigation.view.name(), "Navigate");
        self.current_view = navigation.view;
        self.notice = navigation.error.map(Notice::error);
        match navigation.view {
            View::Login => self.auth.mode = AuthMode::Login,
            View::Register => self.auth.mode = AuthMode::Register,
            _ => {}
        }
        self.enter(navigation.view);
    }

    /// Load what a view shows on arrival
    fn enter(&mut self, view: View) {
        match view {
            View::Dashboard => self.load_dashboard(),
            View::Workspace => self.load_workspace(),
            View::Profile => self.load_profile(),
            View::Analytics => self.load_analytics(),
            View::Admin => self.load_admin(),
            View::Search | View::Login | View::Register => {}
        }
    }

    // ---- dashboard -----------------------------------------------------

    pub fn load_dashboard(&mut self) {
        let handle = self.handle();
        let client = self.client();
        self.dashboard
            .pending_health
            .start(&handle, async move { client.health().await });

        let Some(user) = self.context.session.current_user() else {
            return;
        };
        let client = self.client();
        self.dashboard.pending_releases.start(&handle, async move {
            client.enriched_releases(RECENT_RELEASES).await
        });
        let client = self.client();
        self.dashboard.pending_profile.start(&handle, async move {
            client.company_profile(user.team_id).await
        });
        let client = self.client();
        self.dashboard
            .pending_limits
            .start(&handle, async move { client.team_limits().await });
    }

    fn check_dashboard(&mut self) {
        if let Some(result) = self.dashboard.pending_health.poll() {
            if let Some(health) = self.absorb(result) {
                self.dashboard.health = Some(health);
            }
        }
        if let Some(result) = self.dashboard.pending_releases.poll() {
            if let Some(releases) = self.absorb(result) {
                self.dashboard.releases = releases;
            }
        }
        if let Some(result) = self.dashboard.pending_profile.poll() {
            if let Some(profile) = self.absorb(result) {
                self.dashboard.apply_profile(profile);
            }
        }
        if let Some(result) = self.dashboard.pending_limits.poll() {
            if let Some(limits) = self.absorb_quietly("team limits", result) {
                self.dashboard.limits = Some(limits);
            }
        }
    }

    // ---- search --------------------------------------------------------

    pub fn submit_search(&mut self) {
        let request = match self.search.form.to_request() {
            Ok(request) => request,
            Err(e) => {
                self.notice = Some(Notice::from(&e));
                return;
            }
        };
        self.notice = None;
        let client = self.client();
        let handle = self.handle();
        self.search
            .pending_search
            .start(&handle, async move { client.search_tenders(&request).await });
    }

    pub fn track_tender(&mut self, tender_id: i64) {
        let client = self.client();
        let handle = self.handle();
        self.search.pending_track.start(&handle, async move {
            client
                .track_tender(tender_id, WorkspaceStatus::Pending, None)
                .await
        });
    }

    pub fn request_summary(&mut self, tender: Tender) {
        let client = self.client();
        let handle = self.handle();
        self.search.pending_summary.start(&handle, async move {
            client
                .extract_summary(&tender)
                .await
                .map(|summary| (tender.id, summary))
        });
    }

    pub fn request_readiness(&mut self, tender_id: i64) {
        let profile_id = match &self.profile.state {
            ProfileState::Loaded(profile) => profile.id,
            _ => None,
        };
        let client = self.client();
        let handle = self.handle();
        self.search.pending_readiness.start(&handle, async move {
            client
                .check_readiness(tender_id, profile_id)
                .await
                .map(|report| (tender_id, report))
        });
    }

    fn check_search(&mut self) {
        if let Some(result) = self.search.pending_search.poll() {
            if let Some(response) = self.absorb(result) {
                info!(results = response.results.len(), "Search complete");
                self.search.apply_results(response);
            }
        }
        if let Some(result) = self.search.pending_track.poll() {
            if let Some(response) = self.absorb(result) {
                self.notice = Some(Notice::success(response.message));
            }
        }
        if let Some(result) = self.search.pending_summary.poll() {
            if let Some((tender_id, summary)) = self.absorb(result) {
                self.search.summaries.insert(tender_id, summary);
            }
        }
        if let Some(result) = self.search.pending_readiness.poll() {
            if let Some((tender_id, report)) = self.absorb(result) {
                self.search.readiness.insert(tender_id, report);
            }
        }
    }

    // ---- workspace -----------------------------------------------------

    pub fn load_workspace(&mut self) {
        let Some(user) = self.context.session.current_user() else {
            return;
        };
        let filter = self.workspace.filter;
        let client = self.client();
        let handle = self.handle();
        self.workspace.pending_list.start(&handle, async move {
            client.workspace_entries(user.team_id, filter).await
        });
    }

    pub fn set_workspace_filter(&mut self, filter: StatusFilter) {
        if self.workspace.filter != filter {
            self.workspace.filter = filter;
            self.load_workspace();
        }
    }

    pub fn update_entry_status(&mut self, entry_id: i64, status: WorkspaceStatus) {
        let update = status_update(status);
        let client = self.client();
        let handle = self.handle();
        self.workspace.pending_mutation.start(&handle, async move {
            client.update_workspace_entry(entry_id, &update).await
        });
    }

    pub fn save_entry_notes(&mut self, entry_id: i64) {
        let update = self.workspace.notes_update(entry_id);
        let client = self.client();
        let handle = self.handle();
        self.workspace.pending_mutation.start(&handle, async move {
            client.update_workspace_entry(entry_id, &update).await
        });
    }

    pub fn remove_entry(&mut self, entry_id: i64) {
        let client = self.client();
        let handle = self.handle();
        self.workspace.pending_mutation.start(&handle, async move {
            client.remove_workspace_entry(entry_id).await
        });
    }

    pub fn export(&mut self, kind: ExportKind) {
        let file_name = kind.file_name(chrono::Local::now().naive_local());
        let dir: PathBuf = export_dir();
        let client = self.client();
        let handle = self.handle();
        self.workspace.pending_export.start(&handle, async move {
            let file = match kind {
                ExportKind::WorkspaceCsv => client.export_workspace_csv().await?,
                ExportKind::ReadinessScores => client.export_readiness_scores().await?,
            };
            debug!(remote_name = %file.filename, local_name = %file_name, "Writing export");
            let path = write_export(&dir, &file_name, &file.content)?;
            Ok((kind, path))
        });
    }

    fn check_workspace(&mut self) {
        if let Some(result) = self.workspace.pending_list.poll() {
            if let Some(entries) = self.absorb(result) {
                self.workspace.apply_entries(entries);
            }
        }
        if let Some(result) = self.workspace.pending_mutation.poll() {
            if let Some(response) = self.absorb(result) {
                self.notice = Some(Notice::success(response.message));
                self.load_workspace();
            }
        }
        if let Some(result) = self.workspace.pending_export.poll() {
            if let Some((kind, path)) = self.absorb(result) {
                info!(?kind, path = %path.display(), "Export written");
                self.notice = Some(Notice::success(kind.done_message(&path)));
            }
        }
    }

    // ---- profile -------------------------------------------------------

    pub fn load_profile(&mut self) {
        let Some(user) = self.context.session.current_user() else {
            return;
        };
        let client = self.client();
        let handle = self.handle();
        self.profile.pending_load.start(&handle, async move {
            client.company_profile(user.team_id).await
        });
    }

    pub fn save_profile(&mut self) {
        let draft = match self.profile.prepared_draft() {
            Ok(draft) => draft,
            Err(e) => {
                self.notice = Some(Notice::from(&e));
                return;
            }
        };
        let client = self.client();
        let handle = self.handle();
        self.profile.pending_save.start(&handle, async move {
            client.save_company_profile(&draft).await
        });
    }

    fn check_profile(&mut self) {
        if let Some(result) = self.profile.pending_load.poll() {
            if let Some(profile) = self.absorb(result) {
                let team_id = self.user.as_ref().map_or(0, |u| u.team_id);
                self.profile.apply_loaded(team_id, profile);
            }
        }
        if let Some(result) = self.profile.pending_save.poll() {
            if let Some(profile) = self.absorb(result) {
                info!(team_id = profile.team_id, "Company profile saved");
                self.dashboard.apply_profile(Some(profile.clone()));
                self.profile.apply_saved(profile);
                self.notice = Some(Notice::success("Company profile saved"));
            }
        }
    }

    // ---- analytics -----------------------------------------------------

    pub fn load_analytics(&mut self) {
        let handle = self.handle();
        let client = self.client();
        self.analytics
            .pending_spend
            .start(&handle, async move { client.spend_by_buyer().await });
        let client = self.client();
        self.analytics.pending_releases.start(&handle, async move {
            client.enriched_releases(RELEASE_LIMIT).await
        });

        let signed_in = self.context.session.current_user().is_some();
        for feed in InsightFeed::ALL {
            if feed == InsightFeed::SuccessPredictions && !signed_in {
                continue;
            }
            let client = self.client();
            self.analytics
                .section_mut(feed)
                .pending
                .start(&handle, async move {
                    match feed {
                        InsightFeed::IndustryTrends => client.industry_trends().await,
                        InsightFeed::Complexity => client.complexity_analysis().await,
                        InsightFeed::Competition => client.competition_insights().await,
                        InsightFeed::SuccessPredictions => client.success_predictions().await,
                    }
                });
        }
    }

    fn check_analytics(&mut self) {
        if let Some(result) = self.analytics.pending_spend.poll() {
            if let Some(spend) = self.absorb(result) {
                self.analytics.spend = Some(spend);
            }
        }
        if let Some(result) = self.analytics.pending_releases.poll() {
            if let Some(releases) = self.absorb(result) {
                self.analytics.releases = releases;
            }
        }
        for feed in InsightFeed::ALL {
            let Some(result) = self.analytics.section_mut(feed).pending.poll() else {
                continue;
            };
            let records = match feed {
                // Fails without a company profile
                InsightFeed::SuccessPredictions => self.absorb_quietly(feed.title(), result),
                _ => self.absorb(result),
            };
            if let Some(records) = records {
                self.analytics.section_mut(feed).apply(records);
            }
        }
    }

    // ---- admin ---------------------------------------------------------

    pub fn load_admin(&mut self) {
        let handle = self.handle();
        let client = self.client();
        self.admin
            .pending_stats
            .start(&handle, async move { client.admin_stats().await });
        let client = self.client();
        self.admin.pending_activity.start(&handle, async move {
            client.admin_activity(ACTIVITY_LIMIT).await
        });
        let client = self.client();
        self.admin
            .pending_members
            .start(&handle, async move { client.team_members().await });
    }

    pub fn sync_tenders(&mut self) {
        self.admin.clamp_sync_limit();
        let limit = self.admin.sync_limit;
        let client = self.client();
        let handle = self.handle();
        self.admin
            .pending_sync
            .start(&handle, async move { client.sync_tenders(limit).await });
    }

    pub fn send_invite(&mut self) {
        let invite = match self.admin.invite() {
            Ok(invite) => invite,
            Err(e) => {
                self.notice = Some(Notice::from(&e));
                return;
            }
        };
        let client = self.client();
        let handle = self.handle();
        self.admin
            .pending_invite
            .start(&handle, async move { client.invite_member(&invite).await });
    }

    fn check_admin(&mut self) {
        if let Some(result) = self.admin.pending_stats.poll() {
            if let Some(stats) = self.absorb(result) {
                self.admin.stats = Some(stats);
            }
        }
        if let Some(result) = self.admin.pending_activity.poll() {
            if let Some(activity) = self.absorb(result) {
                self.admin.activity = activity;
            }
        }
        if let Some(result) = self.admin.pending_members.poll() {
            if let Some(members) = self.absorb(result) {
                self.admin.members = members;
            }
        }
        if let Some(result) = self.admin.pending_sync.poll() {
            if let Some(response) = self.absorb(result) {
                info!(limit = self.admin.sync_limit, "Tender sync started");
                self.notice = Some(Notice::success(response.message));
            }
        }
        if let Some(result) = self.admin.pending_invite.poll() {
            if let Some(response) = self.absorb(result) {
                self.admin.invite_email.clear();
                self.notice = Some(Notice::success(response.message));
                let client = self.client();
                let handle = self.handle();
                self.admin
                    .pending_members
                    .start(&handle, async move { client.team_members().await });
            }
        }
    }
}
