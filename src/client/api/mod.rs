//! Typed endpoint wrappers
//!
//! Each submodule adds methods to [`ApiClient`] for one area of the backend.
//! They build the request body, call through the wrapper and decode the
//! response; none of them keep state. Session transitions (login, refresh,
//! logout) belong to [`crate::client::session::SessionManager`], which uses
//! the raw auth calls defined in [`auth`].

pub mod admin;
pub mod auth;
pub mod insights;
pub mod profiles;
pub mod tenders;
pub mod workspace;

use crate::client::http::ApiClient;
use crate::shared::error::ClientError;
use crate::shared::user::{PlanFeature, UserRecord};

impl ApiClient {
    /// Current user, if their plan includes `feature`
    ///
    /// Fails without touching the network: `SessionExpired` when nobody is
    /// logged in, `PlanRestricted` with an upgrade message otherwise.
    pub fn require_feature(&self, feature: PlanFeature) -> Result<UserRecord, ClientError> {
        let user = self
            .session()
            .current_user()
            .ok_or(ClientError::SessionExpired)?;
        if !user.plan_tier.allows(feature) {
            tracing::info!(?feature, plan = %user.plan_tier, "Feature not included in plan");
            return Err(ClientError::plan_restricted(feature.upgrade_message()));
        }
        Ok(user)
    }

    /// Current user, or `SessionExpired`
    pub fn require_user(&self) -> Result<UserRecord, ClientError> {
        self.session()
            .current_user()
            .ok_or(ClientError::SessionExpired)
    }
}
