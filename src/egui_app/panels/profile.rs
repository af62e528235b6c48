//! Company profile editor

use crate::egui_app::state::pending::Pending;
use crate::shared::error::ClientError;
use crate::shared::profile::{CompanyProfile, CompanyProfileDraft, Province};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfileState {
    #[default]
    NotLoaded,
    /// The team has no profile yet (backend answered 404)
    Missing,
    Loaded(CompanyProfile),
}

#[derive(Debug, Default)]
pub struct ProfilePanel {
    pub state: ProfileState,
    pub draft: Option<CompanyProfileDraft>,
    /// Years of experience as typed
    pub years_input: String,
    pub certification_name: String,
    pub certification_value: String,
    /// Field that failed validation on the last save attempt
    pub invalid_field: Option<String>,
    pub pending_load: Pending<Result<Option<CompanyProfile>, ClientError>>,
    pub pending_save: Pending<Result<CompanyProfile, ClientError>>,
}

impl ProfilePanel {
    pub fn is_busy(&self) -> bool {
        self.pending_load.is_busy() || self.pending_save.is_busy()
    }

    /// Start editing from what the backend returned
    pub fn apply_loaded(&mut self, team_id: i64, profile: Option<CompanyProfile>) {
        let draft = match &profile {
            Some(profile) => CompanyProfileDraft::from(profile),
            None => CompanyProfileDraft::new(team_id),
        };
        self.years_input = draft.years_experience.to_string();
        self.draft = Some(draft);
        self.invalid_field = None;
        self.state = match profile {
            Some(profile) => ProfileState::Loaded(profile),
            None => ProfileState::Missing,
        };
    }

    pub fn status_label(&self) -> &'static str {
        match self.state {
            ProfileState::NotLoaded => "Loading profile...",
            ProfileState::Missing => "No profile yet. Fill in the form to create one.",
            ProfileState::Loaded(_) => "Profile on file",
        }
    }

    pub fn toggle_province(&mut self, province: Province) {
        if let Some(draft) = self.draft.as_mut() {
            if !draft.geographic_coverage.remove(&province) {
                draft.geographic_coverage.insert(province);
            }
        }
    }

    /// Add the certification typed into the side inputs
    pub fn add_certification(&mut self) -> bool {
        let name = self.certification_name.trim();
        let Some(draft) = self.draft.as_mut() else {
            return false;
        };
        if name.is_empty() {
            return false;
        }
        let value = self.certification_value.trim();
        let value = if value.is_empty() {
            serde_json::Value::Bool(true)
        } else {
            serde_json::Value::String(value.to_string())
        };
        draft.certifications.insert(name.to_string(), value);
        self.certification_name.clear();
        self.certification_value.clear();
        true
    }

    pub fn remove_certification(&mut self, name: &str) {
        if let Some(draft) = self.draft.as_mut() {
            draft.certifications.remove(name);
        }
    }

    /// Draft ready to send, or the first validation failure
    pub fn prepared_draft(&mut self) -> Result<CompanyProfileDraft, ClientError> {
        let result = self.build_draft();
        self.invalid_field = match &result {
            Err(ClientError::Validation { field, .. }) => Some(field.clone()),
            _ => None,
        };
        result
    }

    fn build_draft(&self) -> Result<CompanyProfileDraft, ClientError> {
        let mut draft = self
            .draft
            .clone()
            .ok_or_else(|| ClientError::validation("profile", "Profile has not loaded yet"))?;
        draft.years_experience = self.years_input.trim().parse().map_err(|_| {
            ClientError::validation(
                "years_experience",
                "Years of experience must be between 0 and 100",
            )
        })?;
        draft.company_name = draft.company_name.trim().to_string();
        draft.contact_email = draft.contact_email.trim().to_string();
        draft.contact_phone = draft.contact_phone.trim().to_string();
        draft.validate()?;
        Ok(draft)
    }

    pub fn apply_saved(&mut self, profile: CompanyProfile) {
        let team_id = profile.team_id;
        self.apply_loaded(team_id, Some(profile));
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
