//! Company profile types
//!
//! A team owns at most one company profile. The backend validates profiles on
//! write; [`CompanyProfileDraft::validate`] applies the same rules locally so
//! the form can point at the offending field before a round trip.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shared::error::ClientError;

/// South African provinces accepted by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Province {
    #[serde(rename = "Gauteng")]
    Gauteng,
    #[serde(rename = "Western Cape")]
    WesternCape,
    #[serde(rename = "KwaZulu-Natal")]
    KwaZuluNatal,
    #[serde(rename = "Eastern Cape")]
    EasternCape,
    #[serde(rename = "Limpopo")]
    Limpopo,
    #[serde(rename = "Mpumalanga")]
    Mpumalanga,
    #[serde(rename = "North West")]
    NorthWest,
    #[serde(rename = "Free State")]
    FreeState,
    #[serde(rename = "Northern Cape")]
    NorthernCape,
}

impl Province {
    pub const ALL: [Province; 9] = [
        Province::Gauteng,
        Province::WesternCape,
        Province::KwaZuluNatal,
        Province::EasternCape,
        Province::Limpopo,
        Province::Mpumalanga,
        Province::NorthWest,
        Province::FreeState,
        Province::NorthernCape,
    ];

    /// Name as used on the wire and in the UI
    pub fn name(self) -> &'static str {
        match self {
            Province::Gauteng => "Gauteng",
            Province::WesternCape => "Western Cape",
            Province::KwaZuluNatal => "KwaZulu-Natal",
            Province::EasternCape => "Eastern Cape",
            Province::Limpopo => "Limpopo",
            Province::Mpumalanga => "Mpumalanga",
            Province::NorthWest => "North West",
            Province::FreeState => "Free State",
            Province::NorthernCape => "Northern Cape",
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Industry sectors known to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndustrySector {
    #[serde(rename = "Construction")]
    Construction,
    #[serde(rename = "IT Services")]
    ItServices,
    #[serde(rename = "Security")]
    Security,
    #[serde(rename = "Cleaning")]
    Cleaning,
    #[serde(rename = "Transport")]
    Transport,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Agriculture")]
    Agriculture,
    #[serde(rename = "Mining")]
    Mining,
    #[serde(rename = "Manufacturing")]
    Manufacturing,
    #[serde(rename = "General Services")]
    GeneralServices,
}

impl IndustrySector {
    pub const ALL: [IndustrySector; 11] = [
        IndustrySector::Construction,
        IndustrySector::ItServices,
        IndustrySector::Security,
        IndustrySector::Cleaning,
        IndustrySector::Transport,
        IndustrySector::Healthcare,
        IndustrySector::Education,
        IndustrySector::Agriculture,
        IndustrySector::Mining,
        IndustrySector::Manufacturing,
        IndustrySector::GeneralServices,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IndustrySector::Construction => "Construction",
            IndustrySector::ItServices => "IT Services",
            IndustrySector::Security => "Security",
            IndustrySector::Cleaning => "Cleaning",
            IndustrySector::Transport => "Transport",
            IndustrySector::Healthcare => "Healthcare",
            IndustrySector::Education => "Education",
            IndustrySector::Agriculture => "Agriculture",
            IndustrySector::Mining => "Mining",
            IndustrySector::Manufacturing => "Manufacturing",
            IndustrySector::GeneralServices => "General Services",
        }
    }
}

impl fmt::Display for IndustrySector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stored company profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    #[serde(default)]
    pub id: Option<i64>,
    pub team_id: i64,
    pub company_name: String,
    pub industry_sector: IndustrySector,
    pub services_provided: String,
    #[serde(default)]
    pub certifications: BTreeMap<String, serde_json::Value>,
    pub geographic_coverage: BTreeSet<Province>,
    pub years_experience: u32,
    pub contact_email: String,
    pub contact_phone: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for `POST /company-profiles`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyProfileDraft {
    pub team_id: i64,
    pub company_name: String,
    pub industry_sector: IndustrySector,
    pub services_provided: String,
    pub certifications: BTreeMap<String, serde_json::Value>,
    pub geographic_coverage: BTreeSet<Province>,
    pub years_experience: u32,
    pub contact_email: String,
    pub contact_phone: String,
}

impl CompanyProfileDraft {
    /// Empty draft for a team without a profile
    pub fn new(team_id: i64) -> Self {
        Self {
            team_id,
            company_name: String::new(),
            industry_sector: IndustrySector::GeneralServices,
            services_provided: String::new(),
            certifications: BTreeMap::new(),
            geographic_coverage: BTreeSet::new(),
            years_experience: 0,
            contact_email: String::new(),
            contact_phone: String::new(),
        }
    }

    /// Check the draft against the backend's profile rules
    pub fn validate(&self) -> Result<(), ClientError> {
        let name = self.company_name.trim();
        if name.is_empty() || name.chars().count() > 255 {
            return Err(ClientError::validation(
                "company_name",
                "Company name is required (max 255 characters)",
            ));
        }
        let services = self.services_provided.trim().chars().count();
        if !(10..=2000).contains(&services) {
            return Err(ClientError::validation(
                "services_provided",
                "Describe your services in 10 to 2000 characters",
            ));
        }
        if self.geographic_coverage.is_empty() {
            return Err(ClientError::validation(
                "geographic_coverage",
                "Select at least one province",
            ));
        }
        if self.years_experience > 100 {
            return Err(ClientError::validation(
                "years_experience",
                "Years of experience must be between 0 and 100",
            ));
        }
        if !is_plausible_email(&self.contact_email) {
            return Err(ClientError::validation(
                "contact_email",
                "Please enter a valid contact email",
            ));
        }
        let phone = self.contact_phone.trim().chars().count();
        if !(10..=20).contains(&phone) {
            return Err(ClientError::validation(
                "contact_phone",
                "Contact phone must be 10 to 20 characters",
            ));
        }
        Ok(())
    }
}

impl From<&CompanyProfile> for CompanyProfileDraft {
    fn from(profile: &CompanyProfile) -> Self {
        Self {
            team_id: profile.team_id,
            company_name: profile.company_name.clone(),
            industry_sector: profile.industry_sector,
            services_provided: profile.services_provided.clone(),
            certifications: profile.certifications.clone(),
            geographic_coverage: profile.geographic_coverage.clone(),
            years_experience: profile.years_experience,
            contact_email: profile.contact_email.clone(),
            contact_phone: profile.contact_phone.clone(),
        }
    }
}

/// Loose email check: one `@` with a dotted domain after it
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
