//! Backend payloads in wire format

use serde_json::{json, Value};
use tenderdesk::shared::user::UserRecord;

/// Fixed "now" for every test clock
pub const NOW: i64 = 1_800_000_000_000;

pub const EMAIL: &str = "thandi@example.co.za";
pub const PASSWORD: &str = "hunter22";

pub fn user_json(plan_tier: &str, is_team_admin: bool) -> Value {
    json!({
        "id": 7,
        "email": EMAIL,
        "full_name": "Thandi Mokoena",
        "team_id": 3,
        "is_team_admin": is_team_admin,
        "plan_tier": plan_tier,
        "team_name": "Mokoena Civils",
        "has_company_profile": true
    })
}

pub fn user(plan_tier: &str, is_team_admin: bool) -> UserRecord {
    serde_json::from_value(user_json(plan_tier, is_team_admin)).expect("valid user fixture")
}

/// Token response; `expires_in` in seconds
pub fn token_json(token: &str, expires_in: f64, user: Option<Value>) -> Value {
    let mut body = json!({
        "access_token": token,
        "token_type": "bearer",
        "expires_in": expires_in
    });
    if let Some(user) = user {
        body["user"] = user;
    }
    body
}

pub fn tender_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "tender_id": format!("ocds-za-{}", id),
        "title": title,
        "description": format!("{} for the municipality", title),
        "province": "Gauteng",
        "submission_deadline": "2027-02-01T12:00:00",
        "buyer_organization": "City of Tshwane",
        "budget_range": "R1m - R5m",
        "budget_min": 1000000.0,
        "budget_max": 5000000.0,
        "source_url": format!("https://etenders.gov.za/{}", id),
        "document_url": format!("https://etenders.gov.za/{}/doc.pdf", id)
    })
}

pub fn profile_json(team_id: i64) -> Value {
    json!({
        "id": 11,
        "team_id": team_id,
        "company_name": "Mokoena Civils (Pty) Ltd",
        "industry_sector": "Construction",
        "services_provided": "Road maintenance and stormwater works",
        "certifications": {"CIDB": "7CE", "B-BBEE": "Level 1"},
        "geographic_coverage": ["Gauteng", "Limpopo"],
        "years_experience": 12,
        "contact_email": "tenders@mokoena.co.za",
        "contact_phone": "+27 12 555 0101"
    })
}
