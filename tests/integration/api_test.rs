//! Endpoint wrappers against a mock backend

use std::collections::{BTreeMap, BTreeSet};

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use tenderdesk::shared::error::ClientError;
use tenderdesk::shared::profile::{CompanyProfileDraft, IndustrySector, Province};
use tenderdesk::shared::team::{TeamInvite, TeamRole};
use tenderdesk::shared::tender::SearchRequest;
use tenderdesk::shared::user::Limit;
use tenderdesk::shared::workspace::{StatusFilter, WorkspaceStatus, WorkspaceUpdate};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::assert_ok;
use crate::common::{profile_json, success, tender_json, TestBackend};

#[tokio::test]
async fn test_search_sends_only_set_filters() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/tenders/search"))
        .and(body_json(json!({
            "keywords": "road maintenance",
            "province": "Gauteng",
            "budget_min": 100000.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "results": [tender_json(1, "Road resurfacing"), tender_json(2, "Pothole repairs")]
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let request = SearchRequest {
        keywords: "road maintenance".into(),
        province: Some(Province::Gauteng),
        budget_min: Some(100_000.0),
        ..Default::default()
    };
    let response = backend.context.client.search_tenders(&request).await.unwrap();
    assert_eq!(response.count, Some(2));
    let titles: Vec<_> = response.results.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["Road resurfacing", "Pothole repairs"]);
}

#[tokio::test]
async fn test_search_rejects_inverted_budget_locally() {
    let backend = TestBackend::start().await;
    let request = SearchRequest {
        budget_min: Some(500.0),
        budget_max: Some(100.0),
        ..Default::default()
    };
    let err = backend.context.client.search_tenders(&request).await.unwrap_err();
    assert_matches!(err, ClientError::Validation { ref field, .. } if field == "budget_max");
    assert_eq!(backend.hits("/tenders/search").await, 0);
}

#[tokio::test]
async fn test_summary_on_free_plan_makes_no_request() {
    let backend = TestBackend::start().await;
    backend.login("free").await;
    Mock::given(method("POST"))
        .and(path("/api/summary/extract"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"summary": "unused"})))
        .expect(0)
        .mount(&backend.server)
        .await;

    let tender = serde_json::from_value(tender_json(1, "Road resurfacing")).unwrap();
    let err = backend.context.client.extract_summary(&tender).await.unwrap_err();
    assert_matches!(err, ClientError::PlanRestricted(ref message) if message.contains("Basic"));
    backend.context.session.logout();
}

#[tokio::test]
async fn test_summary_on_basic_plan() {
    let backend = TestBackend::start().await;
    backend.login("basic").await;
    Mock::given(method("POST"))
        .and(path("/api/summary/extract"))
        .and(body_json(json!({
            "tender_id": 1,
            "document_url": "https://etenders.gov.za/1/doc.pdf"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": "Resurfacing of 12km of municipal roads.",
            "key_points": {"closing_date": "2027-02-01", "cidb_grading": "7CE"},
            "industry_sector": "Construction",
            "complexity_score": 6,
            "tender_id": 1
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let tender = serde_json::from_value(tender_json(1, "Road resurfacing")).unwrap();
    let summary = backend.context.client.extract_summary(&tender).await.unwrap();
    assert_eq!(summary.complexity_score, Some(6));
    assert_eq!(summary.key_points.len(), 2);
    backend.context.session.logout();
}

#[tokio::test]
async fn test_gated_feature_without_session() {
    let backend = TestBackend::start().await;
    let err = backend.context.client.export_workspace_csv().await.unwrap_err();
    assert_eq!(err, ClientError::SessionExpired);
    assert_eq!(backend.hits("/export/workspace/csv").await, 0);
}

#[tokio::test]
async fn test_export_csv_on_pro_plan() {
    let backend = TestBackend::start().await;
    backend.login("pro").await;
    let csv = "Tender ID,Title,Status\nocds-za-1,Road resurfacing,interested\n";
    Mock::given(method("GET"))
        .and(path("/export/workspace/csv"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "filename": "workspace_export_20261019_0900.csv",
            "content": csv,
            "content_type": "text/csv"
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let file = assert_ok!(backend.context.client.export_workspace_csv().await);
    assert_eq!(file.filename, "workspace_export_20261019_0900.csv");
    assert_eq!(file.content, csv);
    assert_eq!(file.content_type.as_deref(), Some("text/csv"));
    backend.context.session.logout();
}

#[tokio::test]
async fn test_export_accepts_raw_csv_body() {
    let backend = TestBackend::start().await;
    backend.login("pro").await;
    let csv = "Tender ID,Title\nocds-za-1,Road resurfacing\n";
    Mock::given(method("GET"))
        .and(path("/export/workspace/csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(csv))
        .mount(&backend.server)
        .await;

    let file = assert_ok!(backend.context.client.export_workspace_csv().await);
    assert_eq!(file.content, csv);
    backend.context.session.logout();
}

#[tokio::test]
async fn test_export_readiness_scores_on_pro_plan() {
    let backend = TestBackend::start().await;
    backend.login("pro").await;
    let content = "[\n  {\"tender_id\": 4, \"suitability_score\": 81.0}\n]";
    Mock::given(method("GET"))
        .and(path("/export/readiness-scores"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "filename": "readiness_scores_20261019_0900.json",
            "content": content,
            "content_type": "application/json"
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let file = assert_ok!(backend.context.client.export_readiness_scores().await);
    assert_eq!(file.filename, "readiness_scores_20261019_0900.json");
    assert_eq!(file.content, content);
    backend.context.session.logout();
}

#[tokio::test]
async fn test_readiness_export_is_pro_only() {
    let backend = TestBackend::start().await;
    backend.login("basic").await;

    let err = backend.context.client.export_readiness_scores().await.unwrap_err();
    assert_matches!(err, ClientError::PlanRestricted(_));
    assert_eq!(backend.hits("/export/readiness-scores").await, 0);
    backend.context.session.logout();
}

#[tokio::test]
async fn test_team_limits() {
    let backend = TestBackend::start().await;
    backend.login("basic").await;
    Mock::given(method("GET"))
        .and(path("/team/limits"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_count": 2,
            "workspace_count": 50,
            "max_users": 3,
            "max_workspace": 50,
            "can_add_user": true,
            "can_add_workspace": false
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let limits = assert_ok!(backend.context.client.team_limits().await);
    assert_eq!(limits.user_count, 2);
    assert_eq!(limits.max_users, Limit::Limited(3));
    assert_eq!(limits.max_workspace.fraction(limits.workspace_count), Some(1.0));
    assert!(!limits.can_add_workspace);
    backend.context.session.logout();
}

#[tokio::test]
async fn test_team_limits_needs_session() {
    let backend = TestBackend::start().await;
    let err = backend.context.client.team_limits().await.unwrap_err();
    assert_eq!(err, ClientError::SessionExpired);
    assert_eq!(backend.hits("/team/limits").await, 0);
}

#[tokio::test]
async fn test_ai_insight_feeds() {
    let backend = TestBackend::start().await;
    let feeds = [
        (
            "/api/analytics/industry-trends",
            json!({"industry": "Construction", "tender_count": 12, "recommendation": "High demand"}),
        ),
        (
            "/api/analytics/complexity-analysis",
            json!({"complexity_level": "Medium (31-60)", "tender_count": 5, "percentage_of_total": 41.7}),
        ),
        (
            "/api/analytics/competition-insights",
            json!({"insight_type": "buyer_analysis", "buyer_organization": "Eskom", "tenders_issued": 9}),
        ),
    ];
    for (route, record) in &feeds {
        Mock::given(method("GET"))
            .and(path(*route))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"analytics": [record]})))
            .expect(1)
            .mount(&backend.server)
            .await;
    }

    let client = &backend.context.client;
    let industry = assert_ok!(client.industry_trends().await);
    assert_eq!(industry[0].title(), "Construction");
    assert_eq!(industry[0].advice(), Some("High demand"));

    let complexity = assert_ok!(client.complexity_analysis().await);
    assert_eq!(complexity[0].title(), "Medium (31-60)");
    assert!(complexity[0]
        .facts()
        .contains(&("Percentage of total".to_string(), "41.7%".to_string())));

    let competition = assert_ok!(client.competition_insights().await);
    assert_eq!(competition[0].title(), "Eskom");
}

#[tokio::test]
async fn test_success_predictions() {
    let backend = TestBackend::start().await;
    let err = backend.context.client.success_predictions().await.unwrap_err();
    assert_eq!(err, ClientError::SessionExpired);
    assert_eq!(backend.hits("/api/analytics/success-predictions").await, 0);

    backend.login("free").await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/success-predictions"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "analytics": [{
                "tender_id": 4,
                "tender_title": "Road resurfacing",
                "readiness_score": 82.0,
                "success_prediction": "High Success Probability",
                "key_factors": ["province", "cidb"],
                "recommendation": "Strong fit, prepare a bid"
            }]
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let predictions = assert_ok!(backend.context.client.success_predictions().await);
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0].title(), "Road resurfacing");
    assert_eq!(predictions[0].advice(), Some("Strong fit, prepare a bid"));
    backend.context.session.logout();
}

#[tokio::test]
async fn test_readiness_check_on_basic_plan() {
    let backend = TestBackend::start().await;
    backend.login("basic").await;
    Mock::given(method("POST"))
        .and(path("/api/readiness/check"))
        .and(body_json(json!({"tender_id": 1, "company_profile_id": 11})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "suitability_score": 72.0,
            "checklist": [
                {"criterion": "CIDB grading", "met": true},
                {"criterion": "Operates in province", "met": false}
            ],
            "recommendation": "Consider a joint venture for provincial coverage."
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let report = backend
        .context
        .client
        .check_readiness(1, Some(11))
        .await
        .unwrap();
    assert_eq!(report.criteria_met(), 1);
    assert_eq!(report.checklist.len(), 2);
    backend.context.session.logout();
}

#[tokio::test]
async fn test_sync_limit_sent_as_query_parameter() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/sync-tenders"))
        .and(query_param("limit", "25"))
        .respond_with(success("Sync started for 25 releases"))
        .expect(1)
        .mount(&backend.server)
        .await;

    let response = backend.context.client.sync_tenders(25).await.unwrap();
    assert!(response.success);
    assert_eq!(response.message, "Sync started for 25 releases");

    let err = backend.context.client.sync_tenders(0).await.unwrap_err();
    assert_matches!(err, ClientError::Validation { .. });
    let err = backend.context.client.sync_tenders(501).await.unwrap_err();
    assert_matches!(err, ClientError::Validation { .. });
}

#[tokio::test]
async fn test_admin_envelopes_are_unwrapped() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"tenders": {"total": 1200}, "users": 14}
        })))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/activity"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{"action": "tender_tracked", "user_id": 7, "timestamp": "2026-10-01T09:00:00"}]
        })))
        .mount(&backend.server)
        .await;

    let client = &backend.context.client;
    let stats = client.admin_stats().await.unwrap();
    assert_eq!(stats["tenders"]["total"], 1200);

    let activity = client.admin_activity(50).await.unwrap();
    assert_eq!(activity.len(), 1);
    assert_eq!(activity[0].action(), "tender_tracked");
    assert_eq!(activity[0].user_id(), Some(7));
}

#[tokio::test]
async fn test_missing_profile_is_none() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/company-profiles/3"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Company profile not found"})),
        )
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/company-profiles/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json(4)))
        .mount(&backend.server)
        .await;

    let client = &backend.context.client;
    assert!(client.company_profile(3).await.unwrap().is_none());

    let profile = client.company_profile(4).await.unwrap().unwrap();
    assert_eq!(profile.industry_sector, IndustrySector::Construction);
    assert!(profile.geographic_coverage.contains(&Province::Limpopo));
    assert_eq!(profile.certifications["CIDB"], "7CE");
}

#[tokio::test]
async fn test_invalid_profile_never_sent() {
    let backend = TestBackend::start().await;
    let draft = CompanyProfileDraft {
        team_id: 3,
        company_name: "Mokoena Civils".into(),
        industry_sector: IndustrySector::Construction,
        services_provided: "Roads and stormwater".into(),
        certifications: BTreeMap::new(),
        geographic_coverage: BTreeSet::new(),
        years_experience: 12,
        contact_email: "tenders@mokoena.co.za".into(),
        contact_phone: "+27 12 555 0101".into(),
    };
    let err = backend.context.client.save_company_profile(&draft).await.unwrap_err();
    assert_matches!(err, ClientError::Validation { ref field, .. } if field == "geographic_coverage");
    assert_eq!(backend.hits("/company-profiles").await, 0);
}

#[tokio::test]
async fn test_workspace_round_trip() {
    let backend = TestBackend::start().await;
    backend.login("basic").await;

    Mock::given(method("POST"))
        .and(path("/workspace/tenders"))
        .and(body_json(json!({
            "team_id": 3,
            "tender_id": 1,
            "status": "pending"
        })))
        .respond_with(success("Tender added to workspace"))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/workspace/tenders"))
        .and(query_param("team_id", "3"))
        .and(query_param("status", "interested"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 21,
            "team_id": 3,
            "tender_id": 1,
            "status": "interested",
            "notes": "Site visit on Tuesday",
            "match_score": 82.5,
            "last_updated_by": 7,
            "last_updated_at": "2026-10-18T10:00:00",
            "tender": tender_json(1, "Road resurfacing")
        }])))
        .mount(&backend.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/workspace/tenders/21"))
        .respond_with(success("Workspace entry updated"))
        .expect(1)
        .mount(&backend.server)
        .await;

    let client = &backend.context.client;
    let added = client
        .track_tender(1, WorkspaceStatus::Pending, None)
        .await
        .unwrap();
    assert_eq!(added.message, "Tender added to workspace");

    let entries = client
        .workspace_entries(3, StatusFilter::Only(WorkspaceStatus::Interested))
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status, WorkspaceStatus::Interested);

    let update = WorkspaceUpdate {
        status: Some(WorkspaceStatus::Submitted),
        notes: None,
    };
    client.update_workspace_entry(21, &update).await.unwrap();

    let too_long = WorkspaceUpdate {
        status: None,
        notes: Some("x".repeat(1001)),
    };
    let err = client.update_workspace_entry(21, &too_long).await.unwrap_err();
    assert_matches!(err, ClientError::Validation { ref field, .. } if field == "notes");
    backend.context.session.logout();
}

#[tokio::test]
async fn test_invite_validates_before_sending() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/team/invite"))
        .and(body_json(json!({"email": "sipho@mokoena.co.za", "role": "admin"})))
        .respond_with(success("Invitation sent"))
        .expect(1)
        .mount(&backend.server)
        .await;

    let client = &backend.context.client;
    let bad = TeamInvite {
        email: "sipho".into(),
        role: TeamRole::Member,
    };
    assert_matches!(client.invite_member(&bad).await, Err(ClientError::Validation { .. }));

    let good = TeamInvite {
        email: "sipho@mokoena.co.za".into(),
        role: TeamRole::Admin,
    };
    assert_eq!(client.invite_member(&good).await.unwrap().message, "Invitation sent");
}
