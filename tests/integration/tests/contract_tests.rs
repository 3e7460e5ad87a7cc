//! JSON contract tests
//!
//! Serialize mapped rows and check the exact wire shape the UI relies on:
//! camelCase keys, null versus absent optionals, flattened base DTOs and
//! the pagination envelope.
//!
//! Run with: cargo test -p integration-tests --test contract_tests

use chrono::{DateTime, Utc};
use integration_tests::*;
use ministry_common::{AppConfig, AppError, ErrorResponse};
use ministry_core::PaginationParams;
use ministry_db::models::AddressModel;
use ministry_db::{AssessmentInsert, AssessmentQuestionInsert, OrganizationInsert};
use ministry_service::dto::mappers::{
    to_paginated_ai_content_job_list, to_paginated_content_item_list,
    to_paginated_organization_list,
};
use ministry_service::dto::{
    AiContentJobResponse, AiConversationResponse, AiCrossReferenceSuggestionResponse,
    AiMessageResponse, AssessmentWithQuestions, AssessmentWithQuestionsResponse,
    ContentItemResponse, ContentItemWithDetails, CreateAssessmentQuestionRequest,
    CreateAssessmentRequest, CreateOrganizationRequest,
    CrossReferenceWithContent, MembershipWithDetails, OrganizationMembershipResponse,
    OrganizationResponse, OrganizationWithRelations, PaginatedListResponse, PaginationQuery,
    TheologicalConceptResponse, UserAssessmentWithDetails, UserAssessmentWithDetailsResponse,
};
use serde_json::json;
use sqlx::types::Json;

// ============================================================================
// Pagination Envelope Tests
// ============================================================================

#[test]
fn test_pagination_envelope_shape() {
    let rows = vec![content_job_row(), content_job_row()];
    let list = to_paginated_ai_content_job_list(&rows, PaginationParams::new(2, 10, 25));
    let json = to_json(&list);

    assert_eq!(
        json["pagination"],
        json!({
            "page": 2,
            "limit": 10,
            "total": 25,
            "totalPages": 3,
            "hasNext": true,
            "hasPrev": true,
        })
    );
    assert_eq!(json["success"], true);
    assert_absent(&json, "message");
    assert_eq!(json["items"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["items"][0]["id"], rows[0].id.to_string());
}

#[test]
fn test_pagination_envelope_message() {
    let list = PaginatedListResponse::<AiContentJobResponse>::new(
        Vec::new(),
        PaginationParams::new(1, 0, 0),
    )
    .with_message("No jobs queued");
    let json = to_json(&list);

    assert_eq!(json["message"], "No jobs queued");
    assert_eq!(json["pagination"]["totalPages"], 0);
    assert_eq!(json["items"], json!([]));
}

#[test]
fn test_pagination_query_uses_configured_limits() {
    let config = AppConfig::from_lookup(|key| match key {
        "PAGINATION_DEFAULT_LIMIT" => Some("5".to_string()),
        "PAGINATION_MAX_LIMIT" => Some("50".to_string()),
        _ => None,
    })
    .unwrap();

    let params = PaginationQuery::default()
        .into_params(12, &config.pagination)
        .unwrap();
    let list = to_paginated_organization_list(&[], params);
    let json = to_json(&list);

    assert_eq!(json["pagination"]["limit"], 5);
    assert_eq!(json["pagination"]["totalPages"], 3);
    assert_eq!(json["pagination"]["hasNext"], true);
    assert_eq!(json["pagination"]["hasPrev"], false);

    let rejected = PaginationQuery {
        page: None,
        limit: Some(51),
    }
    .into_params(12, &config.pagination)
    .unwrap_err();
    assert_eq!(rejected.status_code(), 400);
}

// ============================================================================
// AI Contract Tests
// ============================================================================

#[test]
fn test_content_job_defaults_on_the_wire() {
    let json = to_json(&AiContentJobResponse::from(&content_job_row()));

    assert_camel_case_keys(&json);
    assert_eq!(json["status"], "pending");
    assert_eq!(json["priority"], "normal");
    assert_eq!(json["isPending"], true);
    assert_eq!(json["needsHumanReview"], true);
    assert_eq!(json["parameters"], json!({}));
    assert_eq!(json["aiModel"], "gpt-4");
    assert_null(&json, "result");
    assert_null(&json, "processingCostText");
    assert_null(&json, "startedAt");
    assert_eq!(json["createdAt"], FIXED_TIMESTAMP_ISO);
}

#[test]
fn test_created_at_round_trips_to_row_instant() {
    let row = conversation_row();
    let json = to_json(&AiConversationResponse::from(&row));

    let created_at = json["createdAt"].as_str().expect("createdAt string");
    let parsed: DateTime<Utc> = DateTime::parse_from_rfc3339(created_at)
        .expect("RFC 3339 timestamp")
        .with_timezone(&Utc);

    assert_eq!(parsed, row.created_at);
    assert_eq!(json["tokenUsageText"], "0 tokens");
    assert_null(&json, "conversationDurationText");
}

#[test]
fn test_sub_millisecond_timestamps_round_trip() {
    // timestamptz decodes with microsecond precision
    let mut row = conversation_row();
    row.created_at = fixed_timestamp() + chrono::Duration::microseconds(123_456);
    row.completed_at = Some(fixed_timestamp() + chrono::Duration::microseconds(7));

    let response = AiConversationResponse::from(&row);

    assert_eq!(response.created_at.parse::<DateTime<Utc>>().unwrap(), row.created_at);
    let completed_at = response.completed_at.as_deref().unwrap_or_default();
    assert!(completed_at.ends_with('Z'));
    assert_eq!(completed_at.parse::<DateTime<Utc>>().ok(), row.completed_at);
}

#[test]
fn test_message_role_serializes_stored_text() {
    let conversation = conversation_row();
    let json = to_json(&AiMessageResponse::from(&message_row(
        conversation.id,
        "assistant",
    )));

    assert_eq!(json["role"], "assistant");
    assert_eq!(json["isAssistantMessage"], true);
    assert_eq!(json["citedContent"], json!([]));
}

#[test]
fn test_cross_reference_with_content_summaries() {
    let author = profile_row();
    let source = content_item_row(author.id);
    let target = content_item_row(author.id);
    let suggestion = cross_reference_row(source.id, target.id);

    let json = to_json(&AiCrossReferenceSuggestionResponse::from(
        CrossReferenceWithContent::new(&suggestion).with_content(Some(&source), Some(&target)),
    ));

    assert_eq!(
        json["sourceContent"],
        json!({ "id": source.id, "title": source.title, "slug": source.slug })
    );
    assert_eq!(json["targetContent"]["id"], target.id.to_string());
    assert_eq!(json["hasHighConfidence"], true);
    assert_eq!(json["hasHighRelevance"], false);
    assert_eq!(json["confidenceText"], "90%");
    assert_eq!(json["relevanceText"], "75%");

    let bare = to_json(&AiCrossReferenceSuggestionResponse::from(&suggestion));
    assert_absent(&bare, "sourceContent");
    assert_absent(&bare, "targetContent");
}

#[test]
fn test_concept_apest_fields() {
    let json = to_json(&TheologicalConceptResponse::from(&concept_row()));

    assert_eq!(
        json["apestRelevance"],
        json!({
            "apostolic": 5,
            "prophetic": 5,
            "evangelistic": 5,
            "shepherding": 5,
            "teaching": 5,
        })
    );
    assert_eq!(json["primaryApestDimension"], "apostolic");
    assert_eq!(json["apestRelevanceText"], "Primary: Apostolic");
}

// ============================================================================
// Assessment Contract Tests
// ============================================================================

#[test]
fn test_assessment_with_questions_flattens_base() {
    let assessment = assessment_row();
    let questions = vec![question_row(assessment.id, 1), question_row(assessment.id, 2)];

    let json = to_json(&AssessmentWithQuestionsResponse::from(AssessmentWithQuestions {
        assessment: &assessment,
        questions: &questions,
    }));

    assert_camel_case_keys(&json);
    assert_eq!(json["id"], assessment.id.to_string());
    assert_eq!(json["scoringMethod"], "likert_5");
    assert_absent(&json, "assessment");
    assert_eq!(json["questions"][1]["orderIndex"], 2);
    assert_eq!(json["questions"][0]["weight"], 1.0);
}

#[test]
fn test_user_assessment_details_summary_shape() {
    let assessment = assessment_row();
    let user_assessment = ministry_db::models::UserAssessmentModel {
        total_score: Some(45),
        max_possible_score: Some(60),
        ..user_assessment_row(assessment.id)
    };

    let json = to_json(&UserAssessmentWithDetailsResponse::from(
        UserAssessmentWithDetails {
            user_assessment: &user_assessment,
            assessment: &assessment,
        },
    ));

    assert_eq!(json["id"], user_assessment.id.to_string());
    assert_eq!(json["scorePercentage"], 75);
    assert_null(&json, "completedAt");
    assert_eq!(
        json["assessment"],
        json!({
            "id": assessment.id,
            "name": assessment.name,
            "slug": assessment.slug,
            "assessmentType": "apest",
            "questionsCount": 25,
            "estimatedDuration": null,
        })
    );
}

// ============================================================================
// Content Contract Tests
// ============================================================================

#[test]
fn test_content_item_with_author_and_category() {
    let author = profile_row();
    let category = category_row();
    let item = ministry_db::models::ContentItemModel {
        visibility: Some("invite_only".to_string()),
        primary_category_id: Some(category.id),
        ..content_item_row(author.id)
    };

    let json = to_json(&ContentItemResponse::from(
        ContentItemWithDetails::new(&item)
            .with_author(&author)
            .with_category(&category),
    ));

    assert_camel_case_keys(&json);
    assert_eq!(json["visibility"], "private");
    assert_eq!(json["primaryCategoryId"], category.id.to_string());
    assert_eq!(json["seriesId"], "");
    assert_eq!(
        json["author"],
        json!({
            "id": author.id,
            "firstName": "Dana",
            "lastName": author.last_name,
            "displayName": "",
            "avatarUrl": "",
        })
    );
    assert_eq!(
        json["category"],
        json!({ "id": category.id, "name": category.name, "slug": category.slug })
    );
    assert_null(&json, "publishedAt");
}

#[test]
fn test_content_list_without_related_rows() {
    let author = profile_row();
    let items = vec![content_item_row(author.id)];
    let rows: Vec<_> = items.iter().map(ContentItemWithDetails::new).collect();

    let json = to_json(&to_paginated_content_item_list(
        &rows,
        PaginationParams::new(1, 20, 1),
    ));

    let first = &json["items"][0];
    assert_absent(first, "author");
    assert_absent(first, "category");
    assert_eq!(first["readingTimeText"], "0 min read");
}

// ============================================================================
// Organization Contract Tests
// ============================================================================

#[test]
fn test_organization_optional_fields_are_absent() {
    let organization = organization_row();
    let json = to_json(&OrganizationResponse::from(&organization));

    assert_camel_case_keys(&json);
    assert_eq!(json["id"], organization.id.to_string());
    assert_eq!(json["status"], "trial");
    assert_eq!(json["licenseType"], "individual");
    assert_eq!(json["maxUsers"], 1);
    assert_eq!(json["statusDisplay"], "Trial");
    assert_eq!(json["isTrial"], true);
    for key in ["description", "website", "logoUrl", "address", "owner", "members"] {
        assert_absent(&json, key);
    }
}

#[test]
fn test_organization_address_keeps_recorded_parts() {
    let organization = ministry_db::models::OrganizationModel {
        address: Some(Json(AddressModel {
            city: Some("Portland".to_string()),
            country: Some("US".to_string()),
            ..AddressModel::default()
        })),
        ..organization_row()
    };
    let owner = profile_row();

    let json = to_json(&OrganizationResponse::from(
        OrganizationWithRelations::new(&organization)
            .with_owner(&owner)
            .with_member_count(4),
    ));

    assert_eq!(json["address"], json!({ "city": "Portland", "country": "US" }));
    assert_eq!(json["memberCount"], 4);
    assert_eq!(
        json["owner"],
        json!({
            "id": owner.id,
            "firstName": owner.first_name,
            "lastName": owner.last_name,
            "email": owner.email,
        })
    );
}

#[test]
fn test_membership_related_summaries() {
    let user = profile_row();
    let organization = organization_row();
    let membership = membership_row(user.id, organization.id);

    let json = to_json(&OrganizationMembershipResponse::from(MembershipWithDetails {
        membership: &membership,
        user: &user,
        organization: &organization,
        invited_by: None,
    }));

    assert_eq!(json["status"], "pending");
    assert_eq!(json["roleDisplay"], "Member");
    assert_eq!(json["canManage"], false);
    assert_eq!(json["permissions"], json!([]));
    assert_absent(&json, "joinedAt");
    assert_absent(&json, "invitedByUser");
    assert_absent(&json["user"], "avatarUrl");
    assert_eq!(json["organization"]["slug"], organization.slug);
}

#[test]
fn test_create_organization_request_from_json() {
    let request: CreateOrganizationRequest = serde_json::from_value(json!({
        "name": "Grace Fellowship",
        "slug": "grace-fellowship",
        "organizationType": "church",
        "licenseType": "institutional",
        "maxUsers": 25,
        "address": { "city": "Austin" },
    }))
    .unwrap();

    let insert = OrganizationInsert::try_from(&request).unwrap();
    assert_eq!(insert.max_users, 25);
    assert_eq!(insert.license_type.as_str(), "institutional");
    assert_eq!(insert.status.as_str(), "trial");
    assert_eq!(
        insert.address.map(|Json(address)| address.street),
        Some(Some(String::new()))
    );
}

#[test]
fn test_invalid_request_error_body() {
    let request: CreateOrganizationRequest = serde_json::from_value(json!({
        "name": "",
        "slug": "empty-name",
        "organizationType": "church",
        "contactEmail": "not-an-email",
    }))
    .unwrap();

    let err: AppError = OrganizationInsert::try_from(&request).unwrap_err();
    assert_eq!(err.status_code(), 400);

    let json = to_json(&ErrorResponse::from(&err));
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let message = json["message"].as_str().unwrap_or_default();
    assert!(message.contains("contact_email"));
    assert!(message.contains("name"));
    assert_eq!(json["details"]["name"], json!(["Name must be 1-200 characters"]));
    assert_eq!(json["details"]["contact_email"], json!(["Invalid contact email format"]));
}

#[test]
fn test_assessment_request_json_to_insert() {
    let request: CreateAssessmentRequest = serde_json::from_value(json!({
        "name": "APEST Inventory",
        "slug": "apest-inventory",
        "assessmentType": "apest",
        "questionsCount": 25,
        "validityScore": 0.87,
    }))
    .unwrap();

    let insert = AssessmentInsert::try_from(&request).unwrap();
    assert_eq!(insert.version, "1.0");
    assert_eq!(insert.language, "en");
    assert_eq!(insert.scoring_method, "likert_5");
    assert_eq!(insert.status.as_str(), "draft");
    assert_eq!(insert.validity_score.as_deref(), Some("0.87"));
}

#[test]
fn test_invalid_question_request_error_details() {
    let request: CreateAssessmentQuestionRequest = serde_json::from_value(json!({
        "assessmentId": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
        "questionText": "",
        "questionType": "essay",
        "orderIndex": 0,
        "weight": 12.0,
    }))
    .unwrap();

    let err = AssessmentQuestionInsert::try_from(&request).unwrap_err();
    let json = to_json(&ErrorResponse::from(&err));

    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["details"]["question_type"], json!(["Unknown question type"]));
    assert_eq!(
        json["details"]["question_text"],
        json!(["Question text must be 1-1000 characters"])
    );
    assert_eq!(json["details"]["weight"], json!(["Weight must be between 0 and 10"]));
}
