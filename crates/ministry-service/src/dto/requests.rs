//! Request DTOs for the write path
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, Utc};
use ministry_common::{AppError, AppResult, PaginationConfig};
use ministry_core::{
    ApestDimension, AssessmentStatus, DomainError, LicenseType, MembershipRole, MembershipStatus,
    OrganizationStatus, PaginationParams,
};
use ministry_db::models::{AnswerOption, PersonalizedRecommendations};
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Validate a request, logging the rejected fields
pub fn validate_request<T: Validate>(request: &T) -> AppResult<()> {
    request.validate().map_err(|errors| {
        let err = AppError::from(errors);
        tracing::warn!(error = %err, "Request validation failed");
        err
    })
}

// ============================================================================
// Organization Requests
// ============================================================================

/// Postal address supplied with an organization
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    #[validate(length(max = 200, message = "Street must be at most 200 characters"))]
    pub street: Option<String>,

    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: Option<String>,

    #[validate(length(max = 100, message = "State must be at most 100 characters"))]
    pub state: Option<String>,

    #[validate(length(max = 100, message = "Country must be at most 100 characters"))]
    pub country: Option<String>,

    #[validate(length(max = 20, message = "Postal code must be at most 20 characters"))]
    pub postal_code: Option<String>,
}

/// Create organization request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Slug must be 1-100 characters"))]
    pub slug: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,

    #[validate(url(message = "Logo URL must be a valid URL"))]
    pub logo_url: Option<String>,

    /// e.g. `church`, `denomination`, `seminary`
    pub organization_type: String,

    pub size_category: Option<String>,

    #[validate(email(message = "Invalid contact email format"))]
    pub contact_email: Option<String>,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub contact_phone: Option<String>,

    #[validate(nested)]
    pub address: Option<AddressRequest>,

    pub license_type: Option<LicenseType>,

    #[validate(range(min = 1, message = "Max users must be at least 1"))]
    pub max_users: Option<i32>,

    pub account_owner_id: Option<Uuid>,

    #[validate(email(message = "Invalid billing email format"))]
    pub billing_email: Option<String>,

    pub status: Option<OrganizationStatus>,
}

/// Update organization request. The slug is fixed once created.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganizationRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,

    #[validate(url(message = "Logo URL must be a valid URL"))]
    pub logo_url: Option<String>,

    pub organization_type: Option<String>,

    pub size_category: Option<String>,

    #[validate(email(message = "Invalid contact email format"))]
    pub contact_email: Option<String>,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub contact_phone: Option<String>,

    #[validate(nested)]
    pub address: Option<AddressRequest>,

    pub license_type: Option<LicenseType>,

    #[validate(range(min = 1, message = "Max users must be at least 1"))]
    pub max_users: Option<i32>,

    pub account_owner_id: Option<Uuid>,

    #[validate(email(message = "Invalid billing email format"))]
    pub billing_email: Option<String>,

    pub status: Option<OrganizationStatus>,
}

// ============================================================================
// Membership Requests
// ============================================================================

/// Add a user to an organization
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembershipRequest {
    pub user_id: Uuid,

    pub organization_id: Uuid,

    pub role: MembershipRole,

    pub status: Option<MembershipStatus>,

    #[validate(length(max = 50, message = "At most 50 permissions allowed"))]
    pub permissions: Option<Vec<String>>,

    pub invited_at: Option<DateTime<Utc>>,

    pub invited_by: Option<Uuid>,
}

/// Change a member's role, status or permissions
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMembershipRequest {
    pub role: Option<MembershipRole>,

    pub status: Option<MembershipStatus>,

    #[validate(length(max = 50, message = "At most 50 permissions allowed"))]
    pub permissions: Option<Vec<String>>,

    pub invited_at: Option<DateTime<Utc>>,

    pub invited_by: Option<Uuid>,
}

// ============================================================================
// Assessment Requests
// ============================================================================

const ASSESSMENT_TYPES: &[&str] = &[
    "apest",
    "mdna",
    "cultural_intelligence",
    "leadership_style",
    "spiritual_gifts",
    "other",
];

const CULTURAL_ADAPTATIONS: &[&str] = &[
    "western",
    "eastern",
    "african",
    "latin_american",
    "middle_eastern",
    "oceanic",
    "universal",
    "global",
];

const SCORING_METHODS: &[&str] = &["likert_5", "likert_7", "binary", "ranking", "weighted"];

const QUESTION_TYPES: &[&str] = &["likert", "multiple_choice", "binary", "ranking", "text"];

fn one_of(value: &str, allowed: &[&str], message: &'static str) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        return Ok(());
    }
    let mut err = ValidationError::new("one_of");
    err.message = Some(Cow::Borrowed(message));
    Err(err)
}

fn validate_assessment_type(value: &str) -> Result<(), ValidationError> {
    one_of(value, ASSESSMENT_TYPES, "Unknown assessment type")
}

fn validate_cultural_adaptation(value: &str) -> Result<(), ValidationError> {
    one_of(value, CULTURAL_ADAPTATIONS, "Unknown cultural adaptation")
}

fn validate_scoring_method(value: &str) -> Result<(), ValidationError> {
    one_of(value, SCORING_METHODS, "Unknown scoring method")
}

fn validate_question_type(value: &str) -> Result<(), ValidationError> {
    one_of(value, QUESTION_TYPES, "Unknown question type")
}

/// Create assessment request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssessmentRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Slug must be 1-100 characters"))]
    pub slug: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(custom(function = "validate_assessment_type"))]
    pub assessment_type: String,

    #[validate(range(min = 1, message = "An assessment needs at least one question"))]
    pub questions_count: i32,

    /// Minutes
    #[validate(range(min = 1, message = "Estimated duration must be at least 1 minute"))]
    pub estimated_duration: Option<i32>,

    #[validate(range(min = 0, message = "Passing score cannot be negative"))]
    pub passing_score: Option<i32>,

    #[validate(range(min = 0.0, max = 1.0, message = "Validity score must be between 0 and 1"))]
    pub validity_score: Option<f64>,

    #[validate(range(min = 0.0, max = 1.0, message = "Reliability score must be between 0 and 1"))]
    pub reliability_score: Option<f64>,

    #[validate(length(max = 2000, message = "Instructions must be at most 2000 characters"))]
    pub instructions: Option<String>,

    pub published_at: Option<DateTime<Utc>>,

    #[validate(length(max = 20, message = "Version must be at most 20 characters"))]
    pub version: Option<String>,

    #[validate(length(max = 10, message = "Language must be at most 10 characters"))]
    pub language: Option<String>,

    #[validate(custom(function = "validate_cultural_adaptation"))]
    pub cultural_adaptation: Option<String>,

    pub research_backed: Option<bool>,

    #[validate(custom(function = "validate_scoring_method"))]
    pub scoring_method: Option<String>,

    pub status: Option<AssessmentStatus>,
}

/// Update assessment request. The slug is fixed once created.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssessmentRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(custom(function = "validate_assessment_type"))]
    pub assessment_type: Option<String>,

    #[validate(range(min = 1, message = "An assessment needs at least one question"))]
    pub questions_count: Option<i32>,

    #[validate(range(min = 1, message = "Estimated duration must be at least 1 minute"))]
    pub estimated_duration: Option<i32>,

    #[validate(range(min = 0, message = "Passing score cannot be negative"))]
    pub passing_score: Option<i32>,

    #[validate(range(min = 0.0, max = 1.0, message = "Validity score must be between 0 and 1"))]
    pub validity_score: Option<f64>,

    #[validate(range(min = 0.0, max = 1.0, message = "Reliability score must be between 0 and 1"))]
    pub reliability_score: Option<f64>,

    #[validate(length(max = 2000, message = "Instructions must be at most 2000 characters"))]
    pub instructions: Option<String>,

    pub published_at: Option<DateTime<Utc>>,

    #[validate(length(max = 20, message = "Version must be at most 20 characters"))]
    pub version: Option<String>,

    #[validate(length(max = 10, message = "Language must be at most 10 characters"))]
    pub language: Option<String>,

    #[validate(custom(function = "validate_cultural_adaptation"))]
    pub cultural_adaptation: Option<String>,

    pub research_backed: Option<bool>,

    #[validate(custom(function = "validate_scoring_method"))]
    pub scoring_method: Option<String>,

    pub status: Option<AssessmentStatus>,
}

/// Add a question to an assessment
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssessmentQuestionRequest {
    pub assessment_id: Uuid,

    #[validate(length(min = 1, max = 1000, message = "Question text must be 1-1000 characters"))]
    pub question_text: String,

    #[validate(custom(function = "validate_question_type"))]
    pub question_type: String,

    #[validate(range(min = 0, message = "Order index cannot be negative"))]
    pub order_index: i32,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,

    pub apest_dimension: Option<ApestDimension>,

    pub answer_options: Option<Vec<AnswerOption>>,

    pub is_required: Option<bool>,

    #[validate(range(min = 0.0, max = 10.0, message = "Weight must be between 0 and 10"))]
    pub weight: Option<f64>,

    pub reverse_scored: Option<bool>,
}

/// Edit a question
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssessmentQuestionRequest {
    #[validate(length(min = 1, max = 1000, message = "Question text must be 1-1000 characters"))]
    pub question_text: Option<String>,

    #[validate(custom(function = "validate_question_type"))]
    pub question_type: Option<String>,

    #[validate(range(min = 0, message = "Order index cannot be negative"))]
    pub order_index: Option<i32>,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,

    pub apest_dimension: Option<ApestDimension>,

    pub answer_options: Option<Vec<AnswerOption>>,

    pub is_required: Option<bool>,

    #[validate(range(min = 0.0, max = 10.0, message = "Weight must be between 0 and 10"))]
    pub weight: Option<f64>,

    pub reverse_scored: Option<bool>,
}

/// Start an assessment for a user
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserAssessmentRequest {
    pub user_id: Uuid,

    pub assessment_id: Uuid,

    /// Defaults to the time of the request
    pub started_at: Option<DateTime<Utc>>,

    pub raw_scores: Option<BTreeMap<String, f64>>,

    #[validate(range(min = 0, message = "Total score cannot be negative"))]
    pub total_score: Option<i32>,

    #[validate(range(min = 0, message = "Max possible score cannot be negative"))]
    pub max_possible_score: Option<i32>,

    #[validate(range(min = 0, max = 100, message = "Scores must be between 0 and 100"))]
    pub apostolic_score: Option<i32>,

    #[validate(range(min = 0, max = 100, message = "Scores must be between 0 and 100"))]
    pub prophetic_score: Option<i32>,

    #[validate(range(min = 0, max = 100, message = "Scores must be between 0 and 100"))]
    pub evangelistic_score: Option<i32>,

    #[validate(range(min = 0, max = 100, message = "Scores must be between 0 and 100"))]
    pub shepherding_score: Option<i32>,

    #[validate(range(min = 0, max = 100, message = "Scores must be between 0 and 100"))]
    pub teaching_score: Option<i32>,

    pub normalized_scores: Option<BTreeMap<String, f64>>,

    #[validate(length(max = 50, message = "Gift must be at most 50 characters"))]
    pub primary_gift: Option<String>,

    #[validate(length(max = 50, message = "Gift must be at most 50 characters"))]
    pub secondary_gift: Option<String>,

    #[validate(range(min = 0.0, max = 1.0, message = "Consistency must be between 0 and 1"))]
    pub response_consistency: Option<f64>,

    /// Minutes
    #[validate(range(min = 0, message = "Completion time cannot be negative"))]
    pub completion_time: Option<i32>,

    #[validate(range(min = 1, max = 5, message = "Confidence level must be 1-5"))]
    pub confidence_level: Option<i32>,

    pub cultural_adjustment_applied: Option<bool>,

    #[validate(range(min = 0.0, max = 2.0, message = "Adjustment factor must be between 0 and 2"))]
    pub cultural_adjustment_factor: Option<f64>,

    #[validate(length(max = 2000, message = "Insights must be at most 2000 characters"))]
    pub ai_insights: Option<String>,

    pub personalized_recommendations: Option<PersonalizedRecommendations>,

    pub suggested_peers: Option<Vec<Uuid>>,

    pub complementary_gifts: Option<Vec<String>>,
}

/// Record progress or scores on a user assessment
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserAssessmentRequest {
    pub started_at: Option<DateTime<Utc>>,

    pub raw_scores: Option<BTreeMap<String, f64>>,

    #[validate(range(min = 0, message = "Total score cannot be negative"))]
    pub total_score: Option<i32>,

    #[validate(range(min = 0, message = "Max possible score cannot be negative"))]
    pub max_possible_score: Option<i32>,

    #[validate(range(min = 0, max = 100, message = "Scores must be between 0 and 100"))]
    pub apostolic_score: Option<i32>,

    #[validate(range(min = 0, max = 100, message = "Scores must be between 0 and 100"))]
    pub prophetic_score: Option<i32>,

    #[validate(range(min = 0, max = 100, message = "Scores must be between 0 and 100"))]
    pub evangelistic_score: Option<i32>,

    #[validate(range(min = 0, max = 100, message = "Scores must be between 0 and 100"))]
    pub shepherding_score: Option<i32>,

    #[validate(range(min = 0, max = 100, message = "Scores must be between 0 and 100"))]
    pub teaching_score: Option<i32>,

    pub normalized_scores: Option<BTreeMap<String, f64>>,

    #[validate(length(max = 50, message = "Gift must be at most 50 characters"))]
    pub primary_gift: Option<String>,

    #[validate(length(max = 50, message = "Gift must be at most 50 characters"))]
    pub secondary_gift: Option<String>,

    #[validate(range(min = 0.0, max = 1.0, message = "Consistency must be between 0 and 1"))]
    pub response_consistency: Option<f64>,

    #[validate(range(min = 0, message = "Completion time cannot be negative"))]
    pub completion_time: Option<i32>,

    #[validate(range(min = 1, max = 5, message = "Confidence level must be 1-5"))]
    pub confidence_level: Option<i32>,

    pub cultural_adjustment_applied: Option<bool>,

    #[validate(range(min = 0.0, max = 2.0, message = "Adjustment factor must be between 0 and 2"))]
    pub cultural_adjustment_factor: Option<f64>,

    #[validate(length(max = 2000, message = "Insights must be at most 2000 characters"))]
    pub ai_insights: Option<String>,

    pub personalized_recommendations: Option<PersonalizedRecommendations>,

    pub suggested_peers: Option<Vec<Uuid>>,

    pub complementary_gifts: Option<Vec<String>>,
}

/// Answer one question
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssessmentResponseRequest {
    pub user_assessment_id: Uuid,

    pub question_id: Uuid,

    pub response_value: Option<i32>,

    #[validate(length(max = 1000, message = "Response text must be at most 1000 characters"))]
    pub response_text: Option<String>,

    /// Seconds
    #[validate(range(min = 0, message = "Response time cannot be negative"))]
    pub response_time: Option<i32>,

    #[validate(range(min = 1, max = 5, message = "Confidence must be 1-5"))]
    pub confidence: Option<i32>,

    pub skipped: Option<bool>,
}

/// Change an answer
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssessmentResponseRequest {
    pub response_value: Option<i32>,

    #[validate(length(max = 1000, message = "Response text must be at most 1000 characters"))]
    pub response_text: Option<String>,

    #[validate(range(min = 0, message = "Response time cannot be negative"))]
    pub response_time: Option<i32>,

    #[validate(range(min = 1, max = 5, message = "Confidence must be 1-5"))]
    pub confidence: Option<i32>,

    pub skipped: Option<bool>,
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Pagination query parameters
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PaginationQuery {
    /// 1-based, defaults to 1
    pub page: Option<u32>,
    /// Defaults to the configured page size
    pub limit: Option<u32>,
}

impl PaginationQuery {
    /// Resolve against the configured limits for a result set of `total` rows
    pub fn into_params(self, total: u64, config: &PaginationConfig) -> AppResult<PaginationParams> {
        let page = self.page.unwrap_or(1);
        if page < 1 {
            return Err(DomainError::InvalidPage(page).into());
        }

        let limit = self.limit.unwrap_or(config.default_limit);
        if limit < 1 || limit > config.max_limit {
            return Err(DomainError::InvalidLimit {
                limit,
                max: config.max_limit,
            }
            .into());
        }

        Ok(PaginationParams::new(page, limit, total))
    }
}
