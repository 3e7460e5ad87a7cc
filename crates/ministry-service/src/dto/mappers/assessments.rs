//! Assessment family mappers
//!
//! Rows map to responses through `From`. Requests map to changesets through
//! `TryFrom`, which validates first. Both directions apply the same column
//! defaults.

use chrono::Utc;
use ministry_common::AppError;
use ministry_core::{ApestScores, AssessmentStatus, PaginationParams};
use ministry_db::models::{
    AssessmentModel, AssessmentQuestionModel, AssessmentResponseModel, UserAssessmentModel,
};
use ministry_db::{
    AssessmentInsert, AssessmentQuestionInsert, AssessmentQuestionUpdate, AssessmentResponseInsert,
    AssessmentResponseUpdate, AssessmentUpdate, UserAssessmentInsert, UserAssessmentUpdate,
};
use sqlx::types::Json;

use super::format::{
    calculate_score_percentage, format_duration, format_response_time, parse_decimal,
    to_iso_string,
};
use super::json_or_default;
use crate::dto::requests::{
    validate_request, CreateAssessmentQuestionRequest, CreateAssessmentRequest,
    CreateAssessmentResponseRequest, CreateUserAssessmentRequest, UpdateAssessmentQuestionRequest,
    UpdateAssessmentRequest, UpdateAssessmentResponseRequest, UpdateUserAssessmentRequest,
};
use crate::dto::responses::{
    AssessmentQuestionResponse, AssessmentResponse, AssessmentResponseResponse, AssessmentSummary,
    AssessmentWithQuestionsResponse, PaginatedListResponse, UserAssessmentResponse,
    UserAssessmentWithDetailsResponse,
};

/// Weight applied when the stored weight is missing or unreadable
const DEFAULT_QUESTION_WEIGHT: f64 = 1.0;

const DEFAULT_QUESTION_WEIGHT_TEXT: &str = "1.0";
const DEFAULT_VERSION: &str = "1.0";
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_CULTURAL_ADAPTATION: &str = "universal";
const DEFAULT_SCORING_METHOD: &str = "likert_5";

// ============================================================================
// Assessment Mappers
// ============================================================================

impl From<&AssessmentModel> for AssessmentResponse {
    fn from(row: &AssessmentModel) -> Self {
        let status = AssessmentStatus::from_column(row.status.as_deref());

        Self {
            id: row.id,
            name: row.name.clone(),
            slug: row.slug.clone(),
            description: row.description.clone().unwrap_or_default(),
            assessment_type: row.assessment_type.clone(),
            questions_count: row.questions_count,
            estimated_duration: row.estimated_duration,
            passing_score: row.passing_score,
            version: row
                .version
                .clone()
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            language: row
                .language
                .clone()
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            cultural_adaptation: row
                .cultural_adaptation
                .clone()
                .unwrap_or_else(|| DEFAULT_CULTURAL_ADAPTATION.to_string()),
            research_backed: row.research_backed.unwrap_or(false),
            validity_score: row.validity_score.clone().unwrap_or_default(),
            reliability_score: row.reliability_score.clone().unwrap_or_default(),
            instructions: row.instructions.clone().unwrap_or_default(),
            scoring_method: row
                .scoring_method
                .clone()
                .unwrap_or_else(|| DEFAULT_SCORING_METHOD.to_string()),
            status,
            is_published: row.published_at.is_some(),
            is_active: status == AssessmentStatus::Active,
            estimated_duration_text: format_duration(row.estimated_duration),
            created_at: to_iso_string(&row.created_at),
            updated_at: to_iso_string(&row.updated_at),
            published_at: row.published_at.as_ref().map(to_iso_string),
        }
    }
}

impl From<AssessmentModel> for AssessmentResponse {
    fn from(row: AssessmentModel) -> Self {
        Self::from(&row)
    }
}

impl From<&AssessmentModel> for AssessmentSummary {
    fn from(row: &AssessmentModel) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
            slug: row.slug.clone(),
            assessment_type: row.assessment_type.clone(),
            questions_count: row.questions_count,
            estimated_duration: row.estimated_duration,
        }
    }
}

// ============================================================================
// Question Mappers
// ============================================================================

impl From<&AssessmentQuestionModel> for AssessmentQuestionResponse {
    fn from(row: &AssessmentQuestionModel) -> Self {
        let answer_options = json_or_default(row.answer_options.as_ref());

        Self {
            id: row.id,
            assessment_id: row.assessment_id,
            question_text: row.question_text.clone(),
            question_type: row.question_type.clone(),
            order_index: row.order_index,
            is_required: row.is_required.unwrap_or(true),
            category: row.category.clone().unwrap_or_default(),
            weight: row
                .weight
                .as_deref()
                .and_then(parse_decimal)
                .unwrap_or(DEFAULT_QUESTION_WEIGHT),
            reverse_scored: row.reverse_scored.unwrap_or(false),
            apest_dimension: row.apest_dimension.clone(),
            has_answer_options: !answer_options.is_empty(),
            answer_options,
            is_apest_question: row.apest_dimension.is_some(),
            created_at: to_iso_string(&row.created_at),
            updated_at: to_iso_string(&row.updated_at),
        }
    }
}

impl From<AssessmentQuestionModel> for AssessmentQuestionResponse {
    fn from(row: AssessmentQuestionModel) -> Self {
        Self::from(&row)
    }
}

/// Helper struct for creating AssessmentWithQuestionsResponse
#[derive(Debug, Clone, Copy)]
pub struct AssessmentWithQuestions<'a> {
    pub assessment: &'a AssessmentModel,
    pub questions: &'a [AssessmentQuestionModel],
}

impl From<AssessmentWithQuestions<'_>> for AssessmentWithQuestionsResponse {
    fn from(details: AssessmentWithQuestions<'_>) -> Self {
        Self {
            assessment: AssessmentResponse::from(details.assessment),
            questions: details
                .questions
                .iter()
                .map(AssessmentQuestionResponse::from)
                .collect(),
        }
    }
}

// ============================================================================
// User Assessment Mappers
// ============================================================================

impl From<&UserAssessmentModel> for UserAssessmentResponse {
    fn from(row: &UserAssessmentModel) -> Self {
        let completion_percentage = row.completion_percentage.unwrap_or(0);
        let apest_scores = ApestScores {
            apostolic: row.apostolic_score.unwrap_or(0),
            prophetic: row.prophetic_score.unwrap_or(0),
            evangelistic: row.evangelistic_score.unwrap_or(0),
            shepherding: row.shepherding_score.unwrap_or(0),
            teaching: row.teaching_score.unwrap_or(0),
        };

        Self {
            id: row.id,
            user_id: row.user_id,
            assessment_id: row.assessment_id,
            started_at: to_iso_string(&row.started_at),
            completed_at: row.completed_at.as_ref().map(to_iso_string),
            completion_percentage,
            raw_scores: json_or_default(row.raw_scores.as_ref()),
            total_score: row.total_score.unwrap_or(0),
            max_possible_score: row.max_possible_score.unwrap_or(0),
            apostolic_score: apest_scores.apostolic,
            prophetic_score: apest_scores.prophetic,
            evangelistic_score: apest_scores.evangelistic,
            shepherding_score: apest_scores.shepherding,
            teaching_score: apest_scores.teaching,
            normalized_scores: json_or_default(row.normalized_scores.as_ref()),
            primary_gift: row.primary_gift.clone().unwrap_or_default(),
            secondary_gift: row.secondary_gift.clone().unwrap_or_default(),
            response_consistency: row.response_consistency.clone(),
            completion_time: row.completion_time.unwrap_or(0),
            confidence_level: row.confidence_level.unwrap_or(0),
            cultural_adjustment_applied: row.cultural_adjustment_applied.unwrap_or(false),
            cultural_adjustment_factor: row.cultural_adjustment_factor.clone().unwrap_or_default(),
            ai_insights: row.ai_insights.clone().unwrap_or_default(),
            personalized_recommendations: json_or_default(
                row.personalized_recommendations.as_ref(),
            ),
            suggested_peers: json_or_default(row.suggested_peers.as_ref()),
            complementary_gifts: json_or_default(row.complementary_gifts.as_ref()),
            is_completed: row.is_completed(),
            is_in_progress: !row.is_completed() && completion_percentage > 0,
            completion_time_text: format_duration(row.completion_time),
            score_percentage: calculate_score_percentage(row.total_score, row.max_possible_score),
            apest_scores,
            created_at: to_iso_string(&row.created_at),
            updated_at: to_iso_string(&row.updated_at),
        }
    }
}

impl From<UserAssessmentModel> for UserAssessmentResponse {
    fn from(row: UserAssessmentModel) -> Self {
        Self::from(&row)
    }
}

/// Helper struct for creating UserAssessmentWithDetailsResponse
#[derive(Debug, Clone, Copy)]
pub struct UserAssessmentWithDetails<'a> {
    pub user_assessment: &'a UserAssessmentModel,
    pub assessment: &'a AssessmentModel,
}

impl From<UserAssessmentWithDetails<'_>> for UserAssessmentWithDetailsResponse {
    fn from(details: UserAssessmentWithDetails<'_>) -> Self {
        Self {
            user_assessment: UserAssessmentResponse::from(details.user_assessment),
            assessment: AssessmentSummary::from(details.assessment),
        }
    }
}

// ============================================================================
// Response Mappers
// ============================================================================

impl From<&AssessmentResponseModel> for AssessmentResponseResponse {
    fn from(row: &AssessmentResponseModel) -> Self {
        Self {
            id: row.id,
            user_assessment_id: row.user_assessment_id,
            question_id: row.question_id,
            response_value: row.response_value,
            response_text: row.response_text.clone(),
            response_time: row.response_time.unwrap_or(0),
            confidence: row.confidence.unwrap_or(0),
            skipped: row.skipped.unwrap_or(false),
            has_response: row.has_response(),
            response_time_text: format_response_time(row.response_time),
            created_at: to_iso_string(&row.created_at),
            updated_at: to_iso_string(&row.updated_at),
        }
    }
}

impl From<AssessmentResponseModel> for AssessmentResponseResponse {
    fn from(row: AssessmentResponseModel) -> Self {
        Self::from(&row)
    }
}

// ============================================================================
// Request Mappers
// ============================================================================

/// NUMERIC column text for a request value
fn decimal_text(value: f64) -> String {
    value.to_string()
}

impl TryFrom<&CreateAssessmentRequest> for AssessmentInsert {
    type Error = AppError;

    fn try_from(request: &CreateAssessmentRequest) -> Result<Self, Self::Error> {
        validate_request(request)?;

        Ok(Self {
            name: request.name.clone(),
            slug: request.slug.clone(),
            description: request.description.clone(),
            assessment_type: request.assessment_type.clone(),
            questions_count: request.questions_count,
            estimated_duration: request.estimated_duration,
            passing_score: request.passing_score,
            validity_score: request.validity_score.map(decimal_text),
            reliability_score: request.reliability_score.map(decimal_text),
            instructions: request.instructions.clone(),
            published_at: request.published_at,
            version: request
                .version
                .clone()
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            language: request
                .language
                .clone()
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            cultural_adaptation: request
                .cultural_adaptation
                .clone()
                .unwrap_or_else(|| DEFAULT_CULTURAL_ADAPTATION.to_string()),
            research_backed: request.research_backed.unwrap_or(false),
            scoring_method: request
                .scoring_method
                .clone()
                .unwrap_or_else(|| DEFAULT_SCORING_METHOD.to_string()),
            status: request.status.unwrap_or_default(),
        })
    }
}

impl TryFrom<&UpdateAssessmentRequest> for AssessmentUpdate {
    type Error = AppError;

    fn try_from(request: &UpdateAssessmentRequest) -> Result<Self, Self::Error> {
        validate_request(request)?;

        Ok(Self {
            name: request.name.clone(),
            description: request.description.clone(),
            assessment_type: request.assessment_type.clone(),
            questions_count: request.questions_count,
            estimated_duration: request.estimated_duration,
            passing_score: request.passing_score,
            validity_score: request.validity_score.map(decimal_text),
            reliability_score: request.reliability_score.map(decimal_text),
            instructions: request.instructions.clone(),
            published_at: request.published_at,
            version: request.version.clone(),
            language: request.language.clone(),
            cultural_adaptation: request.cultural_adaptation.clone(),
            research_backed: request.research_backed,
            scoring_method: request.scoring_method.clone(),
            status: request.status,
        })
    }
}

impl TryFrom<&CreateAssessmentQuestionRequest> for AssessmentQuestionInsert {
    type Error = AppError;

    fn try_from(request: &CreateAssessmentQuestionRequest) -> Result<Self, Self::Error> {
        validate_request(request)?;

        Ok(Self {
            assessment_id: request.assessment_id,
            question_text: request.question_text.clone(),
            question_type: request.question_type.clone(),
            order_index: request.order_index,
            category: request.category.clone(),
            apest_dimension: request.apest_dimension,
            answer_options: request.answer_options.clone().map(Json),
            is_required: request.is_required.unwrap_or(true),
            weight: request
                .weight
                .map_or_else(|| DEFAULT_QUESTION_WEIGHT_TEXT.to_string(), decimal_text),
            reverse_scored: request.reverse_scored.unwrap_or(false),
        })
    }
}

impl TryFrom<&UpdateAssessmentQuestionRequest> for AssessmentQuestionUpdate {
    type Error = AppError;

    fn try_from(request: &UpdateAssessmentQuestionRequest) -> Result<Self, Self::Error> {
        validate_request(request)?;

        Ok(Self {
            question_text: request.question_text.clone(),
            question_type: request.question_type.clone(),
            order_index: request.order_index,
            category: request.category.clone(),
            apest_dimension: request.apest_dimension,
            answer_options: request.answer_options.clone().map(Json),
            is_required: request.is_required,
            weight: request.weight.map(decimal_text),
            reverse_scored: request.reverse_scored,
        })
    }
}

impl TryFrom<&CreateUserAssessmentRequest> for UserAssessmentInsert {
    type Error = AppError;

    fn try_from(request: &CreateUserAssessmentRequest) -> Result<Self, Self::Error> {
        validate_request(request)?;

        Ok(Self {
            user_id: request.user_id,
            assessment_id: request.assessment_id,
            started_at: request.started_at.unwrap_or_else(Utc::now),
            raw_scores: request.raw_scores.clone().map(Json),
            total_score: request.total_score,
            max_possible_score: request.max_possible_score,
            apostolic_score: request.apostolic_score,
            prophetic_score: request.prophetic_score,
            evangelistic_score: request.evangelistic_score,
            shepherding_score: request.shepherding_score,
            teaching_score: request.teaching_score,
            normalized_scores: request.normalized_scores.clone().map(Json),
            primary_gift: request.primary_gift.clone(),
            secondary_gift: request.secondary_gift.clone(),
            response_consistency: request.response_consistency.map(decimal_text),
            completion_time: request.completion_time,
            confidence_level: request.confidence_level,
            cultural_adjustment_applied: request.cultural_adjustment_applied.unwrap_or(false),
            cultural_adjustment_factor: request.cultural_adjustment_factor.map(decimal_text),
            ai_insights: request.ai_insights.clone(),
            personalized_recommendations: request.personalized_recommendations.clone().map(Json),
            suggested_peers: Json(request.suggested_peers.clone().unwrap_or_default()),
            complementary_gifts: Json(request.complementary_gifts.clone().unwrap_or_default()),
        })
    }
}

impl TryFrom<&UpdateUserAssessmentRequest> for UserAssessmentUpdate {
    type Error = AppError;

    fn try_from(request: &UpdateUserAssessmentRequest) -> Result<Self, Self::Error> {
        validate_request(request)?;

        Ok(Self {
            started_at: request.started_at,
            raw_scores: request.raw_scores.clone().map(Json),
            total_score: request.total_score,
            max_possible_score: request.max_possible_score,
            apostolic_score: request.apostolic_score,
            prophetic_score: request.prophetic_score,
            evangelistic_score: request.evangelistic_score,
            shepherding_score: request.shepherding_score,
            teaching_score: request.teaching_score,
            normalized_scores: request.normalized_scores.clone().map(Json),
            primary_gift: request.primary_gift.clone(),
            secondary_gift: request.secondary_gift.clone(),
            response_consistency: request.response_consistency.map(decimal_text),
            completion_time: request.completion_time,
            confidence_level: request.confidence_level,
            cultural_adjustment_applied: request.cultural_adjustment_applied,
            cultural_adjustment_factor: request.cultural_adjustment_factor.map(decimal_text),
            ai_insights: request.ai_insights.clone(),
            personalized_recommendations: request.personalized_recommendations.clone().map(Json),
            suggested_peers: request.suggested_peers.clone().map(Json),
            complementary_gifts: request.complementary_gifts.clone().map(Json),
        })
    }
}

impl TryFrom<&CreateAssessmentResponseRequest> for AssessmentResponseInsert {
    type Error = AppError;

    fn try_from(request: &CreateAssessmentResponseRequest) -> Result<Self, Self::Error> {
        validate_request(request)?;

        Ok(Self {
            user_assessment_id: request.user_assessment_id,
            question_id: request.question_id,
            response_value: request.response_value,
            response_text: request.response_text.clone(),
            response_time: request.response_time,
            confidence: request.confidence,
            skipped: request.skipped.unwrap_or(false),
        })
    }
}

impl TryFrom<&UpdateAssessmentResponseRequest> for AssessmentResponseUpdate {
    type Error = AppError;

    fn try_from(request: &UpdateAssessmentResponseRequest) -> Result<Self, Self::Error> {
        validate_request(request)?;

        Ok(Self {
            response_value: request.response_value,
            response_text: request.response_text.clone(),
            response_time: request.response_time,
            confidence: request.confidence,
            skipped: request.skipped,
        })
    }
}

// ============================================================================
// List Mappers
// ============================================================================

pub fn to_paginated_assessment_list(
    rows: &[AssessmentModel],
    params: PaginationParams,
) -> PaginatedListResponse<AssessmentResponse> {
    PaginatedListResponse::from_rows(rows, params)
}

pub fn to_paginated_user_assessment_list(
    rows: &[UserAssessmentWithDetails<'_>],
    params: PaginationParams,
) -> PaginatedListResponse<UserAssessmentWithDetailsResponse> {
    PaginatedListResponse::from_rows(rows.iter().copied(), params)
}
