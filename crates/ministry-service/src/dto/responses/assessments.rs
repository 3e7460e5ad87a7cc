//! Assessment response DTOs

use ministry_core::{ApestScores, AssessmentStatus};
use ministry_db::models::{AnswerOption, PersonalizedRecommendations};
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Assessment definition
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub assessment_type: String,
    pub questions_count: i32,
    pub estimated_duration: Option<i32>,
    pub passing_score: Option<i32>,
    pub version: String,
    pub language: String,
    pub cultural_adaptation: String,
    pub research_backed: bool,
    pub validity_score: String,
    pub reliability_score: String,
    pub instructions: String,
    pub scoring_method: String,
    pub status: AssessmentStatus,

    // Computed
    pub is_published: bool,
    pub is_active: bool,
    pub estimated_duration_text: Option<String>,

    pub created_at: String,
    pub updated_at: String,
    pub published_at: Option<String>,
}

/// Question belonging to an assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentQuestionResponse {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub question_text: String,
    pub question_type: String,
    pub order_index: i32,
    pub is_required: bool,
    pub category: String,
    pub weight: f64,
    pub reverse_scored: bool,
    pub apest_dimension: Option<String>,
    pub answer_options: Vec<AnswerOption>,

    // Computed
    pub has_answer_options: bool,
    pub is_apest_question: bool,

    pub created_at: String,
    pub updated_at: String,
}

/// A user's attempt at an assessment and its scores
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAssessmentResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub assessment_id: Uuid,
    pub started_at: String,
    pub completed_at: Option<String>,
    pub completion_percentage: i32,
    pub raw_scores: BTreeMap<String, f64>,
    pub total_score: i32,
    pub max_possible_score: i32,
    pub apostolic_score: i32,
    pub prophetic_score: i32,
    pub evangelistic_score: i32,
    pub shepherding_score: i32,
    pub teaching_score: i32,
    pub normalized_scores: BTreeMap<String, f64>,
    pub primary_gift: String,
    pub secondary_gift: String,
    pub response_consistency: Option<String>,
    pub completion_time: i32,
    pub confidence_level: i32,
    pub cultural_adjustment_applied: bool,
    pub cultural_adjustment_factor: String,
    pub ai_insights: String,
    pub personalized_recommendations: PersonalizedRecommendations,
    pub suggested_peers: Vec<Uuid>,
    pub complementary_gifts: Vec<String>,

    // Computed
    pub is_completed: bool,
    pub is_in_progress: bool,
    pub completion_time_text: Option<String>,
    pub score_percentage: Option<i64>,
    pub apest_scores: ApestScores,

    pub created_at: String,
    pub updated_at: String,
}

/// Answer to a single question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponseResponse {
    pub id: Uuid,
    pub user_assessment_id: Uuid,
    pub question_id: Uuid,
    pub response_value: Option<i32>,
    pub response_text: Option<String>,
    pub response_time: i32,
    pub confidence: i32,
    pub skipped: bool,

    // Computed
    pub has_response: bool,
    pub response_time_text: Option<String>,

    pub created_at: String,
    pub updated_at: String,
}

/// Assessment together with its question bank
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentWithQuestionsResponse {
    #[serde(flatten)]
    pub assessment: AssessmentResponse,
    pub questions: Vec<AssessmentQuestionResponse>,
}

/// Assessment fields shown next to a user's attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSummary {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub assessment_type: String,
    pub questions_count: i32,
    pub estimated_duration: Option<i32>,
}

/// User assessment with a summary of the assessment taken
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAssessmentWithDetailsResponse {
    #[serde(flatten)]
    pub user_assessment: UserAssessmentResponse,
    pub assessment: AssessmentSummary,
}
