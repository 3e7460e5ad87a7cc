//! Assessment database models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use std::collections::BTreeMap;
use uuid::Uuid;

/// One selectable answer of a question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: i32,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// AI-generated follow-up for a completed assessment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedRecommendations {
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub growth_areas: Vec<String>,
    #[serde(default)]
    pub action_items: Vec<String>,
    #[serde(default)]
    pub content_recommendations: Vec<String>,
}

/// Database model for assessments table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AssessmentModel {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub assessment_type: String,
    pub questions_count: i32,
    /// Minutes
    pub estimated_duration: Option<i32>,
    pub passing_score: Option<i32>,
    pub version: Option<String>,
    pub language: Option<String>,
    pub cultural_adaptation: Option<String>,
    pub research_backed: Option<bool>,
    pub validity_score: Option<String>,
    pub reliability_score: Option<String>,
    pub instructions: Option<String>,
    pub scoring_method: Option<String>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Database model for assessment_questions table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AssessmentQuestionModel {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub question_text: String,
    pub question_type: String,
    pub order_index: i32,
    pub is_required: Option<bool>,
    pub category: Option<String>,
    /// NUMERIC(3,2)
    pub weight: Option<String>,
    pub reverse_scored: Option<bool>,
    pub apest_dimension: Option<String>,
    pub answer_options: Option<Json<Vec<AnswerOption>>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for user_assessments table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserAssessmentModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub assessment_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub completion_percentage: Option<i32>,
    pub raw_scores: Option<Json<BTreeMap<String, f64>>>,
    pub total_score: Option<i32>,
    pub max_possible_score: Option<i32>,
    pub apostolic_score: Option<i32>,
    pub prophetic_score: Option<i32>,
    pub evangelistic_score: Option<i32>,
    pub shepherding_score: Option<i32>,
    pub teaching_score: Option<i32>,
    pub normalized_scores: Option<Json<BTreeMap<String, f64>>>,
    pub primary_gift: Option<String>,
    pub secondary_gift: Option<String>,
    pub response_consistency: Option<String>,
    /// Minutes
    pub completion_time: Option<i32>,
    pub confidence_level: Option<i32>,
    pub cultural_adjustment_applied: Option<bool>,
    pub cultural_adjustment_factor: Option<String>,
    pub ai_insights: Option<String>,
    pub personalized_recommendations: Option<Json<PersonalizedRecommendations>>,
    pub suggested_peers: Option<Json<Vec<Uuid>>>,
    pub complementary_gifts: Option<Json<Vec<String>>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserAssessmentModel {
    /// Check if the user has finished the assessment
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// Database model for assessment_responses table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AssessmentResponseModel {
    pub id: Uuid,
    pub user_assessment_id: Uuid,
    pub question_id: Uuid,
    pub response_value: Option<i32>,
    pub response_text: Option<String>,
    /// Seconds taken to answer
    pub response_time: Option<i32>,
    pub confidence: Option<i32>,
    pub skipped: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AssessmentResponseModel {
    /// Check if any answer was recorded
    #[inline]
    pub fn has_response(&self) -> bool {
        self.response_value.is_some() || self.response_text.is_some()
    }
}
