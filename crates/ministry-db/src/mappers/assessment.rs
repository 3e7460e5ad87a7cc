//! Assessment family changesets
//!
//! NUMERIC columns are written back as decimal text, matching how the
//! models read them.

use chrono::{DateTime, Utc};
use ministry_core::{ApestDimension, AssessmentStatus};
use sqlx::types::Json;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::models::{AnswerOption, PersonalizedRecommendations};

fn collect_changed(columns: &[(&'static str, bool)]) -> Vec<&'static str> {
    columns
        .iter()
        .filter_map(|(column, changed)| changed.then_some(*column))
        .collect()
}

/// Values for inserting an assessments row
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentInsert {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub assessment_type: String,
    pub questions_count: i32,
    pub estimated_duration: Option<i32>,
    pub passing_score: Option<i32>,
    pub validity_score: Option<String>,
    pub reliability_score: Option<String>,
    pub instructions: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub version: String,
    pub language: String,
    pub cultural_adaptation: String,
    pub research_backed: bool,
    pub scoring_method: String,
    pub status: AssessmentStatus,
}

/// Values for updating an assessments row. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub assessment_type: Option<String>,
    pub questions_count: Option<i32>,
    pub estimated_duration: Option<i32>,
    pub passing_score: Option<i32>,
    pub validity_score: Option<String>,
    pub reliability_score: Option<String>,
    pub instructions: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub version: Option<String>,
    pub language: Option<String>,
    pub cultural_adaptation: Option<String>,
    pub research_backed: Option<bool>,
    pub scoring_method: Option<String>,
    pub status: Option<AssessmentStatus>,
}

impl AssessmentUpdate {
    /// Names of the columns this changeset writes
    pub fn changed_columns(&self) -> Vec<&'static str> {
        collect_changed(&[
            ("name", self.name.is_some()),
            ("description", self.description.is_some()),
            ("assessment_type", self.assessment_type.is_some()),
            ("questions_count", self.questions_count.is_some()),
            ("estimated_duration", self.estimated_duration.is_some()),
            ("passing_score", self.passing_score.is_some()),
            ("validity_score", self.validity_score.is_some()),
            ("reliability_score", self.reliability_score.is_some()),
            ("instructions", self.instructions.is_some()),
            ("published_at", self.published_at.is_some()),
            ("version", self.version.is_some()),
            ("language", self.language.is_some()),
            ("cultural_adaptation", self.cultural_adaptation.is_some()),
            ("research_backed", self.research_backed.is_some()),
            ("scoring_method", self.scoring_method.is_some()),
            ("status", self.status.is_some()),
        ])
    }

    /// Check if the changeset writes nothing
    pub fn is_empty(&self) -> bool {
        self.changed_columns().is_empty()
    }
}

/// Values for inserting an assessment_questions row
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentQuestionInsert {
    pub assessment_id: Uuid,
    pub question_text: String,
    pub question_type: String,
    pub order_index: i32,
    pub category: Option<String>,
    pub apest_dimension: Option<ApestDimension>,
    pub answer_options: Option<Json<Vec<AnswerOption>>>,
    pub is_required: bool,
    pub weight: String,
    pub reverse_scored: bool,
}

/// Values for updating an assessment_questions row. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentQuestionUpdate {
    pub question_text: Option<String>,
    pub question_type: Option<String>,
    pub order_index: Option<i32>,
    pub category: Option<String>,
    pub apest_dimension: Option<ApestDimension>,
    pub answer_options: Option<Json<Vec<AnswerOption>>>,
    pub is_required: Option<bool>,
    pub weight: Option<String>,
    pub reverse_scored: Option<bool>,
}

impl AssessmentQuestionUpdate {
    /// Names of the columns this changeset writes
    pub fn changed_columns(&self) -> Vec<&'static str> {
        collect_changed(&[
            ("question_text", self.question_text.is_some()),
            ("question_type", self.question_type.is_some()),
            ("order_index", self.order_index.is_some()),
            ("category", self.category.is_some()),
            ("apest_dimension", self.apest_dimension.is_some()),
            ("answer_options", self.answer_options.is_some()),
            ("is_required", self.is_required.is_some()),
            ("weight", self.weight.is_some()),
            ("reverse_scored", self.reverse_scored.is_some()),
        ])
    }

    /// Check if the changeset writes nothing
    pub fn is_empty(&self) -> bool {
        self.changed_columns().is_empty()
    }
}

/// Values for inserting a user_assessments row
#[derive(Debug, Clone, PartialEq)]
pub struct UserAssessmentInsert {
    pub user_id: Uuid,
    pub assessment_id: Uuid,
    pub started_at: DateTime<Utc>,
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
    pub completion_time: Option<i32>,
    pub confidence_level: Option<i32>,
    pub cultural_adjustment_applied: bool,
    pub cultural_adjustment_factor: Option<String>,
    pub ai_insights: Option<String>,
    pub personalized_recommendations: Option<Json<PersonalizedRecommendations>>,
    pub suggested_peers: Json<Vec<Uuid>>,
    pub complementary_gifts: Json<Vec<String>>,
}

/// Values for updating a user_assessments row. `None` leaves the column unchanged.
///
/// Completion time stamps and the completion percentage are owned by the
/// scoring flow and are not part of this changeset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserAssessmentUpdate {
    pub started_at: Option<DateTime<Utc>>,
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
    pub completion_time: Option<i32>,
    pub confidence_level: Option<i32>,
    pub cultural_adjustment_applied: Option<bool>,
    pub cultural_adjustment_factor: Option<String>,
    pub ai_insights: Option<String>,
    pub personalized_recommendations: Option<Json<PersonalizedRecommendations>>,
    pub suggested_peers: Option<Json<Vec<Uuid>>>,
    pub complementary_gifts: Option<Json<Vec<String>>>,
}

impl UserAssessmentUpdate {
    /// Names of the columns this changeset writes
    pub fn changed_columns(&self) -> Vec<&'static str> {
        collect_changed(&[
            ("started_at", self.started_at.is_some()),
            ("raw_scores", self.raw_scores.is_some()),
            ("total_score", self.total_score.is_some()),
            ("max_possible_score", self.max_possible_score.is_some()),
            ("apostolic_score", self.apostolic_score.is_some()),
            ("prophetic_score", self.prophetic_score.is_some()),
            ("evangelistic_score", self.evangelistic_score.is_some()),
            ("shepherding_score", self.shepherding_score.is_some()),
            ("teaching_score", self.teaching_score.is_some()),
            ("normalized_scores", self.normalized_scores.is_some()),
            ("primary_gift", self.primary_gift.is_some()),
            ("secondary_gift", self.secondary_gift.is_some()),
            ("response_consistency", self.response_consistency.is_some()),
            ("completion_time", self.completion_time.is_some()),
            ("confidence_level", self.confidence_level.is_some()),
            (
                "cultural_adjustment_applied",
                self.cultural_adjustment_applied.is_some(),
            ),
            (
                "cultural_adjustment_factor",
                self.cultural_adjustment_factor.is_some(),
            ),
            ("ai_insights", self.ai_insights.is_some()),
            (
                "personalized_recommendations",
                self.personalized_recommendations.is_some(),
            ),
            ("suggested_peers", self.suggested_peers.is_some()),
            ("complementary_gifts", self.complementary_gifts.is_some()),
        ])
    }

    /// Check if the changeset writes nothing
    pub fn is_empty(&self) -> bool {
        self.changed_columns().is_empty()
    }
}

/// Values for inserting an assessment_responses row
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentResponseInsert {
    pub user_assessment_id: Uuid,
    pub question_id: Uuid,
    pub response_value: Option<i32>,
    pub response_text: Option<String>,
    pub response_time: Option<i32>,
    pub confidence: Option<i32>,
    pub skipped: bool,
}

/// Values for updating an assessment_responses row. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentResponseUpdate {
    pub response_value: Option<i32>,
    pub response_text: Option<String>,
    pub response_time: Option<i32>,
    pub confidence: Option<i32>,
    pub skipped: Option<bool>,
}

impl AssessmentResponseUpdate {
    /// Names of the columns this changeset writes
    pub fn changed_columns(&self) -> Vec<&'static str> {
        collect_changed(&[
            ("response_value", self.response_value.is_some()),
            ("response_text", self.response_text.is_some()),
            ("response_time", self.response_time.is_some()),
            ("confidence", self.confidence.is_some()),
            ("skipped", self.skipped.is_some()),
        ])
    }

    /// Check if the changeset writes nothing
    pub fn is_empty(&self) -> bool {
        self.changed_columns().is_empty()
    }
}
