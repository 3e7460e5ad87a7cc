//! AI conversation, job and knowledge-graph database models

use chrono::{DateTime, Utc};
use ministry_core::ApestScores;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Theological framing captured for a conversation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TheologicalContext {
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub scriptures: Vec<String>,
    #[serde(default)]
    pub traditions: Vec<String>,
}

/// Snapshot of the user's APEST profile when the conversation started
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserApestProfile {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub scores: BTreeMap<String, f64>,
}

/// Ministry setting the user described
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinistryContext {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub focus_areas: Vec<String>,
}

/// Content cited by an assistant message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitedContent {
    pub content_id: Uuid,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub relevance_score: Option<f64>,
}

/// Shared ground between two content items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyConnections {
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub concepts: Vec<String>,
    #[serde(default)]
    pub scriptures: Vec<String>,
}

/// Database model for ai_conversations table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AiConversationModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub conversation_type: String,
    pub title: Option<String>,
    pub primary_topic: Option<String>,
    pub theological_context: Option<Json<TheologicalContext>>,
    pub user_apest_profile: Option<Json<UserApestProfile>>,
    pub ministry_context: Option<Json<MinistryContext>>,
    pub cultural_context: Option<String>,
    pub total_messages: Option<i32>,
    pub conversation_duration_minutes: Option<i32>,
    pub user_satisfaction_rating: Option<i32>,
    pub theological_accuracy_verified: Option<bool>,
    pub helpfulness_rating: Option<i32>,
    pub ai_model: Option<String>,
    pub model_version: Option<String>,
    pub total_tokens_used: Option<i32>,
    pub referenced_content: Option<Json<Vec<Uuid>>>,
    pub generated_insights: Option<String>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Database model for ai_messages table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AiMessageModel {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub role: String,
    pub content: String,
    pub message_index: i32,
    pub token_count: Option<i32>,
    pub cited_content: Option<Json<Vec<CitedContent>>>,
    /// NUMERIC(3,2)
    pub confidence: Option<String>,
    pub factual_accuracy: Option<bool>,
    pub theological_soundness: Option<bool>,
    pub user_rating: Option<i32>,
    pub user_feedback: Option<String>,
    pub flagged_for_review: Option<bool>,
    /// Milliseconds
    pub processing_time: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for ai_content_jobs table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AiContentJobModel {
    pub id: Uuid,
    pub content_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub job_type: String,
    pub parameters: Option<Json<serde_json::Value>>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub result: Option<Json<serde_json::Value>>,
    pub confidence_score: Option<String>,
    pub human_reviewed: Option<bool>,
    pub human_approved: Option<bool>,
    pub review_notes: Option<String>,
    pub ai_model: Option<String>,
    pub tokens_used: Option<i32>,
    /// NUMERIC(8,4)
    pub processing_cost: Option<String>,
    pub error_message: Option<String>,
    pub retry_count: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for ai_cross_reference_suggestions table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AiCrossReferenceSuggestionModel {
    pub id: Uuid,
    pub source_content_id: Uuid,
    pub target_content_id: Uuid,
    pub suggested_reference_type: String,
    pub confidence_score: String,
    pub relevance_score: String,
    pub reasoning: Option<String>,
    pub key_connections: Option<Json<KeyConnections>>,
    pub human_reviewed: Option<bool>,
    pub human_approved: Option<bool>,
    pub review_notes: Option<String>,
    pub status: Option<String>,
    pub ai_model: Option<String>,
    pub model_version: Option<String>,
    pub created_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub implemented_at: Option<DateTime<Utc>>,
}

/// Database model for theological_concepts table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TheologicalConceptModel {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub definition: Option<String>,
    pub concept_type: String,
    pub theological_tradition: Option<Json<Vec<String>>>,
    pub biblical_references: Option<Json<Vec<String>>>,
    pub historical_period: Option<String>,
    pub related_concepts: Option<Json<Vec<Uuid>>>,
    pub synonyms: Option<Json<Vec<String>>>,
    pub apest_relevance: Option<Json<ApestScores>>,
    pub content_references: Option<i32>,
    pub search_count: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
