//! AI system response DTOs

use ministry_core::{
    ApestDimension, ApestScores, ConversationStatus, JobPriority, JobStatus, MessageRole,
    SuggestionStatus,
};
use ministry_db::models::{
    CitedContent, KeyConnections, MinistryContext, TheologicalContext, UserApestProfile,
};
use serde::Serialize;
use uuid::Uuid;

/// AI conversation session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConversationResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub conversation_type: String,
    pub title: Option<String>,
    pub primary_topic: Option<String>,
    pub theological_context: Option<TheologicalContext>,
    pub user_apest_profile: Option<UserApestProfile>,
    pub ministry_context: Option<MinistryContext>,
    pub cultural_context: Option<String>,
    pub total_messages: i32,
    pub conversation_duration_minutes: Option<i32>,
    pub user_satisfaction_rating: Option<i32>,
    pub theological_accuracy_verified: bool,
    pub helpfulness_rating: Option<i32>,
    pub ai_model: String,
    pub model_version: Option<String>,
    pub total_tokens_used: i32,
    pub referenced_content: Vec<Uuid>,
    pub generated_insights: Option<String>,
    pub status: ConversationStatus,

    // Computed
    pub is_active: bool,
    pub is_completed: bool,
    pub is_abandoned: bool,
    pub is_archived: bool,
    pub has_user_rating: bool,
    pub conversation_duration_text: Option<String>,
    pub token_usage_text: String,

    pub created_at: String,
    pub updated_at: String,
    pub completed_at: Option<String>,
}

/// Single message within an AI conversation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiMessageResponse {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub message_index: i32,
    pub token_count: Option<i32>,
    pub cited_content: Vec<CitedContent>,
    pub confidence: Option<String>,
    pub factual_accuracy: Option<bool>,
    pub theological_soundness: Option<bool>,
    pub user_rating: Option<i32>,
    pub user_feedback: Option<String>,
    pub flagged_for_review: bool,
    pub processing_time: Option<i32>,

    // Computed
    pub is_user_message: bool,
    pub is_assistant_message: bool,
    pub is_system_message: bool,
    pub has_user_rating: bool,
    pub has_user_feedback: bool,
    pub is_flagged: bool,
    pub processing_time_text: Option<String>,
    pub confidence_text: Option<String>,

    pub created_at: String,
    pub updated_at: String,
}

/// Background AI processing job
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiContentJobResponse {
    pub id: Uuid,
    pub content_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub job_type: String,
    pub parameters: serde_json::Value,
    pub priority: JobPriority,
    pub status: JobStatus,
    pub result: Option<serde_json::Value>,
    pub confidence_score: Option<String>,
    pub human_reviewed: bool,
    pub human_approved: Option<bool>,
    pub review_notes: Option<String>,
    pub ai_model: String,
    pub tokens_used: Option<i32>,
    pub processing_cost: Option<String>,
    pub error_message: Option<String>,
    pub retry_count: i32,

    // Computed
    pub is_pending: bool,
    pub is_processing: bool,
    pub is_completed: bool,
    pub is_failed: bool,
    pub is_cancelled: bool,
    pub has_error: bool,
    pub needs_human_review: bool,
    pub is_high_priority: bool,
    pub processing_cost_text: Option<String>,
    pub confidence_text: Option<String>,

    pub created_at: String,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
    pub updated_at: String,
}

/// Minimal content item reference embedded in a suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentReferenceSummary {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
}

/// AI-proposed relationship between two content items
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiCrossReferenceSuggestionResponse {
    pub id: Uuid,
    pub source_content_id: Uuid,
    pub target_content_id: Uuid,
    pub suggested_reference_type: String,
    pub confidence_score: String,
    pub relevance_score: String,
    pub reasoning: Option<String>,
    pub key_connections: Option<KeyConnections>,
    pub human_reviewed: bool,
    pub human_approved: Option<bool>,
    pub review_notes: Option<String>,
    pub status: SuggestionStatus,
    pub ai_model: String,
    pub model_version: Option<String>,

    // Computed
    pub is_pending: bool,
    pub is_approved: bool,
    pub is_rejected: bool,
    pub is_implemented: bool,
    pub needs_review: bool,
    pub has_high_confidence: bool,
    pub has_high_relevance: bool,
    pub confidence_text: String,
    pub relevance_text: String,

    // Related
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_content: Option<ContentReferenceSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_content: Option<ContentReferenceSummary>,

    pub created_at: String,
    pub reviewed_at: Option<String>,
    pub implemented_at: Option<String>,
}

/// Knowledge-graph concept
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TheologicalConceptResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub definition: Option<String>,
    pub concept_type: String,
    pub theological_tradition: Vec<String>,
    pub biblical_references: Vec<String>,
    pub historical_period: Option<String>,
    pub related_concepts: Vec<Uuid>,
    pub synonyms: Vec<String>,
    pub apest_relevance: ApestScores,
    pub content_references: i32,
    pub search_count: i32,

    // Computed
    pub has_definition: bool,
    pub has_related_concepts: bool,
    pub has_synonyms: bool,
    pub has_biblical_references: bool,
    pub is_frequently_used: bool,
    pub primary_apest_dimension: ApestDimension,
    pub apest_relevance_text: String,

    pub created_at: String,
    pub updated_at: String,
}
