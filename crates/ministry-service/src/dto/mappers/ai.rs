//! AI system row to response mappers

use ministry_core::{
    ApestScores, ConversationStatus, JobPriority, JobStatus, MessageRole, PaginationParams,
    SuggestionStatus,
};
use ministry_db::models::{
    AiContentJobModel, AiConversationModel, AiCrossReferenceSuggestionModel, AiMessageModel,
    ContentItemModel, TheologicalConceptModel,
};

use super::format::{
    format_apest_relevance, format_duration, format_processing_time, format_score,
    format_token_count, parse_decimal, primary_apest_dimension, to_iso_string,
};
use super::{json_opt, json_or_default, DEFAULT_AI_MODEL};
use crate::dto::responses::{
    AiContentJobResponse, AiConversationResponse, AiCrossReferenceSuggestionResponse,
    AiMessageResponse, ContentReferenceSummary, PaginatedListResponse, TheologicalConceptResponse,
};

/// Scores above this are flagged as high confidence or high relevance
const HIGH_SCORE_THRESHOLD: f64 = 0.8;

/// Concepts referenced by more content than this are frequently used
const FREQUENT_USE_THRESHOLD: i32 = 10;

// ============================================================================
// Conversation Mappers
// ============================================================================

impl From<&AiConversationModel> for AiConversationResponse {
    fn from(row: &AiConversationModel) -> Self {
        let status = ConversationStatus::from_column(row.status.as_deref());

        Self {
            id: row.id,
            user_id: row.user_id,
            conversation_type: row.conversation_type.clone(),
            title: row.title.clone(),
            primary_topic: row.primary_topic.clone(),
            theological_context: json_opt(row.theological_context.as_ref()),
            user_apest_profile: json_opt(row.user_apest_profile.as_ref()),
            ministry_context: json_opt(row.ministry_context.as_ref()),
            cultural_context: row.cultural_context.clone(),
            total_messages: row.total_messages.unwrap_or(0),
            conversation_duration_minutes: row.conversation_duration_minutes,
            user_satisfaction_rating: row.user_satisfaction_rating,
            theological_accuracy_verified: row.theological_accuracy_verified.unwrap_or(false),
            helpfulness_rating: row.helpfulness_rating,
            ai_model: row
                .ai_model
                .clone()
                .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string()),
            model_version: row.model_version.clone(),
            total_tokens_used: row.total_tokens_used.unwrap_or(0),
            referenced_content: json_or_default(row.referenced_content.as_ref()),
            generated_insights: row.generated_insights.clone(),
            status,
            is_active: status == ConversationStatus::Active,
            is_completed: status == ConversationStatus::Completed,
            is_abandoned: status == ConversationStatus::Abandoned,
            is_archived: status == ConversationStatus::Archived,
            has_user_rating: row.user_satisfaction_rating.is_some(),
            conversation_duration_text: format_duration(row.conversation_duration_minutes),
            token_usage_text: format_token_count(row.total_tokens_used),
            created_at: to_iso_string(&row.created_at),
            updated_at: to_iso_string(&row.updated_at),
            completed_at: row.completed_at.as_ref().map(to_iso_string),
        }
    }
}

impl From<AiConversationModel> for AiConversationResponse {
    fn from(row: AiConversationModel) -> Self {
        Self::from(&row)
    }
}

// ============================================================================
// Message Mappers
// ============================================================================

impl From<&AiMessageModel> for AiMessageResponse {
    fn from(row: &AiMessageModel) -> Self {
        let role = MessageRole::from(row.role.as_str());
        let flagged = row.flagged_for_review.unwrap_or(false);

        Self {
            id: row.id,
            conversation_id: row.conversation_id,
            role,
            content: row.content.clone(),
            message_index: row.message_index,
            token_count: row.token_count,
            cited_content: json_or_default(row.cited_content.as_ref()),
            confidence: row.confidence.clone(),
            factual_accuracy: row.factual_accuracy,
            theological_soundness: row.theological_soundness,
            user_rating: row.user_rating,
            user_feedback: row.user_feedback.clone(),
            flagged_for_review: flagged,
            processing_time: row.processing_time,
            is_user_message: role == MessageRole::User,
            is_assistant_message: role == MessageRole::Assistant,
            is_system_message: role == MessageRole::System,
            has_user_rating: row.user_rating.is_some(),
            has_user_feedback: row.user_feedback.is_some(),
            is_flagged: flagged,
            processing_time_text: format_processing_time(row.processing_time),
            confidence_text: format_score(row.confidence.as_deref()),
            created_at: to_iso_string(&row.created_at),
            updated_at: to_iso_string(&row.updated_at),
        }
    }
}

impl From<AiMessageModel> for AiMessageResponse {
    fn from(row: AiMessageModel) -> Self {
        Self::from(&row)
    }
}

// ============================================================================
// Content Job Mappers
// ============================================================================

impl From<&AiContentJobModel> for AiContentJobResponse {
    fn from(row: &AiContentJobModel) -> Self {
        let status = JobStatus::from_column(row.status.as_deref());
        let priority = JobPriority::from_column(row.priority.as_deref());
        let human_reviewed = row.human_reviewed.unwrap_or(false);

        Self {
            id: row.id,
            content_id: row.content_id,
            user_id: row.user_id,
            job_type: row.job_type.clone(),
            parameters: row
                .parameters
                .as_ref()
                .map_or_else(|| serde_json::json!({}), |params| params.0.clone()),
            priority,
            status,
            result: json_opt(row.result.as_ref()),
            confidence_score: row.confidence_score.clone(),
            human_reviewed,
            human_approved: row.human_approved,
            review_notes: row.review_notes.clone(),
            ai_model: row
                .ai_model
                .clone()
                .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string()),
            tokens_used: row.tokens_used,
            processing_cost: row.processing_cost.clone(),
            error_message: row.error_message.clone(),
            retry_count: row.retry_count.unwrap_or(0),
            is_pending: status == JobStatus::Pending,
            is_processing: status == JobStatus::Processing,
            is_completed: status == JobStatus::Completed,
            is_failed: status == JobStatus::Failed,
            is_cancelled: status == JobStatus::Cancelled,
            has_error: row.error_message.is_some(),
            needs_human_review: !human_reviewed,
            is_high_priority: priority.is_high(),
            processing_cost_text: row
                .processing_cost
                .as_deref()
                .filter(|cost| !cost.is_empty())
                .map(|cost| format!("${cost}")),
            confidence_text: format_score(row.confidence_score.as_deref()),
            created_at: to_iso_string(&row.created_at),
            started_at: row.started_at.as_ref().map(to_iso_string),
            completed_at: row.completed_at.as_ref().map(to_iso_string),
            updated_at: to_iso_string(&row.updated_at),
        }
    }
}

impl From<AiContentJobModel> for AiContentJobResponse {
    fn from(row: AiContentJobModel) -> Self {
        Self::from(&row)
    }
}

// ============================================================================
// Cross Reference Suggestion Mappers
// ============================================================================

impl From<&ContentItemModel> for ContentReferenceSummary {
    fn from(item: &ContentItemModel) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            slug: item.slug.clone(),
        }
    }
}

/// Helper struct for creating AiCrossReferenceSuggestionResponse with the linked content
#[derive(Debug, Clone, Copy)]
pub struct CrossReferenceWithContent<'a> {
    pub suggestion: &'a AiCrossReferenceSuggestionModel,
    pub source_content: Option<&'a ContentItemModel>,
    pub target_content: Option<&'a ContentItemModel>,
}

impl<'a> CrossReferenceWithContent<'a> {
    pub fn new(suggestion: &'a AiCrossReferenceSuggestionModel) -> Self {
        Self {
            suggestion,
            source_content: None,
            target_content: None,
        }
    }

    pub fn with_content(
        mut self,
        source: Option<&'a ContentItemModel>,
        target: Option<&'a ContentItemModel>,
    ) -> Self {
        self.source_content = source;
        self.target_content = target;
        self
    }
}

fn is_high_score(score: &str) -> bool {
    parse_decimal(score).is_some_and(|value| value > HIGH_SCORE_THRESHOLD)
}

impl From<CrossReferenceWithContent<'_>> for AiCrossReferenceSuggestionResponse {
    fn from(details: CrossReferenceWithContent<'_>) -> Self {
        let row = details.suggestion;
        let status = SuggestionStatus::from_column(row.status.as_deref());
        let human_reviewed = row.human_reviewed.unwrap_or(false);

        Self {
            id: row.id,
            source_content_id: row.source_content_id,
            target_content_id: row.target_content_id,
            suggested_reference_type: row.suggested_reference_type.clone(),
            confidence_score: row.confidence_score.clone(),
            relevance_score: row.relevance_score.clone(),
            reasoning: row.reasoning.clone(),
            key_connections: json_opt(row.key_connections.as_ref()),
            human_reviewed,
            human_approved: row.human_approved,
            review_notes: row.review_notes.clone(),
            status,
            ai_model: row
                .ai_model
                .clone()
                .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string()),
            model_version: row.model_version.clone(),
            is_pending: status == SuggestionStatus::Pending,
            is_approved: status == SuggestionStatus::Approved,
            is_rejected: status == SuggestionStatus::Rejected,
            is_implemented: status == SuggestionStatus::Implemented,
            needs_review: !human_reviewed,
            has_high_confidence: is_high_score(&row.confidence_score),
            has_high_relevance: is_high_score(&row.relevance_score),
            confidence_text: format_score(Some(row.confidence_score.as_str())).unwrap_or_default(),
            relevance_text: format_score(Some(row.relevance_score.as_str())).unwrap_or_default(),
            source_content: details.source_content.map(ContentReferenceSummary::from),
            target_content: details.target_content.map(ContentReferenceSummary::from),
            created_at: to_iso_string(&row.created_at),
            reviewed_at: row.reviewed_at.as_ref().map(to_iso_string),
            implemented_at: row.implemented_at.as_ref().map(to_iso_string),
        }
    }
}

impl From<&AiCrossReferenceSuggestionModel> for AiCrossReferenceSuggestionResponse {
    fn from(row: &AiCrossReferenceSuggestionModel) -> Self {
        Self::from(CrossReferenceWithContent::new(row))
    }
}

// ============================================================================
// Theological Concept Mappers
// ============================================================================

impl From<&TheologicalConceptModel> for TheologicalConceptResponse {
    fn from(row: &TheologicalConceptModel) -> Self {
        let apest_relevance = row
            .apest_relevance
            .as_ref()
            .map_or(ApestScores::NEUTRAL_RELEVANCE, |scores| scores.0);
        let related_concepts = json_or_default(row.related_concepts.as_ref());
        let synonyms: Vec<String> = json_or_default(row.synonyms.as_ref());
        let biblical_references: Vec<String> = json_or_default(row.biblical_references.as_ref());
        let content_references = row.content_references.unwrap_or(0);

        Self {
            id: row.id,
            name: row.name.clone(),
            slug: row.slug.clone(),
            definition: row.definition.clone(),
            concept_type: row.concept_type.clone(),
            theological_tradition: json_or_default(row.theological_tradition.as_ref()),
            has_definition: row.definition.is_some(),
            has_related_concepts: !related_concepts.is_empty(),
            has_synonyms: !synonyms.is_empty(),
            has_biblical_references: !biblical_references.is_empty(),
            is_frequently_used: content_references > FREQUENT_USE_THRESHOLD,
            primary_apest_dimension: primary_apest_dimension(&apest_relevance),
            apest_relevance_text: format_apest_relevance(&apest_relevance),
            biblical_references,
            historical_period: row.historical_period.clone(),
            related_concepts,
            synonyms,
            apest_relevance,
            content_references,
            search_count: row.search_count.unwrap_or(0),
            created_at: to_iso_string(&row.created_at),
            updated_at: to_iso_string(&row.updated_at),
        }
    }
}

impl From<TheologicalConceptModel> for TheologicalConceptResponse {
    fn from(row: TheologicalConceptModel) -> Self {
        Self::from(&row)
    }
}

// ============================================================================
// List Mappers
// ============================================================================

pub fn to_paginated_ai_conversation_list(
    rows: &[AiConversationModel],
    params: PaginationParams,
) -> PaginatedListResponse<AiConversationResponse> {
    PaginatedListResponse::from_rows(rows, params)
}

pub fn to_paginated_ai_message_list(
    rows: &[AiMessageModel],
    params: PaginationParams,
) -> PaginatedListResponse<AiMessageResponse> {
    PaginatedListResponse::from_rows(rows, params)
}

pub fn to_paginated_ai_content_job_list(
    rows: &[AiContentJobModel],
    params: PaginationParams,
) -> PaginatedListResponse<AiContentJobResponse> {
    PaginatedListResponse::from_rows(rows, params)
}

pub fn to_paginated_cross_reference_suggestion_list(
    rows: &[CrossReferenceWithContent<'_>],
    params: PaginationParams,
) -> PaginatedListResponse<AiCrossReferenceSuggestionResponse> {
    PaginatedListResponse::from_rows(rows.iter().copied(), params)
}

pub fn to_paginated_theological_concept_list(
    rows: &[TheologicalConceptModel],
    params: PaginationParams,
) -> PaginatedListResponse<TheologicalConceptResponse> {
    PaginatedListResponse::from_rows(rows, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use sqlx::types::Json;
    use uuid::Uuid;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn create_test_conversation() -> AiConversationModel {
        AiConversationModel {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            conversation_type: "theological_discussion".to_string(),
            title: None,
            primary_topic: None,
            theological_context: None,
            user_apest_profile: None,
            ministry_context: None,
            cultural_context: None,
            total_messages: None,
            conversation_duration_minutes: None,
            user_satisfaction_rating: None,
            theological_accuracy_verified: None,
            helpfulness_rating: None,
            ai_model: None,
            model_version: None,
            total_tokens_used: None,
            referenced_content: None,
            generated_insights: None,
            status: None,
            created_at: timestamp(),
            updated_at: timestamp(),
            completed_at: None,
        }
    }

    fn create_test_message(role: &str) -> AiMessageModel {
        AiMessageModel {
            id: Uuid::new_v4(),
            conversation_id: Uuid::new_v4(),
            role: role.to_string(),
            content: "What does sentness look like locally?".to_string(),
            message_index: 0,
            token_count: Some(42),
            cited_content: None,
            confidence: None,
            factual_accuracy: None,
            theological_soundness: None,
            user_rating: None,
            user_feedback: None,
            flagged_for_review: None,
            processing_time: None,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    fn create_test_job() -> AiContentJobModel {
        AiContentJobModel {
            id: Uuid::new_v4(),
            content_id: None,
            user_id: None,
            job_type: "summarize".to_string(),
            parameters: None,
            priority: None,
            status: None,
            result: None,
            confidence_score: None,
            human_reviewed: None,
            human_approved: None,
            review_notes: None,
            ai_model: None,
            tokens_used: None,
            processing_cost: None,
            error_message: None,
            retry_count: None,
            created_at: timestamp(),
            started_at: None,
            completed_at: None,
            updated_at: timestamp(),
        }
    }

    fn create_test_suggestion(confidence: &str, relevance: &str) -> AiCrossReferenceSuggestionModel {
        AiCrossReferenceSuggestionModel {
            id: Uuid::new_v4(),
            source_content_id: Uuid::new_v4(),
            target_content_id: Uuid::new_v4(),
            suggested_reference_type: "builds_on".to_string(),
            confidence_score: confidence.to_string(),
            relevance_score: relevance.to_string(),
            reasoning: None,
            key_connections: None,
            human_reviewed: None,
            human_approved: None,
            review_notes: None,
            status: None,
            ai_model: None,
            model_version: None,
            created_at: timestamp(),
            reviewed_at: None,
            implemented_at: None,
        }
    }

    fn create_test_concept() -> TheologicalConceptModel {
        TheologicalConceptModel {
            id: Uuid::new_v4(),
            name: "Missio Dei".to_string(),
            slug: "missio-dei".to_string(),
            definition: None,
            concept_type: "doctrine".to_string(),
            theological_tradition: None,
            biblical_references: None,
            historical_period: None,
            related_concepts: None,
            synonyms: None,
            apest_relevance: None,
            content_references: None,
            search_count: None,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    #[test]
    fn test_conversation_defaults() {
        let row = create_test_conversation();
        let response = AiConversationResponse::from(&row);

        assert_eq!(response.total_messages, 0);
        assert_eq!(response.ai_model, "gpt-4");
        assert_eq!(response.status, ConversationStatus::Active);
        assert!(response.is_active);
        assert!(!response.is_completed);
        assert!(!response.theological_accuracy_verified);
        assert!(response.referenced_content.is_empty());
        assert_eq!(response.token_usage_text, "0 tokens");
        assert!(response.conversation_duration_text.is_none());
        assert!(response.completed_at.is_none());
        assert_eq!(response.created_at, "2024-03-01T09:00:00.000Z");
    }

    #[test]
    fn test_conversation_computed_fields() {
        let row = AiConversationModel {
            status: Some("completed".to_string()),
            conversation_duration_minutes: Some(90),
            total_tokens_used: Some(1500),
            user_satisfaction_rating: Some(4),
            completed_at: Some(timestamp()),
            ..create_test_conversation()
        };
        let response = AiConversationResponse::from(&row);

        assert!(response.is_completed);
        assert!(!response.is_active);
        assert!(response.has_user_rating);
        assert_eq!(response.conversation_duration_text.as_deref(), Some("1h 30m"));
        assert_eq!(response.token_usage_text, "1.5K tokens");
        assert_eq!(response.completed_at.as_deref(), Some("2024-03-01T09:00:00.000Z"));
    }

    #[test]
    fn test_message_role_flags() {
        let response = AiMessageResponse::from(&create_test_message("assistant"));
        assert!(response.is_assistant_message);
        assert!(!response.is_user_message);
        assert!(!response.is_system_message);

        let response = AiMessageResponse::from(&create_test_message("system"));
        assert!(response.is_system_message);
    }

    #[test]
    fn test_message_feedback_and_confidence() {
        let row = AiMessageModel {
            confidence: Some("0.92".to_string()),
            processing_time: Some(1250),
            user_feedback: Some("Helpful".to_string()),
            flagged_for_review: Some(true),
            ..create_test_message("assistant")
        };
        let response = AiMessageResponse::from(&row);

        assert_eq!(response.confidence_text.as_deref(), Some("92%"));
        assert_eq!(response.processing_time_text.as_deref(), Some("1s"));
        assert!(response.has_user_feedback);
        assert!(!response.has_user_rating);
        assert!(response.is_flagged);
        assert!(response.flagged_for_review);
    }

    #[test]
    fn test_job_null_status_is_pending() {
        let response = AiContentJobResponse::from(&create_test_job());

        assert_eq!(response.status, JobStatus::Pending);
        assert!(response.is_pending);
        assert!(!response.is_processing);
        assert_eq!(response.priority, JobPriority::Normal);
        assert!(!response.is_high_priority);
        assert!(response.needs_human_review);
        assert_eq!(response.parameters, serde_json::json!({}));
        assert!(response.processing_cost_text.is_none());
        assert_eq!(response.retry_count, 0);
    }

    #[test]
    fn test_job_computed_fields() {
        let row = AiContentJobModel {
            status: Some("failed".to_string()),
            priority: Some("urgent".to_string()),
            human_reviewed: Some(true),
            processing_cost: Some("0.0125".to_string()),
            confidence_score: Some("0.75".to_string()),
            error_message: Some("rate limited".to_string()),
            parameters: Some(Json(serde_json::json!({ "maxLength": 200 }))),
            ..create_test_job()
        };
        let response = AiContentJobResponse::from(&row);

        assert!(response.is_failed);
        assert!(!response.is_pending);
        assert!(response.has_error);
        assert!(response.is_high_priority);
        assert!(!response.needs_human_review);
        assert_eq!(response.processing_cost_text.as_deref(), Some("$0.0125"));
        assert_eq!(response.confidence_text.as_deref(), Some("75%"));
        assert_eq!(response.parameters["maxLength"], 200);
    }

    #[test]
    fn test_job_unknown_status_falls_back_to_pending() {
        let row = AiContentJobModel {
            status: Some("paused".to_string()),
            ..create_test_job()
        };
        assert!(AiContentJobResponse::from(&row).is_pending);
    }

    #[test]
    fn test_suggestion_scores() {
        let row = create_test_suggestion("0.85", "0.80");
        let response = AiCrossReferenceSuggestionResponse::from(&row);

        assert!(response.has_high_confidence);
        assert!(!response.has_high_relevance);
        assert_eq!(response.confidence_text, "85%");
        assert_eq!(response.relevance_text, "80%");
        assert!(response.is_pending);
        assert!(response.needs_review);
        assert!(response.source_content.is_none());
    }

    #[test]
    fn test_suggestion_unparsable_scores() {
        let row = create_test_suggestion("", "n/a");
        let response = AiCrossReferenceSuggestionResponse::from(&row);

        assert!(!response.has_high_confidence);
        assert!(!response.has_high_relevance);
        assert_eq!(response.confidence_text, "");
        assert_eq!(response.relevance_text, "");
    }

    #[test]
    fn test_concept_defaults() {
        let response = TheologicalConceptResponse::from(&create_test_concept());

        assert_eq!(response.apest_relevance, ApestScores::NEUTRAL_RELEVANCE);
        assert_eq!(response.apest_relevance_text, "Primary: Apostolic");
        assert!(!response.has_definition);
        assert!(!response.has_synonyms);
        assert!(!response.is_frequently_used);
        assert_eq!(response.search_count, 0);
    }

    #[test]
    fn test_concept_usage_and_relevance() {
        let row = TheologicalConceptModel {
            definition: Some("The mission of God".to_string()),
            synonyms: Some(Json(vec!["God's mission".to_string()])),
            content_references: Some(11),
            apest_relevance: Some(Json(ApestScores {
                apostolic: 8,
                prophetic: 6,
                evangelistic: 9,
                shepherding: 4,
                teaching: 7,
            })),
            ..create_test_concept()
        };
        let response = TheologicalConceptResponse::from(&row);

        assert!(response.has_definition);
        assert!(response.has_synonyms);
        assert!(response.is_frequently_used);
        assert_eq!(response.apest_relevance_text, "Primary: Evangelistic");
    }

    #[test]
    fn test_concept_ten_references_is_not_frequent() {
        let row = TheologicalConceptModel {
            content_references: Some(10),
            ..create_test_concept()
        };
        assert!(!TheologicalConceptResponse::from(&row).is_frequently_used);
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let row = create_test_job();
        assert_eq!(AiContentJobResponse::from(&row), AiContentJobResponse::from(&row));
    }

    #[test]
    fn test_paginated_conversations() {
        let rows = vec![create_test_conversation(), create_test_conversation()];
        let list = to_paginated_ai_conversation_list(&rows, PaginationParams::new(2, 10, 25));

        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].id, rows[0].id);
        assert_eq!(list.items[1].id, rows[1].id);
        assert_eq!(list.pagination.total_pages, 3);
        assert!(list.pagination.has_next);
        assert!(list.pagination.has_prev);
        assert!(list.success);
    }
}
