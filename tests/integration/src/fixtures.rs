//! Row fixtures
//!
//! Every builder returns a row with only its non-null columns filled, so
//! tests exercise the fallback path unless they override a field.

use chrono::{DateTime, TimeZone, Utc};
use ministry_db::models::{
    AiContentJobModel, AiConversationModel, AiCrossReferenceSuggestionModel, AiMessageModel,
    AssessmentModel, AssessmentQuestionModel, AssessmentResponseModel, ContentCategoryModel,
    ContentItemModel, ContentSeriesModel, OrganizationMembershipModel, OrganizationModel,
    TheologicalConceptModel, UserAssessmentModel, UserProfileModel,
};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Fixed instant used for every timestamp column
pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0)
        .single()
        .unwrap_or_default()
}

/// ISO form of [`fixed_timestamp`]
pub const FIXED_TIMESTAMP_ISO: &str = "2024-01-15T10:30:00.000Z";

// ============================================================================
// AI
// ============================================================================

pub fn conversation_row() -> AiConversationModel {
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
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
        completed_at: None,
    }
}

pub fn message_row(conversation_id: Uuid, role: &str) -> AiMessageModel {
    AiMessageModel {
        id: Uuid::new_v4(),
        conversation_id,
        role: role.to_string(),
        content: "How do I disciple new believers?".to_string(),
        message_index: 0,
        token_count: None,
        cited_content: None,
        confidence: None,
        factual_accuracy: None,
        theological_soundness: None,
        user_rating: None,
        user_feedback: None,
        flagged_for_review: None,
        processing_time: None,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
    }
}

pub fn content_job_row() -> AiContentJobModel {
    AiContentJobModel {
        id: Uuid::new_v4(),
        content_id: None,
        user_id: None,
        job_type: "generate_summary".to_string(),
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
        created_at: fixed_timestamp(),
        started_at: None,
        completed_at: None,
        updated_at: fixed_timestamp(),
    }
}

pub fn cross_reference_row(source: Uuid, target: Uuid) -> AiCrossReferenceSuggestionModel {
    AiCrossReferenceSuggestionModel {
        id: Uuid::new_v4(),
        source_content_id: source,
        target_content_id: target,
        suggested_reference_type: "related".to_string(),
        confidence_score: "0.90".to_string(),
        relevance_score: "0.75".to_string(),
        reasoning: None,
        key_connections: None,
        human_reviewed: None,
        human_approved: None,
        review_notes: None,
        status: None,
        ai_model: None,
        model_version: None,
        created_at: fixed_timestamp(),
        reviewed_at: None,
        implemented_at: None,
    }
}

pub fn concept_row() -> TheologicalConceptModel {
    let suffix = unique_suffix();
    TheologicalConceptModel {
        id: Uuid::new_v4(),
        name: format!("Concept {suffix}"),
        slug: format!("concept-{suffix}"),
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
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
    }
}

// ============================================================================
// Assessments
// ============================================================================

pub fn assessment_row() -> AssessmentModel {
    let suffix = unique_suffix();
    AssessmentModel {
        id: Uuid::new_v4(),
        name: format!("APEST Assessment {suffix}"),
        slug: format!("apest-assessment-{suffix}"),
        description: None,
        assessment_type: "apest".to_string(),
        questions_count: 25,
        estimated_duration: None,
        passing_score: None,
        version: None,
        language: None,
        cultural_adaptation: None,
        research_backed: None,
        validity_score: None,
        reliability_score: None,
        instructions: None,
        scoring_method: None,
        status: None,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
        published_at: None,
    }
}

pub fn question_row(assessment_id: Uuid, order_index: i32) -> AssessmentQuestionModel {
    AssessmentQuestionModel {
        id: Uuid::new_v4(),
        assessment_id,
        question_text: format!("Question {order_index}"),
        question_type: "likert".to_string(),
        order_index,
        is_required: None,
        category: None,
        weight: None,
        reverse_scored: None,
        apest_dimension: None,
        answer_options: None,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
    }
}

pub fn user_assessment_row(assessment_id: Uuid) -> UserAssessmentModel {
    UserAssessmentModel {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        assessment_id,
        started_at: fixed_timestamp(),
        completed_at: None,
        completion_percentage: None,
        raw_scores: None,
        total_score: None,
        max_possible_score: None,
        apostolic_score: None,
        prophetic_score: None,
        evangelistic_score: None,
        shepherding_score: None,
        teaching_score: None,
        normalized_scores: None,
        primary_gift: None,
        secondary_gift: None,
        response_consistency: None,
        completion_time: None,
        confidence_level: None,
        cultural_adjustment_applied: None,
        cultural_adjustment_factor: None,
        ai_insights: None,
        personalized_recommendations: None,
        suggested_peers: None,
        complementary_gifts: None,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
    }
}

pub fn assessment_response_row(user_assessment_id: Uuid) -> AssessmentResponseModel {
    AssessmentResponseModel {
        id: Uuid::new_v4(),
        user_assessment_id,
        question_id: Uuid::new_v4(),
        response_value: None,
        response_text: None,
        response_time: None,
        confidence: None,
        skipped: None,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
    }
}

// ============================================================================
// Content
// ============================================================================

pub fn profile_row() -> UserProfileModel {
    let suffix = unique_suffix();
    UserProfileModel {
        id: Uuid::new_v4(),
        email: format!("leader{suffix}@example.com"),
        first_name: "Dana".to_string(),
        last_name: format!("Leader{suffix}"),
        display_name: None,
        bio: None,
        avatar_url: None,
        ministry_role: "senior_pastor".to_string(),
        denomination: None,
        organization_name: None,
        years_in_ministry: None,
        country_code: None,
        timezone: None,
        language_primary: None,
        cultural_context: None,
        subscription_tier: None,
        theological_focus: None,
        brand_colors: None,
        email_notifications: None,
        privacy_settings: None,
        onboarding_completed: None,
        onboarding_step: None,
        account_status: None,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
        last_active_at: fixed_timestamp(),
    }
}

pub fn category_row() -> ContentCategoryModel {
    let suffix = unique_suffix();
    ContentCategoryModel {
        id: Uuid::new_v4(),
        name: format!("Category {suffix}"),
        slug: format!("category-{suffix}"),
        description: None,
        parent_id: None,
        order_index: None,
        theological_discipline: None,
        movement_relevance_score: None,
        apest_relevance: None,
        meta_description: None,
        keywords: None,
        is_active: None,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
    }
}

pub fn content_item_row(author_id: Uuid) -> ContentItemModel {
    let suffix = unique_suffix();
    ContentItemModel {
        id: Uuid::new_v4(),
        title: format!("Article {suffix}"),
        slug: format!("article-{suffix}"),
        excerpt: None,
        content: None,
        author_id,
        co_authors: None,
        content_type: "article".to_string(),
        format: None,
        word_count: None,
        estimated_reading_time: None,
        view_count: None,
        like_count: None,
        share_count: None,
        comment_count: None,
        bookmark_count: None,
        primary_category_id: None,
        secondary_categories: None,
        tags: None,
        theological_themes: None,
        series_id: None,
        series_order: None,
        visibility: None,
        status: None,
        network_amplification_score: None,
        cross_reference_count: None,
        ai_enhanced: None,
        ai_summary: None,
        ai_key_points: None,
        featured_image_url: None,
        video_url: None,
        audio_url: None,
        attachments: None,
        meta_title: None,
        meta_description: None,
        canonical_url: None,
        original_source: None,
        license_type: None,
        attribution_required: None,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
        published_at: None,
        scheduled_at: None,
    }
}

pub fn series_row(author_id: Uuid) -> ContentSeriesModel {
    let suffix = unique_suffix();
    ContentSeriesModel {
        id: Uuid::new_v4(),
        title: format!("Series {suffix}"),
        slug: format!("series-{suffix}"),
        description: None,
        excerpt: None,
        author_id,
        collaborators: None,
        series_type: "course".to_string(),
        difficulty: None,
        total_items: None,
        estimated_duration: None,
        primary_category_id: None,
        tags: None,
        visibility: None,
        status: None,
        featured_image_url: None,
        meta_description: None,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
        published_at: None,
    }
}

// ============================================================================
// Organizations
// ============================================================================

pub fn organization_row() -> OrganizationModel {
    let suffix = unique_suffix();
    OrganizationModel {
        id: Uuid::new_v4(),
        name: format!("Church {suffix}"),
        slug: format!("church-{suffix}"),
        description: None,
        website: None,
        logo_url: None,
        organization_type: "church".to_string(),
        size_category: None,
        contact_email: None,
        contact_phone: None,
        address: None,
        license_type: None,
        max_users: None,
        billing_email: None,
        account_owner_id: None,
        stripe_customer_id: None,
        stripe_product_id: None,
        status: None,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
    }
}

pub fn membership_row(user_id: Uuid, organization_id: Uuid) -> OrganizationMembershipModel {
    OrganizationMembershipModel {
        id: Uuid::new_v4(),
        user_id,
        organization_id,
        role: "member".to_string(),
        permissions: None,
        status: None,
        joined_at: None,
        invited_at: None,
        invited_by: None,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
    }
}
