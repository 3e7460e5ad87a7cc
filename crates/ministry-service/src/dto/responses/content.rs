//! Content catalogue response DTOs

use ministry_core::{ApestScores, ContentStatus, Visibility};
use ministry_db::models::{BrandColors, EmailNotifications, PrivacySettings};
use serde::Serialize;
use uuid::Uuid;

/// Author fields embedded in content and series responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub avatar_url: String,
}

/// Category fields embedded in content and series responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

/// Published or draft content item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItemResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author_id: Uuid,
    pub co_authors: Vec<Uuid>,
    pub content_type: String,
    pub format: String,
    pub word_count: i32,
    pub estimated_reading_time: i32,
    pub view_count: i32,
    pub like_count: i32,
    pub share_count: i32,
    pub comment_count: i32,
    pub bookmark_count: i32,
    /// Empty when uncategorized
    pub primary_category_id: String,
    pub secondary_categories: Vec<Uuid>,
    pub tags: Vec<String>,
    pub theological_themes: Vec<String>,
    /// Empty when not part of a series
    pub series_id: String,
    pub series_order: i32,
    pub visibility: Visibility,
    pub status: ContentStatus,
    pub network_amplification_score: String,
    pub cross_reference_count: i32,
    pub ai_enhanced: bool,
    pub ai_summary: String,
    pub ai_key_points: Vec<String>,
    pub featured_image_url: String,
    pub video_url: String,
    pub audio_url: String,
    pub attachments: Vec<String>,
    pub meta_title: String,
    pub meta_description: String,
    pub canonical_url: String,
    pub original_source: String,
    pub license_type: String,
    pub attribution_required: bool,

    // Computed
    pub is_published: bool,
    pub is_draft: bool,
    pub is_scheduled: bool,
    pub has_featured_image: bool,
    pub has_video: bool,
    pub has_audio: bool,
    pub reading_time_text: String,
    pub view_count_text: String,
    pub is_ai_enhanced: bool,

    // Related
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategorySummary>,

    pub created_at: String,
    pub updated_at: String,
    pub published_at: Option<String>,
    pub scheduled_at: Option<String>,
}

/// Taxonomy node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Empty for top-level categories
    pub parent_id: String,
    pub order_index: i32,
    pub theological_discipline: Option<String>,
    pub movement_relevance_score: i32,
    pub apest_relevance: ApestScores,
    pub meta_description: String,
    pub keywords: Vec<String>,
    pub is_active: bool,

    // Computed
    pub has_parent: bool,
    pub has_children: bool,

    pub created_at: String,
    pub updated_at: String,
}

/// Ordered learning path of content items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSeriesResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub excerpt: String,
    pub author_id: Uuid,
    pub collaborators: Vec<Uuid>,
    pub series_type: String,
    pub difficulty: String,
    pub total_items: i32,
    pub estimated_duration: i32,
    pub primary_category_id: String,
    pub tags: Vec<String>,
    pub visibility: Visibility,
    pub status: ContentStatus,
    pub featured_image_url: String,
    pub meta_description: String,

    // Computed
    pub is_published: bool,
    pub is_draft: bool,
    pub has_featured_image: bool,

    // Related
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategorySummary>,

    pub created_at: String,
    pub updated_at: String,
    pub published_at: Option<String>,
}

/// Public profile of a content author
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub avatar_url: String,
    pub bio: String,
    pub country_code: String,
    pub timezone: String,
    pub language_primary: String,
    pub ministry_role: String,
    pub denomination: String,
    pub organization_name: String,
    pub years_in_ministry: i32,
    pub cultural_context: String,
    pub theological_focus: Vec<String>,
    pub brand_colors: BrandColors,
    pub email_notifications: EmailNotifications,
    pub privacy_settings: PrivacySettings,
    pub onboarding_completed: bool,
    pub onboarding_step: i32,
    pub subscription_tier: String,
    pub account_status: String,

    pub created_at: String,
    pub updated_at: String,
    pub last_active_at: String,
}
