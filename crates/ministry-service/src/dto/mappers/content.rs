//! Content catalogue row to response mappers

use ministry_core::{ApestScores, ContentStatus, PaginationParams, Visibility};
use ministry_db::models::{
    ContentCategoryModel, ContentItemModel, ContentSeriesModel, UserProfileModel,
};

use super::format::{format_reading_time, format_view_count, to_iso_string};
use super::json_or_default;
use crate::dto::responses::{
    AuthorSummary, CategorySummary, ContentCategoryResponse, ContentItemResponse,
    ContentSeriesResponse, PaginatedListResponse, UserProfileResponse,
};

/// Category relevance score on the 1-10 scale when none is recorded
const DEFAULT_MOVEMENT_RELEVANCE: i32 = 5;

// ============================================================================
// Summary Mappers
// ============================================================================

impl From<&UserProfileModel> for AuthorSummary {
    fn from(profile: &UserProfileModel) -> Self {
        Self {
            id: profile.id,
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            display_name: profile.display_name.clone().unwrap_or_default(),
            avatar_url: profile.avatar_url.clone().unwrap_or_default(),
        }
    }
}

impl From<&ContentCategoryModel> for CategorySummary {
    fn from(category: &ContentCategoryModel) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            slug: category.slug.clone(),
        }
    }
}

// ============================================================================
// Content Item Mappers
// ============================================================================

/// Helper struct for creating ContentItemResponse with author and category
#[derive(Debug, Clone, Copy)]
pub struct ContentItemWithDetails<'a> {
    pub item: &'a ContentItemModel,
    pub author: Option<&'a UserProfileModel>,
    pub category: Option<&'a ContentCategoryModel>,
}

impl<'a> ContentItemWithDetails<'a> {
    pub fn new(item: &'a ContentItemModel) -> Self {
        Self {
            item,
            author: None,
            category: None,
        }
    }

    pub fn with_author(mut self, author: &'a UserProfileModel) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_category(mut self, category: &'a ContentCategoryModel) -> Self {
        self.category = Some(category);
        self
    }
}

impl From<ContentItemWithDetails<'_>> for ContentItemResponse {
    fn from(details: ContentItemWithDetails<'_>) -> Self {
        let row = details.item;
        let status = ContentStatus::from_column(row.status.as_deref());
        let ai_enhanced = row.ai_enhanced.unwrap_or(false);

        Self {
            id: row.id,
            title: row.title.clone(),
            slug: row.slug.clone(),
            excerpt: row.excerpt.clone().unwrap_or_default(),
            content: row.content.clone().unwrap_or_default(),
            author_id: row.author_id,
            co_authors: json_or_default(row.co_authors.as_ref()),
            content_type: row.content_type.clone(),
            format: row.format.clone().unwrap_or_else(|| "text".to_string()),
            word_count: row.word_count.unwrap_or(0),
            estimated_reading_time: row.estimated_reading_time.unwrap_or(0),
            view_count: row.view_count.unwrap_or(0),
            like_count: row.like_count.unwrap_or(0),
            share_count: row.share_count.unwrap_or(0),
            comment_count: row.comment_count.unwrap_or(0),
            bookmark_count: row.bookmark_count.unwrap_or(0),
            primary_category_id: row
                .primary_category_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            secondary_categories: json_or_default(row.secondary_categories.as_ref()),
            tags: json_or_default(row.tags.as_ref()),
            theological_themes: json_or_default(row.theological_themes.as_ref()),
            series_id: row.series_id.map(|id| id.to_string()).unwrap_or_default(),
            series_order: row.series_order.unwrap_or(0),
            visibility: Visibility::from_column(row.visibility.as_deref()),
            status,
            network_amplification_score: row
                .network_amplification_score
                .clone()
                .unwrap_or_default(),
            cross_reference_count: row.cross_reference_count.unwrap_or(0),
            ai_enhanced,
            ai_summary: row.ai_summary.clone().unwrap_or_default(),
            ai_key_points: json_or_default(row.ai_key_points.as_ref()),
            featured_image_url: row.featured_image_url.clone().unwrap_or_default(),
            video_url: row.video_url.clone().unwrap_or_default(),
            audio_url: row.audio_url.clone().unwrap_or_default(),
            attachments: row.attachment_urls(),
            meta_title: row.meta_title.clone().unwrap_or_default(),
            meta_description: row.meta_description.clone().unwrap_or_default(),
            canonical_url: row.canonical_url.clone().unwrap_or_default(),
            original_source: row.original_source.clone().unwrap_or_default(),
            license_type: row
                .license_type
                .clone()
                .unwrap_or_else(|| "all_rights_reserved".to_string()),
            attribution_required: row.attribution_required.unwrap_or(false),
            is_published: status == ContentStatus::Published,
            is_draft: status == ContentStatus::Draft,
            is_scheduled: status == ContentStatus::Scheduled,
            has_featured_image: row.featured_image_url.is_some(),
            has_video: row.video_url.is_some(),
            has_audio: row.audio_url.is_some(),
            reading_time_text: format_reading_time(row.estimated_reading_time),
            view_count_text: format_view_count(row.view_count),
            is_ai_enhanced: ai_enhanced,
            author: details.author.map(AuthorSummary::from),
            category: details.category.map(CategorySummary::from),
            created_at: to_iso_string(&row.created_at),
            updated_at: to_iso_string(&row.updated_at),
            published_at: row.published_at.as_ref().map(to_iso_string),
            scheduled_at: row.scheduled_at.as_ref().map(to_iso_string),
        }
    }
}

impl From<&ContentItemModel> for ContentItemResponse {
    fn from(row: &ContentItemModel) -> Self {
        Self::from(ContentItemWithDetails::new(row))
    }
}

// ============================================================================
// Category Mappers
// ============================================================================

impl From<&ContentCategoryModel> for ContentCategoryResponse {
    fn from(row: &ContentCategoryModel) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
            slug: row.slug.clone(),
            description: row.description.clone().unwrap_or_default(),
            parent_id: row.parent_id.map(|id| id.to_string()).unwrap_or_default(),
            order_index: row.order_index.unwrap_or(0),
            theological_discipline: row.theological_discipline.clone(),
            movement_relevance_score: row
                .movement_relevance_score
                .unwrap_or(DEFAULT_MOVEMENT_RELEVANCE),
            apest_relevance: row
                .apest_relevance
                .as_ref()
                .map_or(ApestScores::NEUTRAL_RELEVANCE, |scores| scores.0),
            meta_description: row.meta_description.clone().unwrap_or_default(),
            keywords: json_or_default(row.keywords.as_ref()),
            is_active: row.is_active.unwrap_or(true),
            has_parent: row.parent_id.is_some(),
            // Child lookup needs the full taxonomy, which a single row does not carry
            has_children: false,
            created_at: to_iso_string(&row.created_at),
            updated_at: to_iso_string(&row.updated_at),
        }
    }
}

impl From<ContentCategoryModel> for ContentCategoryResponse {
    fn from(row: ContentCategoryModel) -> Self {
        Self::from(&row)
    }
}

// ============================================================================
// Series Mappers
// ============================================================================

/// Helper struct for creating ContentSeriesResponse with author and category
#[derive(Debug, Clone, Copy)]
pub struct ContentSeriesWithDetails<'a> {
    pub series: &'a ContentSeriesModel,
    pub author: Option<&'a UserProfileModel>,
    pub category: Option<&'a ContentCategoryModel>,
}

impl<'a> ContentSeriesWithDetails<'a> {
    pub fn new(series: &'a ContentSeriesModel) -> Self {
        Self {
            series,
            author: None,
            category: None,
        }
    }

    pub fn with_author(mut self, author: &'a UserProfileModel) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_category(mut self, category: &'a ContentCategoryModel) -> Self {
        self.category = Some(category);
        self
    }
}

impl From<ContentSeriesWithDetails<'_>> for ContentSeriesResponse {
    fn from(details: ContentSeriesWithDetails<'_>) -> Self {
        let row = details.series;
        let status = ContentStatus::from_column(row.status.as_deref());

        Self {
            id: row.id,
            title: row.title.clone(),
            slug: row.slug.clone(),
            description: row.description.clone().unwrap_or_default(),
            excerpt: row.excerpt.clone().unwrap_or_default(),
            author_id: row.author_id,
            collaborators: json_or_default(row.collaborators.as_ref()),
            series_type: row.series_type.clone(),
            difficulty: row
                .difficulty
                .clone()
                .unwrap_or_else(|| "intermediate".to_string()),
            total_items: row.total_items.unwrap_or(0),
            estimated_duration: row.estimated_duration.unwrap_or(0),
            primary_category_id: row
                .primary_category_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            tags: json_or_default(row.tags.as_ref()),
            visibility: Visibility::from_column(row.visibility.as_deref()),
            status,
            featured_image_url: row.featured_image_url.clone().unwrap_or_default(),
            meta_description: row.meta_description.clone().unwrap_or_default(),
            is_published: status == ContentStatus::Published,
            is_draft: status == ContentStatus::Draft,
            has_featured_image: row.featured_image_url.is_some(),
            author: details.author.map(AuthorSummary::from),
            category: details.category.map(CategorySummary::from),
            created_at: to_iso_string(&row.created_at),
            updated_at: to_iso_string(&row.updated_at),
            published_at: row.published_at.as_ref().map(to_iso_string),
        }
    }
}

impl From<&ContentSeriesModel> for ContentSeriesResponse {
    fn from(row: &ContentSeriesModel) -> Self {
        Self::from(ContentSeriesWithDetails::new(row))
    }
}

// ============================================================================
// User Profile Mappers
// ============================================================================

impl From<&UserProfileModel> for UserProfileResponse {
    fn from(profile: &UserProfileModel) -> Self {
        Self {
            id: profile.id,
            email: profile.email.clone(),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            display_name: profile.display_name.clone().unwrap_or_default(),
            avatar_url: profile.avatar_url.clone().unwrap_or_default(),
            bio: profile.bio.clone().unwrap_or_default(),
            country_code: profile.country_code.clone().unwrap_or_default(),
            timezone: profile.timezone.clone().unwrap_or_default(),
            language_primary: profile
                .language_primary
                .clone()
                .unwrap_or_else(|| "en".to_string()),
            ministry_role: profile.ministry_role.clone(),
            denomination: profile.denomination.clone().unwrap_or_default(),
            organization_name: profile.organization_name.clone().unwrap_or_default(),
            years_in_ministry: profile.years_in_ministry.unwrap_or(0),
            cultural_context: profile
                .cultural_context
                .clone()
                .unwrap_or_else(|| "western".to_string()),
            theological_focus: json_or_default(profile.theological_focus.as_ref()),
            brand_colors: json_or_default(profile.brand_colors.as_ref()),
            email_notifications: json_or_default(profile.email_notifications.as_ref()),
            privacy_settings: json_or_default(profile.privacy_settings.as_ref()),
            onboarding_completed: profile.onboarding_completed.unwrap_or(false),
            onboarding_step: profile.onboarding_step.unwrap_or(1),
            subscription_tier: profile
                .subscription_tier
                .clone()
                .unwrap_or_else(|| "free".to_string()),
            account_status: profile
                .account_status
                .clone()
                .unwrap_or_else(|| "pending_verification".to_string()),
            created_at: to_iso_string(&profile.created_at),
            updated_at: to_iso_string(&profile.updated_at),
            last_active_at: to_iso_string(&profile.last_active_at),
        }
    }
}

impl From<UserProfileModel> for UserProfileResponse {
    fn from(profile: UserProfileModel) -> Self {
        Self::from(&profile)
    }
}

// ============================================================================
// List Mappers
// ============================================================================

pub fn to_paginated_content_item_list(
    rows: &[ContentItemWithDetails<'_>],
    params: PaginationParams,
) -> PaginatedListResponse<ContentItemResponse> {
    PaginatedListResponse::from_rows(rows.iter().copied(), params)
}

pub fn to_paginated_content_category_list(
    rows: &[ContentCategoryModel],
    params: PaginationParams,
) -> PaginatedListResponse<ContentCategoryResponse> {
    PaginatedListResponse::from_rows(rows, params)
}

pub fn to_paginated_content_series_list(
    rows: &[ContentSeriesWithDetails<'_>],
    params: PaginationParams,
) -> PaginatedListResponse<ContentSeriesResponse> {
    PaginatedListResponse::from_rows(rows.iter().copied(), params)
}
