//! Content catalogue database models

use chrono::{DateTime, Utc};
use ministry_core::ApestScores;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for content_categories table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ContentCategoryModel {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
    pub order_index: Option<i32>,
    pub theological_discipline: Option<String>,
    /// 1-10 scale
    pub movement_relevance_score: Option<i32>,
    pub apest_relevance: Option<Json<ApestScores>>,
    pub meta_description: Option<String>,
    pub keywords: Option<Json<Vec<String>>>,
    pub is_active: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for content_series table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ContentSeriesModel {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub excerpt: Option<String>,
    pub author_id: Uuid,
    pub collaborators: Option<Json<Vec<Uuid>>>,
    pub series_type: String,
    pub difficulty: Option<String>,
    pub total_items: Option<i32>,
    /// Minutes
    pub estimated_duration: Option<i32>,
    pub primary_category_id: Option<Uuid>,
    pub tags: Option<Json<Vec<String>>>,
    pub visibility: Option<String>,
    pub status: Option<String>,
    pub featured_image_url: Option<String>,
    pub meta_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Database model for content_items table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ContentItemModel {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author_id: Uuid,
    pub co_authors: Option<Json<Vec<Uuid>>>,
    pub content_type: String,
    pub format: Option<String>,
    pub word_count: Option<i32>,
    /// Minutes
    pub estimated_reading_time: Option<i32>,
    pub view_count: Option<i32>,
    pub like_count: Option<i32>,
    pub share_count: Option<i32>,
    pub comment_count: Option<i32>,
    pub bookmark_count: Option<i32>,
    pub primary_category_id: Option<Uuid>,
    pub secondary_categories: Option<Json<Vec<Uuid>>>,
    pub tags: Option<Json<Vec<String>>>,
    pub theological_themes: Option<Json<Vec<String>>>,
    pub series_id: Option<Uuid>,
    pub series_order: Option<i32>,
    pub visibility: Option<String>,
    pub status: Option<String>,
    /// NUMERIC(3,1)
    pub network_amplification_score: Option<String>,
    pub cross_reference_count: Option<i32>,
    pub ai_enhanced: Option<bool>,
    pub ai_summary: Option<String>,
    pub ai_key_points: Option<Json<Vec<String>>>,
    pub featured_image_url: Option<String>,
    pub video_url: Option<String>,
    pub audio_url: Option<String>,
    /// Either bare URL strings or `{url, ...}` objects
    pub attachments: Option<Json<Vec<serde_json::Value>>>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub canonical_url: Option<String>,
    pub original_source: Option<String>,
    pub license_type: Option<String>,
    pub attribution_required: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl ContentItemModel {
    /// Attachment URLs in stored order.
    ///
    /// String entries are taken as-is, object entries by their non-empty
    /// `url` field. Anything else is skipped.
    pub fn attachment_urls(&self) -> Vec<String> {
        let Some(Json(entries)) = &self.attachments else {
            return Vec::new();
        };

        entries
            .iter()
            .filter_map(|entry| match entry {
                serde_json::Value::String(url) => Some(url.clone()),
                serde_json::Value::Object(fields) => fields
                    .get("url")
                    .and_then(serde_json::Value::as_str)
                    .filter(|url| !url.is_empty())
                    .map(str::to_string),
                _ => None,
            })
            .collect()
    }
}
