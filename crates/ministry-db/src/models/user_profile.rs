//! User profile database model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Leader platform brand palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            primary: "#2563eb".to_string(),
            secondary: "#64748b".to_string(),
            accent: "#059669".to_string(),
        }
    }
}

/// Email notification preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotifications {
    pub daily_digest: bool,
    pub collaboration_requests: bool,
    pub revenue_reports: bool,
    pub community_updates: bool,
}

impl Default for EmailNotifications {
    fn default() -> Self {
        Self {
            daily_digest: true,
            collaboration_requests: true,
            revenue_reports: true,
            community_updates: true,
        }
    }
}

/// Profile visibility preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub public_profile: bool,
    pub show_assessment_results: bool,
    pub allow_networking: bool,
    pub share_analytics: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            public_profile: true,
            show_assessment_results: false,
            allow_networking: true,
            share_analytics: false,
        }
    }
}

/// Database model for user_profiles table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserProfileModel {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub ministry_role: String,
    pub denomination: Option<String>,
    pub organization_name: Option<String>,
    pub years_in_ministry: Option<i32>,
    pub country_code: Option<String>,
    pub timezone: Option<String>,
    pub language_primary: Option<String>,
    pub cultural_context: Option<String>,
    pub subscription_tier: Option<String>,
    pub theological_focus: Option<Json<Vec<String>>>,
    pub brand_colors: Option<Json<BrandColors>>,
    pub email_notifications: Option<Json<EmailNotifications>>,
    pub privacy_settings: Option<Json<PrivacySettings>>,
    pub onboarding_completed: Option<bool>,
    pub onboarding_step: Option<i32>,
    pub account_status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
}
