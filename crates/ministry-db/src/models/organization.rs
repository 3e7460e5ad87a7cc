//! Organization and membership database models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Postal address stored as JSONB. Sub-fields may be missing in older rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressModel {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

/// Database model for organizations table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct OrganizationModel {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub organization_type: String,
    pub size_category: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<Json<AddressModel>>,
    pub license_type: Option<String>,
    pub max_users: Option<i32>,
    pub billing_email: Option<String>,
    pub account_owner_id: Option<Uuid>,
    pub stripe_customer_id: Option<String>,
    pub stripe_product_id: Option<String>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for organization_memberships table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct OrganizationMembershipModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub organization_id: Uuid,
    pub role: String,
    pub permissions: Option<Json<Vec<String>>>,
    pub status: Option<String>,
    pub joined_at: Option<DateTime<Utc>>,
    pub invited_at: Option<DateTime<Utc>>,
    pub invited_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrganizationMembershipModel {
    /// Check if the membership came from an invitation
    #[inline]
    pub fn is_invited(&self) -> bool {
        self.invited_by.is_some()
    }
}
