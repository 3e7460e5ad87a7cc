//! Organization and membership response DTOs
//!
//! Unlike the other families, optional organization columns are omitted
//! from the JSON when empty instead of being sent as `null`.

use ministry_core::{LicenseType, MembershipRole, MembershipStatus, OrganizationStatus};
use serde::Serialize;
use uuid::Uuid;

/// Postal address with only the recorded parts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Organization columns with defaults applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationEntity {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub organization_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressResponse>,
    pub license_type: LicenseType,
    pub max_users: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_owner_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_email: Option<String>,
    pub status: OrganizationStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// Account owner shown on an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationOwnerSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Member listed on an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMemberSummary {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: MembershipRole,
    pub status: MembershipStatus,
    pub joined_at: String,
    pub user: OrganizationOwnerSummary,
}

/// Organization with computed display fields and optional related data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationResponse {
    #[serde(flatten)]
    pub organization: OrganizationEntity,

    // Computed
    pub is_active: bool,
    pub is_trial: bool,
    pub has_custom_logo: bool,
    pub has_website: bool,
    pub member_count: i64,
    pub display_name: String,
    pub status_display: String,
    pub license_type_display: String,

    // Related
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OrganizationOwnerSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<OrganizationMemberSummary>>,
}

/// Membership columns with defaults applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMembershipEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub organization_id: Uuid,
    pub role: MembershipRole,
    pub status: MembershipStatus,
    pub permissions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invited_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invited_by: Option<Uuid>,
    pub created_at: String,
    pub updated_at: String,
}

/// Member user shown on a membership
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipUserSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Organization shown on a membership
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipOrganizationSummary {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// Inviting user shown on a membership
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InviterSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

/// Membership with computed display fields and its user and organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMembershipResponse {
    #[serde(flatten)]
    pub membership: OrganizationMembershipEntity,

    // Computed
    pub is_active: bool,
    pub is_pending: bool,
    pub can_manage: bool,
    pub role_display: String,
    pub status_display: String,

    // Related
    pub user: MembershipUserSummary,
    pub organization: MembershipOrganizationSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invited_by_user: Option<InviterSummary>,
}
