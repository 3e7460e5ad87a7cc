//! Organization and membership changesets

use chrono::{DateTime, Utc};
use ministry_core::{LicenseType, MembershipRole, MembershipStatus, OrganizationStatus};
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::AddressModel;

/// Values for inserting an organizations row
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationInsert {
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
    pub license_type: LicenseType,
    pub max_users: i32,
    pub account_owner_id: Option<Uuid>,
    pub billing_email: Option<String>,
    pub status: OrganizationStatus,
}

/// Values for updating an organizations row. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganizationUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub organization_type: Option<String>,
    pub size_category: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<Json<AddressModel>>,
    pub license_type: Option<LicenseType>,
    pub max_users: Option<i32>,
    pub account_owner_id: Option<Uuid>,
    pub billing_email: Option<String>,
    pub status: Option<OrganizationStatus>,
}

impl OrganizationUpdate {
    /// Names of the columns this changeset writes
    pub fn changed_columns(&self) -> Vec<&'static str> {
        [
            ("name", self.name.is_some()),
            ("description", self.description.is_some()),
            ("website", self.website.is_some()),
            ("logo_url", self.logo_url.is_some()),
            ("organization_type", self.organization_type.is_some()),
            ("size_category", self.size_category.is_some()),
            ("contact_email", self.contact_email.is_some()),
            ("contact_phone", self.contact_phone.is_some()),
            ("address", self.address.is_some()),
            ("license_type", self.license_type.is_some()),
            ("max_users", self.max_users.is_some()),
            ("account_owner_id", self.account_owner_id.is_some()),
            ("billing_email", self.billing_email.is_some()),
            ("status", self.status.is_some()),
        ]
        .into_iter()
        .filter_map(|(column, changed)| changed.then_some(column))
        .collect()
    }

    /// Check if the changeset writes nothing
    pub fn is_empty(&self) -> bool {
        self.changed_columns().is_empty()
    }
}

/// Values for inserting an organization_memberships row
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipInsert {
    pub user_id: Uuid,
    pub organization_id: Uuid,
    pub role: MembershipRole,
    pub status: MembershipStatus,
    pub permissions: Json<Vec<String>>,
    pub invited_at: Option<DateTime<Utc>>,
    pub invited_by: Option<Uuid>,
}

/// Values for updating an organization_memberships row. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MembershipUpdate {
    pub role: Option<MembershipRole>,
    pub status: Option<MembershipStatus>,
    pub permissions: Option<Json<Vec<String>>>,
    pub invited_at: Option<DateTime<Utc>>,
    pub invited_by: Option<Uuid>,
}

impl MembershipUpdate {
    /// Names of the columns this changeset writes
    pub fn changed_columns(&self) -> Vec<&'static str> {
        [
            ("role", self.role.is_some()),
            ("status", self.status.is_some()),
            ("permissions", self.permissions.is_some()),
            ("invited_at", self.invited_at.is_some()),
            ("invited_by", self.invited_by.is_some()),
        ]
        .into_iter()
        .filter_map(|(column, changed)| changed.then_some(column))
        .collect()
    }

    /// Check if the changeset writes nothing
    pub fn is_empty(&self) -> bool {
        self.changed_columns().is_empty()
    }
}
