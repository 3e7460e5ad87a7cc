//! Organization and membership mappers
//!
//! Rows map to responses through `From`. Requests map to changesets through
//! `TryFrom`, which validates first and fails with `AppError::InvalidFields`.

use ministry_common::AppError;
use ministry_core::{
    LicenseType, MembershipRole, MembershipStatus, OrganizationStatus, PaginationParams,
};
use ministry_db::models::{
    AddressModel, OrganizationMembershipModel, OrganizationModel, UserProfileModel,
};
use ministry_db::{MembershipInsert, MembershipUpdate, OrganizationInsert, OrganizationUpdate};
use sqlx::types::Json;

use super::format::{capitalize, to_iso_string};
use super::json_or_default;
use crate::dto::requests::{
    validate_request, AddressRequest, CreateMembershipRequest, CreateOrganizationRequest,
    UpdateMembershipRequest, UpdateOrganizationRequest,
};
use crate::dto::responses::{
    AddressResponse, InviterSummary, MembershipOrganizationSummary, MembershipUserSummary,
    OrganizationEntity, OrganizationMemberSummary, OrganizationMembershipEntity,
    OrganizationMembershipResponse, OrganizationOwnerSummary, OrganizationResponse,
    PaginatedListResponse,
};

/// Seat count when none is recorded
const DEFAULT_MAX_USERS: i32 = 1;

// ============================================================================
// Organization Mappers
// ============================================================================

impl From<&AddressModel> for AddressResponse {
    fn from(address: &AddressModel) -> Self {
        Self {
            street: address.street.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            country: address.country.clone(),
            postal_code: address.postal_code.clone(),
        }
    }
}

impl From<&OrganizationModel> for OrganizationEntity {
    fn from(row: &OrganizationModel) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
            slug: row.slug.clone(),
            description: row.description.clone(),
            website: row.website.clone(),
            logo_url: row.logo_url.clone(),
            organization_type: row.organization_type.clone(),
            size_category: row.size_category.clone(),
            contact_email: row.contact_email.clone(),
            contact_phone: row.contact_phone.clone(),
            address: row
                .address
                .as_ref()
                .map(|Json(address)| AddressResponse::from(address)),
            license_type: LicenseType::from_column(row.license_type.as_deref()),
            max_users: row.max_users.unwrap_or(DEFAULT_MAX_USERS),
            account_owner_id: row.account_owner_id,
            billing_email: row.billing_email.clone(),
            status: OrganizationStatus::from_column(row.status.as_deref()),
            created_at: to_iso_string(&row.created_at),
            updated_at: to_iso_string(&row.updated_at),
        }
    }
}

impl From<&UserProfileModel> for OrganizationOwnerSummary {
    fn from(profile: &UserProfileModel) -> Self {
        Self {
            id: profile.id,
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
        }
    }
}

impl From<(&OrganizationMembershipModel, &UserProfileModel)> for OrganizationMemberSummary {
    fn from((membership, user): (&OrganizationMembershipModel, &UserProfileModel)) -> Self {
        Self {
            id: membership.id,
            user_id: membership.user_id,
            role: MembershipRole::from(membership.role.as_str()),
            status: MembershipStatus::from_column(membership.status.as_deref()),
            // Falls back to the row creation time
            joined_at: to_iso_string(
                membership
                    .joined_at
                    .as_ref()
                    .unwrap_or(&membership.created_at),
            ),
            user: OrganizationOwnerSummary::from(user),
        }
    }
}

/// Helper struct for creating OrganizationResponse with owner and members
#[derive(Debug, Clone, Copy)]
pub struct OrganizationWithRelations<'a> {
    pub organization: &'a OrganizationModel,
    pub owner: Option<&'a UserProfileModel>,
    pub members: Option<&'a [(OrganizationMembershipModel, UserProfileModel)]>,
    pub member_count: Option<i64>,
}

impl<'a> OrganizationWithRelations<'a> {
    pub fn new(organization: &'a OrganizationModel) -> Self {
        Self {
            organization,
            owner: None,
            members: None,
            member_count: None,
        }
    }

    pub fn with_owner(mut self, owner: &'a UserProfileModel) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_members(
        mut self,
        members: &'a [(OrganizationMembershipModel, UserProfileModel)],
    ) -> Self {
        self.members = Some(members);
        self
    }

    pub fn with_member_count(mut self, count: i64) -> Self {
        self.member_count = Some(count);
        self
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.is_empty())
}

impl From<OrganizationWithRelations<'_>> for OrganizationResponse {
    fn from(details: OrganizationWithRelations<'_>) -> Self {
        let organization = OrganizationEntity::from(details.organization);

        Self {
            is_active: organization.status == OrganizationStatus::Active,
            is_trial: organization.status == OrganizationStatus::Trial,
            has_custom_logo: is_present(organization.logo_url.as_deref()),
            has_website: is_present(organization.website.as_deref()),
            member_count: details.member_count.unwrap_or(0),
            display_name: organization.name.clone(),
            status_display: capitalize(organization.status.as_str()),
            license_type_display: capitalize(organization.license_type.as_str()),
            owner: details.owner.map(OrganizationOwnerSummary::from),
            members: details.members.map(|members| {
                members
                    .iter()
                    .map(|(membership, user)| OrganizationMemberSummary::from((membership, user)))
                    .collect()
            }),
            organization,
        }
    }
}

impl From<&OrganizationModel> for OrganizationResponse {
    fn from(row: &OrganizationModel) -> Self {
        Self::from(OrganizationWithRelations::new(row))
    }
}

// ============================================================================
// Membership Mappers
// ============================================================================

impl From<&OrganizationMembershipModel> for OrganizationMembershipEntity {
    fn from(row: &OrganizationMembershipModel) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            organization_id: row.organization_id,
            role: MembershipRole::from(row.role.as_str()),
            status: MembershipStatus::from_column(row.status.as_deref()),
            permissions: json_or_default(row.permissions.as_ref()),
            joined_at: row.joined_at.as_ref().map(to_iso_string),
            invited_at: row.invited_at.as_ref().map(to_iso_string),
            invited_by: row.invited_by,
            created_at: to_iso_string(&row.created_at),
            updated_at: to_iso_string(&row.updated_at),
        }
    }
}

impl From<&UserProfileModel> for MembershipUserSummary {
    fn from(profile: &UserProfileModel) -> Self {
        Self {
            id: profile.id,
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
            avatar_url: profile.avatar_url.clone(),
        }
    }
}

impl From<&OrganizationModel> for MembershipOrganizationSummary {
    fn from(organization: &OrganizationModel) -> Self {
        Self {
            id: organization.id,
            name: organization.name.clone(),
            slug: organization.slug.clone(),
            logo_url: organization.logo_url.clone(),
        }
    }
}

impl From<&UserProfileModel> for InviterSummary {
    fn from(profile: &UserProfileModel) -> Self {
        Self {
            id: profile.id,
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
        }
    }
}

/// Helper struct for creating OrganizationMembershipResponse
#[derive(Debug, Clone, Copy)]
pub struct MembershipWithDetails<'a> {
    pub membership: &'a OrganizationMembershipModel,
    pub user: &'a UserProfileModel,
    pub organization: &'a OrganizationModel,
    pub invited_by: Option<&'a UserProfileModel>,
}

impl From<MembershipWithDetails<'_>> for OrganizationMembershipResponse {
    fn from(details: MembershipWithDetails<'_>) -> Self {
        let membership = OrganizationMembershipEntity::from(details.membership);

        Self {
            is_active: membership.status == MembershipStatus::Active,
            is_pending: membership.status == MembershipStatus::Pending,
            can_manage: membership.role.can_manage(),
            role_display: capitalize(membership.role.as_str()),
            status_display: capitalize(membership.status.as_str()),
            user: MembershipUserSummary::from(details.user),
            organization: MembershipOrganizationSummary::from(details.organization),
            invited_by_user: details.invited_by.map(InviterSummary::from),
            membership,
        }
    }
}

// ============================================================================
// Request Mappers
// ============================================================================

impl From<&AddressRequest> for AddressModel {
    fn from(address: &AddressRequest) -> Self {
        let part = |value: Option<&String>| Some(value.cloned().unwrap_or_default());

        Self {
            street: part(address.street.as_ref()),
            city: part(address.city.as_ref()),
            state: part(address.state.as_ref()),
            country: part(address.country.as_ref()),
            postal_code: part(address.postal_code.as_ref()),
        }
    }
}

fn address_column(address: Option<&AddressRequest>) -> Option<Json<AddressModel>> {
    address.map(|address| Json(AddressModel::from(address)))
}

impl TryFrom<&CreateOrganizationRequest> for OrganizationInsert {
    type Error = AppError;

    fn try_from(request: &CreateOrganizationRequest) -> Result<Self, Self::Error> {
        validate_request(request)?;

        Ok(Self {
            name: request.name.clone(),
            slug: request.slug.clone(),
            description: request.description.clone(),
            website: request.website.clone(),
            logo_url: request.logo_url.clone(),
            organization_type: request.organization_type.clone(),
            size_category: request.size_category.clone(),
            contact_email: request.contact_email.clone(),
            contact_phone: request.contact_phone.clone(),
            address: address_column(request.address.as_ref()),
            license_type: request.license_type.unwrap_or_default(),
            max_users: request.max_users.unwrap_or(DEFAULT_MAX_USERS),
            account_owner_id: request.account_owner_id,
            billing_email: request.billing_email.clone(),
            status: request.status.unwrap_or_default(),
        })
    }
}

impl TryFrom<&UpdateOrganizationRequest> for OrganizationUpdate {
    type Error = AppError;

    fn try_from(request: &UpdateOrganizationRequest) -> Result<Self, Self::Error> {
        validate_request(request)?;

        Ok(Self {
            name: request.name.clone(),
            description: request.description.clone(),
            website: request.website.clone(),
            logo_url: request.logo_url.clone(),
            organization_type: request.organization_type.clone(),
            size_category: request.size_category.clone(),
            contact_email: request.contact_email.clone(),
            contact_phone: request.contact_phone.clone(),
            address: address_column(request.address.as_ref()),
            license_type: request.license_type,
            max_users: request.max_users,
            account_owner_id: request.account_owner_id,
            billing_email: request.billing_email.clone(),
            status: request.status,
        })
    }
}

impl TryFrom<&CreateMembershipRequest> for MembershipInsert {
    type Error = AppError;

    fn try_from(request: &CreateMembershipRequest) -> Result<Self, Self::Error> {
        validate_request(request)?;

        Ok(Self {
            user_id: request.user_id,
            organization_id: request.organization_id,
            role: request.role,
            status: request.status.unwrap_or_default(),
            permissions: Json(request.permissions.clone().unwrap_or_default()),
            invited_at: request.invited_at,
            invited_by: request.invited_by,
        })
    }
}

impl TryFrom<&UpdateMembershipRequest> for MembershipUpdate {
    type Error = AppError;

    fn try_from(request: &UpdateMembershipRequest) -> Result<Self, Self::Error> {
        validate_request(request)?;

        Ok(Self {
            role: request.role,
            status: request.status,
            permissions: request.permissions.clone().map(Json),
            invited_at: request.invited_at,
            invited_by: request.invited_by,
        })
    }
}

// ============================================================================
// List Mappers
// ============================================================================

pub fn to_paginated_organization_list(
    rows: &[OrganizationWithRelations<'_>],
    params: PaginationParams,
) -> PaginatedListResponse<OrganizationResponse> {
    PaginatedListResponse::from_rows(rows.iter().copied(), params)
}

pub fn to_paginated_membership_list(
    rows: &[MembershipWithDetails<'_>],
    params: PaginationParams,
) -> PaginatedListResponse<OrganizationMembershipResponse> {
    PaginatedListResponse::from_rows(rows.iter().copied(), params)
}
