//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` with camelCase keys.
//! Timestamps are ISO-8601 strings and identifiers are UUID strings.

mod ai;
mod assessments;
mod common;
mod content;
mod organizations;

pub use ai::{
    AiContentJobResponse, AiConversationResponse, AiCrossReferenceSuggestionResponse,
    AiMessageResponse, ContentReferenceSummary, TheologicalConceptResponse,
};
pub use assessments::{
    AssessmentQuestionResponse, AssessmentResponse, AssessmentResponseResponse, AssessmentSummary,
    AssessmentWithQuestionsResponse, UserAssessmentResponse, UserAssessmentWithDetailsResponse,
};
pub use common::PaginatedListResponse;
pub use content::{
    AuthorSummary, CategorySummary, ContentCategoryResponse, ContentItemResponse,
    ContentSeriesResponse, UserProfileResponse,
};
pub use organizations::{
    AddressResponse, InviterSummary, MembershipOrganizationSummary, MembershipUserSummary,
    OrganizationEntity, OrganizationMemberSummary, OrganizationMembershipEntity,
    OrganizationMembershipResponse, OrganizationOwnerSummary, OrganizationResponse,
};
