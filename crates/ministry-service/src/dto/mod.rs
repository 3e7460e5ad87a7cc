//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for the organization and assessment write paths
//! - Response DTOs for serializing API outputs
//! - Mappers for converting database rows to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    validate_request, AddressRequest, CreateAssessmentQuestionRequest, CreateAssessmentRequest,
    CreateAssessmentResponseRequest, CreateMembershipRequest, CreateOrganizationRequest,
    CreateUserAssessmentRequest, PaginationQuery, UpdateAssessmentQuestionRequest,
    UpdateAssessmentRequest, UpdateAssessmentResponseRequest, UpdateMembershipRequest,
    UpdateOrganizationRequest, UpdateUserAssessmentRequest,
};

// Re-export commonly used response types
pub use responses::{
    AiContentJobResponse, AiConversationResponse, AiCrossReferenceSuggestionResponse,
    AiMessageResponse, AssessmentQuestionResponse, AssessmentResponse, AssessmentResponseResponse,
    AssessmentWithQuestionsResponse, ContentCategoryResponse, ContentItemResponse,
    ContentSeriesResponse, OrganizationMembershipResponse, OrganizationResponse,
    PaginatedListResponse, TheologicalConceptResponse, UserAssessmentResponse,
    UserAssessmentWithDetailsResponse, UserProfileResponse,
};

// Re-export mappers and helper structs
pub use mappers::{
    AssessmentWithQuestions, ContentItemWithDetails, ContentSeriesWithDetails,
    CrossReferenceWithContent, MembershipWithDetails, OrganizationWithRelations,
    UserAssessmentWithDetails,
};
