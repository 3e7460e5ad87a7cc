//! Database models - SQLx-compatible structs for PostgreSQL tables

mod ai;
mod assessment;
mod content;
mod organization;
mod user_profile;

pub use ai::{
    AiContentJobModel, AiConversationModel, AiCrossReferenceSuggestionModel, AiMessageModel,
    CitedContent, KeyConnections, MinistryContext, TheologicalConceptModel, TheologicalContext,
    UserApestProfile,
};
pub use assessment::{
    AnswerOption, AssessmentModel, AssessmentQuestionModel, AssessmentResponseModel,
    PersonalizedRecommendations, UserAssessmentModel,
};
pub use content::{ContentCategoryModel, ContentItemModel, ContentSeriesModel};
pub use organization::{AddressModel, OrganizationMembershipModel, OrganizationModel};
pub use user_profile::{BrandColors, EmailNotifications, PrivacySettings, UserProfileModel};
