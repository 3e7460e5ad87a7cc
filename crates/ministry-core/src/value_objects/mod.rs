//! Value objects - immutable types that represent domain concepts

mod apest;
mod status;

pub use apest::{ApestDimension, ApestScores};
pub use status::{
    AssessmentStatus, ContentStatus, ConversationStatus, JobPriority, JobStatus, LicenseType,
    MembershipRole, MembershipStatus, MessageRole, OrganizationStatus, SuggestionStatus,
    Visibility,
};
