//! # ministry-core
//!
//! Domain layer containing the closed value sets stored by the platform,
//! APEST scoring types, pagination math and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod error;
pub mod pagination;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use error::DomainError;
pub use pagination::{PaginationMeta, PaginationParams};
pub use value_objects::{
    ApestDimension, ApestScores, AssessmentStatus, ContentStatus, ConversationStatus, JobPriority,
    JobStatus, LicenseType, MembershipRole, MembershipStatus, MessageRole, OrganizationStatus,
    SuggestionStatus, Visibility,
};
