//! Row to DTO mappers
//!
//! Implements `From` conversions from database rows to response DTOs.
//! Nullable columns get their documented fallback here, and computed flags
//! are derived from the defaulted values.

use sqlx::types::Json;

pub mod ai;
pub mod assessments;
pub mod content;
pub mod format;
pub mod organizations;

pub use ai::{
    to_paginated_ai_content_job_list, to_paginated_ai_conversation_list,
    to_paginated_ai_message_list, to_paginated_cross_reference_suggestion_list,
    to_paginated_theological_concept_list, CrossReferenceWithContent,
};
pub use assessments::{
    to_paginated_assessment_list, to_paginated_user_assessment_list, AssessmentWithQuestions,
    UserAssessmentWithDetails,
};
pub use content::{
    to_paginated_content_category_list, to_paginated_content_item_list,
    to_paginated_content_series_list, ContentItemWithDetails, ContentSeriesWithDetails,
};
pub use organizations::{
    to_paginated_membership_list, to_paginated_organization_list, MembershipWithDetails,
    OrganizationWithRelations,
};

/// Model recorded when an AI row does not name one
pub(crate) const DEFAULT_AI_MODEL: &str = "gpt-4";

/// Clone a nullable JSONB payload out of its wrapper
pub(crate) fn json_opt<T: Clone>(value: Option<&Json<T>>) -> Option<T> {
    value.map(|Json(inner)| inner.clone())
}

/// Clone a nullable JSONB payload, falling back to the type's default
pub(crate) fn json_or_default<T: Clone + Default>(value: Option<&Json<T>>) -> T {
    json_opt(value).unwrap_or_default()
}

