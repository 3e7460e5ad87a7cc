//! Request to row changesets
//!
//! `*Insert`/`*Update` structs carry already-defaulted values ready to be
//! bound to INSERT and UPDATE statements.

mod assessment;
mod organization;

pub use assessment::{
    AssessmentInsert, AssessmentQuestionInsert, AssessmentQuestionUpdate, AssessmentResponseInsert,
    AssessmentResponseUpdate, AssessmentUpdate, UserAssessmentInsert, UserAssessmentUpdate,
};
pub use organization::{MembershipInsert, MembershipUpdate, OrganizationInsert, OrganizationUpdate};
