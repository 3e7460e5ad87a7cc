//! # ministry-db
//!
//! Row models for the ministry platform PostgreSQL tables.
//!
//! ## Overview
//!
//! - Database models with SQLx `FromRow` derives, one per table
//! - Typed payloads for JSONB columns
//! - Insert/update changesets for the organization and assessment write paths
//!
//! NUMERIC columns are carried as their decimal text, so queries select
//! them with a `::text` cast. Nullable columns stay `Option` here. Defaults are applied when a row
//! is projected into a response, never on the row itself.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ministry_db::models::OrganizationModel;
//!
//! async fn example(pool: &sqlx::PgPool) -> Result<(), sqlx::Error> {
//!     let orgs: Vec<OrganizationModel> = sqlx::query_as("SELECT * FROM organizations")
//!         .fetch_all(pool)
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;

pub use mappers::{
    AssessmentInsert, AssessmentQuestionInsert, AssessmentQuestionUpdate, AssessmentResponseInsert,
    AssessmentResponseUpdate, AssessmentUpdate, MembershipInsert, MembershipUpdate,
    OrganizationInsert, OrganizationUpdate, UserAssessmentInsert, UserAssessmentUpdate,
};
