//! # ministry-service
//!
//! Application layer containing the API contract: validated request DTOs,
//! response DTOs and the row-to-response mappers.

pub mod dto;
