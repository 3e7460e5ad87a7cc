//! Pagination types for list responses.
//!
//! Pages are 1-indexed. The envelope is derived entirely from the
//! `{page, limit, total}` triple supplied by the caller.

use serde::{Deserialize, Serialize};

/// Caller-supplied pagination input for a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// The page number (1-indexed).
    pub page: u32,
    /// The number of items per page.
    pub limit: u32,
    /// The total number of items across all pages.
    pub total: u64,
}

impl PaginationParams {
    #[must_use]
    pub const fn new(page: u32, limit: u32, total: u64) -> Self {
        Self { page, limit, total }
    }

    /// Returns the offset for database queries.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page.saturating_sub(1) as u64) * self.limit as u64
    }
}

/// Pagination envelope attached to every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Builds the envelope: `total_pages = ceil(total / limit)`.
    ///
    /// A zero limit yields zero pages.
    #[must_use]
    pub fn new(params: PaginationParams) -> Self {
        let total_pages = if params.limit > 0 {
            params.total.div_ceil(u64::from(params.limit))
        } else {
            0
        };

        Self {
            page: params.page,
            limit: params.limit,
            total: params.total,
            total_pages,
            has_next: u64::from(params.page) < total_pages,
            has_prev: params.page > 1,
        }
    }
}

impl From<PaginationParams> for PaginationMeta {
    fn from(params: PaginationParams) -> Self {
        Self::new(params)
    }
}
