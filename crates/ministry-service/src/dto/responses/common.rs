//! Common response types shared by every entity family

use ministry_core::{PaginationMeta, PaginationParams};
use serde::Serialize;

/// List envelope returned by every paginated endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedListResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> PaginatedListResponse<T> {
    pub fn new(items: Vec<T>, params: PaginationParams) -> Self {
        Self {
            items,
            pagination: PaginationMeta::new(params),
            success: true,
            message: None,
        }
    }

    /// Map each row in input order and wrap the result.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>, params: PaginationParams) -> Self
    where
        T: From<R>,
    {
        Self::new(rows.into_iter().map(T::from).collect(), params)
    }

    /// Attach a caller-chosen message to the envelope
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize)]
    struct Item(u32);

    impl From<&u32> for Item {
        fn from(value: &u32) -> Self {
            Item(*value * 10)
        }
    }

    #[test]
    fn test_from_rows_preserves_order() {
        let rows: [u32; 3] = [3, 1, 2];
        let list: PaginatedListResponse<Item> =
            PaginatedListResponse::from_rows(&rows, PaginationParams::new(1, 10, 3));

        assert_eq!(list.items, vec![Item(30), Item(10), Item(20)]);
        assert!(list.success);
        assert!(list.message.is_none());
    }

    #[test]
    fn test_envelope_json() {
        let list: PaginatedListResponse<Item> =
            PaginatedListResponse::from_rows(&[1_u32], PaginationParams::new(2, 10, 25));
        let json = serde_json::to_value(&list).unwrap();

        assert_eq!(
            json["pagination"],
            serde_json::json!({
                "page": 2,
                "limit": 10,
                "total": 25,
                "totalPages": 3,
                "hasNext": true,
                "hasPrev": true,
            })
        );
        assert_eq!(json["success"], true);
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_with_message() {
        let list: PaginatedListResponse<Item> =
            PaginatedListResponse::new(Vec::new(), PaginationParams::new(1, 20, 0))
                .with_message("No results");
        let json = serde_json::to_value(&list).unwrap();

        assert_eq!(json["message"], "No results");
        assert_eq!(json["items"], serde_json::json!([]));
    }
}
