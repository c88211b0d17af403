//! Pagination utilities for API responses.
//!
//! Listing endpoints take a zero-based `page` and a `size`:
//!
//! - `page`: Page number, starting at 0 (default: 0)
//! - `size`: Items per page (1-100, default: 10)
//!
//! # Example
//!
//! ```ignore
//! use reelbase_core::pagination::{PaginationParams, PaginationMeta};
//!
//! async fn list_videos(
//!     Query(params): Query<PaginationParams>,
//! ) -> Result<Json<PaginatedResponse>, AppError> {
//!     let videos = fetch_videos(params.size(), params.offset()).await?;
//!     let total = count_videos().await?;
//!
//!     Ok(Json(PaginatedResponse {
//!         data: videos,
//!         meta: PaginationMeta::new(total, &params),
//!     }))
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Deserializes an optional string into an optional i64.
///
/// Query parameters may arrive as empty strings, which are treated as `None`.
pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Metadata about a paginated response.
///
/// ```json
/// {
///   "data": [...],
///   "meta": {
///     "totalElements": 42,
///     "totalPages": 5,
///     "page": 1,
///     "size": 10,
///     "hasMore": true
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Total number of items across all pages
    pub total_elements: i64,
    /// Number of pages at the applied size
    pub total_pages: i64,
    /// Zero-based index of this page
    pub page: i64,
    /// Page size that was applied
    pub size: i64,
    /// Whether there are more items after this page
    pub has_more: bool,
}

impl PaginationMeta {
    #[must_use]
    pub fn new(total_elements: i64, params: &PaginationParams) -> Self {
        let size = params.size();
        let page = params.page();
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + size - 1) / size
        };

        Self {
            total_elements,
            total_pages,
            page,
            size,
            has_more: params.offset() + size < total_elements,
        }
    }
}

/// Query parameters for pagination.
///
/// # Limits
///
/// - `size` is clamped to the range [1, 100]
/// - `page` is clamped to a minimum of 0
#[derive(Debug, Clone, Default, Hash, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Zero-based page number (default: 0)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    /// Items per page (1-100, default: 10)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub size: Option<i64>,
}

impl PaginationParams {
    #[must_use]
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }

    /// Returns the effective page size, clamped to [1, 100].
    #[must_use]
    pub fn size(&self) -> i64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    /// Returns the effective zero-based page.
    #[must_use]
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(0).max(0)
    }

    /// Number of rows to skip for the effective page.
    #[must_use]
    pub fn offset(&self) -> i64 {
        self.page() * self.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_params_default() {
        let params = PaginationParams::default();
        assert_eq!(params.page(), 0);
        assert_eq!(params.size(), 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_pagination_params_custom_values() {
        let params = PaginationParams::new(3, 20);
        assert_eq!(params.size(), 20);
        assert_eq!(params.offset(), 60);
    }

    #[test]
    fn test_pagination_params_size_boundaries() {
        assert_eq!(PaginationParams::new(0, 0).size(), 1);
        assert_eq!(PaginationParams::new(0, -10).size(), 1);
        assert_eq!(PaginationParams::new(0, 150).size(), 100);
        assert_eq!(PaginationParams::new(0, 100).size(), 100);
    }

    #[test]
    fn test_pagination_params_negative_page() {
        let params = PaginationParams::new(-4, 10);
        assert_eq!(params.page(), 0);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_deserialize_empty_strings_as_none() {
        let params: PaginationParams =
            serde_json::from_str(r#"{"page":"","size":"25"}"#).unwrap();
        assert_eq!(params.page, None);
        assert_eq!(params.size, Some(25));
    }

    #[test]
    fn test_deserialize_rejects_non_numeric() {
        let result: Result<PaginationParams, _> = serde_json::from_str(r#"{"page":"abc"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_pagination_meta_partial_last_page() {
        let params = PaginationParams::new(4, 10);
        let meta = PaginationMeta::new(42, &params);
        assert_eq!(meta.total_pages, 5);
        assert_eq!(meta.page, 4);
        assert!(!meta.has_more);
    }

    #[test]
    fn test_pagination_meta_has_more() {
        let params = PaginationParams::new(0, 10);
        let meta = PaginationMeta::new(11, &params);
        assert_eq!(meta.total_pages, 2);
        assert!(meta.has_more);
    }

    #[test]
    fn test_pagination_meta_empty() {
        let meta = PaginationMeta::new(0, &PaginationParams::default());
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_more);
    }

    #[test]
    fn test_pagination_meta_serializes_camel_case() {
        let meta = PaginationMeta::new(5, &PaginationParams::default());
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["totalElements"], 5);
        assert_eq!(json["hasMore"], false);
    }
}
