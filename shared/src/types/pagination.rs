//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 100;

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: u32,

    /// Number of items per page
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Create pagination from already-validated values
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Build from optional query values, rejecting out-of-range input
    ///
    /// # Returns
    /// * `Ok(Pagination)` - Defaults applied for missing values
    /// * `Err(String)` - Human-readable reason when a value is out of range
    pub fn from_query(page: Option<u32>, limit: Option<u32>) -> Result<Self, String> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if page < 1 {
            return Err("page must be at least 1".to_string());
        }
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
            return Err(format!("limit must be between {} and {}", MIN_LIMIT, MAX_LIMIT));
        }

        Ok(Self::new(page, limit))
    }

    /// Calculate the offset for database queries
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

/// Paginated response wrapper with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The items on this page
    pub items: Vec<T>,

    /// Total number of items across all pages
    pub total: u64,

    /// Current page number
    pub page: u32,

    /// Items per page
    pub limit: u32,

    /// Total number of pages
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(items: Vec<T>, pagination: Pagination, total: u64) -> Self {
        Self {
            items,
            total,
            page: pagination.page,
            limit: pagination.limit,
            total_pages: Self::calculate_total_pages(total, pagination.limit),
        }
    }

    /// Calculate total pages from total items and items per page
    fn calculate_total_pages(total: u64, limit: u32) -> u32 {
        if total == 0 || limit == 0 {
            return 0;
        }
        total.div_ceil(u64::from(limit)) as u32
    }

    /// Transform the items using a function
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}
