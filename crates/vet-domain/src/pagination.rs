//! Offset/limit pagination shared by every paged list endpoint.
//!
//! `offset` is a page index, not a document count: the store skips
//! `offset * limit` documents. Page indices 0 and 1 both yield
//! `current = limit` when computing the page markers.

use serde::{Deserialize, Serialize};

/// Largest page size a caller may request.
pub const MAX_LIMIT: i64 = 20;

/// Pager validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PagerError {
    #[error("invalid offset")]
    InvalidOffset,
    #[error("invalid limit")]
    InvalidLimit,
}

/// Requested page, bound from `?offset=&limit=`.
///
/// Absent values default to 0, so a request without `limit` fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub limit: i64,
}

impl Pager {
    pub fn validate(&self) -> Result<(), PagerError> {
        if self.offset < 0 {
            return Err(PagerError::InvalidOffset);
        }
        if self.limit <= 0 || self.limit > MAX_LIMIT {
            return Err(PagerError::InvalidLimit);
        }
        Ok(())
    }

    /// Number of documents the store should skip. Call after `validate`.
    pub fn skip(&self) -> u64 {
        (self.offset.max(0) as u64).saturating_mul(self.limit.max(0) as u64)
    }

    fn current(&self) -> u64 {
        let page = if self.offset == 0 { 1 } else { self.offset };
        (page.max(0) as u64).saturating_mul(self.limit.max(0) as u64)
    }
}

/// One page of results plus the neighbouring page markers.
///
/// `next` / `previous` are page offsets, 0 when there is no such page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerResult<T> {
    pub next: i64,
    pub previous: i64,
    pub total: u64,
    pub data: Vec<T>,
}

impl<T> PagerResult<T> {
    pub fn new(pager: &Pager, total_docs: u64, data: Vec<T>) -> Self {
        let current = pager.current();
        let next = if current < total_docs {
            pager.offset + 1
        } else {
            0
        };
        let previous = if current > pager.limit.max(0) as u64 {
            pager.offset - 1
        } else {
            0
        };
        Self {
            next,
            previous,
            total: total_docs,
            data,
        }
    }

    /// Convert the page items while keeping the markers.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagerResult<U> {
        PagerResult {
            next: self.next,
            previous: self.previous,
            total: self.total,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}
