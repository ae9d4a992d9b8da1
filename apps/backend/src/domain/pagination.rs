//! Fixed-size page windows over ordered result sets.
//!
//! Pages are 1-based. A page whose window holds no items is out of range,
//! including page 1 of an empty set.

use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    per_page: u64,
}

impl PageRequest {
    /// Page 0 is rejected as out of range; `per_page` must be at least 1.
    pub fn new(page: u64, per_page: u64) -> Result<Self, DomainError> {
        if per_page == 0 {
            return Err(DomainError::validation_other("page size must be at least 1"));
        }
        if page == 0 {
            return Err(out_of_range(page));
        }
        Ok(Self { page, per_page })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        self.per_page
    }

    /// Fail unless this page holds at least one of `total` items.
    pub fn check_in_range(&self, total: u64) -> Result<(), DomainError> {
        if self.offset() >= total {
            return Err(out_of_range(self.page));
        }
        Ok(())
    }
}

/// The slice of `items` covered by `req`, or `NotFound(Page)` when it is empty.
pub fn paginate<T>(items: Vec<T>, req: PageRequest) -> Result<Vec<T>, DomainError> {
    req.check_in_range(items.len() as u64)?;

    let offset = usize::try_from(req.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(req.limit()).unwrap_or(usize::MAX);
    Ok(items.into_iter().skip(offset).take(limit).collect())
}

fn out_of_range(page: u64) -> DomainError {
    DomainError::not_found(NotFoundKind::Page, format!("Page {page} is out of range"))
}
