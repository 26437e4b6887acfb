//! Pagination utilities for service layer
//!
//! Pages are anchored on advertisement ids: page `P` covers ids `P..=P+9`.

use crate::errors::ServiceError;

/// Number of ids covered by one page.
pub const PAGE_SIZE: i64 = 10;

/// Inclusive id window `[anchor, anchor + PAGE_SIZE - 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    anchor: i64,
}

impl PageWindow {
    pub fn new(page: i64) -> Result<Self, ServiceError> {
        if page <= 0 {
            return Err(ServiceError::Validation("page must be a positive integer".into()));
        }
        Ok(Self { anchor: page })
    }

    pub fn first(&self) -> i64 { self.anchor }

    /// Saturates at `i64::MAX` instead of overflowing.
    pub fn last(&self) -> i64 { self.anchor.saturating_add(PAGE_SIZE - 1) }

    pub fn contains(&self, id: i64) -> bool { id >= self.first() && id <= self.last() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_covers_ten_ids() {
        let w = PageWindow::new(3).unwrap();
        assert_eq!((w.first(), w.last()), (3, 12));
        assert!(w.contains(3) && w.contains(12));
        assert!(!w.contains(2) && !w.contains(13));
    }

    #[test]
    fn rejects_non_positive_page() {
        assert!(matches!(PageWindow::new(0), Err(ServiceError::Validation(_))));
        assert!(PageWindow::new(-4).is_err());
    }

    #[test]
    fn upper_bound_saturates() {
        let w = PageWindow::new(i64::MAX - 3).unwrap();
        assert_eq!(w.last(), i64::MAX);
    }
}
