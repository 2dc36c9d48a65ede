use crate::constants::FIRST_PAGE;

/// 1-based page counter bounded by the document's page count.
///
/// `current_page` stays within `1..=max(page_count, 1)`; both transitions
/// are no-ops at their boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_count: usize,
}

impl Pagination {
    pub fn new() -> Self {
        Self {
            current_page: FIRST_PAGE,
            page_count: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn set_page_count(&mut self, page_count: usize) {
        self.page_count = page_count;
        self.current_page = self.current_page.clamp(FIRST_PAGE, page_count.max(FIRST_PAGE));
    }

    /// Returns whether the page changed.
    pub fn go_to_previous_page(&mut self) -> bool {
        if self.current_page > FIRST_PAGE {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Returns whether the page changed.
    pub fn go_to_next_page(&mut self) -> bool {
        if self.current_page < self.page_count {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page <= FIRST_PAGE
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page == self.page_count
    }

    pub fn indicator(&self) -> String {
        format!("Page {} of {}", self.current_page, self.page_count)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_pages(page_count: usize) -> Pagination {
        let mut pagination = Pagination::new();
        pagination.set_page_count(page_count);
        pagination
    }

    #[test]
    fn test_initial_state() {
        let pagination = Pagination::new();
        assert_eq!(pagination.current_page(), 1);
        assert_eq!(pagination.page_count(), 0);
        assert_eq!(pagination.indicator(), "Page 1 of 0");
    }

    #[test]
    fn test_previous_is_noop_on_first_page() {
        let mut pagination = with_pages(5);
        assert!(!pagination.go_to_previous_page());
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn test_next_is_noop_on_last_page() {
        let mut pagination = with_pages(2);
        assert!(pagination.go_to_next_page());
        assert!(!pagination.go_to_next_page());
        assert_eq!(pagination.current_page(), 2);
    }

    #[test]
    fn test_three_page_walk() {
        let mut pagination = with_pages(3);
        pagination.go_to_next_page();
        pagination.go_to_next_page();
        assert_eq!(pagination.current_page(), 3);
        pagination.go_to_next_page();
        assert_eq!(pagination.current_page(), 3);
        assert_eq!(pagination.indicator(), "Page 3 of 3");
    }

    #[test]
    fn test_no_movement_without_pages() {
        let mut pagination = Pagination::new();
        assert!(!pagination.go_to_next_page());
        assert!(!pagination.go_to_previous_page());
        assert_eq!(pagination.current_page(), 1);
        assert!(pagination.is_first_page());
        assert!(!pagination.is_last_page());
    }

    #[test]
    fn test_bounds_hold_for_any_sequence() {
        for page_count in 1..=6 {
            // Every previous/next sequence of length 8, encoded as bits.
            for sequence in 0u32..(1 << 8) {
                let mut pagination = with_pages(page_count);
                for step in 0..8 {
                    if sequence & (1 << step) == 0 {
                        pagination.go_to_previous_page();
                    } else {
                        pagination.go_to_next_page();
                    }
                    let page = pagination.current_page();
                    assert!(
                        (1..=page_count).contains(&page),
                        "page {} escaped 1..={} on sequence {:#010b}",
                        page,
                        page_count,
                        sequence
                    );
                }
            }
        }
    }

    #[test]
    fn test_shrinking_page_count_clamps_current_page() {
        let mut pagination = with_pages(4);
        pagination.go_to_next_page();
        pagination.go_to_next_page();
        pagination.set_page_count(2);
        assert_eq!(pagination.current_page(), 2);

        pagination.set_page_count(0);
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn test_boundary_flags() {
        let mut pagination = with_pages(2);
        assert!(pagination.is_first_page());
        assert!(!pagination.is_last_page());
        pagination.go_to_next_page();
        assert!(!pagination.is_first_page());
        assert!(pagination.is_last_page());
    }
}
