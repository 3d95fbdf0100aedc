//! Pagination control strip.

use serde::Serialize;

use crate::models::Messages;
use crate::pipeline::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Previous,
    Number,
    Next,
}

/// One clickable pagination item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControl {
    pub kind: ControlKind,
    pub label: String,
    /// Page selected when the control is activated
    pub target: usize,
    pub disabled: bool,
    pub active: bool,
}

/// Build the strip for a page: previous, one control per page, next.
///
/// Nothing is emitted for a single page or an empty listing.
pub fn pagination_controls<E>(current: &Page<E>, messages: &Messages) -> Vec<PageControl> {
    let total_pages = current.total_pages;
    if total_pages <= 1 {
        return Vec::new();
    }
    let page = current.page.clamp(1, total_pages);

    let mut controls = Vec::with_capacity(total_pages + 2);
    controls.push(PageControl {
        kind: ControlKind::Previous,
        label: messages.previous_label.clone(),
        target: page.saturating_sub(1).max(1),
        disabled: !current.has_previous(),
        active: false,
    });

    controls.extend((1..=total_pages).map(|number| PageControl {
        kind: ControlKind::Number,
        label: number.to_string(),
        target: number,
        disabled: false,
        active: number == page,
    }));

    controls.push(PageControl {
        kind: ControlKind::Next,
        label: messages.next_label.clone(),
        target: (page + 1).min(total_pages),
        disabled: !current.has_next(),
        active: false,
    });

    controls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: usize, total_pages: usize) -> Page<()> {
        Page {
            items: Vec::new(),
            page,
            total_pages,
            total_items: total_pages * 3,
        }
    }

    #[test]
    fn test_single_page_has_no_strip() {
        let messages = Messages::default();
        assert!(pagination_controls(&page(1, 1), &messages).is_empty());
        assert!(pagination_controls(&page(1, 0), &messages).is_empty());
    }

    #[test]
    fn test_first_page() {
        let controls = pagination_controls(&page(1, 3), &Messages::default());
        assert_eq!(controls.len(), 5);
        assert_eq!(controls[0].label, "«");
        assert!(controls[0].disabled);
        assert!(controls[1].active);
        assert!(!controls[4].disabled);
        assert_eq!(controls[4].target, 2);
    }

    #[test]
    fn test_last_page() {
        let controls = pagination_controls(&page(3, 3), &Messages::default());
        assert!(!controls[0].disabled);
        assert_eq!(controls[0].target, 2);
        assert!(controls[3].active);
        assert!(controls[4].disabled);
        assert_eq!(controls.iter().filter(|c| c.active).count(), 1);
    }
}
