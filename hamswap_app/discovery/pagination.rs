/// One element of the numeric page strip. Ellipses are render-only
/// placeholders; they never resolve to a page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStripItem {
    Page(u32),
    Ellipsis,
}

pub fn has_previous(current_page: u32) -> bool {
    current_page > 1
}

pub fn has_next(current_page: u32, total_pages: u32) -> bool {
    current_page < total_pages
}

/// The page numbers (and ellipsis gaps) to render for a paginated view.
///
/// Page 1 and the last page are always present; the window around the
/// current page is three wide; a gap on either side collapses into a single
/// ellipsis. With one page or fewer the control is not shown at all and the
/// strip is empty.
pub fn page_strip(current_page: u32, total_pages: u32) -> Vec<PageStripItem> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let current = i64::from(current_page);
    let total = i64::from(total_pages);
    let mut items = vec![PageStripItem::Page(1)];

    let contains = |items: &[PageStripItem], page: i64| {
        items.iter().any(|it| *it == PageStripItem::Page(page as u32))
    };

    // Leading gap, or the pages right after 1.
    if current > 3 {
        items.push(PageStripItem::Ellipsis);
    } else {
        for page in 2..total.min(4) {
            items.push(PageStripItem::Page(page as u32));
        }
    }

    // The current page and its immediate neighbors.
    let start = 2.max(current - 1);
    let end = (total - 1).min(current + 1);
    for page in start..=end {
        if !contains(&items, page) {
            items.push(PageStripItem::Page(page as u32));
        }
    }

    // Trailing gap, or the pages right before the last.
    if current < total - 2 {
        items.push(PageStripItem::Ellipsis);
    } else {
        for page in (total - 2).max(end + 1)..total {
            if !contains(&items, page) {
                items.push(PageStripItem::Page(page as u32));
            }
        }
    }

    if !contains(&items, total) {
        items.push(PageStripItem::Page(total as u32));
    }

    items
}
