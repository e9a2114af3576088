//! Partitioning a participant list into fixed-capacity pages.
//!
//! Pure sequential chunking: walk the list in order, cut a page every
//! `per_page` slots, optionally pad the trailing page with blanks. No
//! reordering, no look-ahead, no mutation of the input.
//!
//! The chunker is generic over the slot payload — it never inspects what
//! it is paginating.

use super::Layout;

/// One printable page: exactly the slot sequence the renderer draws,
/// in input order. A `None` slot is an explicit blank.
pub type Page<'a, T> = Vec<Option<&'a T>>;

/// Options controlling pagination.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginateOptions {
    /// Pad the final, possibly-partial page with blank slots up to full
    /// grid capacity. Used when the renderer wants a visually complete
    /// grid; off, the last page is emitted short.
    pub fill_blanks: bool,
}

/// Partition `items` into pages of `layout.per_page` slots.
///
/// Guarantees:
/// - concatenating the non-blank slots of all pages, in order,
///   reproduces `items` exactly;
/// - every page except possibly the last holds exactly `per_page` slots
///   (and the last too, when `fill_blanks` is set);
/// - at least one page is always returned, so the renderer has something
///   to draw even for an empty list — all blanks when `fill_blanks`,
///   otherwise a single empty page.
pub fn paginate<'a, T>(
    items: &'a [T],
    layout: &Layout,
    options: PaginateOptions,
) -> Vec<Page<'a, T>> {
    // Layout already guarantees per_page ≥ 1; the clamp keeps a
    // hand-built Layout from ever looping forever here.
    let per_page = layout.per_page.max(1);

    let mut pages = Vec::with_capacity(items.len() / per_page + 1);
    let mut current: Page<'a, T> = Vec::with_capacity(per_page);

    for item in items {
        current.push(Some(item));
        if current.len() == per_page {
            pages.push(std::mem::replace(&mut current, Vec::with_capacity(per_page)));
        }
    }

    if !current.is_empty() {
        if options.fill_blanks {
            current.resize(per_page, None);
        }
        pages.push(current);
    }

    if pages.is_empty() {
        pages.push(if options.fill_blanks {
            vec![None; per_page]
        } else {
            Vec::new()
        });
    }

    pages
}
