//! Page slicing over a filtered view

/// One page of a view
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'v, T> {
    /// Items on this page, in view order
    pub items: &'v [T],
    /// `ceil(len / limit)`, or 1 when `limit` is 0
    pub total_pages: usize,
}

/// Slices views into 1-based pages
pub struct Paginator;

impl Paginator {
    /// Return page `page` (1-based) of size `limit`.
    ///
    /// Out-of-range pages yield an empty slice. Page 0 is treated as page 1.
    pub fn paginate<T>(view: &[T], page: usize, limit: usize) -> Page<'_, T> {
        Page {
            items: view.get(Self::bounds(view.len(), page, limit)).unwrap_or(&[]),
            total_pages: Self::total_pages(view.len(), limit),
        }
    }

    pub fn total_pages(len: usize, limit: usize) -> usize {
        if limit == 0 {
            1
        } else {
            len.div_ceil(limit)
        }
    }

    fn bounds(len: usize, page: usize, limit: usize) -> std::ops::Range<usize> {
        let start = page
            .saturating_sub(1)
            .checked_mul(limit)
            .unwrap_or(usize::MAX)
            .min(len);
        let end = start.saturating_add(limit).min(len);
        start..end
    }
}
