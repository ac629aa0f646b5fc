// src/pipeline/paginate.rs

//! Preview gating and page windows.
//!
//! Anonymous viewers always get the first `preview_limit` rows; signed-in
//! viewers get `[(page - 1) * page_size, page * page_size)` clamped to the
//! result length. Nothing here fails: page `0` is treated as page `1`, and a
//! page past the end yields an empty slice.

use serde::Serialize;

/// One visible slice plus the numbers needed for "Showing X–Y of Z".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Rows to render
    pub visible: &'a [T],

    /// Total matching records before gating
    pub total: usize,

    /// 1-based index of the first visible row; `range_start > range_end`
    /// when nothing is visible
    pub range_start: usize,

    /// 1-based index of the last visible row
    pub range_end: usize,

    /// Page actually served (always `1` for previews)
    pub page: usize,

    /// Number of pages; `0` for previews, where paging does not apply
    pub total_pages: usize,

    /// Whether this is the anonymous preview
    pub preview: bool,
}

impl<T> Page<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Counts without the row borrow, for serialization.
    pub fn counts(&self) -> DisplayCounts {
        DisplayCounts {
            total: self.total,
            shown: self.visible.len(),
            range_start: self.range_start,
            range_end: self.range_end,
            page: self.page,
            total_pages: self.total_pages,
            preview: self.preview,
        }
    }
}

/// Serializable summary of a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayCounts {
    pub total: usize,
    pub shown: usize,
    pub range_start: usize,
    pub range_end: usize,
    pub page: usize,
    pub total_pages: usize,
    pub preview: bool,
}

impl DisplayCounts {
    /// Results line shown above the table.
    pub fn summary(&self) -> String {
        if self.preview {
            format!(
                "Showing preview: {} of {} notices",
                self.shown,
                group_thousands(self.total)
            )
        } else {
            format!(
                "Showing {}–{} of {} notices",
                self.range_start.min(self.total),
                self.range_end.min(self.total),
                group_thousands(self.total)
            )
        }
    }
}

/// Gate and slice an ordered result set.
pub fn paginate<T>(
    records: &[T],
    authenticated: bool,
    page: usize,
    page_size: usize,
    preview_limit: usize,
) -> Page<'_, T> {
    let total = records.len();

    if !authenticated {
        let end = preview_limit.min(total);
        return Page {
            visible: &records[..end],
            total,
            range_start: 1,
            range_end: end,
            page: 1,
            total_pages: 0,
            preview: true,
        };
    }

    let page_size = page_size.max(1);
    let page = page.max(1);
    let offset = (page - 1).saturating_mul(page_size);
    let start = offset.min(total);
    let end = offset.saturating_add(page_size).min(total);

    Page {
        visible: &records[start..end],
        total,
        range_start: offset.saturating_add(1),
        range_end: end.max(offset),
        page,
        total_pages: total_pages(total, page_size),
        preview: false,
    }
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Page numbers shown by the pager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    pub pages: Vec<usize>,

    /// Render a jump to page 1 before the window
    pub show_first: bool,

    /// Pages are skipped between page 1 and the window
    pub leading_gap: bool,

    /// Render a jump to the last page after the window
    pub show_last: bool,

    /// Pages are skipped between the window and the last page
    pub trailing_gap: bool,
}

/// Window of at most `max_visible` page numbers around `current`.
pub fn page_window(current: usize, total_pages: usize, max_visible: usize) -> PageWindow {
    if total_pages == 0 || max_visible == 0 {
        return PageWindow {
            pages: Vec::new(),
            show_first: false,
            leading_gap: false,
            show_last: false,
            trailing_gap: false,
        };
    }

    let current = current.clamp(1, total_pages);
    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total_pages);
    if end - start < max_visible - 1 {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }

    PageWindow {
        pages: (start..=end).collect(),
        show_first: start > 1,
        leading_gap: start > 2,
        show_last: end < total_pages,
        trailing_gap: end + 1 < total_pages,
    }
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
