//! クライアント側ページング
//!
//! APIはページングに対応していないため、全件リストを固定サイズで切り出す。

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// 1ページ分の結果
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_more: bool,
}

/// `page` は1始まり。範囲外のページは空で `has_more = false`
pub fn paginate<T: Clone>(all_items: &[T], page: usize, page_size: usize) -> Page<T> {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let end = start.saturating_add(page_size);

    let items = if start >= all_items.len() {
        Vec::new()
    } else {
        all_items[start..end.min(all_items.len())].to_vec()
    };

    Page {
        items,
        has_more: end < all_items.len(),
    }
}
