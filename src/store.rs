//! アイテムストア
//!
//! 取得済みアイテムの蓄積（id重複排除）とページングカーソルを管理する。
//! 表示リストは変更のたびに全件から再計算する。
//!
//! 状態遷移: `Idle → Loading → Idle(成功) | Idle(エラー)`

use crate::error::Result;
use crate::fetcher::CatalogFetcher;
use closet_store_common::pagination::DEFAULT_PAGE;
use closet_store_common::{pipeline, FilterSpec, Item, Page};
use std::collections::HashSet;

/// ページングカーソル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub current_page: usize,
    pub has_more: bool,
    pub is_loading: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            current_page: DEFAULT_PAGE,
            has_more: true,
            is_loading: false,
        }
    }
}

/// 発行済みのページ要求
///
/// 応答を適用する時点で、要求時のページと世代が現在の状態と一致しなければ破棄する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
    generation: u64,
}

/// ページ要求の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 読み込み中、または続きがないため何もしなかった
    Skipped,
    /// 取得成功。`added` は新規idの件数
    Loaded { added: usize },
    /// 取得失敗。`error()` にメッセージが入る
    Failed,
    /// reset後に届いた古い応答を破棄した
    Stale,
}

#[derive(Debug)]
pub struct ItemStore {
    items: Vec<Item>,
    seen_ids: HashSet<String>,
    display_items: Vec<Item>,
    cursor: Cursor,
    error: Option<String>,
    page_size: usize,
    generation: u64,
}

impl ItemStore {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            seen_ids: HashSet::new(),
            display_items: Vec::new(),
            cursor: Cursor::default(),
            error: None,
            page_size: page_size.max(1),
            generation: 0,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn display_items(&self) -> &[Item] {
        &self.display_items
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// 次ページを取得してマージする
    pub async fn request_next_page<F: CatalogFetcher>(
        &mut self,
        fetcher: &F,
        spec: &FilterSpec,
    ) -> FetchOutcome {
        let Some(request) = self.begin_next_page() else {
            return FetchOutcome::Skipped;
        };
        let result = fetcher.fetch_page(request.page, request.limit).await;
        self.complete_page(request, result, spec)
    }

    /// Loading状態に入り、要求を発行する
    ///
    /// 読み込み中、または `has_more == false` の場合は `None`。
    pub fn begin_next_page(&mut self) -> Option<PageRequest> {
        if self.cursor.is_loading || !self.cursor.has_more {
            return None;
        }

        self.cursor.is_loading = true;
        self.error = None;
        tracing::debug!("ページ{}を要求", self.cursor.current_page);

        Some(PageRequest {
            page: self.cursor.current_page,
            limit: self.page_size,
            generation: self.generation,
        })
    }

    /// 取得結果を反映する
    pub fn complete_page(
        &mut self,
        request: PageRequest,
        result: Result<Page<Item>>,
        spec: &FilterSpec,
    ) -> FetchOutcome {
        if request.generation != self.generation
            || request.page != self.cursor.current_page
            || !self.cursor.is_loading
        {
            tracing::debug!("ページ{}の古い応答を破棄", request.page);
            return FetchOutcome::Stale;
        }

        self.cursor.is_loading = false;

        match result {
            Ok(page) => {
                let added = self.merge(page.items);
                self.cursor.has_more = page.has_more;
                self.cursor.current_page += 1;
                self.recompute_display(spec);
                tracing::debug!(
                    "ページ{}: 新規{}件 (累計{}件, 続き: {})",
                    request.page,
                    added,
                    self.items.len(),
                    self.cursor.has_more
                );
                FetchOutcome::Loaded { added }
            }
            Err(e) => {
                tracing::warn!("ページ{}の取得に失敗: {}", request.page, e);
                self.error = Some(e.to_string());
                FetchOutcome::Failed
            }
        }
    }

    /// 表示リストを再計算して丸ごと置き換える
    pub fn recompute_display(&mut self, spec: &FilterSpec) {
        self.display_items = pipeline::apply(&self.items, spec);
    }

    /// 初期状態に戻す。実行中の要求の応答は以後破棄される
    pub fn reset(&mut self) {
        self.items.clear();
        self.seen_ids.clear();
        self.display_items.clear();
        self.cursor = Cursor::default();
        self.error = None;
        self.generation += 1;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// 既存の順序を保ったまま、未知のidだけを到着順に追加する
    fn merge(&mut self, incoming: Vec<Item>) -> usize {
        let before = self.items.len();
        for item in incoming {
            if self.seen_ids.insert(item.id.clone()) {
                self.items.push(item);
            }
        }
        self.items.len() - before
    }
}
