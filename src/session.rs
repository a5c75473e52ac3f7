//! ストアフロントのセッション
//!
//! 絞り込み条件とアイテムストアを独立に保持し、利用側へはこの型を通して渡す。
//! 条件を変えるたびに表示リストを再計算し、URLを書き換える。

use crate::fetcher::CatalogFetcher;
use crate::scroll::{ScrollTrigger, Viewport};
use crate::store::{FetchOutcome, ItemStore};
use closet_store_common::{load_filters, save_filters, FilterSpec, Item};
use url::Url;

pub struct Storefront<F> {
    fetcher: F,
    filters: FilterSpec,
    store: ItemStore,
    location: Url,
    trigger: ScrollTrigger,
}

impl<F: CatalogFetcher> Storefront<F> {
    /// `location` のクエリから条件を読み込んで開始する
    pub fn open(fetcher: F, location: Url, page_size: usize) -> Self {
        let filters = load_filters(&location);
        let mut storefront = Self {
            fetcher,
            filters,
            store: ItemStore::new(page_size),
            location,
            trigger: ScrollTrigger::default(),
        };
        storefront.refresh();
        storefront
    }

    pub fn with_trigger(mut self, trigger: ScrollTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn display_items(&self) -> &[Item] {
        self.store.display_items()
    }

    /// 共有用のURL
    pub fn location(&self) -> &Url {
        &self.location
    }

    /// 番兵に近づいたときのイベント
    pub async fn proximity_reached(&mut self) -> FetchOutcome {
        self.store
            .request_next_page(&self.fetcher, &self.filters)
            .await
    }

    /// スクロール位置を通知する。番兵が遠ければ何もしない
    pub async fn on_scroll(&mut self, viewport: Viewport, sentinel_top: f64) -> FetchOutcome {
        if !self.trigger.proximity_reached(viewport, sentinel_top) {
            return FetchOutcome::Skipped;
        }
        self.proximity_reached().await
    }

    /// 条件を変更する
    pub fn update_filters(&mut self, mutate: impl FnOnce(&mut FilterSpec)) {
        mutate(&mut self.filters);
        self.refresh();
    }

    pub fn reset_filters(&mut self) {
        self.update_filters(FilterSpec::reset);
    }

    /// 蓄積済みアイテムを捨てて1ページ目からやり直す
    pub fn reload(&mut self) {
        self.store.reset();
        self.store.recompute_display(&self.filters);
    }

    pub fn clear_error(&mut self) {
        self.store.clear_error();
    }

    fn refresh(&mut self) {
        self.store.recompute_display(&self.filters);
        save_filters(&mut self.location, &self.filters);
    }
}
