//! テスト共通ヘルパー

#![allow(dead_code)]

use closet_store::error::{Result, StoreError};
use closet_store::fetcher::CatalogFetcher;
use closet_store_common::{Item, PricingOption};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// メモリ上のカタログ
pub struct MockCatalog {
    items: Vec<Item>,
    calls: AtomicUsize,
    fail: AtomicBool,
}

impl MockCatalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

impl CatalogFetcher for MockCatalog {
    async fn fetch_all(&self) -> Result<Vec<Item>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::Status(503));
        }
        Ok(self.items.clone())
    }
}

impl CatalogFetcher for &MockCatalog {
    async fn fetch_all(&self) -> Result<Vec<Item>> {
        (**self).fetch_all().await
    }
}

pub fn item(id: &str, option: PricingOption, price: f64, title: &str, creator: &str) -> Item {
    Item {
        id: id.to_string(),
        creator: creator.to_string(),
        title: title.to_string(),
        pricing_option: option,
        image_path: format!("https://example.com/{}.jpg", id),
        price,
    }
}

/// `item-1` から `item-n` までの連番カタログ
pub fn numbered_catalog(n: usize) -> Vec<Item> {
    (1..=n)
        .map(|i| {
            item(
                &format!("item-{}", i),
                PricingOption::Paid,
                i as f64,
                &format!("Item {:02}", i),
                "Creator",
            )
        })
        .collect()
}

/// 価格区分が揃った3件
pub fn three_items() -> Vec<Item> {
    vec![
        item("item-1", PricingOption::Paid, 29.99, "Amazing Outfit", "John Doe"),
        item("item-2", PricingOption::Free, 0.0, "Free Design", "Jane Smith"),
        item("item-3", PricingOption::ViewOnly, 0.0, "View Only Item", "Bob Wilson"),
    ]
}
