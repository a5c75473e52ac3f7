//! 絞り込み・並べ替え条件
//!
//! 値の変更は必ずここに定義した操作を経由する。価格帯は変更時点で
//! `min <= max` に正規化される。

use crate::types::{PricingOption, SortBy};
use std::collections::BTreeSet;

pub const DEFAULT_PRICE_MIN: i64 = 0;
pub const DEFAULT_PRICE_MAX: i64 = 999;

/// 価格帯（両端を含む）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: i64,
    max: i64,
}

impl PriceRange {
    /// 逆転した境界は入れ替える
    pub fn new(a: i64, b: i64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min as f64 <= price && price <= self.max as f64
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_PRICE_MIN,
            max: DEFAULT_PRICE_MAX,
        }
    }
}

/// ユーザーが指定する絞り込み条件
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pricing_options: BTreeSet<PricingOption>,
    keyword: String,
    price_range: PriceRange,
    sort_by: SortBy,
}

impl FilterSpec {
    pub fn pricing_options(&self) -> &BTreeSet<PricingOption> {
        &self.pricing_options
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn set_pricing_options<I>(&mut self, options: I)
    where
        I: IntoIterator<Item = PricingOption>,
    {
        self.pricing_options = options.into_iter().collect();
    }

    /// 選択済みなら外し、未選択なら加える
    pub fn toggle_pricing_option(&mut self, option: PricingOption) {
        if !self.pricing_options.remove(&option) {
            self.pricing_options.insert(option);
        }
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    pub fn set_price_range(&mut self, a: i64, b: i64) {
        self.price_range = PriceRange::new(a, b);
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
    }

    /// 全条件をデフォルトに戻す
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn with_pricing_options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = PricingOption>,
    {
        self.set_pricing_options(options);
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.set_keyword(keyword);
        self
    }

    pub fn with_price_range(mut self, a: i64, b: i64) -> Self {
        self.set_price_range(a, b);
        self
    }

    pub fn with_sort_by(mut self, sort_by: SortBy) -> Self {
        self.set_sort_by(sort_by);
        self
    }
}
