//! カタログ共通型

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 価格区分
///
/// APIとURLではどちらも整数 (`0`=PAID, `1`=FREE, `2`=VIEW_ONLY) で表現される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum PricingOption {
    Paid,
    Free,
    ViewOnly,
}

impl PricingOption {
    pub const ALL: [PricingOption; 3] = [PricingOption::Paid, PricingOption::Free, PricingOption::ViewOnly];

    /// 表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            PricingOption::Paid => "Paid",
            PricingOption::Free => "Free",
            PricingOption::ViewOnly => "View Only",
        }
    }
}

impl TryFrom<i64> for PricingOption {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(PricingOption::Paid),
            1 => Ok(PricingOption::Free),
            2 => Ok(PricingOption::ViewOnly),
            other => Err(Error::InvalidPricingOption(other)),
        }
    }
}

impl From<PricingOption> for i64 {
    fn from(option: PricingOption) -> Self {
        match option {
            PricingOption::Paid => 0,
            PricingOption::Free => 1,
            PricingOption::ViewOnly => 2,
        }
    }
}

/// 並び順
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    /// タイトル昇順（デフォルト）
    #[default]
    ItemName,
    /// 価格の高い順
    HigherPrice,
    /// 価格の安い順
    LowerPrice,
}

impl SortBy {
    /// URLパラメータ上の表記
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::ItemName => "itemName",
            SortBy::HigherPrice => "higherPrice",
            SortBy::LowerPrice => "lowerPrice",
        }
    }
}

impl std::str::FromStr for SortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "itemName" => Ok(SortBy::ItemName),
            "higherPrice" => Ok(SortBy::HigherPrice),
            "lowerPrice" => Ok(SortBy::LowerPrice),
            _ => Err(Error::InvalidSortOption(s.to_string())),
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// カタログアイテム
///
/// `id` が同一性を表す。取得後は変更しない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub creator: String,
    pub title: String,
    pub pricing_option: PricingOption,
    #[serde(default)]
    pub image_path: String,
    #[serde(default)]
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_from_api_json() {
        let json = r#"{
            "id": "item-1",
            "creator": "John Doe",
            "title": "Amazing Outfit",
            "pricingOption": 0,
            "imagePath": "https://example.com/image1.jpg",
            "price": 29.99
        }"#;

        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "item-1");
        assert_eq!(item.pricing_option, PricingOption::Paid);
        assert_eq!(item.price, 29.99);
    }

    #[test]
    fn test_item_unknown_pricing_option() {
        let json = r#"{"id":"x","creator":"c","title":"t","pricingOption":9,"imagePath":"","price":1}"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }

    #[test]
    fn test_pricing_option_serializes_as_integer() {
        let json = serde_json::to_string(&vec![PricingOption::Free, PricingOption::ViewOnly]).unwrap();
        assert_eq!(json, "[1,2]");
    }

    #[test]
    fn test_sort_by_from_str() {
        assert_eq!("higherPrice".parse::<SortBy>().unwrap(), SortBy::HigherPrice);
        assert_eq!("lowerPrice".parse::<SortBy>().unwrap(), SortBy::LowerPrice);
        assert_eq!("itemName".parse::<SortBy>().unwrap(), SortBy::ItemName);
        assert!("HigherPrice".parse::<SortBy>().is_err());
        assert!("".parse::<SortBy>().is_err());
    }
}
