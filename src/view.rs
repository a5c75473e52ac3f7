//! 端末表示用の整形

use crate::store::ItemStore;
use closet_store_common::{FilterSpec, Item, PricingOption, SortBy};

pub fn price_label(item: &Item) -> String {
    match item.pricing_option {
        PricingOption::Paid => format!("${:.2}", item.price),
        PricingOption::Free => "FREE".to_string(),
        PricingOption::ViewOnly => "View Only".to_string(),
    }
}

pub fn format_item(index: usize, item: &Item) -> String {
    format!(
        "{:>4}. {} / {}  [{}]",
        index + 1,
        item.title,
        item.creator,
        price_label(item)
    )
}

pub fn format_filters(spec: &FilterSpec) -> String {
    let pricing = PricingOption::ALL
        .iter()
        .map(|o| {
            let mark = if spec.pricing_options().contains(o) { "x" } else { " " };
            format!("[{}] {}", mark, o.label())
        })
        .collect::<Vec<_>>()
        .join(" ");
    let sort = match spec.sort_by() {
        SortBy::ItemName => "名前順",
        SortBy::HigherPrice => "価格の高い順",
        SortBy::LowerPrice => "価格の安い順",
    };
    let range = spec.price_range();
    format!(
        "価格区分: {} | 価格帯: {}〜{} | キーワード: \"{}\" | 並び順: {}",
        pricing,
        range.min(),
        range.max(),
        spec.keyword(),
        sort
    )
}

pub fn format_status(store: &ItemStore) -> String {
    let cursor = store.cursor();
    let mut status = format!(
        "表示 {}件 / 読み込み済み {}件 (次ページ: {}, {}件ずつ",
        store.display_items().len(),
        store.items().len(),
        cursor.current_page,
        store.page_size()
    );
    if !cursor.has_more {
        status.push_str(", 最後まで読み込み済み");
    }
    status.push(')');
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(option: PricingOption, price: f64) -> Item {
        Item {
            id: "1".to_string(),
            creator: "John Doe".to_string(),
            title: "Amazing Outfit".to_string(),
            pricing_option: option,
            image_path: String::new(),
            price,
        }
    }

    #[test]
    fn test_price_label() {
        assert_eq!(price_label(&item(PricingOption::Paid, 29.9)), "$29.90");
        assert_eq!(price_label(&item(PricingOption::Free, 0.0)), "FREE");
        assert_eq!(price_label(&item(PricingOption::ViewOnly, 0.0)), "View Only");
    }

    #[test]
    fn test_format_item() {
        let line = format_item(0, &item(PricingOption::Paid, 29.99));
        assert_eq!(line, "   1. Amazing Outfit / John Doe  [$29.99]");
    }

    #[test]
    fn test_format_filters_marks_selected_options() {
        let spec = FilterSpec::default()
            .with_pricing_options([PricingOption::Free])
            .with_keyword("coat");
        assert_eq!(
            format_filters(&spec),
            "価格区分: [ ] Paid [x] Free [ ] View Only | 価格帯: 0〜999 | キーワード: \"coat\" | 並び順: 名前順"
        );
    }

    #[test]
    fn test_format_status_initial() {
        let store = ItemStore::new(20);
        assert_eq!(format_status(&store), "表示 0件 / 読み込み済み 0件 (次ページ: 1, 20件ずつ)");
    }
}
