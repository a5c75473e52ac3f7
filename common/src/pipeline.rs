//! 表示リスト生成パイプライン
//!
//! 価格区分 → キーワード → 並べ替え の順で適用する純粋関数。

use crate::filter::FilterSpec;
use crate::types::{Item, PricingOption, SortBy};
use feruca::{Collator, Locale, Tailoring};

/// 蓄積済みアイテムと条件から表示リストを導出する
pub fn apply(items: &[Item], spec: &FilterSpec) -> Vec<Item> {
    let options = spec.pricing_options();
    let range = spec.price_range();
    let keyword = spec.keyword().trim().to_lowercase();

    let mut filtered: Vec<Item> = items
        .iter()
        .filter(|item| {
            if options.is_empty() {
                return true;
            }
            if !options.contains(&item.pricing_option) {
                return false;
            }
            // 価格帯はPAIDのみに適用
            item.pricing_option != PricingOption::Paid || range.contains(item.price)
        })
        .filter(|item| {
            keyword.is_empty()
                || item.title.to_lowercase().contains(&keyword)
                || item.creator.to_lowercase().contains(&keyword)
        })
        .cloned()
        .collect();

    // sort_by は安定ソート
    match spec.sort_by() {
        SortBy::ItemName => {
            let mut collator = title_collator();
            filtered.sort_by(|a, b| collator.collate(a.title.as_str(), b.title.as_str()));
        }
        SortBy::HigherPrice => filtered.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortBy::LowerPrice => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
    }

    filtered
}

/// タイトル用の照合器
///
/// CLDRルート照合。記号は無視せず文字より前に並べ、同じ綴りなら小文字を先にする。
fn title_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn compare_titles(a: &str, b: &str) -> Ordering {
        title_collator().collate(a, b)
    }

    fn item(id: &str, title: &str, price: f64) -> Item {
        Item {
            id: id.to_string(),
            creator: "creator".to_string(),
            title: title.to_string(),
            pricing_option: PricingOption::Paid,
            image_path: String::new(),
            price,
        }
    }

    #[test]
    fn test_title_order_ignores_case() {
        let items = vec![item("1", "banana", 1.0), item("2", "Apple", 1.0), item("3", "cherry", 1.0)];
        let out = apply(&items, &FilterSpec::default());
        let titles: Vec<&str> = out.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_title_lowercase_first_on_same_spelling() {
        assert_eq!(compare_titles("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_titles("Apple", "apple"), Ordering::Greater);
        assert_eq!(compare_titles("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_title_order_handles_accents_and_symbols() {
        let items = vec![
            item("1", "Zebra Coat", 1.0),
            item("2", "Étoile Dress", 1.0),
            item("3", "~Tilde Tee", 1.0),
            item("4", "Apple Hat", 1.0),
            item("5", "eagle Scarf", 1.0),
        ];
        let out = apply(&items, &FilterSpec::default());
        let titles: Vec<&str> = out.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["~Tilde Tee", "Apple Hat", "eagle Scarf", "Étoile Dress", "Zebra Coat"]
        );
    }

    #[test]
    fn test_price_order_is_total() {
        let items = vec![item("a", "A", f64::NAN), item("b", "B", 3.0), item("c", "C", 1.0)];
        let spec = FilterSpec::default().with_sort_by(SortBy::LowerPrice);
        let ids: Vec<String> = apply(&items, &spec).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_higher_price_is_stable() {
        let items = vec![item("a", "A", 5.0), item("b", "B", 10.0), item("c", "C", 5.0)];
        let spec = FilterSpec::default().with_sort_by(SortBy::HigherPrice);
        let ids: Vec<String> = apply(&items, &spec).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_options_skip_price_range() {
        let items = vec![item("a", "A", 5000.0)];
        let spec = FilterSpec::default().with_price_range(0, 10);
        assert_eq!(apply(&items, &spec).len(), 1);
    }

    #[test]
    fn test_whitespace_keyword_is_ignored() {
        let items = vec![item("a", "A", 1.0), item("b", "B", 1.0)];
        let spec = FilterSpec::default().with_keyword("   ");
        assert_eq!(apply(&items, &spec).len(), 2);
    }

    #[test]
    fn test_keyword_is_trimmed() {
        let items = vec![item("a", "Summer Dress", 1.0), item("b", "Winter Coat", 1.0)];
        let spec = FilterSpec::default().with_keyword("  DRESS ");
        let out = apply(&items, &spec);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "a");
    }

    #[test]
    fn test_empty_input() {
        assert!(apply(&[], &FilterSpec::default()).is_empty());
    }
}
