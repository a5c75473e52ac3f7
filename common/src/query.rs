//! URLクエリとの相互変換
//!
//! 共有・ブックマーク可能なURLに絞り込み条件を保存する。
//! 読み込み時の不正な値はフィールド単位で無視し、ログのみ出す。

use crate::error::{Error, Result};
use crate::filter::{FilterSpec, PriceRange};
use crate::types::{PricingOption, SortBy};
use url::Url;

pub const PARAM_PRICING: &str = "pricing";
pub const PARAM_KEYWORD: &str = "keyword";
pub const PARAM_SORT_BY: &str = "sortBy";
pub const PARAM_PRICE_MIN: &str = "priceMin";
pub const PARAM_PRICE_MAX: &str = "priceMax";

const FILTER_PARAMS: [&str; 5] = [
    PARAM_PRICING,
    PARAM_KEYWORD,
    PARAM_SORT_BY,
    PARAM_PRICE_MIN,
    PARAM_PRICE_MAX,
];

/// URLから絞り込み条件を復元する
pub fn load_filters(url: &Url) -> FilterSpec {
    parse_query(url.query().unwrap_or(""))
}

/// クエリ文字列（先頭の`?`は不要）から絞り込み条件を復元する
pub fn parse_query(query: &str) -> FilterSpec {
    let params: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    let mut spec = FilterSpec::default();

    if let Some(raw) = first_value(&params, PARAM_PRICING).filter(|v| !v.is_empty()) {
        match parse_pricing(raw) {
            Ok(options) => spec.set_pricing_options(options),
            Err(e) => tracing::warn!("URLのpricingを解析できません ({raw}): {e}"),
        }
    }

    if let Some(keyword) = first_value(&params, PARAM_KEYWORD).filter(|v| !v.is_empty()) {
        spec.set_keyword(keyword);
    }

    if let Some(raw) = first_value(&params, PARAM_SORT_BY) {
        match raw.parse::<SortBy>() {
            Ok(sort_by) => spec.set_sort_by(sort_by),
            Err(e) => tracing::warn!("URLのsortByを無視します: {e}"),
        }
    }

    let min = first_value(&params, PARAM_PRICE_MIN);
    let max = first_value(&params, PARAM_PRICE_MAX);
    if min.is_some() || max.is_some() {
        match parse_price_bounds(min, max) {
            Ok((min, max)) => spec.set_price_range(min, max),
            Err(e) => tracing::warn!("URLの価格帯を無視します: {e}"),
        }
    }

    spec
}

/// 既存のURLを書き換えて絞り込み条件を保存する
///
/// 無関係なパラメータやパスはそのまま残す。デフォルト値のフィールドは書き出さない。
pub fn save_filters(url: &mut Url, spec: &FilterSpec) {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| !FILTER_PARAMS.contains(&k.as_ref()))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    pairs.extend(
        filter_pairs(spec)
            .into_iter()
            .map(|(k, v)| (k.to_string(), v)),
    );

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
}

/// 絞り込み条件だけからなるクエリ文字列
pub fn to_query(spec: &FilterSpec) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(filter_pairs(spec))
        .finish()
}

fn filter_pairs(spec: &FilterSpec) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();

    if !spec.pricing_options().is_empty() {
        let codes: Vec<String> = spec
            .pricing_options()
            .iter()
            .map(|&o| i64::from(o).to_string())
            .collect();
        pairs.push((PARAM_PRICING, format!("[{}]", codes.join(","))));
    }

    if !spec.keyword().is_empty() {
        pairs.push((PARAM_KEYWORD, spec.keyword().to_string()));
    }

    if spec.sort_by() != SortBy::default() {
        pairs.push((PARAM_SORT_BY, spec.sort_by().as_str().to_string()));
    }

    let range = spec.price_range();
    if range != PriceRange::default() {
        pairs.push((PARAM_PRICE_MIN, range.min().to_string()));
        pairs.push((PARAM_PRICE_MAX, range.max().to_string()));
    }

    pairs
}

fn first_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn parse_pricing(raw: &str) -> Result<Vec<PricingOption>> {
    Ok(serde_json::from_str(raw)?)
}

fn parse_price_bounds(min: Option<&str>, max: Option<&str>) -> Result<(i64, i64)> {
    let (Some(min), Some(max)) = (min, max) else {
        return Err(Error::Query("priceMinとpriceMaxは両方必要です".into()));
    };
    let parse = |name: &str, raw: &str| {
        raw.trim()
            .parse::<i64>()
            .map_err(|_| Error::Query(format!("{name}が整数ではありません: {raw}")))
    };
    Ok((parse(PARAM_PRICE_MIN, min)?, parse(PARAM_PRICE_MAX, max)?))
}
