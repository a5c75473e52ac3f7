use clap::{Parser, Subcommand};
use closet_store_common::{FilterSpec, PricingOption, SortBy};

#[derive(Parser)]
#[command(name = "closet-store")]
#[command(about = "ストアカタログの閲覧・絞り込みツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// カタログを読み込んで絞り込み結果を表示
    List {
        /// 価格区分 (paid/free/view-only, カンマ区切り)
        #[arg(long, value_delimiter = ',')]
        pricing: Vec<PricingArg>,

        /// タイトル・作者のキーワード
        #[arg(short, long)]
        keyword: Option<String>,

        /// 最低価格（PAIDのみに適用）
        #[arg(long)]
        min: Option<i64>,

        /// 最高価格（PAIDのみに適用）
        #[arg(long)]
        max: Option<i64>,

        /// 並び順 (item-name/higher-price/lower-price)
        #[arg(short, long)]
        sort: Option<SortArg>,

        /// 読み込むページ数
        #[arg(short, long, default_value = "1")]
        pages: usize,

        /// 続きがなくなるまで全ページ読み込む
        #[arg(long)]
        all: bool,

        /// 共有URL（クエリから条件を復元）
        #[arg(long)]
        url: Option<String>,
    },

    /// 対話的に閲覧
    Browse {
        /// 共有URL（クエリから条件を復元）
        #[arg(long)]
        url: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// APIのベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 価格区分の指定
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingArg(pub PricingOption);

impl std::str::FromStr for PricingArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paid" | "0" => Ok(PricingArg(PricingOption::Paid)),
            "free" | "1" => Ok(PricingArg(PricingOption::Free)),
            "view-only" | "viewonly" | "view_only" | "2" => Ok(PricingArg(PricingOption::ViewOnly)),
            _ => Err(format!("Unknown pricing option: {}. Use paid, free, or view-only", s)),
        }
    }
}

/// 並び順の指定
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortArg(pub SortBy);

impl std::str::FromStr for SortArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "item-name" | "name" | "itemname" => Ok(SortArg(SortBy::ItemName)),
            "higher-price" | "higher" | "higherprice" => Ok(SortArg(SortBy::HigherPrice)),
            "lower-price" | "lower" | "lowerprice" => Ok(SortArg(SortBy::LowerPrice)),
            _ => Err(format!(
                "Unknown sort: {}. Use item-name, higher-price, or lower-price",
                s
            )),
        }
    }
}

/// `list` の指定を条件に反映する。指定のない項目はURL由来の値を残す
pub fn apply_filter_args(
    spec: &mut FilterSpec,
    pricing: &[PricingArg],
    keyword: Option<&str>,
    min: Option<i64>,
    max: Option<i64>,
    sort: Option<SortArg>,
) {
    if !pricing.is_empty() {
        spec.set_pricing_options(pricing.iter().map(|p| p.0));
    }
    if let Some(keyword) = keyword {
        spec.set_keyword(keyword);
    }
    if min.is_some() || max.is_some() {
        let current = spec.price_range();
        spec.set_price_range(min.unwrap_or(current.min()), max.unwrap_or(current.max()));
    }
    if let Some(sort) = sort {
        spec.set_sort_by(sort.0);
    }
}
