//! 対話式閲覧モジュール
//!
//! Enterで次ページを読み込み（スクロール相当）、コマンドで条件を変更する。

use crate::error::{Result, StoreError};
use crate::fetcher::CatalogFetcher;
use crate::session::Storefront;
use crate::store::FetchOutcome;
use crate::view;
use closet_store_common::{PricingOption, SortBy};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 対話アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    /// 次ページを読み込む
    More,
    /// キーワードを設定（空なら解除）
    Keyword(String),
    /// 価格区分を切り替え
    TogglePricing(PricingOption),
    /// 価格帯を設定
    PriceRange(i64, i64),
    /// 並び順を設定
    Sort(SortBy),
    /// 条件をリセット
    ResetFilters,
    /// 1ページ目から読み込み直す
    Reload,
    /// 共有URLを表示
    ShowUrl,
    /// 終了
    Quit,
}

const HELP: &str = "操作: [Enter]続きを読み込む [k 語]キーワード [p paid|free|view]区分切替 \
[r 最低 最高]価格帯 [s name|higher|lower]並び順 [x]条件リセット [l]再読み込み [u]URL [q]終了";

/// 入力行をアクションに変換
pub fn parse_browse_command(input: &str) -> std::result::Result<BrowseAction, String> {
    let trimmed = input.trim();
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (trimmed, ""),
    };

    match command {
        "" | "m" => Ok(BrowseAction::More),
        "k" => Ok(BrowseAction::Keyword(rest.to_string())),
        "p" => match rest.to_lowercase().as_str() {
            "paid" => Ok(BrowseAction::TogglePricing(PricingOption::Paid)),
            "free" => Ok(BrowseAction::TogglePricing(PricingOption::Free)),
            "view" | "view-only" => Ok(BrowseAction::TogglePricing(PricingOption::ViewOnly)),
            _ => Err(format!("不明な価格区分: {}", rest)),
        },
        "r" => {
            let bounds: Vec<i64> = rest
                .split_whitespace()
                .map(|v| v.parse::<i64>())
                .collect::<std::result::Result<_, _>>()
                .map_err(|_| format!("価格帯は整数2つで指定してください: {}", rest))?;
            match bounds.as_slice() {
                [a, b] => Ok(BrowseAction::PriceRange(*a, *b)),
                _ => Err(format!("価格帯は整数2つで指定してください: {}", rest)),
            }
        }
        "s" => match rest.to_lowercase().as_str() {
            "name" => Ok(BrowseAction::Sort(SortBy::ItemName)),
            "higher" => Ok(BrowseAction::Sort(SortBy::HigherPrice)),
            "lower" => Ok(BrowseAction::Sort(SortBy::LowerPrice)),
            _ => Err(format!("不明な並び順: {}", rest)),
        },
        "x" => Ok(BrowseAction::ResetFilters),
        "l" => Ok(BrowseAction::Reload),
        "u" => Ok(BrowseAction::ShowUrl),
        "q" | "Q" => Ok(BrowseAction::Quit),
        other => Err(format!("不明なコマンド: {}", other)),
    }
}

/// スピナーを出しながら次ページを読み込む
pub async fn load_next_page<F: CatalogFetcher>(storefront: &mut Storefront<F>) -> FetchOutcome {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!(
        "ページ{}を読み込み中...",
        storefront.store().cursor().current_page
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = storefront.proximity_reached().await;
    spinner.finish_and_clear();

    match outcome {
        FetchOutcome::Loaded { added } => println!("✔ {}件を追加", added),
        FetchOutcome::Failed => {
            let message = storefront.store().error().unwrap_or("不明なエラー");
            println!("✖ 読み込みに失敗しました: {}", message);
        }
        FetchOutcome::Skipped if !storefront.store().cursor().has_more => {
            println!("これ以上アイテムはありません");
        }
        FetchOutcome::Skipped | FetchOutcome::Stale => {}
    }
    outcome
}

pub fn print_display_list<F: CatalogFetcher>(storefront: &Storefront<F>) {
    for (i, item) in storefront.display_items().iter().enumerate() {
        println!("{}", view::format_item(i, item));
    }
    println!("---");
    println!("{}", view::format_filters(storefront.filters()));
    println!("{}", view::format_status(storefront.store()));
}

/// 対話式で閲覧
pub async fn run_interactive_browse<F: CatalogFetcher>(storefront: &mut Storefront<F>) -> Result<()> {
    println!("{}\n", HELP);

    load_next_page(storefront).await;
    print_display_list(storefront);

    loop {
        let input: String = Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| StoreError::CliExecution(e.to_string()))?;

        let action = match parse_browse_command(&input) {
            Ok(action) => action,
            Err(message) => {
                println!("{}\n{}", message, HELP);
                continue;
            }
        };

        match action {
            BrowseAction::More => {
                load_next_page(storefront).await;
            }
            BrowseAction::Keyword(keyword) => storefront.update_filters(|spec| spec.set_keyword(keyword)),
            BrowseAction::TogglePricing(option) => {
                storefront.update_filters(|spec| spec.toggle_pricing_option(option))
            }
            BrowseAction::PriceRange(a, b) => storefront.update_filters(|spec| spec.set_price_range(a, b)),
            BrowseAction::Sort(sort_by) => storefront.update_filters(|spec| spec.set_sort_by(sort_by)),
            BrowseAction::ResetFilters => storefront.reset_filters(),
            BrowseAction::Reload => {
                storefront.reload();
                load_next_page(storefront).await;
            }
            BrowseAction::ShowUrl => {
                println!("{}", storefront.location());
                continue;
            }
            BrowseAction::Quit => break,
        }

        print_display_list(storefront);
    }

    println!("共有URL: {}", storefront.location());
    Ok(())
}
