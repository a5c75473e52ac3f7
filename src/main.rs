use clap::Parser;
use closet_store::{browse, cli, config, error, fetcher, session, store};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use fetcher::HttpCatalogFetcher;
use session::Storefront;
use std::time::Duration;
use store::FetchOutcome;
use tracing_subscriber::EnvFilter;
use url::Url;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::List { pricing, keyword, min, max, sort, pages, all, url } => {
            println!("🛍  closet-store - カタログ一覧\n");

            let mut storefront = open_storefront(&config, url.as_deref())?;
            storefront.update_filters(|spec| {
                cli::apply_filter_args(spec, &pricing, keyword.as_deref(), min, max, sort)
            });

            let mut loaded = 0;
            while all || loaded < pages {
                match browse::load_next_page(&mut storefront).await {
                    FetchOutcome::Loaded { .. } => loaded += 1,
                    FetchOutcome::Failed | FetchOutcome::Skipped | FetchOutcome::Stale => break,
                }
            }

            println!();
            browse::print_display_list(&storefront);
            println!("\n共有URL: {}", storefront.location());
        }

        Commands::Browse { url } => {
            println!("🛍  closet-store - 対話式閲覧\n");

            let mut storefront = open_storefront(&config, url.as_deref())?;
            browse::run_interactive_browse(&mut storefront).await?;
        }

        Commands::Config { set_base_url, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ ベースURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  ベースURL: {}", config.base_url);
                println!("  共有URL: {}", config.storefront_url);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  ページサイズ: {}", config.page_size);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_storefront(config: &Config, url: Option<&str>) -> Result<Storefront<HttpCatalogFetcher>> {
    let location = Url::parse(url.unwrap_or(&config.storefront_url))?;
    let fetcher = HttpCatalogFetcher::new(
        &config.base_url,
        Duration::from_secs(config.timeout_seconds),
    )?;
    Ok(Storefront::open(fetcher, location, config.page_size))
}
