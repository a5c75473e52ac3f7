//! カタログ取得
//!
//! APIは `GET <base>/api/data` で全件を順不同で返すだけなので、
//! ページングはクライアント側で行う。

use crate::error::{Result, StoreError};
use closet_store_common::{paginate, Item, Page};
use std::time::Duration;
use url::Url;

/// カタログの取得元
#[allow(async_fn_in_trait)]
pub trait CatalogFetcher {
    /// 全件を取得する
    async fn fetch_all(&self) -> Result<Vec<Item>>;

    /// 全件を取得して `page` ページ目を切り出す
    async fn fetch_page(&self, page: usize, limit: usize) -> Result<Page<Item>> {
        let all_items = self.fetch_all().await?;
        Ok(paginate(&all_items, page, limit))
    }
}

/// HTTP経由の取得
pub struct HttpCatalogFetcher {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpCatalogFetcher {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(&format!("{}/api/data", base_url.trim_end_matches('/')))?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn classify(&self, error: reqwest::Error) -> StoreError {
        if error.is_timeout() {
            StoreError::Timeout(self.timeout.as_secs())
        } else {
            StoreError::Http(error)
        }
    }
}

impl CatalogFetcher for HttpCatalogFetcher {
    async fn fetch_all(&self) -> Result<Vec<Item>> {
        tracing::debug!("GET {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status(status.as_u16()));
        }

        let items: Vec<Item> = response.json().await.map_err(|e| self.classify(e))?;
        tracing::debug!("{}件を取得", items.len());
        Ok(items)
    }
}
