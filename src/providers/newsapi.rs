use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{http_client, EvidenceProvider, ProviderError};
use crate::config::ITEMS_PER_PROVIDER;
use crate::types::EvidenceItem;

const NEWSAPI_URL: &str = "https://newsapi.org/v2/everything";

pub struct NewsApiProvider {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl NewsApiProvider {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            api_key,
            base_url: NEWSAPI_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    status: String,
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Article {
    source: ArticleSource,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticleSource {
    name: Option<String>,
}

#[async_trait]
impl EvidenceProvider for NewsApiProvider {
    fn provider_name(&self) -> &str {
        "newsapi"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn search(&self, query: &str) -> Result<Vec<EvidenceItem>, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::NotConfigured)?;
        let page_size = ITEMS_PER_PROVIDER.to_string();

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("sortBy", "relevancy"),
                ("pageSize", page_size.as_str()),
                ("language", "en"),
                ("apiKey", api_key),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        let body: NewsApiResponse = response.json().await?;
        Ok(articles_to_items(body))
    }
}

fn articles_to_items(body: NewsApiResponse) -> Vec<EvidenceItem> {
    if body.status != "ok" {
        debug!("NewsAPI returned status {}", body.status);
        return Vec::new();
    }

    body.articles
        .into_iter()
        .map(|article| {
            EvidenceItem::new(
                article.source.name.unwrap_or_else(|| "NewsAPI".to_string()),
                article.published_at.unwrap_or_default(),
                article.title.unwrap_or_default(),
            )
            .with_snippet(article.description.unwrap_or_default())
        })
        .collect()
}
