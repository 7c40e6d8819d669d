use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::{http_client, EvidenceProvider, ProviderError};
use crate::config::ITEMS_PER_PROVIDER;
use crate::types::EvidenceItem;

const BING_NEWS_URL: &str = "https://api.bing.microsoft.com/v7.0/news/search";

pub struct BingNewsProvider {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl BingNewsProvider {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            api_key,
            base_url: BING_NEWS_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BingResponse {
    #[serde(default)]
    value: Vec<BingArticle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BingArticle {
    name: String,
    #[serde(default)]
    date_published: Option<String>,
    #[serde(default)]
    provider: Vec<BingPublisher>,
}

#[derive(Debug, Deserialize)]
struct BingPublisher {
    name: Option<String>,
}

#[async_trait]
impl EvidenceProvider for BingNewsProvider {
    fn provider_name(&self) -> &str {
        "bing_news"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn search(&self, query: &str) -> Result<Vec<EvidenceItem>, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::NotConfigured)?;
        let count = ITEMS_PER_PROVIDER.to_string();

        let response = self
            .client
            .get(&self.base_url)
            .header("Ocp-Apim-Subscription-Key", api_key)
            .query(&[("q", query), ("count", count.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        let body: BingResponse = response.json().await?;
        Ok(body.value.into_iter().map(article_to_item).collect())
    }
}

fn article_to_item(article: BingArticle) -> EvidenceItem {
    let publisher = article
        .provider
        .into_iter()
        .next()
        .and_then(|p| p.name)
        .unwrap_or_default();

    EvidenceItem::new(
        format!("Bing News/{}", publisher),
        article.date_published.unwrap_or_default(),
        article.name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_label_includes_publisher() {
        let body: BingResponse = serde_json::from_str(
            r#"{"value": [{"name": "Storm hits coast", "datePublished": "2024-10-14T10:00:00.0000000Z",
                           "provider": [{"_type": "Organization", "name": "Reuters"}]}]}"#,
        )
        .unwrap();

        let items: Vec<_> = body.value.into_iter().map(article_to_item).collect();

        assert_eq!(
            items[0].to_string(),
            "[Bing News/Reuters] (2024-10-14T10:00:00.0000000Z): Storm hits coast"
        );
    }
}
