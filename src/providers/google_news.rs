use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::time::Duration;

use super::{http_client, EvidenceProvider, ProviderError};
use crate::config::ITEMS_PER_PROVIDER;
use crate::types::EvidenceItem;

const RSS_SEARCH_URL: &str = "https://news.google.com/rss/search";

/// Free broad-coverage feed. Needs no credential, so it is always attempted.
pub struct GoogleNewsProvider {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleNewsProvider {
    pub fn new(timeout: Duration) -> Self {
        Self::with_base_url(RSS_SEARCH_URL, timeout)
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl EvidenceProvider for GoogleNewsProvider {
    fn provider_name(&self) -> &str {
        "google_news"
    }

    async fn search(&self, query: &str) -> Result<Vec<EvidenceItem>, ProviderError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", query), ("hl", "en-US"), ("gl", "US"), ("ceid", "US:en")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        parse_rss(&body, ITEMS_PER_PROVIDER)
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Field {
    Title,
    Source,
    PubDate,
}

#[derive(Default)]
struct PartialItem {
    title: Option<String>,
    source: Option<String>,
    pub_date: Option<String>,
}

impl PartialItem {
    fn finish(self, fallback_date: &str) -> EvidenceItem {
        EvidenceItem::new(
            self.source.unwrap_or_else(|| "Google News".to_string()),
            self.pub_date.unwrap_or_else(|| fallback_date.to_string()),
            self.title.unwrap_or_else(|| "No Title".to_string()),
        )
    }

    fn set(&mut self, field: Field, text: String) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Source => &mut self.source,
            Field::PubDate => &mut self.pub_date,
        };
        slot.get_or_insert_with(String::new).push_str(&text);
    }
}

/// Extract `rss/channel/item` entries. Elements outside an `<item>` are ignored.
pub fn parse_rss(xml: &str, limit: usize) -> Result<Vec<EvidenceItem>, ProviderError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let fallback_date = chrono::Utc::now().to_rfc3339();
    let mut items = Vec::new();
    let mut current: Option<PartialItem> = None;
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"item" => current = Some(PartialItem::default()),
                b"title" => field = Some(Field::Title),
                b"source" => field = Some(Field::Source),
                b"pubDate" => field = Some(Field::PubDate),
                _ => field = None,
            },
            Ok(Event::Text(t)) => {
                if let (Some(item), Some(f)) = (current.as_mut(), field) {
                    let text = t
                        .unescape()
                        .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;
                    item.set(f, text.into_owned());
                }
            }
            Ok(Event::CData(c)) => {
                if let (Some(item), Some(f)) = (current.as_mut(), field) {
                    item.set(f, String::from_utf8_lossy(&c.into_inner()).into_owned());
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"item" {
                    if let Some(item) = current.take() {
                        items.push(item.finish(&fallback_date));
                        if items.len() >= limit {
                            break;
                        }
                    }
                }
                field = None;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ProviderError::InvalidResponse(e.to_string())),
            _ => {}
        }
    }

    Ok(items)
}
