/*! Page id (`cur_id`) lookup through the MediaWiki API.

Dump fragments already carry the page id, this is for titles found elsewhere (link targets, for example).

```text
GET https://ko.wikipedia.org/w/api.php?action=query&format=json&titles=노벨 평화상
{"batchcomplete":"","query":{"pages":{"14436":{"pageid":14436,"ns":0,"title":"노벨 평화상"}}}}
```

Missing pages get a negative key (`"-1"`), which is returned as is.
!*/
use log::debug;
use reqwest::Url;
use serde_json::Value;

use crate::error::Error;

pub const DEFAULT_LANG: &str = "ko";

pub struct CurIdLookup {
    endpoint: Url,
    client: reqwest::blocking::Client,
}

impl CurIdLookup {
    /// Lookup against `https://{lang}.wikipedia.org/w/api.php`.
    pub fn new(lang: &str) -> Result<Self, Error> {
        Self::with_endpoint(&format!("https://{}.wikipedia.org/w/api.php", lang))
    }

    pub fn with_endpoint(endpoint: &str) -> Result<Self, Error> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            client: reqwest::blocking::Client::new(),
        })
    }

    /// Build the query url for a given title.
    pub fn query_url(&self, title: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("format", "json")
            .append_pair("titles", title);
        url
    }

    /// Get the page id of `title`.
    pub fn cur_id(&self, title: &str) -> Result<String, Error> {
        let url = self.query_url(title);
        debug!("querying {}", url);
        let body = self.client.get(url).send()?.error_for_status()?.text()?;
        parse_response(&body)
    }
}

/// Extract the first page id of a `action=query` response.
pub fn parse_response(body: &str) -> Result<String, Error> {
    let value: Value = serde_json::from_str(body)?;
    let pages = value
        .get("query")
        .and_then(|q| q.get("pages"))
        .and_then(Value::as_object)
        .ok_or_else(|| Error::Lookup(format!("no query.pages in response: {}", body)))?;

    pages
        .keys()
        .next()
        .cloned()
        .ok_or_else(|| Error::Lookup("empty query.pages".to_string()))
}
