//! Lazy pagination over `Link: <...>; rel="next"` headers.

use std::pin::Pin;
use std::sync::Arc;

use async_stream::try_stream;
use futures::Stream;
use reqwest::header::{HeaderMap, LINK};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::ClientError;
use crate::params::QueryParams;
use crate::session::{read_json, RestSession};

/// Items of a paginated list, fetched one page at a time as the stream is polled.
pub type ItemStream<T> = Pin<Box<dyn Stream<Item = Result<T, ClientError>> + Send>>;

impl RestSession {
    /// Stream the `item_key` array of every page starting at `url`.
    ///
    /// Nothing is requested until the stream is first polled. The next page is
    /// only requested once every item of the current page was yielded, and its
    /// URL is used exactly as the server sent it.
    pub fn follow_pagination<T>(
        self: &Arc<Self>,
        url: String,
        params: QueryParams,
        item_key: &'static str,
    ) -> ItemStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let session = Arc::clone(self);
        into_item_stream(try_stream! {
            let mut next = Some((url, params));
            let mut page = 0u32;
            while let Some((url, params)) = next.take() {
                page += 1;
                debug!(%url, page, item_key, "Fetching page");
                let resp = session.execute(Method::GET, &url, &params, None, "application/json").await?;
                let next_url = next_link(resp.headers());
                let body = read_json(resp).await?;
                let items = body.and_then(|mut body| body.get_mut(item_key).map(Value::take));
                if let Some(items) = items {
                    let items: Vec<T> = serde_json::from_value(items)?;
                    for item in items {
                        yield item;
                    }
                }
                next = next_url.map(|url| (url, QueryParams::new()));
            }
        })
    }
}

fn into_item_stream<T, S>(stream: S) -> ItemStream<T>
where
    S: Stream<Item = Result<T, ClientError>> + Send + 'static,
{
    Box::pin(stream)
}

/// URL of the `rel="next"` entry in any `Link` header.
pub(crate) fn next_link(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(parse_next_link)
}

fn parse_next_link(value: &str) -> Option<String> {
    let mut rest = value;
    while let Some(start) = rest.find('<') {
        let end = start + rest[start..].find('>')?;
        let target = &rest[start + 1..end];
        let after = &rest[end + 1..];
        let attrs_end = after.find('<').unwrap_or(after.len());
        if after[..attrs_end].split(';').any(is_rel_next) {
            return Some(target.to_string());
        }
        rest = &after[attrs_end..];
    }
    None
}

fn is_rel_next(attr: &str) -> bool {
    let attr = attr.trim().trim_end_matches(',').trim();
    attr.strip_prefix("rel=")
        .map(|rel| rel.trim_matches('"').split_whitespace().any(|r| r.eq_ignore_ascii_case("next")))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_single_next_link() {
        let link = r#"<https://webexapis.com/v1/people?max=2&cursor=abc>; rel="next""#;
        assert_eq!(
            parse_next_link(link).as_deref(),
            Some("https://webexapis.com/v1/people?max=2&cursor=abc")
        );
    }

    #[test]
    fn test_next_among_other_relations() {
        let link = concat!(
            r#"<https://webexapis.com/v1/locations?start=0>; rel="first", "#,
            r#"<https://webexapis.com/v1/locations?start=100&ids=a,b>; rel="next""#,
        );
        assert_eq!(
            parse_next_link(link).as_deref(),
            Some("https://webexapis.com/v1/locations?start=100&ids=a,b")
        );
    }

    #[test]
    fn test_no_next_relation() {
        assert_eq!(parse_next_link(r#"<https://x/y?start=0>; rel="prev""#), None);
        assert_eq!(parse_next_link(""), None);
    }

    #[test]
    fn test_next_link_from_headers() {
        let mut headers = HeaderMap::new();
        headers.append(LINK, HeaderValue::from_static(r#"<https://x/a?p=1>; rel="prev""#));
        headers.append(LINK, HeaderValue::from_static(r#"<https://x/a?p=3>; rel="next""#));
        assert_eq!(next_link(&headers).as_deref(), Some("https://x/a?p=3"));
    }
}
