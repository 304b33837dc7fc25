use std::time::Duration;

use async_trait::async_trait;
use encoding_rs::{Encoding, UTF_8};
use jisho_config::api::ApiConfig;
use jisho_core::lookup::parse_search_response;
use jisho_core::{LookupClient, LookupEntry, LookupError};

/// Jisho.org word search over HTTP
#[derive(Clone)]
pub struct JishoClient {
    client: reqwest::Client,
    api_url: String,
}

impl JishoClient {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            api_url: config.url.clone(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl LookupClient for JishoClient {
    async fn fetch_entries(&self, query: &str) -> Result<Vec<LookupEntry>, LookupError> {
        tracing::debug!("GET {} keyword={query:?}", self.api_url);

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("keyword", query)])
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let body = decode_body(&bytes, content_type.as_deref())?;

        let entries = parse_search_response(&body)?;
        tracing::info!("Jisho returned {} entries for {query:?}", entries.len());
        Ok(entries)
    }
}

/// `charset` parameter of a Content-Type value
fn charset(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

/// Strictly decode a response body with its declared charset, UTF-8 when
/// none is declared. Malformed bytes or an unknown charset are errors.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> Result<String, LookupError> {
    let encoding = match content_type.and_then(charset) {
        Some(label) => Encoding::for_label(label.as_bytes())
            .ok_or_else(|| LookupError::Decode(format!("Unknown charset {label:?}")))?,
        None => UTF_8,
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| LookupError::Decode(format!("Body is not valid {}", encoding.name())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_param() {
        assert_eq!(charset("application/json; charset=utf-8"), Some("utf-8"));
        assert_eq!(charset("text/html;Charset=\"Shift_JIS\""), Some("Shift_JIS"));
        assert_eq!(charset("application/json"), None);
        assert_eq!(charset("application/json; boundary=x"), None);
    }

    #[test]
    fn test_decode_defaults_to_utf8() {
        assert_eq!(decode_body("ねこ".as_bytes(), None).unwrap(), "ねこ");
        assert_eq!(
            decode_body("ねこ".as_bytes(), Some("application/json")).unwrap(),
            "ねこ"
        );
    }

    #[test]
    fn test_decode_declared_charset() {
        assert_eq!(
            decode_body(b"caf\xE9", Some("application/json; charset=iso-8859-1")).unwrap(),
            "café"
        );
    }

    #[test]
    fn test_decode_rejects_malformed_bytes() {
        assert!(matches!(
            decode_body(b"x\xFF", None),
            Err(LookupError::Decode(_))
        ));
        assert!(matches!(
            decode_body(b"x\xFF", Some("application/json; charset=utf-8")),
            Err(LookupError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_rejects_unknown_charset() {
        assert!(matches!(
            decode_body(b"{}", Some("application/json; charset=klingon")),
            Err(LookupError::Decode(_))
        ));
    }
}
