use crate::entry::LookupEntry;

/// Remote dictionary search
#[async_trait::async_trait]
pub trait LookupClient: Send + Sync {
    /// Fetch entries matching `query`, in the service's relevance order
    async fn fetch_entries(&self, query: &str) -> Result<Vec<LookupEntry>, LookupError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Response has no data array")]
    MissingData,
}

/// Pull the `data` array out of a raw search response body
pub fn parse_search_response(body: &str) -> Result<Vec<LookupEntry>, LookupError> {
    let mut json: serde_json::Value =
        serde_json::from_str(body).map_err(|e| LookupError::Decode(e.to_string()))?;

    let data = json
        .get_mut("data")
        .filter(|data| data.is_array())
        .map(serde_json::Value::take)
        .ok_or(LookupError::MissingData)?;

    serde_json::from_value(data).map_err(|e| LookupError::Decode(e.to_string()))
}
