use jisho_config::{Config, MAX_NUM_RESULTS};

use crate::feedback::{FeedbackError, FeedbackSink};
use crate::format::to_display_item;
use crate::lookup::{LookupClient, LookupError};
use crate::query::is_valid_query;
use crate::types::{DisplayItem, Icon};

pub const RETRIEVAL_ERROR_TITLE: &str = "There was an issue retrieving Jisho results";
pub const UPDATE_TITLE: &str = "A newer version of Jisho Alfred Workflow is available";
pub const UPDATE_SUBTITLE: &str = "Action this item to download and install the new version";
pub const UPDATE_AUTOCOMPLETE: &str = "workflow:update";

/// Look up `query` and map up to `max_results` entries.
///
/// Invalid queries produce an empty list without touching the client.
pub async fn search<C>(
    client: &C,
    query: &str,
    max_results: usize,
) -> Result<Vec<DisplayItem>, LookupError>
where
    C: LookupClient + ?Sized,
{
    if !is_valid_query(query) {
        tracing::debug!("Skipping lookup for invalid query {query:?}");
        return Ok(Vec::new());
    }

    let entries = client.fetch_entries(query).await?;
    tracing::debug!("Lookup for {query:?} returned {} entries", entries.len());

    let items = entries
        .iter()
        .take(max_results)
        .filter_map(|entry| {
            let item = to_display_item(entry);
            if item.is_none() {
                tracing::debug!("Skipping entry without word or reading: {:?}", entry.slug);
            }
            item
        })
        .collect();

    Ok(items)
}

/// Like [`search`], but always returns at least one row.
///
/// An empty result becomes a "not found" note, a lookup failure becomes a
/// generic error row. Both carry the raw query as their argument.
pub async fn build_results<C>(client: &C, query: &str, max_results: usize) -> Vec<DisplayItem>
where
    C: LookupClient + ?Sized,
{
    match search(client, query, max_results).await {
        Ok(items) if items.is_empty() => vec![not_found_item(query)],
        Ok(items) => items,
        Err(e) => {
            tracing::error!("Lookup for {query:?} failed: {e}");
            vec![retrieval_error_item(query)]
        }
    }
}

pub fn not_found_item(query: &str) -> DisplayItem {
    DisplayItem::new(format!("Could not find anything matching '{query}'"), Icon::Note)
        .arg(query)
        .valid(true)
}

pub fn retrieval_error_item(query: &str) -> DisplayItem {
    DisplayItem::new(RETRIEVAL_ERROR_TITLE, Icon::Error)
        .arg(query)
        .valid(true)
}

/// Row announcing a newer workflow version; actioning it triggers the update
pub fn update_notice_item() -> DisplayItem {
    DisplayItem::new(UPDATE_TITLE, Icon::Info)
        .subtitle(UPDATE_SUBTITLE)
        .autocomplete(UPDATE_AUTOCOMPLETE)
        .valid(false)
}

/// One script filter run: lookup, shape, send
pub struct Workflow<C, S> {
    client: C,
    sink: S,
    max_results: usize,
}

impl<C: LookupClient, S: FeedbackSink> Workflow<C, S> {
    pub fn new(client: C, sink: S) -> Self {
        Self {
            client,
            sink,
            max_results: MAX_NUM_RESULTS,
        }
    }

    pub fn with_config(client: C, sink: S, config: &Config) -> Self {
        Self::new(client, sink).max_results(config.max_results)
    }

    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Build the result list for `query` and send it to the sink once.
    ///
    /// A missing query is treated as empty.
    pub async fn run(
        &mut self,
        query: Option<&str>,
        update_available: bool,
    ) -> Result<Vec<DisplayItem>, FeedbackError> {
        let query = query.unwrap_or_default();

        let mut items = Vec::new();
        if update_available {
            tracing::info!("Workflow update available");
            items.push(update_notice_item());
        }
        items.extend(build_results(&self.client, query, self.max_results).await);

        self.sink.send(&items)?;
        Ok(items)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
