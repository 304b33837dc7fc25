/// Whether a query is worth sending to the search API.
///
/// A bare quote mark makes the API return a degenerate response, and an
/// empty query has nothing to search for.
pub fn is_valid_query(raw: &str) -> bool {
    let query = raw.trim();
    !(query.is_empty() || query == "\"" || query == "'")
}
