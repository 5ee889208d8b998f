/// Split a comma separated list of saved query URLs.
///
/// Surrounding spaces are trimmed from each entry. Nothing else is checked:
/// an empty input yields a single empty entry, and malformed URLs are left
/// for the HTTP request to reject.
pub fn parse_query_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|url| url.trim_matches(' ').to_string())
        .collect()
}
