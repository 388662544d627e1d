use urlencoding::encode;

/// Build a percent-encoded query string (`a=1&b=x%20y`) from key-value pairs.
pub fn build_query_string(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_keys_and_values() {
        assert_eq!(build_query_string(&[("text", "a b&c"), ("x", "✓")]), "text=a%20b%26c&x=%E2%9C%93");
        assert_eq!(build_query_string(&[]), "");
    }
}
