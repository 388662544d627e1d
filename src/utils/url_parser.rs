/// Host part of a URL, for display (`https://wa.me/123?x` -> `wa.me`).
pub fn hostname_from_url(u: &str) -> String {
    let s = u.trim();
    let s = match s.find("://") {
        Some(idx) => &s[idx + 3..],
        None => s,
    };
    s.split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scheme_path_and_query() {
        assert_eq!(hostname_from_url("https://wa.me"), "wa.me");
        assert_eq!(hostname_from_url(" https://api.whatsapp.com/send?phone=1 "), "api.whatsapp.com");
        assert_eq!(hostname_from_url("wa.me/62"), "wa.me");
        assert_eq!(hostname_from_url(""), "");
    }
}
