//! Go-flavored case conversion.

/// Convert an identifier to Go camelCase (e.g., "Fetcher" -> "fetcher").
///
/// A leading initialism is lowered as a unit, so "HTTPServer" becomes
/// "httpServer" and "ID" becomes "id", matching how Go code names
/// unexported counterparts of exported identifiers.
pub fn to_go_camel(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let run = chars.iter().take_while(|c| c.is_uppercase()).count();

    match run {
        0 => s.to_string(),
        // Single leading capital: lower just that one.
        1 => chars[0].to_lowercase().chain(chars[1..].iter().copied()).collect(),
        // Whole string is an initialism.
        n if n == chars.len() => s.to_lowercase(),
        // Leading initialism followed by a word: the last capital of the
        // run starts the next word and keeps its case.
        n => {
            let mut out: String = chars[..n - 1].iter().flat_map(|c| c.to_lowercase()).collect();
            out.extend(&chars[n - 1..]);
            out
        }
    }
}

/// Convert an identifier to Go PascalCase (e.g., "fetcher" -> "Fetcher").
pub fn to_go_pascal(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}
