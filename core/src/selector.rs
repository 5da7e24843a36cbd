use itertools::Itertools;

fn is_invalid(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}' || matches!(c, '(' | ')' | '<' | '>' | ':' | '/')
}

/// Turns a token or mode name into a CSS identifier fragment, e.g. `"Mode (Dark)"` becomes
/// `"mode-dark"`.
///
/// Names that start with a digit have every digit moved to the end, so `"123abc"` becomes
/// `"abc123"`.
pub fn sanitize(name: &str) -> String {
    let dashed: String = name
        .chars()
        .map(|c| if is_invalid(c) { '-' } else { c })
        .coalesce(|a, b| {
            if a == '-' && b == '-' {
                Ok('-')
            } else {
                Err((a, b))
            }
        })
        .collect();
    let trimmed = dashed.strip_suffix('-').unwrap_or(&dashed);

    if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        let (numbers, chars): (String, String) =
            trimmed.chars().partition(|c| c.is_ascii_digit());
        (chars + &numbers).to_lowercase()
    } else {
        trimmed.to_lowercase()
    }
}
