// Text helpers shared by the widgets
//
// The typed buffer is edited by char index; matching is case-insensitive per
// char so that the ghost suffix can be sliced out of the original candidate.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Convert a char-index to its byte offset in `s`.
pub(crate) fn char_to_byte_offset(s: &str, char_pos: usize) -> usize {
    s.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive equality
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| chars_eq_ignore_case(x, y))
}

/// If `candidate` starts with `prefix` (case-insensitive) and is strictly
/// longer, return the remaining suffix of `candidate`.
pub fn completion_suffix<'a>(candidate: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return None;
    }
    let mut cand = candidate.char_indices();
    for p in prefix.chars() {
        match cand.next() {
            Some((_, c)) if chars_eq_ignore_case(c, p) => {}
            _ => return None,
        }
    }
    match cand.next() {
        Some((byte, _)) => Some(&candidate[byte..]),
        None => None,
    }
}

/// Display width of `s` in terminal columns
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate `s` to at most `max_width` columns, ending with `…` when cut
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Fill the `%s` placeholder of a label template
pub fn fill_template(template: &str, value: &str) -> String {
    if template.contains("%s") {
        template.replacen("%s", value, 1)
    } else {
        format!("{}{}", template, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Requires-Review", "REQ"));
        assert!(contains_ignore_case("bug", ""));
        assert!(!contains_ignore_case("bug", "feat"));
    }

    #[test]
    fn test_completion_suffix() {
        assert_eq!(completion_suffix("requires-review", "req"), Some("uires-review"));
        assert_eq!(completion_suffix("Requires-Review", "rEQ"), Some("uires-Review"));
        assert_eq!(completion_suffix("bug", "bug"), None);
        assert_eq!(completion_suffix("debug", "bug"), None);
        assert_eq!(completion_suffix("bug", ""), None);
    }

    #[test]
    fn test_completion_suffix_multibyte() {
        assert_eq!(completion_suffix("héllo", "HÉ"), Some("llo"));
    }

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("Backend", "backend"));
        assert!(!eq_ignore_case("backend", "backends"));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("requires-review", 6), "requi…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_fill_template() {
        assert_eq!(fill_template("New: %s", "req"), "New: req");
        assert_eq!(fill_template("Create ", "req"), "Create req");
    }

    #[test]
    fn test_char_to_byte_offset() {
        assert_eq!(char_to_byte_offset("héllo", 2), 3);
        assert_eq!(char_to_byte_offset("abc", 10), 3);
    }
}
