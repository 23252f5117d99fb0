// src/core/sanitize.rs

/// Table title → file stem: every whitespace run becomes one `_`.
/// "Blue  Skaters" → "Blue_Skaters"
pub fn title_to_file_stem(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut in_ws = false;
    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_ws { out.push('_'); in_ws = true; }
        } else {
            out.push(ch);
            in_ws = false;
        }
    }
    out
}

/// Collapse whitespace runs to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_stems() {
        assert_eq!(title_to_file_stem("Blue Skaters"), "Blue_Skaters");
        assert_eq!(title_to_file_stem("Red \t Goalie"), "Red_Goalie");
        assert_eq!(title_to_file_stem(" Game 1 "), "_Game_1_");
    }

    #[test]
    fn whitespace_collapse() {
        assert_eq!(normalize_ws("  Error   parsing\n x "), "Error parsing x");
    }
}
