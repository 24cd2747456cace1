//! Path/title codec
//!
//! Notes are stored one per file, named after their title. Characters that
//! are unsafe in file names are substituted with bracketed tokens, a leading
//! `.` is escaped so notes never become hidden files, and an optional
//! `~~<n>` suffix distinguishes notes that share a title.
//!
//! `path_to_title(&title_to_path(t)) == t` holds for every non-empty title that does
//! not itself contain one of the bracketed tokens.

/// Extension of every note file
pub const NOTE_EXTENSION: &str = ".txt";

/// Separator between a title and its disambiguation suffix
pub const VERSION_DELIMITER: &str = "~~";

/// Token for a leading `.`
const LEADING_DOT_TOKEN: &str = "(dt)";

/// Title used when a note body has no non-empty line
const UNTITLED: &str = "Untitled";

/// File-name-unsafe characters and their encoded form
const SUBSTITUTIONS: &[(char, &str)] = &[
    ('/', "(sl)"),
    ('\\', "(bs)"),
    (':', "(cl)"),
    ('*', "(as)"),
    ('?', "(qm)"),
    ('"', "(dq)"),
    ('<', "(lt)"),
    ('>', "(gt)"),
    ('|', "(pi)"),
    ('~', "(ti)"),
];

/// Encode a title into a file-name-safe stem (no extension).
pub fn encode_title(title: &str) -> String {
    let mut encoded = String::with_capacity(title.len());
    for (i, ch) in title.chars().enumerate() {
        if i == 0 && ch == '.' {
            encoded.push_str(LEADING_DOT_TOKEN);
            continue;
        }
        match SUBSTITUTIONS.iter().find(|(c, _)| *c == ch) {
            Some((_, token)) => encoded.push_str(token),
            None => encoded.push(ch),
        }
    }
    encoded
}

/// Reverse [`encode_title`].
pub fn decode_title(encoded: &str) -> String {
    let mut decoded = String::with_capacity(encoded.len());
    let mut rest = encoded;

    if let Some(stripped) = rest.strip_prefix(LEADING_DOT_TOKEN) {
        decoded.push('.');
        rest = stripped;
    }

    while let Some(ch) = rest.chars().next() {
        let token = SUBSTITUTIONS
            .iter()
            .find(|(_, token)| rest.starts_with(token));
        if let Some((original, token)) = token {
            decoded.push(*original);
            rest = &rest[token.len()..];
        } else {
            decoded.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    decoded
}

/// Derive the display title from a storage path.
///
/// Takes the last path segment, drops the note extension and a trailing
/// `~~<digits>` suffix, then decodes the substitution tokens.
pub fn path_to_title(path: &str) -> String {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let stem = file_name.strip_suffix(NOTE_EXTENSION).unwrap_or(file_name);
    decode_title(strip_version_suffix(stem))
}

/// Storage path for a title, rooted at `/`.
///
/// An empty title is stored as `Untitled`, never as a bare `.txt`.
pub fn title_to_path(title: &str) -> String {
    format!("/{}{NOTE_EXTENSION}", file_stem(title))
}

/// Storage path for the `version`-th note sharing `title`.
pub fn versioned_title_path(title: &str, version: u32) -> String {
    format!(
        "/{}{VERSION_DELIMITER}{version}{NOTE_EXTENSION}",
        file_stem(title)
    )
}

fn file_stem(title: &str) -> String {
    if title.is_empty() {
        encode_title(UNTITLED)
    } else {
        encode_title(title)
    }
}

/// Title for a note created from free text: its first non-empty line.
pub fn title_from_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or(UNTITLED)
        .to_string()
}

fn strip_version_suffix(stem: &str) -> &str {
    match stem.rsplit_once(VERSION_DELIMITER) {
        Some((base, suffix)) if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) => {
            base
        }
        _ => stem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_title_maps_to_rooted_txt_path() {
        assert_eq!(title_to_path("Groceries"), "/Groceries.txt");
        assert_eq!(path_to_title("/Groceries.txt"), "Groceries");
    }

    #[test]
    fn unsafe_characters_are_substituted() {
        assert_eq!(title_to_path("a/b: c?"), "/a(sl)b(cl) c(qm).txt");
        assert_eq!(path_to_title("/a(sl)b(cl) c(qm).txt"), "a/b: c?");
    }

    #[test]
    fn leading_dot_is_escaped_only_at_start() {
        assert_eq!(encode_title(".hidden.notes"), "(dt)hidden.notes");
        assert_eq!(decode_title("(dt)hidden.notes"), ".hidden.notes");
    }

    #[test]
    fn version_suffix_is_dropped() {
        assert_eq!(path_to_title("/Todo~~3.txt"), "Todo");
        assert_eq!(versioned_title_path("Todo", 3), "/Todo~~3.txt");
    }

    #[test]
    fn non_numeric_suffix_is_kept() {
        assert_eq!(path_to_title("/a~~b.txt"), "a~~b");
    }

    #[test]
    fn only_last_segment_is_used() {
        assert_eq!(path_to_title("/work/2024/Plan.txt"), "Plan");
    }

    #[test]
    fn missing_extension_is_tolerated() {
        assert_eq!(path_to_title("/README"), "README");
    }

    #[test]
    fn encode_then_decode_restores_title() {
        let titles = [
            "simple",
            ".dotfile",
            "..",
            "a/b\\c:d*e?f\"g<h>i|j",
            "tilde~~2",
            "~~",
            "(parens) but no tokens",
            "(s/",
            "ünïcødé / 日本語",
            "trailing.",
        ];
        for title in titles {
            assert_eq!(path_to_title(&title_to_path(title)), title, "title {title:?}");
        }
    }

    #[test]
    fn empty_title_is_stored_as_untitled() {
        assert_eq!(title_to_path(""), "/Untitled.txt");
        assert_eq!(versioned_title_path("", 2), "/Untitled~~2.txt");
        assert_eq!(path_to_title(&title_to_path("")), "Untitled");
    }

    #[test]
    fn title_from_text_uses_first_non_empty_line() {
        assert_eq!(title_from_text("\n\n  Shopping list \nmilk"), "Shopping list");
        assert_eq!(title_from_text("   \n"), "Untitled");
    }
}
