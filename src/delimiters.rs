//! Resolves the raw delimiter configuration string into literal sentence
//! terminators.
//!
//! Malformed or empty input never fails; it falls back to the default set.
//! Resolution order decides which delimiter wins when several match at the
//! same scan position, so the returned order is deterministic for identical
//! input.

/// Delimiters used when the configuration is empty or unusable.
pub const DEFAULT_DELIMITERS: [&str; 3] = [".", "!", "?"];

/// Turns the raw configuration value into an ordered list of literal
/// delimiter strings.
///
/// Rules, in priority order:
/// - empty (after trim) resolves to the default set;
/// - a comma-separated list is split, each part trimmed and escape-decoded,
///   empty parts dropped (an all-empty result falls back to the default set);
/// - a lone escape token (`\n`, `\r`, `\t`, `\\`) decodes to that character;
/// - a multi-character run of punctuation/symbols is treated as one delimiter
///   per character (`".!?"` resolves to `.`, `!`, `?`);
/// - anything else is escape-decoded and used as a single multi-character
///   delimiter (`"[END]"` stays intact).
pub fn resolve(raw: &str) -> Vec<String> {
    let value = raw.trim();

    if value.is_empty() {
        return default_set();
    }

    if value.contains(',') {
        let delimiters: Vec<String> = value
            .split(',')
            .map(|part| decode_escapes(part.trim()))
            .filter(|part| !part.is_empty())
            .collect();
        return if delimiters.is_empty() {
            default_set()
        } else {
            delimiters
        };
    }

    if matches!(value, r"\n" | r"\r" | r"\t" | r"\\") {
        return vec![decode_escapes(value)];
    }

    if value.chars().count() > 1 && value.chars().all(is_symbolic) {
        return value.chars().map(String::from).collect();
    }

    vec![decode_escapes(value)]
}

fn default_set() -> Vec<String> {
    DEFAULT_DELIMITERS.iter().map(|d| d.to_string()).collect()
}

fn is_symbolic(c: char) -> bool {
    !c.is_alphanumeric() && c != '_' && !c.is_whitespace()
}

fn decode_escapes(value: &str) -> String {
    value
        .replace(r"\n", "\n")
        .replace(r"\r", "\r")
        .replace(r"\t", "\t")
        .replace(r"\\", "\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_defaults() {
        assert_eq!(resolve(""), vec![".", "!", "?"]);
        assert_eq!(resolve("   "), vec![".", "!", "?"]);
    }

    #[test]
    fn comma_list_splits_and_trims() {
        assert_eq!(resolve(".,!,?"), vec![".", "!", "?"]);
        assert_eq!(resolve(" . , ! "), vec![".", "!"]);
    }

    #[test]
    fn comma_list_decodes_escapes() {
        assert_eq!(resolve(r"\n,\t"), vec!["\n", "\t"]);
    }

    #[test]
    fn comma_list_of_empties_falls_back() {
        assert_eq!(resolve(",,,"), vec![".", "!", "?"]);
    }

    #[test]
    fn lone_escape_token_decodes() {
        assert_eq!(resolve(r"\n"), vec!["\n"]);
        assert_eq!(resolve(r"\r"), vec!["\r"]);
        assert_eq!(resolve(r"\t"), vec!["\t"]);
        assert_eq!(resolve(r"\\"), vec!["\\"]);
    }

    #[test]
    fn punctuation_run_splits_per_character() {
        assert_eq!(resolve(".!?"), vec![".", "!", "?"]);
        // Duplicates are kept; the segmenter scan is unaffected.
        assert_eq!(resolve("???"), vec!["?", "?", "?"]);
    }

    #[test]
    fn bracketed_token_stays_one_delimiter() {
        assert_eq!(resolve("[END]"), vec!["[END]"]);
    }

    #[test]
    fn word_value_is_a_single_literal_delimiter() {
        assert_eq!(resolve("STOP"), vec!["STOP"]);
    }

    #[test]
    fn resolution_is_deterministic() {
        assert_eq!(resolve(".,!,?"), resolve(".,!,?"));
    }
}
