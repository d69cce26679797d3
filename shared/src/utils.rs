use crate::errors::UtilError;
use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_\s-]").expect("slug filter regex is valid"));
static SLUG_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("slug separator regex is valid"));
static EDGE_HYPHENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-+|-+$").expect("slug trim regex is valid"));

const ELLIPSIS: &str = "...";
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2024-01-02T03:04:05.678Z`.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses any RFC 3339 timestamp back into UTC.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, UtilError> {
    DateTime::parse_from_rfc3339(input)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|source| UtilError::InvalidDate {
            input: input.to_string(),
            source,
        })
}

/// Short, lowercase alphanumeric id: a random base-36 segment followed by the
/// current Unix time in milliseconds, also base 36.
///
/// Collisions are unlikely but not impossible; do not use it for secrets.
pub fn generate_id() -> String {
    let random: u64 = rand::thread_rng().r#gen();
    let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();

    let mut id = to_base36(random);
    id.push_str(&to_base36(millis));
    id
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let filtered = NON_SLUG_CHARS.replace_all(&lowered, "");
    let joined = SLUG_SEPARATORS.replace_all(&filtered, "-");
    EDGE_HYPHENS.replace_all(&joined, "").into_owned()
}

/// Shortens `text` to at most `max_length` characters, marking the cut with `...`.
///
/// Lengths are counted in `char`s and the result never exceeds `max_length`.
/// When `max_length` is smaller than the ellipsis itself only the first
/// `max_length` dots are returned; a plain `substring(0, n - 3) + "..."`
/// would clamp to `"..."` there and overshoot the limit.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    match max_length.checked_sub(ELLIPSIS.len()) {
        Some(keep) => text.chars().take(keep).chain(ELLIPSIS.chars()).collect(),
        None => ELLIPSIS[..max_length].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::collections::HashSet;

    #[test]
    fn format_date_matches_iso_millis() {
        let date = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap() + Duration::milliseconds(678);
        assert_eq!(format_date(date), "2024-01-02T03:04:05.678Z");
    }

    #[test]
    fn format_date_round_trips() {
        let base = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap();
        for millis in [0, 1, 999, 86_400_000, 1_234_567_890] {
            let date = base + Duration::milliseconds(millis);
            assert_eq!(parse_date(&format_date(date)).unwrap(), date);
        }
    }

    #[test]
    fn parse_date_accepts_offsets_and_rejects_garbage() {
        let parsed = parse_date("2024-06-01T10:00:00+02:00").unwrap();
        assert_eq!(format_date(parsed), "2024-06-01T08:00:00.000Z");

        let err = parse_date("yesterday").unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn generate_id_is_lowercase_alphanumeric() {
        let id = generate_id();
        assert!(!id.is_empty());
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn generate_id_does_not_repeat_back_to_back() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn base36_encodes_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(u64::MAX), "3w5e11264sgsf");
    }

    #[test]
    fn slugify_examples() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust_is -- fun  "), "rust-is-fun");
        assert_eq!(slugify("---Already-Slugged---"), "already-slugged");
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn slugify_output_is_clean() {
        let inputs = [
            "Top 10 Tips & Tricks",
            "\tTabs\nand newlines\t",
            "_leading_and_trailing_",
            "MiXeD CaSe 42",
            "emoji 🚀 launch",
        ];

        for input in inputs {
            let slug = slugify(input);
            assert!(
                slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{input:?} -> {slug:?}"
            );
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{input:?} -> {slug:?}");
            assert!(!slug.contains("--"), "{input:?} -> {slug:?}");
        }
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_text("", 5), "");
        assert_eq!(truncate_text("hello", 5), "hello");
        assert_eq!(truncate_text("hi", 10), "hi");
    }

    #[test]
    fn truncate_hits_exact_length_with_ellipsis() {
        for max in 3..12 {
            let out = truncate_text("The quick brown fox", max);
            assert_eq!(out.chars().count(), max);
            assert!(out.ends_with("..."));
        }
        assert_eq!(truncate_text("Hello, World!", 8), "Hello...");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_text("héllo wörld", 7), "héll...");
        assert_eq!(truncate_text("日本語テキスト", 7), "日本語テキスト");
    }

    #[test]
    fn truncate_below_ellipsis_width() {
        assert_eq!(truncate_text("abcdef", 0), "");
        assert_eq!(truncate_text("abcdef", 2), "..");
    }
}
