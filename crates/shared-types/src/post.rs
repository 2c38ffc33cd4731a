use serde::{Deserialize, Serialize};
use serde_json::Number;

/// The `{title, views}` record built from the add-post form for one submission.
///
/// `views` is `None` when the raw field text had no leading integer; it
/// serializes as JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub views: Option<Number>,
}

impl PostDraft {
    /// Build a draft from the raw field values as read at submission time.
    pub fn from_fields(title: impl Into<String>, raw_views: &str) -> Self {
        Self {
            title: title.into(),
            views: parse_views(raw_views),
        }
    }
}

/// Whitespace skipped by `parseInt`: Unicode `Zs`, the ASCII controls TAB, LF,
/// VT, FF, CR, the line/paragraph separators and the BOM.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Parse a views field the way a browser's `parseInt(text, 10)` would.
///
/// Leading whitespace and an optional sign are accepted, then the longest run
/// of decimal digits; anything after it is ignored. Values that fit in `i64`
/// stay exact integers, larger ones become the nearest `f64`. Returns `None`
/// when there are no digits or the value is infinite.
pub fn parse_views(raw: &str) -> Option<Number> {
    let trimmed = raw.trim_start_matches(is_js_whitespace);

    let (sign, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }

    let literal = format!("{}{}", sign, &unsigned[..digits_len]);
    match literal.parse::<i64>() {
        Ok(exact) => Some(Number::from(exact)),
        Err(_) => literal.parse::<f64>().ok().and_then(Number::from_f64),
    }
}
