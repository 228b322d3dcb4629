//! HTML escaping for outbound text fields.

use std::borrow::Cow;

/// Escape `<` and `>` so embedded tags render as text.
///
/// Borrows when there is nothing to escape. Applying it twice yields the same
/// string as applying it once, since the output has no angle brackets left.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['<', '>']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("google", "google")]
    #[case("Tom & Jerry", "Tom & Jerry")]
    #[case("<b>bold</b>", "&lt;b&gt;bold&lt;/b&gt;")]
    #[case(
        r#"bad img <img src="x" onerror="alert(document.cookie);">"#,
        r#"bad img &lt;img src="x" onerror="alert(document.cookie);"&gt;"#
    )]
    #[case("", "")]
    fn escapes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_html(input), expected);
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_html("www.ham.com"), Cow::Borrowed(_)));
    }

    #[test]
    fn idempotent() {
        let once = escape_html("<script>alert(1)</script>").into_owned();
        assert_eq!(escape_html(&once), once);
    }
}
