//! HTML text escaping for interpolated fields.

/// Escape `&`, `<`, `>` and `"` so user text cannot open markup or break out
/// of a double-quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escaped display title: the first space becomes a line break.
///
/// Runs on the escaped string so the inserted `<br>` is never escaped itself.
pub fn display_title(text: &str) -> String {
    escape_html(text).replacen(' ', "<br>", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script> & co"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; co"
        );
    }

    #[test]
    fn test_leaves_unicode_and_apostrophes() {
        assert_eq!(escape_html("カラオケ · it's"), "カラオケ · it's");
    }

    #[test]
    fn test_display_title_breaks_first_space_only() {
        assert_eq!(display_title("Karaoke Night Out"), "Karaoke<br>Night Out");
        assert_eq!(display_title("Karaoke"), "Karaoke");
    }

    #[test]
    fn test_display_title_escapes_before_break() {
        assert_eq!(display_title("A&B <x>"), "A&amp;B<br>&lt;x&gt;");
    }
}
