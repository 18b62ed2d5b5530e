//! HTML escaping of dynamic values.

//! Same rule everywhere, independent of whether the value ends up in
//! text, an attribute or inside a tag. Single left-to-right scan, so
//! the `&` of an inserted entity is never looked at again.

use std::borrow::Cow;
use std::io::Write;

/// The replacement for `b`, if it needs one. All characters that need
/// escaping are ASCII, hence scanning bytes of UTF-8 is fine.
#[inline]
fn entity(b: u8) -> Option<&'static str> {
    match b {
        b'&' => Some("&amp;"),
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        b'"' => Some("&quot;"),
        b'\'' => Some("&#39;"),
        _ => None
    }
}

/// Append the escaped form of `s` to `out`.
pub fn html_escape_into(out: &mut String, s: &str) {
    let mut done = 0;
    for (i, b) in s.bytes().enumerate() {
        if let Some(ent) = entity(b) {
            out.push_str(&s[done..i]);
            out.push_str(ent);
            done = i + 1;
        }
    }
    out.push_str(&s[done..]);
}

/// Returns `s` itself when nothing needs escaping.
pub fn html_escape(s: &str) -> Cow<'_, str> {
    match s.bytes().position(|b| entity(b).is_some()) {
        None => Cow::Borrowed(s),
        Some(first) => {
            let mut out = String::with_capacity(s.len() + 16);
            out.push_str(&s[..first]);
            html_escape_into(&mut out, &s[first..]);
            Cow::Owned(out)
        }
    }
}

/// Streaming variant of `html_escape_into`.
pub fn write_html_escaped(out: &mut impl Write, bytes: &[u8]) -> std::io::Result<()> {
    let mut done = 0;
    for (i, b) in bytes.iter().enumerate() {
        if let Some(ent) = entity(*b) {
            out.write_all(&bytes[done..i])?;
            out.write_all(ent.as_bytes())?;
            done = i + 1;
        }
    }
    out.write_all(&bytes[done..])
}


#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> String {
        let mut out = String::new();
        html_escape_into(&mut out, s);
        let mut v = Vec::new();
        write_html_escaped(&mut v, s.as_bytes()).unwrap();
        assert_eq!(String::from_utf8(v).unwrap(), out);
        assert_eq!(html_escape(s), out);
        out
    }

    #[test]
    fn t_escape() {
        assert_eq!(t(""), "");
        assert_eq!(t("plain text"), "plain text");
        assert_eq!(t("&<>\"'test"), "&amp;&lt;&gt;&quot;&#39;test");
        assert_eq!(t("<script>alert(\"XSS\")</script>"),
                   "&lt;script&gt;alert(&quot;XSS&quot;)&lt;/script&gt;");
        assert_eq!(t("&amp;"), "&amp;amp;");
        assert_eq!(t("Hä <lü>"), "Hä &lt;lü&gt;");
        assert_eq!(t("a/b=c`d"), "a/b=c`d");
    }

    #[test]
    fn t_escape_borrows() {
        assert!(matches!(html_escape("nothing to do"), Cow::Borrowed(_)));
        assert!(matches!(html_escape("a & b"), Cow::Owned(_)));
    }
}
