use std::borrow::Cow;

use memchr::{memchr2, memchr3};

/// Escape text for embedding in HTML content or a double-quoted attribute.
///
/// Contract:
/// - `&` → `&amp;`, `<` → `&lt;`, `>` → `&gt;`, `"` → `&quot;`, `'` → `&#x27;`.
/// - Every other byte, including non-ASCII UTF-8, is copied unchanged.
/// - Input without any of those five characters is returned borrowed.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    let bytes = s.as_bytes();
    let Some(first) = first_special(bytes) else {
        return Cow::Borrowed(s);
    };

    let mut out = String::with_capacity(s.len() + 16);
    out.push_str(&s[..first]);
    let mut copy_start = first;

    for (i, &b) in bytes.iter().enumerate().skip(first) {
        let replacement = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#x27;",
            _ => continue,
        };
        // Specials are ASCII, so `i` always sits on a char boundary.
        out.push_str(&s[copy_start..i]);
        out.push_str(replacement);
        copy_start = i + 1;
    }
    out.push_str(&s[copy_start..]);
    Cow::Owned(out)
}

fn first_special(bytes: &[u8]) -> Option<usize> {
    match (memchr3(b'&', b'<', b'>', bytes), memchr2(b'"', b'\'', bytes)) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
