/// Whitespace-shaping helpers for multi-line text embedded in rendered output.
///
/// Both helpers treat a line made only of spaces and tabs as blank: blank
/// lines never contribute to a margin and never receive a prefix.

fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
}

fn leading_whitespace(line: &str) -> &str {
    let end = line
        .bytes()
        .position(|b| b != b' ' && b != b'\t')
        .unwrap_or(line.len());
    &line[..end]
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

/// Remove the leading whitespace shared by every non-blank line.
///
/// - The margin is compared textually, so a tab and four spaces do not match.
/// - Blank lines are normalized to empty, keeping their line break.
/// - Line breaks are preserved as-is.
pub fn dedent(text: &str) -> String {
    let mut margin: Option<&str> = None;
    for line in text.split_inclusive('\n') {
        if is_blank(line) {
            continue;
        }
        let lead = leading_whitespace(line);
        margin = Some(match margin {
            None => lead,
            Some(current) => common_prefix(current, lead),
        });
        if margin == Some("") {
            break;
        }
    }
    let margin_len = margin.map_or(0, str::len);

    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        if is_blank(line) {
            if line.ends_with("\r\n") {
                out.push_str("\r\n");
            } else if line.ends_with('\n') {
                out.push('\n');
            }
            continue;
        }
        out.push_str(&line[margin_len..]);
    }
    out
}

/// Prefix every non-blank line of `text` with `prefix`.
pub fn indent(text: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + prefix.len());
    for line in text.split_inclusive('\n') {
        if !is_blank(line) {
            out.push_str(prefix);
        }
        out.push_str(line);
    }
    out
}
