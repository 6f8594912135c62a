//! Helpers for comparing rendered documents in tests.

use std::fmt::Write;

/// Make control characters and quotes visible so mismatching lines that differ
/// only in invisible bytes can still be told apart in a failure message.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch < ' ' => {
                let _ = write!(&mut out, "\\u{{{:02X}}}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Describe the first differing line between two renders, with two lines of
/// context on either side. Returns an empty string when both sides match.
pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    if expected == actual {
        return String::new();
    }
    let max = expected.len().max(actual.len());
    let mut out = String::new();
    let mut mismatch = None;
    let missing = "<missing>";
    for i in 0..max {
        let left = expected.get(i).map(String::as_str).unwrap_or(missing);
        let right = actual.get(i).map(String::as_str).unwrap_or(missing);
        if left != right {
            mismatch = Some(i);
            break;
        }
    }
    if let Some(i) = mismatch {
        let start = i.saturating_sub(2);
        let end = (i + 3).min(max);
        let _ = writeln!(
            &mut out,
            "first mismatch at line {} (showing {}..={}):",
            i + 1,
            start + 1,
            end
        );
        for line_idx in start..end {
            let left = expected
                .get(line_idx)
                .map(|line| escape_text(line))
                .unwrap_or_else(|| missing.to_string());
            let right = actual
                .get(line_idx)
                .map(|line| escape_text(line))
                .unwrap_or_else(|| missing.to_string());
            let marker = if line_idx == i { ">" } else { " " };
            let _ = writeln!(&mut out, "{marker} {:>4}  expected: {left}", line_idx + 1);
            let _ = writeln!(&mut out, "{marker} {:>4}    actual: {right}", line_idx + 1);
        }
    }
    let _ = writeln!(
        &mut out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}

/// Split `text` on `\n` into owned lines.
pub fn lines_of(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// Panic with a line diff when two rendered documents differ.
#[track_caller]
pub fn assert_render_eq(expected: &str, actual: &str) {
    let expected = lines_of(expected);
    let actual = lines_of(actual);
    let diff = diff_lines(&expected, &actual);
    if !diff.is_empty() {
        panic!("rendered document mismatch\n{diff}");
    }
}

/// Remove the common indentation of a multi-line literal and trim the
/// surrounding blank lines, so expected documents can be written indented
/// inside test functions.
pub fn expected_doc(literal: &str) -> String {
    let lines: Vec<&str> = literal.lines().collect();
    let margin = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);
    let body: Vec<&str> = lines
        .iter()
        .map(|line| if line.len() >= margin { &line[margin..] } else { "" })
        .collect();
    body.join("\n").trim().to_string()
}
