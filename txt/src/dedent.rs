/// Dedent `text`, tolerating a first line that is not indented.
///
/// The first line is kept byte-for-byte. The lines after it lose the margin
/// of spaces and tabs they all share (lines holding only spaces and tabs are
/// ignored when computing it and come out empty). Input without a newline is
/// fully left-stripped instead.
pub fn dedent(text: &str) -> String {
    match text.split_once('\n') {
        Some((first_line, rest)) => format!("{first_line}\n{}", dedent_lines(rest)),
        None => text.trim_start().to_string(),
    }
}

/// Remove the common `[ \t]` margin from every line of `text`.
///
/// Lines are split on `'\n'` only, so a `'\r'` before it stays part of the
/// line content.
fn dedent_lines(text: &str) -> String {
    let mut margin: Option<&str> = None;
    for line in text.split('\n') {
        let content = line.trim_start_matches(is_margin);
        if content.is_empty() {
            continue;
        }
        let indent = &line[..line.len() - content.len()];
        margin = Some(match margin {
            Some(margin) => common_prefix(margin, indent),
            None => indent,
        });
    }
    let margin = margin.unwrap_or_default();

    text.split('\n')
        .map(|line| {
            if line.trim_start_matches(is_margin).is_empty() {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_margin(ch: char) -> bool {
    matches!(ch, ' ' | '\t')
}

// Margins are ASCII, so a byte-wise prefix always ends on a char boundary.
fn common_prefix<'a>(left: &'a str, right: &str) -> &'a str {
    let len = left
        .bytes()
        .zip(right.bytes())
        .take_while(|(l, r)| l == r)
        .count();
    &left[..len]
}
