pub const DEFAULT_INDENT_PREFIX: &str = "  ";

/// Prefix every line of `text` with `prefix`.
///
/// When `first` is set, the first line gets `first` instead (which may be
/// empty) and everything after the first newline is indented with `prefix`.
/// Note that with `first` set the output always has at least two lines, as
/// the remainder of a single-line input is itself an empty line.
///
/// Lines are split on `'\n'` only, so a trailing newline yields a final empty
/// line that still receives the prefix.
pub fn indent(text: &str, prefix: &str, first: Option<&str>) -> String {
    match first {
        None => prefix_lines(text, prefix),
        Some(first) => {
            let (first_line, rest) = text.split_once('\n').unwrap_or((text, ""));
            format!("{first}{first_line}\n{}", prefix_lines(rest, prefix))
        }
    }
}

/// [`indent`] with [`DEFAULT_INDENT_PREFIX`] on every line.
pub fn indent_default(text: &str) -> String {
    prefix_lines(text, DEFAULT_INDENT_PREFIX)
}

fn prefix_lines(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
