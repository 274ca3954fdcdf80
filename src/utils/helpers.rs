//! Pure string helpers shared by the Go templates.
//!
//! The askama filters in `generator::templates::go::filters` are thin wrappers
//! around these so the rendering logic stays testable without a template.

pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn combine(a: &str, b: &str) -> String {
    let mut combined = String::with_capacity(a.len() + b.len());
    combined.push_str(a);
    combined.push_str(b);
    combined
}

pub fn max(a: usize, b: usize) -> usize {
    std::cmp::max(a, b)
}

pub fn first_char(s: &str) -> String {
    s.chars().next().map(String::from).unwrap_or_default()
}

/// Go interpreted string literal for `s`.
pub fn go_quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Quotes `arg` for a POSIX shell unless it is made of plain word characters.
/// Line breaks use `$'...'` quoting so the result stays on one line.
pub fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_alphanumeric() || "-_./:=+,@%".contains(c));
    if plain {
        return arg.to_owned();
    }

    if arg.contains(['\n', '\r']) {
        let mut quoted = String::from("$'");
        for c in arg.chars() {
            match c {
                '\\' => quoted.push_str("\\\\"),
                '\'' => quoted.push_str("\\'"),
                '\n' => quoted.push_str("\\n"),
                '\r' => quoted.push_str("\\r"),
                c => quoted.push(c),
            }
        }
        quoted.push('\'');
        return quoted;
    }

    format!("'{}'", arg.replace('\'', "'\\''"))
}

/// Pads `s` with spaces on the right up to `width` characters.
pub fn align(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
