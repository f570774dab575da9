/// Strip `;` comments and surrounding whitespace, drop blank lines and
/// upper-case what is left. Line order is preserved.
pub fn normalize(text: &str) -> Vec<String> {
    text.lines().filter_map(normalize_line).collect()
}

pub fn normalize_line(line: &str) -> Option<String> {
    let code = match line.find(';') {
        Some(p) => &line[..p],
        None => line,
    };
    let code = code.trim();
    if code.is_empty() {
        None
    } else {
        Some(code.to_uppercase())
    }
}
