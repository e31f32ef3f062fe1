/// Splits a line on Unicode whitespace into a verb and its arguments.
/// Returns `None` for blank input.
pub fn tokenize(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let verb = parts.next()?.to_string();
    Some((verb, parts.map(str::to_string).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_have_no_verb() {
        assert_eq!(tokenize(""), None);
        assert_eq!(tokenize(" \t\u{3000}\n"), None);
    }

    #[test]
    fn splits_on_any_whitespace() {
        let (verb, args) = tokenize("  chem:mix\tH2O \u{00a0} NaCl ").unwrap();
        assert_eq!(verb, "chem:mix");
        assert_eq!(args, vec!["H2O", "NaCl"]);
    }
}
