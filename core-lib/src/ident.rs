use std::borrow::Cow;

/// Marker prepended to names that would otherwise start with a digit.
pub const DIGIT_PREFIX: char = '_';

/// Identifier form of an operand name.
///
/// Bit indices such as `"0"` become `"_0"`; every other name is returned as is.
/// Only the emitted symbol changes, the semantic name is kept separately.
pub fn operand_ident(name: &str) -> Cow<'_, str> {
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        Cow::Owned(format!("{DIGIT_PREFIX}{name}"))
    } else {
        Cow::Borrowed(name)
    }
}

/// Strict, reserved and weak-in-path keywords that cannot name an item.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "gen",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Checks that `s` can be used as an identifier in generated source.
///
/// Keywords are rejected rather than emitted as raw identifiers.
pub fn is_valid_ident(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if s == "_" || !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_') && !KEYWORDS.contains(&s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case("0", "_0")]
    #[test_case("7", "_7")]
    #[test_case("8", "_8")]
    #[test_case("A", "A")]
    #[test_case("HL", "HL")]
    #[test_case("n8", "n8")]
    fn test_operand_ident(name: &str, expected: &str) {
        assert_eq!(operand_ident(name), expected);
    }

    #[test]
    fn test_unprefixed_names_are_borrowed() {
        assert!(matches!(operand_ident("SP"), Cow::Borrowed("SP")));
    }

    #[test_case("A", true)]
    #[test_case("_0", true)]
    #[test_case("a16", true)]
    #[test_case("ILLEGAL_D3", true)]
    #[test_case("0", false)]
    #[test_case("$08", false)]
    #[test_case("_", false)]
    #[test_case("", false)]
    #[test_case("HL+", false)]
    #[test_case("fn", false)]
    #[test_case("Self", false)]
    #[test_case("self", false)]
    #[test_case("super", false)]
    #[test_case("crate", false)]
    #[test_case("try", false)]
    #[test_case("FN", true)]
    fn test_is_valid_ident(s: &str, expected: bool) {
        assert_eq!(is_valid_ident(s), expected);
    }

    proptest! {
        #[test]
        fn test_prefix_only_differs_by_marker(name in "[0-9A-Za-z][0-9A-Za-z_]{0,5}") {
            let ident = operand_ident(&name);
            if name.starts_with(|c: char| c.is_ascii_digit()) {
                prop_assert_eq!(ident.strip_prefix(DIGIT_PREFIX), Some(name.as_str()));
            } else {
                prop_assert_eq!(ident.as_ref(), name.as_str());
            }
            prop_assert_eq!(is_valid_ident(&ident), !KEYWORDS.contains(&ident.as_ref()));
        }
    }
}
