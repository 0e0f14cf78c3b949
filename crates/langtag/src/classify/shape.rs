//! Token shape predicates used by the classification rule tables.
//!
//! Every predicate is ASCII-only and case-insensitive.

fn all(token: &str, pred: fn(&u8) -> bool) -> bool {
    token.as_bytes().iter().all(pred)
}

fn letters(token: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&token.len()) && all(token, u8::is_ascii_alphabetic)
}

fn alphanumerics(token: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&token.len()) && all(token, u8::is_ascii_alphanumeric)
}

pub(crate) fn wildcard(token: &str) -> bool {
    token == "*"
}

pub(crate) fn private_use_singleton(token: &str) -> bool {
    token.eq_ignore_ascii_case("x")
}

pub(crate) fn extension_singleton(token: &str) -> bool {
    letters(token, 1, 1) && !private_use_singleton(token)
}

pub(crate) fn language(token: &str) -> bool {
    letters(token, 2, 3)
}

pub(crate) fn extlang(token: &str) -> bool {
    letters(token, 3, 3)
}

pub(crate) fn script(token: &str) -> bool {
    letters(token, 4, 4)
}

pub(crate) fn region(token: &str) -> bool {
    letters(token, 2, 2) || (token.len() == 3 && all(token, u8::is_ascii_digit))
}

pub(crate) fn variant(token: &str) -> bool {
    if alphanumerics(token, 5, 8) {
        return true;
    }
    let mut bytes = token.bytes();
    token.len() == 4
        && bytes.next().is_some_and(|b| b.is_ascii_digit())
        && bytes.all(|b| b.is_ascii_alphanumeric())
}

pub(crate) fn other(token: &str) -> bool {
    alphanumerics(token, 2, 8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a", true)]
    #[case("Z", true)]
    #[case("x", false)]
    #[case("X", false)]
    #[case("1", false)]
    #[case("ab", false)]
    fn recognises_extension_singletons(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(extension_singleton(token), expected);
    }

    #[rstest]
    #[case("us", true)]
    #[case("419", true)]
    #[case("u1", false)]
    #[case("4190", false)]
    #[case("usa", false)]
    fn region_requires_two_letters_or_three_digits(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(region(token), expected);
    }

    #[rstest]
    #[case("1994", true)]
    #[case("1abc", true)]
    #[case("rozaj", true)]
    #[case("abcdefgh", true)]
    #[case("abcdefghi", false)]
    #[case("abcd", false)]
    #[case("a994", false)]
    fn variant_accepts_both_shapes(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(variant(token), expected);
    }

    #[rstest]
    #[case("en", true)]
    #[case("ast", true)]
    #[case("e", false)]
    #[case("engl", false)]
    #[case("e1", false)]
    fn language_is_two_or_three_letters(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(language(token), expected);
    }

    #[test]
    fn other_spans_two_to_eight_alphanumerics() {
        assert!(other("a1"));
        assert!(other("12345678"));
        assert!(!other("a"));
        assert!(!other("123456789"));
        assert!(!other("ab-c"));
    }

    #[test]
    fn non_ascii_never_matches() {
        assert!(!language("é"));
        assert!(!other("café"));
        assert!(!script("ñand"));
    }
}
