//! Key normalization.

/// Lower-cases the first character of `name`, leaving the rest untouched.
///
/// Every key stored in a resource passes through here, so `"IntValue"` and
/// `"intValue"` address the same entry.
///
/// ## Examples
///
/// ```rust
/// use rest_resource::camel_case;
///
/// assert_eq!(camel_case("IntValue"), "intValue");
/// assert_eq!(camel_case("URL"), "uRL");
/// assert_eq!(camel_case("already"), "already");
/// ```
pub fn camel_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => first.to_lowercase().chain(chars).collect(),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty() {
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn test_single_char() {
        assert_eq!(camel_case("X"), "x");
        assert_eq!(camel_case("_"), "_");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(camel_case("Ärger"), "ärger");
    }

    proptest! {
        #[test]
        fn only_first_character_changes(name in "[A-Za-z][A-Za-z0-9_]{0,20}") {
            let key = camel_case(&name);
            let mut expected = name[..1].to_lowercase();
            expected.push_str(&name[1..]);
            prop_assert_eq!(key, expected);
        }

        #[test]
        fn is_idempotent(name in "[A-Za-z][A-Za-z0-9_]{0,20}") {
            let once = camel_case(&name);
            prop_assert_eq!(camel_case(&once), once.clone());
        }
    }
}
