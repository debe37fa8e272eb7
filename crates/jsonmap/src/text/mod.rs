/// Convert a `snake_case` identifier to `camelCase`.
///
/// Underscores are dropped and the following character is uppercased. The
/// conversion is intended for conventional Rust field names; it round-trips
/// with [`to_snake_case`] for those.
pub fn to_camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut upper_next = false;
    for c in input.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a `camelCase` identifier to `snake_case`.
///
/// Each uppercase character after the first position is preceded by an
/// underscore and lowercased.
pub fn to_snake_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for (i, c) in input.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- to_camel_case ---

    #[test]
    fn camel_single_word_unchanged() {
        assert_eq!(to_camel_case("name"), "name");
    }

    #[test]
    fn camel_joins_segments() {
        assert_eq!(to_camel_case("device_name"), "deviceName");
        assert_eq!(to_camel_case("last_seen_at"), "lastSeenAt");
    }

    #[test]
    fn camel_keeps_digits() {
        assert_eq!(to_camel_case("ipv4_address"), "ipv4Address");
    }

    #[test]
    fn camel_empty_string() {
        assert_eq!(to_camel_case(""), "");
    }

    // --- to_snake_case ---

    #[test]
    fn snake_single_word_unchanged() {
        assert_eq!(to_snake_case("name"), "name");
    }

    #[test]
    fn snake_splits_on_uppercase() {
        assert_eq!(to_snake_case("deviceName"), "device_name");
        assert_eq!(to_snake_case("lastSeenAt"), "last_seen_at");
    }

    #[test]
    fn snake_leading_uppercase_gets_no_underscore() {
        assert_eq!(to_snake_case("Name"), "name");
    }

    #[test]
    fn snake_empty_string() {
        assert_eq!(to_snake_case(""), "");
    }

    // --- round-trip ---

    #[test]
    fn conventional_names_round_trip() {
        for name in ["name", "device_name", "last_seen_at", "ipv4_address"] {
            assert_eq!(to_snake_case(&to_camel_case(name)), name);
        }
    }
}
