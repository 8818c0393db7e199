//! Small stateless helpers shared by application code.

/// Sum of two integers.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Syntactic email-shape check: something before an `@`, something after it,
/// and a dot somewhere inside the domain, none of it containing whitespace
/// or a second `@`.
///
/// Deliberately permissive — consecutive or leading dots pass. This is not
/// an RFC 5322 validator and does not check that the domain exists; callers
/// needing stricter rules layer them on top.
pub fn is_valid_email(candidate: &str) -> bool {
    fn clean(part: &str) -> bool {
        !part.is_empty() && part.chars().all(|c| !c.is_whitespace() && c != '@')
    }

    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    // `clean(domain)` also rejects a second `@`.
    if !clean(local) || !clean(domain) {
        return false;
    }
    // A dot with at least one character on each side of it.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_basic_sums() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-1, 1), 0);
    }

    #[test]
    fn add_commutes_with_zero_identity() {
        for &(a, b) in &[(0, 0), (1, 2), (-7, 7), (1000, -3), (i64::MAX - 1, 1)] {
            assert_eq!(add(a, b), add(b, a));
            assert_eq!(add(a, 0), a);
        }
    }

    #[test]
    fn well_formed_addresses_pass() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(is_valid_email("user+tag@example.co.uk"));
    }

    #[test]
    fn malformed_addresses_fail() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("user@exa mple.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("user@.c"));
    }

    #[test]
    fn permissive_shapes_still_pass() {
        // The shape check accepts questionable-but-matching strings on purpose.
        assert!(is_valid_email("user@..c"));
        assert!(is_valid_email("..user@example.com"));
        assert!(is_valid_email("user@example..com"));
    }
}
