//! Email whitelist compilation.
//!
//! Turns an ordered list of email addresses into a single anchored,
//! alternation-based regular expression of the form `^(a|b|c)$`.
//! Addresses are lowercased before escaping, so the pattern matches
//! lowercase input only; the dashboard normalizes the signed-in email
//! before matching.

use crate::error::FloristError;

/// Compile a non-empty list of email addresses into an anchored pattern
/// matching exactly those addresses.
///
/// Alternatives keep their input order. An empty list is a caller error
/// and fails with [`FloristError::EmptyWhitelist`].
pub fn compile(emails: &[String]) -> Result<String, FloristError> {
    if emails.is_empty() {
        return Err(FloristError::EmptyWhitelist);
    }

    let escaped: Vec<String> = emails
        .iter()
        .map(|email| regex::escape(&email.to_lowercase()))
        .collect();

    Ok(format!("^({})$", escaped.join("|")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_address() {
        let pattern = compile(&["john.smith@example.com".into()]).unwrap();
        assert_eq!(pattern, r"^(john\.smith@example\.com)$");
    }

    #[test]
    fn multiple_addresses_keep_input_order() {
        let pattern = compile(&[
            "john.smith@example.com".into(),
            "roger.jones@example.com".into(),
        ])
        .unwrap();
        assert_eq!(
            pattern,
            r"^(john\.smith@example\.com|roger\.jones@example\.com)$"
        );

        let pattern = compile(&[
            "john.smith@example.com".into(),
            "roger.jones@example.com".into(),
            "me@me.com".into(),
        ])
        .unwrap();
        assert_eq!(
            pattern,
            r"^(john\.smith@example\.com|roger\.jones@example\.com|me@me\.com)$"
        );
    }

    #[test]
    fn addresses_are_lowercased() {
        let pattern = compile(&["John.Smith@Example.COM".into()]).unwrap();
        assert_eq!(pattern, r"^(john\.smith@example\.com)$");
    }

    #[test]
    fn empty_list_fails() {
        assert!(matches!(
            compile(&[]),
            Err(FloristError::EmptyWhitelist)
        ));
    }

    #[test]
    fn pattern_matches_whole_addresses_only() {
        let pattern = compile(&[
            "john.smith@example.com".into(),
            "roger.jones@example.com".into(),
        ])
        .unwrap();
        let regex = regex::Regex::new(&pattern).unwrap();

        assert!(!regex.is_match("john"));
        assert!(!regex.is_match("manyjohn.smith@example.com"));
        assert!(!regex.is_match("john.smith@example.com.uk"));
        assert!(!regex.is_match("john.smith@example.roger"));
        assert!(!regex.is_match("john.smith@example.comroger.jones@example.com"));
        assert!(regex.is_match("john.smith@example.com"));
        assert!(regex.is_match("roger.jones@example.com"));
    }

    #[test]
    fn matching_is_case_sensitive_against_lowercase() {
        let pattern = compile(&["John.Smith@Example.com".into()]).unwrap();
        let regex = regex::Regex::new(&pattern).unwrap();

        assert!(regex.is_match("john.smith@example.com"));
        assert!(!regex.is_match("John.Smith@Example.com"));
    }
}
