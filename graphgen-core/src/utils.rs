//! Shared string helpers for identifier derivation.

/// Uppercase the first character, leaving the rest untouched (e.g., "driveItem" -> "DriveItem")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character, leaving the rest untouched (e.g., "A request" -> "a request")
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Split a camelCase name into lowercase words (e.g., "businessPhones" -> "business phones")
///
/// A word boundary is an uppercase letter directly preceded by a lowercase one,
/// so acronyms stay glued together ("userID" -> "user id", "IPAddress" -> "ipaddress").
pub fn split_words(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_uppercase() && prev_lower {
            result.push(' ');
        }
        prev_lower = c.is_lowercase();
        result.extend(c.to_lowercase());
    }
    result
}

/// Convert a dotted model namespace into a C++-style qualified name
/// (e.g., "microsoft.graph" -> "Microsoft::Graph")
pub fn titleize_namespace(namespace: &str) -> String {
    namespace
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("::")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("user"), "User");
        assert_eq!(capitalize("driveItem"), "DriveItem");
        assert_eq!(capitalize("User"), "User");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("A request for User entity."), "a request for User entity.");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("displayName"), "display name");
        assert_eq!(split_words("businessPhones"), "business phones");
        assert_eq!(split_words("id"), "id");
        assert_eq!(split_words("userID"), "user id");
        assert_eq!(split_words("IPAddress"), "ipaddress");
        assert_eq!(split_words(""), "");
    }

    #[test]
    fn test_titleize_namespace() {
        assert_eq!(titleize_namespace("microsoft.graph"), "Microsoft::Graph");
        assert_eq!(
            titleize_namespace("microsoft.graph.callRecords"),
            "Microsoft::Graph::CallRecords"
        );
        assert_eq!(titleize_namespace("graph"), "Graph");
        assert_eq!(titleize_namespace(""), "");
    }
}
