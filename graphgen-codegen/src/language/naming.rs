//! Naming conventions for different programming languages.

/// Language-specific naming conventions.
///
/// Defines how to transform model names into type and member names, and how
/// to handle reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a model name to a type name (e.g., "driveItem" -> "DriveItem")
    pub to_type: fn(&str) -> String,
    /// Transform a property name to a member name
    pub to_member: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "delete" -> "delete_" in C++)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.to_type)(name);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a member name.
    pub fn member_name(&self, name: &str) -> String {
        let transformed = (self.to_member)(name);
        self.safe_name(&transformed)
    }
}

#[cfg(test)]
mod tests {
    use graphgen_core::capitalize;

    use super::*;

    fn unchanged(name: &str) -> String {
        name.to_string()
    }

    fn underscore(name: &str) -> String {
        format!("{name}_")
    }

    const NAMING: NamingConvention = NamingConvention {
        to_type: capitalize,
        to_member: unchanged,
        reserved_words: &["delete", "Class"],
        escape_reserved: underscore,
    };

    #[test]
    fn test_safe_name() {
        assert_eq!(NAMING.safe_name("delete"), "delete_");
        assert_eq!(NAMING.safe_name("deleted"), "deleted");
    }

    #[test]
    fn test_member_name() {
        assert_eq!(NAMING.member_name("delete"), "delete_");
        assert_eq!(NAMING.member_name("displayName"), "displayName");
    }

    #[test]
    fn test_type_name_checks_transformed_name() {
        assert_eq!(NAMING.type_name("user"), "User");
        assert_eq!(NAMING.type_name("class"), "Class_");
        assert_eq!(NAMING.type_name("delete"), "Delete");
    }
}
