use graphgen_codegen::{builder::CodeBuilder, entity::BaseList};
use graphgen_core::lower_first;

/// Description of an interface role, derived from its implementation's.
pub fn interface_summary(implementation: &str) -> String {
    format!("An interface of {}", lower_first(implementation))
}

/// Write a `/// <summary>` comment block.
pub fn write_summary(builder: &mut CodeBuilder, text: &str) {
    builder
        .push_line("/// <summary>")
        .push_line(&format!("/// {text}"))
        .push_line("/// </summary>");
}

/// A data member preceded by its summary comment, written into a fresh builder.
pub fn documented_member(mut builder: CodeBuilder, summary: &str, line: &str) -> String {
    write_summary(&mut builder, summary);
    builder.push_line(line);
    builder.build()
}

/// A class, interface or enumeration declaration: the comment, signature
/// and base clause, followed by the braced member list.
#[derive(Debug, Clone)]
pub struct Declaration {
    summary: String,
    signature: String,
    bases: BaseList,
    access: Option<&'static str>,
    members: Vec<String>,
}

impl Declaration {
    /// A concrete class. Sealed classes are declared `final`.
    pub fn class(summary: String, name: &str, bases: BaseList, sealed: bool) -> Self {
        let signature = if sealed {
            format!("class {name} final")
        } else {
            format!("class {name}")
        };
        Self {
            summary,
            signature,
            bases,
            access: Some("public:"),
            members: Vec::new(),
        }
    }

    /// An abstract interface, which only ever derives from another interface.
    pub fn interface(summary: String, name: &str, base: Option<String>) -> Self {
        Self {
            summary,
            signature: format!("struct {name}"),
            bases: BaseList::interface(base),
            access: None,
            members: Vec::new(),
        }
    }

    /// A scoped enumeration with a fixed underlying type.
    pub fn enumeration(summary: String, name: &str, underlying: &str) -> Self {
        Self {
            summary,
            signature: format!("enum class {name} : {underlying}"),
            bases: BaseList::default(),
            access: None,
            members: Vec::new(),
        }
    }

    /// Add a member; members are separated by a blank line.
    pub fn push_member(&mut self, member: String) -> &mut Self {
        self.members.push(member);
        self
    }

    /// The base clause, empty when there are no bases.
    pub fn base_clause(&self) -> String {
        if self.bases.is_empty() {
            String::new()
        } else {
            format!(": {}", self.bases.join("public ", ", "))
        }
    }

    /// Write the comment, the signature and the base clause.
    pub fn write_header(&self, builder: &mut CodeBuilder) {
        write_summary(builder, &self.summary);
        builder.push_line(&self.signature);
        let base_clause = self.base_clause();
        if !base_clause.is_empty() {
            builder.push_continuation(&base_clause);
        }
    }

    /// Write the whole declaration, terminated by `};`.
    pub fn write(&self, builder: &mut CodeBuilder) {
        self.write_header(builder);

        let mut body = builder.scope_with_close("};");
        if let Some(access) = self.access {
            body.push_label(access);
        }
        for (index, member) in self.members.iter().enumerate() {
            if index > 0 {
                body.push_blank();
            }
            body.push_text(member);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(declaration: &Declaration) -> String {
        let mut builder = CodeBuilder::cpp();
        declaration.write(&mut builder);
        builder.build()
    }

    #[test]
    fn test_interface_summary() {
        assert_eq!(
            interface_summary("A request for User entity."),
            "An interface of a request for User entity."
        );
    }

    #[test]
    fn test_documented_member() {
        assert_eq!(
            documented_member(CodeBuilder::cpp(), "The id.", "std::wstring id;"),
            "/// <summary>\n/// The id.\n/// </summary>\nstd::wstring id;\n"
        );
    }

    #[test]
    fn test_class_with_bases() {
        let bases = BaseList::implementation(
            Some("IUserRequest".to_string()),
            Some("BaseRequest".to_string()),
        );
        let mut declaration =
            Declaration::class("A request for User entity.".to_string(), "UserRequest", bases, true);
        declaration.push_member("int a;".to_string());
        declaration.push_member("int b;".to_string());

        assert_eq!(
            render(&declaration),
            "/// <summary>\n\
             /// A request for User entity.\n\
             /// </summary>\n\
             class UserRequest final\n\
             \t: public IUserRequest, public BaseRequest\n\
             {\n\
             public:\n\
             \tint a;\n\
             \n\
             \tint b;\n\
             };\n"
        );
    }

    #[test]
    fn test_no_bases_omits_clause() {
        let declaration =
            Declaration::class("Item model type.".to_string(), "Item", BaseList::default(), false);
        assert_eq!(declaration.base_clause(), "");
        assert_eq!(
            render(&declaration),
            "/// <summary>\n/// Item model type.\n/// </summary>\nclass Item\n{\npublic:\n};\n"
        );
    }

    #[test]
    fn test_interface_declaration() {
        let declaration = Declaration::interface(
            "An interface of a request for User entity.".to_string(),
            "IUserRequest",
            Some("IBaseRequest".to_string()),
        );
        assert_eq!(declaration.base_clause(), ": public IBaseRequest");

        let mut builder = CodeBuilder::cpp();
        declaration.write_header(&mut builder);
        assert!(builder.build().ends_with("struct IUserRequest\n\t: public IBaseRequest\n"));
    }

    #[test]
    fn test_enumeration_signature() {
        let mut declaration =
            Declaration::enumeration("Color model enumeration.".to_string(), "Color", "std::uint8_t");
        declaration.push_member("Red = 1,\nBlue = 2".to_string());
        assert_eq!(
            render(&declaration),
            "/// <summary>\n\
             /// Color model enumeration.\n\
             /// </summary>\n\
             enum class Color : std::uint8_t\n\
             {\n\
             \tRed = 1,\n\
             \tBlue = 2\n\
             };\n"
        );
    }
}
