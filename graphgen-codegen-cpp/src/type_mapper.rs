//! C++ type mapper implementation.

use graphgen_codegen::language::{NamingConvention, ResolvedType, TypeMapper};

use crate::CPP_NAMING;

pub const WIDE_STRING: &str = "std::wstring";
pub const VECTOR: &str = "std::vector";
pub const ANY: &str = "std::any";
pub const DICTIONARY: &str = "std::map<std::wstring, std::any>";

/// Model primitive names and their C++ spellings. Lookup ignores case.
pub const PRIMITIVE_TYPES: &[(&str, &str)] = &[
    ("Binary", WIDE_STRING),
    ("Boolean", "bool"),
    ("Byte", "unsigned char"),
    ("Date", WIDE_STRING),
    ("DateTimeOffset", WIDE_STRING),
    ("Double", "double"),
    ("Duration", WIDE_STRING),
    ("Float", "float"),
    ("Guid", WIDE_STRING),
    ("Int16", "std::int16_t"),
    ("Int32", "std::int32_t"),
    ("Int64", "std::int64_t"),
    ("Json", WIDE_STRING),
    ("NsDictionary", DICTIONARY),
    ("Single", "float"),
    ("Stream", WIDE_STRING),
    ("String", WIDE_STRING),
    ("TimeOfDay", WIDE_STRING),
];

/// C++ type mapper implementation.
///
/// Names found in the primitive table resolve to their C++ spelling; any
/// other name is taken to be a generated model type.
#[derive(Debug, Clone, Copy)]
pub struct CppTypeMapper {
    primitives: &'static [(&'static str, &'static str)],
    naming: NamingConvention,
}

impl CppTypeMapper {
    pub const fn new(
        primitives: &'static [(&'static str, &'static str)],
        naming: NamingConvention,
    ) -> Self {
        Self { primitives, naming }
    }

    fn primitive(&self, type_name: &str) -> Option<&'static str> {
        self.primitives
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(type_name))
            .map(|(_, spelling)| *spelling)
    }
}

impl Default for CppTypeMapper {
    fn default() -> Self {
        Self::new(PRIMITIVE_TYPES, CPP_NAMING)
    }
}

impl TypeMapper for CppTypeMapper {
    fn language(&self) -> &'static str {
        "cpp"
    }

    fn resolve(&self, type_name: &str) -> ResolvedType {
        match self.primitive(type_name) {
            Some(spelling) => ResolvedType::primitive(spelling),
            None => ResolvedType::user_defined(self.naming.type_name(type_name)),
        }
    }

    fn sequence_of(&self, element: &str) -> String {
        format!("{VECTOR}<{element}>")
    }
}
