//! C++-specific naming conventions.

use graphgen_codegen::language::NamingConvention;
use graphgen_core::capitalize;

fn unchanged(name: &str) -> String {
    name.to_string()
}

fn escape_cpp_reserved(name: &str) -> String {
    format!("{name}_")
}

/// C++20 keywords and alternative operator tokens.
pub const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "atomic_cancel", "atomic_commit",
    "atomic_noexcept", "auto", "bitand", "bitor", "bool", "break", "case", "catch", "char",
    "char8_t", "char16_t", "char32_t", "class", "compl", "concept", "const", "consteval",
    "constexpr", "const_cast", "continue", "co_await", "co_return", "co_yield", "decltype",
    "default", "delete", "do", "double", "dynamic_cast", "else", "enum", "explicit", "export",
    "extern", "false", "float", "for", "friend", "goto", "if", "inline", "int", "long", "mutable",
    "namespace", "new", "noexcept", "not", "not_eq", "nullptr", "operator", "or", "or_eq",
    "private", "protected", "public", "reflexpr", "register", "reinterpret_cast", "requires",
    "return", "short", "signed", "sizeof", "static", "static_assert", "static_cast", "struct",
    "switch", "synchronized", "template", "this", "thread_local", "throw", "true", "try",
    "typedef", "typeid", "typename", "union", "unsigned", "using", "virtual", "void", "volatile",
    "wchar_t", "while", "xor", "xor_eq",
];

/// C++ naming conventions.
///
/// Types are the model name with its first letter capitalized; members keep
/// the model spelling. Reserved words get a trailing underscore.
pub const CPP_NAMING: NamingConvention = NamingConvention {
    to_type: capitalize,
    to_member: unchanged,
    reserved_words: CPP_KEYWORDS,
    escape_reserved: escape_cpp_reserved,
};
