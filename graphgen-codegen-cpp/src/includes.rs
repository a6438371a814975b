//! Include block resolution.

use std::collections::BTreeSet;

use graphgen_codegen::generation::Dependencies;

use crate::CppTarget;

/// System symbols and the headers declaring them.
///
/// A symbol may appear more than once when its spelling needs several
/// headers. Symbols missing from the table are built into the language and
/// need no include.
pub const SYSTEM_HEADERS: &[(&str, &str)] = &[
    ("std::int8_t", "cstdint"),
    ("std::int16_t", "cstdint"),
    ("std::int32_t", "cstdint"),
    ("std::int64_t", "cstdint"),
    ("std::uint8_t", "cstdint"),
    ("std::uint16_t", "cstdint"),
    ("std::uint32_t", "cstdint"),
    ("std::uint64_t", "cstdint"),
    ("std::any", "any"),
    ("std::string", "string"),
    ("std::wstring", "string"),
    ("std::wstring_view", "string_view"),
    ("std::vector", "vector"),
    ("std::map", "map"),
    ("std::map<std::wstring, std::any>", "any"),
    ("std::map<std::wstring, std::any>", "map"),
    ("std::map<std::wstring, std::any>", "string"),
    ("std::future", "future"),
    ("std::unique_ptr", "memory"),
    ("std::make_unique", "memory"),
    ("std::shared_ptr", "memory"),
    ("std::underlying_type_t", "type_traits"),
    ("std::move", "utility"),
    ("web::json::value", "cpprest/json.h"),
    ("web::http::methods", "cpprest/http_msg.h"),
    ("pplx::cancellation_token", "pplx/pplxcancellation_token.h"),
];

/// Framework types generated headers include by name. A generated header of
/// the same name would shadow them.
pub const FRAMEWORK_TYPES: &[&str] = &[
    "BaseClient",
    "BaseRequest",
    "BaseRequestBuilder",
    "CollectionPage",
    "HttpClient",
    "IAuthenticationProvider",
    "IBaseClient",
    "IBaseRequest",
    "IBaseRequestBuilder",
    "ICollectionPage",
    "IHttpProvider",
    "JsonUtils",
    "StringUtils",
];

/// The ordered `#include` lines of one generated header.
///
/// System headers come first in angle brackets, then generated headers in
/// quotes; each group is deduplicated and sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeBlock {
    system: BTreeSet<&'static str>,
    user: BTreeSet<String>,
}

impl IncludeBlock {
    /// Resolve an entity's dependencies against the target's header table.
    pub fn resolve(dependencies: &Dependencies, target: &CppTarget) -> Self {
        let system = dependencies
            .system()
            .flat_map(|symbol| target.headers_for(symbol))
            .collect();
        let user = dependencies
            .user()
            .map(|name| target.header_file(name))
            .collect();
        Self { system, user }
    }

    pub fn system(&self) -> impl Iterator<Item = &str> {
        self.system.iter().copied()
    }

    pub fn user(&self) -> impl Iterator<Item = &str> {
        self.user.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.system.is_empty() && self.user.is_empty()
    }

    /// Render the block, with a blank line between the two groups.
    pub fn render(&self) -> String {
        let system: Vec<String> = self
            .system()
            .map(|header| format!("#include <{header}>"))
            .collect();
        let user: Vec<String> = self
            .user()
            .map(|header| format!("#include \"{header}\""))
            .collect();

        let mut groups = Vec::new();
        if !system.is_empty() {
            groups.push(system.join("\n"));
        }
        if !user.is_empty() {
            groups.push(user.join("\n"));
        }

        let mut rendered = groups.join("\n\n");
        if !rendered.is_empty() {
            rendered.push('\n');
        }
        rendered
    }
}
