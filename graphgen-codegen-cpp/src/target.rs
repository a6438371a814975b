//! Static configuration of the C++ target.

use graphgen_codegen::{
    builder::{CodeBuilder, TAB},
    entity::{BackingInt, NameDeriver},
    language::NamingConvention,
};

use crate::{
    CPP_NAMING, CppTypeMapper,
    includes::{FRAMEWORK_TYPES, SYSTEM_HEADERS},
    type_mapper::PRIMITIVE_TYPES,
};

/// The immutable lookup tables and formatting choices of the C++ target.
///
/// Every generator borrows one `CppTarget`; nothing in it changes during a
/// run.
#[derive(Debug, Clone, Copy)]
pub struct CppTarget {
    pub naming: NamingConvention,
    /// Model primitive name to C++ spelling.
    pub primitive_types: &'static [(&'static str, &'static str)],
    /// System symbol to header.
    pub system_headers: &'static [(&'static str, &'static str)],
    /// Names taken by the framework; no entity may derive one.
    pub framework_types: &'static [&'static str],
    /// One indentation level.
    pub indent: &'static str,
    pub header_extension: &'static str,
}

impl CppTarget {
    pub const DEFAULT: CppTarget = CppTarget {
        naming: CPP_NAMING,
        primitive_types: PRIMITIVE_TYPES,
        system_headers: SYSTEM_HEADERS,
        framework_types: FRAMEWORK_TYPES,
        indent: TAB,
        header_extension: "h",
    };

    pub fn names(&self) -> NameDeriver {
        NameDeriver::new(self.naming)
    }

    pub fn types(&self) -> CppTypeMapper {
        CppTypeMapper::new(self.primitive_types, self.naming)
    }

    pub fn builder(&self) -> CodeBuilder {
        CodeBuilder::new(self.indent)
    }

    /// Headers declaring a system symbol; empty for built-in spellings.
    pub fn headers_for(&self, symbol: &str) -> impl Iterator<Item = &'static str> {
        self.system_headers
            .iter()
            .filter(move |(name, _)| *name == symbol)
            .map(|(_, header)| *header)
    }

    /// File name of a generated entity's header.
    pub fn header_file(&self, name: &str) -> String {
        format!("{name}.{}", self.header_extension)
    }

    /// Fixed-width integer spelling of an enumeration's backing type.
    pub fn backing_type(backing: BackingInt) -> &'static str {
        match backing {
            BackingInt::U8 => "std::uint8_t",
            BackingInt::U16 => "std::uint16_t",
            BackingInt::U32 => "std::uint32_t",
            BackingInt::U64 => "std::uint64_t",
            BackingInt::I8 => "std::int8_t",
            BackingInt::I16 => "std::int16_t",
            BackingInt::I32 => "std::int32_t",
            BackingInt::I64 => "std::int64_t",
        }
    }
}

impl Default for CppTarget {
    fn default() -> Self {
        Self::DEFAULT
    }
}
