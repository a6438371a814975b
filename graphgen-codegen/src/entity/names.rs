use graphgen_model::{ClassKind, ModelClass, ModelProperty};

use super::{Descriptor, Element, Facet, Role};
use crate::language::NamingConvention;

/// Derives canonical identifiers for descriptors and the entities they link to.
///
/// Names are pure functions of the element, the role, and for collection
/// roles the owning class. Interface names are always `I` followed by the
/// implementation name, so they are never prefixed twice.
#[derive(Debug, Clone, Copy)]
pub struct NameDeriver {
    naming: NamingConvention,
}

impl NameDeriver {
    pub const fn new(naming: NamingConvention) -> Self {
        Self { naming }
    }

    pub fn naming(&self) -> &NamingConvention {
        &self.naming
    }

    /// Canonical name of a descriptor.
    pub fn name(&self, descriptor: &Descriptor<'_>) -> String {
        self.role_name(&descriptor.element(), descriptor.role())
    }

    /// Name `element` would have when rendered as `role`.
    ///
    /// Used for sibling references (a request naming its interface, a
    /// builder naming its request) without re-validating the pairing.
    pub fn role_name(&self, element: &Element<'_>, role: Role) -> String {
        let implementation = format!("{}{}", self.base_name(element), role.suffix());
        let name = match role.facet() {
            Facet::Interface => format!("I{implementation}"),
            Facet::Implementation => implementation,
        };
        self.naming.safe_name(&name)
    }

    /// Capitalized element name; the compound collection name for
    /// property elements.
    pub fn base_name(&self, element: &Element<'_>) -> String {
        match *element {
            Element::Property { owner, property } => self.collection_name(owner, property),
            _ => (self.naming.to_type)(element.name()),
        }
    }

    /// `{Owner}{Property}Collection`.
    pub fn collection_name(&self, owner: &ModelClass, property: &ModelProperty) -> String {
        format!(
            "{}{}Collection",
            (self.naming.to_type)(&owner.name),
            (self.naming.to_type)(&property.name)
        )
    }

    /// Type name of a class's base, if it has one.
    pub fn base_type(&self, class: &ModelClass) -> Option<String> {
        class.base.as_deref().map(|base| self.naming.type_name(base))
    }

    /// Name of the entity a navigation property leads to.
    ///
    /// Collections lead to the compound collection entity. A single-valued
    /// property of the service container leads to the referenced class;
    /// any other single-valued property is named after the property.
    pub fn linked_name(&self, owner: &ModelClass, property: &ModelProperty) -> String {
        if property.collection {
            self.collection_name(owner, property)
        } else if owner.kind == ClassKind::Container {
            (self.naming.to_type)(&property.type_name)
        } else {
            (self.naming.to_type)(&property.name)
        }
    }

    /// Request builder (or its interface) reached through a navigation property.
    pub fn linked_builder(&self, owner: &ModelClass, property: &ModelProperty, facet: Facet) -> String {
        let builder = format!("{}RequestBuilder", self.linked_name(owner, property));
        let name = match facet {
            Facet::Interface => format!("I{builder}"),
            Facet::Implementation => builder,
        };
        self.naming.safe_name(&name)
    }

    /// Request builder (or its interface) for a single item of a collection.
    pub fn item_builder(&self, property: &ModelProperty, facet: Facet) -> String {
        let builder = format!("{}RequestBuilder", (self.naming.to_type)(&property.type_name));
        let name = match facet {
            Facet::Interface => format!("I{builder}"),
            Facet::Implementation => builder,
        };
        self.naming.safe_name(&name)
    }

    /// Accessor method name for a navigation property.
    pub fn method_name(&self, property: &ModelProperty) -> String {
        self.naming.type_name(&property.name)
    }

    /// Data member name for a property.
    pub fn member_name(&self, name: &str) -> String {
        self.naming.member_name(name)
    }

    /// Enumerator name for an enum member.
    pub fn enumerator_name(&self, name: &str) -> String {
        self.naming.type_name(name)
    }
}
