use graphgen_model::{ClassKind, ModelClass, ModelEnum, ModelProperty};

use super::Role;
use crate::{Error, Result};

/// A model element a derived entity is built from.
#[derive(Debug, Clone, Copy)]
pub enum Element<'m> {
    Class(&'m ModelClass),
    Enum(&'m ModelEnum),
    /// A collection-valued navigation property together with its owner.
    Property {
        owner: &'m ModelClass,
        property: &'m ModelProperty,
    },
}

impl<'m> Element<'m> {
    /// The element's own model name.
    pub fn name(&self) -> &'m str {
        match *self {
            Element::Class(class) => &class.name,
            Element::Enum(model_enum) => &model_enum.name,
            Element::Property { property, .. } => &property.name,
        }
    }

    /// Human-readable description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Element::Class(class) => format!("{} class '{}'", class.kind.as_str(), class.name),
            Element::Enum(model_enum) => format!("enum '{}'", model_enum.name),
            Element::Property { owner, property } => {
                format!("property '{}.{}'", owner.name, property.name)
            }
        }
    }

    fn accepts(&self, role: Role) -> bool {
        match self {
            Element::Enum(_) => role == Role::Type,
            Element::Class(class) => match class.kind {
                ClassKind::Complex => role == Role::Type,
                ClassKind::Entity => Role::ENTITY.contains(&role),
                ClassKind::Container => Role::CLIENT.contains(&role),
            },
            Element::Property { property, .. } => {
                role.is_collection() && property.collection && property.navigation
            }
        }
    }
}

/// A model element bound to the role it is rendered as.
///
/// Construction checks the pairing, so every descriptor in a run is one the
/// role generators can render. The typed accessors still report
/// [`Error::RoleMismatch`] when a generator asks for the wrong view.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor<'m> {
    element: Element<'m>,
    role: Role,
}

impl<'m> Descriptor<'m> {
    pub fn new(element: Element<'m>, role: Role) -> Result<Self> {
        if !element.accepts(role) {
            return Err(Error::RoleMismatch {
                role,
                element: element.describe(),
            });
        }
        Ok(Self { element, role })
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn element(&self) -> Element<'m> {
        self.element
    }

    /// The class this descriptor was built from.
    pub fn as_class(&self) -> Result<&'m ModelClass> {
        match self.element {
            Element::Class(class) => Ok(class),
            _ => Err(self.mismatch()),
        }
    }

    /// The enumeration this descriptor was built from.
    pub fn as_enum(&self) -> Result<&'m ModelEnum> {
        match self.element {
            Element::Enum(model_enum) => Ok(model_enum),
            _ => Err(self.mismatch()),
        }
    }

    /// The owning class and collection property this descriptor was built from.
    pub fn as_property(&self) -> Result<(&'m ModelClass, &'m ModelProperty)> {
        match self.element {
            Element::Property { owner, property } => Ok((owner, property)),
            _ => Err(self.mismatch()),
        }
    }

    fn mismatch(&self) -> Error {
        Error::RoleMismatch {
            role: self.role,
            element: self.element.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> ModelClass {
        ModelClass::new("user", ClassKind::Entity)
            .with_property(ModelProperty::new("messages", "message").collection().navigation())
            .with_property(ModelProperty::new("aliases", "String").collection())
    }

    #[test]
    fn test_entity_roles() {
        let class = user();
        for role in Role::ENTITY {
            assert!(Descriptor::new(Element::Class(&class), role).is_ok());
        }
        assert!(Descriptor::new(Element::Class(&class), Role::Client).is_err());
        assert!(Descriptor::new(Element::Class(&class), Role::CollectionPage).is_err());
    }

    #[test]
    fn test_complex_and_container_roles() {
        let complex = ModelClass::new("address", ClassKind::Complex);
        assert!(Descriptor::new(Element::Class(&complex), Role::Type).is_ok());
        assert!(Descriptor::new(Element::Class(&complex), Role::Request).is_err());

        let container = ModelClass::new("graphService", ClassKind::Container);
        assert!(Descriptor::new(Element::Class(&container), Role::ClientInterface).is_ok());
        assert!(Descriptor::new(Element::Class(&container), Role::Type).is_err());
    }

    #[test]
    fn test_enum_only_type() {
        let model_enum = ModelEnum::new("color");
        assert!(Descriptor::new(Element::Enum(&model_enum), Role::Type).is_ok());

        let err = Descriptor::new(Element::Enum(&model_enum), Role::RequestBuilder).unwrap_err();
        assert_eq!(
            err,
            Error::RoleMismatch {
                role: Role::RequestBuilder,
                element: "enum 'color'".to_string(),
            }
        );
    }

    #[test]
    fn test_property_requires_collection_navigation() {
        let class = user();
        let messages = Element::Property {
            owner: &class,
            property: &class.properties[0],
        };
        let aliases = Element::Property {
            owner: &class,
            property: &class.properties[1],
        };

        assert!(Descriptor::new(messages, Role::CollectionResponse).is_ok());
        assert!(Descriptor::new(messages, Role::Request).is_err());
        assert!(Descriptor::new(aliases, Role::CollectionPage).is_err());
    }

    #[test]
    fn test_wrong_view_is_role_mismatch() {
        let class = user();
        let descriptor = Descriptor::new(Element::Class(&class), Role::Type).unwrap();

        assert_eq!(descriptor.as_class().unwrap().name, "user");
        let err = descriptor.as_enum().unwrap_err();
        assert_eq!(err.to_string(), "role 'type' cannot be derived from entity class 'user'");
        assert!(descriptor.as_property().is_err());
    }
}
