use std::collections::HashMap;

use graphgen_model::{ClassKind, Model};

use super::{Descriptor, Element, NameDeriver, Role};
use crate::{Error, Result};

/// Bind every model element to the roles it is rendered as.
///
/// Enumerations come first, then classes in declaration order. Each entity
/// class is followed by the collection roles of its collection-valued
/// navigation properties; the service container likewise after its client
/// roles.
pub fn bind(model: &Model) -> Result<Vec<Descriptor<'_>>> {
    let mut descriptors = Vec::new();

    for model_enum in model.enums.values() {
        descriptors.push(Descriptor::new(Element::Enum(model_enum), Role::Type)?);
    }

    for class in model.classes.values() {
        let roles: &[Role] = match class.kind {
            ClassKind::Complex => &[Role::Type],
            ClassKind::Entity => &Role::ENTITY,
            ClassKind::Container => &Role::CLIENT,
        };
        for &role in roles {
            descriptors.push(Descriptor::new(Element::Class(class), role)?);
        }

        if class.kind == ClassKind::Complex {
            continue;
        }
        for property in class.collection_navigations() {
            let element = Element::Property {
                owner: class,
                property,
            };
            for role in Role::COLLECTION {
                descriptors.push(Descriptor::new(element, role)?);
            }
        }
    }

    Ok(descriptors)
}

/// Reject a set of descriptors in which two derive the same name, or one
/// derives a name in `reserved`.
pub fn check_unique(
    descriptors: &[Descriptor<'_>],
    names: &NameDeriver,
    reserved: &[&str],
) -> Result<()> {
    let mut seen: HashMap<String, String> = reserved
        .iter()
        .map(|name| (name.to_string(), format!("framework type '{name}'")))
        .collect();
    for descriptor in descriptors {
        let name = names.name(descriptor);
        if let Some(first) = seen.get(&name) {
            return Err(Error::DuplicateName {
                first: first.clone(),
                second: describe(descriptor),
                name,
            });
        }
        seen.insert(name, describe(descriptor));
    }
    Ok(())
}

fn describe(descriptor: &Descriptor<'_>) -> String {
    format!("{} of {}", descriptor.role(), descriptor.element().describe())
}

#[cfg(test)]
mod tests {
    use graphgen_core::capitalize;
    use graphgen_model::{ModelClass, ModelEnum, ModelProperty};

    use super::*;
    use crate::language::NamingConvention;

    fn unchanged(name: &str) -> String {
        name.to_string()
    }

    const NAMES: NameDeriver = NameDeriver::new(NamingConvention {
        to_type: capitalize,
        to_member: unchanged,
        reserved_words: &[],
        escape_reserved: unchanged,
    });

    fn model() -> Model {
        Model::new("microsoft.graph")
            .with_enum(ModelEnum::new("bodyType"))
            .with_class(ModelClass::new("address", ClassKind::Complex))
            .with_class(
                ModelClass::new("user", ClassKind::Entity)
                    .with_property(ModelProperty::new("messages", "message").collection().navigation())
                    .with_property(ModelProperty::new("manager", "user").navigation())
                    .with_property(ModelProperty::new("aliases", "String").collection()),
            )
            .with_class(ModelClass::new("message", ClassKind::Entity))
            .with_class(
                ModelClass::new("graphService", ClassKind::Container)
                    .with_property(ModelProperty::new("users", "user").collection().navigation()),
            )
    }

    #[test]
    fn test_bind_order() {
        let model = model();
        let descriptors = bind(&model).unwrap();
        let names: Vec<_> = descriptors.iter().map(|d| NAMES.name(d)).collect();

        assert_eq!(
            names,
            [
                "BodyType",
                "Address",
                "User",
                "UserRequest",
                "IUserRequest",
                "UserRequestBuilder",
                "IUserRequestBuilder",
                "UserMessagesCollectionPage",
                "IUserMessagesCollectionPage",
                "UserMessagesCollectionRequest",
                "IUserMessagesCollectionRequest",
                "UserMessagesCollectionRequestBuilder",
                "IUserMessagesCollectionRequestBuilder",
                "UserMessagesCollectionResponse",
                "Message",
                "MessageRequest",
                "IMessageRequest",
                "MessageRequestBuilder",
                "IMessageRequestBuilder",
                "GraphService",
                "IGraphService",
                "GraphServiceUsersCollectionPage",
                "IGraphServiceUsersCollectionPage",
                "GraphServiceUsersCollectionRequest",
                "IGraphServiceUsersCollectionRequest",
                "GraphServiceUsersCollectionRequestBuilder",
                "IGraphServiceUsersCollectionRequestBuilder",
                "GraphServiceUsersCollectionResponse",
            ]
        );
    }

    #[test]
    fn test_bound_names_are_unique() {
        let model = model();
        let descriptors = bind(&model).unwrap();
        assert!(check_unique(&descriptors, &NAMES, &[]).is_ok());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        // "userRequest" as a class collides with the request role of "user".
        let model = model().with_class(ModelClass::new("userRequest", ClassKind::Complex));
        let descriptors = bind(&model).unwrap();

        let err = check_unique(&descriptors, &NAMES, &[]).unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateName {
                name: "UserRequest".to_string(),
                first: "request of entity class 'user'".to_string(),
                second: "type of complex class 'userRequest'".to_string(),
            }
        );
    }

    #[test]
    fn test_reserved_names_rejected() {
        let model = model().with_class(ModelClass::new("baseRequest", ClassKind::Complex));
        let descriptors = bind(&model).unwrap();

        let err = check_unique(&descriptors, &NAMES, &["BaseClient", "BaseRequest"]).unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateName {
                name: "BaseRequest".to_string(),
                first: "framework type 'BaseRequest'".to_string(),
                second: "type of complex class 'baseRequest'".to_string(),
            }
        );
        assert!(check_unique(&bind(&self::model()).unwrap(), &NAMES, &["BaseRequest"]).is_ok());
    }

    #[test]
    fn test_bind_empty_model() {
        let model = Model::new("ns");
        assert!(bind(&model).unwrap().is_empty());
    }
}
