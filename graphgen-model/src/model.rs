use indexmap::IndexMap;
use serde::Deserialize;

/// The abstract data model of a service: classes and enumerations in
/// declaration order, indexed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    /// Dotted service namespace, e.g. `microsoft.graph`.
    pub namespace: String,
    pub classes: IndexMap<String, ModelClass>,
    pub enums: IndexMap<String, ModelEnum>,
}

impl Model {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Add a class, recording it as the owner of each of its properties.
    pub fn add_class(&mut self, mut class: ModelClass) {
        for property in &mut class.properties {
            property.owner = class.name.clone();
        }
        self.classes.insert(class.name.clone(), class);
    }

    pub fn add_enum(&mut self, model_enum: ModelEnum) {
        self.enums.insert(model_enum.name.clone(), model_enum);
    }

    /// Builder-style variant of [`Model::add_class`].
    pub fn with_class(mut self, class: ModelClass) -> Self {
        self.add_class(class);
        self
    }

    /// Builder-style variant of [`Model::add_enum`].
    pub fn with_enum(mut self, model_enum: ModelEnum) -> Self {
        self.add_enum(model_enum);
        self
    }

    pub fn class(&self, name: &str) -> Option<&ModelClass> {
        self.classes.get(name)
    }

    pub fn find_enum(&self, name: &str) -> Option<&ModelEnum> {
        self.enums.get(name)
    }

    /// The service root, if the model declares one.
    pub fn container(&self) -> Option<&ModelClass> {
        self.classes
            .values()
            .find(|class| class.kind == ClassKind::Container)
    }
}

/// How a class participates in the generated SDK.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    /// Addressable resource with its own requests and builders.
    #[default]
    Entity,
    /// Value type embedded in other classes.
    Complex,
    /// The service root whose navigation properties become the client.
    Container,
}

impl ClassKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassKind::Entity => "entity",
            ClassKind::Complex => "complex",
            ClassKind::Container => "container",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelClass {
    pub name: String,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub properties: Vec<ModelProperty>,
}

impl ModelClass {
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            base: None,
            properties: Vec::new(),
        }
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_property(mut self, mut property: ModelProperty) -> Self {
        property.owner = self.name.clone();
        self.properties.push(property);
        self
    }

    /// Properties that reference another class, in declaration order.
    pub fn navigation_properties(&self) -> impl Iterator<Item = &ModelProperty> {
        self.properties.iter().filter(|p| p.navigation)
    }

    /// Navigation properties that are one-to-many.
    pub fn collection_navigations(&self) -> impl Iterator<Item = &ModelProperty> {
        self.navigation_properties().filter(|p| p.collection)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelProperty {
    pub name: String,
    /// Primitive name or the name of a model class/enum. For collections
    /// this is the element (projection) type.
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub collection: bool,
    #[serde(default)]
    pub navigation: bool,
    #[serde(default)]
    pub description: Option<String>,
    /// Name of the owning class, filled in when the property is attached.
    #[serde(skip)]
    pub owner: String,
}

impl ModelProperty {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            collection: false,
            navigation: false,
            description: None,
            owner: String::new(),
        }
    }

    pub fn collection(mut self) -> Self {
        self.collection = true;
        self
    }

    pub fn navigation(mut self) -> Self {
        self.navigation = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelEnum {
    pub name: String,
    /// Members combine with bitwise OR instead of being exclusive.
    #[serde(default)]
    pub flags: bool,
    #[serde(default)]
    pub members: Vec<ModelEnumMember>,
}

impl ModelEnum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: false,
            members: Vec::new(),
        }
    }

    pub fn flags(mut self) -> Self {
        self.flags = true;
        self
    }

    pub fn with_member(mut self, name: impl Into<String>, value: Option<i64>) -> Self {
        self.members.push(ModelEnumMember {
            name: name.into(),
            value,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelEnumMember {
    pub name: String,
    #[serde(default)]
    pub value: Option<i64>,
}
