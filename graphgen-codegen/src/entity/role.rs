use std::fmt;

/// Whether a role is a concrete declaration or the abstract interface it
/// implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Implementation,
    Interface,
}

/// The kinds of artifact derived from model elements.
///
/// Class and enum elements produce the non-collection roles; a
/// collection-valued navigation property produces the `Collection*` roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Model data type (class or enumeration).
    Type,
    Request,
    RequestInterface,
    RequestBuilder,
    RequestBuilderInterface,
    CollectionPage,
    CollectionPageInterface,
    CollectionRequest,
    CollectionRequestInterface,
    CollectionRequestBuilder,
    CollectionRequestBuilderInterface,
    /// Bulk response wrapper; has no interface sibling.
    CollectionResponse,
    Client,
    ClientInterface,
}

impl Role {
    pub const ALL: [Role; 14] = [
        Role::Type,
        Role::Request,
        Role::RequestInterface,
        Role::RequestBuilder,
        Role::RequestBuilderInterface,
        Role::CollectionPage,
        Role::CollectionPageInterface,
        Role::CollectionRequest,
        Role::CollectionRequestInterface,
        Role::CollectionRequestBuilder,
        Role::CollectionRequestBuilderInterface,
        Role::CollectionResponse,
        Role::Client,
        Role::ClientInterface,
    ];

    /// Roles bound to an addressable entity class, in emission order.
    pub const ENTITY: [Role; 5] = [
        Role::Type,
        Role::Request,
        Role::RequestInterface,
        Role::RequestBuilder,
        Role::RequestBuilderInterface,
    ];

    /// Roles bound to a collection-valued navigation property, in emission order.
    pub const COLLECTION: [Role; 7] = [
        Role::CollectionPage,
        Role::CollectionPageInterface,
        Role::CollectionRequest,
        Role::CollectionRequestInterface,
        Role::CollectionRequestBuilder,
        Role::CollectionRequestBuilderInterface,
        Role::CollectionResponse,
    ];

    /// Roles bound to the service container, in emission order.
    pub const CLIENT: [Role; 2] = [Role::Client, Role::ClientInterface];

    pub fn facet(self) -> Facet {
        match self {
            Role::RequestInterface
            | Role::RequestBuilderInterface
            | Role::CollectionPageInterface
            | Role::CollectionRequestInterface
            | Role::CollectionRequestBuilderInterface
            | Role::ClientInterface => Facet::Interface,
            _ => Facet::Implementation,
        }
    }

    pub fn is_interface(self) -> bool {
        self.facet() == Facet::Interface
    }

    /// Whether the role is derived from a collection-valued property.
    pub fn is_collection(self) -> bool {
        Self::COLLECTION.contains(&self)
    }

    /// The concrete role an interface role describes (identity for
    /// implementation roles).
    pub fn implementation(self) -> Role {
        match self {
            Role::RequestInterface => Role::Request,
            Role::RequestBuilderInterface => Role::RequestBuilder,
            Role::CollectionPageInterface => Role::CollectionPage,
            Role::CollectionRequestInterface => Role::CollectionRequest,
            Role::CollectionRequestBuilderInterface => Role::CollectionRequestBuilder,
            Role::ClientInterface => Role::Client,
            other => other,
        }
    }

    /// The interface sibling of an implementation role, if it has one.
    pub fn interface(self) -> Option<Role> {
        match self {
            Role::Request => Some(Role::RequestInterface),
            Role::RequestBuilder => Some(Role::RequestBuilderInterface),
            Role::CollectionPage => Some(Role::CollectionPageInterface),
            Role::CollectionRequest => Some(Role::CollectionRequestInterface),
            Role::CollectionRequestBuilder => Some(Role::CollectionRequestBuilderInterface),
            Role::Client => Some(Role::ClientInterface),
            Role::Type | Role::CollectionResponse => None,
            interface => Some(interface),
        }
    }

    /// Name suffix appended to the element's base identifier.
    pub fn suffix(self) -> &'static str {
        match self.implementation() {
            Role::Request | Role::CollectionRequest => "Request",
            Role::RequestBuilder | Role::CollectionRequestBuilder => "RequestBuilder",
            Role::CollectionPage => "Page",
            Role::CollectionResponse => "Response",
            _ => "",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Type => "type",
            Role::Request => "request",
            Role::RequestInterface => "request-interface",
            Role::RequestBuilder => "request-builder",
            Role::RequestBuilderInterface => "request-builder-interface",
            Role::CollectionPage => "collection-page",
            Role::CollectionPageInterface => "collection-page-interface",
            Role::CollectionRequest => "collection-request",
            Role::CollectionRequestInterface => "collection-request-interface",
            Role::CollectionRequestBuilder => "collection-request-builder",
            Role::CollectionRequestBuilderInterface => "collection-request-builder-interface",
            Role::CollectionResponse => "collection-response",
            Role::Client => "client",
            Role::ClientInterface => "client-interface",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
