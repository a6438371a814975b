use graphgen_codegen::{entity::Facet, generation::Dependencies};
use graphgen_model::{ModelClass, ModelProperty};

use super::RenderContext;

/// Where a navigation method takes the transport from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// A request builder hands on its own client.
    Builder,
    /// The service client is the transport.
    Client,
}

impl Transport {
    fn expression(self) -> &'static str {
        match self {
            Transport::Builder => "GetBaseClient()",
            Transport::Client => "*this",
        }
    }
}

/// Pure virtual accessor for a navigation property.
pub fn prototype(ctx: &RenderContext<'_>, owner: &ModelClass, property: &ModelProperty) -> String {
    format!(
        "virtual std::unique_ptr<{}> {}() noexcept = 0;",
        ctx.names.linked_builder(owner, property, Facet::Interface),
        ctx.names.method_name(property)
    )
}

/// Accessor extending the current path by the property's segment and
/// returning a builder for the linked entity.
pub fn method(
    ctx: &RenderContext<'_>,
    owner: &ModelClass,
    property: &ModelProperty,
    transport: Transport,
) -> String {
    let interface = ctx.names.linked_builder(owner, property, Facet::Interface);
    let implementation = ctx.names.linked_builder(owner, property, Facet::Implementation);
    let signature = format!(
        "std::unique_ptr<{interface}> {}() noexcept override",
        ctx.names.method_name(property)
    );

    ctx.function(&signature, |body| {
        body.push_line(&format!(
            "const std::wstring requestUrl{{ AppendSegmentToRequestUrl(L\"{}\") }};",
            property.name
        ))
        .push_line(&format!(
            "IBaseClient& baseClient{{ {} }};",
            transport.expression()
        ))
        .push_blank()
        .push_line(&format!(
            "return std::make_unique<{implementation}>(requestUrl, baseClient);"
        ));
    })
}

/// Record what the navigation accessors of `owner` reference.
pub fn add_dependencies(
    dependencies: &mut Dependencies,
    ctx: &RenderContext<'_>,
    owner: &ModelClass,
    facet: Facet,
) {
    let mut properties = owner.navigation_properties().peekable();
    if properties.peek().is_none() {
        return;
    }

    dependencies.add_system("std::unique_ptr");
    if facet == Facet::Implementation {
        dependencies
            .add_system("std::make_unique")
            .add_system("std::wstring")
            .add_user("IBaseClient");
    }

    for property in properties {
        dependencies.add_user(&ctx.names.linked_builder(owner, property, Facet::Interface));
        if facet == Facet::Implementation {
            dependencies.add_user(&ctx.names.linked_builder(owner, property, Facet::Implementation));
        }
    }
}

#[cfg(test)]
mod tests {
    use graphgen_model::ClassKind;

    use super::*;
    use crate::CppTarget;

    fn folder() -> ModelClass {
        ModelClass::new("folder", ClassKind::Entity)
            .with_property(ModelProperty::new("name", "String"))
            .with_property(ModelProperty::new("children", "driveItem").collection().navigation())
    }

    #[test]
    fn test_prototype() {
        let target = CppTarget::DEFAULT;
        let ctx = RenderContext::new(&target, "");
        let class = folder();
        assert_eq!(
            prototype(&ctx, &class, &class.properties[1]),
            "virtual std::unique_ptr<IFolderChildrenCollectionRequestBuilder> Children() noexcept = 0;"
        );
    }

    #[test]
    fn test_builder_method() {
        let target = CppTarget::DEFAULT;
        let ctx = RenderContext::new(&target, "");
        let class = folder();
        assert_eq!(
            method(&ctx, &class, &class.properties[1], Transport::Builder),
            "std::unique_ptr<IFolderChildrenCollectionRequestBuilder> Children() noexcept override\n\
             {\n\
             \tconst std::wstring requestUrl{ AppendSegmentToRequestUrl(L\"children\") };\n\
             \tIBaseClient& baseClient{ GetBaseClient() };\n\
             \n\
             \treturn std::make_unique<FolderChildrenCollectionRequestBuilder>(requestUrl, baseClient);\n\
             }\n"
        );
    }

    #[test]
    fn test_client_method_uses_itself() {
        let target = CppTarget::DEFAULT;
        let ctx = RenderContext::new(&target, "");
        let service = ModelClass::new("graphService", ClassKind::Container)
            .with_property(ModelProperty::new("me", "user").navigation());
        let text = method(&ctx, &service, &service.properties[0], Transport::Client);
        assert!(text.starts_with("std::unique_ptr<IUserRequestBuilder> Me() noexcept override\n"));
        assert!(text.contains("\tIBaseClient& baseClient{ *this };\n"));
        assert!(text.contains("std::make_unique<UserRequestBuilder>(requestUrl, baseClient)"));
    }

    #[test]
    fn test_dependencies() {
        let target = CppTarget::DEFAULT;
        let ctx = RenderContext::new(&target, "");
        let class = folder();

        let mut interface = Dependencies::new("IFolderRequestBuilder");
        add_dependencies(&mut interface, &ctx, &class, Facet::Interface);
        assert_eq!(interface.system().collect::<Vec<_>>(), ["std::unique_ptr"]);
        assert_eq!(
            interface.user().collect::<Vec<_>>(),
            ["IFolderChildrenCollectionRequestBuilder"]
        );

        let mut implementation = Dependencies::new("FolderRequestBuilder");
        add_dependencies(&mut implementation, &ctx, &class, Facet::Implementation);
        assert_eq!(
            implementation.user().collect::<Vec<_>>(),
            [
                "FolderChildrenCollectionRequestBuilder",
                "IBaseClient",
                "IFolderChildrenCollectionRequestBuilder"
            ]
        );
    }

    #[test]
    fn test_no_navigation_no_dependencies() {
        let target = CppTarget::DEFAULT;
        let ctx = RenderContext::new(&target, "");
        let class = ModelClass::new("note", ClassKind::Entity);
        let mut deps = Dependencies::new("NoteRequestBuilder");
        add_dependencies(&mut deps, &ctx, &class, Facet::Implementation);
        assert!(deps.is_empty());
    }
}
