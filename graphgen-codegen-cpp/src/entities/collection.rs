use graphgen_codegen::{
    Result,
    entity::{BaseList, Descriptor, Facet, Role},
    generation::Dependencies,
    language::TypeMapper,
};
use graphgen_model::{ModelClass, ModelProperty};

use super::{
    Declaration, Entity, RenderContext, add_request_constructor_dependencies, header,
    model_type::{deserialize_signature, write_optional_field, write_required_field},
    request_builder::{create_request_method, create_request_prototype},
};

/// Names shared by the roles of one collection-valued navigation property.
struct CollectionNames {
    /// Role name of the descriptor being rendered.
    name: String,
    /// Capitalized owning class.
    owner: String,
    /// Element type of the collection.
    element: String,
}

impl CollectionNames {
    fn new(
        descriptor: &Descriptor<'_>,
        ctx: &RenderContext<'_>,
        owner: &ModelClass,
        property: &ModelProperty,
    ) -> Self {
        Self {
            name: ctx.names.name(descriptor),
            owner: ctx.names.naming().type_name(&owner.name),
            element: ctx.types.resolve(&property.type_name).spelling,
        }
    }

    fn summary(&self, what: &str) -> String {
        format!("{what} {} collection for {} entity.", self.element, self.owner)
    }

    /// Implementation summary, or the interface form of it.
    fn role_summary(&self, what: &str, facet: Facet) -> String {
        let summary = self.summary(what);
        match facet {
            Facet::Implementation => summary,
            Facet::Interface => header::interface_summary(&summary),
        }
    }

    fn dependencies(&self, ctx: &RenderContext<'_>, property: &ModelProperty) -> Dependencies {
        let mut dependencies = Dependencies::new(&self.name);
        dependencies.add_resolved(&ctx.types.resolve(&property.type_name));
        dependencies
    }
}

fn entity(
    names: CollectionNames,
    descriptor: &Descriptor<'_>,
    ctx: &RenderContext<'_>,
    dependencies: Dependencies,
    declaration: &Declaration,
    functions: Vec<String>,
) -> Entity {
    Entity::new(
        names.name,
        descriptor.role(),
        dependencies,
        declaration,
        functions,
        ctx.target,
    )
}

/// Render a page of a collection, or its interface.
pub fn render_page(descriptor: &Descriptor<'_>, ctx: &RenderContext<'_>) -> Result<Entity> {
    let (owner, property) = descriptor.as_property()?;
    let names = CollectionNames::new(descriptor, ctx, owner, property);
    let facet = descriptor.role().facet();
    let summary = names.role_summary("A page of", facet);
    let element = &names.element;
    let mut dependencies = names.dependencies(ctx, property);

    let declaration = match facet {
        Facet::Interface => {
            dependencies.add_user("ICollectionPage");

            let mut declaration = Declaration::interface(
                summary,
                &names.name,
                Some(format!("ICollectionPage<{element}>")),
            );
            declaration.push_member(ctx.virtual_destructor(&names.name));
            declaration
        }
        Facet::Implementation => {
            let interface = ctx.role_name(descriptor, Role::CollectionPageInterface);
            let primary = format!("CollectionPage<{element}>");
            dependencies
                .add_system("std::vector")
                .add_system("std::wstring")
                .add_system("std::move")
                .add_user(&interface)
                .add_user("CollectionPage");

            let mut declaration = Declaration::class(
                summary,
                &names.name,
                BaseList::implementation(Some(interface), Some(primary.clone())),
                true,
            );
            declaration.push_member(ctx.constructor(
                &format!(
                    "explicit {}(std::vector<{element}> items, std::wstring nextLink) noexcept",
                    names.name
                ),
                &format!("{primary}{{ std::move(items), std::move(nextLink) }}"),
            ));
            declaration.push_member(ctx.destructor(&names.name));
            declaration
        }
    };

    Ok(entity(names, descriptor, ctx, dependencies, &declaration, Vec::new()))
}

/// Render the request of a collection, or its interface.
pub fn render_request(descriptor: &Descriptor<'_>, ctx: &RenderContext<'_>) -> Result<Entity> {
    let (owner, property) = descriptor.as_property()?;
    let names = CollectionNames::new(descriptor, ctx, owner, property);
    let facet = descriptor.role().facet();
    let summary = names.role_summary("A request for", facet);
    let element = &names.element;
    let response = ctx.role_name(descriptor, Role::CollectionResponse);

    let mut dependencies = names.dependencies(ctx, property);
    dependencies
        .add_system("std::future")
        .add_system("pplx::cancellation_token")
        .add_user(&response);

    let get = format!("std::future<{response}> GetAsync(const pplx::cancellation_token& token) noexcept");
    let add = format!(
        "std::future<{element}> AddAsync(const {element}& entity, const pplx::cancellation_token& token) noexcept"
    );

    let declaration = match facet {
        Facet::Interface => {
            dependencies.add_user("IBaseRequest");

            let mut declaration =
                Declaration::interface(summary, &names.name, Some("IBaseRequest".to_string()));
            declaration.push_member(ctx.virtual_destructor(&names.name));
            declaration.push_member(format!("virtual {get} = 0;\nvirtual {add} = 0;"));
            declaration
        }
        Facet::Implementation => {
            let interface = ctx.role_name(descriptor, Role::CollectionRequestInterface);
            dependencies
                .add_system("web::http::methods")
                .add_user(&interface)
                .add_user("BaseRequest");
            add_request_constructor_dependencies(&mut dependencies);

            let mut declaration = Declaration::class(
                summary,
                &names.name,
                BaseList::implementation(Some(interface), Some("BaseRequest".to_string())),
                true,
            );
            declaration.push_member(ctx.request_constructor(&names.name, "BaseRequest"));
            declaration.push_member(ctx.destructor(&names.name));
            declaration.push_member(ctx.function(&format!("{get} override"), |body| {
                body.push_line("constexpr auto method{ web::http::methods::GET };")
                    .push_blank()
                    .push_line(&format!(
                        "const {response} response{{ co_await SendAsync<{response}>(method, token) }};"
                    ))
                    .push_blank()
                    .push_line("co_return response;");
            }));
            declaration.push_member(ctx.function(&format!("{add} override"), |body| {
                body.push_line("constexpr auto method{ web::http::methods::POST };")
                    .push_blank()
                    .push_line(&format!(
                        "const {element} responseEntity{{ co_await SendAsync<{element}>(entity, method, token) }};"
                    ))
                    .push_blank()
                    .push_line("co_return responseEntity;");
            }));
            declaration
        }
    };

    Ok(entity(names, descriptor, ctx, dependencies, &declaration, Vec::new()))
}

/// Render the request builder of a collection, or its interface.
pub fn render_request_builder(
    descriptor: &Descriptor<'_>,
    ctx: &RenderContext<'_>,
) -> Result<Entity> {
    let (owner, property) = descriptor.as_property()?;
    let names = CollectionNames::new(descriptor, ctx, owner, property);
    let facet = descriptor.role().facet();
    let summary = names.role_summary("A request builder for", facet);
    let request_interface = ctx.role_name(descriptor, Role::CollectionRequestInterface);
    let item_interface = ctx.names.item_builder(property, Facet::Interface);

    let mut dependencies = Dependencies::new(&names.name);
    dependencies
        .add_system("std::unique_ptr")
        .add_system("std::wstring")
        .add_user(&request_interface)
        .add_user(&item_interface);

    let item = format!("std::unique_ptr<{item_interface}> Item(const std::wstring& id) noexcept");

    let declaration = match facet {
        Facet::Interface => {
            dependencies.add_user("IBaseRequestBuilder");

            let mut declaration = Declaration::interface(
                summary,
                &names.name,
                Some("IBaseRequestBuilder".to_string()),
            );
            declaration.push_member(ctx.virtual_destructor(&names.name));
            declaration.push_member(format!(
                "{}\nvirtual {item} = 0;",
                create_request_prototype(&request_interface)
            ));
            declaration
        }
        Facet::Implementation => {
            let interface = ctx.role_name(descriptor, Role::CollectionRequestBuilderInterface);
            let request = ctx.role_name(descriptor, Role::CollectionRequest);
            let item_builder = ctx.names.item_builder(property, Facet::Implementation);
            dependencies
                .add_system("std::make_unique")
                .add_user(&interface)
                .add_user(&request)
                .add_user(&item_builder)
                .add_user("BaseRequestBuilder");
            add_request_constructor_dependencies(&mut dependencies);

            let mut declaration = Declaration::class(
                summary,
                &names.name,
                BaseList::implementation(Some(interface), Some("BaseRequestBuilder".to_string())),
                true,
            );
            declaration.push_member(ctx.request_constructor(&names.name, "BaseRequestBuilder"));
            declaration.push_member(ctx.destructor(&names.name));
            declaration.push_member(create_request_method(ctx, &request_interface, &request));
            declaration.push_member(ctx.function(&format!("{item} override"), |body| {
                body.push_line("const std::wstring requestUrl{ AppendSegmentToRequestUrl(id) };")
                    .push_line("IBaseClient& baseClient{ GetBaseClient() };")
                    .push_blank()
                    .push_line(&format!(
                        "return std::make_unique<{item_builder}>(requestUrl, baseClient);"
                    ));
            }));
            declaration
        }
    };

    Ok(entity(names, descriptor, ctx, dependencies, &declaration, Vec::new()))
}

/// Render the bulk response of a collection with its deserializer.
pub fn render_response(descriptor: &Descriptor<'_>, ctx: &RenderContext<'_>) -> Result<Entity> {
    let (owner, property) = descriptor.as_property()?;
    let names = CollectionNames::new(descriptor, ctx, owner, property);
    let element = &names.element;

    let mut dependencies = names.dependencies(ctx, property);
    dependencies
        .add_system("std::vector")
        .add_system("std::wstring")
        .add_system("web::json::value")
        .add_user("JsonUtils");

    let mut declaration = Declaration::class(
        names.summary("A response for"),
        &names.name,
        BaseList::default(),
        true,
    );
    declaration.push_member(header::documented_member(
        ctx.target.builder(),
        "The value.",
        &format!("std::vector<{element}> value;"),
    ));
    declaration.push_member(header::documented_member(
        ctx.target.builder(),
        "The next link.",
        "std::wstring nextLink;",
    ));

    let deserialize = ctx.function(&deserialize_signature(&names.name), |body| {
        write_required_field(body, "value", "object.value", Some(element));
        body.push_blank();
        write_optional_field(body, "@odata.nextLink", "object.nextLink");
        body.push_blank().push_line("return true;");
    });

    Ok(entity(names, descriptor, ctx, dependencies, &declaration, vec![deserialize]))
}

#[cfg(test)]
mod tests {
    use graphgen_codegen::entity::Element;
    use graphgen_model::ClassKind;

    use super::*;
    use crate::CppTarget;

    fn folder() -> ModelClass {
        ModelClass::new("folder", ClassKind::Entity)
            .with_property(ModelProperty::new("children", "driveItem").collection().navigation())
    }

    fn render_role(role: Role) -> Entity {
        let target = CppTarget::DEFAULT;
        let ctx = RenderContext::new(&target, "");
        let class = folder();
        let element = Element::Property {
            owner: &class,
            property: &class.properties[0],
        };
        let descriptor = Descriptor::new(element, role).unwrap();
        super::super::render(&descriptor, &ctx).unwrap()
    }

    #[test]
    fn test_page() {
        let entity = render_role(Role::CollectionPage);
        assert_eq!(entity.name, "FolderChildrenCollectionPage");
        assert_eq!(
            entity.header,
            "/// <summary>\n\
             /// A page of DriveItem collection for Folder entity.\n\
             /// </summary>\n\
             class FolderChildrenCollectionPage final\n\
             \t: public IFolderChildrenCollectionPage, public CollectionPage<DriveItem>\n"
        );
        assert!(entity.declaration.contains(
            "\texplicit FolderChildrenCollectionPage(std::vector<DriveItem> items, std::wstring nextLink) noexcept\n\
             \t\t: CollectionPage<DriveItem>{ std::move(items), std::move(nextLink) }\n\
             \t{\n\
             \t}\n"
        ));
        assert_eq!(
            entity.dependencies.user().collect::<Vec<_>>(),
            ["CollectionPage", "DriveItem", "IFolderChildrenCollectionPage"]
        );
    }

    #[test]
    fn test_page_interface() {
        let entity = render_role(Role::CollectionPageInterface);
        assert_eq!(entity.name, "IFolderChildrenCollectionPage");
        assert!(entity.header.contains(
            "/// An interface of a page of DriveItem collection for Folder entity.\n"
        ));
        assert!(entity.header.ends_with(
            "struct IFolderChildrenCollectionPage\n\t: public ICollectionPage<DriveItem>\n"
        ));
    }

    #[test]
    fn test_request() {
        let entity = render_role(Role::CollectionRequest);
        assert_eq!(entity.name, "FolderChildrenCollectionRequest");
        assert!(entity.header.contains("/// A request for DriveItem collection for Folder entity.\n"));
        assert!(entity.declaration.contains(
            "\tstd::future<FolderChildrenCollectionResponse> GetAsync(const pplx::cancellation_token& token) noexcept override\n\
             \t{\n\
             \t\tconstexpr auto method{ web::http::methods::GET };\n\
             \n\
             \t\tconst FolderChildrenCollectionResponse response{ co_await SendAsync<FolderChildrenCollectionResponse>(method, token) };\n\
             \n\
             \t\tco_return response;\n\
             \t}\n"
        ));
        assert!(entity.declaration.contains(
            "std::future<DriveItem> AddAsync(const DriveItem& entity, const pplx::cancellation_token& token) noexcept override"
        ));
        assert!(entity.declaration.contains("web::http::methods::POST"));
    }

    #[test]
    fn test_request_interface() {
        let entity = render_role(Role::CollectionRequestInterface);
        assert!(entity.declaration.contains(
            "\tvirtual std::future<FolderChildrenCollectionResponse> GetAsync(const pplx::cancellation_token& token) noexcept = 0;\n\
             \tvirtual std::future<DriveItem> AddAsync(const DriveItem& entity, const pplx::cancellation_token& token) noexcept = 0;\n"
        ));
        assert_eq!(
            entity.dependencies.user().collect::<Vec<_>>(),
            ["DriveItem", "FolderChildrenCollectionResponse", "IBaseRequest"]
        );
    }

    #[test]
    fn test_request_builder() {
        let entity = render_role(Role::CollectionRequestBuilder);
        assert_eq!(entity.name, "FolderChildrenCollectionRequestBuilder");
        assert!(entity.declaration.contains(
            "\tstd::unique_ptr<IFolderChildrenCollectionRequest> CreateRequest() noexcept override\n"
        ));
        assert!(entity.declaration.contains(
            "\tstd::unique_ptr<IDriveItemRequestBuilder> Item(const std::wstring& id) noexcept override\n\
             \t{\n\
             \t\tconst std::wstring requestUrl{ AppendSegmentToRequestUrl(id) };\n\
             \t\tIBaseClient& baseClient{ GetBaseClient() };\n\
             \n\
             \t\treturn std::make_unique<DriveItemRequestBuilder>(requestUrl, baseClient);\n\
             \t}\n"
        ));
        assert!(!entity.dependencies.user().any(|name| name == "DriveItem"));
    }

    #[test]
    fn test_request_builder_interface() {
        let entity = render_role(Role::CollectionRequestBuilderInterface);
        assert!(entity.header.ends_with(
            "struct IFolderChildrenCollectionRequestBuilder\n\t: public IBaseRequestBuilder\n"
        ));
        assert!(entity.declaration.contains(
            "\tvirtual std::unique_ptr<IFolderChildrenCollectionRequest> CreateRequest() noexcept = 0;\n\
             \tvirtual std::unique_ptr<IDriveItemRequestBuilder> Item(const std::wstring& id) noexcept = 0;\n"
        ));
    }

    #[test]
    fn test_response() {
        let entity = render_role(Role::CollectionResponse);
        assert_eq!(entity.name, "FolderChildrenCollectionResponse");
        assert!(entity.header.ends_with("class FolderChildrenCollectionResponse final\n"));
        assert!(entity.declaration.contains(
            "public:\n\
             \t/// <summary>\n\
             \t/// The value.\n\
             \t/// </summary>\n\
             \tstd::vector<DriveItem> value;\n\
             \n\
             \t/// <summary>\n\
             \t/// The next link.\n\
             \t/// </summary>\n\
             \tstd::wstring nextLink;\n\
             };\n"
        ));
        assert_eq!(
            entity.functions,
            ["inline bool Deserialize(const web::json::value& jsonValue, FolderChildrenCollectionResponse& object) noexcept\n\
              {\n\
              \tif (!Deserialize<DriveItem>(jsonValue.at(U(\"value\")), object.value))\n\
              \t{\n\
              \t\treturn false;\n\
              \t}\n\
              \n\
              \tif (jsonValue.has_field(U(\"@odata.nextLink\")))\n\
              \t{\n\
              \t\tif (!Deserialize(jsonValue.at(U(\"@odata.nextLink\")), object.nextLink))\n\
              \t\t{\n\
              \t\t\treturn false;\n\
              \t\t}\n\
              \t}\n\
              \n\
              \treturn true;\n\
              }\n"]
        );
    }

    #[test]
    fn test_class_descriptor_is_role_mismatch() {
        let target = CppTarget::DEFAULT;
        let ctx = RenderContext::new(&target, "");
        let class = folder();
        let descriptor = Descriptor::new(Element::Class(&class), Role::Type).unwrap();
        assert!(render_page(&descriptor, &ctx).is_err());
        assert!(render_response(&descriptor, &ctx).is_err());
    }
}
