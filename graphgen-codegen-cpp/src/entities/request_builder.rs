use graphgen_codegen::{
    Result,
    entity::{BaseList, Descriptor, Facet, Role},
    generation::Dependencies,
};

use super::{
    Declaration, Entity, RenderContext, add_request_constructor_dependencies, header,
    navigation::{self, Transport},
};

fn summary(entity: &str) -> String {
    format!("A builder to create a request for {entity} entity.")
}

/// `CreateRequest()` prototype returning `interface`.
pub fn create_request_prototype(interface: &str) -> String {
    format!("virtual std::unique_ptr<{interface}> CreateRequest() noexcept = 0;")
}

/// `CreateRequest()` constructing `implementation` at the builder's path.
pub fn create_request_method(ctx: &RenderContext<'_>, interface: &str, implementation: &str) -> String {
    ctx.function(
        &format!("std::unique_ptr<{interface}> CreateRequest() noexcept override"),
        |body| {
            body.push_line("const std::wstring& baseUrl{ GetBaseUrl() };")
                .push_line("IBaseClient& baseClient{ GetBaseClient() };")
                .push_blank()
                .push_line(&format!(
                    "return std::make_unique<{implementation}>(baseUrl, baseClient);"
                ));
        },
    )
}

/// Render the request builder of an entity class, or its interface.
pub fn render(descriptor: &Descriptor<'_>, ctx: &RenderContext<'_>) -> Result<Entity> {
    let class = descriptor.as_class()?;

    let name = ctx.names.name(descriptor);
    let entity = ctx.role_name(descriptor, Role::Type);
    let request = ctx.role_name(descriptor, Role::Request);
    let request_interface = ctx.role_name(descriptor, Role::RequestInterface);
    let facet = descriptor.role().facet();

    let mut dependencies = Dependencies::new(&name);
    dependencies
        .add_system("std::unique_ptr")
        .add_user(&request_interface);
    navigation::add_dependencies(&mut dependencies, ctx, class, facet);

    let declaration = match facet {
        Facet::Interface => {
            dependencies.add_user("IBaseRequestBuilder");

            let mut declaration = Declaration::interface(
                header::interface_summary(&summary(&entity)),
                &name,
                Some("IBaseRequestBuilder".to_string()),
            );
            declaration.push_member(ctx.virtual_destructor(&name));

            let mut prototypes = vec![create_request_prototype(&request_interface)];
            prototypes.extend(
                class
                    .navigation_properties()
                    .map(|property| navigation::prototype(ctx, class, property)),
            );
            declaration.push_member(prototypes.join("\n"));
            declaration
        }
        Facet::Implementation => {
            let interface = ctx.role_name(descriptor, Role::RequestBuilderInterface);
            dependencies
                .add_system("std::make_unique")
                .add_user(&interface)
                .add_user(&request)
                .add_user("BaseRequestBuilder");
            add_request_constructor_dependencies(&mut dependencies);

            let bases = BaseList::implementation(
                Some(interface),
                Some("BaseRequestBuilder".to_string()),
            );
            let mut declaration = Declaration::class(summary(&entity), &name, bases, true);
            declaration.push_member(ctx.request_constructor(&name, "BaseRequestBuilder"));
            declaration.push_member(ctx.destructor(&name));
            declaration.push_member(create_request_method(ctx, &request_interface, &request));
            for property in class.navigation_properties() {
                declaration.push_member(navigation::method(ctx, class, property, Transport::Builder));
            }
            declaration
        }
    };

    Ok(Entity::new(
        name,
        descriptor.role(),
        dependencies,
        &declaration,
        Vec::new(),
        ctx.target,
    ))
}
