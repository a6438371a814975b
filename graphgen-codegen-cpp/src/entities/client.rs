use graphgen_codegen::{
    Result,
    entity::{BaseList, Descriptor, Facet, Role},
    generation::Dependencies,
};

use super::{
    Declaration, Entity, RenderContext, header,
    navigation::{self, Transport},
};

/// Escape `value` for use inside a wide string literal.
fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '"') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn summary(service: &str) -> String {
    format!("A service client for {service}.")
}

/// The three ways of constructing a client: against the default endpoint,
/// against a given endpoint, or over an existing HTTP client.
fn constructors(ctx: &RenderContext<'_>, name: &str) -> Vec<String> {
    let providers = "const std::shared_ptr<IAuthenticationProvider>& authenticationProvider, \
                     const std::shared_ptr<IHttpProvider>& httpProvider = nullptr";
    let service_url = escape_literal(ctx.service_url);

    vec![
        ctx.constructor(
            &format!("explicit {name}({providers}) noexcept"),
            &format!("BaseClient{{ L\"{service_url}\", authenticationProvider, httpProvider }}"),
        ),
        ctx.constructor(
            &format!("explicit {name}(const std::wstring& baseUrl, {providers}) noexcept"),
            "BaseClient{ baseUrl, authenticationProvider, httpProvider }",
        ),
        ctx.constructor(
            &format!("explicit {name}(const std::shared_ptr<HttpClient>& httpClient) noexcept"),
            &format!("BaseClient{{ L\"{service_url}\", httpClient }}"),
        ),
    ]
}

/// Render the service client of the container class, or its interface.
pub fn render(descriptor: &Descriptor<'_>, ctx: &RenderContext<'_>) -> Result<Entity> {
    let class = descriptor.as_class()?;
    let name = ctx.names.name(descriptor);
    let service = ctx.role_name(descriptor, Role::Client);
    let facet = descriptor.role().facet();

    let mut dependencies = Dependencies::new(&name);
    navigation::add_dependencies(&mut dependencies, ctx, class, facet);

    let declaration = match facet {
        Facet::Interface => {
            dependencies.add_user("IBaseClient");

            let mut declaration = Declaration::interface(
                header::interface_summary(&summary(&service)),
                &name,
                Some("IBaseClient".to_string()),
            );
            declaration.push_member(ctx.virtual_destructor(&name));

            let prototypes: Vec<String> = class
                .navigation_properties()
                .map(|property| navigation::prototype(ctx, class, property))
                .collect();
            if !prototypes.is_empty() {
                declaration.push_member(prototypes.join("\n"));
            }
            declaration
        }
        Facet::Implementation => {
            let interface = ctx.role_name(descriptor, Role::ClientInterface);
            dependencies
                .add_system("std::wstring")
                .add_system("std::shared_ptr")
                .add_user(&interface)
                .add_user("BaseClient")
                .add_user("IAuthenticationProvider")
                .add_user("IHttpProvider")
                .add_user("HttpClient");

            let bases = BaseList::implementation(Some(interface), Some("BaseClient".to_string()));
            let mut declaration = Declaration::class(summary(&service), &name, bases, true);
            for constructor in constructors(ctx, &name) {
                declaration.push_member(constructor);
            }
            declaration.push_member(ctx.destructor(&name));
            for property in class.navigation_properties() {
                declaration.push_member(navigation::method(ctx, class, property, Transport::Client));
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
