use graphgen_codegen::{
    Result,
    entity::{BaseList, Descriptor, Facet, Role},
    generation::Dependencies,
};

use super::{Declaration, Entity, RenderContext, add_request_constructor_dependencies, header};

/// A CRUD verb of a request.
#[derive(Debug, Clone, Copy)]
struct Verb {
    method: &'static str,
    /// Protocol method constant under `web::http::methods`.
    protocol: &'static str,
    /// Whether the entity is sent in the body.
    sends_entity: bool,
    /// Whether the response entity is returned to the caller.
    returns_entity: bool,
}

const VERBS: [Verb; 4] = [
    Verb {
        method: "GetAsync",
        protocol: "GET",
        sends_entity: false,
        returns_entity: true,
    },
    Verb {
        method: "CreateAsync",
        protocol: "POST",
        sends_entity: true,
        returns_entity: true,
    },
    Verb {
        method: "UpdateAsync",
        protocol: "PATCH",
        sends_entity: true,
        returns_entity: true,
    },
    Verb {
        method: "DeleteAsync",
        protocol: "DEL",
        sends_entity: false,
        returns_entity: false,
    },
];

impl Verb {
    fn signature(&self, entity: &str) -> String {
        let result = if self.returns_entity { entity } else { "void" };
        let parameters = if self.sends_entity {
            format!("const {entity}& entity, const pplx::cancellation_token& token")
        } else {
            "const pplx::cancellation_token& token".to_string()
        };
        format!("std::future<{result}> {}({parameters}) noexcept", self.method)
    }

    fn prototype(&self, entity: &str) -> String {
        format!("virtual {} = 0;", self.signature(entity))
    }

    fn definition(&self, ctx: &RenderContext<'_>, entity: &str) -> String {
        let signature = format!("{} override", self.signature(entity));
        let arguments = if self.sends_entity {
            "entity, method, token"
        } else {
            "method, token"
        };

        ctx.function(&signature, |body| {
            body.push_line(&format!(
                "constexpr auto method{{ web::http::methods::{} }};",
                self.protocol
            ))
            .push_blank();
            if self.returns_entity {
                body.push_line(&format!(
                    "const {entity} responseEntity{{ co_await SendAsync<{entity}>({arguments}) }};"
                ))
                .push_blank()
                .push_line("co_return responseEntity;");
            } else {
                body.push_line(&format!("co_await SendAsync<{entity}>({arguments});"));
            }
        })
    }
}

fn summary(entity: &str) -> String {
    format!("A request for {entity} entity.")
}

/// Render the request of an entity class, or its interface.
pub fn render(descriptor: &Descriptor<'_>, ctx: &RenderContext<'_>) -> Result<Entity> {
    descriptor.as_class()?;

    let name = ctx.names.name(descriptor);
    let entity = ctx.role_name(descriptor, Role::Type);
    let interface = ctx.role_name(descriptor, Role::RequestInterface);

    let mut dependencies = Dependencies::new(&name);
    dependencies
        .add_system("std::future")
        .add_system("pplx::cancellation_token")
        .add_user(&entity);

    let declaration = match descriptor.role().facet() {
        Facet::Interface => {
            dependencies.add_user("IBaseRequest");

            let mut declaration = Declaration::interface(
                header::interface_summary(&summary(&entity)),
                &name,
                Some("IBaseRequest".to_string()),
            );
            declaration.push_member(ctx.virtual_destructor(&name));
            declaration.push_member(
                VERBS
                    .iter()
                    .map(|verb| verb.prototype(&entity))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
            declaration
        }
        Facet::Implementation => {
            dependencies
                .add_system("web::http::methods")
                .add_user(&interface)
                .add_user("BaseRequest");
            add_request_constructor_dependencies(&mut dependencies);

            let bases = BaseList::implementation(Some(interface), Some("BaseRequest".to_string()));
            let mut declaration = Declaration::class(summary(&entity), &name, bases, true);
            declaration.push_member(ctx.request_constructor(&name, "BaseRequest"));
            declaration.push_member(ctx.destructor(&name));
            for verb in &VERBS {
                declaration.push_member(verb.definition(ctx, &entity));
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
