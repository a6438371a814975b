//! Role generators.
//!
//! Each generator turns one [`Descriptor`] into an [`Entity`]: its
//! dependencies, its declaration and any free functions that follow it.
//! Interface and implementation facets of a role are rendered by separate
//! functions over the same derived names.

mod client;
mod collection;
mod header;
mod model_enum;
mod model_type;
mod navigation;
mod request;
mod request_builder;

use graphgen_codegen::{
    Result,
    builder::CodeBuilder,
    entity::{Descriptor, Element, NameDeriver, Role},
    generation::Dependencies,
};

use crate::{CppTarget, CppTypeMapper, IncludeBlock};

pub use header::Declaration;

/// Everything generated for one descriptor.
#[derive(Debug, Clone)]
pub struct Entity {
    pub name: String,
    pub role: Role,
    pub dependencies: Dependencies,
    /// Comment, signature and base clause of the declaration.
    pub header: String,
    /// The complete declaration, terminated by `};`.
    pub declaration: String,
    /// Free functions declared after the type (operators, parsing, deserialization).
    pub functions: Vec<String>,
}

impl Entity {
    fn new(
        name: String,
        role: Role,
        dependencies: Dependencies,
        declaration: &Declaration,
        functions: Vec<String>,
        target: &CppTarget,
    ) -> Self {
        let mut header = target.builder();
        declaration.write_header(&mut header);
        let mut body = target.builder();
        declaration.write(&mut body);

        Self {
            name,
            role,
            dependencies,
            header: header.build(),
            declaration: body.build(),
            functions,
        }
    }

    pub fn includes(&self, target: &CppTarget) -> IncludeBlock {
        IncludeBlock::resolve(&self.dependencies, target)
    }

    /// Render the complete header file inside `namespace` (already in
    /// `A::B` form).
    pub fn render_file(&self, namespace: &str, target: &CppTarget) -> String {
        let mut builder = target.builder();
        builder.push_line("#pragma once").push_blank();

        let includes = self.includes(target);
        if !includes.is_empty() {
            builder.push_text(&includes.render()).push_blank();
        }

        builder.push_line(&format!("namespace {namespace}"));
        {
            let mut scope = builder.scope();
            scope.push_text(&self.declaration);
            for function in &self.functions {
                scope.push_blank().push_text(function);
            }
        }
        builder.build()
    }
}

/// Shared state of one rendering pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub target: &'a CppTarget,
    pub names: NameDeriver,
    pub types: CppTypeMapper,
    /// Default endpoint compiled into the client constructors.
    pub service_url: &'a str,
}

impl<'a> RenderContext<'a> {
    pub fn new(target: &'a CppTarget, service_url: &'a str) -> Self {
        Self {
            target,
            names: target.names(),
            types: target.types(),
            service_url,
        }
    }

    /// Name of the descriptor's element rendered as another role.
    fn role_name(&self, descriptor: &Descriptor<'_>, role: Role) -> String {
        self.names.role_name(&descriptor.element(), role)
    }

    /// A function or method definition: the signature followed by a braced body.
    fn function(&self, signature: &str, body: impl FnOnce(&mut CodeBuilder)) -> String {
        let mut builder = self.target.builder();
        builder.push_line(signature);
        {
            let mut scope = builder.scope();
            body(&mut *scope);
        }
        builder.build()
    }

    /// A constructor with a member initializer line and an empty body.
    fn constructor(&self, signature: &str, initializer: &str) -> String {
        let mut builder = self.target.builder();
        builder
            .push_line(signature)
            .push_continuation(&format!(": {initializer}"));
        drop(builder.scope());
        builder.build()
    }

    /// The `(requestUrl, baseClient)` constructor shared by requests and builders.
    fn request_constructor(&self, name: &str, base: &str) -> String {
        self.constructor(
            &format!(
                "explicit {name}(const std::wstring& requestUrl, IBaseClient& baseClient) noexcept"
            ),
            &format!("{base}{{ requestUrl, baseClient }}"),
        )
    }

    fn destructor(&self, name: &str) -> String {
        self.function(&format!("~{name}() noexcept override"), |_| {})
    }

    fn virtual_destructor(&self, name: &str) -> String {
        format!("virtual ~{name}() noexcept = default;")
    }
}

/// Dependencies every `(requestUrl, baseClient)` constructor needs.
fn add_request_constructor_dependencies(dependencies: &mut Dependencies) {
    dependencies.add_system("std::wstring").add_user("IBaseClient");
}

/// Render one descriptor.
///
/// Fails with a role mismatch when the descriptor's element cannot be
/// viewed the way its role requires.
pub fn render(descriptor: &Descriptor<'_>, ctx: &RenderContext<'_>) -> Result<Entity> {
    match descriptor.role() {
        Role::Type => match descriptor.element() {
            Element::Enum(_) => model_enum::render(descriptor, ctx),
            _ => model_type::render(descriptor, ctx),
        },
        Role::Request | Role::RequestInterface => request::render(descriptor, ctx),
        Role::RequestBuilder | Role::RequestBuilderInterface => {
            request_builder::render(descriptor, ctx)
        }
        Role::CollectionPage | Role::CollectionPageInterface => {
            collection::render_page(descriptor, ctx)
        }
        Role::CollectionRequest | Role::CollectionRequestInterface => {
            collection::render_request(descriptor, ctx)
        }
        Role::CollectionRequestBuilder | Role::CollectionRequestBuilderInterface => {
            collection::render_request_builder(descriptor, ctx)
        }
        Role::CollectionResponse => collection::render_response(descriptor, ctx),
        Role::Client | Role::ClientInterface => client::render(descriptor, ctx),
    }
}

#[cfg(test)]
mod tests {
    use graphgen_model::{ClassKind, ModelClass};

    use super::*;

    #[test]
    fn test_render_file_layout() {
        let target = CppTarget::DEFAULT;
        let ctx = RenderContext::new(&target, "https://localhost");
        let class = ModelClass::new("item", ClassKind::Complex);
        let descriptor = Descriptor::new(Element::Class(&class), Role::Type).unwrap();

        let entity = render(&descriptor, &ctx).unwrap();
        let file = entity.render_file("Microsoft::Graph", &target);

        assert!(file.starts_with("#pragma once\n\n#include <any>\n"));
        assert!(file.contains("#include \"JsonUtils.h\"\n\nnamespace Microsoft::Graph\n{\n\t/// <summary>\n"));
        assert!(file.contains("\t};\n\n\tinline bool Deserialize("));
        assert!(file.ends_with("\t}\n}\n"));
    }

    #[test]
    fn test_constructor_and_destructor() {
        let target = CppTarget::DEFAULT;
        let ctx = RenderContext::new(&target, "");
        assert_eq!(
            ctx.request_constructor("UserRequest", "BaseRequest"),
            "explicit UserRequest(const std::wstring& requestUrl, IBaseClient& baseClient) noexcept\n\
             \t: BaseRequest{ requestUrl, baseClient }\n\
             {\n\
             }\n"
        );
        assert_eq!(ctx.destructor("UserRequest"), "~UserRequest() noexcept override\n{\n}\n");
        assert_eq!(
            ctx.virtual_destructor("IUserRequest"),
            "virtual ~IUserRequest() noexcept = default;"
        );
    }
}
