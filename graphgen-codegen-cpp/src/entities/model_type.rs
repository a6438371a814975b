use graphgen_codegen::{
    Result,
    builder::CodeBuilder,
    entity::{BaseList, Descriptor},
    generation::Dependencies,
    language::TypeMapper,
};
use graphgen_core::split_words;
use graphgen_model::ModelProperty;

use super::{Declaration, Entity, RenderContext, header};
use crate::type_mapper::{DICTIONARY, WIDE_STRING};

/// Signature of the free `Deserialize` overload for `name`.
pub fn deserialize_signature(name: &str) -> String {
    format!("inline bool Deserialize(const web::json::value& jsonValue, {name}& object) noexcept")
}

/// `if (!call) { return false; }`
fn write_check(body: &mut CodeBuilder, call: &str) {
    body.push_line(&format!("if (!{call})"));
    body.scope().push_line("return false;");
}

/// Deserialize a field that must be present. Collections name their
/// element type explicitly.
pub fn write_required_field(body: &mut CodeBuilder, key: &str, member: &str, element: Option<&str>) {
    let call = match element {
        Some(element) => format!("Deserialize<{element}>(jsonValue.at(U(\"{key}\")), {member})"),
        None => format!("Deserialize(jsonValue.at(U(\"{key}\")), {member})"),
    };
    write_check(body, &call);
}

/// Deserialize a field only when the payload carries it.
pub fn write_optional_field(body: &mut CodeBuilder, key: &str, member: &str) {
    body.push_line(&format!("if (jsonValue.has_field(U(\"{key}\")))"));
    let mut scope = body.scope();
    write_check(&mut scope, &format!("Deserialize(jsonValue.at(U(\"{key}\")), {member})"));
}

/// Member comment: the property description, or one made up from its name.
fn member_summary(property: &ModelProperty) -> String {
    match property.description.as_deref().map(str::trim) {
        Some(description) if !description.is_empty() => description.to_string(),
        _ => format!("The {}.", split_words(&property.name)),
    }
}

/// Render a model class as a data type with its deserializer.
pub fn render(descriptor: &Descriptor<'_>, ctx: &RenderContext<'_>) -> Result<Entity> {
    let class = descriptor.as_class()?;
    let name = ctx.names.name(descriptor);
    let base = ctx.names.base_type(class);

    let mut dependencies = Dependencies::new(&name);
    dependencies
        .add_system("web::json::value")
        .add_user("JsonUtils");

    let mut declaration = Declaration::class(
        format!("{name} model type."),
        &name,
        BaseList::implementation(None, base.clone()),
        false,
    );

    // (json key, member, collection element type)
    let mut fields = Vec::with_capacity(class.properties.len());
    for property in &class.properties {
        let resolved = ctx.types.resolve(&property.type_name);
        dependencies.add_resolved(&resolved);

        let member = ctx.names.member_name(&property.name);
        let member_type = if property.collection {
            dependencies.add_system("std::vector");
            ctx.types.sequence_of(&resolved.spelling)
        } else {
            resolved.spelling.clone()
        };

        declaration.push_member(header::documented_member(
            ctx.target.builder(),
            &member_summary(property),
            &format!("{member_type} {member};"),
        ));
        fields.push((
            property.name.as_str(),
            member,
            property.collection.then_some(resolved.spelling),
        ));
    }

    match &base {
        Some(base) => {
            dependencies.add_user(base);
        }
        None => {
            dependencies.add_system(WIDE_STRING).add_system(DICTIONARY);
            declaration.push_member(header::documented_member(
                ctx.target.builder(),
                "Open data protocol payload.",
                &format!("{WIDE_STRING} odata;"),
            ));
            declaration.push_member(header::documented_member(
                ctx.target.builder(),
                "Additional data.",
                &format!("{DICTIONARY} additionalData;"),
            ));
        }
    }

    let deserialize = ctx.function(&deserialize_signature(&name), |body| {
        if let Some(base) = &base {
            write_check(body, &format!("Deserialize(jsonValue, static_cast<{base}&>(object))"));
            body.push_blank();
        }
        for (key, member, element) in &fields {
            write_required_field(body, key, &format!("object.{member}"), element.as_deref());
            body.push_blank();
        }
        if base.is_none() {
            write_optional_field(body, "@odata.type", "object.odata");
            body.push_blank();
        }
        body.push_line("return true;");
    });

    Ok(Entity::new(
        name,
        descriptor.role(),
        dependencies,
        &declaration,
        vec![deserialize],
        ctx.target,
    ))
}
