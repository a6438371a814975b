use graphgen_codegen::{
    Result,
    builder::CodeBuilder,
    entity::{BackingInt, Descriptor},
    generation::Dependencies,
};

use super::{Declaration, Entity, RenderContext, model_type::deserialize_signature};
use crate::CppTarget;

/// Enumerator lines, comma-separated, with an explicit value when one is given.
fn members(ctx: &RenderContext<'_>, members: &[(String, Option<i64>)]) -> String {
    let mut builder = ctx.target.builder();
    for (index, (name, value)) in members.iter().enumerate() {
        let separator = if index + 1 < members.len() { "," } else { "" };
        match value {
            Some(value) => builder.push_line(&format!("{name} = {value}{separator}")),
            None => builder.push_line(&format!("{name}{separator}")),
        };
    }
    builder.build()
}

/// `|`, `&` and `|=` over the underlying integer.
fn flag_operators(ctx: &RenderContext<'_>, name: &str) -> Vec<String> {
    let underlying = format!("std::underlying_type_t<{name}>");
    let binary = |operator: &str| {
        ctx.function(
            &format!("inline {name} operator{operator}(const {name} lhs, const {name} rhs) noexcept"),
            |body| {
                body.push_line(&format!(
                    "return static_cast<{name}>(static_cast<{underlying}>(lhs) {operator} static_cast<{underlying}>(rhs));"
                ));
            },
        )
    };

    let assign = ctx.function(
        &format!("inline {name}& operator|=({name}& lhs, const {name} rhs) noexcept"),
        |body| {
            body.push_line(&format!(
                "lhs = static_cast<{name}>(static_cast<{underlying}>(lhs) | static_cast<{underlying}>(rhs));"
            ))
                .push_blank()
                .push_line("return lhs;");
        },
    );

    vec![binary("|"), binary("&"), assign]
}

/// Exact match of the trimmed input against each member's model name.
fn parse_function(ctx: &RenderContext<'_>, name: &str, members: &[(String, &str)]) -> String {
    ctx.function(
        &format!("inline bool ParseEnumValue(const std::wstring_view value, {name}& object) noexcept"),
        |body| {
            if !members.is_empty() {
                body.push_line("const auto trimmedValue{ Utils::TrimString(value) };")
                    .push_blank();
            }
            for (index, (enumerator, original)) in members.iter().enumerate() {
                let keyword = if index == 0 { "if" } else { "else if" };
                body.push_line(&format!("{keyword} (trimmedValue == L\"{original}\")"));
                body.scope()
                    .push_line(&format!("object = {name}::{enumerator};"))
                    .push_blank()
                    .push_line("return true;");
            }
            if !members.is_empty() {
                body.push_blank();
            }
            body.push_line("return false;");
        },
    )
}

fn deserialize_function(ctx: &RenderContext<'_>, name: &str, flags: bool) -> String {
    ctx.function(&deserialize_signature(name), |body| {
        if flags {
            write_flags_deserialize(body, name);
        } else {
            body.push_line("const auto enumValue{ jsonValue.as_string() };")
                .push_blank()
                .push_line("return ParseEnumValue(enumValue, object);");
        }
    })
}

/// Split the token list and OR every parsed member into the result.
fn write_flags_deserialize(body: &mut CodeBuilder, name: &str) {
    body.push_line(&format!("object = static_cast<{name}>(0);"))
        .push_blank()
        .push_line("const auto enumValues{ Utils::SplitLine(jsonValue.as_string()) };")
        .push_blank()
        .push_line("for (const auto& enumValue : enumValues)");
    {
        let mut each = body.scope();
        each.push_line(&format!("{name} enumObject{{ static_cast<{name}>(0) }};"))
            .push_blank()
            .push_line("if (!ParseEnumValue(enumValue, enumObject))");
        each.scope().push_line("return false;");
        each.push_blank().push_line("object |= enumObject;");
    }
    body.push_blank().push_line("return true;");
}

/// Render an enumeration with its parsing and deserialization functions.
pub fn render(descriptor: &Descriptor<'_>, ctx: &RenderContext<'_>) -> Result<Entity> {
    let model_enum = descriptor.as_enum()?;
    let name = ctx.names.name(descriptor);
    let backing = CppTarget::backing_type(BackingInt::for_enum(model_enum));

    let mut dependencies = Dependencies::new(&name);
    dependencies
        .add_system(backing)
        .add_system("std::wstring_view")
        .add_system("web::json::value")
        .add_user("StringUtils");

    let enumerators: Vec<(String, &str)> = model_enum
        .members
        .iter()
        .map(|member| (ctx.names.enumerator_name(&member.name), member.name.as_str()))
        .collect();

    let mut declaration =
        Declaration::enumeration(format!("{name} model enumeration."), &name, backing);
    if !enumerators.is_empty() {
        let values: Vec<(String, Option<i64>)> = enumerators
            .iter()
            .zip(&model_enum.members)
            .map(|((enumerator, _), member)| (enumerator.clone(), member.value))
            .collect();
        declaration.push_member(members(ctx, &values));
    }

    let mut functions = Vec::new();
    if model_enum.flags {
        dependencies.add_system("std::underlying_type_t");
        functions.extend(flag_operators(ctx, &name));
    }
    functions.push(parse_function(ctx, &name, &enumerators));
    functions.push(deserialize_function(ctx, &name, model_enum.flags));

    Ok(Entity::new(
        name,
        descriptor.role(),
        dependencies,
        &declaration,
        functions,
        ctx.target,
    ))
}

#[cfg(test)]
mod tests {
    use graphgen_codegen::entity::{Element, Role};
    use graphgen_model::ModelEnum;

    use super::*;

    fn render_enum(model_enum: &ModelEnum) -> Entity {
        let target = CppTarget::DEFAULT;
        let ctx = RenderContext::new(&target, "");
        render(&Descriptor::new(Element::Enum(model_enum), Role::Type).unwrap(), &ctx).unwrap()
    }

    fn body_type() -> ModelEnum {
        ModelEnum::new("bodyType")
            .with_member("text", Some(0))
            .with_member("html", Some(1))
    }

    #[test]
    fn test_declaration() {
        let entity = render_enum(&body_type());
        assert_eq!(
            entity.declaration,
            "/// <summary>\n\
             /// BodyType model enumeration.\n\
             /// </summary>\n\
             enum class BodyType : std::uint8_t\n\
             {\n\
             \tText = 0,\n\
             \tHtml = 1\n\
             };\n"
        );
    }

    #[test]
    fn test_members_without_value() {
        let model_enum = ModelEnum::new("importance")
            .with_member("low", None)
            .with_member("high", Some(2));
        let entity = render_enum(&model_enum);
        assert!(entity.declaration.contains("\tLow,\n\tHigh = 2\n};\n"));
    }

    #[test]
    fn test_backing_width() {
        let negative = ModelEnum::new("offset")
            .with_member("back", Some(-5))
            .with_member("far", Some(300));
        assert!(render_enum(&negative).header.ends_with("enum class Offset : std::int16_t\n"));

        let wide = ModelEnum::new("size")
            .with_member("small", Some(0))
            .with_member("large", Some(300));
        assert!(render_enum(&wide).header.ends_with("enum class Size : std::uint16_t\n"));
    }

    #[test]
    fn test_parse_function() {
        let entity = render_enum(&body_type());
        assert_eq!(
            entity.functions[0],
            "inline bool ParseEnumValue(const std::wstring_view value, BodyType& object) noexcept\n\
             {\n\
             \tconst auto trimmedValue{ Utils::TrimString(value) };\n\
             \n\
             \tif (trimmedValue == L\"text\")\n\
             \t{\n\
             \t\tobject = BodyType::Text;\n\
             \n\
             \t\treturn true;\n\
             \t}\n\
             \telse if (trimmedValue == L\"html\")\n\
             \t{\n\
             \t\tobject = BodyType::Html;\n\
             \n\
             \t\treturn true;\n\
             \t}\n\
             \n\
             \treturn false;\n\
             }\n"
        );
    }

    #[test]
    fn test_every_member_is_parsed_to_itself() {
        let model_enum = ModelEnum::new("weekday")
            .with_member("monday", Some(1))
            .with_member("tuesday", Some(2))
            .with_member("wednesday", Some(4));
        let entity = render_enum(&model_enum);
        let parse = &entity.functions[0];

        for member in &model_enum.members {
            let branch = format!(
                "(trimmedValue == L\"{}\")\n\t{{\n\t\tobject = Weekday::{};\n",
                member.name,
                graphgen_core::capitalize(&member.name)
            );
            assert!(parse.contains(&branch), "{branch}");
        }
        assert!(parse.ends_with("\treturn false;\n}\n"));
    }

    #[test]
    fn test_deserialize_single_value() {
        let entity = render_enum(&body_type());
        assert_eq!(entity.functions.len(), 2);
        assert_eq!(
            entity.functions[1],
            "inline bool Deserialize(const web::json::value& jsonValue, BodyType& object) noexcept\n\
             {\n\
             \tconst auto enumValue{ jsonValue.as_string() };\n\
             \n\
             \treturn ParseEnumValue(enumValue, object);\n\
             }\n"
        );
    }

    #[test]
    fn test_flags() {
        let model_enum = ModelEnum::new("permission")
            .flags()
            .with_member("read", Some(1))
            .with_member("write", Some(2));
        let entity = render_enum(&model_enum);

        assert_eq!(entity.functions.len(), 5);
        assert_eq!(
            entity.functions[0],
            "inline Permission operator|(const Permission lhs, const Permission rhs) noexcept\n\
             {\n\
             \treturn static_cast<Permission>(static_cast<std::underlying_type_t<Permission>>(lhs) | static_cast<std::underlying_type_t<Permission>>(rhs));\n\
             }\n"
        );
        assert!(entity.functions[1].starts_with("inline Permission operator&("));
        assert_eq!(
            entity.functions[2],
            "inline Permission& operator|=(Permission& lhs, const Permission rhs) noexcept\n\
             {\n\
             \tlhs = static_cast<Permission>(static_cast<std::underlying_type_t<Permission>>(lhs) | static_cast<std::underlying_type_t<Permission>>(rhs));\n\
             \n\
             \treturn lhs;\n\
             }\n"
        );
        assert_eq!(
            entity.functions[4],
            "inline bool Deserialize(const web::json::value& jsonValue, Permission& object) noexcept\n\
             {\n\
             \tobject = static_cast<Permission>(0);\n\
             \n\
             \tconst auto enumValues{ Utils::SplitLine(jsonValue.as_string()) };\n\
             \n\
             \tfor (const auto& enumValue : enumValues)\n\
             \t{\n\
             \t\tPermission enumObject{ static_cast<Permission>(0) };\n\
             \n\
             \t\tif (!ParseEnumValue(enumValue, enumObject))\n\
             \t\t{\n\
             \t\t\treturn false;\n\
             \t\t}\n\
             \n\
             \t\tobject |= enumObject;\n\
             \t}\n\
             \n\
             \treturn true;\n\
             }\n"
        );
        assert!(entity.dependencies.system().any(|s| s == "std::underlying_type_t"));
    }

    #[test]
    fn test_dependencies() {
        let entity = render_enum(&body_type());
        assert_eq!(
            entity.dependencies.system().collect::<Vec<_>>(),
            ["std::uint8_t", "std::wstring_view", "web::json::value"]
        );
        assert_eq!(entity.dependencies.user().collect::<Vec<_>>(), ["StringUtils"]);
    }

    #[test]
    fn test_empty_enum() {
        let entity = render_enum(&ModelEnum::new("empty"));
        assert!(entity.declaration.ends_with("enum class Empty : std::uint8_t\n{\n};\n"));
        assert_eq!(
            entity.functions[0],
            "inline bool ParseEnumValue(const std::wstring_view value, Empty& object) noexcept\n{\n\treturn false;\n}\n"
        );
    }
}
