use std::{
    collections::{HashMap, HashSet},
    path::Path,
    str::FromStr,
};

use graphgen_core::capitalize;
use serde::Deserialize;

use crate::{Error, Model, ModelClass, ModelEnum, Result, SourceContext};

/// On-disk shape of a model file.
#[derive(Debug, Deserialize)]
struct ModelFile {
    namespace: String,
    #[serde(default)]
    enums: Vec<ModelEnum>,
    #[serde(default)]
    classes: Vec<ModelClass>,
}

/// Source format of a model file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Pick the format from a file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Toml,
        }
    }
}

/// Load a model file from the given path.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Model> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let filename = path.display().to_string();
    parse_str_with_filename(&content, &filename, Format::from_path(path))
}

/// Parse a TOML model (uses "model.toml" as the filename in diagnostics).
pub fn parse_str(content: &str) -> Result<Model> {
    parse_str_with_filename(content, "model.toml", Format::Toml)
}

/// Parse a model from a string with a custom filename for error reporting.
pub fn parse_str_with_filename(content: &str, filename: &str, format: Format) -> Result<Model> {
    let ctx = SourceContext::new(content, filename);
    let file: ModelFile = match format {
        Format::Toml => toml::from_str(content).map_err(|e| ctx.parse_error(e))?,
        Format::Json => serde_json::from_str(content).map_err(|e| ctx.json_error(e))?,
    };

    validate(&file, &ctx)?;

    let mut model = Model::new(file.namespace);
    for model_enum in file.enums {
        model.add_enum(model_enum);
    }
    for class in file.classes {
        model.add_class(class);
    }
    Ok(model)
}

impl FromStr for Model {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_str(s)
    }
}

fn validate(file: &ModelFile, ctx: &SourceContext) -> Result<()> {
    if file.namespace.trim().is_empty() {
        return Err(ctx.validation_error("namespace cannot be empty", ""));
    }

    // Classes and enums share one namespace in the generated headers.
    let mut types = HashSet::new();
    for model_enum in &file.enums {
        validate_enum(model_enum, ctx)?;
        if !types.insert(model_enum.name.as_str()) {
            return Err(ctx.duplicate_name_error(&model_enum.name, "type"));
        }
    }
    for class in &file.classes {
        validate_class(class, ctx)?;
        if !types.insert(class.name.as_str()) {
            return Err(ctx.duplicate_name_error(&class.name, "type"));
        }
    }

    validate_bases(file, ctx)
}

fn validate_enum(model_enum: &ModelEnum, ctx: &SourceContext) -> Result<()> {
    if model_enum.name.is_empty() {
        return Err(ctx.validation_error("enum name cannot be empty", ""));
    }

    let mut seen = HashSet::new();
    // Enumerators are the capitalized member names; C++ keywords are all
    // lowercase, so a capitalized name never needs escaping.
    let mut enumerators: HashMap<String, &str> = HashMap::new();
    for member in &model_enum.members {
        if member.name.is_empty() {
            return Err(ctx.validation_error(
                format!("member name in enum '{}' cannot be empty", model_enum.name),
                &model_enum.name,
            ));
        }
        if !seen.insert(member.name.as_str()) {
            return Err(ctx.duplicate_name_error(&member.name, "enum member"));
        }
        let enumerator = capitalize(&member.name);
        if let Some(first) = enumerators.insert(enumerator.clone(), &member.name) {
            return Err(ctx.validation_error(
                format!(
                    "enum members '{first}' and '{}' of '{}' both become enumerator '{enumerator}'",
                    member.name, model_enum.name
                ),
                &member.name,
            ));
        }
    }
    Ok(())
}

fn validate_class(class: &ModelClass, ctx: &SourceContext) -> Result<()> {
    if class.name.is_empty() {
        return Err(ctx.validation_error("class name cannot be empty", ""));
    }

    let mut seen = HashSet::new();
    for property in &class.properties {
        if property.name.is_empty() {
            return Err(ctx.validation_error(
                format!("property name in class '{}' cannot be empty", class.name),
                &class.name,
            ));
        }
        if property.type_name.is_empty() {
            return Err(ctx.validation_error(
                format!("property '{}.{}' has no type", class.name, property.name),
                &property.name,
            ));
        }
        if !seen.insert(property.name.as_str()) {
            return Err(ctx.duplicate_name_error(&property.name, "property"));
        }
    }
    Ok(())
}

fn validate_bases(file: &ModelFile, ctx: &SourceContext) -> Result<()> {
    let bases = |name: &str| {
        file.classes
            .iter()
            .find(|class| class.name == name)
            .and_then(|class| class.base.as_deref())
    };

    for class in &file.classes {
        let Some(base) = class.base.as_deref() else {
            continue;
        };
        if !file.classes.iter().any(|c| c.name == base) {
            return Err(ctx.unknown_base_error(&class.name, base));
        }

        let mut chain = vec![class.name.as_str()];
        let mut current = Some(base);
        while let Some(name) = current {
            if chain.contains(&name) {
                chain.push(name);
                return Err(ctx.base_cycle_error(&class.name, &chain));
            }
            chain.push(name);
            current = bases(name);
        }
    }
    Ok(())
}
