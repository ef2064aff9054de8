//! Render a registry schema as a cirrus resource module

use std::collections::{BTreeSet, VecDeque};

use anyhow::{Context, Result, bail};

use crate::cfn::{CfnProperty, CfnSchema};
use crate::naming;

const DOCS_URL: &str = "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide";

/// Shape of a property after `$ref` and inline enums are resolved
#[derive(Debug, Clone, PartialEq)]
enum Shape {
    String,
    Integer,
    Double,
    Boolean,
    Json,
    /// Rust name of an `allowed_values!` enum
    Enum(String),
    /// Definition name of a nested property type
    Struct(String),
    Tag,
    List(Box<Shape>),
    Map(Box<Shape>),
}

impl Shape {
    fn is_struct(&self) -> bool {
        matches!(self, Shape::Struct(_) | Shape::Tag)
    }

    fn is_collection(&self) -> bool {
        matches!(self, Shape::List(_) | Shape::Map(_) | Shape::Json)
    }
}

#[derive(Debug)]
struct Field {
    cfn_name: String,
    shape: Shape,
    required: bool,
    immutable: bool,
    doc: Option<String>,
}

#[derive(Debug)]
struct EnumDef {
    rust_name: String,
    cfn_name: String,
    values: Vec<String>,
}

#[derive(Debug)]
struct StructDef {
    cfn_name: String,
    doc: Option<String>,
    fields: Vec<Field>,
}

/// A resource module ready to render
pub struct ResourceModule<'a> {
    schema: &'a CfnSchema,
    type_name: String,
    service: String,
    resource: String,
    fields: Vec<Field>,
    enums: Vec<EnumDef>,
    structs: Vec<StructDef>,
}

impl<'a> ResourceModule<'a> {
    /// Resolve `schema` as the resource type `type_name`
    pub fn new(schema: &'a CfnSchema, type_name: &str) -> Result<Self> {
        let parts: Vec<&str> = type_name.split("::").collect();
        let [_, service, resource] = parts.as_slice() else {
            bail!(
                "Invalid type name format. Expected 'AWS::Service::Resource', got '{}'",
                type_name
            );
        };

        let mut module = ResourceModule {
            schema,
            type_name: type_name.to_string(),
            service: service.to_string(),
            resource: resource.to_string(),
            fields: Vec::new(),
            enums: Vec::new(),
            structs: Vec::new(),
        };

        let read_only = schema.read_only();
        let create_only = schema.create_only();
        let owner = naming::type_name(resource);
        let mut pending = VecDeque::new();

        for (name, prop) in &schema.properties {
            if read_only.contains(name.as_str()) {
                log::debug!("{}: skipping read-only property {}", type_name, name);
                continue;
            }
            let shape = module
                .shape(&owner, name, prop, false, &mut pending)
                .with_context(|| format!("{}.{}", type_name, name))?;
            module.fields.push(Field {
                cfn_name: name.clone(),
                shape,
                required: schema.required.contains(name),
                immutable: create_only.contains(name.as_str()),
                doc: prop.description.as_deref().and_then(naming::summary),
            });
        }

        let mut seen = BTreeSet::new();
        while let Some(def_name) = pending.pop_front() {
            if !seen.insert(def_name.clone()) {
                continue;
            }
            let def = module.definition(&def_name)?;
            let owner = naming::type_name(&def_name);
            let mut fields = Vec::new();
            for (name, prop) in &def.properties {
                let shape = module
                    .shape(&owner, name, prop, false, &mut pending)
                    .with_context(|| format!("{}.{}", def_name, name))?;
                fields.push(Field {
                    cfn_name: name.clone(),
                    shape,
                    required: def.required.contains(name),
                    immutable: false,
                    doc: prop.description.as_deref().and_then(naming::summary),
                });
            }
            module.structs.push(StructDef {
                cfn_name: def_name.clone(),
                doc: def.description.as_deref().and_then(naming::summary),
                fields,
            });
        }

        Ok(module)
    }

    /// Rust name of the resource struct
    pub fn rust_name(&self) -> String {
        naming::type_name(&self.resource)
    }

    /// File stem of the module (`ApiMapping` gives `api_mapping`)
    pub fn module_name(&self) -> String {
        naming::module_name(&self.resource)
    }

    fn definition(&self, name: &str) -> Result<&'a CfnProperty> {
        self.schema
            .definitions
            .get(name)
            .with_context(|| format!("Unresolved $ref to definition '{}'", name))
    }

    fn add_enum(&mut self, rust_name: String, cfn_name: &str, values: &[String]) {
        if self.enums.iter().any(|e| e.rust_name == rust_name) {
            return;
        }
        self.enums.push(EnumDef {
            rust_name,
            cfn_name: cfn_name.to_string(),
            values: values.to_vec(),
        });
    }

    fn shape(
        &mut self,
        owner: &str,
        prop_name: &str,
        prop: &'a CfnProperty,
        item: bool,
        pending: &mut VecDeque<String>,
    ) -> Result<Shape> {
        if let Some(def_name) = prop.ref_name() {
            if def_name == "Tag" {
                return Ok(Shape::Tag);
            }
            let def = self.definition(def_name)?;
            if let Some(values) = &def.enum_values {
                let rust_name = naming::type_name(def_name);
                self.add_enum(rust_name.clone(), def_name, values);
                return Ok(Shape::Enum(rust_name));
            }
            if !def.properties.is_empty() {
                pending.push_back(def_name.to_string());
                return Ok(Shape::Struct(def_name.to_string()));
            }
            return self.shape(owner, prop_name, def, item, pending);
        }

        if let Some(values) = &prop.enum_values {
            let suffix = if item { "Item" } else { "" };
            let rust_name = format!("{}{}{}", owner, naming::type_name(prop_name), suffix);
            self.add_enum(rust_name.clone(), prop_name, values);
            return Ok(Shape::Enum(rust_name));
        }

        let shape = match prop.type_name() {
            Some("string") => Shape::String,
            Some("integer") => Shape::Integer,
            Some("number") => Shape::Double,
            Some("boolean") => Shape::Boolean,
            Some("array") => {
                let inner = match &prop.items {
                    Some(items) => self.shape(owner, prop_name, items, true, pending)?,
                    None => Shape::String,
                };
                if inner.is_collection() {
                    Shape::Json
                } else {
                    Shape::List(Box::new(inner))
                }
            }
            Some("object") => match prop.pattern_properties.values().next() {
                Some(value) => {
                    let inner = self.shape(owner, prop_name, value, false, pending)?;
                    if inner.is_collection() {
                        Shape::Json
                    } else {
                        Shape::Map(Box::new(inner))
                    }
                }
                None => {
                    if !prop.properties.is_empty() {
                        log::warn!(
                            "{}.{}: inline object without a definition, typed as Json",
                            owner,
                            prop_name
                        );
                    }
                    Shape::Json
                }
            },
            _ => Shape::Json,
        };
        Ok(shape)
    }

    /// Render the module source
    pub fn render(&self) -> Result<String> {
        let mut used = BTreeSet::new();
        let mut body = Vec::new();

        for e in &self.enums {
            used.insert("allowed_values");
            body.push("allowed_values! {".to_string());
            body.push(format!("    /// Allowed values for `{}`", e.cfn_name));
            body.push(format!("    pub enum {} {{", e.rust_name));
            let mut variants = BTreeSet::new();
            for value in &e.values {
                let variant = naming::variant_name(value);
                if !variants.insert(variant.clone()) {
                    bail!(
                        "{}: values of {} collide on variant {}",
                        self.type_name,
                        e.rust_name,
                        variant
                    );
                }
                body.push(format!("        {} = \"{}\",", variant, value));
            }
            body.push("    }".to_string());
            body.push("}".to_string());
            body.push(String::new());
        }

        let rust_name = self.rust_name();
        let schema_const = naming::schema_const(&rust_name);
        let mut doc = vec![format!("/// `{}`", self.type_name)];
        if let Some(summary) = self.schema.description.as_deref().and_then(naming::summary) {
            doc.push("///".to_string());
            doc.extend(naming::wrap(&summary, 96).into_iter().map(|l| format!("/// {}", l)));
        }
        render_struct(&rust_name, &self.fields, &doc, &mut used, &mut body);

        body.push(String::new());
        body.push(format!("impl ResourceProperties for {} {{", rust_name));
        body.push(format!("    const TYPE: &'static str = \"{}\";", self.type_name));
        body.push(String::new());
        body.push("    fn schema() -> &'static ResourceSchema {".to_string());
        body.push(format!("        &{}", schema_const));
        body.push("    }".to_string());
        body.push("}".to_string());
        body.push(String::new());
        body.push(format!(
            "pub const {}: ResourceSchema = ResourceSchema {{",
            schema_const
        ));
        body.push(format!("    type_name: \"{}\",", self.type_name));
        body.push(format!(
            "    documentation: \"{}/aws-resource-{}-{}.html\",",
            DOCS_URL,
            self.service.to_lowercase(),
            self.resource.to_lowercase()
        ));
        body.push("    properties: &[".to_string());
        render_property_schemas(&self.fields, &mut used, &mut body);
        body.push("    ],".to_string());
        let attributes = self.schema.attributes();
        let quoted: Vec<String> = attributes.iter().map(|a| format!("\"{}\"", a)).collect();
        let line = format!("    attributes: &[{}],", quoted.join(", "));
        if line.len() > 100 {
            body.push("    attributes: &[".to_string());
            body.extend(quoted.iter().map(|a| format!("        {},", a)));
            body.push("    ],".to_string());
        } else {
            body.push(line);
        }
        body.push("};".to_string());

        for s in &self.structs {
            let name = naming::type_name(&s.cfn_name);
            let doc: Vec<String> = s
                .doc
                .as_deref()
                .map(|d| naming::wrap(d, 96))
                .unwrap_or_default()
                .into_iter()
                .map(|l| format!("/// {}", l))
                .collect();
            body.push(String::new());
            render_struct(&name, &s.fields, &doc, &mut used, &mut body);
            body.push(String::new());
            used.insert("StructSchema");
            body.push(format!(
                "pub const {}: StructSchema = StructSchema {{",
                naming::schema_const(&name)
            ));
            body.push(format!("    name: \"{}\",", s.cfn_name));
            body.push("    properties: &[".to_string());
            render_property_schemas(&s.fields, &mut used, &mut body);
            body.push("    ],".to_string());
            body.push("};".to_string());
        }

        let mut out = vec![
            format!("//! {} resource type", rust_name),
            "//!".to_string(),
            format!("//! Auto-generated from CloudFormation schema: {}", self.type_name),
            "//!".to_string(),
            "//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen".to_string(),
            String::new(),
        ];
        out.extend(imports(&used));
        out.push(String::new());
        out.extend(body);
        Ok(out.join("\n") + "\n")
    }
}

fn imports(used: &BTreeSet<&str>) -> Vec<String> {
    let mut lines = Vec::new();
    if used.contains("BTreeMap") {
        lines.push("use std::collections::BTreeMap;".to_string());
        lines.push(String::new());
    }
    if used.contains("allowed_values") {
        lines.push("use cirrus_core::allowed_values;".to_string());
    }
    lines.push("use cirrus_core::resource::ResourceProperties;".to_string());

    let mut schema = vec!["PropertySchema", "PropertyType", "ResourceSchema"];
    schema.extend(
        ["StructSchema", "TAG_SCHEMA"]
            .into_iter()
            .filter(|s| used.contains(s)),
    );
    let line = format!("use cirrus_core::schema::{{{}}};", schema.join(", "));
    if line.len() > 100 {
        lines.push("use cirrus_core::schema::{".to_string());
        lines.push(format!("    {},", schema.join(", ")));
        lines.push("};".to_string());
    } else {
        lines.push(line);
    }

    let values: Vec<&str> = ["Json", "List", "Map", "Tag", "Value"]
        .into_iter()
        .filter(|v| used.contains(v))
        .collect();
    match values.as_slice() {
        [] => {}
        [single] => lines.push(format!("use cirrus_core::{};", single)),
        many => lines.push(format!("use cirrus_core::{{{}}};", many.join(", "))),
    }
    lines.push("use serde::{Deserialize, Serialize};".to_string());
    lines
}

fn scalar(shape: &Shape) -> Option<&str> {
    match shape {
        Shape::String => Some("String"),
        Shape::Integer => Some("i64"),
        Shape::Double => Some("f64"),
        Shape::Boolean => Some("bool"),
        Shape::Enum(name) => Some(name.as_str()),
        _ => None,
    }
}

fn rust_type(shape: &Shape, used: &mut BTreeSet<&'static str>) -> String {
    match shape {
        Shape::Json => {
            used.insert("Json");
            "Json".to_string()
        }
        Shape::Tag => {
            used.insert("Tag");
            "Tag".to_string()
        }
        Shape::Struct(name) => naming::type_name(name),
        Shape::List(inner) if inner.is_struct() => format!("Vec<{}>", rust_type(inner, used)),
        Shape::List(inner) => {
            used.insert("List");
            format!("List<{}>", scalar(inner).unwrap_or("String"))
        }
        Shape::Map(inner) if inner.is_struct() => {
            used.insert("BTreeMap");
            format!("BTreeMap<String, {}>", rust_type(inner, used))
        }
        Shape::Map(inner) => {
            used.insert("Map");
            format!("Map<{}>", scalar(inner).unwrap_or("String"))
        }
        scalar_shape => {
            used.insert("Value");
            format!("Value<{}>", scalar(scalar_shape).unwrap_or("String"))
        }
    }
}

fn schema_type(shape: &Shape, used: &mut BTreeSet<&'static str>) -> String {
    match shape {
        Shape::String => "PropertyType::String".to_string(),
        Shape::Integer => "PropertyType::Integer".to_string(),
        Shape::Double => "PropertyType::Double".to_string(),
        Shape::Boolean => "PropertyType::Boolean".to_string(),
        Shape::Json => "PropertyType::Json".to_string(),
        Shape::Enum(name) => format!("PropertyType::Enum(&{}::SCHEMA)", name),
        Shape::Tag => {
            used.insert("TAG_SCHEMA");
            "PropertyType::Struct(&TAG_SCHEMA)".to_string()
        }
        Shape::Struct(name) => {
            used.insert("StructSchema");
            format!(
                "PropertyType::Struct(&{})",
                naming::schema_const(&naming::type_name(name))
            )
        }
        Shape::List(inner) => format!("PropertyType::List(&{})", schema_type(inner, used)),
        Shape::Map(inner) => format!("PropertyType::Map(&{})", schema_type(inner, used)),
    }
}

fn render_struct(
    name: &str,
    fields: &[Field],
    doc: &[String],
    used: &mut BTreeSet<&'static str>,
    out: &mut Vec<String>,
) {
    out.extend(doc.iter().cloned());
    let default = if fields.iter().any(|f| f.required) {
        ""
    } else {
        "Default, "
    };
    out.push(format!(
        "#[derive(Debug, Clone, {}PartialEq, Serialize, Deserialize)]",
        default
    ));
    out.push("#[serde(rename_all = \"PascalCase\", deny_unknown_fields)]".to_string());
    out.push(format!("pub struct {} {{", name));
    for field in fields {
        let (field_name, rename) = naming::field_name(&field.cfn_name);
        let mut ty = rust_type(&field.shape, used);
        if let Some(doc) = &field.doc {
            out.extend(naming::wrap(doc, 92).into_iter().map(|l| format!("    /// {}", l)));
        }
        let mut attrs = Vec::new();
        if let Some(rename) = rename {
            attrs.push(format!("rename = \"{}\"", rename));
        }
        if !field.required {
            attrs.push("default".to_string());
            attrs.push("skip_serializing_if = \"Option::is_none\"".to_string());
            ty = format!("Option<{}>", ty);
        }
        if !attrs.is_empty() {
            let line = format!("    #[serde({})]", attrs.join(", "));
            if line.len() > 100 {
                out.push("    #[serde(".to_string());
                let last = attrs.len() - 1;
                for (i, attr) in attrs.iter().enumerate() {
                    let comma = if i < last { "," } else { "" };
                    out.push(format!("        {}{}", attr, comma));
                }
                out.push("    )]".to_string());
            } else {
                out.push(line);
            }
        }
        out.push(format!("    pub {}: {},", field_name, ty));
    }
    out.push("}".to_string());
}

fn render_property_schemas(
    fields: &[Field],
    used: &mut BTreeSet<&'static str>,
    out: &mut Vec<String>,
) {
    const PAD: &str = "        ";
    for field in fields {
        let property_type = schema_type(&field.shape, used);
        let mut calls = Vec::new();
        if field.required {
            calls.push(".required()");
        }
        if field.immutable {
            calls.push(".immutable()");
        }
        let args = format!("\"{}\", {}", field.cfn_name, property_type);
        let head = format!("PropertySchema::new({})", args);
        let chained = format!("{}{}", head, calls.concat());

        let one_line = format!("{}{},", PAD, chained);
        if one_line.len() <= 100 && (calls.is_empty() || chained.len() <= 60) && args.len() <= 60 {
            out.push(one_line);
            continue;
        }
        // Chained calls hang one level in after a one-line head and sit at
        // the call's own indent after a vertical argument list
        let chain_pad = if PAD.len() + head.len() <= 100 && args.len() <= 60 {
            out.push(format!("{}{}", PAD, head));
            format!("{}    ", PAD)
        } else {
            out.push(format!("{}PropertySchema::new(", PAD));
            out.push(format!("{}    \"{}\",", PAD, field.cfn_name));
            out.push(format!("{}    {},", PAD, property_type));
            out.push(format!("{})", PAD));
            PAD.to_string()
        };
        match calls.split_last() {
            Some((last, rest)) => {
                out.extend(rest.iter().map(|c| format!("{}{}", chain_pad, c)));
                out.push(format!("{}{},", chain_pad, last));
            }
            None => {
                if let Some(line) = out.last_mut() {
                    line.push(',');
                }
            }
        }
    }
}

/// Render the `mod.rs` of a service directory
pub fn render_service_module(
    service: &str,
    description: Option<&str>,
    modules: &[(String, String)],
) -> String {
    let mut out = vec![format!("//! AWS::{} resource types", service), "//!".to_string()];
    if let Some(description) = description {
        out.extend(naming::wrap(description, 96).into_iter().map(|l| format!("//! {}", l)));
        out.push("//!".to_string());
    }
    out.push("//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen".to_string());
    out.push(String::new());
    out.extend(modules.iter().map(|(file, _)| format!("pub mod {};", file)));
    out.push(String::new());
    out.extend(
        modules
            .iter()
            .map(|(file, name)| format!("pub use {}::{};", file, name)),
    );
    out.push(String::new());
    out.push("use cirrus_core::catalog::Catalog;".to_string());
    out.push(String::new());
    out.push(format!("/// Register every AWS::{} resource type", service));
    out.push("pub fn register(catalog: &mut Catalog) {".to_string());
    out.extend(
        modules
            .iter()
            .map(|(_, name)| format!("    catalog.register::<{}>();", name)),
    );
    out.push("}".to_string());
    out.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_SCHEMA: &str = r##"{
        "typeName": "AWS::ElastiCache::User",
        "description": "Resource Type definition for AWS::ElastiCache::User. More text here.",
        "definitions": {
            "AuthenticationMode": {
                "type": "object",
                "description": "Specifies the authentication mode to use.",
                "properties": {
                    "Type": {
                        "type": "string",
                        "description": "Authentication Type",
                        "enum": ["password", "iam"]
                    },
                    "Passwords": {
                        "type": "array",
                        "items": { "type": "string" }
                    }
                },
                "required": ["Type"]
            },
            "Tag": {
                "type": "object",
                "properties": {
                    "Key": { "type": "string" },
                    "Value": { "type": "string" }
                }
            }
        },
        "properties": {
            "UserId": { "type": "string", "description": "The ID of the user." },
            "Engine": { "type": "string", "enum": ["redis", "valkey"] },
            "AuthenticationMode": { "$ref": "#/definitions/AuthenticationMode" },
            "Tags": { "type": "array", "items": { "$ref": "#/definitions/Tag" } },
            "Arn": { "type": "string" }
        },
        "required": ["UserId", "Engine"],
        "readOnlyProperties": ["/properties/Arn"],
        "createOnlyProperties": ["/properties/UserId"]
    }"##;

    fn render(json: &str) -> String {
        let schema: CfnSchema = serde_json::from_str(json).unwrap();
        ResourceModule::new(&schema, &schema.type_name)
            .unwrap()
            .render()
            .unwrap()
    }

    #[test]
    fn test_render_resource() {
        let code = render(USER_SCHEMA);

        assert!(code.starts_with("//! User resource type\n"));
        assert!(code.contains("use cirrus_core::allowed_values;\n"));
        assert!(code.contains(
            "use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, StructSchema, TAG_SCHEMA};"
        ));
        assert!(code.contains("use cirrus_core::{List, Tag, Value};\n"));
        assert!(code.contains("    pub enum UserEngine {\n        Redis = \"redis\",\n"));
        assert!(code.contains("    pub enum AuthenticationModeType {\n        Password = \"password\","));
        assert!(code.contains("/// `AWS::ElastiCache::User`\n///\n/// Resource Type definition"));
        assert!(code.contains("    /// The ID of the user.\n    pub user_id: Value<String>,"));
        assert!(code.contains("    pub engine: Value<UserEngine>,"));
        assert!(code.contains("    pub tags: Option<Vec<Tag>>,"));
        assert!(code.contains("    #[serde(rename = \"Type\")]\n    pub type_: Value<AuthenticationModeType>,"));
        assert!(!code.contains("pub arn"));
        assert!(code.contains("        PropertySchema::new(\"UserId\", PropertyType::String)\n            .required()\n            .immutable(),"));
        assert!(code.contains("    attributes: &[\"Arn\"],"));
        assert!(code.contains("pub const AUTHENTICATION_MODE_SCHEMA: StructSchema = StructSchema {"));
        assert!(code.contains("aws-resource-elasticache-user.html"));
        assert!(!code.contains("pub struct Tag"));
    }

    #[test]
    fn test_maps_and_item_enums() {
        let code = render(
            r##"{
                "typeName": "AWS::ApiGatewayV2::Api",
                "properties": {
                    "Tags": {
                        "type": "object",
                        "patternProperties": { ".*": { "type": "string" } }
                    },
                    "Body": { "type": "object" },
                    "AllowMethods": {
                        "type": "array",
                        "items": { "type": "string", "enum": ["GET", "POST"] }
                    }
                }
            }"##,
        );

        assert!(code.contains("    pub tags: Option<Map<String>>,"));
        assert!(code.contains("    pub body: Option<Json>,"));
        assert!(code.contains("    pub enum ApiAllowMethodsItem {"));
        assert!(code.contains("    pub allow_methods: Option<List<ApiAllowMethodsItem>>,"));
        assert!(code.contains("#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]"));
        assert!(code.contains("use cirrus_core::{Json, List, Map};\n"));
    }

    #[test]
    fn test_struct_maps_use_btreemap() {
        let code = render(
            r##"{
                "typeName": "AWS::ApiGatewayV2::Stage",
                "definitions": {
                    "RouteSettings": {
                        "type": "object",
                        "properties": { "ThrottlingRateLimit": { "type": "number" } }
                    }
                },
                "properties": {
                    "RouteSettings": {
                        "type": "object",
                        "patternProperties": { ".*": { "$ref": "#/definitions/RouteSettings" } }
                    }
                }
            }"##,
        );

        assert!(code.contains("use std::collections::BTreeMap;\n"));
        assert!(code.contains("    pub route_settings: Option<BTreeMap<String, RouteSettings>>,"));
        assert!(code.contains("    pub throttling_rate_limit: Option<Value<f64>>,"));
        assert!(code.contains("            PropertyType::Map(&PropertyType::Struct(&ROUTE_SETTINGS_SCHEMA)),"));
    }

    #[test]
    fn test_vertical_arguments_keep_chain_at_call_indent() {
        let code = render(
            r##"{
                "typeName": "AWS::ApiGatewayV2::Integration",
                "properties": {
                    "IntegrationType": {
                        "type": "string",
                        "enum": ["AWS", "AWS_PROXY", "HTTP", "HTTP_PROXY", "MOCK"]
                    },
                    "ApiId": { "type": "string" }
                },
                "required": ["ApiId", "IntegrationType"],
                "createOnlyProperties": ["/properties/ApiId"]
            }"##,
        );

        assert!(code.contains(concat!(
            "        PropertySchema::new(\n",
            "            \"IntegrationType\",\n",
            "            PropertyType::Enum(&IntegrationIntegrationType::SCHEMA),\n",
            "        )\n",
            "        .required(),\n",
        )));
        assert!(code.contains(concat!(
            "        PropertySchema::new(\"ApiId\", PropertyType::String)\n",
            "            .required()\n",
            "            .immutable(),\n",
        )));
    }

    #[test]
    fn test_invalid_type_name() {
        let schema: CfnSchema = serde_json::from_str(USER_SCHEMA).unwrap();
        assert!(ResourceModule::new(&schema, "ElastiCache::User").is_err());
    }

    #[test]
    fn test_unresolved_ref() {
        let schema: CfnSchema = serde_json::from_str(
            r##"{
                "typeName": "AWS::X::Y",
                "properties": { "Config": { "$ref": "#/definitions/Missing" } }
            }"##,
        )
        .unwrap();
        let err = ResourceModule::new(&schema, "AWS::X::Y").err().unwrap();
        assert!(format!("{:#}", err).contains("Missing"));
    }

    #[test]
    fn test_render_service_module() {
        let code = render_service_module(
            "DeviceFarm",
            Some("Device testing."),
            &[
                ("project".to_string(), "Project".to_string()),
                ("device_pool".to_string(), "DevicePool".to_string()),
            ],
        );
        assert!(code.starts_with("//! AWS::DeviceFarm resource types\n//!\n//! Device testing.\n"));
        assert!(code.contains("pub mod project;\npub mod device_pool;\n"));
        assert!(code.contains("pub use device_pool::DevicePool;"));
        assert!(code.contains("    catalog.register::<Project>();\n"));
    }
}
