//! Template - Container for assembling typed resources into a template document

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::value::{Mapping, TaggedValue};
use thiserror::Error;

use crate::resource::{Resource, ResourceProperties};
use crate::value::Json;

pub const FORMAT_VERSION: &str = "2010-09-09";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Invalid logical id '{0}': must be non-empty and alphanumeric")]
    InvalidLogicalId(String),

    #[error("Duplicate logical id '{0}'")]
    DuplicateLogicalId(String),

    #[error("Resource '{0}' not found")]
    ResourceNotFound(String),

    #[error("Resource '{logical_id}': {source}")]
    Resource {
        logical_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A CloudFormation template document.
///
/// Resources are stored as JSON so that types outside the catalog can sit
/// beside typed ones; `add_resource` and `resource` convert at the edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Template {
    #[serde(
        rename = "AWSTemplateFormatVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub format_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Json>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, Json>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mappings: BTreeMap<String, Json>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub conditions: BTreeMap<String, Json>,
    #[serde(default)]
    pub resources: BTreeMap<String, Json>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<String, Json>,
}

impl Template {
    pub fn new() -> Self {
        Self {
            format_version: Some(FORMAT_VERSION.to_string()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a typed resource under `logical_id`
    pub fn add_resource<P: ResourceProperties>(
        &mut self,
        logical_id: impl Into<String>,
        resource: &Resource<P>,
    ) -> Result<(), TemplateError> {
        let logical_id = logical_id.into();
        if logical_id.is_empty() || !logical_id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(TemplateError::InvalidLogicalId(logical_id));
        }
        if self.resources.contains_key(&logical_id) {
            return Err(TemplateError::DuplicateLogicalId(logical_id));
        }
        let json = serde_json::to_value(resource)?;
        self.resources.insert(logical_id, json);
        Ok(())
    }

    /// Read the resource under `logical_id` as a typed resource
    pub fn resource<P: ResourceProperties>(
        &self,
        logical_id: &str,
    ) -> Result<Resource<P>, TemplateError> {
        let json = self
            .resources
            .get(logical_id)
            .ok_or_else(|| TemplateError::ResourceNotFound(logical_id.to_string()))?;
        serde_json::from_value(json.clone()).map_err(|source| TemplateError::Resource {
            logical_id: logical_id.to_string(),
            source,
        })
    }

    /// Logical ids paired with their declared `Type`
    pub fn resource_types(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.resources
            .iter()
            .map(|(id, r)| (id.as_str(), r.get("Type").and_then(Json::as_str)))
    }

    pub fn from_json(input: &str) -> Result<Self, TemplateError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Read a YAML template, accepting short-form intrinsics (`!Ref`, `!Sub`, ...)
    pub fn from_yaml(input: &str) -> Result<Self, TemplateError> {
        let yaml: serde_yaml::Value = serde_yaml::from_str(input)?;
        let json = serde_json::to_value(expand_short_form(yaml))?;
        Ok(serde_json::from_value(json)?)
    }

    pub fn to_json(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> Result<String, TemplateError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Rewrite YAML tags such as `!GetAtt Api.ApiEndpoint` into their long
/// form (`{ "Fn::GetAtt": ["Api", "ApiEndpoint"] }`)
fn expand_short_form(value: serde_yaml::Value) -> serde_yaml::Value {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Sequence(items) => Yaml::Sequence(items.into_iter().map(expand_short_form).collect()),
        Yaml::Mapping(map) => Yaml::Mapping(
            map.into_iter()
                .map(|(k, v)| (k, expand_short_form(v)))
                .collect(),
        ),
        Yaml::Tagged(tagged) => {
            let TaggedValue { tag, value } = *tagged;
            let tag = tag.to_string();
            let name = tag.trim_start_matches('!');
            let value = expand_short_form(value);
            let (key, value) = match (name, value) {
                ("Ref" | "Condition", value) => (name.to_string(), value),
                ("GetAtt", Yaml::String(path)) => match path.split_once('.') {
                    Some((logical_id, attribute)) => (
                        "Fn::GetAtt".to_string(),
                        Yaml::Sequence(vec![logical_id.into(), attribute.into()]),
                    ),
                    None => ("Fn::GetAtt".to_string(), Yaml::String(path)),
                },
                (_, value) => (format!("Fn::{}", name), value),
            };
            let mut call = Mapping::new();
            call.insert(Yaml::String(key), value);
            Yaml::Mapping(call)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{PropertySchema, PropertyType, ResourceSchema};
    use crate::value::Value;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase", deny_unknown_fields)]
    struct Bucket {
        bucket_name: Value<String>,
    }

    const BUCKET_SCHEMA: ResourceSchema = ResourceSchema {
        type_name: "AWS::Test::Bucket",
        documentation: "",
        properties: &[PropertySchema::new("BucketName", PropertyType::String).required()],
        attributes: &[],
    };

    impl ResourceProperties for Bucket {
        const TYPE: &'static str = "AWS::Test::Bucket";

        fn schema() -> &'static ResourceSchema {
            &BUCKET_SCHEMA
        }
    }

    fn bucket(name: &str) -> Resource<Bucket> {
        Resource::new(Bucket {
            bucket_name: name.into(),
        })
    }

    #[test]
    fn add_and_read_back() {
        let mut template = Template::new().with_description("test");
        template.add_resource("Logs", &bucket("logs")).unwrap();

        let read: Resource<Bucket> = template.resource("Logs").unwrap();
        assert_eq!(read, bucket("logs"));
        let types: Vec<_> = template.resource_types().collect();
        assert_eq!(types, vec![("Logs", Some("AWS::Test::Bucket"))]);
    }

    #[test]
    fn logical_ids_are_checked() {
        let mut template = Template::new();
        assert!(matches!(
            template.add_resource("my-bucket", &bucket("a")),
            Err(TemplateError::InvalidLogicalId(_))
        ));
        template.add_resource("Data", &bucket("a")).unwrap();
        assert!(matches!(
            template.add_resource("Data", &bucket("b")),
            Err(TemplateError::DuplicateLogicalId(_))
        ));
    }

    #[test]
    fn missing_and_mistyped_resources() {
        let mut template = Template::new();
        template
            .resources
            .insert("Other".to_string(), json!({ "Type": "AWS::SQS::Queue" }));
        assert!(matches!(
            template.resource::<Bucket>("Nope"),
            Err(TemplateError::ResourceNotFound(_))
        ));
        assert!(matches!(
            template.resource::<Bucket>("Other"),
            Err(TemplateError::Resource { .. })
        ));
    }

    #[test]
    fn json_roundtrip() {
        let mut template = Template::new();
        template.add_resource("Data", &bucket("a")).unwrap();
        let text = template.to_json().unwrap();
        let value: Json = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            json!({
                "AWSTemplateFormatVersion": "2010-09-09",
                "Resources": {
                    "Data": { "Type": "AWS::Test::Bucket", "Properties": { "BucketName": "a" } }
                }
            })
        );
        assert_eq!(Template::from_json(&text).unwrap(), template);
    }

    #[test]
    fn yaml_roundtrip() {
        let yaml = r#"
AWSTemplateFormatVersion: "2010-09-09"
Resources:
  Data:
    Type: AWS::Test::Bucket
    Properties:
      BucketName:
        Fn::Sub: "${AWS::StackName}-data"
"#;
        let template = Template::from_yaml(yaml).unwrap();
        let data: Resource<Bucket> = template.resource("Data").unwrap();
        assert_eq!(data.properties.bucket_name, Value::sub("${AWS::StackName}-data"));
        let again = Template::from_yaml(&template.to_yaml().unwrap()).unwrap();
        assert_eq!(again, template);
    }

    #[test]
    fn yaml_short_form_intrinsics() {
        let yaml = r#"
Resources:
  Data:
    Type: AWS::Test::Bucket
    Properties:
      BucketName: !Ref DataBucketName
  Logs:
    Type: AWS::Test::Bucket
    Properties:
      BucketName: !GetAtt Data.Arn
  Archive:
    Type: AWS::Test::Bucket
    Properties:
      BucketName: !Join ["-", [!Ref "AWS::StackName", !Select [0, !GetAZs ""]]]
"#;
        let template = Template::from_yaml(yaml).unwrap();

        let data: Resource<Bucket> = template.resource("Data").unwrap();
        assert_eq!(data.properties.bucket_name, Value::reference("DataBucketName"));
        let logs: Resource<Bucket> = template.resource("Logs").unwrap();
        assert_eq!(logs.properties.bucket_name, Value::get_att("Data", "Arn"));
        assert_eq!(
            template.resources["Archive"]["Properties"]["BucketName"],
            json!({
                "Fn::Join": [
                    "-",
                    [{ "Ref": "AWS::StackName" }, { "Fn::Select": [0, { "Fn::GetAZs": "" }] }]
                ]
            })
        );
        let archive: Resource<Bucket> = template.resource("Archive").unwrap();
        assert!(archive.properties.bucket_name.is_intrinsic());
    }
}
