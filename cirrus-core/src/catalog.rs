//! Catalog - Registry of the resource types known to this crate family
//!
//! A `Catalog` maps CloudFormation type names to type-erased handles that
//! expose the schema and can read a `Properties` object through the typed
//! struct for that resource.

use std::collections::{BTreeMap, BTreeSet};
use std::marker::PhantomData;

use crate::resource::ResourceProperties;
use crate::schema::ResourceSchema;
use crate::value::Json;

/// Errors from catalog lookups and typed parsing
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown resource type '{0}'")]
    UnknownType(String),

    #[error("{type_name}: {source}")]
    InvalidProperties {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Definition of a resource type held by the catalog
pub trait ResourceType: Send + Sync {
    /// CloudFormation type name (e.g., "AWS::ElastiCache::User")
    fn type_name(&self) -> &'static str;

    /// Documentation metadata for this resource type
    fn schema(&self) -> &'static ResourceSchema;

    /// Read `properties` as this resource's typed properties block and
    /// return its canonical JSON form.
    fn parse_properties(&self, properties: Json) -> Result<Json, CatalogError>;
}

/// `ResourceType` backed by a generated properties struct
pub struct Typed<P>(PhantomData<fn() -> P>);

impl<P> Typed<P> {
    pub fn new() -> Self {
        Typed(PhantomData)
    }
}

impl<P> Default for Typed<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ResourceProperties> ResourceType for Typed<P> {
    fn type_name(&self) -> &'static str {
        P::TYPE
    }

    fn schema(&self) -> &'static ResourceSchema {
        P::schema()
    }

    fn parse_properties(&self, properties: Json) -> Result<Json, CatalogError> {
        let invalid = |source| CatalogError::InvalidProperties {
            type_name: P::TYPE,
            source,
        };
        let typed: P = serde_json::from_value(properties).map_err(invalid)?;
        serde_json::to_value(&typed).map_err(invalid)
    }
}

/// Registry of resource types keyed by CloudFormation type name
#[derive(Default)]
pub struct Catalog {
    types: BTreeMap<&'static str, Box<dyn ResourceType>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generated properties struct.
    ///
    /// Registering the same type name twice keeps the first entry.
    pub fn register<P: ResourceProperties + 'static>(&mut self) {
        self.register_type(Box::new(Typed::<P>::new()));
    }

    pub fn register_type(&mut self, resource_type: Box<dyn ResourceType>) {
        let name = resource_type.type_name();
        if self.types.contains_key(name) {
            log::warn!("resource type {} registered twice; keeping the first", name);
            return;
        }
        log::debug!("registered resource type {}", name);
        self.types.insert(name, resource_type);
    }

    pub fn get(&self, type_name: &str) -> Option<&dyn ResourceType> {
        self.types.get(type_name).map(|t| t.as_ref())
    }

    /// Look up a type or fail with `CatalogError::UnknownType`
    pub fn require(&self, type_name: &str) -> Result<&dyn ResourceType, CatalogError> {
        self.get(type_name)
            .ok_or_else(|| CatalogError::UnknownType(type_name.to_string()))
    }

    /// All resource types ordered by type name
    pub fn iter(&self) -> impl Iterator<Item = &dyn ResourceType> {
        self.types.values().map(|t| t.as_ref())
    }

    /// Service segments of every registered type (e.g., "ElastiCache")
    pub fn services(&self) -> BTreeSet<&'static str> {
        self.iter().map(|t| t.schema().service()).collect()
    }

    /// Resource types belonging to one service, matched case-insensitively
    pub fn by_service<'a>(&'a self, service: &'a str) -> impl Iterator<Item = &'a dyn ResourceType> {
        self.iter()
            .filter(move |t| t.schema().service().eq_ignore_ascii_case(service))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{PropertySchema, PropertyType};
    use crate::value::Value;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase", deny_unknown_fields)]
    struct Queue {
        queue_name: Value<String>,
    }

    const QUEUE_SCHEMA: ResourceSchema = ResourceSchema {
        type_name: "AWS::Test::Queue",
        documentation: "",
        properties: &[PropertySchema::new("QueueName", PropertyType::String).required()],
        attributes: &["Arn"],
    };

    impl ResourceProperties for Queue {
        const TYPE: &'static str = "AWS::Test::Queue";

        fn schema() -> &'static ResourceSchema {
            &QUEUE_SCHEMA
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Topic {}

    const TOPIC_SCHEMA: ResourceSchema = ResourceSchema {
        type_name: "AWS::Other::Topic",
        documentation: "",
        properties: &[],
        attributes: &[],
    };

    impl ResourceProperties for Topic {
        const TYPE: &'static str = "AWS::Other::Topic";

        fn schema() -> &'static ResourceSchema {
            &TOPIC_SCHEMA
        }
    }

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.register::<Queue>();
        catalog.register::<Topic>();
        catalog
    }

    #[test]
    fn lookup_by_type_name() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 2);
        let queue = catalog.get("AWS::Test::Queue").unwrap();
        assert_eq!(queue.schema().attributes, &["Arn"]);
        assert!(catalog.get("AWS::Test::Missing").is_none());
        assert!(matches!(
            catalog.require("AWS::Test::Missing"),
            Err(CatalogError::UnknownType(_))
        ));
    }

    #[test]
    fn services_and_filtering() {
        let catalog = catalog();
        let services: Vec<_> = catalog.services().into_iter().collect();
        assert_eq!(services, vec!["Other", "Test"]);
        let test: Vec<_> = catalog.by_service("test").map(|t| t.type_name()).collect();
        assert_eq!(test, vec!["AWS::Test::Queue"]);
    }

    #[test]
    fn duplicate_registration_keeps_first() {
        let mut catalog = catalog();
        catalog.register::<Queue>();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn parse_properties_uses_typed_struct() {
        let catalog = catalog();
        let queue = catalog.get("AWS::Test::Queue").unwrap();
        let parsed = queue
            .parse_properties(json!({ "QueueName": { "Fn::Sub": "${AWS::StackName}-q" } }))
            .unwrap();
        assert_eq!(parsed, json!({ "QueueName": { "Fn::Sub": "${AWS::StackName}-q" } }));

        let err = queue.parse_properties(json!({})).unwrap_err();
        assert!(err.to_string().starts_with("AWS::Test::Queue: missing field"));
    }
}
