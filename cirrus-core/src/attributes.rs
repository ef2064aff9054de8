//! Attributes - Resource-level metadata shared by every resource type

use serde::{Deserialize, Serialize};

use crate::allowed_values;
use crate::value::{Json, Value};

allowed_values! {
    /// What happens to a resource when it is removed from the stack
    pub enum DeletionPolicy {
        Delete = "Delete",
        Retain = "Retain",
        RetainExceptOnCreate = "RetainExceptOnCreate",
        Snapshot = "Snapshot",
    }
}

allowed_values! {
    /// What happens to the old physical resource when an update replaces it
    pub enum UpdateReplacePolicy {
        Delete = "Delete",
        Retain = "Retain",
        Snapshot = "Snapshot",
    }
}

/// Logical ids a resource must be created after
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependsOn {
    Single(String),
    Multiple(Vec<String>),
}

impl DependsOn {
    pub fn logical_ids(&self) -> Vec<&str> {
        match self {
            DependsOn::Single(id) => vec![id.as_str()],
            DependsOn::Multiple(ids) => ids.iter().map(String::as_str).collect(),
        }
    }

    fn push(self, logical_id: String) -> Self {
        match self {
            DependsOn::Single(existing) => DependsOn::Multiple(vec![existing, logical_id]),
            DependsOn::Multiple(mut ids) => {
                ids.push(logical_id);
                DependsOn::Multiple(ids)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AutoScalingCreationPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_successful_instances_percent: Option<Value<i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ResourceSignal {
    /// Number of success signals CloudFormation must receive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Value<i64>>,
    /// ISO 8601 duration, e.g. `PT15M`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Value<String>>,
}

/// `CreationPolicy` attribute
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CreationPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scaling_creation_policy: Option<AutoScalingCreationPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_signal: Option<ResourceSignal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AutoScalingReplacingUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_replace: Option<Value<bool>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AutoScalingRollingUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_batch_size: Option<Value<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_active_instances_percent: Option<Value<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_instances_in_service: Option<Value<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_successful_instances_percent: Option<Value<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_time: Option<Value<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspend_processes: Option<Vec<Value<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_on_resource_signals: Option<Value<bool>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AutoScalingScheduledAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_unmodified_group_size_properties: Option<Value<bool>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CodeDeployLambdaAliasUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_allow_traffic_hook: Option<Value<String>>,
    pub application_name: Value<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_allow_traffic_hook: Option<Value<String>>,
    pub deployment_group_name: Value<String>,
}

/// `UpdatePolicy` attribute
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct UpdatePolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scaling_replacing_update: Option<AutoScalingReplacingUpdate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scaling_rolling_update: Option<AutoScalingRollingUpdate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scaling_scheduled_action: Option<AutoScalingScheduledAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_deploy_lambda_alias_update: Option<CodeDeployLambdaAliasUpdate>,
    /// OpenSearch and Elasticsearch domains only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_version_upgrade: Option<Value<bool>>,
    /// ElastiCache replication groups only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_online_resharding: Option<Value<bool>>,
}

/// Resource-level attributes that sit beside `Type` and `Properties`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ResourceAttributes {
    /// Name of a template condition gating creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<DependsOn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_policy: Option<DeletionPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_replace_policy: Option<UpdateReplacePolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_policy: Option<CreationPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_policy: Option<UpdatePolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,
}

impl ResourceAttributes {
    pub fn is_empty(&self) -> bool {
        *self == ResourceAttributes::default()
    }

    /// Append a logical id to `DependsOn`
    pub fn add_dependency(&mut self, logical_id: impl Into<String>) {
        let logical_id = logical_id.into();
        self.depends_on = Some(match self.depends_on.take() {
            None => DependsOn::Single(logical_id),
            Some(existing) => existing.push(logical_id),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn depends_on_accepts_both_forms() {
        let single: ResourceAttributes =
            serde_json::from_value(json!({ "DependsOn": "Vpc" })).unwrap();
        assert_eq!(single.depends_on.unwrap().logical_ids(), vec!["Vpc"]);

        let many: ResourceAttributes =
            serde_json::from_value(json!({ "DependsOn": ["Vpc", "Subnet"] })).unwrap();
        assert_eq!(many.depends_on.unwrap().logical_ids(), vec!["Vpc", "Subnet"]);
    }

    #[test]
    fn add_dependency_grows_list() {
        let mut attrs = ResourceAttributes::default();
        attrs.add_dependency("A");
        assert_eq!(serde_json::to_value(&attrs).unwrap(), json!({ "DependsOn": "A" }));
        attrs.add_dependency("B");
        assert_eq!(
            serde_json::to_value(&attrs).unwrap(),
            json!({ "DependsOn": ["A", "B"] })
        );
    }

    #[test]
    fn policies() {
        let attrs: ResourceAttributes = serde_json::from_value(json!({
            "DeletionPolicy": "Snapshot",
            "UpdateReplacePolicy": "Retain",
            "UpdatePolicy": { "UseOnlineResharding": true },
            "CreationPolicy": { "ResourceSignal": { "Count": 2, "Timeout": "PT10M" } },
        }))
        .unwrap();
        assert_eq!(attrs.deletion_policy, Some(DeletionPolicy::Snapshot));
        assert_eq!(attrs.update_replace_policy, Some(UpdateReplacePolicy::Retain));
        assert_eq!(
            attrs.update_policy.unwrap().use_online_resharding,
            Some(Value::Literal(true))
        );
        let signal = attrs.creation_policy.unwrap().resource_signal.unwrap();
        assert_eq!(signal.count, Some(Value::Literal(2)));
    }

    #[test]
    fn rejects_unknown_policy_and_keys() {
        assert!(
            serde_json::from_value::<ResourceAttributes>(json!({ "DeletionPolicy": "Destroy" }))
                .is_err()
        );
        assert!(
            serde_json::from_value::<ResourceAttributes>(json!({ "Condtion": "IsProd" })).is_err()
        );
    }

    #[test]
    fn empty_attributes_serialize_to_empty_object() {
        let attrs = ResourceAttributes::default();
        assert!(attrs.is_empty());
        assert_eq!(serde_json::to_value(&attrs).unwrap(), json!({}));
    }
}
