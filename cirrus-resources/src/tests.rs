use std::collections::BTreeMap;

use cirrus_core::catalog::ResourceType;
use cirrus_core::schema::{PropertyType, SampleMode, UpdateBehavior};
use cirrus_core::template::Template;
use cirrus_core::{Json, Resource, ResourceProperties, Value};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::apigatewayv2::api_mapping::ApiMapping;
use crate::apigatewayv2::stage::{RouteSettings, RouteSettingsLoggingLevel, Stage};
use crate::appflow::ConnectorProfile;
use crate::ec2::spot_fleet::{SpotFleet, SpotFleetRequestConfigDataExcessCapacityTerminationPolicy};
use crate::elasticache::ReplicationGroup;
use crate::elasticache::user::{AuthenticationModeType, User};

/// Collect JSON pointers into a full sample for every position whose type
/// satisfies `matches`.
fn collect_paths(
    property_type: &PropertyType,
    pointer: String,
    matches: &dyn Fn(&PropertyType) -> bool,
    out: &mut Vec<String>,
) {
    if matches(property_type) {
        out.push(pointer.clone());
    }
    match property_type {
        PropertyType::Struct(schema) => {
            for property in schema.properties {
                let child = format!("{}/{}", pointer, property.name);
                collect_paths(&property.property_type, child, matches, out);
            }
        }
        PropertyType::List(inner) => collect_paths(inner, format!("{}/0", pointer), matches, out),
        PropertyType::Map(inner) => collect_paths(inner, format!("{}/Key", pointer), matches, out),
        _ => {}
    }
}

fn paths(resource_type: &dyn ResourceType, matches: &dyn Fn(&PropertyType) -> bool) -> Vec<String> {
    let mut out = Vec::new();
    for property in resource_type.schema().properties {
        let pointer = format!("/{}", property.name);
        collect_paths(&property.property_type, pointer, matches, &mut out);
    }
    out
}

/// Pointers to every required property, nested ones included
fn required_paths(resource_type: &dyn ResourceType) -> Vec<String> {
    fn walk(property_type: &PropertyType, pointer: &str, out: &mut Vec<String>) {
        match property_type {
            PropertyType::Struct(schema) => {
                for property in schema.properties {
                    let child = format!("{}/{}", pointer, property.name);
                    if property.required {
                        out.push(child.clone());
                    }
                    walk(&property.property_type, &child, out);
                }
            }
            PropertyType::List(inner) => walk(inner, &format!("{}/0", pointer), out),
            PropertyType::Map(inner) => walk(inner, &format!("{}/Key", pointer), out),
            _ => {}
        }
    }

    let mut out = Vec::new();
    for property in resource_type.schema().properties {
        let pointer = format!("/{}", property.name);
        if property.required {
            out.push(pointer.clone());
        }
        walk(&property.property_type, &pointer, &mut out);
    }
    out
}

/// Struct-typed positions are plain structs; everything else is a `Value`
fn accepts_intrinsic(property_type: &PropertyType) -> bool {
    match property_type {
        PropertyType::Struct(_) => false,
        PropertyType::List(inner) | PropertyType::Map(inner) => {
            !matches!(inner, PropertyType::Struct(_))
        }
        _ => true,
    }
}

fn remove_pointer(json: &mut Json, pointer: &str) {
    let (parent, key) = pointer.rsplit_once('/').unwrap();
    let parent = if parent.is_empty() {
        json
    } else {
        json.pointer_mut(parent).unwrap()
    };
    parent.as_object_mut().unwrap().remove(key).unwrap();
}

#[test]
fn catalog_contains_every_resource_type() {
    let catalog = crate::catalog();
    assert_eq!(catalog.len(), 28);
    let services: Vec<_> = catalog.services().into_iter().collect();
    assert_eq!(
        services,
        vec!["ApiGatewayV2", "AppFlow", "DeviceFarm", "EC2", "ElastiCache"]
    );
    assert_eq!(catalog.by_service("apigatewayv2").count(), 9);
    assert_eq!(catalog.by_service("AppFlow").count(), 3);
    assert_eq!(catalog.by_service("DeviceFarm").count(), 6);
    assert_eq!(catalog.by_service("EC2").count(), 1);
    assert_eq!(catalog.by_service("ElastiCache").count(), 9);
}

#[test]
fn type_tags_match_schemas() {
    for resource_type in crate::catalog().iter() {
        let schema = resource_type.schema();
        assert_eq!(resource_type.type_name(), schema.type_name);

        let segments: Vec<_> = schema.type_name.split("::").collect();
        assert_eq!(segments.len(), 3, "{}", schema.type_name);
        assert_eq!(segments[0], "AWS");
        assert!(
            schema
                .documentation
                .starts_with("https://docs.aws.amazon.com/AWSCloudFormation/"),
            "{}",
            schema.documentation
        );
    }
    assert_eq!(ApiMapping::TYPE, "AWS::ApiGatewayV2::ApiMapping");
    assert_eq!(SpotFleet::TYPE, "AWS::EC2::SpotFleet");
    assert_eq!(User::TYPE, "AWS::ElastiCache::User");
}

#[test]
fn samples_parse_and_roundtrip() {
    for resource_type in crate::catalog().iter() {
        for mode in [SampleMode::Full, SampleMode::RequiredOnly] {
            let sample = resource_type.schema().sample(mode);
            let parsed = resource_type
                .parse_properties(sample.clone())
                .unwrap_or_else(|e| panic!("{:?} sample of {}: {}", mode, resource_type.type_name(), e));
            assert_eq!(parsed, sample, "{}", resource_type.type_name());
        }
    }
}

#[test]
fn missing_required_properties_fail() {
    for resource_type in crate::catalog().iter() {
        for pointer in required_paths(resource_type) {
            let mut sample = resource_type.schema().sample(SampleMode::Full);
            remove_pointer(&mut sample, &pointer);
            assert!(
                resource_type.parse_properties(sample).is_err(),
                "{} parsed without {}",
                resource_type.type_name(),
                pointer
            );
        }
    }
}

#[test]
fn unknown_properties_fail() {
    for resource_type in crate::catalog().iter() {
        let mut sample = resource_type.schema().sample(SampleMode::RequiredOnly);
        sample
            .as_object_mut()
            .unwrap()
            .insert("NotAProperty".to_string(), json!("x"));
        assert!(
            resource_type.parse_properties(sample).is_err(),
            "{}",
            resource_type.type_name()
        );
    }
}

#[test]
fn enum_properties_reject_unknown_literals() {
    let is_enum = |t: &PropertyType| matches!(t, PropertyType::Enum(_));
    let mut checked = 0;
    for resource_type in crate::catalog().iter() {
        for pointer in paths(resource_type, &is_enum) {
            let mut sample = resource_type.schema().sample(SampleMode::Full);
            *sample.pointer_mut(&pointer).unwrap() = json!("NotAnAllowedValue");
            assert!(
                resource_type.parse_properties(sample).is_err(),
                "{} accepted a bogus value at {}",
                resource_type.type_name(),
                pointer
            );
            checked += 1;
        }
    }
    assert!(checked > 50, "only {} enum positions", checked);
}

#[test]
fn intrinsics_substitute_for_values() {
    for resource_type in crate::catalog().iter() {
        for pointer in paths(resource_type, &accepts_intrinsic) {
            let mut sample = resource_type.schema().sample(SampleMode::Full);
            *sample.pointer_mut(&pointer).unwrap() = json!({ "Ref": "Param" });
            let parsed = resource_type
                .parse_properties(sample.clone())
                .unwrap_or_else(|e| panic!("{} at {}: {}", resource_type.type_name(), pointer, e));
            assert_eq!(parsed, sample);
        }
    }
}

#[test]
fn api_mapping_requires_domain_name() {
    let json = json!({
        "Type": "AWS::ApiGatewayV2::ApiMapping",
        "Properties": { "ApiId": "abc", "DomainName": "example.com", "Stage": "prod" }
    });
    let mapping: Resource<ApiMapping> = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(mapping.properties.domain_name, Value::from("example.com"));
    assert_eq!(mapping.properties.api_mapping_key, None);
    assert_eq!(serde_json::to_value(&mapping).unwrap(), json);

    let missing = json!({
        "Type": "AWS::ApiGatewayV2::ApiMapping",
        "Properties": { "ApiId": "abc", "Stage": "prod" }
    });
    let err = serde_json::from_value::<Resource<ApiMapping>>(missing).unwrap_err();
    assert!(err.to_string().contains("DomainName"), "{}", err);
}

#[test]
fn update_behavior_follows_create_only_properties() {
    let schema = ApiMapping::schema();
    assert_eq!(schema.property("ApiId").unwrap().update, UpdateBehavior::Immutable);
    assert_eq!(schema.property("Stage").unwrap().update, UpdateBehavior::Mutable);
    let required: Vec<_> = schema.required_properties().map(|p| p.name).collect();
    assert_eq!(required, vec!["ApiId", "DomainName", "Stage"]);
    assert_eq!(schema.attributes, &["ApiMappingId"]);
}

#[test]
fn build_stage_with_route_settings() {
    let settings = RouteSettings {
        logging_level: Some(RouteSettingsLoggingLevel::Info.into()),
        throttling_rate_limit: Some(Value::Literal(10.5)),
        ..Default::default()
    };
    let stage = Stage {
        access_log_settings: None,
        access_policy_id: None,
        api_id: Value::reference("HttpApi"),
        auto_deploy: Some(true.into()),
        client_certificate_id: None,
        default_route_settings: Some(settings.clone()),
        deployment_id: None,
        description: None,
        route_settings: Some(BTreeMap::from([("GET /items".to_string(), settings)])),
        stage_name: "$default".into(),
        stage_variables: None,
        tags: None,
    };

    assert_eq!(
        serde_json::to_value(&stage).unwrap(),
        json!({
            "ApiId": { "Ref": "HttpApi" },
            "AutoDeploy": true,
            "DefaultRouteSettings": { "LoggingLevel": "INFO", "ThrottlingRateLimit": 10.5 },
            "RouteSettings": {
                "GET /items": { "LoggingLevel": "INFO", "ThrottlingRateLimit": 10.5 }
            },
            "StageName": "$default",
        })
    );
    assert_eq!(RouteSettingsLoggingLevel::VALUES, &["ERROR", "INFO", "OFF"]);
}

#[test]
fn renamed_properties_keep_cloudformation_names() {
    let group: ReplicationGroup = serde_json::from_value(json!({
        "ReplicationGroupDescription": "sessions",
        "MultiAZEnabled": true,
        "PreferredCacheClusterAZs": ["us-east-1a", { "Fn::Select": [1, { "Fn::GetAZs": "" }] }],
    }))
    .unwrap();
    assert_eq!(group.multi_az_enabled, Some(Value::Literal(true)));
    let zones = group.preferred_cache_cluster_a_zs.as_ref().unwrap();
    assert_eq!(zones.as_literal().unwrap().len(), 2);

    let profile: ConnectorProfile = serde_json::from_value(json!({
        "ConnectorProfileName": "sf",
        "ConnectorType": "Salesforce",
        "ConnectionMode": "Public",
        "KMSArn": "arn:aws:kms:us-east-1:123456789012:key/abc",
        "ConnectorProfileConfig": {
            "ConnectorProfileProperties": {
                "Salesforce": { "InstanceUrl": "https://example.my.salesforce.com", "isSandboxEnvironment": false }
            }
        }
    }))
    .unwrap();
    assert!(profile.kms_arn.is_some());
    let salesforce = profile
        .connector_profile_config
        .and_then(|c| c.connector_profile_properties)
        .and_then(|p| p.salesforce)
        .unwrap();
    assert_eq!(salesforce.is_sandbox_environment, Some(Value::Literal(false)));
}

#[test]
fn keyword_properties() {
    let user: User = serde_json::from_value(json!({
        "Engine": "redis",
        "UserId": "app",
        "UserName": "app",
        "AuthenticationMode": { "Type": "iam" },
    }))
    .unwrap();
    let mode = user.authentication_mode.unwrap();
    assert_eq!(mode.type_, Value::Literal(AuthenticationModeType::Iam));
    assert_eq!(mode.passwords, None);
}

#[test]
fn spot_fleet_termination_policy_values() {
    assert_eq!(
        SpotFleetRequestConfigDataExcessCapacityTerminationPolicy::VALUES,
        &["Default", "NoTermination"]
    );
    let fleet: SpotFleet = serde_json::from_value(json!({
        "SpotFleetRequestConfigData": {
            "IamFleetRole": { "Fn::GetAtt": ["FleetRole", "Arn"] },
            "TargetCapacity": 4,
            "AllocationStrategy": "priceCapacityOptimized",
            "ExcessCapacityTerminationPolicy": "NoTermination",
            "LaunchTemplateConfigs": [{
                "LaunchTemplateSpecification": {
                    "LaunchTemplateId": { "Ref": "Template" },
                    "Version": "$Latest"
                },
                "Overrides": [{ "InstanceType": "c5.large", "WeightedCapacity": 2 }]
            }]
        }
    }))
    .unwrap();
    let config = fleet.spot_fleet_request_config_data;
    assert_eq!(config.target_capacity, Value::Literal(4));
    assert_eq!(
        config.excess_capacity_termination_policy,
        Some(Value::Literal(
            SpotFleetRequestConfigDataExcessCapacityTerminationPolicy::NoTermination
        ))
    );
    assert_eq!(config.iam_fleet_role, Value::get_att("FleetRole", "Arn"));
}

#[test]
fn template_with_typed_resources() {
    let mapping = Resource::new(ApiMapping {
        api_id: Value::reference("HttpApi"),
        api_mapping_key: Some("v1".into()),
        domain_name: "api.example.com".into(),
        stage: Value::reference("ProdStage"),
    })
    .depends_on("ProdStage");

    let mut template = Template::new().with_description("API mapping");
    template.add_resource("Mapping", &mapping).unwrap();
    let yaml = template.to_yaml().unwrap();
    let reread = Template::from_yaml(&yaml).unwrap();
    let mapping_again: Resource<ApiMapping> = reread.resource("Mapping").unwrap();
    assert_eq!(mapping_again, mapping);

    let catalog = crate::catalog();
    for (logical_id, type_name) in reread.resource_types() {
        let resource_type = catalog.require(type_name.unwrap()).unwrap();
        let properties = reread.resources[logical_id]["Properties"].clone();
        assert!(resource_type.parse_properties(properties).is_ok());
    }
}
