//! User resource type
//!
//! Auto-generated from CloudFormation schema: AWS::ElastiCache::User
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::allowed_values;
use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, StructSchema, TAG_SCHEMA};
use cirrus_core::{List, Tag, Value};
use serde::{Deserialize, Serialize};

allowed_values! {
    /// Allowed values for `Engine`
    pub enum UserEngine {
        Redis = "redis",
        Valkey = "valkey",
    }
}

allowed_values! {
    /// Allowed values for `Type`
    pub enum AuthenticationModeType {
        Password = "password",
        Iam = "iam",
    }
}

/// `AWS::ElastiCache::User`
///
/// For Valkey 7.2 and onwards, or Redis OSS engine version 6.0 and onwards: creates a user for
/// role-based access control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct User {
    /// Access permissions string used for this user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_string: Option<Value<String>>,
    /// Specifies the authentication mode to use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_mode: Option<AuthenticationMode>,
    /// The current supported values are valkey and redis.
    pub engine: Value<UserEngine>,
    /// Indicates a password is not required for this user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_password_required: Option<Value<bool>>,
    /// Passwords used for this user. You can create up to two passwords for each user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passwords: Option<List<String>>,
    /// A list of tags to be added to this resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// The ID of the user.
    pub user_id: Value<String>,
    /// The username of the user.
    pub user_name: Value<String>,
}

impl ResourceProperties for User {
    const TYPE: &'static str = "AWS::ElastiCache::User";

    fn schema() -> &'static ResourceSchema {
        &USER_SCHEMA
    }
}

pub const USER_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::ElastiCache::User",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-elasticache-user.html",
    properties: &[
        PropertySchema::new("AccessString", PropertyType::String),
        PropertySchema::new(
            "AuthenticationMode",
            PropertyType::Struct(&AUTHENTICATION_MODE_SCHEMA),
        ),
        PropertySchema::new("Engine", PropertyType::Enum(&UserEngine::SCHEMA))
            .required()
            .immutable(),
        PropertySchema::new("NoPasswordRequired", PropertyType::Boolean),
        PropertySchema::new("Passwords", PropertyType::List(&PropertyType::String)),
        PropertySchema::new(
            "Tags",
            PropertyType::List(&PropertyType::Struct(&TAG_SCHEMA)),
        ),
        PropertySchema::new("UserId", PropertyType::String)
            .required()
            .immutable(),
        PropertySchema::new("UserName", PropertyType::String)
            .required()
            .immutable(),
    ],
    attributes: &["Arn", "Status"],
};

/// Specifies the authentication mode to use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AuthenticationMode {
    /// Specifies the passwords to use for authentication if Type is set to password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passwords: Option<List<String>>,
    /// Specifies the authentication type.
    #[serde(rename = "Type")]
    pub type_: Value<AuthenticationModeType>,
}

pub const AUTHENTICATION_MODE_SCHEMA: StructSchema = StructSchema {
    name: "AuthenticationMode",
    properties: &[
        PropertySchema::new("Passwords", PropertyType::List(&PropertyType::String)),
        PropertySchema::new("Type", PropertyType::Enum(&AuthenticationModeType::SCHEMA))
            .required(),
    ],
};
