//! DomainName resource type
//!
//! Auto-generated from CloudFormation schema: AWS::ApiGatewayV2::DomainName
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::allowed_values;
use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, StructSchema};
use cirrus_core::{Map, Value};
use serde::{Deserialize, Serialize};

allowed_values! {
    /// Allowed values for `EndpointType`
    pub enum DomainNameConfigurationEndpointType {
        Regional = "REGIONAL",
    }
}

allowed_values! {
    /// Allowed values for `IpAddressType`
    pub enum DomainNameConfigurationIpAddressType {
        Ipv4 = "ipv4",
        Dualstack = "dualstack",
    }
}

allowed_values! {
    /// Allowed values for `SecurityPolicy`
    pub enum DomainNameConfigurationSecurityPolicy {
        Tls10 = "TLS_1_0",
        Tls12 = "TLS_1_2",
    }
}

/// `AWS::ApiGatewayV2::DomainName`
///
/// A custom domain name for WebSocket and HTTP APIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DomainName {
    /// The custom domain name for your API in Amazon API Gateway.
    pub domain_name: Value<String>,
    /// The domain name configurations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_name_configurations: Option<Vec<DomainNameConfiguration>>,
    /// The mutual TLS authentication configuration for a custom domain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutual_tls_authentication: Option<MutualTlsAuthentication>,
    /// The collection of tags associated with a domain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Map<String>>,
}

impl ResourceProperties for DomainName {
    const TYPE: &'static str = "AWS::ApiGatewayV2::DomainName";

    fn schema() -> &'static ResourceSchema {
        &DOMAIN_NAME_SCHEMA
    }
}

pub const DOMAIN_NAME_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::ApiGatewayV2::DomainName",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-apigatewayv2-domainname.html",
    properties: &[
        PropertySchema::new("DomainName", PropertyType::String)
            .required()
            .immutable(),
        PropertySchema::new(
            "DomainNameConfigurations",
            PropertyType::List(&PropertyType::Struct(&DOMAIN_NAME_CONFIGURATION_SCHEMA)),
        ),
        PropertySchema::new(
            "MutualTlsAuthentication",
            PropertyType::Struct(&MUTUAL_TLS_AUTHENTICATION_SCHEMA),
        ),
        PropertySchema::new("Tags", PropertyType::Map(&PropertyType::String)),
    ],
    attributes: &["DomainNameArn", "RegionalDomainName", "RegionalHostedZoneId"],
};

/// The domain name configuration for a custom domain name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DomainNameConfiguration {
    /// An AWS-managed certificate that will be used by the edge-optimized endpoint for this domain
    /// name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_arn: Option<Value<String>>,
    /// The user-friendly name of the certificate that will be used by the edge-optimized endpoint
    /// for this domain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_name: Option<Value<String>>,
    /// The endpoint type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_type: Option<Value<DomainNameConfigurationEndpointType>>,
    /// The IP address types that can invoke the domain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address_type: Option<Value<DomainNameConfigurationIpAddressType>>,
    /// The Amazon resource name (ARN) for the public certificate issued by ACM to validate
    /// ownership of your custom domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership_verification_certificate_arn: Option<Value<String>>,
    /// The Transport Layer Security (TLS) version of the security policy for this domain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_policy: Option<Value<DomainNameConfigurationSecurityPolicy>>,
}

pub const DOMAIN_NAME_CONFIGURATION_SCHEMA: StructSchema = StructSchema {
    name: "DomainNameConfiguration",
    properties: &[
        PropertySchema::new("CertificateArn", PropertyType::String),
        PropertySchema::new("CertificateName", PropertyType::String),
        PropertySchema::new(
            "EndpointType",
            PropertyType::Enum(&DomainNameConfigurationEndpointType::SCHEMA),
        ),
        PropertySchema::new(
            "IpAddressType",
            PropertyType::Enum(&DomainNameConfigurationIpAddressType::SCHEMA),
        ),
        PropertySchema::new("OwnershipVerificationCertificateArn", PropertyType::String),
        PropertySchema::new(
            "SecurityPolicy",
            PropertyType::Enum(&DomainNameConfigurationSecurityPolicy::SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct MutualTlsAuthentication {
    /// An Amazon S3 URL that specifies the truststore for mutual TLS authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truststore_uri: Option<Value<String>>,
    /// The version of the S3 object that contains your truststore.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truststore_version: Option<Value<String>>,
}

pub const MUTUAL_TLS_AUTHENTICATION_SCHEMA: StructSchema = StructSchema {
    name: "MutualTlsAuthentication",
    properties: &[
        PropertySchema::new("TruststoreUri", PropertyType::String),
        PropertySchema::new("TruststoreVersion", PropertyType::String),
    ],
};
