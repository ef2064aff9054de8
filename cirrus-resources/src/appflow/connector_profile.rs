//! ConnectorProfile resource type
//!
//! Auto-generated from CloudFormation schema: AWS::AppFlow::ConnectorProfile
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::allowed_values;
use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, StructSchema};
use cirrus_core::{Map, Value};
use serde::{Deserialize, Serialize};

allowed_values! {
    /// Connector types supported by Amazon AppFlow
    pub enum ConnectorType {
        SapoData = "SAPOData",
        Salesforce = "Salesforce",
        Pardot = "Pardot",
        Singular = "Singular",
        Slack = "Slack",
        Redshift = "Redshift",
        S3 = "S3",
        Marketo = "Marketo",
        Googleanalytics = "Googleanalytics",
        Zendesk = "Zendesk",
        Servicenow = "Servicenow",
        Datadog = "Datadog",
        Trendmicro = "Trendmicro",
        Snowflake = "Snowflake",
        Dynatrace = "Dynatrace",
        Infornexus = "Infornexus",
        Amplitude = "Amplitude",
        Veeva = "Veeva",
        CustomConnector = "CustomConnector",
        EventBridge = "EventBridge",
        Upsolver = "Upsolver",
        LookoutMetrics = "LookoutMetrics",
    }
}

allowed_values! {
    /// Allowed values for `ConnectionMode`
    pub enum ConnectorProfileConnectionMode {
        Public = "Public",
        Private = "Private",
    }
}

allowed_values! {
    /// Allowed values for `AuthenticationType`
    pub enum CustomConnectorProfileCredentialsAuthenticationType {
        Oauth2 = "OAUTH2",
        Apikey = "APIKEY",
        Basic = "BASIC",
        Custom = "CUSTOM",
    }
}

allowed_values! {
    /// Allowed values for `OAuth2GrantType`
    pub enum OAuth2PropertiesOAuth2GrantType {
        AuthorizationCode = "AUTHORIZATION_CODE",
        ClientCredentials = "CLIENT_CREDENTIALS",
        JwtBearer = "JWT_BEARER",
    }
}

/// `AWS::AppFlow::ConnectorProfile`
///
/// Creates a new connector profile associated with your AWS account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ConnectorProfile {
    /// Indicates the connection mode and if it is public or private.
    pub connection_mode: Value<ConnectorProfileConnectionMode>,
    /// The label of the connector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_label: Option<Value<String>>,
    /// Defines the connector-specific configuration and credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_profile_config: Option<ConnectorProfileConfig>,
    /// The name of the connector profile.
    pub connector_profile_name: Value<String>,
    /// The type of connector, such as Salesforce, Amplitude, and so on.
    pub connector_type: Value<ConnectorType>,
    /// The ARN of the AWS Key Management Service key you provide for encryption.
    #[serde(rename = "KMSArn", default, skip_serializing_if = "Option::is_none")]
    pub kms_arn: Option<Value<String>>,
}

impl ResourceProperties for ConnectorProfile {
    const TYPE: &'static str = "AWS::AppFlow::ConnectorProfile";

    fn schema() -> &'static ResourceSchema {
        &CONNECTOR_PROFILE_SCHEMA
    }
}

pub const CONNECTOR_PROFILE_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::AppFlow::ConnectorProfile",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-appflow-connectorprofile.html",
    properties: &[
        PropertySchema::new(
            "ConnectionMode",
            PropertyType::Enum(&ConnectorProfileConnectionMode::SCHEMA),
        )
        .required(),
        PropertySchema::new("ConnectorLabel", PropertyType::String)
            .immutable(),
        PropertySchema::new(
            "ConnectorProfileConfig",
            PropertyType::Struct(&CONNECTOR_PROFILE_CONFIG_SCHEMA),
        ),
        PropertySchema::new("ConnectorProfileName", PropertyType::String)
            .required()
            .immutable(),
        PropertySchema::new("ConnectorType", PropertyType::Enum(&ConnectorType::SCHEMA))
            .required()
            .immutable(),
        PropertySchema::new("KMSArn", PropertyType::String),
    ],
    attributes: &["ConnectorProfileArn", "CredentialsArn"],
};

/// Defines the connector-specific configuration and credentials for the connector profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ConnectorProfileConfig {
    /// The connector-specific credentials required by each connector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_profile_credentials: Option<ConnectorProfileCredentials>,
    /// The connector-specific properties of the profile configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_profile_properties: Option<ConnectorProfileProperties>,
}

pub const CONNECTOR_PROFILE_CONFIG_SCHEMA: StructSchema = StructSchema {
    name: "ConnectorProfileConfig",
    properties: &[
        PropertySchema::new(
            "ConnectorProfileCredentials",
            PropertyType::Struct(&CONNECTOR_PROFILE_CREDENTIALS_SCHEMA),
        ),
        PropertySchema::new(
            "ConnectorProfileProperties",
            PropertyType::Struct(&CONNECTOR_PROFILE_PROPERTIES_SCHEMA),
        ),
    ],
};

/// The connector-specific credentials required by a connector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ConnectorProfileCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amplitude: Option<AmplitudeConnectorProfileCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_connector: Option<CustomConnectorProfileCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datadog: Option<DatadogConnectorProfileCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynatrace: Option<DynatraceConnectorProfileCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_analytics: Option<GoogleAnalyticsConnectorProfileCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketo: Option<MarketoConnectorProfileCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redshift: Option<RedshiftConnectorProfileCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salesforce: Option<SalesforceConnectorProfileCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_now: Option<ServiceNowConnectorProfileCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack: Option<SlackConnectorProfileCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snowflake: Option<SnowflakeConnectorProfileCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zendesk: Option<ZendeskConnectorProfileCredentials>,
}

pub const CONNECTOR_PROFILE_CREDENTIALS_SCHEMA: StructSchema = StructSchema {
    name: "ConnectorProfileCredentials",
    properties: &[
        PropertySchema::new(
            "Amplitude",
            PropertyType::Struct(&AMPLITUDE_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA),
        ),
        PropertySchema::new(
            "CustomConnector",
            PropertyType::Struct(&CUSTOM_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA),
        ),
        PropertySchema::new(
            "Datadog",
            PropertyType::Struct(&DATADOG_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA),
        ),
        PropertySchema::new(
            "Dynatrace",
            PropertyType::Struct(&DYNATRACE_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA),
        ),
        PropertySchema::new(
            "GoogleAnalytics",
            PropertyType::Struct(&GOOGLE_ANALYTICS_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA),
        ),
        PropertySchema::new(
            "Marketo",
            PropertyType::Struct(&MARKETO_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA),
        ),
        PropertySchema::new(
            "Redshift",
            PropertyType::Struct(&REDSHIFT_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA),
        ),
        PropertySchema::new(
            "Salesforce",
            PropertyType::Struct(&SALESFORCE_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA),
        ),
        PropertySchema::new(
            "ServiceNow",
            PropertyType::Struct(&SERVICE_NOW_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA),
        ),
        PropertySchema::new(
            "Slack",
            PropertyType::Struct(&SLACK_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA),
        ),
        PropertySchema::new(
            "Snowflake",
            PropertyType::Struct(&SNOWFLAKE_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA),
        ),
        PropertySchema::new(
            "Zendesk",
            PropertyType::Struct(&ZENDESK_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AmplitudeConnectorProfileCredentials {
    /// A unique alphanumeric identifier used to authenticate a user, developer, or calling program
    /// to your API.
    pub api_key: Value<String>,
    /// The Secret Access Key portion of the credentials.
    pub secret_key: Value<String>,
}

pub const AMPLITUDE_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA: StructSchema = StructSchema {
    name: "AmplitudeConnectorProfileCredentials",
    properties: &[
        PropertySchema::new("ApiKey", PropertyType::String)
            .required(),
        PropertySchema::new("SecretKey", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CustomConnectorProfileCredentials {
    /// The API keys required for the authentication of the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<ApiKeyCredentials>,
    /// The authentication type that the custom connector uses for authenticating while creating a
    /// connector profile.
    pub authentication_type: Value<CustomConnectorProfileCredentialsAuthenticationType>,
    /// The basic credentials that are required for the authentication of the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic: Option<BasicAuthCredentials>,
    /// If the connector uses the custom authentication mechanism, this holds the required
    /// credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomAuthCredentials>,
    /// The OAuth 2.0 credentials required for the authentication of the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth2: Option<OAuth2Credentials>,
}

pub const CUSTOM_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA: StructSchema = StructSchema {
    name: "CustomConnectorProfileCredentials",
    properties: &[
        PropertySchema::new("ApiKey", PropertyType::Struct(&API_KEY_CREDENTIALS_SCHEMA)),
        PropertySchema::new(
            "AuthenticationType",
            PropertyType::Enum(&CustomConnectorProfileCredentialsAuthenticationType::SCHEMA),
        )
        .required(),
        PropertySchema::new(
            "Basic",
            PropertyType::Struct(&BASIC_AUTH_CREDENTIALS_SCHEMA),
        ),
        PropertySchema::new(
            "Custom",
            PropertyType::Struct(&CUSTOM_AUTH_CREDENTIALS_SCHEMA),
        ),
        PropertySchema::new("Oauth2", PropertyType::Struct(&O_AUTH2_CREDENTIALS_SCHEMA)),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ApiKeyCredentials {
    /// The API key required for API key authentication.
    pub api_key: Value<String>,
    /// The API secret key required for API key authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_secret_key: Option<Value<String>>,
}

pub const API_KEY_CREDENTIALS_SCHEMA: StructSchema = StructSchema {
    name: "ApiKeyCredentials",
    properties: &[
        PropertySchema::new("ApiKey", PropertyType::String)
            .required(),
        PropertySchema::new("ApiSecretKey", PropertyType::String),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct BasicAuthCredentials {
    /// The password to use to connect to a resource.
    pub password: Value<String>,
    /// The username to use to connect to a resource.
    pub username: Value<String>,
}

pub const BASIC_AUTH_CREDENTIALS_SCHEMA: StructSchema = StructSchema {
    name: "BasicAuthCredentials",
    properties: &[
        PropertySchema::new("Password", PropertyType::String)
            .required(),
        PropertySchema::new("Username", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CustomAuthCredentials {
    /// A map that holds custom authentication credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_map: Option<Map<String>>,
    /// The custom authentication type that the connector uses.
    pub custom_authentication_type: Value<String>,
}

pub const CUSTOM_AUTH_CREDENTIALS_SCHEMA: StructSchema = StructSchema {
    name: "CustomAuthCredentials",
    properties: &[
        PropertySchema::new("CredentialsMap", PropertyType::Map(&PropertyType::String)),
        PropertySchema::new("CustomAuthenticationType", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct OAuth2Credentials {
    /// The access token used to access the connector on your behalf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<Value<String>>,
    /// The identifier for the desired client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Value<String>>,
    /// The client secret used by the OAuth client to authenticate to the authorization server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<Value<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub o_auth_request: Option<ConnectorOAuthRequest>,
    /// The refresh token used to refresh an expired access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<Value<String>>,
}

pub const O_AUTH2_CREDENTIALS_SCHEMA: StructSchema = StructSchema {
    name: "OAuth2Credentials",
    properties: &[
        PropertySchema::new("AccessToken", PropertyType::String),
        PropertySchema::new("ClientId", PropertyType::String),
        PropertySchema::new("ClientSecret", PropertyType::String),
        PropertySchema::new(
            "OAuthRequest",
            PropertyType::Struct(&CONNECTOR_O_AUTH_REQUEST_SCHEMA),
        ),
        PropertySchema::new("RefreshToken", PropertyType::String),
    ],
};

/// Used by select connectors for which the OAuth workflow is supported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ConnectorOAuthRequest {
    /// The code provided by the connector when it has been authenticated via the connected app.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<Value<String>>,
    /// The URL to which the authentication server redirects the browser after authorization has
    /// been granted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<Value<String>>,
}

pub const CONNECTOR_O_AUTH_REQUEST_SCHEMA: StructSchema = StructSchema {
    name: "ConnectorOAuthRequest",
    properties: &[
        PropertySchema::new("AuthCode", PropertyType::String),
        PropertySchema::new("RedirectUri", PropertyType::String),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DatadogConnectorProfileCredentials {
    /// A unique alphanumeric identifier used to authenticate a user, developer, or calling program
    /// to your API.
    pub api_key: Value<String>,
    /// Application keys, in conjunction with your API key, give you full access to Datadog's
    /// programmatic API.
    pub application_key: Value<String>,
}

pub const DATADOG_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA: StructSchema = StructSchema {
    name: "DatadogConnectorProfileCredentials",
    properties: &[
        PropertySchema::new("ApiKey", PropertyType::String)
            .required(),
        PropertySchema::new("ApplicationKey", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DynatraceConnectorProfileCredentials {
    /// The API tokens used by Dynatrace API to authenticate various API calls.
    pub api_token: Value<String>,
}

pub const DYNATRACE_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA: StructSchema = StructSchema {
    name: "DynatraceConnectorProfileCredentials",
    properties: &[
        PropertySchema::new("ApiToken", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct GoogleAnalyticsConnectorProfileCredentials {
    /// The credentials used to access protected resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<Value<String>>,
    /// The identifier for the desired client.
    pub client_id: Value<String>,
    /// The client secret used by the OAuth client to authenticate to the authorization server.
    pub client_secret: Value<String>,
    /// Used by select connectors for which the OAuth workflow is supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_o_auth_request: Option<ConnectorOAuthRequest>,
    /// The credentials used to acquire new access tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<Value<String>>,
}

pub const GOOGLE_ANALYTICS_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA: StructSchema = StructSchema {
    name: "GoogleAnalyticsConnectorProfileCredentials",
    properties: &[
        PropertySchema::new("AccessToken", PropertyType::String),
        PropertySchema::new("ClientId", PropertyType::String)
            .required(),
        PropertySchema::new("ClientSecret", PropertyType::String)
            .required(),
        PropertySchema::new(
            "ConnectorOAuthRequest",
            PropertyType::Struct(&CONNECTOR_O_AUTH_REQUEST_SCHEMA),
        ),
        PropertySchema::new("RefreshToken", PropertyType::String),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct MarketoConnectorProfileCredentials {
    /// The credentials used to access protected resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<Value<String>>,
    /// The identifier for the desired client.
    pub client_id: Value<String>,
    /// The client secret used by the OAuth client to authenticate to the authorization server.
    pub client_secret: Value<String>,
    /// Used by select connectors for which the OAuth workflow is supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_o_auth_request: Option<ConnectorOAuthRequest>,
}

pub const MARKETO_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA: StructSchema = StructSchema {
    name: "MarketoConnectorProfileCredentials",
    properties: &[
        PropertySchema::new("AccessToken", PropertyType::String),
        PropertySchema::new("ClientId", PropertyType::String)
            .required(),
        PropertySchema::new("ClientSecret", PropertyType::String)
            .required(),
        PropertySchema::new(
            "ConnectorOAuthRequest",
            PropertyType::Struct(&CONNECTOR_O_AUTH_REQUEST_SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct RedshiftConnectorProfileCredentials {
    /// The password that corresponds to the user name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Value<String>>,
    /// The name of the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<Value<String>>,
}

pub const REDSHIFT_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA: StructSchema = StructSchema {
    name: "RedshiftConnectorProfileCredentials",
    properties: &[
        PropertySchema::new("Password", PropertyType::String),
        PropertySchema::new("Username", PropertyType::String),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SalesforceConnectorProfileCredentials {
    /// The credentials used to access protected Salesforce resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<Value<String>>,
    /// The secret manager ARN, which contains the client ID and client secret of the connected app.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_credentials_arn: Option<Value<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_o_auth_request: Option<ConnectorOAuthRequest>,
    /// The credentials used to acquire new access tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<Value<String>>,
}

pub const SALESFORCE_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA: StructSchema = StructSchema {
    name: "SalesforceConnectorProfileCredentials",
    properties: &[
        PropertySchema::new("AccessToken", PropertyType::String),
        PropertySchema::new("ClientCredentialsArn", PropertyType::String),
        PropertySchema::new(
            "ConnectorOAuthRequest",
            PropertyType::Struct(&CONNECTOR_O_AUTH_REQUEST_SCHEMA),
        ),
        PropertySchema::new("RefreshToken", PropertyType::String),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ServiceNowConnectorProfileCredentials {
    /// The password that corresponds to the user name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Value<String>>,
    /// The name of the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<Value<String>>,
}

pub const SERVICE_NOW_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA: StructSchema = StructSchema {
    name: "ServiceNowConnectorProfileCredentials",
    properties: &[
        PropertySchema::new("Password", PropertyType::String),
        PropertySchema::new("Username", PropertyType::String),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SlackConnectorProfileCredentials {
    /// The credentials used to access protected resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<Value<String>>,
    /// The identifier for the desired client.
    pub client_id: Value<String>,
    /// The client secret used by the OAuth client to authenticate to the authorization server.
    pub client_secret: Value<String>,
    /// Used by select connectors for which the OAuth workflow is supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_o_auth_request: Option<ConnectorOAuthRequest>,
}

pub const SLACK_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA: StructSchema = StructSchema {
    name: "SlackConnectorProfileCredentials",
    properties: &[
        PropertySchema::new("AccessToken", PropertyType::String),
        PropertySchema::new("ClientId", PropertyType::String)
            .required(),
        PropertySchema::new("ClientSecret", PropertyType::String)
            .required(),
        PropertySchema::new(
            "ConnectorOAuthRequest",
            PropertyType::Struct(&CONNECTOR_O_AUTH_REQUEST_SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SnowflakeConnectorProfileCredentials {
    /// The password that corresponds to the user name.
    pub password: Value<String>,
    /// The name of the user.
    pub username: Value<String>,
}

pub const SNOWFLAKE_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA: StructSchema = StructSchema {
    name: "SnowflakeConnectorProfileCredentials",
    properties: &[
        PropertySchema::new("Password", PropertyType::String)
            .required(),
        PropertySchema::new("Username", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ZendeskConnectorProfileCredentials {
    /// The credentials used to access protected resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<Value<String>>,
    /// The identifier for the desired client.
    pub client_id: Value<String>,
    /// The client secret used by the OAuth client to authenticate to the authorization server.
    pub client_secret: Value<String>,
    /// Used by select connectors for which the OAuth workflow is supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_o_auth_request: Option<ConnectorOAuthRequest>,
}

pub const ZENDESK_CONNECTOR_PROFILE_CREDENTIALS_SCHEMA: StructSchema = StructSchema {
    name: "ZendeskConnectorProfileCredentials",
    properties: &[
        PropertySchema::new("AccessToken", PropertyType::String),
        PropertySchema::new("ClientId", PropertyType::String)
            .required(),
        PropertySchema::new("ClientSecret", PropertyType::String)
            .required(),
        PropertySchema::new(
            "ConnectorOAuthRequest",
            PropertyType::Struct(&CONNECTOR_O_AUTH_REQUEST_SCHEMA),
        ),
    ],
};

/// The connector-specific profile properties required by each connector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ConnectorProfileProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_connector: Option<CustomConnectorProfileProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datadog: Option<DatadogConnectorProfileProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynatrace: Option<DynatraceConnectorProfileProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketo: Option<MarketoConnectorProfileProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redshift: Option<RedshiftConnectorProfileProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salesforce: Option<SalesforceConnectorProfileProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_now: Option<ServiceNowConnectorProfileProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack: Option<SlackConnectorProfileProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snowflake: Option<SnowflakeConnectorProfileProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zendesk: Option<ZendeskConnectorProfileProperties>,
}

pub const CONNECTOR_PROFILE_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "ConnectorProfileProperties",
    properties: &[
        PropertySchema::new(
            "CustomConnector",
            PropertyType::Struct(&CUSTOM_CONNECTOR_PROFILE_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "Datadog",
            PropertyType::Struct(&DATADOG_CONNECTOR_PROFILE_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "Dynatrace",
            PropertyType::Struct(&DYNATRACE_CONNECTOR_PROFILE_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "Marketo",
            PropertyType::Struct(&MARKETO_CONNECTOR_PROFILE_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "Redshift",
            PropertyType::Struct(&REDSHIFT_CONNECTOR_PROFILE_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "Salesforce",
            PropertyType::Struct(&SALESFORCE_CONNECTOR_PROFILE_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "ServiceNow",
            PropertyType::Struct(&SERVICE_NOW_CONNECTOR_PROFILE_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "Slack",
            PropertyType::Struct(&SLACK_CONNECTOR_PROFILE_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "Snowflake",
            PropertyType::Struct(&SNOWFLAKE_CONNECTOR_PROFILE_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "Zendesk",
            PropertyType::Struct(&ZENDESK_CONNECTOR_PROFILE_PROPERTIES_SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CustomConnectorProfileProperties {
    /// The OAuth 2.0 properties required for OAuth 2.0 authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub o_auth2_properties: Option<OAuth2Properties>,
    /// A map of properties that are required to create a profile for the custom connector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_properties: Option<Map<String>>,
}

pub const CUSTOM_CONNECTOR_PROFILE_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "CustomConnectorProfileProperties",
    properties: &[
        PropertySchema::new(
            "OAuth2Properties",
            PropertyType::Struct(&O_AUTH2_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "ProfileProperties",
            PropertyType::Map(&PropertyType::String),
        ),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct OAuth2Properties {
    /// The OAuth 2.0 grant type used by connector for OAuth 2.0 authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub o_auth2_grant_type: Option<Value<OAuth2PropertiesOAuth2GrantType>>,
    /// The token URL required for OAuth 2.0 authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_url: Option<Value<String>>,
    /// Associates your token URL with a map of properties that you define.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_url_custom_properties: Option<Map<String>>,
}

pub const O_AUTH2_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "OAuth2Properties",
    properties: &[
        PropertySchema::new(
            "OAuth2GrantType",
            PropertyType::Enum(&OAuth2PropertiesOAuth2GrantType::SCHEMA),
        ),
        PropertySchema::new("TokenUrl", PropertyType::String),
        PropertySchema::new(
            "TokenUrlCustomProperties",
            PropertyType::Map(&PropertyType::String),
        ),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DatadogConnectorProfileProperties {
    /// The location of the connector instance.
    pub instance_url: Value<String>,
}

pub const DATADOG_CONNECTOR_PROFILE_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "DatadogConnectorProfileProperties",
    properties: &[
        PropertySchema::new("InstanceUrl", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DynatraceConnectorProfileProperties {
    /// The location of the connector instance.
    pub instance_url: Value<String>,
}

pub const DYNATRACE_CONNECTOR_PROFILE_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "DynatraceConnectorProfileProperties",
    properties: &[
        PropertySchema::new("InstanceUrl", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct MarketoConnectorProfileProperties {
    /// The location of the connector instance.
    pub instance_url: Value<String>,
}

pub const MARKETO_CONNECTOR_PROFILE_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "MarketoConnectorProfileProperties",
    properties: &[
        PropertySchema::new("InstanceUrl", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct RedshiftConnectorProfileProperties {
    /// A name for the associated Amazon S3 bucket.
    pub bucket_name: Value<String>,
    /// The object key for the destination bucket in which Amazon AppFlow places the files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_prefix: Option<Value<String>>,
    /// The unique ID that's assigned to an Amazon Redshift cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_identifier: Option<Value<String>>,
    /// The ARN of the IAM role that permits AppFlow to access your Amazon Redshift database through
    /// the Data API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_api_role_arn: Option<Value<String>>,
    /// The name of an Amazon Redshift database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<Value<String>>,
    /// The JDBC URL of the Amazon Redshift cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_url: Option<Value<String>>,
    /// Indicates whether the connector profile defines a connection to an Amazon Redshift
    /// Serverless data warehouse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_redshift_serverless: Option<Value<bool>>,
    /// The ARN of the IAM role.
    pub role_arn: Value<String>,
    /// The name of an Amazon Redshift workgroup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workgroup_name: Option<Value<String>>,
}

pub const REDSHIFT_CONNECTOR_PROFILE_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "RedshiftConnectorProfileProperties",
    properties: &[
        PropertySchema::new("BucketName", PropertyType::String)
            .required(),
        PropertySchema::new("BucketPrefix", PropertyType::String),
        PropertySchema::new("ClusterIdentifier", PropertyType::String),
        PropertySchema::new("DataApiRoleArn", PropertyType::String),
        PropertySchema::new("DatabaseName", PropertyType::String),
        PropertySchema::new("DatabaseUrl", PropertyType::String),
        PropertySchema::new("IsRedshiftServerless", PropertyType::Boolean),
        PropertySchema::new("RoleArn", PropertyType::String)
            .required(),
        PropertySchema::new("WorkgroupName", PropertyType::String),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SalesforceConnectorProfileProperties {
    /// The location of the Salesforce resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_url: Option<Value<String>>,
    /// Indicates whether the connector profile applies to a sandbox or production environment.
    #[serde(rename = "isSandboxEnvironment", default, skip_serializing_if = "Option::is_none")]
    pub is_sandbox_environment: Option<Value<bool>>,
    /// If the connection mode for the connector profile is private, this parameter sets whether
    /// Amazon AppFlow uses the private network to send metadata and authorization calls to
    /// Salesforce.
    #[serde(
        rename = "usePrivateLinkForMetadataAndAuthorization",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub use_private_link_for_metadata_and_authorization: Option<Value<bool>>,
}

pub const SALESFORCE_CONNECTOR_PROFILE_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "SalesforceConnectorProfileProperties",
    properties: &[
        PropertySchema::new("InstanceUrl", PropertyType::String),
        PropertySchema::new("isSandboxEnvironment", PropertyType::Boolean),
        PropertySchema::new(
            "usePrivateLinkForMetadataAndAuthorization",
            PropertyType::Boolean,
        ),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ServiceNowConnectorProfileProperties {
    /// The location of the connector instance.
    pub instance_url: Value<String>,
}

pub const SERVICE_NOW_CONNECTOR_PROFILE_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "ServiceNowConnectorProfileProperties",
    properties: &[
        PropertySchema::new("InstanceUrl", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SlackConnectorProfileProperties {
    /// The location of the connector instance.
    pub instance_url: Value<String>,
}

pub const SLACK_CONNECTOR_PROFILE_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "SlackConnectorProfileProperties",
    properties: &[
        PropertySchema::new("InstanceUrl", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SnowflakeConnectorProfileProperties {
    /// The name of the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<Value<String>>,
    /// The name of the Amazon S3 bucket associated with Snowflake.
    pub bucket_name: Value<String>,
    /// The bucket path that refers to the Amazon S3 bucket associated with Snowflake.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_prefix: Option<Value<String>>,
    /// The Snowflake Private Link service name to be used for private data transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_link_service_name: Option<Value<String>>,
    /// The AWS Region of the Snowflake account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Value<String>>,
    /// The name of the Amazon S3 stage that was created while setting up an Amazon S3 stage in the
    /// Snowflake account.
    pub stage: Value<String>,
    /// The name of the Snowflake warehouse.
    pub warehouse: Value<String>,
}

pub const SNOWFLAKE_CONNECTOR_PROFILE_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "SnowflakeConnectorProfileProperties",
    properties: &[
        PropertySchema::new("AccountName", PropertyType::String),
        PropertySchema::new("BucketName", PropertyType::String)
            .required(),
        PropertySchema::new("BucketPrefix", PropertyType::String),
        PropertySchema::new("PrivateLinkServiceName", PropertyType::String),
        PropertySchema::new("Region", PropertyType::String),
        PropertySchema::new("Stage", PropertyType::String)
            .required(),
        PropertySchema::new("Warehouse", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ZendeskConnectorProfileProperties {
    /// The location of the connector instance.
    pub instance_url: Value<String>,
}

pub const ZENDESK_CONNECTOR_PROFILE_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "ZendeskConnectorProfileProperties",
    properties: &[
        PropertySchema::new("InstanceUrl", PropertyType::String)
            .required(),
    ],
};
