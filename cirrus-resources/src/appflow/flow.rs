//! Flow resource type
//!
//! Auto-generated from CloudFormation schema: AWS::AppFlow::Flow
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::allowed_values;
use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, StructSchema, TAG_SCHEMA};
use cirrus_core::{List, Map, Tag, Value};
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
    /// Possible write operations in the destination connector
    pub enum WriteOperationType {
        Insert = "INSERT",
        Upsert = "UPSERT",
        Update = "UPDATE",
        Delete = "DELETE",
    }
}

allowed_values! {
    /// Salesforce API used for a data transfer
    pub enum SalesforceDataTransferApi {
        Automatic = "AUTOMATIC",
        Bulkv2 = "BULKV2",
        RestSync = "REST_SYNC",
    }
}

allowed_values! {
    /// Allowed values for `FlowStatus`
    pub enum FlowFlowStatus {
        Active = "Active",
        Suspended = "Suspended",
        Draft = "Draft",
    }
}

allowed_values! {
    /// Allowed values for `Type`
    pub enum DataTransferApiType {
        Sync = "SYNC",
        Async = "ASYNC",
        Automatic = "AUTOMATIC",
    }
}

allowed_values! {
    /// Allowed values for `S3InputFileType`
    pub enum S3InputFormatConfigS3InputFileType {
        Csv = "CSV",
        Json = "JSON",
    }
}

allowed_values! {
    /// Allowed values for `FileType`
    pub enum S3OutputFormatConfigFileType {
        Csv = "CSV",
        Json = "JSON",
        Parquet = "PARQUET",
    }
}

allowed_values! {
    /// Allowed values for `AggregationType`
    pub enum AggregationConfigAggregationType {
        None = "None",
        SingleFile = "SingleFile",
    }
}

allowed_values! {
    /// Allowed values for `PathPrefixHierarchy`
    pub enum PrefixConfigPathPrefixHierarchyItem {
        ExecutionId = "EXECUTION_ID",
        SchemaVersion = "SCHEMA_VERSION",
    }
}

allowed_values! {
    /// Allowed values for `PrefixFormat`
    pub enum PrefixConfigPrefixFormat {
        Year = "YEAR",
        Month = "MONTH",
        Day = "DAY",
        Hour = "HOUR",
        Minute = "MINUTE",
    }
}

allowed_values! {
    /// Allowed values for `PrefixType`
    pub enum PrefixConfigPrefixType {
        Filename = "FILENAME",
        Path = "PATH",
        PathAndFilename = "PATH_AND_FILENAME",
    }
}

allowed_values! {
    /// Allowed values for `TaskType`
    pub enum TaskTaskType {
        Arithmetic = "Arithmetic",
        Filter = "Filter",
        Map = "Map",
        MapAll = "Map_all",
        Mask = "Mask",
        Merge = "Merge",
        Passthrough = "Passthrough",
        Truncate = "Truncate",
        Validate = "Validate",
        Partition = "Partition",
    }
}

allowed_values! {
    /// Allowed values for `CustomConnector`
    pub enum ConnectorOperatorCustomConnector {
        Projection = "PROJECTION",
        Contains = "CONTAINS",
        LessThan = "LESS_THAN",
        GreaterThan = "GREATER_THAN",
        Between = "BETWEEN",
        LessThanOrEqualTo = "LESS_THAN_OR_EQUAL_TO",
        GreaterThanOrEqualTo = "GREATER_THAN_OR_EQUAL_TO",
        EqualTo = "EQUAL_TO",
        NotEqualTo = "NOT_EQUAL_TO",
        Addition = "ADDITION",
        Multiplication = "MULTIPLICATION",
        Division = "DIVISION",
        Subtraction = "SUBTRACTION",
        MaskAll = "MASK_ALL",
        MaskFirstN = "MASK_FIRST_N",
        MaskLastN = "MASK_LAST_N",
        ValidateNonNull = "VALIDATE_NON_NULL",
        ValidateNonZero = "VALIDATE_NON_ZERO",
        ValidateNonNegative = "VALIDATE_NON_NEGATIVE",
        ValidateNumeric = "VALIDATE_NUMERIC",
        NoOp = "NO_OP",
    }
}

allowed_values! {
    /// Allowed values for `Datadog`
    pub enum ConnectorOperatorDatadog {
        Projection = "PROJECTION",
        Between = "BETWEEN",
        EqualTo = "EQUAL_TO",
        Addition = "ADDITION",
        Multiplication = "MULTIPLICATION",
        Division = "DIVISION",
        Subtraction = "SUBTRACTION",
        MaskAll = "MASK_ALL",
        MaskFirstN = "MASK_FIRST_N",
        MaskLastN = "MASK_LAST_N",
        ValidateNonNull = "VALIDATE_NON_NULL",
        ValidateNonZero = "VALIDATE_NON_ZERO",
        ValidateNonNegative = "VALIDATE_NON_NEGATIVE",
        ValidateNumeric = "VALIDATE_NUMERIC",
        NoOp = "NO_OP",
    }
}

allowed_values! {
    /// Allowed values for `Marketo`
    pub enum ConnectorOperatorMarketo {
        Projection = "PROJECTION",
        LessThan = "LESS_THAN",
        GreaterThan = "GREATER_THAN",
        Between = "BETWEEN",
        Addition = "ADDITION",
        Multiplication = "MULTIPLICATION",
        Division = "DIVISION",
        Subtraction = "SUBTRACTION",
        MaskAll = "MASK_ALL",
        MaskFirstN = "MASK_FIRST_N",
        MaskLastN = "MASK_LAST_N",
        ValidateNonNull = "VALIDATE_NON_NULL",
        ValidateNonZero = "VALIDATE_NON_ZERO",
        ValidateNonNegative = "VALIDATE_NON_NEGATIVE",
        ValidateNumeric = "VALIDATE_NUMERIC",
        NoOp = "NO_OP",
    }
}

allowed_values! {
    /// Allowed values for `S3`
    pub enum ConnectorOperatorS3 {
        Projection = "PROJECTION",
        LessThan = "LESS_THAN",
        GreaterThan = "GREATER_THAN",
        Between = "BETWEEN",
        LessThanOrEqualTo = "LESS_THAN_OR_EQUAL_TO",
        GreaterThanOrEqualTo = "GREATER_THAN_OR_EQUAL_TO",
        EqualTo = "EQUAL_TO",
        NotEqualTo = "NOT_EQUAL_TO",
        Addition = "ADDITION",
        Multiplication = "MULTIPLICATION",
        Division = "DIVISION",
        Subtraction = "SUBTRACTION",
        MaskAll = "MASK_ALL",
        MaskFirstN = "MASK_FIRST_N",
        MaskLastN = "MASK_LAST_N",
        ValidateNonNull = "VALIDATE_NON_NULL",
        ValidateNonZero = "VALIDATE_NON_ZERO",
        ValidateNonNegative = "VALIDATE_NON_NEGATIVE",
        ValidateNumeric = "VALIDATE_NUMERIC",
        NoOp = "NO_OP",
    }
}

allowed_values! {
    /// Allowed values for `Salesforce`
    pub enum ConnectorOperatorSalesforce {
        Projection = "PROJECTION",
        Contains = "CONTAINS",
        LessThan = "LESS_THAN",
        GreaterThan = "GREATER_THAN",
        Between = "BETWEEN",
        LessThanOrEqualTo = "LESS_THAN_OR_EQUAL_TO",
        GreaterThanOrEqualTo = "GREATER_THAN_OR_EQUAL_TO",
        EqualTo = "EQUAL_TO",
        NotEqualTo = "NOT_EQUAL_TO",
        Addition = "ADDITION",
        Multiplication = "MULTIPLICATION",
        Division = "DIVISION",
        Subtraction = "SUBTRACTION",
        MaskAll = "MASK_ALL",
        MaskFirstN = "MASK_FIRST_N",
        MaskLastN = "MASK_LAST_N",
        ValidateNonNull = "VALIDATE_NON_NULL",
        ValidateNonZero = "VALIDATE_NON_ZERO",
        ValidateNonNegative = "VALIDATE_NON_NEGATIVE",
        ValidateNumeric = "VALIDATE_NUMERIC",
        NoOp = "NO_OP",
    }
}

allowed_values! {
    /// Allowed values for `ServiceNow`
    pub enum ConnectorOperatorServiceNow {
        Projection = "PROJECTION",
        Contains = "CONTAINS",
        LessThan = "LESS_THAN",
        GreaterThan = "GREATER_THAN",
        Between = "BETWEEN",
        LessThanOrEqualTo = "LESS_THAN_OR_EQUAL_TO",
        GreaterThanOrEqualTo = "GREATER_THAN_OR_EQUAL_TO",
        EqualTo = "EQUAL_TO",
        NotEqualTo = "NOT_EQUAL_TO",
        Addition = "ADDITION",
        Multiplication = "MULTIPLICATION",
        Division = "DIVISION",
        Subtraction = "SUBTRACTION",
        MaskAll = "MASK_ALL",
        MaskFirstN = "MASK_FIRST_N",
        MaskLastN = "MASK_LAST_N",
        ValidateNonNull = "VALIDATE_NON_NULL",
        ValidateNonZero = "VALIDATE_NON_ZERO",
        ValidateNonNegative = "VALIDATE_NON_NEGATIVE",
        ValidateNumeric = "VALIDATE_NUMERIC",
        NoOp = "NO_OP",
    }
}

allowed_values! {
    /// Allowed values for `Slack`
    pub enum ConnectorOperatorSlack {
        Projection = "PROJECTION",
        LessThan = "LESS_THAN",
        GreaterThan = "GREATER_THAN",
        Between = "BETWEEN",
        LessThanOrEqualTo = "LESS_THAN_OR_EQUAL_TO",
        GreaterThanOrEqualTo = "GREATER_THAN_OR_EQUAL_TO",
        EqualTo = "EQUAL_TO",
        Addition = "ADDITION",
        Multiplication = "MULTIPLICATION",
        Division = "DIVISION",
        Subtraction = "SUBTRACTION",
        MaskAll = "MASK_ALL",
        MaskFirstN = "MASK_FIRST_N",
        MaskLastN = "MASK_LAST_N",
        ValidateNonNull = "VALIDATE_NON_NULL",
        ValidateNonZero = "VALIDATE_NON_ZERO",
        ValidateNonNegative = "VALIDATE_NON_NEGATIVE",
        ValidateNumeric = "VALIDATE_NUMERIC",
        NoOp = "NO_OP",
    }
}

allowed_values! {
    /// Allowed values for `Zendesk`
    pub enum ConnectorOperatorZendesk {
        Projection = "PROJECTION",
        GreaterThan = "GREATER_THAN",
        Addition = "ADDITION",
        Multiplication = "MULTIPLICATION",
        Division = "DIVISION",
        Subtraction = "SUBTRACTION",
        MaskAll = "MASK_ALL",
        MaskFirstN = "MASK_FIRST_N",
        MaskLastN = "MASK_LAST_N",
        ValidateNonNull = "VALIDATE_NON_NULL",
        ValidateNonZero = "VALIDATE_NON_ZERO",
        ValidateNonNegative = "VALIDATE_NON_NEGATIVE",
        ValidateNumeric = "VALIDATE_NUMERIC",
        NoOp = "NO_OP",
    }
}

allowed_values! {
    /// Allowed values for `Key`
    pub enum TaskPropertiesObjectKey {
        Value = "VALUE",
        Values = "VALUES",
        DataType = "DATA_TYPE",
        UpperBound = "UPPER_BOUND",
        LowerBound = "LOWER_BOUND",
        SourceDataType = "SOURCE_DATA_TYPE",
        DestinationDataType = "DESTINATION_DATA_TYPE",
        ValidationAction = "VALIDATION_ACTION",
        MaskValue = "MASK_VALUE",
        MaskLength = "MASK_LENGTH",
        TruncateLength = "TRUNCATE_LENGTH",
        MathOperationFieldsOrder = "MATH_OPERATION_FIELDS_ORDER",
        ConcatFormat = "CONCAT_FORMAT",
        SubfieldCategoryMap = "SUBFIELD_CATEGORY_MAP",
        ExcludeSourceFieldsList = "EXCLUDE_SOURCE_FIELDS_LIST",
        IncludeNewFields = "INCLUDE_NEW_FIELDS",
        OrderedPartitionKeysList = "ORDERED_PARTITION_KEYS_LIST",
    }
}

allowed_values! {
    /// Allowed values for `TriggerType`
    pub enum TriggerConfigTriggerType {
        Scheduled = "Scheduled",
        Event = "Event",
        OnDemand = "OnDemand",
    }
}

allowed_values! {
    /// Allowed values for `DataPullMode`
    pub enum ScheduledTriggerPropertiesDataPullMode {
        Incremental = "Incremental",
        Complete = "Complete",
    }
}

/// `AWS::AppFlow::Flow`
///
/// A flow that transfers data between a source and one or more destinations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Flow {
    /// A user-entered description of the flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,
    /// The configuration that controls how Amazon AppFlow places data in the destination connector.
    pub destination_flow_config_list: Vec<DestinationFlowConfig>,
    /// The specified name of the flow.
    pub flow_name: Value<String>,
    /// Sets the status of the flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_status: Option<Value<FlowFlowStatus>>,
    /// The ARN of the AWS Key Management Service key you provide for encryption.
    #[serde(rename = "KMSArn", default, skip_serializing_if = "Option::is_none")]
    pub kms_arn: Option<Value<String>>,
    /// Specifies the configuration that Amazon AppFlow uses when it catalogs your data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_catalog_config: Option<MetadataCatalogConfig>,
    /// Contains information about the configuration of the source connector used in the flow.
    pub source_flow_config: SourceFlowConfig,
    /// The tags used to organize, track, or control access for your flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// A list of tasks that Amazon AppFlow performs while transferring the data in the flow run.
    pub tasks: Vec<Task>,
    /// The trigger settings that determine how and when Amazon AppFlow runs the specified flow.
    pub trigger_config: TriggerConfig,
}

impl ResourceProperties for Flow {
    const TYPE: &'static str = "AWS::AppFlow::Flow";

    fn schema() -> &'static ResourceSchema {
        &FLOW_SCHEMA
    }
}

pub const FLOW_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::AppFlow::Flow",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-appflow-flow.html",
    properties: &[
        PropertySchema::new("Description", PropertyType::String),
        PropertySchema::new(
            "DestinationFlowConfigList",
            PropertyType::List(&PropertyType::Struct(&DESTINATION_FLOW_CONFIG_SCHEMA)),
        )
        .required(),
        PropertySchema::new("FlowName", PropertyType::String)
            .required()
            .immutable(),
        PropertySchema::new("FlowStatus", PropertyType::Enum(&FlowFlowStatus::SCHEMA)),
        PropertySchema::new("KMSArn", PropertyType::String)
            .immutable(),
        PropertySchema::new(
            "MetadataCatalogConfig",
            PropertyType::Struct(&METADATA_CATALOG_CONFIG_SCHEMA),
        ),
        PropertySchema::new(
            "SourceFlowConfig",
            PropertyType::Struct(&SOURCE_FLOW_CONFIG_SCHEMA),
        )
        .required(),
        PropertySchema::new(
            "Tags",
            PropertyType::List(&PropertyType::Struct(&TAG_SCHEMA)),
        ),
        PropertySchema::new(
            "Tasks",
            PropertyType::List(&PropertyType::Struct(&TASK_SCHEMA)),
        )
        .required(),
        PropertySchema::new(
            "TriggerConfig",
            PropertyType::Struct(&TRIGGER_CONFIG_SCHEMA),
        )
        .required(),
    ],
    attributes: &["FlowArn"],
};

/// Contains information about the configuration of the source connector used in the flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SourceFlowConfig {
    /// The API version that the connector uses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<Value<String>>,
    /// The name of the connector profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_profile_name: Option<Value<String>>,
    /// The type of source connector, such as Salesforce, Amplitude, and so on.
    pub connector_type: Value<ConnectorType>,
    /// Defines the configuration for a scheduled incremental data pull.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incremental_pull_config: Option<IncrementalPullConfig>,
    /// Specifies the information that is required to query a particular source connector.
    pub source_connector_properties: SourceConnectorProperties,
}

pub const SOURCE_FLOW_CONFIG_SCHEMA: StructSchema = StructSchema {
    name: "SourceFlowConfig",
    properties: &[
        PropertySchema::new("ApiVersion", PropertyType::String),
        PropertySchema::new("ConnectorProfileName", PropertyType::String),
        PropertySchema::new("ConnectorType", PropertyType::Enum(&ConnectorType::SCHEMA))
            .required(),
        PropertySchema::new(
            "IncrementalPullConfig",
            PropertyType::Struct(&INCREMENTAL_PULL_CONFIG_SCHEMA),
        ),
        PropertySchema::new(
            "SourceConnectorProperties",
            PropertyType::Struct(&SOURCE_CONNECTOR_PROPERTIES_SCHEMA),
        )
        .required(),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct IncrementalPullConfig {
    /// A field that specifies the date time or timestamp field as the criteria to use when
    /// importing incremental records from the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime_type_field_name: Option<Value<String>>,
}

pub const INCREMENTAL_PULL_CONFIG_SCHEMA: StructSchema = StructSchema {
    name: "IncrementalPullConfig",
    properties: &[
        PropertySchema::new("DatetimeTypeFieldName", PropertyType::String),
    ],
};

/// Specifies the information that is required to query a particular connector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SourceConnectorProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_connector: Option<CustomConnectorSourceProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datadog: Option<DatadogSourceProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketo: Option<MarketoSourceProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3: Option<S3SourceProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salesforce: Option<SalesforceSourceProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_now: Option<ServiceNowSourceProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack: Option<SlackSourceProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zendesk: Option<ZendeskSourceProperties>,
}

pub const SOURCE_CONNECTOR_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "SourceConnectorProperties",
    properties: &[
        PropertySchema::new(
            "CustomConnector",
            PropertyType::Struct(&CUSTOM_CONNECTOR_SOURCE_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "Datadog",
            PropertyType::Struct(&DATADOG_SOURCE_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "Marketo",
            PropertyType::Struct(&MARKETO_SOURCE_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new("S3", PropertyType::Struct(&S3_SOURCE_PROPERTIES_SCHEMA)),
        PropertySchema::new(
            "Salesforce",
            PropertyType::Struct(&SALESFORCE_SOURCE_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "ServiceNow",
            PropertyType::Struct(&SERVICE_NOW_SOURCE_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "Slack",
            PropertyType::Struct(&SLACK_SOURCE_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "Zendesk",
            PropertyType::Struct(&ZENDESK_SOURCE_PROPERTIES_SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CustomConnectorSourceProperties {
    /// Custom properties that are required to use the custom connector as a source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<Map<String>>,
    /// The API of the connector application that Amazon AppFlow uses to transfer your data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_transfer_api: Option<DataTransferApi>,
    /// The entity specified in the custom connector as a source in the flow.
    pub entity_name: Value<String>,
}

pub const CUSTOM_CONNECTOR_SOURCE_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "CustomConnectorSourceProperties",
    properties: &[
        PropertySchema::new("CustomProperties", PropertyType::Map(&PropertyType::String)),
        PropertySchema::new(
            "DataTransferApi",
            PropertyType::Struct(&DATA_TRANSFER_API_SCHEMA),
        ),
        PropertySchema::new("EntityName", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DataTransferApi {
    /// The name of the connector application API.
    pub name: Value<String>,
    /// You can specify one of the following types.
    #[serde(rename = "Type")]
    pub type_: Value<DataTransferApiType>,
}

pub const DATA_TRANSFER_API_SCHEMA: StructSchema = StructSchema {
    name: "DataTransferApi",
    properties: &[
        PropertySchema::new("Name", PropertyType::String).required(),
        PropertySchema::new("Type", PropertyType::Enum(&DataTransferApiType::SCHEMA))
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DatadogSourceProperties {
    /// The object specified in the Datadog flow source.
    pub object: Value<String>,
}

pub const DATADOG_SOURCE_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "DatadogSourceProperties",
    properties: &[
        PropertySchema::new("Object", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct MarketoSourceProperties {
    /// The object specified in the Marketo flow source.
    pub object: Value<String>,
}

pub const MARKETO_SOURCE_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "MarketoSourceProperties",
    properties: &[
        PropertySchema::new("Object", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct S3SourceProperties {
    /// The Amazon S3 bucket name where the source files are stored.
    pub bucket_name: Value<String>,
    /// The object key for the Amazon S3 bucket in which the source files are stored.
    pub bucket_prefix: Value<String>,
    /// When you use Amazon S3 as the source, the configuration format that you provide the flow
    /// input data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_input_format_config: Option<S3InputFormatConfig>,
}

pub const S3_SOURCE_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "S3SourceProperties",
    properties: &[
        PropertySchema::new("BucketName", PropertyType::String)
            .required(),
        PropertySchema::new("BucketPrefix", PropertyType::String)
            .required(),
        PropertySchema::new(
            "S3InputFormatConfig",
            PropertyType::Struct(&S3_INPUT_FORMAT_CONFIG_SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct S3InputFormatConfig {
    /// The file type that Amazon AppFlow gets from your Amazon S3 bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_input_file_type: Option<Value<S3InputFormatConfigS3InputFileType>>,
}

pub const S3_INPUT_FORMAT_CONFIG_SCHEMA: StructSchema = StructSchema {
    name: "S3InputFormatConfig",
    properties: &[
        PropertySchema::new(
            "S3InputFileType",
            PropertyType::Enum(&S3InputFormatConfigS3InputFileType::SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SalesforceSourceProperties {
    /// Specifies which Salesforce API is used by Amazon AppFlow when your flow transfers data from
    /// Salesforce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_transfer_api: Option<Value<SalesforceDataTransferApi>>,
    /// The flag that enables dynamic fetching of new (recently added) fields in the Salesforce
    /// objects while running a flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_dynamic_field_update: Option<Value<bool>>,
    /// Indicates whether Amazon AppFlow includes deleted files in the flow run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_deleted_records: Option<Value<bool>>,
    /// The object specified in the Salesforce flow source.
    pub object: Value<String>,
}

pub const SALESFORCE_SOURCE_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "SalesforceSourceProperties",
    properties: &[
        PropertySchema::new(
            "DataTransferApi",
            PropertyType::Enum(&SalesforceDataTransferApi::SCHEMA),
        ),
        PropertySchema::new("EnableDynamicFieldUpdate", PropertyType::Boolean),
        PropertySchema::new("IncludeDeletedRecords", PropertyType::Boolean),
        PropertySchema::new("Object", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ServiceNowSourceProperties {
    /// The object specified in the ServiceNow flow source.
    pub object: Value<String>,
}

pub const SERVICE_NOW_SOURCE_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "ServiceNowSourceProperties",
    properties: &[
        PropertySchema::new("Object", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SlackSourceProperties {
    /// The object specified in the Slack flow source.
    pub object: Value<String>,
}

pub const SLACK_SOURCE_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "SlackSourceProperties",
    properties: &[
        PropertySchema::new("Object", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ZendeskSourceProperties {
    /// The object specified in the Zendesk flow source.
    pub object: Value<String>,
}

pub const ZENDESK_SOURCE_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "ZendeskSourceProperties",
    properties: &[
        PropertySchema::new("Object", PropertyType::String)
            .required(),
    ],
};

/// Contains information about the configuration of destination connectors present in the flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DestinationFlowConfig {
    /// The API version that the destination connector uses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<Value<String>>,
    /// The name of the connector profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_profile_name: Option<Value<String>>,
    /// The type of destination connector, such as Salesforce, Amazon S3, and so on.
    pub connector_type: Value<ConnectorType>,
    /// This stores the information that is required to query a particular connector.
    pub destination_connector_properties: DestinationConnectorProperties,
}

pub const DESTINATION_FLOW_CONFIG_SCHEMA: StructSchema = StructSchema {
    name: "DestinationFlowConfig",
    properties: &[
        PropertySchema::new("ApiVersion", PropertyType::String),
        PropertySchema::new("ConnectorProfileName", PropertyType::String),
        PropertySchema::new("ConnectorType", PropertyType::Enum(&ConnectorType::SCHEMA))
            .required(),
        PropertySchema::new(
            "DestinationConnectorProperties",
            PropertyType::Struct(&DESTINATION_CONNECTOR_PROPERTIES_SCHEMA),
        )
        .required(),
    ],
};

/// This stores the information that is required to query a particular connector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DestinationConnectorProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_connector: Option<CustomConnectorDestinationProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_bridge: Option<EventBridgeDestinationProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redshift: Option<RedshiftDestinationProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3: Option<S3DestinationProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salesforce: Option<SalesforceDestinationProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snowflake: Option<SnowflakeDestinationProperties>,
}

pub const DESTINATION_CONNECTOR_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "DestinationConnectorProperties",
    properties: &[
        PropertySchema::new(
            "CustomConnector",
            PropertyType::Struct(&CUSTOM_CONNECTOR_DESTINATION_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "EventBridge",
            PropertyType::Struct(&EVENT_BRIDGE_DESTINATION_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "Redshift",
            PropertyType::Struct(&REDSHIFT_DESTINATION_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "S3",
            PropertyType::Struct(&S3_DESTINATION_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "Salesforce",
            PropertyType::Struct(&SALESFORCE_DESTINATION_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "Snowflake",
            PropertyType::Struct(&SNOWFLAKE_DESTINATION_PROPERTIES_SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CustomConnectorDestinationProperties {
    /// The custom properties that are specific to the connector when it's used as a destination in
    /// the flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<Map<String>>,
    /// The entity specified in the custom connector as a destination in the flow.
    pub entity_name: Value<String>,
    /// The settings that determine how Amazon AppFlow handles an error when placing data in the
    /// destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_handling_config: Option<ErrorHandlingConfig>,
    /// The name of the field that Amazon AppFlow uses as an ID when performing a write operation
    /// such as update, delete, or upsert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_field_names: Option<List<String>>,
    /// Specifies the type of write operation to be performed in the custom connector when it's used
    /// as destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_operation_type: Option<Value<WriteOperationType>>,
}

pub const CUSTOM_CONNECTOR_DESTINATION_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "CustomConnectorDestinationProperties",
    properties: &[
        PropertySchema::new("CustomProperties", PropertyType::Map(&PropertyType::String)),
        PropertySchema::new("EntityName", PropertyType::String)
            .required(),
        PropertySchema::new(
            "ErrorHandlingConfig",
            PropertyType::Struct(&ERROR_HANDLING_CONFIG_SCHEMA),
        ),
        PropertySchema::new("IdFieldNames", PropertyType::List(&PropertyType::String)),
        PropertySchema::new(
            "WriteOperationType",
            PropertyType::Enum(&WriteOperationType::SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct EventBridgeDestinationProperties {
    /// The settings that determine how Amazon AppFlow handles an error when placing data in the
    /// destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_handling_config: Option<ErrorHandlingConfig>,
    /// The object specified in the Amazon EventBridge flow destination.
    pub object: Value<String>,
}

pub const EVENT_BRIDGE_DESTINATION_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "EventBridgeDestinationProperties",
    properties: &[
        PropertySchema::new(
            "ErrorHandlingConfig",
            PropertyType::Struct(&ERROR_HANDLING_CONFIG_SCHEMA),
        ),
        PropertySchema::new("Object", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct RedshiftDestinationProperties {
    /// The object key for the bucket in which Amazon AppFlow places the destination files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_prefix: Option<Value<String>>,
    /// The settings that determine how Amazon AppFlow handles an error when placing data in the
    /// destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_handling_config: Option<ErrorHandlingConfig>,
    /// The intermediate bucket that Amazon AppFlow uses when moving data into Amazon Redshift.
    pub intermediate_bucket_name: Value<String>,
    /// The object specified in the Amazon Redshift flow destination.
    pub object: Value<String>,
}

pub const REDSHIFT_DESTINATION_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "RedshiftDestinationProperties",
    properties: &[
        PropertySchema::new("BucketPrefix", PropertyType::String),
        PropertySchema::new(
            "ErrorHandlingConfig",
            PropertyType::Struct(&ERROR_HANDLING_CONFIG_SCHEMA),
        ),
        PropertySchema::new("IntermediateBucketName", PropertyType::String)
            .required(),
        PropertySchema::new("Object", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct S3DestinationProperties {
    /// The Amazon S3 bucket name in which Amazon AppFlow places the transferred data.
    pub bucket_name: Value<String>,
    /// The object key for the destination bucket in which Amazon AppFlow places the files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_prefix: Option<Value<String>>,
    /// The configuration that determines how Amazon AppFlow should format the flow output data when
    /// Amazon S3 is used as the destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_output_format_config: Option<S3OutputFormatConfig>,
}

pub const S3_DESTINATION_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "S3DestinationProperties",
    properties: &[
        PropertySchema::new("BucketName", PropertyType::String)
            .required(),
        PropertySchema::new("BucketPrefix", PropertyType::String),
        PropertySchema::new(
            "S3OutputFormatConfig",
            PropertyType::Struct(&S3_OUTPUT_FORMAT_CONFIG_SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct S3OutputFormatConfig {
    /// The aggregation settings that you can use to customize the output format of your flow data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation_config: Option<AggregationConfig>,
    /// Indicates the file type that Amazon AppFlow places in the Amazon S3 bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<Value<S3OutputFormatConfigFileType>>,
    /// Determines the prefix that Amazon AppFlow applies to the folder name in the Amazon S3
    /// bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix_config: Option<PrefixConfig>,
    /// If your file output format is Parquet, use this parameter to set whether Amazon AppFlow
    /// preserves the data types in your source data when it writes the output to Amazon S3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_source_data_typing: Option<Value<bool>>,
}

pub const S3_OUTPUT_FORMAT_CONFIG_SCHEMA: StructSchema = StructSchema {
    name: "S3OutputFormatConfig",
    properties: &[
        PropertySchema::new(
            "AggregationConfig",
            PropertyType::Struct(&AGGREGATION_CONFIG_SCHEMA),
        ),
        PropertySchema::new(
            "FileType",
            PropertyType::Enum(&S3OutputFormatConfigFileType::SCHEMA),
        ),
        PropertySchema::new("PrefixConfig", PropertyType::Struct(&PREFIX_CONFIG_SCHEMA)),
        PropertySchema::new("PreserveSourceDataTyping", PropertyType::Boolean),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AggregationConfig {
    /// Specifies whether Amazon AppFlow aggregates the flow records into a single file, or leave
    /// them unaggregated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation_type: Option<Value<AggregationConfigAggregationType>>,
    /// The desired file size, in MB, for each output file that Amazon AppFlow writes to the flow
    /// destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_file_size: Option<Value<i64>>,
}

pub const AGGREGATION_CONFIG_SCHEMA: StructSchema = StructSchema {
    name: "AggregationConfig",
    properties: &[
        PropertySchema::new(
            "AggregationType",
            PropertyType::Enum(&AggregationConfigAggregationType::SCHEMA),
        ),
        PropertySchema::new("TargetFileSize", PropertyType::Integer),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct PrefixConfig {
    /// Specifies whether the destination file path includes either or both of the following
    /// elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_prefix_hierarchy: Option<List<PrefixConfigPathPrefixHierarchyItem>>,
    /// Determines the level of granularity for the date and time that's included in the prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix_format: Option<Value<PrefixConfigPrefixFormat>>,
    /// Determines the format of the prefix, and whether it applies to the file name, file path, or
    /// both.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix_type: Option<Value<PrefixConfigPrefixType>>,
}

pub const PREFIX_CONFIG_SCHEMA: StructSchema = StructSchema {
    name: "PrefixConfig",
    properties: &[
        PropertySchema::new(
            "PathPrefixHierarchy",
            PropertyType::List(&PropertyType::Enum(&PrefixConfigPathPrefixHierarchyItem::SCHEMA)),
        ),
        PropertySchema::new(
            "PrefixFormat",
            PropertyType::Enum(&PrefixConfigPrefixFormat::SCHEMA),
        ),
        PropertySchema::new(
            "PrefixType",
            PropertyType::Enum(&PrefixConfigPrefixType::SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SalesforceDestinationProperties {
    /// Specifies which Salesforce API is used by Amazon AppFlow when your flow transfers data to
    /// Salesforce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_transfer_api: Option<Value<SalesforceDataTransferApi>>,
    /// The settings that determine how Amazon AppFlow handles an error when placing data in the
    /// destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_handling_config: Option<ErrorHandlingConfig>,
    /// The name of the field that Amazon AppFlow uses as an ID when performing a write operation
    /// such as update or delete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_field_names: Option<List<String>>,
    /// The object specified in the Salesforce flow destination.
    pub object: Value<String>,
    /// This specifies the type of write operation to be performed in Salesforce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_operation_type: Option<Value<WriteOperationType>>,
}

pub const SALESFORCE_DESTINATION_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "SalesforceDestinationProperties",
    properties: &[
        PropertySchema::new(
            "DataTransferApi",
            PropertyType::Enum(&SalesforceDataTransferApi::SCHEMA),
        ),
        PropertySchema::new(
            "ErrorHandlingConfig",
            PropertyType::Struct(&ERROR_HANDLING_CONFIG_SCHEMA),
        ),
        PropertySchema::new("IdFieldNames", PropertyType::List(&PropertyType::String)),
        PropertySchema::new("Object", PropertyType::String)
            .required(),
        PropertySchema::new(
            "WriteOperationType",
            PropertyType::Enum(&WriteOperationType::SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SnowflakeDestinationProperties {
    /// The object key for the destination bucket in which Amazon AppFlow places the files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_prefix: Option<Value<String>>,
    /// The settings that determine how Amazon AppFlow handles an error when placing data in the
    /// destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_handling_config: Option<ErrorHandlingConfig>,
    /// The intermediate bucket that Amazon AppFlow uses when moving data into Snowflake.
    pub intermediate_bucket_name: Value<String>,
    /// The object specified in the Snowflake flow destination.
    pub object: Value<String>,
}

pub const SNOWFLAKE_DESTINATION_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "SnowflakeDestinationProperties",
    properties: &[
        PropertySchema::new("BucketPrefix", PropertyType::String),
        PropertySchema::new(
            "ErrorHandlingConfig",
            PropertyType::Struct(&ERROR_HANDLING_CONFIG_SCHEMA),
        ),
        PropertySchema::new("IntermediateBucketName", PropertyType::String)
            .required(),
        PropertySchema::new("Object", PropertyType::String)
            .required(),
    ],
};

/// The settings that determine how Amazon AppFlow handles an error when placing data in the
/// destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ErrorHandlingConfig {
    /// Specifies the name of the Amazon S3 bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<Value<String>>,
    /// Specifies the Amazon S3 bucket prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_prefix: Option<Value<String>>,
    /// Specifies if the flow should fail after the first instance of a failure when attempting to
    /// place data in the destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on_first_error: Option<Value<bool>>,
}

pub const ERROR_HANDLING_CONFIG_SCHEMA: StructSchema = StructSchema {
    name: "ErrorHandlingConfig",
    properties: &[
        PropertySchema::new("BucketName", PropertyType::String),
        PropertySchema::new("BucketPrefix", PropertyType::String),
        PropertySchema::new("FailOnFirstError", PropertyType::Boolean),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct MetadataCatalogConfig {
    /// Specifies the configuration that Amazon AppFlow uses when it catalogs your data with the AWS
    /// Glue Data Catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glue_data_catalog: Option<GlueDataCatalog>,
}

pub const METADATA_CATALOG_CONFIG_SCHEMA: StructSchema = StructSchema {
    name: "MetadataCatalogConfig",
    properties: &[
        PropertySchema::new(
            "GlueDataCatalog",
            PropertyType::Struct(&GLUE_DATA_CATALOG_SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct GlueDataCatalog {
    /// The name of an existing Glue database to store the metadata tables that Amazon AppFlow
    /// creates.
    pub database_name: Value<String>,
    /// The ARN of an IAM role that grants Amazon AppFlow the permissions it needs to create Data
    /// Catalog tables.
    pub role_arn: Value<String>,
    /// A naming prefix for each Data Catalog table that Amazon AppFlow creates.
    pub table_prefix: Value<String>,
}

pub const GLUE_DATA_CATALOG_SCHEMA: StructSchema = StructSchema {
    name: "GlueDataCatalog",
    properties: &[
        PropertySchema::new("DatabaseName", PropertyType::String)
            .required(),
        PropertySchema::new("RoleArn", PropertyType::String)
            .required(),
        PropertySchema::new("TablePrefix", PropertyType::String)
            .required(),
    ],
};

/// A class for modeling different type of tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Task {
    /// The operation to be performed on the provided source fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_operator: Option<ConnectorOperator>,
    /// A field in a destination connector, or a field value against which Amazon AppFlow validates
    /// a source field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_field: Option<Value<String>>,
    /// The source fields to which a particular task is applied.
    pub source_fields: List<String>,
    /// A map used to store task-related information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_properties: Option<Vec<TaskPropertiesObject>>,
    /// Specifies the particular task implementation that Amazon AppFlow performs.
    pub task_type: Value<TaskTaskType>,
}

pub const TASK_SCHEMA: StructSchema = StructSchema {
    name: "Task",
    properties: &[
        PropertySchema::new(
            "ConnectorOperator",
            PropertyType::Struct(&CONNECTOR_OPERATOR_SCHEMA),
        ),
        PropertySchema::new("DestinationField", PropertyType::String),
        PropertySchema::new("SourceFields", PropertyType::List(&PropertyType::String))
            .required(),
        PropertySchema::new(
            "TaskProperties",
            PropertyType::List(&PropertyType::Struct(&TASK_PROPERTIES_OBJECT_SCHEMA)),
        ),
        PropertySchema::new("TaskType", PropertyType::Enum(&TaskTaskType::SCHEMA))
            .required(),
    ],
};

/// The operation to be performed on the provided source fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ConnectorOperator {
    /// Operators supported by the custom connector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_connector: Option<Value<ConnectorOperatorCustomConnector>>,
    /// The operation to be performed on the provided Datadog source fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datadog: Option<Value<ConnectorOperatorDatadog>>,
    /// The operation to be performed on the provided Marketo source fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketo: Option<Value<ConnectorOperatorMarketo>>,
    /// The operation to be performed on the provided Amazon S3 source fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3: Option<Value<ConnectorOperatorS3>>,
    /// The operation to be performed on the provided Salesforce source fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salesforce: Option<Value<ConnectorOperatorSalesforce>>,
    /// The operation to be performed on the provided ServiceNow source fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_now: Option<Value<ConnectorOperatorServiceNow>>,
    /// The operation to be performed on the provided Slack source fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack: Option<Value<ConnectorOperatorSlack>>,
    /// The operation to be performed on the provided Zendesk source fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zendesk: Option<Value<ConnectorOperatorZendesk>>,
}

pub const CONNECTOR_OPERATOR_SCHEMA: StructSchema = StructSchema {
    name: "ConnectorOperator",
    properties: &[
        PropertySchema::new(
            "CustomConnector",
            PropertyType::Enum(&ConnectorOperatorCustomConnector::SCHEMA),
        ),
        PropertySchema::new(
            "Datadog",
            PropertyType::Enum(&ConnectorOperatorDatadog::SCHEMA),
        ),
        PropertySchema::new(
            "Marketo",
            PropertyType::Enum(&ConnectorOperatorMarketo::SCHEMA),
        ),
        PropertySchema::new("S3", PropertyType::Enum(&ConnectorOperatorS3::SCHEMA)),
        PropertySchema::new(
            "Salesforce",
            PropertyType::Enum(&ConnectorOperatorSalesforce::SCHEMA),
        ),
        PropertySchema::new(
            "ServiceNow",
            PropertyType::Enum(&ConnectorOperatorServiceNow::SCHEMA),
        ),
        PropertySchema::new("Slack", PropertyType::Enum(&ConnectorOperatorSlack::SCHEMA)),
        PropertySchema::new(
            "Zendesk",
            PropertyType::Enum(&ConnectorOperatorZendesk::SCHEMA),
        ),
    ],
};

/// A map used to store task-related information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct TaskPropertiesObject {
    /// The task property key.
    pub key: Value<TaskPropertiesObjectKey>,
    /// The task property value.
    pub value: Value<String>,
}

pub const TASK_PROPERTIES_OBJECT_SCHEMA: StructSchema = StructSchema {
    name: "TaskPropertiesObject",
    properties: &[
        PropertySchema::new("Key", PropertyType::Enum(&TaskPropertiesObjectKey::SCHEMA))
            .required(),
        PropertySchema::new("Value", PropertyType::String)
            .required(),
    ],
};

/// The trigger settings that determine how and when Amazon AppFlow runs the specified flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct TriggerConfig {
    /// Specifies the configuration details of a schedule-triggered flow as defined by the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_properties: Option<ScheduledTriggerProperties>,
    /// Specifies the type of flow trigger.
    pub trigger_type: Value<TriggerConfigTriggerType>,
}

pub const TRIGGER_CONFIG_SCHEMA: StructSchema = StructSchema {
    name: "TriggerConfig",
    properties: &[
        PropertySchema::new(
            "TriggerProperties",
            PropertyType::Struct(&SCHEDULED_TRIGGER_PROPERTIES_SCHEMA),
        ),
        PropertySchema::new(
            "TriggerType",
            PropertyType::Enum(&TriggerConfigTriggerType::SCHEMA),
        )
        .required(),
    ],
};

/// Specifies the configuration details of a schedule-triggered flow as defined by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ScheduledTriggerProperties {
    /// Specifies whether a scheduled flow has an incremental data transfer or a complete data
    /// transfer for each flow run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_pull_mode: Option<Value<ScheduledTriggerPropertiesDataPullMode>>,
    /// Specifies the date range for the records to import from the connector in the first flow run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_execution_from: Option<Value<f64>>,
    /// Defines how many times a scheduled flow fails consecutively before Amazon AppFlow
    /// deactivates it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_error_deactivation_threshold: Option<Value<i64>>,
    /// The time at which the scheduled flow ends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_end_time: Option<Value<f64>>,
    /// The scheduling expression that determines the rate at which the schedule will run, for
    /// example rate(5minutes).
    pub schedule_expression: Value<String>,
    /// Specifies the optional offset that is added to the time interval for a schedule-triggered
    /// flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_offset: Option<Value<i64>>,
    /// The time at which the scheduled flow starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_start_time: Option<Value<f64>>,
    /// Specifies the time zone used when referring to the date and time of a scheduled-triggered
    /// flow, such as America/New_York.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<Value<String>>,
}

pub const SCHEDULED_TRIGGER_PROPERTIES_SCHEMA: StructSchema = StructSchema {
    name: "ScheduledTriggerProperties",
    properties: &[
        PropertySchema::new(
            "DataPullMode",
            PropertyType::Enum(&ScheduledTriggerPropertiesDataPullMode::SCHEMA),
        ),
        PropertySchema::new("FirstExecutionFrom", PropertyType::Double),
        PropertySchema::new("FlowErrorDeactivationThreshold", PropertyType::Integer),
        PropertySchema::new("ScheduleEndTime", PropertyType::Double),
        PropertySchema::new("ScheduleExpression", PropertyType::String)
            .required(),
        PropertySchema::new("ScheduleOffset", PropertyType::Integer),
        PropertySchema::new("ScheduleStartTime", PropertyType::Double),
        PropertySchema::new("TimeZone", PropertyType::String),
    ],
};
