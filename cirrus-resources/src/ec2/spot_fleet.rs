//! SpotFleet resource type
//!
//! Auto-generated from CloudFormation schema: AWS::EC2::SpotFleet
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::allowed_values;
use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, StructSchema, TAG_SCHEMA};
use cirrus_core::{List, Tag, Value};
use serde::{Deserialize, Serialize};

allowed_values! {
    /// Resource types that accept tags at creation
    pub enum TagSpecificationResourceType {
        SpotFleetRequest = "spot-fleet-request",
        Instance = "instance",
        Volume = "volume",
        NetworkInterface = "network-interface",
        LaunchTemplate = "launch-template",
        Fleet = "fleet",
        SpotInstancesRequest = "spot-instances-request",
    }
}

allowed_values! {
    /// Whether a feature is included, required or excluded
    pub enum LocalStorageSupport {
        Included = "included",
        Required = "required",
        Excluded = "excluded",
    }
}

allowed_values! {
    /// Allowed values for `AllocationStrategy`
    pub enum SpotFleetRequestConfigDataAllocationStrategy {
        CapacityOptimized = "capacityOptimized",
        CapacityOptimizedPrioritized = "capacityOptimizedPrioritized",
        Diversified = "diversified",
        LowestPrice = "lowestPrice",
        PriceCapacityOptimized = "priceCapacityOptimized",
    }
}

allowed_values! {
    /// Allowed values for `ExcessCapacityTerminationPolicy`
    pub enum SpotFleetRequestConfigDataExcessCapacityTerminationPolicy {
        Default = "Default",
        NoTermination = "NoTermination",
    }
}

allowed_values! {
    /// Allowed values for `InstanceInterruptionBehavior`
    pub enum SpotFleetRequestConfigDataInstanceInterruptionBehavior {
        Hibernate = "hibernate",
        Stop = "stop",
        Terminate = "terminate",
    }
}

allowed_values! {
    /// Allowed values for `OnDemandAllocationStrategy`
    pub enum SpotFleetRequestConfigDataOnDemandAllocationStrategy {
        LowestPrice = "lowestPrice",
        Prioritized = "prioritized",
    }
}

allowed_values! {
    /// Allowed values for `TargetCapacityUnitType`
    pub enum SpotFleetRequestConfigDataTargetCapacityUnitType {
        Vcpu = "vcpu",
        MemoryMib = "memory-mib",
        Units = "units",
    }
}

allowed_values! {
    /// Allowed values for `Type`
    pub enum SpotFleetRequestConfigDataType {
        Maintain = "maintain",
        Request = "request",
    }
}

allowed_values! {
    /// Allowed values for `VolumeType`
    pub enum EbsBlockDeviceVolumeType {
        Gp2 = "gp2",
        Gp3 = "gp3",
        Io1 = "io1",
        Io2 = "io2",
        Sc1 = "sc1",
        St1 = "st1",
        Standard = "standard",
    }
}

allowed_values! {
    /// Allowed values for `Tenancy`
    pub enum SpotPlacementTenancy {
        Dedicated = "dedicated",
        Default = "default",
        Host = "host",
    }
}

allowed_values! {
    /// Allowed values for `AcceleratorManufacturers`
    pub enum InstanceRequirementsRequestAcceleratorManufacturersItem {
        AmazonWebServices = "amazon-web-services",
        Amd = "amd",
        Habana = "habana",
        Nvidia = "nvidia",
        Xilinx = "xilinx",
    }
}

allowed_values! {
    /// Allowed values for `AcceleratorNames`
    pub enum InstanceRequirementsRequestAcceleratorNamesItem {
        A100 = "a100",
        Inferentia = "inferentia",
        K520 = "k520",
        K80 = "k80",
        M60 = "m60",
        RadeonProV520 = "radeon-pro-v520",
        T4 = "t4",
        Vu9p = "vu9p",
        V100 = "v100",
        A10g = "a10g",
        H100 = "h100",
        T4g = "t4g",
    }
}

allowed_values! {
    /// Allowed values for `AcceleratorTypes`
    pub enum InstanceRequirementsRequestAcceleratorTypesItem {
        Fpga = "fpga",
        Gpu = "gpu",
        Inference = "inference",
    }
}

allowed_values! {
    /// Allowed values for `CpuManufacturers`
    pub enum InstanceRequirementsRequestCpuManufacturersItem {
        Intel = "intel",
        Amd = "amd",
        AmazonWebServices = "amazon-web-services",
        Apple = "apple",
    }
}

allowed_values! {
    /// Allowed values for `InstanceGenerations`
    pub enum InstanceRequirementsRequestInstanceGenerationsItem {
        Current = "current",
        Previous = "previous",
    }
}

allowed_values! {
    /// Allowed values for `LocalStorageTypes`
    pub enum InstanceRequirementsRequestLocalStorageTypesItem {
        Hdd = "hdd",
        Ssd = "ssd",
    }
}

allowed_values! {
    /// Allowed values for `ReplacementStrategy`
    pub enum SpotCapacityRebalanceReplacementStrategy {
        Launch = "launch",
        LaunchBeforeTerminate = "launch-before-terminate",
    }
}

/// `AWS::EC2::SpotFleet`
///
/// Specifies a Spot Fleet request. A Spot Fleet request contains the configuration information to
/// launch a fleet, or group, of instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SpotFleet {
    /// Describes the configuration of a Spot Fleet request.
    pub spot_fleet_request_config_data: SpotFleetRequestConfigData,
}

impl ResourceProperties for SpotFleet {
    const TYPE: &'static str = "AWS::EC2::SpotFleet";

    fn schema() -> &'static ResourceSchema {
        &SPOT_FLEET_SCHEMA
    }
}

pub const SPOT_FLEET_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::EC2::SpotFleet",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-spotfleet.html",
    properties: &[
        PropertySchema::new(
            "SpotFleetRequestConfigData",
            PropertyType::Struct(&SPOT_FLEET_REQUEST_CONFIG_DATA_SCHEMA),
        )
        .required()
        .immutable(),
    ],
    attributes: &["Id"],
};

/// Specifies the configuration of a Spot Fleet request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SpotFleetRequestConfigData {
    /// The strategy that determines how to allocate the target Spot Instance capacity across the
    /// Spot Instance pools specified by the Spot Fleet launch configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation_strategy: Option<Value<SpotFleetRequestConfigDataAllocationStrategy>>,
    /// Reserved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value<String>>,
    /// Indicates whether running Spot Instances should be terminated if you decrease the target
    /// capacity of the Spot Fleet request below the current size of the Spot Fleet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excess_capacity_termination_policy: Option<Value<SpotFleetRequestConfigDataExcessCapacityTerminationPolicy>>,
    /// The Amazon Resource Name (ARN) of an AWS Identity and Access Management (IAM) role that
    /// grants the Spot Fleet the permission to request, launch, terminate, and tag instances on
    /// your behalf.
    pub iam_fleet_role: Value<String>,
    /// The behavior when a Spot Instance is interrupted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_interruption_behavior: Option<Value<SpotFleetRequestConfigDataInstanceInterruptionBehavior>>,
    /// The number of Spot pools across which to allocate your target Spot capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_pools_to_use_count: Option<Value<i64>>,
    /// The launch specifications for the Spot Fleet request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_specifications: Option<Vec<SpotFleetLaunchSpecification>>,
    /// The launch template and overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_template_configs: Option<Vec<LaunchTemplateConfig>>,
    /// One or more Classic Load Balancers and target groups to attach to the Spot Fleet request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancers_config: Option<LoadBalancersConfig>,
    /// The order of the launch template overrides to use in fulfilling On-Demand capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_demand_allocation_strategy: Option<Value<SpotFleetRequestConfigDataOnDemandAllocationStrategy>>,
    /// The maximum amount per hour for On-Demand Instances that you're willing to pay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_demand_max_total_price: Option<Value<String>>,
    /// The number of On-Demand units to request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_demand_target_capacity: Option<Value<i64>>,
    /// Indicates whether Spot Fleet should replace unhealthy instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_unhealthy_instances: Option<Value<bool>>,
    /// The strategies for managing your Spot Instances that are at an elevated risk of being
    /// interrupted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot_maintenance_strategies: Option<SpotMaintenanceStrategies>,
    /// The maximum amount per hour for Spot Instances that you're willing to pay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot_max_total_price: Option<Value<String>>,
    /// The maximum price per unit hour that you are willing to pay for a Spot Instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot_price: Option<Value<String>>,
    /// The key-value pair for tagging the Spot Fleet request on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_specifications: Option<Vec<SpotFleetTagSpecification>>,
    /// The number of units to request for the Spot Fleet.
    pub target_capacity: Value<i64>,
    /// The unit for the target capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_capacity_unit_type: Option<Value<SpotFleetRequestConfigDataTargetCapacityUnitType>>,
    /// Indicates whether running Spot Instances are terminated when the Spot Fleet request expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminate_instances_with_expiration: Option<Value<bool>>,
    /// The type of request.
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<Value<SpotFleetRequestConfigDataType>>,
    /// The start date and time of the request, in UTC format (YYYY-MM-DDTHH:MM:SSZ).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<Value<String>>,
    /// The end date and time of the request, in UTC format (YYYY-MM-DDTHH:MM:SSZ).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<Value<String>>,
}

pub const SPOT_FLEET_REQUEST_CONFIG_DATA_SCHEMA: StructSchema = StructSchema {
    name: "SpotFleetRequestConfigData",
    properties: &[
        PropertySchema::new(
            "AllocationStrategy",
            PropertyType::Enum(&SpotFleetRequestConfigDataAllocationStrategy::SCHEMA),
        )
        .immutable(),
        PropertySchema::new("Context", PropertyType::String),
        PropertySchema::new(
            "ExcessCapacityTerminationPolicy",
            PropertyType::Enum(&SpotFleetRequestConfigDataExcessCapacityTerminationPolicy::SCHEMA),
        ),
        PropertySchema::new("IamFleetRole", PropertyType::String)
            .required()
            .immutable(),
        PropertySchema::new(
            "InstanceInterruptionBehavior",
            PropertyType::Enum(&SpotFleetRequestConfigDataInstanceInterruptionBehavior::SCHEMA),
        )
        .immutable(),
        PropertySchema::new("InstancePoolsToUseCount", PropertyType::Integer)
            .immutable(),
        PropertySchema::new(
            "LaunchSpecifications",
            PropertyType::List(&PropertyType::Struct(&SPOT_FLEET_LAUNCH_SPECIFICATION_SCHEMA)),
        )
        .immutable(),
        PropertySchema::new(
            "LaunchTemplateConfigs",
            PropertyType::List(&PropertyType::Struct(&LAUNCH_TEMPLATE_CONFIG_SCHEMA)),
        )
        .immutable(),
        PropertySchema::new(
            "LoadBalancersConfig",
            PropertyType::Struct(&LOAD_BALANCERS_CONFIG_SCHEMA),
        )
        .immutable(),
        PropertySchema::new(
            "OnDemandAllocationStrategy",
            PropertyType::Enum(&SpotFleetRequestConfigDataOnDemandAllocationStrategy::SCHEMA),
        )
        .immutable(),
        PropertySchema::new("OnDemandMaxTotalPrice", PropertyType::String)
            .immutable(),
        PropertySchema::new("OnDemandTargetCapacity", PropertyType::Integer),
        PropertySchema::new("ReplaceUnhealthyInstances", PropertyType::Boolean)
            .immutable(),
        PropertySchema::new(
            "SpotMaintenanceStrategies",
            PropertyType::Struct(&SPOT_MAINTENANCE_STRATEGIES_SCHEMA),
        )
        .immutable(),
        PropertySchema::new("SpotMaxTotalPrice", PropertyType::String)
            .immutable(),
        PropertySchema::new("SpotPrice", PropertyType::String)
            .immutable(),
        PropertySchema::new(
            "TagSpecifications",
            PropertyType::List(&PropertyType::Struct(&SPOT_FLEET_TAG_SPECIFICATION_SCHEMA)),
        )
        .immutable(),
        PropertySchema::new("TargetCapacity", PropertyType::Integer)
            .required(),
        PropertySchema::new(
            "TargetCapacityUnitType",
            PropertyType::Enum(&SpotFleetRequestConfigDataTargetCapacityUnitType::SCHEMA),
        )
        .immutable(),
        PropertySchema::new("TerminateInstancesWithExpiration", PropertyType::Boolean)
            .immutable(),
        PropertySchema::new(
            "Type",
            PropertyType::Enum(&SpotFleetRequestConfigDataType::SCHEMA),
        )
        .immutable(),
        PropertySchema::new("ValidFrom", PropertyType::String)
            .immutable(),
        PropertySchema::new("ValidUntil", PropertyType::String)
            .immutable(),
    ],
};

/// Specifies the launch specification for one instance type in a Spot Fleet request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SpotFleetLaunchSpecification {
    /// One or more block devices that are mapped to the Spot Instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_device_mappings: Option<Vec<BlockDeviceMapping>>,
    /// Indicates whether the instances are optimized for EBS I/O.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<Value<bool>>,
    /// The IAM instance profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iam_instance_profile: Option<IamInstanceProfileSpecification>,
    /// The ID of the AMI.
    pub image_id: Value<String>,
    /// The attributes for the instance types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_requirements: Option<InstanceRequirementsRequest>,
    /// The instance type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<Value<String>>,
    /// The ID of the kernel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel_id: Option<Value<String>>,
    /// The name of the key pair.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_name: Option<Value<String>>,
    /// Enable or disable monitoring for the instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<SpotFleetMonitoring>,
    /// The network interfaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_interfaces: Option<Vec<InstanceNetworkInterfaceSpecification>>,
    /// The placement information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<SpotPlacement>,
    /// The ID of the RAM disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ramdisk_id: Option<Value<String>>,
    /// The security groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<GroupIdentifier>>,
    /// The maximum price per unit hour that you are willing to pay for a Spot Instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot_price: Option<Value<String>>,
    /// The IDs of the subnets in which to launch the instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<Value<String>>,
    /// The tags to apply during creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_specifications: Option<Vec<SpotFleetTagSpecification>>,
    /// The base64-encoded user data that instances use when starting up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<Value<String>>,
    /// The number of units provided by the specified instance type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weighted_capacity: Option<Value<f64>>,
}

pub const SPOT_FLEET_LAUNCH_SPECIFICATION_SCHEMA: StructSchema = StructSchema {
    name: "SpotFleetLaunchSpecification",
    properties: &[
        PropertySchema::new(
            "BlockDeviceMappings",
            PropertyType::List(&PropertyType::Struct(&BLOCK_DEVICE_MAPPING_SCHEMA)),
        ),
        PropertySchema::new("EbsOptimized", PropertyType::Boolean),
        PropertySchema::new(
            "IamInstanceProfile",
            PropertyType::Struct(&IAM_INSTANCE_PROFILE_SPECIFICATION_SCHEMA),
        ),
        PropertySchema::new("ImageId", PropertyType::String)
            .required(),
        PropertySchema::new(
            "InstanceRequirements",
            PropertyType::Struct(&INSTANCE_REQUIREMENTS_REQUEST_SCHEMA),
        ),
        PropertySchema::new("InstanceType", PropertyType::String),
        PropertySchema::new("KernelId", PropertyType::String),
        PropertySchema::new("KeyName", PropertyType::String),
        PropertySchema::new(
            "Monitoring",
            PropertyType::Struct(&SPOT_FLEET_MONITORING_SCHEMA),
        ),
        PropertySchema::new(
            "NetworkInterfaces",
            PropertyType::List(&PropertyType::Struct(&INSTANCE_NETWORK_INTERFACE_SPECIFICATION_SCHEMA)),
        ),
        PropertySchema::new("Placement", PropertyType::Struct(&SPOT_PLACEMENT_SCHEMA)),
        PropertySchema::new("RamdiskId", PropertyType::String),
        PropertySchema::new(
            "SecurityGroups",
            PropertyType::List(&PropertyType::Struct(&GROUP_IDENTIFIER_SCHEMA)),
        ),
        PropertySchema::new("SpotPrice", PropertyType::String),
        PropertySchema::new("SubnetId", PropertyType::String),
        PropertySchema::new(
            "TagSpecifications",
            PropertyType::List(&PropertyType::Struct(&SPOT_FLEET_TAG_SPECIFICATION_SCHEMA)),
        ),
        PropertySchema::new("UserData", PropertyType::String),
        PropertySchema::new("WeightedCapacity", PropertyType::Double),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct BlockDeviceMapping {
    /// The device name (for example, /dev/sdh or xvdh).
    pub device_name: Value<String>,
    /// Parameters used to automatically set up EBS volumes when the instance is launched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ebs: Option<EbsBlockDevice>,
    /// To omit the device from the block device mapping, specify an empty string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_device: Option<Value<String>>,
    /// The virtual device name (ephemeralN).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_name: Option<Value<String>>,
}

pub const BLOCK_DEVICE_MAPPING_SCHEMA: StructSchema = StructSchema {
    name: "BlockDeviceMapping",
    properties: &[
        PropertySchema::new("DeviceName", PropertyType::String)
            .required(),
        PropertySchema::new("Ebs", PropertyType::Struct(&EBS_BLOCK_DEVICE_SCHEMA)),
        PropertySchema::new("NoDevice", PropertyType::String),
        PropertySchema::new("VirtualName", PropertyType::String),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct EbsBlockDevice {
    /// Indicates whether the EBS volume is deleted on instance termination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<Value<bool>>,
    /// Indicates whether the encryption state of an EBS volume is changed while being restored from
    /// a backing snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<Value<bool>>,
    /// The number of I/O operations per second (IOPS).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iops: Option<Value<i64>>,
    /// The ID of the snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<Value<String>>,
    /// The size of the volume, in GiBs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_size: Option<Value<i64>>,
    /// The volume type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<Value<EbsBlockDeviceVolumeType>>,
}

pub const EBS_BLOCK_DEVICE_SCHEMA: StructSchema = StructSchema {
    name: "EbsBlockDevice",
    properties: &[
        PropertySchema::new("DeleteOnTermination", PropertyType::Boolean),
        PropertySchema::new("Encrypted", PropertyType::Boolean),
        PropertySchema::new("Iops", PropertyType::Integer),
        PropertySchema::new("SnapshotId", PropertyType::String),
        PropertySchema::new("VolumeSize", PropertyType::Integer),
        PropertySchema::new(
            "VolumeType",
            PropertyType::Enum(&EbsBlockDeviceVolumeType::SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct IamInstanceProfileSpecification {
    /// The Amazon Resource Name (ARN) of the instance profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<Value<String>>,
}

pub const IAM_INSTANCE_PROFILE_SPECIFICATION_SCHEMA: StructSchema = StructSchema {
    name: "IamInstanceProfileSpecification",
    properties: &[
        PropertySchema::new("Arn", PropertyType::String),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SpotFleetMonitoring {
    /// Enables monitoring for the instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Value<bool>>,
}

pub const SPOT_FLEET_MONITORING_SCHEMA: StructSchema = StructSchema {
    name: "SpotFleetMonitoring",
    properties: &[
        PropertySchema::new("Enabled", PropertyType::Boolean),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct InstanceNetworkInterfaceSpecification {
    /// Indicates whether to assign a public IPv4 address to an instance you launch in a VPC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associate_public_ip_address: Option<Value<bool>>,
    /// Indicates whether the network interface is deleted when the instance is terminated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<Value<bool>>,
    /// The description of the network interface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,
    /// The position of the network interface in the attachment order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_index: Option<Value<i64>>,
    /// The IDs of the security groups for the network interface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<List<String>>,
    /// A number of IPv6 addresses to assign to the network interface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6_address_count: Option<Value<i64>>,
    /// The IPv6 addresses to assign to the network interface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6_addresses: Option<Vec<InstanceIpv6Address>>,
    /// The ID of the network interface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<Value<String>>,
    /// The private IPv4 addresses to assign to the network interface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_ip_addresses: Option<Vec<PrivateIpAddressSpecification>>,
    /// The number of secondary private IPv4 addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_private_ip_address_count: Option<Value<i64>>,
    /// The ID of the subnet associated with the network interface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<Value<String>>,
}

pub const INSTANCE_NETWORK_INTERFACE_SPECIFICATION_SCHEMA: StructSchema = StructSchema {
    name: "InstanceNetworkInterfaceSpecification",
    properties: &[
        PropertySchema::new("AssociatePublicIpAddress", PropertyType::Boolean),
        PropertySchema::new("DeleteOnTermination", PropertyType::Boolean),
        PropertySchema::new("Description", PropertyType::String),
        PropertySchema::new("DeviceIndex", PropertyType::Integer),
        PropertySchema::new("Groups", PropertyType::List(&PropertyType::String)),
        PropertySchema::new("Ipv6AddressCount", PropertyType::Integer),
        PropertySchema::new(
            "Ipv6Addresses",
            PropertyType::List(&PropertyType::Struct(&INSTANCE_IPV6_ADDRESS_SCHEMA)),
        ),
        PropertySchema::new("NetworkInterfaceId", PropertyType::String),
        PropertySchema::new(
            "PrivateIpAddresses",
            PropertyType::List(&PropertyType::Struct(&PRIVATE_IP_ADDRESS_SPECIFICATION_SCHEMA)),
        ),
        PropertySchema::new("SecondaryPrivateIpAddressCount", PropertyType::Integer),
        PropertySchema::new("SubnetId", PropertyType::String),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct InstanceIpv6Address {
    /// The IPv6 address.
    pub ipv6_address: Value<String>,
}

pub const INSTANCE_IPV6_ADDRESS_SCHEMA: StructSchema = StructSchema {
    name: "InstanceIpv6Address",
    properties: &[
        PropertySchema::new("Ipv6Address", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct PrivateIpAddressSpecification {
    /// Indicates whether the private IPv4 address is the primary private IPv4 address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<Value<bool>>,
    /// The private IPv4 address.
    pub private_ip_address: Value<String>,
}

pub const PRIVATE_IP_ADDRESS_SPECIFICATION_SCHEMA: StructSchema = StructSchema {
    name: "PrivateIpAddressSpecification",
    properties: &[
        PropertySchema::new("Primary", PropertyType::Boolean),
        PropertySchema::new("PrivateIpAddress", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SpotPlacement {
    /// The Availability Zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<Value<String>>,
    /// The name of the placement group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<Value<String>>,
    /// The tenancy of the instance (if the instance is running in a VPC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<Value<SpotPlacementTenancy>>,
}

pub const SPOT_PLACEMENT_SCHEMA: StructSchema = StructSchema {
    name: "SpotPlacement",
    properties: &[
        PropertySchema::new("AvailabilityZone", PropertyType::String),
        PropertySchema::new("GroupName", PropertyType::String),
        PropertySchema::new("Tenancy", PropertyType::Enum(&SpotPlacementTenancy::SCHEMA)),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct GroupIdentifier {
    /// The ID of the security group.
    pub group_id: Value<String>,
}

pub const GROUP_IDENTIFIER_SCHEMA: StructSchema = StructSchema {
    name: "GroupIdentifier",
    properties: &[
        PropertySchema::new("GroupId", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SpotFleetTagSpecification {
    /// The type of resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<Value<TagSpecificationResourceType>>,
    /// The tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

pub const SPOT_FLEET_TAG_SPECIFICATION_SCHEMA: StructSchema = StructSchema {
    name: "SpotFleetTagSpecification",
    properties: &[
        PropertySchema::new(
            "ResourceType",
            PropertyType::Enum(&TagSpecificationResourceType::SCHEMA),
        ),
        PropertySchema::new(
            "Tags",
            PropertyType::List(&PropertyType::Struct(&TAG_SCHEMA)),
        ),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct LaunchTemplateConfig {
    /// The launch template to use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_template_specification: Option<FleetLaunchTemplateSpecification>,
    /// Any parameters that you specify override the same parameters in the launch template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Vec<LaunchTemplateOverrides>>,
}

pub const LAUNCH_TEMPLATE_CONFIG_SCHEMA: StructSchema = StructSchema {
    name: "LaunchTemplateConfig",
    properties: &[
        PropertySchema::new(
            "LaunchTemplateSpecification",
            PropertyType::Struct(&FLEET_LAUNCH_TEMPLATE_SPECIFICATION_SCHEMA),
        ),
        PropertySchema::new(
            "Overrides",
            PropertyType::List(&PropertyType::Struct(&LAUNCH_TEMPLATE_OVERRIDES_SCHEMA)),
        ),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct FleetLaunchTemplateSpecification {
    /// The ID of the launch template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_template_id: Option<Value<String>>,
    /// The name of the launch template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_template_name: Option<Value<String>>,
    /// The launch template version number, $Latest, or $Default.
    pub version: Value<String>,
}

pub const FLEET_LAUNCH_TEMPLATE_SPECIFICATION_SCHEMA: StructSchema = StructSchema {
    name: "FleetLaunchTemplateSpecification",
    properties: &[
        PropertySchema::new("LaunchTemplateId", PropertyType::String),
        PropertySchema::new("LaunchTemplateName", PropertyType::String),
        PropertySchema::new("Version", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct LaunchTemplateOverrides {
    /// The Availability Zone in which to launch the instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<Value<String>>,
    /// The instance requirements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_requirements: Option<InstanceRequirementsRequest>,
    /// The instance type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<Value<String>>,
    /// The priority for the launch template override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Value<f64>>,
    /// The maximum price per unit hour that you are willing to pay for a Spot Instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot_price: Option<Value<String>>,
    /// The ID of the subnet in which to launch the instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<Value<String>>,
    /// The number of units provided by the specified instance type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weighted_capacity: Option<Value<f64>>,
}

pub const LAUNCH_TEMPLATE_OVERRIDES_SCHEMA: StructSchema = StructSchema {
    name: "LaunchTemplateOverrides",
    properties: &[
        PropertySchema::new("AvailabilityZone", PropertyType::String),
        PropertySchema::new(
            "InstanceRequirements",
            PropertyType::Struct(&INSTANCE_REQUIREMENTS_REQUEST_SCHEMA),
        ),
        PropertySchema::new("InstanceType", PropertyType::String),
        PropertySchema::new("Priority", PropertyType::Double),
        PropertySchema::new("SpotPrice", PropertyType::String),
        PropertySchema::new("SubnetId", PropertyType::String),
        PropertySchema::new("WeightedCapacity", PropertyType::Double),
    ],
};

/// The attributes for the instance types. When you specify instance attributes, Amazon EC2 will
/// identify instance types with those attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct InstanceRequirementsRequest {
    /// The minimum and maximum number of accelerators on an instance type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accelerator_count: Option<AcceleratorCountRequest>,
    /// Indicates whether instance types must have accelerators by specific manufacturers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accelerator_manufacturers: Option<List<InstanceRequirementsRequestAcceleratorManufacturersItem>>,
    /// The accelerators that must be on the instance type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accelerator_names: Option<List<InstanceRequirementsRequestAcceleratorNamesItem>>,
    /// The minimum and maximum amount of total accelerator memory, in MiB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accelerator_total_memory_mi_b: Option<AcceleratorTotalMemoryMiBRequest>,
    /// The accelerator types that must be on the instance type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accelerator_types: Option<List<InstanceRequirementsRequestAcceleratorTypesItem>>,
    /// The instance types to apply your specified attributes against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_instance_types: Option<List<String>>,
    /// Indicates whether bare metal instance types must be included, excluded, or required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bare_metal: Option<Value<LocalStorageSupport>>,
    /// The minimum and maximum baseline bandwidth to Amazon EBS, in Mbps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_ebs_bandwidth_mbps: Option<BaselineEbsBandwidthMbpsRequest>,
    /// Indicates whether burstable performance T instance types are included, excluded, or
    /// required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burstable_performance: Option<Value<LocalStorageSupport>>,
    /// The CPU manufacturers to include.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_manufacturers: Option<List<InstanceRequirementsRequestCpuManufacturersItem>>,
    /// The instance types to exclude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_instance_types: Option<List<String>>,
    /// Indicates whether current or previous generation instance types are included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_generations: Option<List<InstanceRequirementsRequestInstanceGenerationsItem>>,
    /// Indicates whether instance types with instance store volumes are included, excluded, or
    /// required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_storage: Option<Value<LocalStorageSupport>>,
    /// The type of local storage that is required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_storage_types: Option<List<InstanceRequirementsRequestLocalStorageTypesItem>>,
    /// The minimum and maximum amount of memory per vCPU, in GiB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_gi_b_per_v_cpu: Option<MemoryGiBPerVCpuRequest>,
    /// The minimum and maximum amount of memory, in MiB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_mi_b: Option<MemoryMiBRequest>,
    /// The minimum and maximum amount of network bandwidth, in gigabits per second (Gbps).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_bandwidth_gbps: Option<NetworkBandwidthGbpsRequest>,
    /// The minimum and maximum number of network interfaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_interface_count: Option<NetworkInterfaceCountRequest>,
    /// The price protection threshold for On-Demand Instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_demand_max_price_percentage_over_lowest_price: Option<Value<i64>>,
    /// Indicates whether instance types must support hibernation for On-Demand Instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_hibernate_support: Option<Value<bool>>,
    /// The price protection threshold for Spot Instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot_max_price_percentage_over_lowest_price: Option<Value<i64>>,
    /// The minimum and maximum amount of total local storage, in GB.
    #[serde(rename = "TotalLocalStorageGB", default, skip_serializing_if = "Option::is_none")]
    pub total_local_storage_gb: Option<TotalLocalStorageGbRequest>,
    /// The minimum and maximum number of vCPUs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v_cpu_count: Option<VCpuCountRangeRequest>,
}

pub const INSTANCE_REQUIREMENTS_REQUEST_SCHEMA: StructSchema = StructSchema {
    name: "InstanceRequirementsRequest",
    properties: &[
        PropertySchema::new(
            "AcceleratorCount",
            PropertyType::Struct(&ACCELERATOR_COUNT_REQUEST_SCHEMA),
        ),
        PropertySchema::new(
            "AcceleratorManufacturers",
            PropertyType::List(&PropertyType::Enum(&InstanceRequirementsRequestAcceleratorManufacturersItem::SCHEMA)),
        ),
        PropertySchema::new(
            "AcceleratorNames",
            PropertyType::List(&PropertyType::Enum(&InstanceRequirementsRequestAcceleratorNamesItem::SCHEMA)),
        ),
        PropertySchema::new(
            "AcceleratorTotalMemoryMiB",
            PropertyType::Struct(&ACCELERATOR_TOTAL_MEMORY_MI_B_REQUEST_SCHEMA),
        ),
        PropertySchema::new(
            "AcceleratorTypes",
            PropertyType::List(&PropertyType::Enum(&InstanceRequirementsRequestAcceleratorTypesItem::SCHEMA)),
        ),
        PropertySchema::new(
            "AllowedInstanceTypes",
            PropertyType::List(&PropertyType::String),
        ),
        PropertySchema::new(
            "BareMetal",
            PropertyType::Enum(&LocalStorageSupport::SCHEMA),
        ),
        PropertySchema::new(
            "BaselineEbsBandwidthMbps",
            PropertyType::Struct(&BASELINE_EBS_BANDWIDTH_MBPS_REQUEST_SCHEMA),
        ),
        PropertySchema::new(
            "BurstablePerformance",
            PropertyType::Enum(&LocalStorageSupport::SCHEMA),
        ),
        PropertySchema::new(
            "CpuManufacturers",
            PropertyType::List(&PropertyType::Enum(&InstanceRequirementsRequestCpuManufacturersItem::SCHEMA)),
        ),
        PropertySchema::new(
            "ExcludedInstanceTypes",
            PropertyType::List(&PropertyType::String),
        ),
        PropertySchema::new(
            "InstanceGenerations",
            PropertyType::List(&PropertyType::Enum(&InstanceRequirementsRequestInstanceGenerationsItem::SCHEMA)),
        ),
        PropertySchema::new(
            "LocalStorage",
            PropertyType::Enum(&LocalStorageSupport::SCHEMA),
        ),
        PropertySchema::new(
            "LocalStorageTypes",
            PropertyType::List(&PropertyType::Enum(&InstanceRequirementsRequestLocalStorageTypesItem::SCHEMA)),
        ),
        PropertySchema::new(
            "MemoryGiBPerVCpu",
            PropertyType::Struct(&MEMORY_GI_B_PER_V_CPU_REQUEST_SCHEMA),
        ),
        PropertySchema::new(
            "MemoryMiB",
            PropertyType::Struct(&MEMORY_MI_B_REQUEST_SCHEMA),
        ),
        PropertySchema::new(
            "NetworkBandwidthGbps",
            PropertyType::Struct(&NETWORK_BANDWIDTH_GBPS_REQUEST_SCHEMA),
        ),
        PropertySchema::new(
            "NetworkInterfaceCount",
            PropertyType::Struct(&NETWORK_INTERFACE_COUNT_REQUEST_SCHEMA),
        ),
        PropertySchema::new(
            "OnDemandMaxPricePercentageOverLowestPrice",
            PropertyType::Integer,
        ),
        PropertySchema::new("RequireHibernateSupport", PropertyType::Boolean),
        PropertySchema::new(
            "SpotMaxPricePercentageOverLowestPrice",
            PropertyType::Integer,
        ),
        PropertySchema::new(
            "TotalLocalStorageGB",
            PropertyType::Struct(&TOTAL_LOCAL_STORAGE_GB_REQUEST_SCHEMA),
        ),
        PropertySchema::new(
            "VCpuCount",
            PropertyType::Struct(&V_CPU_COUNT_RANGE_REQUEST_SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AcceleratorCountRequest {
    /// The maximum number of accelerators. To specify no maximum limit, omit this parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Value<i64>>,
    /// The minimum number of accelerators. To specify no minimum limit, omit this parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Value<i64>>,
}

pub const ACCELERATOR_COUNT_REQUEST_SCHEMA: StructSchema = StructSchema {
    name: "AcceleratorCountRequest",
    properties: &[
        PropertySchema::new("Max", PropertyType::Integer),
        PropertySchema::new("Min", PropertyType::Integer),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AcceleratorTotalMemoryMiBRequest {
    /// The maximum amount of accelerator memory, in MiB. To specify no maximum limit, omit this
    /// parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Value<i64>>,
    /// The minimum amount of accelerator memory, in MiB. To specify no minimum limit, omit this
    /// parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Value<i64>>,
}

pub const ACCELERATOR_TOTAL_MEMORY_MI_B_REQUEST_SCHEMA: StructSchema = StructSchema {
    name: "AcceleratorTotalMemoryMiBRequest",
    properties: &[
        PropertySchema::new("Max", PropertyType::Integer),
        PropertySchema::new("Min", PropertyType::Integer),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct BaselineEbsBandwidthMbpsRequest {
    /// The maximum baseline bandwidth, in Mbps. To specify no maximum limit, omit this parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Value<i64>>,
    /// The minimum baseline bandwidth, in Mbps. To specify no minimum limit, omit this parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Value<i64>>,
}

pub const BASELINE_EBS_BANDWIDTH_MBPS_REQUEST_SCHEMA: StructSchema = StructSchema {
    name: "BaselineEbsBandwidthMbpsRequest",
    properties: &[
        PropertySchema::new("Max", PropertyType::Integer),
        PropertySchema::new("Min", PropertyType::Integer),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct MemoryGiBPerVCpuRequest {
    /// The maximum amount of memory per vCPU, in GiB. To specify no maximum limit, omit this
    /// parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Value<f64>>,
    /// The minimum amount of memory per vCPU, in GiB. To specify no minimum limit, omit this
    /// parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Value<f64>>,
}

pub const MEMORY_GI_B_PER_V_CPU_REQUEST_SCHEMA: StructSchema = StructSchema {
    name: "MemoryGiBPerVCpuRequest",
    properties: &[
        PropertySchema::new("Max", PropertyType::Double),
        PropertySchema::new("Min", PropertyType::Double),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct MemoryMiBRequest {
    /// The maximum amount of memory, in MiB. To specify no maximum limit, omit this parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Value<i64>>,
    /// The minimum amount of memory, in MiB. To specify no minimum limit, omit this parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Value<i64>>,
}

pub const MEMORY_MI_B_REQUEST_SCHEMA: StructSchema = StructSchema {
    name: "MemoryMiBRequest",
    properties: &[
        PropertySchema::new("Max", PropertyType::Integer),
        PropertySchema::new("Min", PropertyType::Integer),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct NetworkBandwidthGbpsRequest {
    /// The maximum amount of network bandwidth, in Gbps. To specify no maximum limit, omit this
    /// parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Value<f64>>,
    /// The minimum amount of network bandwidth, in Gbps. To specify no minimum limit, omit this
    /// parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Value<f64>>,
}

pub const NETWORK_BANDWIDTH_GBPS_REQUEST_SCHEMA: StructSchema = StructSchema {
    name: "NetworkBandwidthGbpsRequest",
    properties: &[
        PropertySchema::new("Max", PropertyType::Double),
        PropertySchema::new("Min", PropertyType::Double),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct NetworkInterfaceCountRequest {
    /// The maximum number of network interfaces. To specify no maximum limit, omit this parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Value<i64>>,
    /// The minimum number of network interfaces. To specify no minimum limit, omit this parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Value<i64>>,
}

pub const NETWORK_INTERFACE_COUNT_REQUEST_SCHEMA: StructSchema = StructSchema {
    name: "NetworkInterfaceCountRequest",
    properties: &[
        PropertySchema::new("Max", PropertyType::Integer),
        PropertySchema::new("Min", PropertyType::Integer),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct TotalLocalStorageGbRequest {
    /// The maximum amount of total local storage, in GB. To specify no maximum limit, omit this
    /// parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Value<f64>>,
    /// The minimum amount of total local storage, in GB. To specify no minimum limit, omit this
    /// parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Value<f64>>,
}

pub const TOTAL_LOCAL_STORAGE_GB_REQUEST_SCHEMA: StructSchema = StructSchema {
    name: "TotalLocalStorageGBRequest",
    properties: &[
        PropertySchema::new("Max", PropertyType::Double),
        PropertySchema::new("Min", PropertyType::Double),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct VCpuCountRangeRequest {
    /// The maximum number of vCPUs. To specify no maximum limit, omit this parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Value<i64>>,
    /// The minimum number of vCPUs. To specify no minimum limit, omit this parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Value<i64>>,
}

pub const V_CPU_COUNT_RANGE_REQUEST_SCHEMA: StructSchema = StructSchema {
    name: "VCpuCountRangeRequest",
    properties: &[
        PropertySchema::new("Max", PropertyType::Integer),
        PropertySchema::new("Min", PropertyType::Integer),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct LoadBalancersConfig {
    /// The Classic Load Balancers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classic_load_balancers_config: Option<ClassicLoadBalancersConfig>,
    /// The target groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_groups_config: Option<TargetGroupsConfig>,
}

pub const LOAD_BALANCERS_CONFIG_SCHEMA: StructSchema = StructSchema {
    name: "LoadBalancersConfig",
    properties: &[
        PropertySchema::new(
            "ClassicLoadBalancersConfig",
            PropertyType::Struct(&CLASSIC_LOAD_BALANCERS_CONFIG_SCHEMA),
        ),
        PropertySchema::new(
            "TargetGroupsConfig",
            PropertyType::Struct(&TARGET_GROUPS_CONFIG_SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ClassicLoadBalancersConfig {
    /// One or more Classic Load Balancers.
    pub classic_load_balancers: Vec<ClassicLoadBalancer>,
}

pub const CLASSIC_LOAD_BALANCERS_CONFIG_SCHEMA: StructSchema = StructSchema {
    name: "ClassicLoadBalancersConfig",
    properties: &[
        PropertySchema::new(
            "ClassicLoadBalancers",
            PropertyType::List(&PropertyType::Struct(&CLASSIC_LOAD_BALANCER_SCHEMA)),
        )
        .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ClassicLoadBalancer {
    /// The name of the load balancer.
    pub name: Value<String>,
}

pub const CLASSIC_LOAD_BALANCER_SCHEMA: StructSchema = StructSchema {
    name: "ClassicLoadBalancer",
    properties: &[
        PropertySchema::new("Name", PropertyType::String).required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct TargetGroupsConfig {
    /// One or more target groups.
    pub target_groups: Vec<TargetGroup>,
}

pub const TARGET_GROUPS_CONFIG_SCHEMA: StructSchema = StructSchema {
    name: "TargetGroupsConfig",
    properties: &[
        PropertySchema::new(
            "TargetGroups",
            PropertyType::List(&PropertyType::Struct(&TARGET_GROUP_SCHEMA)),
        )
        .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct TargetGroup {
    /// The Amazon Resource Name (ARN) of the target group.
    pub arn: Value<String>,
}

pub const TARGET_GROUP_SCHEMA: StructSchema = StructSchema {
    name: "TargetGroup",
    properties: &[
        PropertySchema::new("Arn", PropertyType::String).required(),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SpotMaintenanceStrategies {
    /// The Spot Instance replacement strategy to use when Amazon EC2 emits a rebalance notification
    /// signal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_rebalance: Option<SpotCapacityRebalance>,
}

pub const SPOT_MAINTENANCE_STRATEGIES_SCHEMA: StructSchema = StructSchema {
    name: "SpotMaintenanceStrategies",
    properties: &[
        PropertySchema::new(
            "CapacityRebalance",
            PropertyType::Struct(&SPOT_CAPACITY_REBALANCE_SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SpotCapacityRebalance {
    /// The replacement strategy to use. Only available for fleets of type maintain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_strategy: Option<Value<SpotCapacityRebalanceReplacementStrategy>>,
    /// The amount of time (in seconds) that Amazon EC2 waits before terminating the old Spot
    /// Instance after launching a new replacement Spot Instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination_delay: Option<Value<i64>>,
}

pub const SPOT_CAPACITY_REBALANCE_SCHEMA: StructSchema = StructSchema {
    name: "SpotCapacityRebalance",
    properties: &[
        PropertySchema::new(
            "ReplacementStrategy",
            PropertyType::Enum(&SpotCapacityRebalanceReplacementStrategy::SCHEMA),
        ),
        PropertySchema::new("TerminationDelay", PropertyType::Integer),
    ],
};
