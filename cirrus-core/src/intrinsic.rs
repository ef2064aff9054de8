//! Intrinsic - CloudFormation intrinsic function placeholders
//!
//! An intrinsic stands in for a literal anywhere a property allows it.
//! Nothing here evaluates a function; arguments that may be literals or
//! nested intrinsics are kept as raw JSON.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::json;

use crate::value::Json;

/// Error raised when a recognized function has malformed arguments
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntrinsicError {
    #[error("Invalid arguments for {function}: {reason}")]
    InvalidArguments {
        function: &'static str,
        reason: String,
    },

    #[error("Expected an intrinsic function object, got {0}")]
    NotAnIntrinsic(String),
}

impl IntrinsicError {
    fn invalid(function: &'static str, reason: impl Into<String>) -> Self {
        IntrinsicError::InvalidArguments {
            function,
            reason: reason.into(),
        }
    }
}

/// A CloudFormation intrinsic function call
#[derive(Debug, Clone, PartialEq)]
pub enum Intrinsic {
    /// `Ref`: logical id of a resource or parameter, or a pseudo parameter
    Ref(String),
    /// `Fn::GetAtt`
    GetAtt {
        logical_id: String,
        attribute: String,
    },
    /// `Fn::Sub`, with optional variable map
    Sub {
        template: String,
        variables: Option<BTreeMap<String, Json>>,
    },
    /// `Fn::Join`
    Join { delimiter: String, values: Json },
    /// `Fn::Select`
    Select { index: Json, values: Json },
    /// `Fn::Split`
    Split { delimiter: String, source: Json },
    /// `Fn::FindInMap`
    FindInMap {
        map_name: Json,
        top_level_key: Json,
        second_level_key: Json,
    },
    /// `Fn::GetAZs`
    GetAzs(Json),
    /// `Fn::ImportValue`
    ImportValue(Json),
    /// `Fn::Base64`
    Base64(Json),
    /// `Fn::Cidr`
    Cidr {
        ip_block: Json,
        count: Json,
        cidr_bits: Json,
    },
    /// `Fn::If`
    If {
        condition: String,
        value_if_true: Json,
        value_if_false: Json,
    },
    /// `Fn::Equals`
    Equals(Json, Json),
    /// `Fn::And`
    And(Vec<Json>),
    /// `Fn::Or`
    Or(Vec<Json>),
    /// `Fn::Not`
    Not(Json),
    /// `Fn::Length`
    Length(Json),
    /// `Fn::ToJsonString`
    ToJsonString(Json),
    /// `Fn::Transform`
    Transform {
        name: String,
        parameters: Option<Json>,
    },
}

impl Intrinsic {
    pub fn reference(logical_id: impl Into<String>) -> Self {
        Intrinsic::Ref(logical_id.into())
    }

    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Intrinsic::GetAtt {
            logical_id: logical_id.into(),
            attribute: attribute.into(),
        }
    }

    pub fn sub(template: impl Into<String>) -> Self {
        Intrinsic::Sub {
            template: template.into(),
            variables: None,
        }
    }

    pub fn join(delimiter: impl Into<String>, values: Vec<Json>) -> Self {
        Intrinsic::Join {
            delimiter: delimiter.into(),
            values: Json::Array(values),
        }
    }

    /// Key used in the template for this function
    pub fn function_name(&self) -> &'static str {
        match self {
            Intrinsic::Ref(_) => "Ref",
            Intrinsic::GetAtt { .. } => "Fn::GetAtt",
            Intrinsic::Sub { .. } => "Fn::Sub",
            Intrinsic::Join { .. } => "Fn::Join",
            Intrinsic::Select { .. } => "Fn::Select",
            Intrinsic::Split { .. } => "Fn::Split",
            Intrinsic::FindInMap { .. } => "Fn::FindInMap",
            Intrinsic::GetAzs(_) => "Fn::GetAZs",
            Intrinsic::ImportValue(_) => "Fn::ImportValue",
            Intrinsic::Base64(_) => "Fn::Base64",
            Intrinsic::Cidr { .. } => "Fn::Cidr",
            Intrinsic::If { .. } => "Fn::If",
            Intrinsic::Equals(_, _) => "Fn::Equals",
            Intrinsic::And(_) => "Fn::And",
            Intrinsic::Or(_) => "Fn::Or",
            Intrinsic::Not(_) => "Fn::Not",
            Intrinsic::Length(_) => "Fn::Length",
            Intrinsic::ToJsonString(_) => "Fn::ToJsonString",
            Intrinsic::Transform { .. } => "Fn::Transform",
        }
    }

    /// Whether a JSON value has the shape of an intrinsic call:
    /// an object with exactly one key that is `Ref` or starts with `Fn::`.
    pub fn is_intrinsic_shape(json: &Json) -> bool {
        match json {
            Json::Object(map) if map.len() == 1 => map
                .keys()
                .next()
                .is_some_and(|k| k == "Ref" || k.starts_with("Fn::")),
            _ => false,
        }
    }

    /// Read an intrinsic from JSON.
    ///
    /// Returns `Ok(None)` when the value is not shaped like an intrinsic call,
    /// and an error when it names a function but its arguments are malformed.
    pub fn from_json(json: &Json) -> Result<Option<Intrinsic>, IntrinsicError> {
        if !Self::is_intrinsic_shape(json) {
            return Ok(None);
        }
        let Some((key, args)) = json.as_object().and_then(|m| m.iter().next()) else {
            return Ok(None);
        };

        let intrinsic = match key.as_str() {
            "Ref" => Intrinsic::Ref(expect_string("Ref", args)?),
            "Fn::GetAtt" => parse_get_att(args)?,
            "Fn::Sub" => parse_sub(args)?,
            "Fn::Join" => {
                let [delimiter, values] = expect_args::<2>("Fn::Join", args)?;
                Intrinsic::Join {
                    delimiter: expect_string("Fn::Join", &delimiter)?,
                    values,
                }
            }
            "Fn::Select" => {
                let [index, values] = expect_args::<2>("Fn::Select", args)?;
                Intrinsic::Select { index, values }
            }
            "Fn::Split" => {
                let [delimiter, source] = expect_args::<2>("Fn::Split", args)?;
                Intrinsic::Split {
                    delimiter: expect_string("Fn::Split", &delimiter)?,
                    source,
                }
            }
            "Fn::FindInMap" => {
                let [map_name, top_level_key, second_level_key] =
                    expect_args::<3>("Fn::FindInMap", args)?;
                Intrinsic::FindInMap {
                    map_name,
                    top_level_key,
                    second_level_key,
                }
            }
            "Fn::GetAZs" => Intrinsic::GetAzs(args.clone()),
            "Fn::ImportValue" => Intrinsic::ImportValue(args.clone()),
            "Fn::Base64" => Intrinsic::Base64(args.clone()),
            "Fn::Cidr" => {
                let [ip_block, count, cidr_bits] = expect_args::<3>("Fn::Cidr", args)?;
                Intrinsic::Cidr {
                    ip_block,
                    count,
                    cidr_bits,
                }
            }
            "Fn::If" => {
                let [condition, value_if_true, value_if_false] = expect_args::<3>("Fn::If", args)?;
                Intrinsic::If {
                    condition: expect_string("Fn::If", &condition)?,
                    value_if_true,
                    value_if_false,
                }
            }
            "Fn::Equals" => {
                let [left, right] = expect_args::<2>("Fn::Equals", args)?;
                Intrinsic::Equals(left, right)
            }
            "Fn::And" => Intrinsic::And(expect_list("Fn::And", args)?),
            "Fn::Or" => Intrinsic::Or(expect_list("Fn::Or", args)?),
            "Fn::Not" => {
                let [condition] = expect_args::<1>("Fn::Not", args)?;
                Intrinsic::Not(condition)
            }
            "Fn::Length" => Intrinsic::Length(args.clone()),
            "Fn::ToJsonString" => Intrinsic::ToJsonString(args.clone()),
            "Fn::Transform" => {
                let name = args
                    .get("Name")
                    .and_then(Json::as_str)
                    .ok_or_else(|| IntrinsicError::invalid("Fn::Transform", "missing Name"))?;
                Intrinsic::Transform {
                    name: name.to_string(),
                    parameters: args.get("Parameters").cloned(),
                }
            }
            // Unknown Fn:: keys are not intrinsics this catalog knows about
            _ => return Ok(None),
        };
        Ok(Some(intrinsic))
    }

    /// JSON form of this call as it appears in a template
    pub fn to_json(&self) -> Json {
        let args = match self {
            Intrinsic::Ref(id) => json!(id),
            Intrinsic::GetAtt {
                logical_id,
                attribute,
            } => json!([logical_id, attribute]),
            Intrinsic::Sub {
                template,
                variables,
            } => match variables {
                Some(vars) => json!([template, vars]),
                None => json!(template),
            },
            Intrinsic::Join { delimiter, values } => json!([delimiter, values]),
            Intrinsic::Select { index, values } => json!([index, values]),
            Intrinsic::Split { delimiter, source } => json!([delimiter, source]),
            Intrinsic::FindInMap {
                map_name,
                top_level_key,
                second_level_key,
            } => json!([map_name, top_level_key, second_level_key]),
            Intrinsic::GetAzs(region) => region.clone(),
            Intrinsic::ImportValue(name) => name.clone(),
            Intrinsic::Base64(value) => value.clone(),
            Intrinsic::Cidr {
                ip_block,
                count,
                cidr_bits,
            } => json!([ip_block, count, cidr_bits]),
            Intrinsic::If {
                condition,
                value_if_true,
                value_if_false,
            } => json!([condition, value_if_true, value_if_false]),
            Intrinsic::Equals(left, right) => json!([left, right]),
            Intrinsic::And(conditions) | Intrinsic::Or(conditions) => json!(conditions),
            Intrinsic::Not(condition) => json!([condition]),
            Intrinsic::Length(value) | Intrinsic::ToJsonString(value) => value.clone(),
            Intrinsic::Transform { name, parameters } => match parameters {
                Some(parameters) => json!({ "Name": name, "Parameters": parameters }),
                None => json!({ "Name": name }),
            },
        };
        let mut call = serde_json::Map::new();
        call.insert(self.function_name().to_string(), args);
        Json::Object(call)
    }
}

fn expect_string(function: &'static str, args: &Json) -> Result<String, IntrinsicError> {
    args.as_str()
        .map(str::to_string)
        .ok_or_else(|| IntrinsicError::invalid(function, format!("expected string, got {args}")))
}

fn expect_list(function: &'static str, args: &Json) -> Result<Vec<Json>, IntrinsicError> {
    args.as_array()
        .cloned()
        .ok_or_else(|| IntrinsicError::invalid(function, format!("expected list, got {args}")))
}

fn expect_args<const N: usize>(
    function: &'static str,
    args: &Json,
) -> Result<[Json; N], IntrinsicError> {
    let items = expect_list(function, args)?;
    let len = items.len();
    items
        .try_into()
        .map_err(|_| IntrinsicError::invalid(function, format!("expected {N} arguments, got {len}")))
}

fn parse_get_att(args: &Json) -> Result<Intrinsic, IntrinsicError> {
    if let Some(dotted) = args.as_str() {
        let (logical_id, attribute) = dotted.split_once('.').ok_or_else(|| {
            IntrinsicError::invalid("Fn::GetAtt", format!("expected LogicalId.Attribute, got '{dotted}'"))
        })?;
        return Ok(Intrinsic::get_att(logical_id, attribute));
    }
    let [logical_id, attribute] = expect_args::<2>("Fn::GetAtt", args)?;
    Ok(Intrinsic::get_att(
        expect_string("Fn::GetAtt", &logical_id)?,
        expect_string("Fn::GetAtt", &attribute)?,
    ))
}

fn parse_sub(args: &Json) -> Result<Intrinsic, IntrinsicError> {
    if let Some(template) = args.as_str() {
        return Ok(Intrinsic::sub(template));
    }
    let [template, variables] = expect_args::<2>("Fn::Sub", args)?;
    let variables = match variables {
        Json::Object(map) => map.into_iter().collect(),
        other => {
            return Err(IntrinsicError::invalid(
                "Fn::Sub",
                format!("expected variable map, got {other}"),
            ));
        }
    };
    Ok(Intrinsic::Sub {
        template: expect_string("Fn::Sub", &template)?,
        variables: Some(variables),
    })
}

impl Serialize for Intrinsic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Intrinsic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Json::deserialize(deserializer)?;
        match Intrinsic::from_json(&json).map_err(D::Error::custom)? {
            Some(intrinsic) => Ok(intrinsic),
            None => Err(D::Error::custom(IntrinsicError::NotAnIntrinsic(
                json.to_string(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ref_roundtrip() {
        let json = json!({ "Ref": "MyApi" });
        let intrinsic = Intrinsic::from_json(&json).unwrap().unwrap();
        assert_eq!(intrinsic, Intrinsic::reference("MyApi"));
        assert_eq!(intrinsic.to_json(), json);
    }

    #[test]
    fn get_att_accepts_dotted_form() {
        let json = json!({ "Fn::GetAtt": "MyApi.ApiEndpoint" });
        let intrinsic = Intrinsic::from_json(&json).unwrap().unwrap();
        assert_eq!(intrinsic, Intrinsic::get_att("MyApi", "ApiEndpoint"));
        // Always written back in list form
        assert_eq!(
            intrinsic.to_json(),
            json!({ "Fn::GetAtt": ["MyApi", "ApiEndpoint"] })
        );
    }

    #[test]
    fn get_att_rejects_wrong_arity() {
        let json = json!({ "Fn::GetAtt": ["a", "b", "c"] });
        let err = Intrinsic::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("expected 2 arguments, got 3"));
    }

    #[test]
    fn sub_with_variables() {
        let json = json!({ "Fn::Sub": ["arn:${Partition}:s3:::${Bucket}", { "Bucket": { "Ref": "B" } }] });
        let intrinsic = Intrinsic::from_json(&json).unwrap().unwrap();
        match &intrinsic {
            Intrinsic::Sub {
                template,
                variables: Some(vars),
            } => {
                assert_eq!(template, "arn:${Partition}:s3:::${Bucket}");
                assert_eq!(vars["Bucket"], json!({ "Ref": "B" }));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(intrinsic.to_json(), json);
    }

    #[test]
    fn if_keeps_nested_values() {
        let json = json!({ "Fn::If": ["IsProd", { "Ref": "ProdStage" }, "dev"] });
        let intrinsic = Intrinsic::from_json(&json).unwrap().unwrap();
        assert_eq!(intrinsic.function_name(), "Fn::If");
        assert_eq!(intrinsic.to_json(), json);
    }

    #[test]
    fn transform_without_parameters_roundtrips() {
        let json = json!({ "Fn::Transform": { "Name": "AWS::Include" } });
        let intrinsic = Intrinsic::from_json(&json).unwrap().unwrap();
        assert_eq!(
            intrinsic,
            Intrinsic::Transform {
                name: "AWS::Include".to_string(),
                parameters: None,
            }
        );
        assert_eq!(intrinsic.to_json(), json);

        let with = json!({
            "Fn::Transform": { "Name": "AWS::Include", "Parameters": { "Location": "s3://b/k" } }
        });
        assert_eq!(Intrinsic::from_json(&with).unwrap().unwrap().to_json(), with);
    }

    #[test]
    fn transform_requires_name() {
        let json = json!({ "Fn::Transform": { "Parameters": {} } });
        assert!(Intrinsic::from_json(&json).is_err());
    }

    #[test]
    fn plain_objects_are_not_intrinsics() {
        assert_eq!(Intrinsic::from_json(&json!({ "Key": "v" })).unwrap(), None);
        assert_eq!(
            Intrinsic::from_json(&json!({ "Ref": "a", "Other": 1 })).unwrap(),
            None
        );
        assert_eq!(Intrinsic::from_json(&json!("Ref")).unwrap(), None);
        assert_eq!(Intrinsic::from_json(&json!({ "Fn::Unknown": 1 })).unwrap(), None);
    }

    #[test]
    fn deserialize_rejects_literals() {
        let result: Result<Intrinsic, _> = serde_json::from_value(json!("literal"));
        assert!(result.is_err());
    }
}
