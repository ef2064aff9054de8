//! Rendering configuration for JSON and YAML output

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::value::Json;

/// Output document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(format!("Unknown output format '{}', expected json or yaml", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Rendering options
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub format: OutputFormat,

    /// Number of spaces for JSON indentation (default: 2)
    pub indent_size: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            indent_size: 2,
        }
    }
}

impl RenderConfig {
    /// Get the string to use for a single level of indentation
    pub fn indent_string(&self) -> String {
        " ".repeat(self.indent_size)
    }

    pub fn render(&self, value: &Json) -> Result<String, String> {
        match self.format {
            OutputFormat::Json => {
                let indent = self.indent_string();
                let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
                let mut out = Vec::new();
                let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
                value
                    .serialize(&mut serializer)
                    .map_err(|e| format!("Failed to render JSON: {}", e))?;
                String::from_utf8(out).map_err(|e| format!("Failed to render JSON: {}", e))
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(value).map_err(|e| format!("Failed to render YAML: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.indent_size, 2);
    }

    #[test]
    fn test_render_json_indent() {
        let config = RenderConfig {
            indent_size: 4,
            ..Default::default()
        };
        let out = config.render(&json!({ "A": 1 })).unwrap();
        assert_eq!(out, "{\n    \"A\": 1\n}");
    }

    #[test]
    fn test_render_yaml() {
        let config = RenderConfig {
            format: OutputFormat::Yaml,
            ..Default::default()
        };
        let value = json!({ "Type": "AWS::X::Y", "Properties": { "Count": 2 } });
        let out = config.render(&value).unwrap();
        assert!(out.starts_with("Type:"), "{}", out);
        let back: Json = serde_yaml::from_str(&out).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("toml".parse::<OutputFormat>().is_err());
    }
}
