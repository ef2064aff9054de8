//! Rust names for CloudFormation identifiers

use heck::{ToPascalCase, ToShoutySnakeCase, ToSnakeCase};
use regex::Regex;

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Field name for a property and the `serde(rename)` it needs, if any.
///
/// A rename is needed when the struct-level `rename_all = "PascalCase"`
/// would not reproduce the CloudFormation name (`KMSArn`, `isSandboxEnvironment`)
/// or when the snake case name is a keyword (`Type` becomes `type_`).
pub fn field_name(cfn_name: &str) -> (String, Option<String>) {
    let snake = cfn_name.to_snake_case();
    if KEYWORDS.contains(&snake.as_str()) {
        return (format!("{}_", snake), Some(cfn_name.to_string()));
    }
    let rename = (serde_pascal(&snake) != cfn_name).then(|| cfn_name.to_string());
    (snake, rename)
}

/// What serde's `rename_all = "PascalCase"` produces for a snake case field
fn serde_pascal(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut capitalize = true;
    for ch in field.chars() {
        if ch == '_' {
            capitalize = true;
        } else if capitalize {
            out.extend(ch.to_uppercase());
            capitalize = false;
        } else {
            out.push(ch);
        }
    }
    out
}

pub fn type_name(cfn_name: &str) -> String {
    cfn_name.to_pascal_case()
}

/// Name of the `const` schema for a struct (`RouteSettings` gives `ROUTE_SETTINGS_SCHEMA`)
pub fn schema_const(rust_name: &str) -> String {
    format!("{}_SCHEMA", rust_name.to_shouty_snake_case())
}

pub fn module_name(cfn_name: &str) -> String {
    cfn_name.to_snake_case()
}

/// Variant name for an allowed value (`cross-az` gives `CrossAz`, `1.0` gives `V10`)
pub fn variant_name(value: &str) -> String {
    let name = value.to_pascal_case();
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("V{}", name)
    } else {
        name
    }
}

/// First sentence of a schema description with markdown removed
pub fn summary(description: &str) -> Option<String> {
    let links = Regex::new(r"\[([^\]]+)\]\([^)]*\)").ok()?;
    let code = Regex::new(r"`+([^`]+)`+").ok()?;
    let text = links.replace_all(description, "$1");
    let text = code.replace_all(&text, "$1");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let sentence = match text.find(". ") {
        Some(end) => &text[..=end],
        None => text.as_str(),
    };
    let sentence = sentence.trim();
    (!sentence.is_empty()).then(|| sentence.to_string())
}

/// Greedy word wrap
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        assert_eq!(field_name("ApiId"), ("api_id".to_string(), None));
        assert_eq!(
            field_name("KMSArn"),
            ("kms_arn".to_string(), Some("KMSArn".to_string()))
        );
        assert_eq!(
            field_name("isSandboxEnvironment"),
            (
                "is_sandbox_environment".to_string(),
                Some("isSandboxEnvironment".to_string())
            )
        );
        assert_eq!(
            field_name("Type"),
            ("type_".to_string(), Some("Type".to_string()))
        );
        assert_eq!(
            field_name("TotalLocalStorageGB"),
            (
                "total_local_storage_gb".to_string(),
                Some("TotalLocalStorageGB".to_string())
            )
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_name("VPCEConfiguration"), "VpceConfiguration");
        assert_eq!(schema_const("RouteSettings"), "ROUTE_SETTINGS_SCHEMA");
        assert_eq!(module_name("VPCEConfiguration"), "vpce_configuration");
        assert_eq!(module_name("ApiMapping"), "api_mapping");
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(variant_name("ERROR"), "Error");
        assert_eq!(variant_name("cross-az"), "CrossAz");
        assert_eq!(variant_name("1.0"), "V10");
    }

    #[test]
    fn test_summary() {
        let desc = "The ID of the user. See [Users](https://docs.aws.amazon.com/x) for ``redis``.";
        assert_eq!(summary(desc).as_deref(), Some("The ID of the user."));
        assert_eq!(
            summary("Use ``redis``\n  or [valkey](https://x).").as_deref(),
            Some("Use redis or valkey.")
        );
        assert_eq!(summary("   "), None);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(
            wrap("one two three four", 9),
            vec!["one two", "three", "four"]
        );
        assert!(wrap("", 10).is_empty());
    }
}
