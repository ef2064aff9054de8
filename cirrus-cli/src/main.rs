use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use serde_json::json;

use cirrus_core::ResourceAttributes;
use cirrus_core::catalog::{Catalog, ResourceType};
use cirrus_core::render::{OutputFormat, RenderConfig};
use cirrus_core::schema::{PropertySchema, SampleMode, UpdateBehavior};
use cirrus_core::template::Template;
use cirrus_core::value::Json;

#[derive(Parser)]
#[command(name = "cirrus")]
#[command(about = "Typed CloudFormation resource catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List known resource types
    List {
        /// Only list types of this service (e.g., ElastiCache)
        #[arg(long, short)]
        service: Option<String>,
    },
    /// Show the properties of a resource type
    Describe {
        /// Resource type name (e.g., AWS::ApiGatewayV2::Stage)
        type_name: String,
    },
    /// Print a sample resource declaration
    Skeleton {
        /// Resource type name (e.g., AWS::ApiGatewayV2::Stage)
        type_name: String,

        /// Only include required properties
        #[arg(long)]
        required_only: bool,

        /// Output format (json or yaml)
        #[arg(long, default_value = "json")]
        format: OutputFormat,

        /// Spaces per JSON indentation level
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
    /// Check the resources of a template against the catalog
    Validate {
        /// Path to a JSON or YAML template
        #[arg(default_value = "template.yaml")]
        file: PathBuf,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("CIRRUS_LOG", "warn"))
        .init();

    let cli = Cli::parse();
    let catalog = cirrus_resources::catalog();

    let result = match cli.command {
        Commands::List { service } => run_list(&catalog, service.as_deref()),
        Commands::Describe { type_name } => run_describe(&catalog, &type_name),
        Commands::Skeleton {
            type_name,
            required_only,
            format,
            indent,
        } => {
            let config = RenderConfig {
                format,
                indent_size: indent,
            };
            run_skeleton(&catalog, &type_name, required_only, &config)
        }
        Commands::Validate { file } => run_validate(&catalog, &file),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "cirrus", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_list(catalog: &Catalog, service: Option<&str>) -> Result<(), String> {
    let types: Vec<&dyn ResourceType> = match service {
        Some(service) => catalog.by_service(service).collect(),
        None => catalog.iter().collect(),
    };
    if types.is_empty() {
        let known: Vec<_> = catalog.services().into_iter().collect();
        return Err(format!(
            "No resource types for service '{}'. Known services: {}",
            service.unwrap_or_default(),
            known.join(", ")
        ));
    }
    for t in types {
        println!("{}", t.type_name());
    }
    Ok(())
}

fn run_describe(catalog: &Catalog, type_name: &str) -> Result<(), String> {
    let schema = catalog.require(type_name).map_err(|e| e.to_string())?.schema();

    println!("{}", schema.type_name.cyan().bold());
    println!("{}", schema.documentation.dimmed());
    println!();
    println!("{}", "Properties:".bold());
    for property in schema.properties {
        println!("{}", describe_property(property));
    }
    if !schema.attributes.is_empty() {
        println!();
        println!("{}", "Attributes:".bold());
        for attribute in schema.attributes {
            println!("  {}", attribute);
        }
    }
    Ok(())
}

/// One line of `describe` output
fn describe_property(property: &PropertySchema) -> String {
    let marker = if property.required {
        "*".red().bold().to_string()
    } else {
        " ".to_string()
    };
    let mut line = format!(
        "{} {}: {}",
        marker,
        property.name,
        property.property_type.to_string().yellow()
    );
    if property.update == UpdateBehavior::Immutable {
        line.push_str(&format!(" ({})", property.update.to_string().magenta()));
    }
    if let Some(values) = property.property_type.allowed_values() {
        line.push_str(&format!(" [{}]", values.join(", ")));
    }
    line
}

/// Sample `{ "Type", "Properties" }` declaration for a resource type
fn skeleton(resource_type: &dyn ResourceType, mode: SampleMode) -> Json {
    json!({
        "Type": resource_type.type_name(),
        "Properties": resource_type.schema().sample(mode),
    })
}

fn run_skeleton(
    catalog: &Catalog,
    type_name: &str,
    required_only: bool,
    config: &RenderConfig,
) -> Result<(), String> {
    let resource_type = catalog.require(type_name).map_err(|e| e.to_string())?;
    let mode = if required_only {
        SampleMode::RequiredOnly
    } else {
        SampleMode::Full
    };
    let output = config.render(&skeleton(resource_type, mode))?;
    println!("{}", output.trim_end());
    Ok(())
}

/// Check resource-level attributes of every declaration and the
/// `Properties` of every catalog resource, returning the number of catalog
/// resources checked
fn validate_template(catalog: &Catalog, template: &Template) -> Result<usize, String> {
    let mut errors = Vec::new();
    let mut checked = 0;

    for (logical_id, declaration) in &template.resources {
        let Some(declaration) = declaration.as_object() else {
            errors.push(format!("{}: declaration must be an object", logical_id));
            continue;
        };
        let mut attributes = declaration.clone();
        let type_name = attributes.remove("Type");
        let properties = attributes.remove("Properties");
        if let Err(e) = serde_json::from_value::<ResourceAttributes>(Json::Object(attributes)) {
            errors.push(format!("{}: {}", logical_id, e));
        }

        let Some(type_name) = type_name.as_ref().and_then(Json::as_str) else {
            errors.push(format!("{}: missing Type", logical_id));
            continue;
        };
        let Some(resource_type) = catalog.get(type_name) else {
            log::info!("{}: {} is not in the catalog, skipping", logical_id, type_name);
            continue;
        };
        let properties = properties.unwrap_or_else(|| json!({}));
        if let Err(e) = resource_type.parse_properties(properties) {
            errors.push(format!("{}: {}", logical_id, e));
        }
        checked += 1;
    }

    if errors.is_empty() {
        Ok(checked)
    } else {
        Err(errors.join("\n"))
    }
}

fn load_template(file: &Path) -> Result<Template, String> {
    let content = fs::read_to_string(file)
        .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;
    let is_json = file.extension().is_some_and(|ext| ext == "json");
    let template = if is_json {
        Template::from_json(&content)
    } else {
        Template::from_yaml(&content)
    };
    template.map_err(|e| format!("Failed to parse {}: {}", file.display(), e))
}

fn run_validate(catalog: &Catalog, file: &Path) -> Result<(), String> {
    let template = load_template(file)?;

    println!("{}", "Validating...".cyan());

    let checked = validate_template(catalog, &template)?;
    let skipped = template.resources.len() - checked;

    println!(
        "{}",
        format!("✓ {} resources validated successfully.", checked)
            .green()
            .bold()
    );
    if skipped > 0 {
        println!("  {} resources of types outside the catalog were skipped", skipped);
    }
    for (logical_id, type_name) in template.resource_types() {
        println!("  • {} ({})", logical_id, type_name.unwrap_or("?"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cirrus_core::schema::PropertyType;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_skeleton_args() {
        let cli = Cli::try_parse_from([
            "cirrus",
            "skeleton",
            "AWS::ElastiCache::User",
            "--required-only",
            "--format",
            "yaml",
        ])
        .unwrap();
        match cli.command {
            Commands::Skeleton {
                type_name,
                required_only,
                format,
                indent,
            } => {
                assert_eq!(type_name, "AWS::ElastiCache::User");
                assert!(required_only);
                assert_eq!(format, OutputFormat::Yaml);
                assert_eq!(indent, 2);
            }
            _ => panic!("expected skeleton"),
        }
        assert!(Cli::try_parse_from(["cirrus", "skeleton", "X", "--format", "toml"]).is_err());
    }

    #[test]
    fn test_skeleton_is_accepted_by_catalog() {
        let catalog = cirrus_resources::catalog();
        let user = catalog.require("AWS::ElastiCache::User").unwrap();
        let declaration = skeleton(user, SampleMode::RequiredOnly);
        assert_eq!(declaration["Type"], "AWS::ElastiCache::User");
        let properties = declaration["Properties"].clone();
        assert_eq!(user.parse_properties(properties.clone()).unwrap(), properties);
    }

    #[test]
    fn test_describe_marks_required_and_immutable() {
        colored::control::set_override(false);
        let catalog = cirrus_resources::catalog();
        let schema = catalog.require("AWS::ElastiCache::User").unwrap().schema();
        let engine = schema.property("Engine").unwrap();
        assert_eq!(
            describe_property(engine),
            "* Engine: UserEngine (Replacement) [redis, valkey]"
        );
        let passwords = schema.property("Passwords").unwrap();
        assert_eq!(describe_property(passwords), "  Passwords: List<String>");
        assert!(matches!(passwords.property_type, PropertyType::List(_)));
    }

    #[test]
    fn test_validate_template() {
        let catalog = cirrus_resources::catalog();
        let template = Template::from_yaml(
            r#"
Resources:
  Project:
    Type: AWS::DeviceFarm::Project
    Properties:
      Name: tests
  Bucket:
    Type: AWS::S3::Bucket
"#,
        )
        .unwrap();
        assert_eq!(validate_template(&catalog, &template), Ok(1));

        let broken = Template::from_yaml(
            r#"
Resources:
  Project:
    Type: AWS::DeviceFarm::Project
    Properties:
      Label: tests
  Orphan:
    Properties: {}
"#,
        )
        .unwrap();
        let err = validate_template(&catalog, &broken).unwrap_err();
        assert!(err.contains("Orphan: missing Type"), "{}", err);
        assert!(err.contains("Project: AWS::DeviceFarm::Project"), "{}", err);
    }

    #[test]
    fn test_validate_resource_attributes() {
        let catalog = cirrus_resources::catalog();
        let template = Template::from_yaml(
            r#"
Resources:
  Project:
    Type: AWS::DeviceFarm::Project
    DeletionPolicy: Retain
    DependsOn: [Bucket]
    Properties:
      Name: tests
  Bucket:
    Type: AWS::S3::Bucket
    DeletionPolicy: Destroy
  Pool:
    Type: AWS::DeviceFarm::Project
    DependOn: Bucket
    Properties:
      Name: pool
"#,
        )
        .unwrap();
        let err = validate_template(&catalog, &template).unwrap_err();
        assert!(err.contains("Bucket: unknown variant `Destroy`"), "{}", err);
        assert!(err.contains("Pool: unknown field `DependOn`"), "{}", err);
        assert!(!err.contains("Project:"), "{}", err);
    }

    #[test]
    fn test_load_template_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stack.json");
        fs::write(&path, r#"{ "Resources": {} }"#).unwrap();
        assert!(load_template(&path).unwrap().resources.is_empty());
        assert!(load_template(&dir.path().join("missing.yaml")).is_err());

        let yaml = dir.path().join("stack.yaml");
        fs::write(
            &yaml,
            "Resources:\n  Project:\n    Type: AWS::DeviceFarm::Project\n    Properties:\n      Name: !Sub \"${AWS::StackName}-tests\"\n",
        )
        .unwrap();
        let template = load_template(&yaml).unwrap();
        let catalog = cirrus_resources::catalog();
        assert_eq!(validate_template(&catalog, &template), Ok(1));
        assert_eq!(
            template.resources["Project"]["Properties"]["Name"],
            json!({ "Fn::Sub": "${AWS::StackName}-tests" })
        );
    }
}
