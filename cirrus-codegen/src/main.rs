//! Code generator for cirrus resource modules
//!
//! Generates Rust resource modules from CloudFormation registry schemas.
//!
//! Usage:
//!   aws cloudformation describe-type --type RESOURCE --type-name AWS::ElastiCache::User \
//!     --query Schema --output text | cirrus-codegen --output user.rs
//!
//!   cirrus-codegen --config codegen.toml

mod cfn;
mod generate;
mod naming;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Deserialize;

use cfn::CfnSchema;
use generate::ResourceModule;

#[derive(Parser, Debug)]
#[command(name = "cirrus-codegen")]
#[command(about = "Generate cirrus resource modules from CloudFormation registry schemas")]
struct Args {
    /// Resource type name (e.g., AWS::ElastiCache::User). Defaults to the schema's typeName
    #[arg(long)]
    type_name: Option<String>,

    /// Input schema file (reads from stdin if not provided)
    #[arg(long, short)]
    file: Option<PathBuf>,

    /// Output file (prints to stdout if not provided)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Batch configuration listing services and their schema files
    #[arg(long, conflicts_with_all = ["type_name", "file", "output"])]
    config: Option<PathBuf>,
}

/// Batch configuration.
///
/// ```toml
/// output_dir = "cirrus-resources/src"
///
/// [[services]]
/// name = "ElastiCache"
/// description = "Clusters, replication groups and RBAC users."
/// schemas = ["schemas/aws-elasticache-user.json"]
/// ```
///
/// Relative paths are resolved against the directory of the config file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CodegenConfig {
    output_dir: PathBuf,
    #[serde(default)]
    services: Vec<ServiceConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServiceConfig {
    name: String,
    description: Option<String>,
    schemas: Vec<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("CIRRUS_LOG", "info"))
        .init();

    let args = Args::parse();

    if let Some(config) = &args.config {
        let written = run_batch(config)?;
        log::info!("wrote {} files", written.len());
        return Ok(());
    }

    let input = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read schema from stdin")?;
            buffer
        }
    };

    let schema: CfnSchema =
        serde_json::from_str(&input).context("Failed to parse CloudFormation schema")?;
    let type_name = args.type_name.as_deref().unwrap_or(&schema.type_name);
    if type_name != schema.type_name {
        log::warn!(
            "generating {} from a schema for {}",
            type_name,
            schema.type_name
        );
    }

    let code = ResourceModule::new(&schema, type_name)?.render()?;

    match &args.output {
        Some(path) => {
            fs::write(path, code).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{}", code),
    }

    Ok(())
}

/// Generate every service listed in the config, returning the written paths
fn run_batch(config_path: &Path) -> Result<Vec<PathBuf>> {
    let text = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config: CodegenConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;
    let base = config_path.parent().unwrap_or_else(|| Path::new("."));
    let output_dir = base.join(&config.output_dir);

    let mut written = Vec::new();
    for service in &config.services {
        if service.schemas.is_empty() {
            bail!("Service {} lists no schemas", service.name);
        }
        let dir = output_dir.join(service.name.to_lowercase());
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        let mut modules = Vec::new();
        for schema_path in &service.schemas {
            let path = base.join(schema_path);
            let input = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let schema: CfnSchema = serde_json::from_str(&input)
                .with_context(|| format!("Failed to parse {}", path.display()))?;

            let prefix = format!("AWS::{}::", service.name);
            if !schema.type_name.starts_with(&prefix) {
                bail!(
                    "{} declares {}, which is not an AWS::{} type",
                    path.display(),
                    schema.type_name,
                    service.name
                );
            }

            let module = ResourceModule::new(&schema, &schema.type_name)?;
            let file = dir.join(format!("{}.rs", module.module_name()));
            fs::write(&file, module.render()?)
                .with_context(|| format!("Failed to write {}", file.display()))?;
            log::debug!("{} -> {}", schema.type_name, file.display());
            written.push(file);
            modules.push((module.module_name(), module.rust_name()));
        }

        let mod_rs = dir.join("mod.rs");
        let code =
            generate::render_service_module(&service.name, service.description.as_deref(), &modules);
        fs::write(&mod_rs, code).with_context(|| format!("Failed to write {}", mod_rs.display()))?;
        log::info!("generated {} ({} resource types)", service.name, modules.len());
        written.push(mod_rs);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECT_SCHEMA: &str = r#"{
        "typeName": "AWS::DeviceFarm::Project",
        "description": "Creates a project.",
        "properties": {
            "Name": { "type": "string" },
            "DefaultJobTimeoutMinutes": { "type": "integer" },
            "Arn": { "type": "string" }
        },
        "required": ["Name"],
        "readOnlyProperties": ["/properties/Arn"]
    }"#;

    #[test]
    fn test_batch_generation() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("schemas")).unwrap();
        fs::write(dir.path().join("schemas/project.json"), PROJECT_SCHEMA).unwrap();
        let config = dir.path().join("codegen.toml");
        fs::write(
            &config,
            r#"
output_dir = "src"

[[services]]
name = "DeviceFarm"
description = "Device testing."
schemas = ["schemas/project.json"]
"#,
        )
        .unwrap();

        let written = run_batch(&config).unwrap();
        assert_eq!(
            written,
            vec![
                dir.path().join("src/devicefarm/project.rs"),
                dir.path().join("src/devicefarm/mod.rs"),
            ]
        );

        let project = fs::read_to_string(&written[0]).unwrap();
        assert!(project.contains("pub struct Project {"));
        assert!(project.contains("    pub default_job_timeout_minutes: Option<Value<i64>>,"));
        assert!(project.contains("    attributes: &[\"Arn\"],"));
        let module = fs::read_to_string(&written[1]).unwrap();
        assert!(module.contains("pub use project::Project;"));
    }

    #[test]
    fn test_batch_rejects_foreign_type() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("project.json"), PROJECT_SCHEMA).unwrap();
        let config = dir.path().join("codegen.toml");
        fs::write(
            &config,
            "output_dir = \"out\"\n\n[[services]]\nname = \"ElastiCache\"\nschemas = [\"project.json\"]\n",
        )
        .unwrap();

        let err = run_batch(&config).unwrap_err();
        assert!(err.to_string().contains("not an AWS::ElastiCache type"));
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        let result: Result<CodegenConfig, _> = toml::from_str("output_dir = \"x\"\nextra = 1\n");
        assert!(result.is_err());
    }
}
