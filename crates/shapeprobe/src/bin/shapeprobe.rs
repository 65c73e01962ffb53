//! shapeprobe - name capability checks and timestamps from the command line

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use shapeprobe::syntax::{analyze_file, ShapeConfig, ShapeRegistry, StructShape};
use shapeprobe::{assert_has_name, assert_lacks_name, label_or, NameCapability};

/// Printed when the built-in records pass their capability checks.
const CHECKS_PASSED: &str = "Name capability checks passed";

#[derive(NameCapability)]
struct Person {
    age: i32,
    name: String,
}

#[derive(NameCapability)]
struct Package {
    weight: f64,
    volume: f64,
}

assert_has_name!(Person);
assert_lacks_name!(Package);

/// shapeprobe - name capability checks and timestamps
#[derive(Parser, Debug)]
#[command(name = "shapeprobe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the current local time as YYYY-MM-DD HH:MM:SS
    Now,

    /// Report the name capability of every type in a Rust source file
    Inspect {
        /// The Rust source file to inspect
        file: PathBuf,

        /// Report only this type (module path included, e.g. `geo::Point`)
        #[arg(long = "type")]
        type_name: Option<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,

        /// Additional field identifiers to treat as names
        #[arg(long = "name-field")]
        name_fields: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => run_checks(),
        Some(Commands::Now) => print_now(),
        Some(Commands::Inspect {
            file,
            type_name,
            json,
            name_fields,
        }) => inspect(&file, type_name.as_deref(), json, name_fields),
    }
}

fn run_checks() -> Result<()> {
    println!("{}", checks_line());
    Ok(())
}

/// Exercise the built-in records and return the fixed success line.
fn checks_line() -> &'static str {
    let person = Person {
        age: 36,
        name: "Ada".to_string(),
    };
    let package = Package {
        weight: 2.5,
        volume: 0.75,
    };

    debug!(
        person = %label_or(&person, "person"),
        age = person.age,
        package = %label_or(&package, "package"),
        weight = package.weight,
        volume = package.volume,
        "built-in records"
    );

    CHECKS_PASSED
}

fn print_now() -> Result<()> {
    let mut buffer = [0u8; shapeprobe::TIMESTAMP_CAPACITY];
    let text = shapeprobe::format_now(&mut buffer).context("failed to format current time")?;
    println!("{}", text);
    Ok(())
}

fn inspect(file: &Path, type_name: Option<&str>, json: bool, name_fields: Vec<String>) -> Result<()> {
    let config = config_with_name_fields(name_fields);

    let shapes = analyze_file(file, &config)
        .with_context(|| format!("failed to analyze {}", file.display()))?;

    let selected = select(shapes, type_name, config)
        .with_context(|| format!("failed to inspect {}", file.display()))?;

    println!("{}", render(&selected, json)?);
    Ok(())
}

/// Layer `--name-field` flags over the default conventions.
fn config_with_name_fields(name_fields: Vec<String>) -> ShapeConfig {
    name_fields
        .into_iter()
        .fold(ShapeConfig::default(), ShapeConfig::with_name_field)
}

/// Keep every shape, or only the one named by `--type`.
fn select(
    shapes: Vec<StructShape>,
    type_name: Option<&str>,
    config: ShapeConfig,
) -> Result<Vec<StructShape>> {
    let Some(name) = type_name else {
        return Ok(shapes);
    };

    let registry = ShapeRegistry::with_config(config);
    registry.register_all(shapes)?;
    match registry.get(name) {
        Some(shape) => Ok(vec![shape]),
        None => bail!(
            "type `{}` not found (known: {})",
            name,
            registry.type_names().join(", ")
        ),
    }
}

fn render(shapes: &[StructShape], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(shapes)?);
    }
    Ok(shapes.iter().map(describe).collect::<Vec<_>>().join("\n"))
}

fn describe(shape: &StructShape) -> String {
    match shape.name_field.as_deref().and_then(|field| shape.get(field)) {
        Some(field) => format!("{}: has name (`{}: {}`)", shape.type_name, field.name, field.ty),
        None => format!("{}: no name", shape.type_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapeprobe::syntax::analyze_source;

    const SOURCE: &str = r#"
        struct Person { age: i32, name: String }
        struct Package { weight: f64, volume: f64 }
        struct Book { title: String }
        mod geo { pub struct Point { pub x: f64, pub y: f64 } }
    "#;

    fn shapes(config: &ShapeConfig) -> Vec<StructShape> {
        analyze_source(SOURCE, config).unwrap()
    }

    #[test]
    fn test_default_prints_fixed_line() {
        assert_eq!(checks_line(), "Name capability checks passed");
        assert_eq!(checks_line(), checks_line());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        assert!(Cli::try_parse_from(["shapeprobe"]).unwrap().command.is_none());
        assert!(matches!(
            Cli::try_parse_from(["shapeprobe", "now"]).unwrap().command,
            Some(Commands::Now)
        ));

        let cli = Cli::try_parse_from([
            "shapeprobe",
            "inspect",
            "records.rs",
            "--type",
            "geo::Point",
            "--json",
            "--name-field",
            "title",
            "--name-field",
            "label",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Inspect {
                file,
                type_name,
                json,
                name_fields,
            }) => {
                assert_eq!(file, PathBuf::from("records.rs"));
                assert_eq!(type_name.as_deref(), Some("geo::Point"));
                assert!(json);
                assert_eq!(name_fields, vec!["title", "label"]);
            }
            other => panic!("Expected Inspect, got {:?}", other),
        }
    }

    #[test]
    fn test_select_all_without_type() {
        let config = ShapeConfig::default();
        let selected = select(shapes(&config), None, config).unwrap();
        assert_eq!(selected.len(), 4);
    }

    #[test]
    fn test_select_by_type_path() {
        let config = ShapeConfig::default();
        let selected = select(shapes(&config), Some("geo::Point"), config).unwrap();

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].type_name, "geo::Point");
        assert!(!selected[0].has_name);
    }

    #[test]
    fn test_select_unknown_type_lists_known() {
        let config = ShapeConfig::default();
        let err = select(shapes(&config), Some("Point"), config).unwrap_err();

        assert_eq!(
            err.to_string(),
            "type `Point` not found (known: Book, Package, Person, geo::Point)"
        );
    }

    #[test]
    fn test_name_fields_layer_over_defaults() {
        let config = config_with_name_fields(vec!["title".to_string()]);
        assert!(config.is_name_field("name"));
        assert!(config.is_name_field("title"));

        let selected = select(shapes(&config), Some("Book"), config).unwrap();
        assert!(selected[0].has_name);

        let default = ShapeConfig::default();
        let selected = select(shapes(&default), Some("Book"), default).unwrap();
        assert!(!selected[0].has_name);
    }

    #[test]
    fn test_describe_text() {
        let config = ShapeConfig::default();
        let all = shapes(&config);

        assert_eq!(describe(&all[0]), "Person: has name (`name: String`)");
        assert_eq!(describe(&all[1]), "Package: no name");
        assert_eq!(
            render(&all[..2], false).unwrap(),
            "Person: has name (`name: String`)\nPackage: no name"
        );
    }

    #[test]
    fn test_render_json() {
        let config = ShapeConfig::default();
        let selected = select(shapes(&config), Some("Person"), config).unwrap();

        let json: serde_json::Value = serde_json::from_str(&render(&selected, true).unwrap()).unwrap();
        assert_eq!(json[0]["type_name"], "Person");
        assert_eq!(json[0]["has_name"], true);
        assert_eq!(json[0]["name_field"], "name");
        assert_eq!(json[0]["fields"]["age"]["ty"], "i32");
    }
}
