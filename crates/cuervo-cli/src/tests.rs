use std::path::PathBuf;

use chrono::NaiveDate;
use cuervo_core::{Environment, Platform, PostType};
use cuervo_import::DataMode;

use super::*;
use crate::analyze::{parse_platform, parse_post_type, ModeArg};

fn config() -> AppConfig {
    AppConfig {
        env: Environment::Test,
        log_level: "warn".to_string(),
        data_dir: PathBuf::from("/data"),
        reports_dir: PathBuf::from("/data/reports"),
        brands_path: PathBuf::from("/config/brands.yaml"),
        targets_path: None,
        demo_seed: 42,
        focal_brand: "Jose Cuervo".to_string(),
    }
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["cuervo-intel"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_templates_with_default_output_dir() {
    let cli = Cli::try_parse_from(["cuervo-intel", "templates"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Templates { ref output_dir }) if output_dir == &PathBuf::from("templates")
    ));
}

#[test]
fn parses_demo_flags() {
    let cli = Cli::try_parse_from([
        "cuervo-intel",
        "demo",
        "--seed",
        "7",
        "--output-dir",
        "out",
        "--json",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Demo {
            seed: Some(7),
            output_dir: Some(ref dir),
            json: true,
        }) if dir == &PathBuf::from("out")
    ));
}

#[test]
fn import_requires_both_directories() {
    let result = Cli::try_parse_from(["cuervo-intel", "import", "--source-dir", "raw"]);
    assert!(result.is_err(), "expected missing --output-dir to be rejected");

    let cli = Cli::try_parse_from([
        "cuervo-intel",
        "import",
        "--source-dir",
        "raw",
        "--output-dir",
        "canonical",
    ])
    .unwrap();
    assert!(matches!(cli.command, Some(Commands::Import { .. })));
}

#[test]
fn analyze_defaults_to_custom_folder_in_data_dir() {
    let cli = Cli::try_parse_from(["cuervo-intel", "analyze"]).unwrap();
    let Some(Commands::Analyze(args)) = cli.command else {
        panic!("expected analyze command");
    };
    assert_eq!(args.mode, ModeArg::Custom);
    assert_eq!(
        args.data_mode(&config()),
        DataMode::CustomFolder {
            dir: PathBuf::from("/data")
        }
    );
    assert_eq!(args.filter(), cuervo_analysis::PostFilter::default());
}

#[test]
fn analyze_builds_filter_from_repeated_flags() {
    let cli = Cli::try_parse_from([
        "cuervo-intel",
        "analyze",
        "--mode",
        "vendor",
        "--data-dir",
        "exports",
        "--brand",
        "Patron",
        "--brand",
        "Jose Cuervo",
        "--platform",
        "tiktok",
        "--post-type",
        "Static Image",
        "--from",
        "2026-01-01",
        "--to",
        "2026-01-31",
    ])
    .unwrap();
    let Some(Commands::Analyze(args)) = cli.command else {
        panic!("expected analyze command");
    };

    assert_eq!(
        args.data_mode(&config()),
        DataMode::VendorImport {
            dir: PathBuf::from("exports")
        }
    );
    let filter = args.filter();
    assert_eq!(filter.brands.len(), 2);
    assert!(filter.platforms.contains(&Platform::TikTok));
    assert!(filter.post_types.contains(&PostType::StaticImage));
    assert_eq!(filter.from, NaiveDate::from_ymd_opt(2026, 1, 1));
    assert_eq!(filter.to, NaiveDate::from_ymd_opt(2026, 1, 31));
}

#[test]
fn analyze_demo_mode_uses_configured_seed() {
    let cli = Cli::try_parse_from(["cuervo-intel", "analyze", "--mode", "demo"]).unwrap();
    let Some(Commands::Analyze(args)) = cli.command else {
        panic!("expected analyze command");
    };
    assert_eq!(args.data_mode(&config()), DataMode::Demo { seed: 42 });
}

#[test]
fn unknown_platform_is_rejected() {
    let result = Cli::try_parse_from(["cuervo-intel", "analyze", "--platform", "facebook"]);
    assert!(result.is_err(), "expected facebook to be rejected");
    assert_eq!(parse_platform("IG"), Ok(Platform::Instagram));
    assert_eq!(parse_platform("Tik Tok"), Ok(Platform::TikTok));
    assert!(parse_post_type("hologram").is_err());
}

#[test]
fn parses_reports_subcommands() {
    let cli = Cli::try_parse_from(["cuervo-intel", "reports", "ingest", "--input-dir", "pdfs"])
        .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Reports {
            command: ReportsCommands::Ingest { ref input_dir }
        }) if input_dir == &PathBuf::from("pdfs")
    ));

    let cli = Cli::try_parse_from(["cuervo-intel", "reports", "list"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Reports {
            command: ReportsCommands::List
        })
    ));
}

#[test]
fn missing_brand_table_falls_back_to_builtin() {
    for env in [Environment::Development, Environment::Test] {
        let registry = load_registry(Path::new("/nonexistent/brands.yaml"), env).unwrap();
        assert!(registry.get("Jose Cuervo").is_some());
    }
}

#[test]
fn production_requires_brand_table_on_disk() {
    let result = load_registry(Path::new("/nonexistent/brands.yaml"), Environment::Production);
    assert!(result.is_err(), "expected missing table to fail in production");
}
