use std::path::PathBuf;

use clap::{error::ErrorKind, Parser};
use colored::Colorize;
use log::LevelFilter;

use crate::catalog;
use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::output::{self, ReportOptions};

pub const DEFAULT_INPUT: &str = "glide_wax.json";
pub const DEFAULT_OUTPUT: &str = "index.html";

fn format_kv_line(label: &str, value: &str) {
    log::info!(":: {:<10}: {}", label, value);
}

fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for_verbosity(verbose))
        .format_target(false)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}

#[derive(Clone, Debug)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub comment_locale: String,
    pub verbose: u8,
    pub no_color: bool,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let input = args
        .input
        .or(cfg.input)
        .unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let output_raw = args
        .output
        .or(cfg.output)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    validation::validate_output_path(&output_raw)
        .map_err(|e| format!("invalid output '{output_raw}': {e}"))?;

    let locale_raw = args
        .comment_locale
        .or(cfg.comment_locale)
        .unwrap_or_else(|| output::report::DEFAULT_COMMENT_LOCALE.to_string());
    let comment_locale = crate::utils::parse_locale_tag(&locale_raw)
        .map_err(|e| format!("invalid comment locale '{locale_raw}': {e}"))?;

    let verbose = args.verbose.max(cfg.verbose.unwrap_or(0));
    let no_color = args.no_color || cfg.no_color.unwrap_or(false);

    let input = config::expand_tilde(&input);
    let output = config::expand_tilde(&output_raw);
    if input == output {
        return Err(format!(
            "input and output point to the same file '{}'",
            input.display()
        ));
    }

    Ok(RunConfig {
        input,
        output,
        comment_locale,
        verbose,
        no_color,
    })
}

/// Loads the catalog, renders the page and writes it. Returns the number of
/// products rendered.
pub fn run(run: &RunConfig) -> Result<usize, String> {
    format_kv_line("Input", &run.input.display().to_string());
    format_kv_line("Output", &run.output.display().to_string());
    format_kv_line("Locale", &run.comment_locale);

    let catalog = catalog::load_catalog(&run.input).map_err(|e| e.to_string())?;
    format_kv_line(
        "Catalog",
        &format!("{} v{}", catalog.metadata.title, catalog.metadata.version),
    );
    format_kv_line("Products", &catalog.len().to_string());
    format_kv_line("Brands", &catalog.brands().len().to_string());

    let opts = ReportOptions {
        comment_locale: run.comment_locale.clone(),
        source_name: crate::utils::display_name(&run.input),
    };
    let html = output::render_html(&catalog, &opts);
    output::write_output(&run.output, &html).map_err(|e| e.to_string())?;

    Ok(catalog.len())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{e}");
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    if let Some(path) = args.init_config.as_deref() {
        let path = config::expand_tilde(path);
        if config::ensure_default_config_file(&path)? {
            println!("Wrote default config to {}", path.display());
        } else {
            println!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    let cfg = match args.config.as_deref() {
        Some(path) => config::load_config(&config::expand_tilde(path), false)?,
        None => ConfigFile::default(),
    };

    let run_cfg = build_run_config(args, cfg)?;
    if run_cfg.no_color {
        colored::control::set_override(false);
    }
    init_logging(run_cfg.verbose);

    let count = run(&run_cfg)?;
    println!(
        "{} {} ({} products)",
        "Generated".bold().green(),
        run_cfg.output.display(),
        count
    );
    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use clap::Parser;

    const CATALOG: &str = r#"{
        "metadata": {"title": "Farts", "version": "1.2", "compilation_date": "2025-10-01", "sources": ["a"]},
        "products": [
            {"name": "A", "brand": "Toko", "format_type": "liquid", "level": "sport", "eco": true},
            {"name": "B", "brand": "Swix", "format_type": "powder", "level": "expert", "eco": false},
            {"name": "C", "brand": "Swix", "format_type": "paste_rub", "level": "beginner", "eco": false}
        ]
    }"#;

    #[test]
    fn no_arguments_use_fixed_paths() {
        let args = CliArgs::parse_from(["glidewax"]);
        let run = build_run_config(args, ConfigFile::default()).unwrap();
        assert_eq!(run.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(run.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(run.comment_locale, "fr_FR");
        assert_eq!(run.verbose, 0);
        assert!(!run.no_color);
    }

    #[test]
    fn cli_flags_override_config() {
        let args = CliArgs::parse_from(["glidewax", "--output", "public/wax.html", "-vv"]);
        let cfg = ConfigFile {
            input: Some("data/wax.yml".to_string()),
            output: Some("ignored.html".to_string()),
            comment_locale: Some("en-us".to_string()),
            verbose: Some(1),
            no_color: Some(true),
        };
        let run = build_run_config(args, cfg).unwrap();
        assert_eq!(run.input, PathBuf::from("data/wax.yml"));
        assert_eq!(run.output, PathBuf::from("public/wax.html"));
        assert_eq!(run.comment_locale, "en_US");
        assert_eq!(run.verbose, 2);
        assert!(run.no_color);
    }

    #[test]
    fn high_verbosity_is_trace_from_either_source() {
        let args = CliArgs::parse_from(["glidewax", "-vvvvv"]);
        let run = build_run_config(args, ConfigFile::default()).unwrap();
        assert_eq!(level_for_verbosity(run.verbose), LevelFilter::Trace);

        let cfg = ConfigFile {
            verbose: Some(9),
            ..ConfigFile::default()
        };
        let run = build_run_config(CliArgs::parse_from(["glidewax"]), cfg).unwrap();
        assert_eq!(level_for_verbosity(run.verbose), LevelFilter::Trace);
    }

    #[test]
    fn non_html_output_is_rejected() {
        let args = CliArgs::parse_from(["glidewax", "-o", "out.json"]);
        let err = build_run_config(args, ConfigFile::default()).unwrap_err();
        assert!(err.contains("--output"));

        let cfg = ConfigFile {
            output: Some("out.txt".to_string()),
            ..ConfigFile::default()
        };
        let err = build_run_config(CliArgs::parse_from(["glidewax"]), cfg).unwrap_err();
        assert!(err.contains("invalid output"));
    }

    #[test]
    fn same_input_and_output_is_rejected() {
        let args = CliArgs::parse_from(["glidewax", "-i", "page.html", "-o", "page.html"]);
        assert!(build_run_config(args, ConfigFile::default()).is_err());
    }

    #[test]
    fn run_writes_page_and_reports_count() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("glide_wax.json");
        let output = dir.path().join("out").join("index.html");
        std::fs::write(&input, CATALOG).unwrap();

        let run_cfg = RunConfig {
            input,
            output: output.clone(),
            comment_locale: "fr_FR".to_string(),
            verbose: 0,
            no_color: true,
        };
        assert_eq!(run(&run_cfg).unwrap(), 3);

        let html = std::fs::read_to_string(&output).unwrap();
        assert_eq!(html.matches("<tr data-brand=").count(), 3);
        assert!(html.contains("<code>glide_wax.json</code> v1.2"));
        assert!(html.contains(r#"<span class="count" id="count">3 produits</span>"#));
    }

    #[test]
    fn parse_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("glide_wax.json");
        let output = dir.path().join("index.html");
        std::fs::write(&input, r#"{"metadata": {"title": "T"}, "products": []}"#).unwrap();

        let run_cfg = RunConfig {
            input,
            output: output.clone(),
            comment_locale: "fr_FR".to_string(),
            verbose: 0,
            no_color: true,
        };
        let err = run(&run_cfg).unwrap_err();
        assert!(err.contains("missing field `version`"));
        assert!(!output.exists());
    }

    #[test]
    fn missing_input_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let run_cfg = RunConfig {
            input: dir.path().join("glide_wax.json"),
            output: dir.path().join("index.html"),
            comment_locale: "fr_FR".to_string(),
            verbose: 0,
            no_color: true,
        };
        let err = run(&run_cfg).unwrap_err();
        assert!(err.contains("failed to read catalog"));
    }
}
