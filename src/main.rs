//! srclint-scope CLI
//!
//! Entry point for the `srclint-scope` command-line tool.

use clap::{Parser, Subcommand};
use srclint_ignore::{explain, parse_pattern_lines, IgnorePattern};
use srclint_scope::document::{discover_documents, tree_from_documents, WalkRules, DOCUMENT_NAME};
use srclint_scope::resolve::LayerOrigin;
use srclint_scope::{
    default_config, resolve, ConfigDocument, GlobalScope, ResolvedConfig, ScopePath, ScopeTree,
};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "srclint-scope")]
#[command(about = "Configuration resolution for source linting", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the effective configuration for a path
    Resolve {
        /// The path to resolve configuration for
        path: String,

        /// Discover per-directory documents under this root
        #[arg(long)]
        root: Option<PathBuf>,

        /// Replace the built-in defaults with this document
        #[arg(long)]
        defaults: Option<PathBuf>,

        /// Global scope as NAME=FILE@PATH (repeatable, applied in order)
        #[arg(long = "global", value_name = "NAME=FILE@PATH")]
        globals: Vec<String>,

        /// Additional directory patterns to skip during discovery (comma-separated)
        #[arg(long, value_delimiter = ',')]
        skip: Vec<String>,

        /// Output in human-readable format instead of JSON
        #[arg(long)]
        human: bool,
    },

    /// Test whether files are excluded by ignore patterns
    CheckIgnore {
        /// Files to test
        #[arg(required = true)]
        files: Vec<String>,

        /// Ignore patterns to evaluate (default: the config document's)
        #[arg(long, short = 'p')]
        pattern: Vec<String>,

        /// Config document to take patterns from (default: srclint.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Report the deciding pattern for every file
        #[arg(long, short = 'v')]
        verbose: bool,
    },

    /// Verify a configuration document
    Verify {
        /// Path to the config document (default: srclint.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            path,
            root,
            defaults,
            globals,
            skip,
            human,
        } => {
            run_resolve(&path, root, defaults, &globals, &skip, human);
        }
        Commands::CheckIgnore {
            files,
            pattern,
            config,
            verbose,
        } => {
            run_check_ignore(&files, &pattern, config, verbose);
        }
        Commands::Verify { config } => {
            run_verify(config);
        }
    }
}

fn run_resolve(
    query: &str,
    root: Option<PathBuf>,
    defaults: Option<PathBuf>,
    global_specs: &[String],
    skip: &[String],
    human: bool,
) {
    let query = match ScopePath::parse(query) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Invalid query path: {}", e);
            process::exit(2);
        }
    };

    let default = match defaults {
        Some(path) => match ConfigDocument::load(&path) {
            Ok(document) => document.config,
            Err(e) => {
                eprintln!("Error loading defaults: {}", e);
                process::exit(1);
            }
        },
        None => default_config(),
    };

    let mut globals = Vec::with_capacity(global_specs.len());
    for spec in global_specs {
        match parse_global_spec(spec) {
            Ok(global) => globals.push(global),
            Err(e) => {
                eprintln!("Invalid --global {}: {}", spec, e);
                process::exit(1);
            }
        }
    }

    let tree = match root {
        Some(root) => {
            let extra: Vec<&str> = skip.iter().map(String::as_str).collect();
            let rules = match WalkRules::with_patterns(&extra) {
                Ok(rules) => rules,
                Err(e) => {
                    eprintln!("Error compiling skip rules: {}", e);
                    process::exit(1);
                }
            };
            let documents = discover_documents(&root, &rules);
            tree_from_documents(&documents)
        }
        None => ScopeTree::new(),
    };

    let resolved = resolve(&tree, &default, &globals, &query);

    if human {
        print_resolved_human(&query, &resolved);
    } else {
        let report = serde_json::json!({
            "query": query,
            "created_at": chrono::Utc::now(),
            "config": resolved.config,
            "layers": resolved.layers,
        });
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    }
}

/// Parse a `NAME=FILE@PATH` global-scope specification.
fn parse_global_spec(spec: &str) -> Result<GlobalScope, String> {
    let (name, rest) = spec
        .split_once('=')
        .ok_or_else(|| "expected NAME=FILE@PATH".to_string())?;
    let (file, path) = rest
        .split_once('@')
        .ok_or_else(|| "expected NAME=FILE@PATH".to_string())?;

    let document = ConfigDocument::load(Path::new(file)).map_err(|e| e.to_string())?;
    let path = ScopePath::parse(path).map_err(|e| e.to_string())?;

    Ok(GlobalScope {
        path,
        name: name.to_string(),
        config: Some(document.config),
    })
}

fn print_resolved_human(query: &ScopePath, resolved: &ResolvedConfig) {
    println!("Effective configuration for {}", query);
    println!();
    println!("Layers:");
    for (index, layer) in resolved.layers.iter().enumerate() {
        let scope_path = layer
            .path
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        let description = match layer.origin {
            LayerOrigin::Default => "built-in defaults".to_string(),
            LayerOrigin::Global => format!(
                "global '{}' at {}",
                layer.name.as_deref().unwrap_or("unnamed"),
                scope_path
            ),
            LayerOrigin::Tree => format!("scope {}", scope_path),
        };
        println!("  {}. {}", index + 1, description);
    }
    println!();

    match toml::to_string(&resolved.config) {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("Error serializing configuration: {}", e);
            process::exit(1);
        }
    }
}

fn run_check_ignore(
    files: &[String],
    patterns: &[String],
    config_path: Option<PathBuf>,
    verbose: bool,
) {
    let patterns = match load_patterns(patterns, config_path) {
        Ok(patterns) => patterns,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    let mut any_ignored = false;
    for file in files {
        let path = match ScopePath::parse(file) {
            Ok(path) => path,
            Err(e) => {
                eprintln!("Invalid path '{}': {}", file, e);
                process::exit(2);
            }
        };

        let explanation = explain(&patterns, path.components());
        if explanation.ignored {
            any_ignored = true;
            if verbose {
                println!(
                    "{}: ignored by '{}'",
                    file,
                    explanation.pattern.as_deref().unwrap_or("")
                );
            } else {
                println!("{}", file);
            }
        } else if verbose {
            match explanation.pattern {
                Some(pattern) => println!("{}: kept by '{}'", file, pattern),
                None => println!("{}: not ignored", file),
            }
        }
    }

    // Mirror git check-ignore: success means something was ignored.
    process::exit(if any_ignored { 0 } else { 1 });
}

fn load_patterns(
    patterns: &[String],
    config_path: Option<PathBuf>,
) -> Result<Vec<IgnorePattern>, String> {
    if !patterns.is_empty() {
        return parse_pattern_lines(patterns.iter().map(String::as_str))
            .map_err(|e| format!("Invalid pattern: {}", e));
    }

    let path = config_path.unwrap_or_else(|| PathBuf::from(DOCUMENT_NAME));
    let document =
        ConfigDocument::load(&path).map_err(|e| format!("Error loading config: {}", e))?;
    match document.config.ignore_files {
        Some(ignore) => ignore
            .parsed_patterns()
            .map_err(|e| format!("Invalid pattern: {}", e)),
        None => Ok(Vec::new()),
    }
}

fn run_verify(config_path: Option<PathBuf>) {
    let path = config_path.unwrap_or_else(|| PathBuf::from(DOCUMENT_NAME));

    match ConfigDocument::load(&path) {
        Ok(document) => {
            println!("Configuration valid: {}", path.display());
            println!();
            println!("  Digest: sha256:{}", document.digest);
            if let Some(ignore) = &document.config.ignore_files {
                println!("  Ignore patterns: {}", ignore.patterns.len());
            }
            if !document.config.analyzers.is_empty() {
                let rule_count: usize = document
                    .config
                    .analyzers
                    .values()
                    .map(|analyzer| analyzer.rules.len())
                    .sum();
                println!(
                    "  Analyzers: {} ({} rules)",
                    document.config.analyzers.len(),
                    rule_count
                );
            }
        }
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    }
}
