//! CLI binary for nxq: answer dependency questions about an Nx monorepo graph.

mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nxq_core::config::{NxqConfig, OutputFormat};
use nxq_core::snapshot;
use nxq_nav::{PathBudget, TraversalEngine};
use render::Report;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "nxq",
    version,
    about = "Query Nx dependency graphs",
    after_help = "Examples:\n  nxq entities\n  nxq deps my-app\n  nxq deps my-app --type lib\n  nxq dependents core-lib\n  nxq check my-app core-lib\n  nxq common app1 app2\n  nxq levels my-app --typed\n  nxq paths my-app core-lib\n  nxq --graph-file /path/to/nx-output.json entities"
)]
struct Cli {
    /// Project root directory (defaults to current directory)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    /// Path to the Nx graph snapshot (overrides .nxq/config.toml)
    #[arg(short, long, global = true)]
    graph_file: Option<PathBuf>,

    /// Output format: text, json
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all entities grouped by type
    Entities,

    /// Show graph statistics
    Info,

    /// Get all dependencies of an entity, grouped by type
    Deps {
        /// Entity name
        entity: String,

        /// Only list dependencies of this type
        #[arg(short = 't', long = "type")]
        entity_type: Option<String>,
    },

    /// Get all entities that depend on this entity
    Dependents {
        /// Entity name
        entity: String,
    },

    /// Check if SOURCE depends on TARGET
    Check {
        source: String,
        target: String,
    },

    /// Find dependencies shared by two entities
    Common {
        first: String,
        second: String,
    },

    /// Dependencies organized by distance (level 0 = direct)
    Levels {
        /// Entity name
        entity: String,

        /// Group each level by entity type
        #[arg(long)]
        typed: bool,
    },

    /// Enumerate every simple dependency path from SOURCE to TARGET
    Paths {
        source: String,
        target: String,

        /// Stop after this many paths (0 = unlimited)
        #[arg(long)]
        max_paths: Option<usize>,

        /// Longest path to consider, in edges (0 = unlimited)
        #[arg(long)]
        max_depth: Option<usize>,
    },
}

fn get_project_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.project {
        Some(p) => Ok(p.clone()),
        None => std::env::current_dir().context("failed to get current directory"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let project_root = get_project_root(&cli)?;
    let config = NxqConfig::load(&project_root)
        .with_context(|| format!("failed to load config for {}", project_root.display()))?;

    let format = match &cli.format {
        Some(f) => f.parse::<OutputFormat>()?,
        None => config.output.format,
    };
    let graph_file = cli
        .graph_file
        .clone()
        .unwrap_or_else(|| config.graph_file_path(&project_root));

    let engine = TraversalEngine::new(snapshot::load(&graph_file)?);
    tracing::debug!(graph_file = %graph_file.display(), "graph ready");

    let report = run_query(&engine, &graph_file, &config, cli.command);
    let rendered = report
        .render(format)
        .context("failed to serialize report")?;

    match &cli.output {
        Some(path) => write_report(path, &rendered),
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}

fn run_query(
    engine: &TraversalEngine,
    graph_file: &Path,
    config: &NxqConfig,
    command: Commands,
) -> Report {
    match command {
        Commands::Entities => Report::Entities {
            entities: engine.list_entities(),
        },
        Commands::Info => Report::Info {
            graph_file: graph_file.display().to_string(),
            stats: engine.graph().stats(),
        },
        Commands::Deps {
            entity,
            entity_type: Some(entity_type),
        } => Report::DependenciesOfType {
            dependencies: engine.dependencies_of_type(&entity, &entity_type),
            entity,
            entity_type,
        },
        Commands::Deps {
            entity,
            entity_type: None,
        } => Report::Dependencies {
            dependencies: engine.dependencies_by_type(&entity),
            entity,
        },
        Commands::Dependents { entity } => Report::Dependents {
            dependents: engine.dependents_by_type(&entity),
            entity,
        },
        Commands::Check { source, target } => Report::Check {
            depends: engine.is_reachable(&source, &target),
            source,
            target,
        },
        Commands::Common { first, second } => Report::Common {
            common: engine.common_descendants(&first, &second),
            first,
            second,
        },
        Commands::Levels {
            entity,
            typed: false,
        } => Report::Levels {
            levels: engine.levels(&entity),
            entity,
        },
        Commands::Levels {
            entity,
            typed: true,
        } => Report::TypedLevels {
            levels: engine.typed_levels(&entity),
            entity,
        },
        Commands::Paths {
            source,
            target,
            max_paths,
            max_depth,
        } => {
            let budget = PathBudget::from_limits(
                max_paths.unwrap_or(config.paths.max_paths),
                max_depth.unwrap_or(config.paths.max_depth),
            );
            let search = engine.simple_paths_within(&source, &target, budget);
            Report::paths(&source, &target, search)
        }
    }
}

fn write_report(path: &Path, rendered: &str) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }
    std::fs::write(path, format!("{}\n", rendered))
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    eprintln!("Report written to {}", path.display());
    Ok(())
}
