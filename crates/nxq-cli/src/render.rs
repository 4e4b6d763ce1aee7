//! Text and JSON rendering of query results.

use nxq_core::config::OutputFormat;
use nxq_core::graph::GraphStats;
use nxq_nav::{Levels, PathSearch, SimplePath, TypeGroups, TypeSets, TypedLevels};
use serde::Serialize;

/// The answer to one CLI query, ready to render.
#[derive(Debug, Serialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum Report {
    Entities {
        entities: TypeGroups,
    },
    Info {
        graph_file: String,
        stats: GraphStats,
    },
    Dependencies {
        entity: String,
        dependencies: TypeGroups,
    },
    DependenciesOfType {
        entity: String,
        entity_type: String,
        dependencies: Vec<String>,
    },
    Dependents {
        entity: String,
        dependents: TypeGroups,
    },
    Check {
        source: String,
        target: String,
        depends: bool,
    },
    Common {
        first: String,
        second: String,
        common: TypeSets,
    },
    Levels {
        entity: String,
        levels: Levels,
    },
    TypedLevels {
        entity: String,
        levels: TypedLevels,
    },
    Paths {
        source: String,
        target: String,
        paths: Vec<SimplePath>,
        /// More paths exist beyond the configured limit.
        truncated: bool,
    },
}

impl Report {
    pub fn paths(source: &str, target: &str, search: PathSearch) -> Self {
        Report::Paths {
            source: source.to_string(),
            target: target.to_string(),
            paths: search.paths,
            truncated: search.truncated,
        }
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            Report::Entities { entities } => format_groups("All Entities", entities),
            Report::Info { graph_file, stats } => format!(
                "Graph: {}\nEntities: {}\nDependencies: {}\nEntity types: {}\nExternal names: {}",
                graph_file, stats.entities, stats.edges, stats.entity_types, stats.dangling_names
            ),
            Report::Dependencies {
                entity,
                dependencies,
            } => format_groups(&format!("All Dependencies for '{}'", entity), dependencies),
            Report::DependenciesOfType {
                entity,
                entity_type,
                dependencies,
            } => format_list(
                &format!("Dependencies of '{}' with type '{}'", entity, entity_type),
                dependencies,
            ),
            Report::Dependents { entity, dependents } => {
                format_groups(&format!("Entities that depend on '{}'", entity), dependents)
            }
            Report::Check {
                source,
                target,
                depends,
            } => {
                let verb = if *depends {
                    "depends on"
                } else {
                    "does NOT depend on"
                };
                format!("{} {} {}", source, verb, target)
            }
            Report::Common {
                first,
                second,
                common,
            } => {
                let as_lists: TypeGroups = common
                    .iter()
                    .map(|(kind, names)| (kind.clone(), names.iter().cloned().collect()))
                    .collect();
                format_groups(
                    &format!("Common dependencies between '{}' and '{}'", first, second),
                    &as_lists,
                )
            }
            Report::Levels { entity, levels } => format_levels(entity, levels),
            Report::TypedLevels { entity, levels } => format_typed_levels(entity, levels),
            Report::Paths {
                source,
                target,
                paths,
                truncated,
            } => format_paths(source, target, paths, *truncated),
        }
    }
}

fn format_groups(title: &str, groups: &TypeGroups) -> String {
    let mut out = format!("{}:", title);
    if groups.is_empty() {
        out.push_str("\n  No items found");
    }
    for (kind, names) in groups {
        out.push_str(&format!("\n  {} ({}): {}", kind, names.len(), names.join(", ")));
    }
    out
}

fn format_list(title: &str, items: &[String]) -> String {
    if items.is_empty() {
        format!("{}:\n  No items found", title)
    } else {
        format!(
            "{}:\n  Found {} items: {}",
            title,
            items.len(),
            items.join(", ")
        )
    }
}

fn format_levels(entity: &str, levels: &Levels) -> String {
    let mut out = format!("Level-wise Dependencies for '{}':\n{}", entity, "=".repeat(50));
    let mut total = 0;
    for (level, names) in levels {
        total += names.len();
        out.push_str(&format!(
            "\n\nLevel {} ({} dependencies):\n  {}",
            level,
            names.len(),
            names.join(", ")
        ));
    }
    out.push_str(&format!(
        "\n\nSummary:\nTotal levels: {}\nTotal dependencies: {}",
        levels.len(),
        total
    ));
    out
}

fn format_typed_levels(entity: &str, levels: &TypedLevels) -> String {
    let mut out = format!(
        "Level-wise Dependencies with Types for '{}':\n{}",
        entity,
        "=".repeat(60)
    );
    for (level, groups) in levels {
        let at_level: usize = groups.values().map(Vec::len).sum();
        out.push_str(&format!(
            "\n\nLevel {} - Total: {} dependencies\n{}",
            level,
            at_level,
            "-".repeat(40)
        ));
        for (kind, names) in groups {
            out.push_str(&format!("\n  {} ({}):", kind, names.len()));
            let mut sorted: Vec<&String> = names.iter().collect();
            sorted.sort();
            for name in sorted {
                out.push_str(&format!("\n    - {}", name));
            }
        }
    }
    out
}

fn format_paths(source: &str, target: &str, paths: &[SimplePath], truncated: bool) -> String {
    if paths.is_empty() {
        let mut out = format!("No paths found from '{}' to '{}'", source, target);
        if truncated {
            out.push_str(" within the path limit");
        }
        return out;
    }

    let mut out = format!(
        "All paths from '{}' to '{}' ({} paths found):\n",
        source,
        target,
        paths.len()
    );
    for (i, path) in paths.iter().enumerate() {
        out.push_str(&format!("\nPath {}: {}", i + 1, path.join(" -> ")));
    }
    if truncated {
        out.push_str("\n\nStopped at the path limit; more paths exist (raise --max-paths).");
    }
    out
}
