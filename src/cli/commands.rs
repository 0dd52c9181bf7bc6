//! CLI command implementations.

use std::path::Path;

use crate::config::ParserConfig;
use crate::engine::{KruskalEngine, SpanningForest};
use crate::format::{LoadOutcome, RouteReader};
use crate::types::RouteResult;

use super::report::{format_cost, format_edge, RouteReport};

fn load_and_solve(
    path: &Path,
    config: &ParserConfig,
) -> RouteResult<(LoadOutcome, SpanningForest)> {
    let outcome = RouteReader::new(config.clone()).load(path);
    let forest = KruskalEngine::new().compute(&outcome.graph)?;
    Ok((outcome, forest))
}

fn print_notice(outcome: &LoadOutcome) {
    if let Some(notice) = &outcome.notice {
        println!("Notice: {}", notice);
    }
}

fn notice_json(outcome: &LoadOutcome) -> serde_json::Value {
    match &outcome.notice {
        Some(notice) => serde_json::Value::String(notice.to_string()),
        None => serde_json::Value::Null,
    }
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

/// Show the cheapest edge of the minimum spanning forest.
pub fn cmd_route(path: &Path, config: &ParserConfig, echo: bool, json: bool) -> RouteResult<()> {
    let (outcome, forest) = load_and_solve(path, config)?;
    let report = RouteReport::from_forest(&forest);

    if json {
        let route = match &report {
            RouteReport::Optimal(edge) => serde_json::json!({
                "origin": edge.origin(),
                "destination": edge.destination(),
                "cost": edge.cost(),
            }),
            RouteReport::NoRoute => serde_json::Value::Null,
        };
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "notice": notice_json(&outcome),
            "route": route,
        }));
        return Ok(());
    }

    print_notice(&outcome);
    if echo && !outcome.lines.is_empty() {
        println!("Route map loaded from {}:", path.display());
        for line in &outcome.lines {
            println!("{}", line);
        }
    }
    println!();
    if report.is_found() {
        println!("Optimal route minimizing fuel consumption:");
    }
    println!("{}", report);
    Ok(())
}

/// Print the whole spanning forest in acceptance order.
pub fn cmd_mst(path: &Path, config: &ParserConfig, json: bool) -> RouteResult<()> {
    let (outcome, forest) = load_and_solve(path, config)?;

    if json {
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "notice": notice_json(&outcome),
            "edges": forest.edges(),
            "total_cost": forest.total_cost(),
            "components": forest.component_count(),
        }));
        return Ok(());
    }

    print_notice(&outcome);
    if forest.is_empty() {
        println!("{}", RouteReport::NoRoute);
        return Ok(());
    }
    println!("Spanning forest ({} edges):", forest.len());
    for edge in forest.edges() {
        println!("  {}", format_edge(edge));
    }
    println!("Total fuel: {}L", format_cost(forest.total_cost()));
    Ok(())
}

/// Report how the file was classified and how many rows parsed.
pub fn cmd_detect(path: &Path, config: &ParserConfig, json: bool) -> RouteResult<()> {
    let outcome = RouteReader::new(config.clone()).load(path);
    let layout = outcome.layout.map(|l| l.name()).unwrap_or("none");
    let sentinel = outcome.sentinel_line.map(|i| i + 1);

    if json {
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "notice": notice_json(&outcome),
            "layout": layout,
            "sentinel_line": sentinel,
            "edges": outcome.graph.edge_count(),
            "skipped_rows": outcome.skipped_rows,
        }));
        return Ok(());
    }

    print_notice(&outcome);
    println!("File: {}", path.display());
    println!("Layout: {}", layout);
    match sentinel {
        Some(line) => println!("Sentinel '{}' at line {}", config.sentinel, line),
        None => println!("Sentinel '{}' not found", config.sentinel),
    }
    println!("Edges parsed: {}", outcome.graph.edge_count());
    println!("Rows skipped: {}", outcome.skipped_rows);
    Ok(())
}

/// Graph and forest statistics.
pub fn cmd_stats(path: &Path, config: &ParserConfig, json: bool) -> RouteResult<()> {
    let (outcome, forest) = load_and_solve(path, config)?;
    let graph = &outcome.graph;
    let self_loops = graph.edges().iter().filter(|e| e.is_self_loop()).count();

    if json {
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "notice": notice_json(&outcome),
            "stops": graph.stop_count(),
            "edges": graph.edge_count(),
            "self_loops": self_loops,
            "forest_edges": forest.len(),
            "components": forest.component_count(),
            "total_cost": forest.total_cost(),
        }));
        return Ok(());
    }

    print_notice(&outcome);
    println!("Route Statistics:");
    println!("  Stops: {}", graph.stop_count());
    println!("  Edges: {}", graph.edge_count());
    println!("  Self-loops: {}", self_loops);
    println!("  Forest edges: {}", forest.len());
    println!("  Components: {}", forest.component_count());
    println!("  Total fuel: {}L", format_cost(forest.total_cost()));
    Ok(())
}
