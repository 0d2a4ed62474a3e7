//! CLI entry point over `project_picker_core`.
//!
//! # Responsibility
//! - Build one seeded session store per invocation.
//! - Render the entry table, the vocabulary, or one random filtered pick.

mod cli;

use clap::Parser;
use cli::{CliArgs, Command};
use log::info;
use project_picker_core::{
    init_logging, parse_levels, pick_random, seeded_store, table_rows, Entry, EntryRow,
    FilterCriteria, QueryError, RecordStore, StoreConfig,
};
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = args.log_dir.as_deref() {
        init_logging(&args.resolve_log_level(), &log_dir.to_string_lossy())?;
    }

    let config = match args.config.as_deref() {
        Some(path) => load_config(path)?,
        None => StoreConfig::default(),
    };
    let store = seeded_store(config)?;
    info!(
        "event=cli_start module=cli status=ok entries={}",
        store.entry_count()
    );

    match args.command {
        Command::List => print_table(&table_rows(store.entries())),
        Command::Categories => print_categories(&store),
        Command::Pick {
            money,
            time,
            categories,
        } => {
            let criteria = FilterCriteria {
                money_in: Some(parse_levels(&money)?),
                time_in: Some(parse_levels(&time)?),
                categories_any_of: Some(categories.into_iter().collect()),
            };
            pick(&store, &criteria);
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<StoreConfig, Box<dyn Error>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
    let config = serde_json::from_str(&raw)
        .map_err(|err| format!("invalid config `{}`: {err}", path.display()))?;
    Ok(config)
}

/// Filters once and draws from that same match set.
fn draw<'a>(
    store: &'a RecordStore,
    criteria: &FilterCriteria,
) -> (usize, Result<&'a Entry, QueryError>) {
    let matches = store.filter(criteria);
    let picked = pick_random(&matches).copied();
    (matches.len(), picked)
}

fn pick(store: &RecordStore, criteria: &FilterCriteria) {
    let (count, picked) = draw(store, criteria);
    println!("{count} entries match the filters");

    match picked {
        Ok(entry) => {
            let row = EntryRow::from_entry(entry);
            println!();
            println!("{}", row.title);
            if row.description != "-" {
                println!("{}", row.description);
            }
            println!("money: {}", row.money_level);
            println!("time: {}", row.time_level);
            println!("categories: {}", row.categories);
        }
        Err(err) => println!("warning: {err}"),
    }
}

fn print_categories(store: &RecordStore) {
    let categories = store.categories();
    if categories.is_empty() {
        println!("no categories yet");
        return;
    }
    for (index, name) in categories.iter().enumerate() {
        println!("{}. {} ({})", index + 1, name, store.category_usage(name));
    }
}

fn print_table(rows: &[EntryRow]) {
    println!("All entries ({})", rows.len());
    let headers = ["title", "description", "money", "time", "categories"];
    let cells: Vec<[&str; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.title.as_str(),
                row.description.as_str(),
                row.money_level.as_str(),
                row.time_level.as_str(),
                row.categories.as_str(),
            ]
        })
        .collect();

    let mut widths = headers.map(|header| header.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    print_line(&headers, &widths);
    for line in &cells {
        print_line(line, &widths);
    }
}

fn print_line(cells: &[&str; 5], widths: &[usize; 5]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    println!("{}", padded.join(" | ").trim_end());
}
