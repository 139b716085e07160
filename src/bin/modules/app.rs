use super::cli::Cli;
use super::error::CliError;
use super::io;
use elemtab::{ElementRecord, ElementTable, default_table};

pub fn run(args: Cli) -> Result<(), CliError> {
    let custom_table;
    let table: &ElementTable = if let Some(table_path) = &args.table.table {
        custom_table = ElementTable::load_from_file(table_path)?;
        &custom_table
    } else {
        default_table()
    };

    let selected: Vec<(usize, &ElementRecord)> = if args.queries.is_empty() {
        table.iter().enumerate().collect()
    } else {
        let mut selected = Vec::with_capacity(args.queries.len());
        for query in &args.queries {
            let index = resolve_query(table, query)?;
            selected.push((index, table.record(index)?));
        }
        selected
    };

    let source_name = match &args.table.table {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    };

    let writer = io::get_writer(&args.output.output)?;
    io::write_records(
        writer,
        &selected,
        &args.output.format,
        args.output.precision,
        &source_name,
    )?;

    Ok(())
}

/// Resolves a query argument to a table index. Anything that starts like a number is treated
/// as an atomic-number index; everything else as a symbol.
fn resolve_query(table: &ElementTable, query: &str) -> Result<usize, CliError> {
    let trimmed = query.trim();

    let starts_numeric = trimmed
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '+');

    if starts_numeric {
        let index: i64 = trimmed.parse().map_err(|_| CliError::Query {
            query: query.to_string(),
            details: "not a valid atomic-number index".to_string(),
        })?;
        if index < 0 || index as usize >= table.len() {
            return Err(CliError::Query {
                query: query.to_string(),
                details: format!("index must be within 0..={}", table.len() - 1),
            });
        }
        Ok(index as usize)
    } else {
        table
            .index_of(&trimmed.to_ascii_lowercase())
            .ok_or_else(|| CliError::Query {
                query: query.to_string(),
                details: "unknown element symbol".to_string(),
            })
    }
}
