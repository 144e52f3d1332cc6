//! Column selection.
//!
//! Selection is written against injected readers and writers instead of
//! global stdin, so the prompt loops can be driven by in-memory buffers in
//! tests. The interactive flow mirrors the CLI: ask for the primary key,
//! then a y/n question per remaining column.

use std::io::{self, BufRead, Write};

use anyhow::bail;

use histgen_core::schema::Column;

/// Looks up the chosen primary key among the introspected columns.
#[must_use]
pub fn find_primary_key(columns: &[Column], name: &str) -> Option<Column> {
    columns.iter().find(|c| c.name == name).cloned()
}

/// Prompts for the primary key column name.
pub fn prompt_primary_key<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<String> {
    write!(output, "Enter primary key column name: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

/// Prompts per non-primary-key column whether to track it.
///
/// Answers other than `y` or `n` re-ask the same question. The returned
/// columns keep the order of `columns`, i.e. declaration order.
pub fn prompt_selection<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    columns: &[Column],
    primary_key: &str,
) -> io::Result<Vec<Column>> {
    let mut tracked = Vec::new();

    for column in columns {
        if column.name == primary_key {
            continue;
        }

        loop {
            write!(
                output,
                "Include '{}' column in history table (y/n)? ",
                column.name
            )?;
            output.flush()?;

            let mut answer = String::new();
            if input.read_line(&mut answer)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed during column selection",
                ));
            }

            match answer.trim() {
                "y" => {
                    tracked.push(column.clone());
                    break;
                }
                "n" => break,
                _ => {}
            }
        }
    }

    Ok(tracked)
}

/// Resolves a comma-separated `--columns` value against the schema.
///
/// Every requested name must exist and must not be the primary key. The
/// result is in declaration order regardless of the order given on the
/// command line.
pub fn parse_selection(
    columns: &[Column],
    primary_key: &str,
    names: &str,
) -> anyhow::Result<Vec<Column>> {
    let requested: Vec<&str> = names
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    for name in &requested {
        if *name == primary_key {
            bail!("primary key '{name}' cannot be listed in --columns");
        }
        if !columns.iter().any(|c| c.name == *name) {
            bail!("column '{name}' not found in table schema");
        }
    }

    Ok(columns
        .iter()
        .filter(|c| requested.contains(&c.name.as_str()))
        .cloned()
        .collect())
}
