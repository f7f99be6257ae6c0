//! # Rendering
//!
//! Turns [`CmdResult`]s into terminal output. Table layout is computed on
//! plain strings with display widths (names may hold wide characters); styling
//! is applied afterwards so escape codes never skew the padding.

use super::styles::TRACKER_THEME;
use colored::Colorize;
use emptrack::api::{CmdMessage, CmdResult, Listing, MessageLevel};
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";
pub const EMPTY_TABLE: &str = "No rows found.";

pub(super) fn print_result(result: &CmdResult) {
    if let Some(listing) = &result.listing {
        print_table(&table(listing));
    }
    print_messages(&result.messages);
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Header row and data rows, all as plain cell text.
pub(super) struct Table {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

pub(super) fn table(listing: &Listing) -> Table {
    match listing {
        Listing::Employees(rows) => Table {
            headers: vec![
                "ID",
                "First Name",
                "Last Name",
                "Title",
                "Department",
                "Salary",
                "Manager",
            ],
            rows: rows
                .iter()
                .map(|e| {
                    vec![
                        e.id.to_string(),
                        e.first_name.clone(),
                        e.last_name.clone(),
                        e.title.clone(),
                        e.department.clone(),
                        e.salary.to_string(),
                        e.manager.clone().unwrap_or_default(),
                    ]
                })
                .collect(),
        },
        Listing::Roles(rows) => Table {
            headers: vec!["ID", "Title", "Department", "Salary"],
            rows: rows
                .iter()
                .map(|r| {
                    vec![
                        r.id.to_string(),
                        r.title.clone(),
                        r.department.clone(),
                        r.salary.to_string(),
                    ]
                })
                .collect(),
        },
        Listing::Departments(rows) => Table {
            headers: vec!["ID", "Department"],
            rows: rows
                .iter()
                .map(|d| vec![d.id.to_string(), d.name.clone()])
                .collect(),
        },
    }
}

fn column_widths(table: &Table) -> Vec<usize> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn pad(cell: &str, width: usize) -> String {
    format!("{}{}", cell, " ".repeat(width.saturating_sub(cell.width())))
}

fn join_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &w)| pad(cell, w))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}

/// Plain-text lines for `table`: header, rule, rows.
pub(super) fn table_lines(table: &Table) -> Vec<String> {
    if table.rows.is_empty() {
        return vec![EMPTY_TABLE.to_string()];
    }
    let widths = column_widths(table);
    let mut lines = Vec::with_capacity(table.rows.len() + 2);
    lines.push(join_row(table.headers.iter().copied(), &widths));
    let rules: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    lines.push(join_row(rules.iter().map(String::as_str), &widths));
    for row in &table.rows {
        lines.push(join_row(row.iter().map(String::as_str), &widths));
    }
    lines
}

fn print_table(table: &Table) {
    let lines = table_lines(table);
    println!();
    for (i, line) in lines.iter().enumerate() {
        if i == 0 && !table.rows.is_empty() {
            println!("{}", TRACKER_THEME.header.apply_to(line));
        } else {
            println!("{}", line);
        }
    }
    println!();
}
