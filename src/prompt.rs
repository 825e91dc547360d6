// src/prompt.rs
//! Interactive menu selection
//!
//! Validation is pure (`parse_choice` / `parse_multi`): input in, a valid
//! selection or a rejection reason out. The stdin loops below are thin
//! wrappers that re-prompt on rejection and exit the flow cleanly on 'c'.

use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Why an input line was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("not a number: '{0}'")]
    NotANumber(String),
    #[error("option {0} is out of range (1-{1})")]
    OutOfRange(usize, usize),
    #[error("nothing selected")]
    Empty,
}

/// Outcome of a validated menu input.
#[derive(Debug, PartialEq, Eq)]
pub enum Selection<T> {
    Picked(T),
    Cancelled,
}

/// Validate a single-choice input against a menu of `option_count` entries.
/// Accepts a 1-based index or 'c' to cancel; returns the 0-based index.
pub fn parse_choice(input: &str, option_count: usize) -> Result<Selection<usize>, SelectionError> {
    let trimmed = input.trim().to_lowercase();
    if trimmed == "c" {
        return Ok(Selection::Cancelled);
    }

    let number: usize = trimmed
        .parse()
        .map_err(|_| SelectionError::NotANumber(trimmed.clone()))?;

    if number == 0 || number > option_count {
        return Err(SelectionError::OutOfRange(number, option_count));
    }

    Ok(Selection::Picked(number - 1))
}

/// Validate a comma-separated multi-choice input. Tokens that are not valid
/// 1-based indices are dropped; the selection is rejected only when nothing
/// valid remains. Duplicates collapse to the first occurrence.
pub fn parse_multi(
    input: &str,
    option_count: usize,
) -> Result<Selection<Vec<usize>>, SelectionError> {
    let trimmed = input.trim().to_lowercase();
    if trimmed == "c" {
        return Ok(Selection::Cancelled);
    }

    let mut picked = Vec::new();
    for token in trimmed.split(',') {
        if let Ok(number) = token.trim().parse::<usize>() {
            if number >= 1 && number <= option_count {
                let index = number - 1;
                if !picked.contains(&index) {
                    picked.push(index);
                }
            }
        }
    }

    if picked.is_empty() {
        return Err(SelectionError::Empty);
    }

    Ok(Selection::Picked(picked))
}

fn print_menu(prompt: &str, options: &[&str]) {
    println!("{}", prompt.cyan().bold());
    for (index, option) in options.iter().enumerate() {
        println!("{}. {}", index + 1, option);
    }
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt.yellow());
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

/// Ask for a single menu choice, re-prompting until valid.
/// Returns `None` when the operator cancels.
pub fn ask_option(prompt: &str, options: &[&str]) -> Result<Option<usize>> {
    loop {
        print_menu(prompt, options);
        let line = read_line("Select an option (or 'c' to cancel): ")?;

        match parse_choice(&line, options.len()) {
            Ok(Selection::Picked(index)) => return Ok(Some(index)),
            Ok(Selection::Cancelled) => return Ok(None),
            Err(reason) => {
                println!("{}", format!("Invalid option: {}.", reason).red().bold());
            }
        }
    }
}

/// Ask for one or more menu choices (comma separated), re-prompting until
/// at least one is valid. Returns `None` when the operator cancels.
pub fn ask_multi_option(prompt: &str, options: &[&str]) -> Result<Option<Vec<usize>>> {
    loop {
        print_menu(&format!("{} (comma separated):", prompt), options);
        let line = read_line("Select (or 'c' to cancel): ")?;

        match parse_multi(&line, options.len()) {
            Ok(Selection::Picked(indices)) => return Ok(Some(indices)),
            Ok(Selection::Cancelled) => return Ok(None),
            Err(reason) => {
                println!("{}", format!("Invalid option: {}.", reason).red().bold());
            }
        }
    }
}

/// Ask for a free-form line (file path, export base name).
/// Returns `None` when the operator cancels.
pub fn ask_text(prompt: &str) -> Result<Option<String>> {
    let line = read_line(prompt)?;
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("c") {
        return Ok(None);
    }
    Ok(Some(trimmed.to_string()))
}
