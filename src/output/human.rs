// src/output/human.rs
//! Styled terminal presentation of filtered results

use colored::Colorize;
use std::io::{self, Write};

use crate::record::{format_line, ScopeRecord};

/// Terminal presenter. Colors are used only when stdout is a terminal and
/// coloring has not been disabled; exports never see styling either way.
pub struct HumanOutput {
    use_colors: bool,
}

impl HumanOutput {
    pub fn new(no_color: bool) -> Self {
        Self {
            use_colors: !no_color && is_terminal::is_terminal(io::stdout()),
        }
    }

    /// Print the result header and one line per record.
    pub fn present(&self, records: &[ScopeRecord], monetary: bool) -> anyhow::Result<()> {
        let mut stdout = io::stdout();

        let header = format!("Filtered results ({} found):", records.len());
        if self.use_colors {
            writeln!(stdout, "\n{}", header.green().bold())?;
        } else {
            writeln!(stdout, "\n{}", header)?;
        }

        for record in records {
            writeln!(stdout, "{}", format_line(record, monetary, self.use_colors))?;
        }

        stdout.flush()?;
        Ok(())
    }

    pub fn use_colors(&self) -> bool {
        self.use_colors
    }
}
