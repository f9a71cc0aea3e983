//! Allocation Report

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{allocation::Allocation, tables::TableType};

/// Errors that can occur when rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The allocation names a table type missing from the snapshot.
    #[error("Table type {0} is not in the inventory")]
    MissingTableType(String),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Human-readable breakdown of an allocation.
#[derive(Debug, Clone, Copy)]
pub struct AllocationReport<'a> {
    allocation: &'a Allocation,
    tables: &'a [TableType],
}

impl<'a> AllocationReport<'a> {
    /// Create a report for an allocation computed from `tables`.
    pub fn new(allocation: &'a Allocation, tables: &'a [TableType]) -> Self {
        Self { allocation, tables }
    }

    /// Write the table breakdown and summary.
    ///
    /// Rows follow inventory order.
    ///
    /// # Errors
    ///
    /// Returns a [`ReportError`] if an allocated table type is not in the
    /// inventory or writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        let mut builder = Builder::default();

        builder.push_record(["Table", "Seats", "Count", "Min", "Max", "Junction"]);

        for (name, _) in self.allocation.sorted_counts() {
            if !self.tables.iter().any(|table| table.name() == name) {
                return Err(ReportError::MissingTableType(name.to_string()));
            }
        }

        for table in self.tables {
            let count = self.allocation.count(table.name());

            if count == 0 {
                continue;
            }

            builder.push_record([
                table.name().to_string(),
                format!("{}-{}", table.min_capacity(), table.max_capacity()),
                count.to_string(),
                (u64::from(table.min_capacity()) * u64::from(count)).to_string(),
                (u64::from(table.max_capacity()) * u64::from(count)).to_string(),
                if table.accepts_junction() { "yes" } else { "no" }.to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..5), Alignment::right());

        writeln!(out, "\n{table}").map_err(|_err| ReportError::IO)?;

        write_summary(&mut out, self.allocation)
    }
}

fn write_summary(out: &mut impl io::Write, allocation: &Allocation) -> Result<(), ReportError> {
    let lines = [
        ("Party size:", allocation.party_size().to_string()),
        ("Tables used:", allocation.tables_used().to_string()),
        (
            "Seat range:",
            format!("{}-{}", allocation.min_total(), allocation.max_total()),
        ),
        ("Empty seats:", allocation.waste().to_string()),
    ];

    let label_width = lines
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);

    for (label, value) in lines {
        writeln!(out, " {label:<label_width$} {value}").map_err(|_err| ReportError::IO)?;
    }

    writeln!(out).map_err(|_err| ReportError::IO)
}
