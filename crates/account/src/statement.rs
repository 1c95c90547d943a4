//! Statement rendering.
//!
//! A statement is the header followed by one line per transaction, newest
//! first. "Newest" means most recently recorded, not latest `date`.

use std::io;

use crate::sink::LineSink;
use crate::transaction::Transaction;

/// First line of every statement, printed even when there are no transactions.
pub const STATEMENT_HEADER: &str = "Date       || Amount || Balance";

const SEPARATOR: &str = " || ";

/// Column layout for statement lines.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum StatementStyle {
    /// Pads after the amount so short amounts line up under the header.
    #[default]
    Aligned,
    /// Fields joined by the bare separator.
    Compact,
}

/// Renders transactions into statement lines.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Statement {
    style: StatementStyle,
}

impl Statement {
    pub fn new(style: StatementStyle) -> Self {
        Self { style }
    }

    /// Format a single transaction line.
    pub fn format_line(&self, tx: &Transaction) -> String {
        let date = tx.formatted_date();
        match self.style {
            StatementStyle::Aligned => {
                format!("{date}{SEPARATOR}{}    || {}", tx.amount(), tx.balance())
            }
            StatementStyle::Compact => {
                format!("{date}{SEPARATOR}{}{SEPARATOR}{}", tx.amount(), tx.balance())
            }
        }
    }

    /// Header plus one line per transaction, in reverse order.
    pub fn lines(&self, transactions: &[Transaction]) -> Vec<String> {
        let mut lines = Vec::with_capacity(transactions.len() + 1);
        lines.push(STATEMENT_HEADER.to_owned());
        lines.extend(transactions.iter().rev().map(|tx| self.format_line(tx)));
        lines
    }

    /// Write the statement to `sink`, stopping at the first write failure.
    pub fn print<S: LineSink + ?Sized>(
        &self,
        transactions: &[Transaction],
        sink: &mut S,
    ) -> io::Result<()> {
        sink.write_line(STATEMENT_HEADER)?;
        for tx in transactions.iter().rev() {
            sink.write_line(&self.format_line(tx))?;
        }
        Ok(())
    }
}
