use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use passbook_core::ValueObject;

/// Date layout used on statements: zero-padded `DD/MM/YYYY`.
pub const STATEMENT_DATE_FORMAT: &str = "%d/%m/%Y";

/// One recorded balance change (immutable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    date: NaiveDate,
    /// Positive for deposits, negative for withdrawals.
    amount: i64,
    /// Account balance right after this transaction was applied.
    balance: i64,
}

impl ValueObject for Transaction {}

impl Transaction {
    pub fn new(date: NaiveDate, amount: i64, balance: i64) -> Self {
        Self {
            date,
            amount,
            balance,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn formatted_date(&self) -> String {
        self.date.format(STATEMENT_DATE_FORMAT).to_string()
    }

    pub fn is_deposit(&self) -> bool {
        self.amount > 0
    }

    pub fn is_withdrawal(&self) -> bool {
        self.amount < 0
    }
}
