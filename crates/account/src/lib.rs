//! Single bank account: deposits, withdrawals, and printed statements.
//!
//! Pure domain logic plus the line-sink seam the statement is written through.

pub mod account;
pub mod service;
pub mod sink;
pub mod statement;
pub mod transaction;

pub use account::{
    Account, AccountCommand, AccountEvent, AccountId, Deposit, Deposited, Withdraw, Withdrawn,
};
pub use service::AccountService;
pub use sink::{LineSink, WriteSink};
pub use statement::{STATEMENT_HEADER, Statement, StatementStyle};
pub use transaction::Transaction;
