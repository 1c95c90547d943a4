use std::io;

use passbook_core::{Clock, DomainResult};

use crate::account::Account;
use crate::sink::LineSink;

/// The behaviour callers rely on from a bank account.
pub trait AccountService {
    /// Deposit `amount`, dated today.
    fn deposit(&mut self, amount: i64) -> DomainResult<()>;

    /// Withdraw `amount`, dated today.
    fn withdraw(&mut self, amount: i64) -> DomainResult<()>;

    /// Write the statement, newest transaction first.
    fn print_statement(&self, sink: &mut dyn LineSink) -> io::Result<()>;
}

impl<C: Clock> AccountService for Account<C> {
    fn deposit(&mut self, amount: i64) -> DomainResult<()> {
        Account::deposit(self, amount)
    }

    fn withdraw(&mut self, amount: i64) -> DomainResult<()> {
        Account::withdraw(self, amount)
    }

    fn print_statement(&self, sink: &mut dyn LineSink) -> io::Result<()> {
        Account::print_statement(self, sink)
    }
}
