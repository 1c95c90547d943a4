use std::io;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use passbook_core::{
    Aggregate, AggregateId, AggregateRoot, Clock, DomainError, DomainResult, SystemClock,
};
use passbook_events::Event;

use crate::sink::LineSink;
use crate::statement::{Statement, StatementStyle};
use crate::transaction::Transaction;

/// Account identifier (aggregate id).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub AggregateId);

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Aggregate root: a single bank account.
///
/// Owns the running balance and the append-only transaction log. The log is
/// kept in the order operations happened; dates are whatever the caller
/// supplied and are never used for ordering.
#[derive(Debug, Clone)]
pub struct Account<C = SystemClock> {
    id: AccountId,
    balance: i64,
    transactions: Vec<Transaction>,
    version: u64,
    clock: C,
}

impl Account {
    /// Fresh account dated by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Account<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            id: AccountId(AggregateId::new()),
            balance: 0,
            transactions: Vec::new(),
            version: 0,
            clock,
        }
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Snapshot of the transaction log, oldest first.
    ///
    /// The returned vector is owned by the caller; changing it has no effect
    /// on the account.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Deposit `amount` dated today according to the account's clock.
    pub fn deposit(&mut self, amount: i64) -> DomainResult<()> {
        let date = self.clock.today();
        self.deposit_on(amount, date)
    }

    pub fn deposit_on(&mut self, amount: i64, date: NaiveDate) -> DomainResult<()> {
        self.record(AccountCommand::Deposit(Deposit { amount, date }))
    }

    /// Withdraw `amount` dated today according to the account's clock.
    pub fn withdraw(&mut self, amount: i64) -> DomainResult<()> {
        let date = self.clock.today();
        self.withdraw_on(amount, date)
    }

    pub fn withdraw_on(&mut self, amount: i64, date: NaiveDate) -> DomainResult<()> {
        self.record(AccountCommand::Withdraw(Withdraw { amount, date }))
    }

    /// Statement lines in the default layout, header first.
    pub fn statement_lines(&self) -> Vec<String> {
        Statement::default().lines(&self.transactions)
    }

    pub fn print_statement<S: LineSink + ?Sized>(&self, sink: &mut S) -> io::Result<()> {
        self.print_statement_styled(StatementStyle::default(), sink)
    }

    pub fn print_statement_styled<S: LineSink + ?Sized>(
        &self,
        style: StatementStyle,
        sink: &mut S,
    ) -> io::Result<()> {
        Statement::new(style).print(&self.transactions, sink)
    }

    fn record(&mut self, command: AccountCommand) -> DomainResult<()> {
        match self.execute(&command) {
            Ok(events) => {
                for event in &events {
                    tracing::debug!(
                        account_id = %self.id,
                        event_type = event.event_type(),
                        amount = event.signed_amount(),
                        date = %event.occurred_on(),
                        balance = self.balance,
                        "transaction recorded"
                    );
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!(account_id = %self.id, error = %err, "account command rejected");
                Err(err)
            }
        }
    }
}

impl<C> AggregateRoot for Account<C> {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: Deposit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    pub amount: i64,
    pub date: NaiveDate,
}

/// Command: Withdraw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdraw {
    pub amount: i64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountCommand {
    Deposit(Deposit),
    Withdraw(Withdraw),
}

/// Event: Deposited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposited {
    pub account_id: AccountId,
    pub amount: i64,
    pub date: NaiveDate,
}

/// Event: Withdrawn. `amount` is the positive magnitude taken out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawn {
    pub account_id: AccountId,
    pub amount: i64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountEvent {
    Deposited(Deposited),
    Withdrawn(Withdrawn),
}

impl AccountEvent {
    /// Balance change: positive for deposits, negative for withdrawals.
    pub fn signed_amount(&self) -> i64 {
        match self {
            AccountEvent::Deposited(e) => e.amount,
            AccountEvent::Withdrawn(e) => -e.amount,
        }
    }
}

impl Event for AccountEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AccountEvent::Deposited(_) => "account.deposited",
            AccountEvent::Withdrawn(_) => "account.withdrawn",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_on(&self) -> NaiveDate {
        match self {
            AccountEvent::Deposited(e) => e.date,
            AccountEvent::Withdrawn(e) => e.date,
        }
    }
}

impl<C> Aggregate for Account<C> {
    type Command = AccountCommand;
    type Event = AccountEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        let signed = event.signed_amount();

        self.balance += signed;
        self.transactions
            .push(Transaction::new(event.occurred_on(), signed, self.balance));

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            AccountCommand::Deposit(cmd) => self.handle_deposit(cmd),
            AccountCommand::Withdraw(cmd) => self.handle_withdraw(cmd),
        }
    }
}

impl<C> Account<C> {
    fn ensure_positive(amount: i64) -> Result<(), DomainError> {
        if amount <= 0 {
            return Err(DomainError::invalid_amount(amount));
        }
        Ok(())
    }

    fn handle_deposit(&self, cmd: &Deposit) -> Result<Vec<AccountEvent>, DomainError> {
        Self::ensure_positive(cmd.amount)?;

        if self.balance.checked_add(cmd.amount).is_none() {
            return Err(DomainError::invalid_amount(cmd.amount));
        }

        Ok(vec![AccountEvent::Deposited(Deposited {
            account_id: self.id,
            amount: cmd.amount,
            date: cmd.date,
        })])
    }

    fn handle_withdraw(&self, cmd: &Withdraw) -> Result<Vec<AccountEvent>, DomainError> {
        Self::ensure_positive(cmd.amount)?;

        if cmd.amount > self.balance {
            return Err(DomainError::insufficient_funds(cmd.amount, self.balance));
        }

        Ok(vec![AccountEvent::Withdrawn(Withdrawn {
            account_id: self.id,
            amount: cmd.amount,
            date: cmd.date,
        })])
    }
}
