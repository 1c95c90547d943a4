use anyhow::{Context, Result};
use chrono::NaiveDate;

use passbook_account::{Account, sink};

mod config;

use config::Config;

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("invalid date {year}-{month:02}-{day:02}"))
}

fn main() -> Result<()> {
    passbook_observability::init(config::log_format_from_env());
    let config = Config::from_env();
    tracing::debug!(?config, "configuration loaded");

    println!("=== Passbook ===\n");

    let mut account = Account::new();

    account.deposit_on(1000, date(2012, 1, 10)?)?;
    account.deposit_on(2000, date(2012, 1, 13)?)?;
    account.withdraw_on(500, date(2012, 1, 14)?)?;

    account
        .print_statement_styled(config.statement_style, &mut sink::stdout())
        .context("failed to write statement")?;

    tracing::info!(balance = account.balance(), "statement printed");
    Ok(())
}
