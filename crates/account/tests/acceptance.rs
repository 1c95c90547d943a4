use chrono::NaiveDate;

use passbook_account::{Account, STATEMENT_HEADER, StatementStyle, WriteSink};
use passbook_core::{DomainError, FixedClock};

fn jan_2012(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2012, 1, day).unwrap()
}

fn scenario_account() -> Account<FixedClock> {
    let mut account = Account::with_clock(FixedClock(jan_2012(31)));
    account.deposit_on(1000, jan_2012(10)).unwrap();
    account.deposit_on(2000, jan_2012(13)).unwrap();
    account.withdraw_on(500, jan_2012(14)).unwrap();
    account
}

#[test]
fn full_scenario_compact_statement() {
    let account = scenario_account();
    assert_eq!(account.balance(), 2500);

    let mut lines: Vec<String> = Vec::new();
    account
        .print_statement_styled(StatementStyle::Compact, &mut lines)
        .unwrap();

    assert_eq!(
        lines,
        vec![
            "Date       || Amount || Balance",
            "14/01/2012 || -500 || 2500",
            "13/01/2012 || 2000 || 3000",
            "10/01/2012 || 1000 || 1000",
        ]
    );
}

#[test]
fn full_scenario_aligned_statement_to_writer() {
    let account = scenario_account();

    let mut sink = WriteSink::new(Vec::<u8>::new());
    account.print_statement(&mut sink).unwrap();
    let output = String::from_utf8(sink.into_inner()).unwrap();

    assert_eq!(
        output,
        "Date       || Amount || Balance\n\
         14/01/2012 || -500    || 2500\n\
         13/01/2012 || 2000    || 3000\n\
         10/01/2012 || 1000    || 1000\n"
    );
}

#[test]
fn statement_fields_parse_back_regardless_of_spacing() {
    let account = scenario_account();

    let rows: Vec<Vec<String>> = account.statement_lines()[1..]
        .iter()
        .map(|line| line.split("||").map(|f| f.trim().to_owned()).collect())
        .collect();

    assert_eq!(
        rows,
        vec![
            vec!["14/01/2012", "-500", "2500"],
            vec!["13/01/2012", "2000", "3000"],
            vec!["10/01/2012", "1000", "1000"],
        ]
    );
}

#[test]
fn fresh_account_prints_only_header() {
    let account = Account::with_clock(FixedClock(jan_2012(1)));
    assert_eq!(account.statement_lines(), vec![STATEMENT_HEADER]);
}

#[test]
fn failed_overdraft_leaves_log_alone() {
    let mut account = Account::with_clock(FixedClock(jan_2012(1)));
    account.deposit(500).unwrap();

    assert_eq!(
        account.withdraw(1000),
        Err(DomainError::InsufficientFunds {
            requested: 1000,
            available: 500,
        })
    );
    assert_eq!(account.balance(), 500);
    assert_eq!(account.transactions().len(), 1);
}

#[test]
fn out_of_order_dates_print_in_call_order() {
    let mut account = Account::with_clock(FixedClock(jan_2012(1)));
    account.deposit_on(100, jan_2012(20)).unwrap();
    account.deposit_on(100, jan_2012(5)).unwrap();

    let lines = account.statement_lines();
    assert!(lines[1].starts_with("05/01/2012"));
    assert!(lines[2].starts_with("20/01/2012"));
}
