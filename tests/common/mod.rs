#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use club_core::core::clock::Clock;
use club_core::currency::Money;
use club_core::domain::{LedgerAccount, LedgerEntry};
use club_core::storage::MemoryStore;

/// Clock pinned to one instant so aggregation windows are deterministic.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Seeds a revenue account with one credit per (amount, instant) pair.
pub fn seed_credits(store: &MemoryStore, account: &str, postings: &[(Decimal, DateTime<Utc>)]) {
    let mut ledger = LedgerAccount::new(account);
    for (amount, posted_at) in postings {
        ledger
            .post(LedgerEntry::credit(Money::usd(*amount), *posted_at))
            .expect("post credit");
    }
    store.add_account(ledger);
}
