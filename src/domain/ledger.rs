use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::{CurrencyCode, Money};
use crate::errors::ClubError;

use super::period::TimeWindow;

/// Signed direction of a double-entry posting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntryDirection {
    Debit,
    Credit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub direction: EntryDirection,
    pub amount: Money,
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn credit(amount: Money, created_at: DateTime<Utc>) -> Self {
        Self::new(EntryDirection::Credit, amount, created_at)
    }

    pub fn debit(amount: Money, created_at: DateTime<Utc>) -> Self {
        Self::new(EntryDirection::Debit, amount, created_at)
    }

    fn new(direction: EntryDirection, amount: Money, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            direction,
            amount,
            created_at,
        }
    }
}

/// A named revenue account holding double-entry postings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerAccount {
    pub name: String,
    pub currency: CurrencyCode,
    #[serde(default)]
    pub entries: Vec<LedgerEntry>,
}

impl LedgerAccount {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            currency: CurrencyCode::default(),
            entries: Vec::new(),
        }
    }

    /// Posts an entry, rejecting amounts in a different currency than the
    /// account's.
    pub fn post(&mut self, entry: LedgerEntry) -> Result<(), ClubError> {
        if entry.amount.currency != self.currency {
            return Err(ClubError::CurrencyMismatch(
                self.currency.as_str().into(),
                entry.amount.currency.as_str().into(),
            ));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Sum of absolute credit amounts posted within the window. Debits and
    /// out-of-window entries do not count.
    pub fn credits_within(&self, window: &TimeWindow) -> Money {
        self.entries
            .iter()
            .filter(|entry| entry.direction == EntryDirection::Credit)
            .filter(|entry| window.contains(entry.created_at))
            .fold(Money::zero(self.currency.clone()), |total, entry| {
                Money::new(total.amount + entry.amount.amount.abs(), total.currency)
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    use super::*;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, d, 10, 0, 0).unwrap()
    }

    #[test]
    fn credits_within_ignores_debits_and_out_of_window_entries() {
        let mut account = LedgerAccount::new("membership_revenue");
        account
            .post(LedgerEntry::credit(Money::usd(dec!(100)), day(5)))
            .expect("post");
        account
            .post(LedgerEntry::debit(Money::usd(dec!(40)), day(6)))
            .expect("post");
        account
            .post(LedgerEntry::credit(Money::usd(dec!(-25)), day(7)))
            .expect("post");
        account
            .post(LedgerEntry::credit(Money::usd(dec!(999)), day(20)))
            .expect("post");

        let window = TimeWindow::new(day(1), day(10)).expect("window");
        // Credits count as absolute values: 100 + |-25|.
        assert_eq!(account.credits_within(&window), Money::usd(dec!(125)));
    }

    #[test]
    fn posting_foreign_currency_is_rejected() {
        let mut account = LedgerAccount::new("event_revenue");
        let entry = LedgerEntry::credit(
            Money::new(dec!(10), crate::currency::CurrencyCode::new("EUR")),
            day(1),
        );
        assert!(account.post(entry).is_err());
    }
}
