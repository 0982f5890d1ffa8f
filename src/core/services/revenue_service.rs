use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::RevenueAccounts;
use crate::currency::{percent_change, percent_of, CurrencyCode, Money};
use crate::domain::badge::Direction;
use crate::domain::period::TimeWindow;
use crate::storage::ClubStore;

use super::ServiceResult;

/// Period-over-period movement of a revenue total.
///
/// The first period with revenue has nothing to compare against, so it is
/// a distinct state rather than a fake 100% jump.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RevenueDelta {
    FirstPeriod,
    Change { percent: i64, direction: Direction },
}

impl RevenueDelta {
    pub fn from_totals(current: &Money, previous: &Money) -> Self {
        match percent_change(current.amount, previous.amount) {
            None => RevenueDelta::FirstPeriod,
            Some(percent) => RevenueDelta::Change {
                percent,
                direction: Direction::from_percent(percent),
            },
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            RevenueDelta::FirstPeriod => Direction::Stable,
            RevenueDelta::Change { direction, .. } => *direction,
        }
    }
}

/// Current-period revenue split across the three business lines.
///
/// Shares are rounded independently and may sum to 99 or 101; the drift is
/// accepted display behavior, not corrected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueMix {
    pub bookings: Money,
    pub events: Money,
    pub membership: Money,
    pub bookings_percent: i64,
    pub events_percent: i64,
    pub membership_percent: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueReport {
    pub current: Money,
    pub previous: Money,
    pub change: RevenueDelta,
    pub year_ago: Money,
    pub yearly_change: RevenueDelta,
    pub mix: RevenueMix,
}

impl RevenueReport {
    /// Neutral all-zero report used when the ledger cannot be read.
    pub fn empty(currency: CurrencyCode) -> Self {
        let zero = Money::zero(currency);
        Self {
            current: zero.clone(),
            previous: zero.clone(),
            change: RevenueDelta::FirstPeriod,
            year_ago: zero.clone(),
            yearly_change: RevenueDelta::FirstPeriod,
            mix: RevenueMix {
                bookings: zero.clone(),
                events: zero.clone(),
                membership: zero,
                bookings_percent: 0,
                events_percent: 0,
                membership_percent: 0,
            },
        }
    }
}

pub struct RevenueService;

impl RevenueService {
    /// Sum of credit revenue across `accounts` within the window. Unknown
    /// accounts contribute zero.
    pub fn sum_credits<S: AsRef<str>>(
        store: &dyn ClubStore,
        accounts: &[S],
        window: &TimeWindow,
    ) -> ServiceResult<Money> {
        let mut total = Money::zero(CurrencyCode::default());
        for account in accounts {
            let amount = store.sum_credits_for_account(account.as_ref(), window)?;
            total = total.checked_add(&amount)?;
        }
        Ok(total)
    }

    /// Month-to-date revenue with prior-month and year-over-year deltas and
    /// the three-way revenue mix.
    pub fn monthly_report(
        store: &dyn ClubStore,
        accounts: &RevenueAccounts,
        now: DateTime<Utc>,
    ) -> ServiceResult<RevenueReport> {
        let all: Vec<&str> = accounts.all().collect();
        let current_window = TimeWindow::month_to_date(now);

        let current = Self::sum_credits(store, &all, &current_window)?;
        let previous = Self::sum_credits(store, &all, &TimeWindow::prior_month(now))?;
        let year_ago = Self::sum_credits(store, &all, &TimeWindow::same_month_last_year(now))?;

        let bookings = Self::sum_credits(store, &accounts.bookings, &current_window)?;
        let events = Self::sum_credits(store, &accounts.events, &current_window)?;
        let membership = Self::sum_credits(store, &accounts.membership, &current_window)?;

        let mix = RevenueMix {
            bookings_percent: percent_of(bookings.amount, current.amount),
            events_percent: percent_of(events.amount, current.amount),
            membership_percent: percent_of(membership.amount, current.amount),
            bookings,
            events,
            membership,
        };

        Ok(RevenueReport {
            change: RevenueDelta::from_totals(&current, &previous),
            yearly_change: RevenueDelta::from_totals(&current, &year_ago),
            current,
            previous,
            year_ago,
            mix,
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn delta_reports_first_period_when_previous_is_zero() {
        let delta = RevenueDelta::from_totals(&Money::usd(dec!(120)), &Money::usd(dec!(0)));
        assert_eq!(delta, RevenueDelta::FirstPeriod);
        assert_eq!(delta.direction(), Direction::Stable);
    }

    #[test]
    fn delta_carries_signed_percent_and_direction() {
        let up = RevenueDelta::from_totals(&Money::usd(dec!(150)), &Money::usd(dec!(100)));
        assert_eq!(
            up,
            RevenueDelta::Change {
                percent: 50,
                direction: Direction::Up
            }
        );

        let down = RevenueDelta::from_totals(&Money::usd(dec!(80)), &Money::usd(dec!(100)));
        assert_eq!(
            down,
            RevenueDelta::Change {
                percent: -20,
                direction: Direction::Down
            }
        );

        let flat = RevenueDelta::from_totals(&Money::usd(dec!(100)), &Money::usd(dec!(100)));
        assert_eq!(flat.direction(), Direction::Stable);
    }
}
