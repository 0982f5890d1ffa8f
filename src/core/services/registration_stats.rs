use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::percent_change;
use crate::domain::badge::Direction;
use crate::domain::period::TimeWindow;
use crate::storage::ClubStore;

use super::ServiceResult;

/// New-registration counts over the rolling month/year windows.
///
/// Unlike revenue, a zero previous period reports a flat 0% change here
/// rather than a first-period sentinel; the asymmetry is deliberate.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationStats {
    pub month_to_date: u64,
    pub prior_month: u64,
    pub monthly_change_percent: i64,
    pub monthly_direction: Direction,
    pub year_to_date: u64,
    pub same_month_last_year: u64,
    pub yearly_change_percent: i64,
    pub yearly_direction: Direction,
}

pub struct RegistrationStatsService;

impl RegistrationStatsService {
    pub fn report(store: &dyn ClubStore, now: DateTime<Utc>) -> ServiceResult<ApplicationStats> {
        let month_to_date = store.count_users_created_between(&TimeWindow::month_to_date(now))?;
        let prior_month = store.count_users_created_between(&TimeWindow::prior_month(now))?;
        let year_to_date = store.count_users_created_between(&TimeWindow::year_to_date(now))?;
        let same_month_last_year =
            store.count_users_created_between(&TimeWindow::same_month_last_year(now))?;

        let monthly_change_percent = count_change(month_to_date, prior_month);
        let yearly_change_percent = count_change(month_to_date, same_month_last_year);

        Ok(ApplicationStats {
            month_to_date,
            prior_month,
            monthly_change_percent,
            monthly_direction: Direction::from_percent(monthly_change_percent),
            year_to_date,
            same_month_last_year,
            yearly_change_percent,
            yearly_direction: Direction::from_percent(yearly_change_percent),
        })
    }
}

fn count_change(current: u64, previous: u64) -> i64 {
    percent_change(Decimal::from(current), Decimal::from(previous)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_previous_period_reports_flat_zero() {
        assert_eq!(count_change(12, 0), 0);
        assert_eq!(Direction::from_percent(count_change(12, 0)), Direction::Stable);
    }

    #[test]
    fn change_rounds_like_the_revenue_formula() {
        assert_eq!(count_change(3, 2), 50);
        assert_eq!(count_change(2, 3), -33);
        assert_eq!(count_change(9, 8), 13); // 12.5 rounds away from zero
    }
}
