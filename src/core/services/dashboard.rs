use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::Config;
use crate::core::clock::Clock;
use crate::currency::CurrencyCode;
use crate::domain::User;
use crate::storage::ClubStore;

use super::{
    ActiveGuests, ApplicationStats, EventOverview, EventService, GuestService,
    RegistrationStatsService, RevenueReport, RevenueService,
};

/// Everything the admin dashboard renders in one load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub revenue: RevenueReport,
    pub applications: ApplicationStats,
    pub guests: ActiveGuests,
    pub upcoming_events: Vec<EventOverview>,
    pub pending_approvals: Vec<User>,
}

pub struct DashboardService;

impl DashboardService {
    /// Runs every aggregator against the store at the clock's current
    /// instant. A section that fails degrades to its neutral empty value
    /// so one bad query does not take down the whole view.
    pub fn load(store: &dyn ClubStore, clock: &dyn Clock, config: &Config) -> DashboardSnapshot {
        let now = clock.now();
        let currency = CurrencyCode::new(config.currency.clone());

        let revenue = RevenueService::monthly_report(store, &config.revenue_accounts, now)
            .unwrap_or_else(|err| {
                warn!(%err, "revenue rollup failed; rendering zeros");
                RevenueReport::empty(currency)
            });

        let applications = RegistrationStatsService::report(store, now).unwrap_or_else(|err| {
            warn!(%err, "registration stats failed; rendering zeros");
            ApplicationStats::default()
        });

        let guests = GuestService::active_guests(store, now, config.checkout_cutoff_hour)
            .unwrap_or_else(|err| {
                warn!(%err, "active guest query failed; rendering empty");
                ActiveGuests::default()
            });

        let upcoming_events = EventService::upcoming_overview(store, now).unwrap_or_else(|err| {
            warn!(%err, "event overview failed; rendering empty");
            Vec::new()
        });

        let pending_approvals = store.list_pending_approval_users().unwrap_or_else(|err| {
            warn!(%err, "pending approval query failed; rendering empty");
            Vec::new()
        });

        DashboardSnapshot {
            revenue,
            applications,
            guests,
            upcoming_events,
            pending_approvals,
        }
    }
}
