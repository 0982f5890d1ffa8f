use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::event::AvailabilityBadge;
use crate::storage::ClubStore;

use super::ServiceResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierOverview {
    pub name: String,
    pub sold: u32,
    /// `None` for unlimited tiers.
    pub remaining: Option<u32>,
    pub badge: AvailabilityBadge,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventOverview {
    pub id: Uuid,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub tiers: Vec<TierOverview>,
}

pub struct EventService;

impl EventService {
    /// Upcoming events, earliest first, with per-tier availability badges.
    pub fn upcoming_overview(
        store: &dyn ClubStore,
        now: DateTime<Utc>,
    ) -> ServiceResult<Vec<EventOverview>> {
        let events = store.list_upcoming_events_with_tiers(now)?;
        Ok(events
            .into_iter()
            .map(|event| EventOverview {
                id: event.id,
                title: event.title,
                starts_at: event.starts_at,
                tiers: event
                    .tiers
                    .iter()
                    .map(|tier| TierOverview {
                        name: tier.name.clone(),
                        sold: tier.sold,
                        remaining: tier.remaining(),
                        badge: tier.availability(),
                    })
                    .collect(),
            })
            .collect())
    }
}
