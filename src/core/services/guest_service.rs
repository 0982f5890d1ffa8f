use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::ClubStore;

use super::ServiceResult;

/// How many distinct guests the dashboard previews by avatar.
pub const SAMPLE_SIZE: usize = 3;

/// Point-in-time snapshot of who currently holds an active stay.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActiveGuests {
    pub distinct: usize,
    /// First-seen order of the filtered bookings, capped at [`SAMPLE_SIZE`].
    pub sample: Vec<Uuid>,
}

pub struct GuestService;

impl GuestService {
    /// Counts distinct users with an active booking and samples a few for
    /// display. Re-queries the store on every call; nothing is cached.
    pub fn active_guests(
        store: &dyn ClubStore,
        now: DateTime<Utc>,
        cutoff_hour: u32,
    ) -> ServiceResult<ActiveGuests> {
        let bookings = store.list_active_bookings(now.date_naive())?;

        let mut seen = HashSet::new();
        let mut guests = Vec::new();
        for booking in bookings {
            if !booking.is_active(now, cutoff_hour) {
                continue;
            }
            if seen.insert(booking.user_id) {
                guests.push(booking.user_id);
            }
        }

        Ok(ActiveGuests {
            distinct: guests.len(),
            sample: guests.into_iter().take(SAMPLE_SIZE).collect(),
        })
    }
}
