use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BookingStatus {
    Draft,
    Complete,
    Cancelled,
}

/// A facility stay booked by one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: BookingStatus,
    pub checkout_date: NaiveDate,
}

impl Booking {
    pub fn new(user_id: Uuid, status: BookingStatus, checkout_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            status,
            checkout_date,
        }
    }

    /// Whether the guest is still on site at `now`.
    ///
    /// Only complete bookings count. A booking checking out today lapses at
    /// the daily cutoff (`cutoff_hour:00` UTC); later checkout dates remain
    /// active all day.
    pub fn is_active(&self, now: DateTime<Utc>, cutoff_hour: u32) -> bool {
        if self.status != BookingStatus::Complete {
            return false;
        }
        let today = now.date_naive();
        if self.checkout_date < today {
            return false;
        }
        if self.checkout_date == today {
            let cutoff = NaiveTime::from_hms_opt(cutoff_hour, 0, 0).unwrap_or(NaiveTime::MIN);
            return now.time() < cutoff;
        }
        true
    }
}
