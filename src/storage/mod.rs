pub mod memory;
pub mod uploads;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::currency::Money;
use crate::domain::{Booking, Event, Post, PostDraft, TimeWindow, User};
use crate::errors::ClubError;

pub type Result<T> = std::result::Result<T, ClubError>;

/// Abstraction over the persistence layer this core reads and writes.
///
/// The production implementation wraps the application database; the
/// in-memory backend backs tests, demos, and benches.
pub trait ClubStore: Send + Sync {
    /// Sum of absolute credit amounts posted to `account` within the
    /// window. An unknown account name contributes zero, not an error.
    fn sum_credits_for_account(&self, account: &str, window: &TimeWindow) -> Result<Money>;

    /// Number of user records created within the window.
    fn count_users_created_between(&self, window: &TimeWindow) -> Result<u64>;

    /// Complete bookings whose checkout date is `on_or_after` or later.
    fn list_active_bookings(&self, on_or_after: NaiveDate) -> Result<Vec<Booking>>;

    /// Events starting at or after `after`, earliest first, with tiers.
    fn list_upcoming_events_with_tiers(&self, after: DateTime<Utc>) -> Result<Vec<Event>>;

    fn list_pending_approval_users(&self) -> Result<Vec<User>>;

    fn get_post(&self, id: Uuid) -> Result<Option<Post>>;

    /// Applies the draft to the stored post and returns the updated record.
    fn update_post(&self, id: Uuid, draft: &PostDraft, actor: Uuid) -> Result<Post>;
}

pub use memory::MemoryStore;
pub use uploads::{UploadRequest, UploadSigner, UploadTicket};
