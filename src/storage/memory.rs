//! In-memory store backend for tests, demos, and benches.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::currency::{CurrencyCode, Money};
use crate::domain::{
    Booking, BookingStatus, Event, LedgerAccount, Post, PostDraft, TimeWindow, User,
};
use crate::domain::membership::ApprovalState;
use crate::errors::ClubError;

use super::{ClubStore, Result};

#[derive(Default)]
struct Inner {
    accounts: Vec<LedgerAccount>,
    users: Vec<User>,
    bookings: Vec<Booking>,
    events: Vec<Event>,
    posts: Vec<Post>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_account(&self, account: LedgerAccount) {
        self.lock().accounts.push(account);
    }

    pub fn add_user(&self, user: User) -> Uuid {
        let id = user.id;
        self.lock().users.push(user);
        id
    }

    pub fn add_booking(&self, booking: Booking) -> Uuid {
        let id = booking.id;
        self.lock().bookings.push(booking);
        id
    }

    pub fn add_event(&self, event: Event) -> Uuid {
        let id = event.id;
        self.lock().events.push(event);
        id
    }

    pub fn add_post(&self, post: Post) -> Uuid {
        let id = post.id;
        self.lock().posts.push(post);
        id
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ClubStore for MemoryStore {
    fn sum_credits_for_account(&self, account: &str, window: &TimeWindow) -> Result<Money> {
        let inner = self.lock();
        let total = inner
            .accounts
            .iter()
            .find(|candidate| candidate.name == account)
            .map(|found| found.credits_within(window))
            .unwrap_or_else(|| Money::zero(CurrencyCode::default()));
        Ok(total)
    }

    fn count_users_created_between(&self, window: &TimeWindow) -> Result<u64> {
        let inner = self.lock();
        Ok(inner
            .users
            .iter()
            .filter(|user| window.contains(user.created_at))
            .count() as u64)
    }

    fn list_active_bookings(&self, on_or_after: NaiveDate) -> Result<Vec<Booking>> {
        let inner = self.lock();
        Ok(inner
            .bookings
            .iter()
            .filter(|booking| booking.status == BookingStatus::Complete)
            .filter(|booking| booking.checkout_date >= on_or_after)
            .cloned()
            .collect())
    }

    fn list_upcoming_events_with_tiers(&self, after: DateTime<Utc>) -> Result<Vec<Event>> {
        let inner = self.lock();
        let mut upcoming: Vec<Event> = inner
            .events
            .iter()
            .filter(|event| event.starts_at >= after)
            .cloned()
            .collect();
        upcoming.sort_by_key(|event| event.starts_at);
        Ok(upcoming)
    }

    fn list_pending_approval_users(&self) -> Result<Vec<User>> {
        let inner = self.lock();
        Ok(inner
            .users
            .iter()
            .filter(|user| user.approval == ApprovalState::Pending)
            .cloned()
            .collect())
    }

    fn get_post(&self, id: Uuid) -> Result<Option<Post>> {
        let inner = self.lock();
        Ok(inner.posts.iter().find(|post| post.id == id).cloned())
    }

    fn update_post(&self, id: Uuid, draft: &PostDraft, actor: Uuid) -> Result<Post> {
        let mut inner = self.lock();
        let post = inner
            .posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or_else(|| ClubError::NotFound(format!("post {id}")))?;
        post.title = draft.title.clone();
        post.body = draft.body.clone();
        post.updated_at = Utc::now();
        post.updated_by = Some(actor);
        Ok(post.clone())
    }
}
