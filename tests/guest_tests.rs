mod common;

use uuid::Uuid;

use club_core::core::services::{GuestService, SAMPLE_SIZE};
use club_core::domain::{Booking, BookingStatus};
use club_core::storage::MemoryStore;

use common::{at, date};

const CUTOFF_HOUR: u32 = 11;

#[test]
fn same_day_checkout_respects_the_cutoff() {
    let store = MemoryStore::new();
    let guest = Uuid::new_v4();
    store.add_booking(Booking::new(guest, BookingStatus::Complete, date(2025, 7, 4)));

    let before = GuestService::active_guests(&store, at(2025, 7, 4, 10, 59), CUTOFF_HOUR)
        .expect("before cutoff");
    assert_eq!(before.distinct, 1);

    let after = GuestService::active_guests(&store, at(2025, 7, 4, 11, 1), CUTOFF_HOUR)
        .expect("after cutoff");
    assert_eq!(after.distinct, 0);
    assert!(after.sample.is_empty());
}

#[test]
fn later_checkout_dates_are_active_regardless_of_time() {
    let store = MemoryStore::new();
    let guest = Uuid::new_v4();
    store.add_booking(Booking::new(guest, BookingStatus::Complete, date(2025, 7, 5)));

    let late_night = GuestService::active_guests(&store, at(2025, 7, 4, 23, 45), CUTOFF_HOUR)
        .expect("active");
    assert_eq!(late_night.distinct, 1);
    assert_eq!(late_night.sample, vec![guest]);
}

#[test]
fn duplicate_bookings_for_one_user_count_once() {
    let store = MemoryStore::new();
    let guest = Uuid::new_v4();
    store.add_booking(Booking::new(guest, BookingStatus::Complete, date(2025, 7, 5)));
    store.add_booking(Booking::new(guest, BookingStatus::Complete, date(2025, 7, 8)));

    let guests = GuestService::active_guests(&store, at(2025, 7, 4, 9, 0), CUTOFF_HOUR)
        .expect("guests");
    assert_eq!(guests.distinct, 1);
    assert_eq!(guests.sample, vec![guest]);
}

#[test]
fn sample_is_capped_but_count_is_not() {
    let store = MemoryStore::new();
    let mut guests_in_order = Vec::new();
    for _ in 0..5 {
        let guest = Uuid::new_v4();
        guests_in_order.push(guest);
        store.add_booking(Booking::new(guest, BookingStatus::Complete, date(2025, 7, 6)));
    }

    let snapshot = GuestService::active_guests(&store, at(2025, 7, 4, 9, 0), CUTOFF_HOUR)
        .expect("guests");
    assert_eq!(snapshot.distinct, 5);
    assert_eq!(snapshot.sample.len(), SAMPLE_SIZE);
    // Stable first-seen order of the filtered sequence.
    assert_eq!(snapshot.sample, guests_in_order[..SAMPLE_SIZE]);
}

#[test]
fn incomplete_and_departed_bookings_are_excluded() {
    let store = MemoryStore::new();
    store.add_booking(Booking::new(
        Uuid::new_v4(),
        BookingStatus::Draft,
        date(2025, 7, 6),
    ));
    store.add_booking(Booking::new(
        Uuid::new_v4(),
        BookingStatus::Complete,
        date(2025, 7, 1),
    ));

    let snapshot = GuestService::active_guests(&store, at(2025, 7, 4, 9, 0), CUTOFF_HOUR)
        .expect("guests");
    assert_eq!(snapshot.distinct, 0);
}
