//! Domain models for the back-office: ledger postings, members, bookings,
//! events, posts, and the reporting-period helpers they share.

pub mod badge;
pub mod booking;
pub mod event;
pub mod ledger;
pub mod membership;
pub mod period;
pub mod post;

pub use badge::{BadgeStyle, Direction};
pub use booking::{Booking, BookingStatus};
pub use event::{AvailabilityBadge, Event, TicketTier};
pub use ledger::{EntryDirection, LedgerAccount, LedgerEntry};
pub use membership::{ApprovalState, MembershipKind, RegistrationForm, User};
pub use period::TimeWindow;
pub use post::{Post, PostDraft};
