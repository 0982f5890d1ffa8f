pub mod dashboard;
pub mod event_service;
pub mod guest_service;
pub mod post_service;
pub mod registration_stats;
pub mod revenue_service;

pub use dashboard::{DashboardService, DashboardSnapshot};
pub use event_service::{EventOverview, EventService, TierOverview};
pub use guest_service::{ActiveGuests, GuestService, SAMPLE_SIZE};
pub use post_service::PostService;
pub use registration_stats::{ApplicationStats, RegistrationStatsService};
pub use revenue_service::{RevenueDelta, RevenueMix, RevenueReport, RevenueService};

use uuid::Uuid;

use crate::errors::ClubError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Club(#[from] ClubError),
    #[error("Post not found: {0}")]
    PostNotFound(Uuid),
    #[error("{0}")]
    Invalid(String),
}
