use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tiers with this many seats or fewer left are flagged as limited.
const LIMITED_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketTier {
    pub name: String,
    pub sold: u32,
    /// `None` means the tier has no capacity limit.
    pub capacity: Option<u32>,
}

impl TicketTier {
    pub fn new(name: impl Into<String>, sold: u32, capacity: Option<u32>) -> Self {
        Self {
            name: name.into(),
            sold,
            capacity,
        }
    }

    pub fn remaining(&self) -> Option<u32> {
        self.capacity.map(|cap| cap.saturating_sub(self.sold))
    }

    pub fn availability(&self) -> AvailabilityBadge {
        match self.remaining() {
            None => AvailabilityBadge::Open,
            Some(0) => AvailabilityBadge::SoldOut,
            Some(left) if left <= LIMITED_THRESHOLD => AvailabilityBadge::Limited,
            Some(_) => AvailabilityBadge::Open,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AvailabilityBadge {
    Open,
    Limited,
    SoldOut,
}

impl fmt::Display for AvailabilityBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AvailabilityBadge::Open => "open",
            AvailabilityBadge::Limited => "limited",
            AvailabilityBadge::SoldOut => "sold_out",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub tiers: Vec<TicketTier>,
}

impl Event {
    pub fn new(title: impl Into<String>, starts_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            starts_at,
            tiers: Vec::new(),
        }
    }

    pub fn with_tier(mut self, tier: TicketTier) -> Self {
        self.tiers.push(tier);
        self
    }
}
