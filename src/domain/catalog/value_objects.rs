use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Value Object - product identifier as supplied by the host page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Parse a path segment. Anything that is not a plain unsigned integer is `None`.
    pub fn parse_segment(segment: &str) -> Option<Self> {
        segment.trim().parse::<u32>().ok().map(Self)
    }
}

/// Value Object - unit price in dollars
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// `$12.50`
    pub fn label(&self) -> String {
        format!("${:.2}", self.0)
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

pub const MAX_STARS: usize = 5;

/// Value Object - star rating, rendered as five filled/outlined stars
#[derive(Debug, Clone, Copy, PartialEq, Default, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Star `i` (1-based) is filled iff `i <= rating`.
    pub fn stars(&self) -> [bool; MAX_STARS] {
        std::array::from_fn(|i| (i + 1) as f64 <= self.0)
    }
}
