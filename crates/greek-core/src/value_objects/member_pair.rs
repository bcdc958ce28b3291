//! Member pair - normalized unordered pair of profile IDs
//!
//! A connection edge is symmetric: (A, B) and (B, A) are the same edge.
//! `MemberPair` stores the smaller UUID first so equality, hashing, and the
//! database uniqueness constraint all treat both orders as one pair.

use uuid::Uuid;

use crate::error::DomainError;

/// Normalized unordered pair of two distinct profile IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberPair {
    first: Uuid,
    second: Uuid,
}

impl MemberPair {
    /// Create a normalized pair from two profile IDs in any order
    ///
    /// # Errors
    /// Returns `DomainError::InvalidTarget` if both IDs are the same profile.
    pub fn new(a: Uuid, b: Uuid) -> Result<Self, DomainError> {
        if a == b {
            return Err(DomainError::InvalidTarget);
        }
        if a < b {
            Ok(Self { first: a, second: b })
        } else {
            Ok(Self { first: b, second: a })
        }
    }

    /// The smaller endpoint (storage order)
    #[inline]
    pub fn first(&self) -> Uuid {
        self.first
    }

    /// The larger endpoint (storage order)
    #[inline]
    pub fn second(&self) -> Uuid {
        self.second
    }

    /// Check whether a profile is one of the endpoints
    #[inline]
    pub fn contains(&self, id: Uuid) -> bool {
        self.first == id || self.second == id
    }

    /// Get the opposite endpoint, if `id` is part of the pair
    pub fn other(&self, id: Uuid) -> Option<Uuid> {
        if id == self.first {
            Some(self.second)
        } else if id == self.second {
            Some(self.first)
        } else {
            None
        }
    }
}
