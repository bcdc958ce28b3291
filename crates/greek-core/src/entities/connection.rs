//! Connection entity - a mutual edge between two profiles

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::MemberPair;

/// Connection entity, materialized when a request is accepted
///
/// The edge is unordered: `pair` holds the endpoints in normalized order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub id: Uuid,
    pub pair: MemberPair,
    pub created_at: DateTime<Utc>,
}

impl Connection {
    /// Create a new Connection edge
    pub fn new(id: Uuid, pair: MemberPair) -> Self {
        Self {
            id,
            pair,
            created_at: Utc::now(),
        }
    }

    /// Check whether a profile is one of the endpoints
    #[inline]
    pub fn involves(&self, profile_id: Uuid) -> bool {
        self.pair.contains(profile_id)
    }

    /// Get the opposite endpoint for a given member
    pub fn other(&self, profile_id: Uuid) -> Option<Uuid> {
        self.pair.other(profile_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_endpoint() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let edge = Connection::new(Uuid::new_v4(), MemberPair::new(a, b).unwrap());
        assert_eq!(edge.other(a), Some(b));
        assert_eq!(edge.other(b), Some(a));
        assert!(edge.involves(a));
        assert!(!edge.involves(Uuid::new_v4()));
    }
}
