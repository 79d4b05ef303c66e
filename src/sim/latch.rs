//! Edge-latched contact tracking
//!
//! Each boundary (floor, left wall, right wall) and the pointer has its own
//! two-state latch. The onset action (damping, streak increment) fires only on
//! the `Idle -> Contacting` transition, never while contact persists.

use serde::{Deserialize, Serialize};

/// Contact state for one boundary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeLatch {
    /// Not touching (or released)
    #[default]
    Idle,
    /// Touching since an onset that already fired
    Contacting,
}

/// How a latch returns to `Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseRule {
    /// Releases on the first tick without contact. Floor, left wall, pointer.
    OnSeparation,
    /// Releases on the second consecutive contact tick and ignores ticks
    /// without contact. Right wall only: a ball pinned against it re-damps
    /// every other tick, and a one-tick touch leaves the latch engaged until
    /// the next contact.
    OnRepeatContact,
}

impl EdgeLatch {
    /// Feed one tick of contact status. Returns true when the onset action
    /// should fire this tick.
    pub fn observe(&mut self, touching: bool, rule: ReleaseRule) -> bool {
        match (rule, touching, *self) {
            (_, true, EdgeLatch::Idle) => {
                *self = EdgeLatch::Contacting;
                true
            }
            (ReleaseRule::OnSeparation, true, EdgeLatch::Contacting) => false,
            (ReleaseRule::OnSeparation, false, _) => {
                *self = EdgeLatch::Idle;
                false
            }
            (ReleaseRule::OnRepeatContact, true, EdgeLatch::Contacting) => {
                *self = EdgeLatch::Idle;
                false
            }
            (ReleaseRule::OnRepeatContact, false, _) => false,
        }
    }

    #[inline]
    pub fn is_contacting(self) -> bool {
        self == EdgeLatch::Contacting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_separation_fires_once_per_contact() {
        let mut latch = EdgeLatch::default();
        let fired: Vec<bool> = [true, true, true, false, true]
            .iter()
            .map(|&t| latch.observe(t, ReleaseRule::OnSeparation))
            .collect();
        assert_eq!(fired, vec![true, false, false, false, true]);
        assert!(latch.is_contacting());
    }

    #[test]
    fn test_on_separation_releases_immediately() {
        let mut latch = EdgeLatch::Contacting;
        assert!(!latch.observe(false, ReleaseRule::OnSeparation));
        assert_eq!(latch, EdgeLatch::Idle);
    }

    #[test]
    fn test_on_repeat_contact_alternates_while_touching() {
        let mut latch = EdgeLatch::default();
        let fired: Vec<bool> = [true, true, true, true]
            .iter()
            .map(|&t| latch.observe(t, ReleaseRule::OnRepeatContact))
            .collect();
        assert_eq!(fired, vec![true, false, true, false]);
    }

    #[test]
    fn test_on_repeat_contact_stays_engaged_after_single_touch() {
        let mut latch = EdgeLatch::default();
        assert!(latch.observe(true, ReleaseRule::OnRepeatContact));
        // Separation does not release
        for _ in 0..10 {
            assert!(!latch.observe(false, ReleaseRule::OnRepeatContact));
        }
        assert!(latch.is_contacting());
        // Next contact releases instead of firing
        assert!(!latch.observe(true, ReleaseRule::OnRepeatContact));
        assert_eq!(latch, EdgeLatch::Idle);
    }
}
