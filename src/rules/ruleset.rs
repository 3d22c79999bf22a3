//! Win and collision policy applied on top of the raw track result.
//!
//! The two optional rules are independent toggles checked directly, not a
//! chain of wrapper objects: there is exactly one policy family and its
//! composition is fixed, so flags beat dynamic dispatch here.
//!
//! - `exact_end`: the goal must be hit exactly; overshooting bounces the
//!   token back by the excess distance.
//! - `hit_home`: landing on an occupied shared slot sends the occupant back
//!   to its home slot. Without it tokens stack freely.

use serde::{Deserialize, Serialize};

use crate::core::Token;

/// The active rule toggles for one game. Immutable once the game starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    exact_end: bool,
    hit_home: bool,
}

impl RuleSet {
    /// The base rules: land on or past the goal to win, hits ignored.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exact_end: false,
            hit_home: false,
        }
    }

    /// Require an exact landing on the goal; overshoot bounces back.
    #[must_use]
    pub const fn with_exact_end(mut self) -> Self {
        self.exact_end = true;
        self
    }

    /// Send an occupant of the destination slot back to its home.
    #[must_use]
    pub const fn with_hit_home(mut self) -> Self {
        self.hit_home = true;
        self
    }

    #[must_use]
    pub const fn exact_end(&self) -> bool {
        self.exact_end
    }

    #[must_use]
    pub const fn hit_home(&self) -> bool {
        self.hit_home
    }

    /// Turn a raw track result into the final slot.
    ///
    /// Under `exact_end` an overshoot past `end` is reflected: the token
    /// walks to the goal and bounces back by the excess. The bounce is a
    /// reflection, not a clamp, and is not floored: a large enough
    /// overshoot may rebound below the tail. Both supported boards keep
    /// the rebound well away from slot zero (see the bound test below).
    #[must_use]
    pub fn resolve_slot(&self, raw: u16, end: u16) -> u16 {
        if self.exact_end && raw > end {
            end - (raw - end)
        } else {
            raw
        }
    }

    /// Does a final slot win the game?
    ///
    /// Base rules win on or past the goal, including a single crossing
    /// jump from the main track, since the track result is uncapped. Under
    /// `exact_end` only the goal itself wins; bounced slots are short of it
    /// by construction.
    #[must_use]
    pub fn is_win(&self, slot: u16, end: u16) -> bool {
        if self.exact_end {
            slot == end
        } else {
            slot >= end
        }
    }

    /// Apply the collision consequence to the occupant of the destination.
    ///
    /// Returns whether a hit landed. The mover is never touched; under the
    /// base rules nothing happens and tokens share the slot.
    pub fn resolve_hit(&self, victim: &mut Token) -> bool {
        if self.hit_home {
            victim.reset_to_home();
            true
        } else {
            false
        }
    }

    /// Human-readable summary of the active rules, one line per policy.
    #[must_use]
    pub fn describe(&self) -> String {
        let win = if self.exact_end {
            "Player must land exactly on the END position to win"
        } else {
            "Player can land on or beyond the END position to win"
        };
        let hit = if self.hit_home {
            "Player will be sent HOME when HIT"
        } else {
            "HITS are ignored, multiple players can occupy the same position"
        };
        format!("{win}\n{hit}")
    }
}
