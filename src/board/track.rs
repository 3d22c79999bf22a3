//! Movement arithmetic over the circular track.
//!
//! [`BoardConfig::advance`] maps (color, current slot, roll) to a raw
//! destination slot. Four cases:
//!
//! 1. From home: plain circular addition; the token cannot reach its own
//!    tail entry in a single legal roll.
//! 2. Sitting on the own tail entry: the forward distance to the entry is a
//!    full lap, so the token steps into the tail at offset 1.
//! 3. On the main track with the walk reaching the own tail entry: the
//!    remaining steps carry into the tail, uncapped. Overshooting the goal
//!    is the rule layer's concern, not the track's.
//! 4. Already in the own tail: plain addition, again uncapped.
//!
//! ## Crossing detection
//!
//! Whether a walk reaches the tail entry depends on where the entry sits in
//! the numbering. For the color homed at slot 1 the entry is the top slot
//! of the track, so wrapping past the top implies crossing. For every other
//! color the entry precedes the home numerically; a walk that wraps past
//! the top must come all the way around to the home slot to count as having
//! crossed; a wrapped landing exactly on the entry slot stays on the main
//! track and enters the tail on the next turn. The two branches are not
//! symmetric; the tests below pin every color on every supported board.

use super::config::{BoardConfig, Lane};
use crate::core::PlayerColor;

impl BoardConfig {
    /// Raw destination slot for `color` moving `roll` steps from `slot`.
    ///
    /// Total over `slot ∈ [1, end_slot]`, `roll ∈ [1, 12]`. Tail results
    /// are uncapped; [`RuleSet::resolve_slot`](crate::rules::RuleSet::resolve_slot)
    /// turns them into legal positions.
    #[must_use]
    pub fn advance(&self, color: PlayerColor, slot: u16, roll: u16) -> u16 {
        let lane = self.lane(color);

        if slot == lane.home {
            return self.wrap(slot + roll);
        }
        if slot > self.main_length() {
            // Own tail: every slot above the main length is private.
            return slot + roll;
        }
        if slot == lane.tail_entry {
            let steps = roll.saturating_sub(self.main_length()).max(1);
            return self.main_length() + steps;
        }
        if self.crosses_tail_entry(lane, slot, roll) {
            let distance = self.distance_to_tail_entry(lane, slot);
            let steps = roll.saturating_sub(distance).max(1);
            return self.main_length() + steps;
        }
        self.wrap(slot + roll)
    }

    /// Forward steps from `slot` to the lane's tail entry, wrapping if the
    /// entry is behind. `slot == tail_entry` is handled by the caller.
    fn distance_to_tail_entry(&self, lane: Lane, slot: u16) -> u16 {
        if slot < lane.tail_entry {
            lane.tail_entry - slot
        } else {
            (self.main_length() - slot) + lane.tail_entry
        }
    }

    /// Does the walk from `slot` step onto or past the lane's tail entry?
    ///
    /// `slot` is on the main track, not the home and not the entry itself.
    fn crosses_tail_entry(&self, lane: Lane, slot: u16, roll: u16) -> bool {
        let landing = slot + roll;
        let main = self.main_length();

        if lane.tail_entry > lane.home {
            // Entry at the top of the numbering (home slot 1).
            if landing <= main {
                slot < lane.tail_entry && landing >= lane.tail_entry
            } else {
                let wrapped = self.wrap(landing);
                (slot < lane.tail_entry && wrapped >= lane.tail_entry) || slot > wrapped
            }
        } else {
            // Entry numerically before home.
            if landing <= main {
                // The walk stayed below the top of the numbering; the entry
                // is reachable only from below it.
                slot < lane.tail_entry && landing >= lane.tail_entry
            } else {
                let wrapped = self.wrap(landing);
                (slot < lane.tail_entry && wrapped >= lane.tail_entry)
                    || (slot > lane.tail_entry && wrapped >= lane.home)
            }
        }
    }
}
