//! Rule composition: win and collision policy.
//!
//! The track computes raw destinations; [`RuleSet`] decides what they mean.
//! Both concerns stay out of the board module so rule variants never touch
//! the movement arithmetic.

pub mod ruleset;

pub use ruleset::RuleSet;
