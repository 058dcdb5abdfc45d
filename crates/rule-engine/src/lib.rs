//! Rule-Based Response Engine
//!
//! Maps a (smoke, zone) category pair to the highest-priority response
//! action from an immutable rule table.

mod effect;
mod table;

pub use effect::EffectClass;
pub use table::{Action, ActionResolver, Rule, RuleTable, RuleTableError};
