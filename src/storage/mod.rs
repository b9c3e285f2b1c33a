//! Rule storage.
//!
//! Rules come from a [`RuleSource`] (a JSON/YAML file or an in-memory list)
//! and are validated into an immutable [`RuleSet`] once at startup.

mod file;
mod memory;
mod rule_set;
pub mod traits;

pub use file::{FileRuleSource, RuleFileFormat};
pub use memory::StaticRuleSource;
pub use rule_set::{IndexedRule, RuleSet};
pub use traits::RuleSource;
