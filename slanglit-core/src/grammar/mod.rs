//! Russian morphology heuristics
//!
//! Everything here is table-driven. There is no generative inflector: forms
//! come from the dictionary, and these modules only decide which one to use.

pub mod agreement;
pub mod context;
pub mod prepositions;
pub mod pronouns;
pub mod suffix;

pub use context::{ContextAnalyzer, ResolvedForm};
pub use pronouns::SubjectPronoun;
