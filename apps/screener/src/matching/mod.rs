// Skill-matching engine.
// Implements: variant expansion, fuzzy comparison, skill inference, the
// per-skill strategy chain, and report aggregation. Everything here is pure
// and synchronous — I/O stays at the process boundary.

pub mod engine;
pub mod fuzzy;
pub mod inference;
pub mod skill_matcher;
pub mod synonyms;
