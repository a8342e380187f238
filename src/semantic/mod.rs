//! Semantic attributes synthesized by the analyzer.
//!
//! A [`semantic::SemanticResult`] is what every grammar rule hands back to
//! its caller. Type errors are folded into these results instead of being
//! raised, so one run can report all of them.

pub mod semantic;
