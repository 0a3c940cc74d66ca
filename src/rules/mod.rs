//! Makao rules: effect bookkeeping and legal-move evaluation.
//!
//! The turn engine owns an [`EffectState`] and calls into the evaluator to:
//! - compute the legal cards for a hand,
//! - apply the effects of a played card,
//! - make the default Jack/Ace declarations.

pub mod effects;
pub mod evaluator;

pub use effects::{EffectKind, EffectState};
pub use evaluator::{
    apply_effects_of_play, condition, default_declaration, legal_moves, meet_demand, Condition,
    Declaration, TriggeredEffects,
};
