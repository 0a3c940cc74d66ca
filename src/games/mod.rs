//! Game implementations built on the card, rule and policy layers.

pub mod makao;
