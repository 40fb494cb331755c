//! Evaluates simple prediction strategies against historical World Cup matches, using the
//! bookmaker's quotes as payout weights.

pub mod domain;
pub mod export;
pub mod flatten;
pub mod population;
pub mod print;
pub mod simulator;
pub mod strategy;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../../README.md")]
#[cfg(doc)]
fn readme() {}
