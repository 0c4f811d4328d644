//! Per-player basketball event tallies, rolled up into simplified derived metrics and a composite
//! team score.
//!
//! Events are recorded against named players in a [roster::Roster]. Each player's cumulative
//! tallies feed five metrics (see [metrics]), which are normalised and averaged into the team
//! percentage (see [team]).

pub mod csv;
pub mod error;
pub mod event;
pub mod export;
pub mod file;
pub mod metrics;
pub mod player;
pub mod print;
pub mod roster;
pub mod tally;
pub mod team;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
