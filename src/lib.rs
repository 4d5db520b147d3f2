//! Single-Track Crossing Simulation Library
//!
//! Simulates a single-track railway crossing shared by many independently
//! arriving trains. Each train is an autonomous actor that loads, waits its
//! turn, crosses the shared track exclusively, and departs, while the
//! scheduler enforces priority ordering, direction alternation, and
//! starvation prevention.

pub mod roster;
pub mod simulation;
