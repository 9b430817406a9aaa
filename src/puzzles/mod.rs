//! Encoders that turn concrete puzzles into CSP models.

pub mod cagey;
pub mod colouring;
pub mod queens;
