//! Signature heuristics: informal lexical analysis over single C lines.

pub mod c;
pub mod params;
