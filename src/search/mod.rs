pub mod alphabeta;
pub mod clock;
pub mod eval;
