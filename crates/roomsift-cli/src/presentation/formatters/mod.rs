pub mod number;
pub mod style;
