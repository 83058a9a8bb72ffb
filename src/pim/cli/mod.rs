//! Terminal output for the binary. Nothing in the library depends on this.

pub mod print;
