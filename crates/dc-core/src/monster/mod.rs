//! Monsters

mod pursuit;

pub use pursuit::{SCAN_ORDER, pursue};
