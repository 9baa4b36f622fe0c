use serde::{Deserialize, Serialize};

/// Direction applied to the remainder of an integer division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rounding {
    /// Truncate towards zero (floor for non-negative operands).
    Down,
    /// Round any non-zero remainder up (ceiling).
    Up,
}
