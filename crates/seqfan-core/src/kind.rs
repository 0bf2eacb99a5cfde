//! Sequence kinds and their stable text tags.

use std::fmt;
use std::str::FromStr;

/// The four demonstration sequences, one per worker task.
///
/// A tagged variant rather than an indexed function table, so dispatch
/// is exhaustiveness-checked at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    /// Running sum: term i is 0 + 1 + ... + i.
    Sum,
    /// Running product: term i is 1 * 2 * ... * i, 1-indexed.
    Product,
    /// Powers of two: term k is 2^k, computed by doubling.
    PowerOfTwo,
    /// Fibonacci: 0, 1, 1, 2, 3, 5, ...
    Fibonacci,
}

impl SequenceKind {
    /// All kinds, in task-id order (task 1 computes the sum, task 4 the
    /// Fibonacci sequence).
    pub const ALL: [Self; 4] = [Self::Sum, Self::Product, Self::PowerOfTwo, Self::Fibonacci];

    /// Stable text tag, used both as the output-line tag and as the
    /// child-mode CLI value.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Product => "product",
            Self::PowerOfTwo => "pow2",
            Self::Fibonacci => "fib",
        }
    }

    /// Index of the first emitted term (the product is 1-indexed).
    #[must_use]
    pub fn first_index(self) -> u64 {
        match self {
            Self::Product => 1,
            Self::Sum | Self::PowerOfTwo | Self::Fibonacci => 0,
        }
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SequenceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sum" => Ok(Self::Sum),
            "product" => Ok(Self::Product),
            "pow2" => Ok(Self::PowerOfTwo),
            "fib" => Ok(Self::Fibonacci),
            other => Err(format!(
                "unknown sequence kind `{other}` (expected sum, product, pow2, or fib)"
            )),
        }
    }
}
