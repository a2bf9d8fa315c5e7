//! Strategy: swap the algorithm a context delegates to

use crate::console::Console;
use patterns_core::{ExampleFailure, Lines};

/// Interchangeable algorithm
pub trait Strategy {
    /// Apply the algorithm
    fn execute(&self, input: i64) -> i64;
}

/// Doubles its input
#[derive(Debug, Clone, Copy, Default)]
pub struct Algorithm1;

impl Strategy for Algorithm1 {
    fn execute(&self, input: i64) -> i64 {
        input * 2
    }
}

/// Increments its input
#[derive(Debug, Clone, Copy, Default)]
pub struct Algorithm2;

impl Strategy for Algorithm2 {
    fn execute(&self, input: i64) -> i64 {
        input + 1
    }
}

/// Holds the current strategy
pub struct Context {
    strategy: Box<dyn Strategy>,
}

impl Context {
    /// Context using `strategy`
    pub fn new(strategy: impl Strategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// Replace the strategy
    pub fn set_strategy(&mut self, strategy: impl Strategy + 'static) {
        self.strategy = Box::new(strategy);
    }

    /// Run the current strategy
    #[must_use]
    pub fn execute(&self, input: i64) -> i64 {
        self.strategy.execute(input)
    }
}

/// Input both algorithms are applied to
pub const INPUT: i64 = 10;

/// Run `Algorithm1` then `Algorithm2` on the same input
///
/// # Errors
/// Never fails.
pub fn produce() -> Result<Lines, ExampleFailure> {
    let mut console = Console::new();
    let mut context = Context::new(Algorithm1);
    console.println(context.execute(INPUT).to_string());

    context.set_strategy(Algorithm2);
    console.println(context.execute(INPUT).to_string());
    Ok(console.into_lines())
}

/// Documented output
pub const EXPECTED: &[&str] = &["20", "11"];
