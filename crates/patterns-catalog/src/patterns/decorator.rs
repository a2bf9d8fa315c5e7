//! Decorator: wrap a beverage to add cost and description

use crate::console::Console;
use patterns_core::{ExampleFailure, Lines};

/// Anything sold at the counter
pub trait Beverage {
    /// Price in whole units
    fn cost(&self) -> u32;

    /// Human readable description
    fn description(&self) -> String;
}

/// Plain coffee
#[derive(Debug, Clone, Copy, Default)]
pub struct Coffee;

impl Beverage for Coffee {
    fn cost(&self) -> u32 {
        5
    }

    fn description(&self) -> String {
        "Coffee".to_string()
    }
}

/// Adds milk to the wrapped beverage
#[derive(Debug, Clone, Copy)]
pub struct Milk<B>(pub B);

impl<B: Beverage> Beverage for Milk<B> {
    fn cost(&self) -> u32 {
        self.0.cost() + 2
    }

    fn description(&self) -> String {
        format!("{}, milk", self.0.description())
    }
}

/// Adds sugar to the wrapped beverage
#[derive(Debug, Clone, Copy)]
pub struct Sugar<B>(pub B);

impl<B: Beverage> Beverage for Sugar<B> {
    fn cost(&self) -> u32 {
        self.0.cost() + 1
    }

    fn description(&self) -> String {
        format!("{}, sugar", self.0.description())
    }
}

fn receipt(beverage: &dyn Beverage) -> String {
    format!("{}: {}", beverage.description(), beverage.cost())
}

/// Price a coffee before and after each decoration
///
/// # Errors
/// Never fails.
pub fn produce() -> Result<Lines, ExampleFailure> {
    let mut console = Console::new();
    console.println(receipt(&Coffee));
    console.println(receipt(&Milk(Coffee)));
    console.println(receipt(&Sugar(Milk(Coffee))));
    Ok(console.into_lines())
}

/// Documented output
pub const EXPECTED: &[&str] = &["Coffee: 5", "Coffee, milk: 7", "Coffee, milk, sugar: 8"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorations_stack() {
        let drink = Milk(Milk(Sugar(Coffee)));
        assert_eq!(drink.cost(), 10);
        assert_eq!(drink.description(), "Coffee, sugar, milk, milk");
    }

    #[test]
    fn produce_output() {
        assert_eq!(produce().unwrap(), EXPECTED);
    }
}
