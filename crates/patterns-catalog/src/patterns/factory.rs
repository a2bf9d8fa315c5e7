//! Factory: construct a concrete type from a kind tag

use crate::console::Console;
use crate::error::PatternError;
use patterns_core::{ExampleFailure, Lines};
use std::str::FromStr;

/// Something that can speak
pub trait Animal {
    /// Sound the animal makes
    fn speak(&self) -> String;
}

/// Dog
#[derive(Debug, Clone, Copy, Default)]
pub struct Dog;

impl Animal for Dog {
    fn speak(&self) -> String {
        "Woof!".to_string()
    }
}

/// Cat
#[derive(Debug, Clone, Copy, Default)]
pub struct Cat;

impl Animal for Cat {
    fn speak(&self) -> String {
        "Meow!".to_string()
    }
}

/// Kinds the factory can build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimalKind {
    /// [`Dog`]
    Dog,
    /// [`Cat`]
    Cat,
}

impl FromStr for AnimalKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dog" => Ok(Self::Dog),
            "cat" => Ok(Self::Cat),
            other => Err(PatternError::UnknownAnimal(other.to_string())),
        }
    }
}

/// Build the animal for `kind`
#[must_use]
pub fn create(kind: AnimalKind) -> Box<dyn Animal> {
    match kind {
        AnimalKind::Dog => Box::new(Dog),
        AnimalKind::Cat => Box::new(Cat),
    }
}

/// Build an animal from its textual kind
///
/// # Errors
/// [`PatternError::UnknownAnimal`] for anything but `dog` or `cat`.
pub fn create_named(kind: &str) -> Result<Box<dyn Animal>, PatternError> {
    kind.parse().map(create)
}

/// Ask the factory for a dog and a cat and let each speak
///
/// # Errors
/// Fails only if the factory rejects one of its own kinds.
pub fn produce() -> Result<Lines, ExampleFailure> {
    let mut console = Console::new();
    for kind in ["dog", "cat"] {
        let animal = create_named(kind)?;
        console.println(animal.speak());
    }
    Ok(console.into_lines())
}

/// Documented output
pub const EXPECTED: &[&str] = &["Woof!", "Meow!"];
