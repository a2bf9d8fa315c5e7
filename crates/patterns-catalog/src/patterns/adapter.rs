//! Adapter: expose an incompatible interface through the expected one

use crate::console::Console;
use patterns_core::{ExampleFailure, Lines};

/// Interface client code expects
pub trait Target {
    /// Issue the request
    fn request(&self) -> String;
}

/// Existing type with an incompatible interface
#[derive(Debug, Clone, Copy, Default)]
pub struct Adaptee;

impl Adaptee {
    /// The legacy entry point
    #[must_use]
    pub fn specific_request(&self) -> &'static str {
        "Specific request"
    }
}

/// Presents an [`Adaptee`] as a [`Target`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Adapter {
    adaptee: Adaptee,
}

impl Adapter {
    /// Wrap `adaptee`
    #[must_use]
    pub fn new(adaptee: Adaptee) -> Self {
        Self { adaptee }
    }
}

impl Target for Adapter {
    fn request(&self) -> String {
        format!("Adapter: {}", self.adaptee.specific_request())
    }
}

/// Client that only knows [`Target`]
pub fn client_code(target: &dyn Target, console: &mut Console) {
    console.println(target.request());
}

/// Drive the adaptee through client code via the adapter
///
/// # Errors
/// Never fails.
pub fn produce() -> Result<Lines, ExampleFailure> {
    let mut console = Console::new();
    client_code(&Adapter::new(Adaptee), &mut console);
    Ok(console.into_lines())
}

/// Documented output
pub const EXPECTED: &[&str] = &["Adapter: Specific request"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_delegates() {
        assert_eq!(Adapter::default().request(), "Adapter: Specific request");
    }

    #[test]
    fn produce_output() {
        assert_eq!(produce().unwrap(), EXPECTED);
    }
}
