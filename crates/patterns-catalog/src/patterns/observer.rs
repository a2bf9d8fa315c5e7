//! Observer: a subject notifies subscribers in subscription order

use crate::console::Console;
use patterns_core::{ExampleFailure, Lines};

/// Receives notifications from a [`Button`]
pub trait Observer {
    /// Handle one notification
    fn update(&self, message: &str, console: &mut Console);
}

/// Observer that prints every message it receives
#[derive(Debug, Clone, Default)]
pub struct Printer {
    prefix: Option<String>,
}

impl Printer {
    /// Printer emitting messages verbatim
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Printer emitting `"<prefix>: <message>"`
    #[inline]
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

impl Observer for Printer {
    fn update(&self, message: &str, console: &mut Console) {
        match &self.prefix {
            Some(prefix) => console.println(format!("{prefix}: {message}")),
            None => console.println(message),
        }
    }
}

/// Subject that broadcasts UI events
#[derive(Default)]
pub struct Button {
    observers: Vec<Box<dyn Observer>>,
}

impl Button {
    /// Button with no subscribers
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe an observer
    pub fn attach(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Number of subscribers
    #[inline]
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Deliver `message` to every subscriber
    pub fn notify(&self, message: &str, console: &mut Console) {
        for observer in &self.observers {
            observer.update(message, console);
        }
    }
}

/// Subscribe one printer and fire two events
///
/// # Errors
/// Never fails.
pub fn produce() -> Result<Lines, ExampleFailure> {
    let mut console = Console::new();
    let mut button = Button::new();
    button.attach(Printer::new());

    button.notify("Click me", &mut console);
    button.notify("Press me", &mut console);
    Ok(console.into_lines())
}

/// Documented output
pub const EXPECTED: &[&str] = &["Click me", "Press me"];
