//! Singleton: one process-wide instance with an init-once lifecycle
//!
//! The instance lives in an explicit [`OnceCell`] rather than hidden class
//! state. The handle is fetched once from [`Settings::instance`] and passed
//! by reference to each [`Service`] that needs it.

use crate::console::Console;
use once_cell::sync::OnceCell;
use patterns_core::{ExampleFailure, Lines};

static INSTANCE: OnceCell<Settings> = OnceCell::new();

/// Process-wide application settings
#[derive(Debug)]
pub struct Settings {
    app_name: String,
}

impl Settings {
    /// Shared instance, constructed on first access
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| {
            tracing::debug!("Initializing settings singleton");
            Settings {
                app_name: "pattern-demo".to_string(),
            }
        })
    }

    /// Check if the instance has been constructed yet
    #[inline]
    #[must_use]
    pub fn is_initialized() -> bool {
        INSTANCE.get().is_some()
    }

    /// Configured application name
    #[inline]
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }
}

/// Consumer that borrows the settings handle it was given
#[derive(Debug, Clone, Copy)]
pub struct Service<'s> {
    name: &'static str,
    settings: &'s Settings,
}

impl<'s> Service<'s> {
    /// Service named `name` reading from `settings`
    #[must_use]
    pub fn new(name: &'static str, settings: &'s Settings) -> Self {
        Self { name, settings }
    }

    /// Service name
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Settings handle this service was given
    #[must_use]
    pub fn settings(&self) -> &'s Settings {
        self.settings
    }

    /// Check if both services read the very same instance
    #[must_use]
    pub fn shares_settings_with(&self, other: &Service<'_>) -> bool {
        std::ptr::eq(self.settings, other.settings)
    }
}

/// Printed the way the demo shows booleans
fn display_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Hand one settings handle to two services and print whether they share it
///
/// # Errors
/// Never fails.
pub fn produce() -> Result<Lines, ExampleFailure> {
    let mut console = Console::new();
    let settings = Settings::instance();
    let logger = Service::new("logger", settings);
    let cache = Service::new("cache", settings);
    tracing::debug!(
        "{} and {} configured for {}",
        logger.name(),
        cache.name(),
        settings.app_name()
    );
    console.println(display_bool(logger.shares_settings_with(&cache)));
    Ok(console.into_lines())
}

/// Documented output
pub const EXPECTED: &[&str] = &["True"];
