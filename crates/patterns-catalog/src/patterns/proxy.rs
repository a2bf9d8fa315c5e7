//! Proxy: defer loading a costly object until first use

use crate::console::Console;
use patterns_core::{ExampleFailure, Lines};

/// Displayable image
pub trait Image {
    /// Show the image
    fn display(&mut self, console: &mut Console);
}

/// Image whose construction is expensive
#[derive(Debug, Clone)]
pub struct RealImage {
    filename: String,
}

impl RealImage {
    /// Load from "disk"
    pub fn load(filename: impl Into<String>, console: &mut Console) -> Self {
        let filename = filename.into();
        console.println(format!("Loading {filename}"));
        Self { filename }
    }
}

impl Image for RealImage {
    fn display(&mut self, console: &mut Console) {
        console.println(format!("Displaying {}", self.filename));
    }
}

/// Stand-in that loads the real image on first display only
#[derive(Debug, Clone)]
pub struct ProxyImage {
    filename: String,
    real: Option<RealImage>,
}

impl ProxyImage {
    /// Proxy for `filename`; nothing is loaded yet
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            real: None,
        }
    }

    /// Check if the real image has been loaded
    #[inline]
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.real.is_some()
    }
}

impl Image for ProxyImage {
    fn display(&mut self, console: &mut Console) {
        let filename = &self.filename;
        let real = self
            .real
            .get_or_insert_with(|| RealImage::load(filename.clone(), console));
        real.display(console);
    }
}

/// Display the same proxied image twice
///
/// # Errors
/// Never fails.
pub fn produce() -> Result<Lines, ExampleFailure> {
    let mut console = Console::new();
    let mut image = ProxyImage::new("photo.jpg");
    image.display(&mut console);
    image.display(&mut console);
    Ok(console.into_lines())
}

/// Documented output
pub const EXPECTED: &[&str] = &["Loading photo.jpg", "Displaying photo.jpg", "Displaying photo.jpg"];
