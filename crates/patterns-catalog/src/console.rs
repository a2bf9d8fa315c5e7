//! In-memory stand-in for standard output

use patterns_core::Lines;

/// Collects printed lines in emission order
///
/// Demonstrations write here instead of stdout so their output can be
/// captured and compared.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Console {
    lines: Lines,
}

impl Console {
    /// Create empty console
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Print one line
    #[inline]
    pub fn println(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Lines printed so far
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume console, returning captured lines
    #[inline]
    #[must_use]
    pub fn into_lines(self) -> Lines {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_in_order() {
        let mut console = Console::new();
        console.println("first");
        console.println(String::from("second"));
        assert_eq!(console.lines(), ["first", "second"]);
        assert_eq!(console.into_lines(), vec!["first", "second"]);
    }
}
