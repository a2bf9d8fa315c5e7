//! Composite: treat leaves and groups uniformly in a tree
//!
//! Display visits a node, prints its name, then recurses into children in
//! insertion order.

use crate::console::Console;
use crate::error::PatternError;
use patterns_core::{ExampleFailure, Lines};

/// Tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    /// Terminal node
    Leaf(String),
    /// Node owning ordered children
    Composite {
        /// Display name
        name: String,
        /// Children in insertion order
        children: Vec<Component>,
    },
}

impl Component {
    /// New leaf
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::Leaf(name.into())
    }

    /// New composite with no children
    pub fn composite(name: impl Into<String>) -> Self {
        Self::Composite {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Leaf(name) | Self::Composite { name, .. } => name,
        }
    }

    /// Append a child
    ///
    /// # Errors
    /// [`PatternError::LeafHasNoChildren`] if `self` is a leaf.
    pub fn add(&mut self, child: Component) -> Result<(), PatternError> {
        match self {
            Self::Leaf(name) => Err(PatternError::LeafHasNoChildren(name.clone())),
            Self::Composite { children, .. } => {
                children.push(child);
                Ok(())
            }
        }
    }

    /// Chaining form of [`Component::add`]
    ///
    /// # Errors
    /// Same as [`Component::add`].
    pub fn with(mut self, child: Component) -> Result<Self, PatternError> {
        self.add(child)?;
        Ok(self)
    }

    /// Number of leaves beneath and including this node
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Composite { children, .. } => children.iter().map(Self::leaf_count).sum(),
        }
    }

    /// Pre-order display
    pub fn display(&self, console: &mut Console) {
        console.println(self.name());
        if let Self::Composite { children, .. } = self {
            for child in children {
                child.display(console);
            }
        }
    }
}

/// Tree shown by the demo
///
/// # Errors
/// Only if a leaf is used as a parent.
pub fn sample_tree() -> Result<Component, PatternError> {
    let branch = Component::composite("Composite B")
        .with(Component::leaf("Leaf B1"))?
        .with(Component::leaf("Leaf B2"))?;

    Component::composite("Root")
        .with(Component::leaf("Leaf A"))?
        .with(branch)?
        .with(Component::leaf("Leaf C"))
}

/// Build the sample tree and display it
///
/// # Errors
/// Fails if tree construction does.
pub fn produce() -> Result<Lines, ExampleFailure> {
    let mut console = Console::new();
    sample_tree()?.display(&mut console);
    Ok(console.into_lines())
}

/// Documented output
pub const EXPECTED: &[&str] = &["Root", "Leaf A", "Composite B", "Leaf B1", "Leaf B2", "Leaf C"];
