//! Command: bind requests to remote buttons as objects
//!
//! Commands are generic over their receiver and get it at execution time,
//! so the remote never holds a second reference to the light.

use crate::console::Console;
use crate::error::PatternError;
use patterns_core::{ExampleFailure, Lines};

/// Receiver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Light {
    on: bool,
}

impl Light {
    /// Switch on
    pub fn turn_on(&mut self, console: &mut Console) {
        self.on = true;
        console.println("Light is on");
    }

    /// Switch off
    pub fn turn_off(&mut self, console: &mut Console) {
        self.on = false;
        console.println("Light is off");
    }

    /// Check if the light is on
    #[inline]
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on
    }
}

/// Encapsulated request against receiver `R`
pub trait Command<R> {
    /// Perform the request
    fn execute(&self, receiver: &mut R, console: &mut Console);
}

/// Turns a [`Light`] on
#[derive(Debug, Clone, Copy, Default)]
pub struct LightOn;

impl Command<Light> for LightOn {
    fn execute(&self, light: &mut Light, console: &mut Console) {
        light.turn_on(console);
    }
}

/// Turns a [`Light`] off
#[derive(Debug, Clone, Copy, Default)]
pub struct LightOff;

impl Command<Light> for LightOff {
    fn execute(&self, light: &mut Light, console: &mut Console) {
        light.turn_off(console);
    }
}

/// Invoker with a fixed number of slots
pub struct RemoteControl<R> {
    slots: Vec<Option<Box<dyn Command<R>>>>,
}

impl<R> RemoteControl<R> {
    /// Remote with `slots` empty slots
    #[must_use]
    pub fn new(slots: usize) -> Self {
        Self {
            slots: (0..slots).map(|_| None).collect(),
        }
    }

    /// Bind `command` to `slot`, replacing any previous binding
    ///
    /// # Errors
    /// [`PatternError::SlotOutOfRange`] if `slot` does not exist.
    pub fn set_command(
        &mut self,
        slot: usize,
        command: impl Command<R> + 'static,
    ) -> Result<(), PatternError> {
        let slots = self.slots.len();
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or(PatternError::SlotOutOfRange { slot, slots })?;
        *entry = Some(Box::new(command));
        Ok(())
    }

    /// Press the button for `slot`
    ///
    /// # Errors
    /// - [`PatternError::SlotOutOfRange`] if `slot` does not exist
    /// - [`PatternError::EmptySlot`] if nothing is bound to it
    pub fn press(
        &self,
        slot: usize,
        receiver: &mut R,
        console: &mut Console,
    ) -> Result<(), PatternError> {
        let entry = self.slots.get(slot).ok_or(PatternError::SlotOutOfRange {
            slot,
            slots: self.slots.len(),
        })?;
        let command = entry.as_ref().ok_or(PatternError::EmptySlot(slot))?;
        command.execute(receiver, console);
        Ok(())
    }
}

/// Bind on/off to two slots and press both
///
/// # Errors
/// Fails if a press hits an unbound slot.
pub fn produce() -> Result<Lines, ExampleFailure> {
    let mut console = Console::new();
    let mut light = Light::default();
    let mut remote = RemoteControl::<Light>::new(2);
    remote.set_command(0, LightOn)?;
    remote.set_command(1, LightOff)?;

    remote.press(0, &mut light, &mut console)?;
    remote.press(1, &mut light, &mut console)?;
    Ok(console.into_lines())
}

/// Documented output
pub const EXPECTED: &[&str] = &["Light is on", "Light is off"];
