//! State: a gumball machine as an explicit finite-state machine
//!
//! The machine is a plain value `{ state, gumballs }`. [`transition`] is
//! pure: it takes the machine and an event and returns the next machine
//! together with the messages emitted.

use crate::console::Console;
use patterns_core::{ExampleFailure, Lines};

/// Machine state tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GumballState {
    /// Waiting for a quarter
    NoQuarter,
    /// Quarter inserted, waiting for the crank
    HasQuarter,
    /// Empty
    SoldOut,
}

/// Customer or operator action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Insert a quarter
    InsertQuarter,
    /// Ask for the quarter back
    EjectQuarter,
    /// Turn the crank
    TurnCrank,
    /// Operator adds gumballs
    Refill(u32),
}

/// Machine value
///
/// Built only through [`GumballMachine::new`] and [`transition`], so a
/// machine is [`GumballState::SoldOut`] exactly when it holds no gumballs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GumballMachine {
    state: GumballState,
    gumballs: u32,
}

impl GumballMachine {
    /// Machine stocked with `gumballs`; sold out when zero
    #[must_use]
    pub fn new(gumballs: u32) -> Self {
        let state = if gumballs == 0 {
            GumballState::SoldOut
        } else {
            GumballState::NoQuarter
        };
        Self { state, gumballs }
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> GumballState {
        self.state
    }

    /// Gumballs left
    #[inline]
    #[must_use]
    pub fn gumballs(&self) -> u32 {
        self.gumballs
    }

    /// Apply `event`, printing emitted messages to `console`
    #[must_use]
    pub fn handle(self, event: Event, console: &mut Console) -> Self {
        let (next, messages) = transition(self, event);
        for message in messages {
            console.println(message);
        }
        next
    }
}

/// Pure transition function
#[must_use]
pub fn transition(machine: GumballMachine, event: Event) -> (GumballMachine, Vec<String>) {
    use Event::{EjectQuarter, InsertQuarter, Refill, TurnCrank};
    use GumballState::{HasQuarter, NoQuarter, SoldOut};

    let with_state = |state| GumballMachine { state, ..machine };
    let say = |msg: &str| vec![msg.to_string()];

    match (machine.state, event) {
        (NoQuarter, InsertQuarter) => (with_state(HasQuarter), say("You inserted a quarter")),
        (NoQuarter, EjectQuarter) => (machine, say("You haven't inserted a quarter")),
        (NoQuarter, TurnCrank) => (machine, say("You turned, but there's no quarter")),

        (HasQuarter, InsertQuarter) => (machine, say("You can't insert another quarter")),
        (HasQuarter, EjectQuarter) => (with_state(NoQuarter), say("Quarter returned")),
        (HasQuarter, TurnCrank) => dispense(machine),

        (SoldOut, InsertQuarter) => (
            machine,
            say("You can't insert a quarter, the machine is sold out"),
        ),
        (SoldOut, EjectQuarter) => (
            machine,
            say("You can't eject, you haven't inserted a quarter yet"),
        ),
        (SoldOut, TurnCrank) => (machine, say("You turned, but there are no gumballs")),

        (state, Refill(count)) => {
            let gumballs = machine.gumballs.saturating_add(count);
            let state = match state {
                SoldOut if gumballs > 0 => NoQuarter,
                _ if gumballs == 0 => SoldOut,
                other => other,
            };
            (
                GumballMachine { state, gumballs },
                vec![format!("The gumball machine was just refilled; its new count is: {gumballs}")],
            )
        }
    }
}

fn dispense(machine: GumballMachine) -> (GumballMachine, Vec<String>) {
    if machine.gumballs == 0 {
        return (GumballMachine::new(0), vec!["You turned, but there are no gumballs".to_string()]);
    }

    let mut messages = vec![
        "You turned...".to_string(),
        "A gumball comes rolling out the slot".to_string(),
    ];
    let gumballs = machine.gumballs - 1;
    let state = if gumballs == 0 {
        messages.push("Oops, out of gumballs!".to_string());
        GumballState::SoldOut
    } else {
        GumballState::NoQuarter
    };
    (GumballMachine { state, gumballs }, messages)
}

/// Gumballs the demo machine starts with
pub const DEMO_STOCK: u32 = 2;

/// Customer session played by the demo
pub const DEMO_SESSION: &[Event] = &[
    Event::InsertQuarter,
    Event::TurnCrank,
    Event::InsertQuarter,
    Event::EjectQuarter,
    Event::TurnCrank,
    Event::InsertQuarter,
    Event::TurnCrank,
    Event::InsertQuarter,
];

/// Play [`DEMO_SESSION`] against a machine holding [`DEMO_STOCK`]
///
/// # Errors
/// Never fails.
pub fn produce() -> Result<Lines, ExampleFailure> {
    let mut console = Console::new();
    let machine = DEMO_SESSION
        .iter()
        .fold(GumballMachine::new(DEMO_STOCK), |machine, &event| {
            machine.handle(event, &mut console)
        });
    tracing::debug!("Gumball session ended in {:?}", machine.state());
    Ok(console.into_lines())
}

/// Documented output
pub const EXPECTED: &[&str] = &[
    "You inserted a quarter",
    "You turned...",
    "A gumball comes rolling out the slot",
    "You inserted a quarter",
    "Quarter returned",
    "You turned, but there's no quarter",
    "You inserted a quarter",
    "You turned...",
    "A gumball comes rolling out the slot",
    "Oops, out of gumballs!",
    "You can't insert a quarter, the machine is sold out",
];
