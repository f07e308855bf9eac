//! Accordion expansion state machine.
//!
//! DESIGN
//! ======
//! The panel owns a single expansion flag. It is seeded from the `is_expanded`
//! prop once at construction and never re-synchronized from it afterwards;
//! from then on only [`AccordionState::apply`] moves it.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

/// Whether the panel body is revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Expansion {
    #[default]
    Collapsed,
    Expanded,
}

impl Expansion {
    /// Map a boolean prop onto an expansion state.
    #[must_use]
    pub fn from_flag(is_expanded: bool) -> Self {
        if is_expanded { Self::Expanded } else { Self::Collapsed }
    }

    /// The opposite state.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }
}

/// Events that drive the accordion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccordionEvent {
    /// The header region was clicked or otherwise activated.
    HeaderActivated,
    /// An ancestor called `toggle()` through the accordion handle.
    ToggleRequested,
}

/// State owned by one accordion instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    pub expansion: Expansion,
}

impl AccordionState {
    #[must_use]
    pub fn new(is_expanded: bool) -> Self {
        Self { expansion: Expansion::from_flag(is_expanded) }
    }

    #[must_use]
    pub fn is_expanded(self) -> bool {
        self.expansion == Expansion::Expanded
    }

    /// Pure transition function. Every event toggles; there is no terminal state.
    #[must_use]
    pub fn apply(self, event: AccordionEvent) -> Self {
        match event {
            AccordionEvent::HeaderActivated | AccordionEvent::ToggleRequested => {
                Self { expansion: self.expansion.flipped() }
            }
        }
    }
}
