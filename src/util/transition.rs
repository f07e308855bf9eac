//! Accordion visual transition contract.
//!
//! Expanding reveals padding and border immediately while `max-height` grows.
//! Collapsing shrinks `max-height` first and only drops padding and border
//! once the shrink has finished, so the box never looks cut off mid-collapse.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::accordion::AccordionState;

/// CSS timing function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

/// Timing knobs for the accordion transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccordionTiming {
    pub duration_ms: u32,
    pub easing: Easing,
    /// Upper bound for the expanded content height, in viewport-height units.
    pub expanded_max_height_vh: u32,
}

impl Default for AccordionTiming {
    fn default() -> Self {
        Self {
            duration_ms: 250,
            easing: Easing::EaseInOut,
            expanded_max_height_vh: 150,
        }
    }
}

/// One entry of a CSS `transition` list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyTransition {
    pub property: &'static str,
    pub duration_ms: u32,
    pub easing: Easing,
    pub delay_ms: u32,
}

impl fmt::Display for PropertyTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}ms {}", self.property, self.duration_ms, self.easing.as_css())?;
        if self.delay_ms > 0 {
            write!(f, " {}ms", self.delay_ms)?;
        }
        Ok(())
    }
}

/// Everything the view needs to style the panel for one state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccordionVisual {
    pub is_expanded: bool,
    /// `max-height` of the content region, `"0"` when collapsed.
    pub content_max_height: String,
    /// Whether content padding and top border are shown.
    pub chrome_visible: bool,
    pub content_transitions: Vec<PropertyTransition>,
    pub icon_rotation_deg: u16,
    pub icon_transition: PropertyTransition,
}

impl AccordionVisual {
    #[must_use]
    pub fn content_transition_css(&self) -> String {
        join_transitions(&self.content_transitions)
    }

    #[must_use]
    pub fn icon_transform_css(&self) -> String {
        if self.icon_rotation_deg == 0 {
            "rotateZ(0)".to_owned()
        } else {
            format!("rotateZ({}deg)", self.icon_rotation_deg)
        }
    }

    /// Inline style for the content region. Content is clipped rather than
    /// removed; padding and border widths come from theme variables.
    #[must_use]
    pub fn content_style(&self) -> String {
        let (padding, border) = if self.chrome_visible {
            ("var(--accordion-padding, 1rem)", "var(--accordion-border-width, 1px)")
        } else {
            ("0", "0")
        };
        format!(
            "max-height: {}; overflow: hidden; padding: {padding}; border-top-width: {border}; transition: {};",
            self.content_max_height,
            self.content_transition_css()
        )
    }

    #[must_use]
    pub fn icon_style(&self) -> String {
        format!("transform: {}; transition: {};", self.icon_transform_css(), self.icon_transition)
    }
}

fn join_transitions(transitions: &[PropertyTransition]) -> String {
    transitions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Map accordion state to its visual description.
#[must_use]
pub fn accordion_visual(state: AccordionState, timing: AccordionTiming) -> AccordionVisual {
    let AccordionTiming { duration_ms, easing, expanded_max_height_vh } = timing;
    let extent = PropertyTransition { property: "max-height", duration_ms, easing, delay_ms: 0 };
    let instant = |property: &'static str, delay_ms: u32| PropertyTransition {
        property,
        duration_ms: 0,
        easing,
        delay_ms,
    };
    let is_expanded = state.is_expanded();

    let (content_max_height, content_transitions, icon_rotation_deg) = if is_expanded {
        (
            format!("{expanded_max_height_vh}vh"),
            vec![extent, instant("padding", 0)],
            180,
        )
    } else {
        (
            "0".to_owned(),
            vec![extent, instant("padding", duration_ms), instant("border", duration_ms)],
            0,
        )
    };

    AccordionVisual {
        is_expanded,
        content_max_height,
        chrome_visible: is_expanded,
        content_transitions,
        icon_rotation_deg,
        icon_transition: PropertyTransition { property: "transform", duration_ms, easing, delay_ms: 0 },
    }
}
