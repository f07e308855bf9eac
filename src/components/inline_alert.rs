//! Default inline alert banner.

use leptos::prelude::*;

/// Severity of an inline alert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertType {
    #[default]
    Information,
    Success,
    Warning,
    Error,
}

impl AlertType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Information => "information",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[component]
pub fn InlineAlert(
    #[prop(optional)] alert_type: AlertType,
    #[prop(into, optional)] title: String,
    #[prop(into)] message: String,
) -> impl IntoView {
    let class = format!("inline-alert inline-alert--{}", alert_type.as_str());
    let title = (!title.is_empty()).then(|| view! { <strong class="inline-alert__title">{title}</strong> });

    view! {
        <div class=class role="alert">
            {title}
            <p class="inline-alert__message">{message}</p>
        </div>
    }
}
