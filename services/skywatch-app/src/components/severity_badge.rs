//! Severity badge component

use leptos::prelude::*;

use crate::api::Severity;
use crate::theme::{use_theme, Tone};

/// A colored badge: High (red), Medium (amber), Unknown (gray)
#[component]
pub fn SeverityBadge(severity: Severity) -> impl IntoView {
    let style = use_theme().badge_style(Tone::from(severity));

    view! {
        <span style=style>{severity.to_string()}</span>
    }
}
