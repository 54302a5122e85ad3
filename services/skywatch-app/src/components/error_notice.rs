//! Inline error notice

use leptos::prelude::*;

use crate::theme::{use_theme, Tone};

#[component]
pub fn ErrorNotice(message: String) -> impl IntoView {
    let theme = use_theme();
    let (color, bg) = theme.colors(Tone::Danger);
    let style = format!(
        "padding: 0.75rem 1rem; border-radius: 0.25rem; color: {}; background-color: {};",
        color, bg
    );

    view! {
        <p role="alert" style=style>{message}</p>
    }
}
