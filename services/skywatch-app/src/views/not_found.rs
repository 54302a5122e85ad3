//! Fallback for paths with no declared route

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::routes::{RouteTable, HOME};
use crate::theme::use_theme;

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    let home = expect_context::<RouteTable>()
        .href(HOME, &[])
        .unwrap_or_else(|_| "/".to_string());

    view! {
        <Title text="Not Found" />
        <section>
            <h2>"Page not found"</h2>
            <p>{format!("Nothing is routed at {}.", path)}</p>
            <A href=home attr:style=use_theme().link_style()>"Back to the map"</A>
        </section>
    }
}
