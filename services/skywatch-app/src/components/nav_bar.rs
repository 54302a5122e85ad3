//! Top navigation bar

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{RouteTable, DRONES, HOME, LOGS};
use crate::theme::use_theme;

/// Links to the map, drone list and log views
#[component]
pub fn NavBar() -> impl IntoView {
    let routes = expect_context::<RouteTable>();
    let link_style = use_theme().link_style();

    let links = [(HOME, "Map"), (DRONES, "Drones"), (LOGS, "Logs")]
        .into_iter()
        .filter_map(|(name, label)| {
            routes
                .href(name, &[])
                .map_err(|e| log::error!("Navigation link for {} unavailable: {}", name, e))
                .ok()
                .map(|href| (href, label))
        })
        .map(|(href, label)| {
            let style = link_style.clone();
            view! {
                <A href=href attr:style=style>{label}</A>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav style="display: flex; gap: 1.5rem; margin-bottom: 1rem;">
            {links}
        </nav>
    }
}
