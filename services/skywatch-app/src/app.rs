//! Main App component

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::components::nav_bar::NavBar;
use crate::routes::{RouteTable, ViewKind, SERIAL_PARAM};
use crate::theme::use_theme;
use crate::views::{DroneHistory, DroneList, LogView, MapView, NotFound};

/// What the route outlet shows for a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outlet {
    /// A declared view; `serial` is set for the drone history view
    View {
        view: ViewKind,
        serial: Option<String>,
    },
    NotFound(String),
}

impl Outlet {
    /// Resolve `path` against the table; unmatched paths yield [`Outlet::NotFound`]
    pub fn for_path(routes: &RouteTable, path: &str) -> Self {
        match routes.resolve(path) {
            Some(matched) => {
                log::debug!("{} -> {} ({})", path, matched.name, matched.view);
                let serial = match matched.view {
                    ViewKind::DroneHistory => matched.params.get(SERIAL_PARAM).map(str::to_string),
                    _ => None,
                };
                Outlet::View {
                    view: matched.view,
                    serial,
                }
            }
            None => {
                log::warn!("No route matches {}", path);
                Outlet::NotFound(path.to_string())
            }
        }
    }
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let page_style = use_theme().page_style();

    view! {
        <Router>
            <main style=page_style>
                <h1>"Skywatch"</h1>
                <NavBar />
                <RouteOutlet />
            </main>
        </Router>
    }
}

/// Renders the view of the route matching the current location
#[component]
fn RouteOutlet() -> impl IntoView {
    let routes = expect_context::<RouteTable>();
    let location = use_location();

    move || {
        let path = location.pathname.get();
        let path = encoded_pathname().unwrap_or(path);
        render_outlet(Outlet::for_path(&routes, &path))
    }
}

/// The address bar path before the router unescapes it, so that captured
/// parameters are percent-decoded exactly once by the route table.
#[cfg(feature = "csr")]
fn encoded_pathname() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

#[cfg(not(feature = "csr"))]
fn encoded_pathname() -> Option<String> {
    None
}

fn render_outlet(outlet: Outlet) -> AnyView {
    match outlet {
        Outlet::View { view, serial } => match view {
            ViewKind::Map => view! { <MapView /> }.into_any(),
            ViewKind::Logs => view! { <LogView /> }.into_any(),
            ViewKind::DroneList => view! { <DroneList /> }.into_any(),
            ViewKind::DroneHistory => {
                let serial = serial.unwrap_or_default();
                view! { <DroneHistory serial=serial /> }.into_any()
            }
        },
        Outlet::NotFound(path) => view! { <NotFound path=path /> }.into_any(),
    }
}
