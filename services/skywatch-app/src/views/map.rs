//! Airspace overview: live drone positions and collision alerts

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::api::{ApiClient, CollisionAlert};
use crate::components::error_notice::ErrorNotice;
use crate::components::severity_badge::SeverityBadge;
use crate::error::ApiError;
use crate::routes::{RouteTable, ViewKind, DRONE_HISTORY, SERIAL_PARAM};
use crate::theme::use_theme;
use crate::views::{format_coordinate, format_measure};

#[component]
pub fn MapView() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let routes = expect_context::<RouteTable>();
    let theme = use_theme();

    let positions = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.current_drones().await }
        }
    });
    let alerts = LocalResource::new(move || {
        let client = client.clone();
        async move { client.collision_alerts().await }
    });

    let header_row = theme.header_row_style();
    let row_style = theme.row_style();
    let cell = theme.cell_style();
    let table_style = theme.table_style();
    let link_style = theme.link_style();

    view! {
        <Title text=ViewKind::Map.title() />
        <section>
            <h2>"Live Positions"</h2>
            <Suspense fallback=move || view! { <p>"Loading positions..."</p> }>
                {move || {
                    positions.get().map(|result| match result {
                        Err(e) => view! { <ErrorNotice message=e.to_string() /> }.into_any(),
                        Ok(data) if data.is_empty() => {
                            view! { <p>"No drones in the air."</p> }.into_any()
                        }
                        Ok(data) => view! {
                            <table style=table_style>
                                <thead>
                                    <tr style=header_row.clone()>
                                        <th style=cell>"Serial"</th>
                                        <th style=cell>"Latitude"</th>
                                        <th style=cell>"Longitude"</th>
                                        <th style=cell>"Altitude"</th>
                                        <th style=cell>"Speed"</th>
                                        <th style=cell>"Updated"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {data.into_iter().map(|d| {
                                        let href = routes
                                            .href(DRONE_HISTORY, &[(SERIAL_PARAM, d.serial.as_str())])
                                            .unwrap_or_default();
                                        let speed = format_measure(d.speed(), "m/s");
                                        view! {
                                            <tr style=row_style.clone()>
                                                <td style=cell>
                                                    <A href=href attr:style=link_style.clone()>
                                                        {d.serial.clone()}
                                                    </A>
                                                </td>
                                                <td style=cell>{format_coordinate(d.lat)}</td>
                                                <td style=cell>{format_coordinate(d.lng)}</td>
                                                <td style=cell>{format_measure(d.z, "m")}</td>
                                                <td style=cell>{speed}</td>
                                                <td style=cell>
                                                    {d.last_updated.unwrap_or_else(|| "-".to_string())}
                                                </td>
                                            </tr>
                                        }
                                    }).collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </section>
        <CollisionAlerts alerts=alerts />
    }
}

#[component]
fn CollisionAlerts(alerts: LocalResource<Result<Vec<CollisionAlert>, ApiError>>) -> impl IntoView {
    let theme = use_theme();
    let header_row = theme.header_row_style();
    let row_style = theme.row_style();
    let cell = theme.cell_style();
    let table_style = theme.table_style();

    view! {
        <section>
            <h2>"Collision Alerts"</h2>
            <Suspense fallback=move || view! { <p>"Checking airspace..."</p> }>
                {move || {
                    alerts.get().map(|result| match result {
                        Err(e) => view! { <ErrorNotice message=e.to_string() /> }.into_any(),
                        Ok(data) if data.is_empty() => {
                            view! { <p>"No collision risk detected."</p> }.into_any()
                        }
                        Ok(data) => view! {
                            <table style=table_style>
                                <thead>
                                    <tr style=header_row.clone()>
                                        <th style=cell>"Severity"</th>
                                        <th style=cell>"Drones"</th>
                                        <th style=cell>"Time to Collision"</th>
                                        <th style=cell>"Distance"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {data.into_iter().map(|a| {
                                        view! {
                                            <tr style=row_style.clone()>
                                                <td style=cell>
                                                    <SeverityBadge severity=a.severity />
                                                </td>
                                                <td style=cell>
                                                    {format!("{} / {}", a.drone_a, a.drone_b)}
                                                </td>
                                                <td style=cell>
                                                    {format_measure(Some(a.time_to_collision), "s")}
                                                </td>
                                                <td style=cell>
                                                    {format_measure(Some(a.current_distance), "m")}
                                                </td>
                                            </tr>
                                        }
                                    }).collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </section>
    }
}
