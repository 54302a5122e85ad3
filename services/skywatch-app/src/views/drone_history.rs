//! Trajectory of a single drone

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::api::ApiClient;
use crate::components::error_notice::ErrorNotice;
use crate::routes::{RouteTable, ViewKind, DRONES};
use crate::theme::use_theme;
use crate::views::{format_coordinate, format_measure};

/// Fetches /api/drone/{serial}/trajectory for the serial captured by the route
#[component]
pub fn DroneHistory(serial: String) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let routes = expect_context::<RouteTable>();
    let theme = use_theme();

    let trajectory = LocalResource::new({
        let serial = serial.clone();
        move || {
            let client = client.clone();
            let serial = serial.clone();
            async move { client.trajectory(&serial).await }
        }
    });

    let back = routes.href(DRONES, &[]).unwrap_or_else(|_| "/".to_string());
    let heading = format!("Drone {}", serial);
    let header_row = theme.header_row_style();
    let row_style = theme.row_style();
    let cell = theme.cell_style();
    let table_style = theme.table_style();

    view! {
        <Title text=format!("{} - {}", ViewKind::DroneHistory.title(), serial) />
        <section>
            <h2>{heading}</h2>
            <A href=back attr:style=theme.link_style()>"Back to drones"</A>
            <Suspense fallback=move || view! { <p>"Loading trajectory..."</p> }>
                {move || {
                    trajectory.get().map(|result| match result {
                        Err(e) if e.is_not_found() => {
                            view! { <p>"No drone with this serial number."</p> }.into_any()
                        }
                        Err(e) => view! { <ErrorNotice message=e.to_string() /> }.into_any(),
                        Ok(points) if points.is_empty() => {
                            view! { <p>"No positions recorded in the last 30 minutes."</p> }
                                .into_any()
                        }
                        Ok(points) => view! {
                            <p>{format!("{} positions", points.len())}</p>
                            <table style=table_style>
                                <thead>
                                    <tr style=header_row.clone()>
                                        <th style=cell>"Time"</th>
                                        <th style=cell>"Latitude"</th>
                                        <th style=cell>"Longitude"</th>
                                        <th style=cell>"Altitude"</th>
                                        <th style=cell>"Velocity (x, y, z)"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {points.into_iter().map(|p| {
                                        let velocity = format!(
                                            "{:.2}, {:.2}, {:.2} m/s",
                                            p.vx, p.vy, p.vz
                                        );
                                        view! {
                                            <tr style=row_style.clone()>
                                                <td style=cell>{p.timestamp}</td>
                                                <td style=cell>{format_coordinate(Some(p.lat))}</td>
                                                <td style=cell>{format_coordinate(Some(p.lng))}</td>
                                                <td style=cell>{format_measure(Some(p.z), "m")}</td>
                                                <td style=cell>{velocity}</td>
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
