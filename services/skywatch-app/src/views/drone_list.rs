//! Registered drones

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::api::ApiClient;
use crate::components::error_notice::ErrorNotice;
use crate::routes::{RouteTable, ViewKind, DRONE_HISTORY, SERIAL_PARAM};
use crate::theme::use_theme;
use crate::views::{format_coordinate, format_measure};

/// Fetches /api/db/drones and links each drone to its history
#[component]
pub fn DroneList() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let routes = expect_context::<RouteTable>();
    let theme = use_theme();

    let drones = LocalResource::new(move || {
        let client = client.clone();
        async move { client.drones().await }
    });

    let header_row = theme.header_row_style();
    let row_style = theme.row_style();
    let cell = theme.cell_style();
    let table_style = theme.table_style();
    let link_style = theme.link_style();

    view! {
        <Title text=ViewKind::DroneList.title() />
        <section>
            <h2>"Drones"</h2>
            <Suspense fallback=move || view! { <p>"Loading drones..."</p> }>
                {move || {
                    drones.get().map(|result| match result {
                        Err(e) => view! { <ErrorNotice message=e.to_string() /> }.into_any(),
                        Ok(data) if data.is_empty() => {
                            view! { <p>"No drones registered."</p> }.into_any()
                        }
                        Ok(data) => view! {
                            <table style=table_style>
                                <thead>
                                    <tr style=header_row.clone()>
                                        <th style=cell>"ID"</th>
                                        <th style=cell>"Serial"</th>
                                        <th style=cell>"Pilot Latitude"</th>
                                        <th style=cell>"Pilot Longitude"</th>
                                        <th style=cell>"Altitude"</th>
                                        <th style=cell>"History"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {data.into_iter().map(|d| {
                                        let href = routes
                                            .href(DRONE_HISTORY, &[(SERIAL_PARAM, d.serial.as_str())])
                                            .unwrap_or_default();
                                        view! {
                                            <tr style=row_style.clone()>
                                                <td style=cell>{d.drone_id}</td>
                                                <td style=cell>{d.serial}</td>
                                                <td style=cell>{format_coordinate(d.pilot_lat)}</td>
                                                <td style=cell>{format_coordinate(d.pilot_lng)}</td>
                                                <td style=cell>{format_measure(d.z, "m")}</td>
                                                <td style=cell>
                                                    <A href=href attr:style=link_style.clone()>
                                                        "View trajectory"
                                                    </A>
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
