//! Collision check logs

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::api::{ApiClient, LogContent};
use crate::components::error_notice::ErrorNotice;
use crate::error::ApiError;
use crate::routes::ViewKind;
use crate::theme::use_theme;
use crate::views::format_size;

/// Lists collision logs; selecting one shows its content. A new check can be
/// triggered from here, which writes a fresh log on the backend.
#[component]
pub fn LogView() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let theme = use_theme();
    let selected = RwSignal::new(None::<String>);
    let check_status = RwSignal::new(None::<String>);

    let logs = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.logs().await }
        }
    });
    let content = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            let filename = selected.get();
            async move {
                match filename {
                    Some(name) => client.log_content(&name).await.map(Some),
                    None => Ok(None),
                }
            }
        }
    });

    let run_check = move |_| {
        let client = client.clone();
        check_status.set(Some("Running collision check...".to_string()));
        spawn_local(async move {
            let status = match client.run_collision_check().await {
                Ok(alerts) => format!("Check complete: {} potential collisions", alerts.len()),
                Err(e) => {
                    log::error!("Collision check failed: {}", e);
                    format!("Check failed: {}", e)
                }
            };
            check_status.set(Some(status));
            logs.refetch();
        });
    };

    let header_row = theme.header_row_style();
    let row_style = theme.row_style();
    let cell = theme.cell_style();
    let table_style = theme.table_style();
    let link_style = format!("{} cursor: pointer;", theme.link_style());

    view! {
        <Title text=ViewKind::Logs.title() />
        <section>
            <h2>"Collision Logs"</h2>
            <button on:click=run_check>"Run collision check"</button>
            {move || check_status.get().map(|s| view! { <p>{s}</p> })}
            <Suspense fallback=move || view! { <p>"Loading logs..."</p> }>
                {move || {
                    logs.get().map(|result| match result {
                        Err(e) => view! { <ErrorNotice message=e.to_string() /> }.into_any(),
                        Ok(entries) if entries.is_empty() => {
                            view! { <p>"No logs recorded yet."</p> }.into_any()
                        }
                        Ok(entries) => view! {
                            <table style=table_style>
                                <thead>
                                    <tr style=header_row.clone()>
                                        <th style=cell>"Checked At"</th>
                                        <th style=cell>"File"</th>
                                        <th style=cell>"Size"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {entries.into_iter().map(|entry| {
                                        let filename = entry.filename.clone();
                                        view! {
                                            <tr style=row_style.clone()>
                                                <td style=cell>{entry.timestamp}</td>
                                                <td style=cell>
                                                    <a
                                                        style=link_style.clone()
                                                        on:click=move |_| selected.set(Some(filename.clone()))
                                                    >
                                                        {entry.filename}
                                                    </a>
                                                </td>
                                                <td style=cell>{format_size(entry.size)}</td>
                                            </tr>
                                        }
                                    }).collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }.into_any(),
                    })
                }}
            </Suspense>
            <Suspense fallback=move || view! { <p>"Loading log..."</p> }>
                {move || content.get().map(render_content)}
            </Suspense>
        </section>
    }
}

fn render_content(result: Result<Option<LogContent>, ApiError>) -> AnyView {
    match result {
        Err(e) => view! { <ErrorNotice message=e.to_string() /> }.into_any(),
        Ok(None) => ().into_any(),
        Ok(Some(log)) => view! {
            <article>
                <h3>{format!("{} ({})", log.filename, log.timestamp)}</h3>
                <pre style="white-space: pre-wrap; background: #f8f9fa; padding: 1rem;">
                    {log.content}
                </pre>
            </article>
        }
        .into_any(),
    }
}
