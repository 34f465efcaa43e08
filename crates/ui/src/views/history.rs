use dioxus::prelude::*;
use quiz_core::model::QuizId;

use crate::gateway::{GatewayCommand, request_history, request_quiz};
use crate::vm::{AppVm, HistoryPanel, HistoryRowVm, RequestKind, map_history_panel};

#[component]
pub fn HistoryView() -> Element {
    let app = use_context::<Signal<AppVm>>();
    let worker = use_coroutine_handle::<GatewayCommand>();

    let refresh = use_callback(move |()| request_history(app, &worker));

    // Refetch every time the tab is shown.
    use_effect(move || refresh.call(()));

    let (panel, refreshing) = {
        let vm = app.read();
        (
            map_history_panel(&vm),
            vm.in_flight_kind() == Some(RequestKind::History),
        )
    };
    let busy = matches!(panel, HistoryPanel::Loading);

    let body = match panel {
        HistoryPanel::Loading => rsx! {
            p { class: "muted", "Loading quiz history..." }
        },
        HistoryPanel::Error(message) => rsx! {
            div { class: "alert alert-error", role: "alert",
                p { class: "alert-title", "Error:" }
                p { "{message}" }
            }
        },
        HistoryPanel::Empty => rsx! {
            p { class: "muted", "No quizzes have been saved yet. Generate one to see it here!" }
        },
        HistoryPanel::Rows(rows) => rsx! {
            table { class: "history-table",
                thead {
                    tr {
                        th { "Title" }
                        th { "URL" }
                        th { "Date Generated" }
                        th { "Action" }
                    }
                }
                tbody {
                    for row in rows {
                        HistoryRow { key: "{row.id}", row }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "page history",
            div { class: "history-toolbar",
                h2 { "Previously Generated Quizzes" }
                button {
                    class: "secondary",
                    disabled: busy,
                    onclick: move |_| refresh.call(()),
                    if refreshing { "Refreshing..." } else { "Refresh History" }
                }
            }

            {body}
        }
    }
}

#[component]
fn HistoryRow(row: HistoryRowVm) -> Element {
    let app = use_context::<Signal<AppVm>>();
    let worker = use_coroutine_handle::<GatewayCommand>();
    let id: QuizId = row.id;

    rsx! {
        tr {
            td { class: "title-cell", "{row.title}" }
            td { class: "url-cell",
                a { href: "{row.url}", target: "_blank", rel: "noopener noreferrer", "{row.url}" }
            }
            td { "{row.date_label}" }
            td {
                button {
                    class: "link-button",
                    onclick: move |_| request_quiz(app, &worker, id),
                    "View Quiz"
                }
            }
        }
    }
}
