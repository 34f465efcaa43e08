use dioxus::prelude::*;

use crate::gateway::{GatewayCommand, request_generate};
use crate::views::QuizDisplay;
use crate::vm::{AppVm, RequestKind};

#[component]
pub fn GenerateView() -> Element {
    let mut app = use_context::<Signal<AppVm>>();
    let worker = use_coroutine_handle::<GatewayCommand>();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let raw = app.read().url_input().to_string();
        request_generate(app, &worker, &raw);
    };

    let (url, loading, generating, error) = {
        let vm = app.read();
        (
            vm.url_input().to_string(),
            vm.is_loading(),
            vm.in_flight_kind() == Some(RequestKind::Generate),
            vm.generate_error().map(str::to_string),
        )
    };

    rsx! {
        div { class: "page generate",
            form { class: "generate-form", onsubmit: on_submit,
                input {
                    class: "url-input",
                    r#type: "url",
                    value: "{url}",
                    placeholder: "Paste Wikipedia URL here...",
                    disabled: loading,
                    oninput: move |evt| app.write().set_url_input(evt.value()),
                }
                button { class: "primary", r#type: "submit", disabled: loading,
                    if generating { "Generating Quiz..." } else { "Generate Quiz" }
                }
            }

            if let Some(error) = error {
                div { class: "alert alert-error", role: "alert",
                    p { class: "alert-title", "Error:" }
                    p { "{error}" }
                }
            } else if generating {
                div { class: "loading-banner",
                    span { class: "spinner" }
                    "Processing article and generating quiz... (10-30 seconds)"
                }
            }

            QuizDisplay {}
        }
    }
}
