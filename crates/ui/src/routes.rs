use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};

use crate::gateway::use_gateway_worker;
use crate::views::{GenerateView, HistoryView};
use crate::vm::{AppVm, RequestKind};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", GenerateView)] Generate {},
        #[route("/history", HistoryView)] History {},
}

#[component]
fn Layout() -> Element {
    let app = use_context::<Signal<AppVm>>();
    let navigator = use_navigator();
    let on_quiz_opened = use_callback(move |()| {
        navigator.push(Route::Generate {});
    });
    // Lives as long as the layout, so switching tabs never drops a request.
    use_gateway_worker(on_quiz_opened);

    let (theme, opening_quiz) = {
        let vm = app.read();
        (vm.theme(), vm.in_flight_kind() == Some(RequestKind::SelectQuiz))
    };

    rsx! {
        div { class: "app theme-{theme}",
            header { class: "app-header",
                h1 { "AI Wiki Quiz Generator" }
                nav { class: "tabs",
                    Link { class: "tab", active_class: "tab-active", to: Route::Generate {}, "Generate New Quiz" }
                    Link { class: "tab", active_class: "tab-active", to: Route::History {}, "Quiz History" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            if opening_quiz {
                div { class: "loading-overlay",
                    div { class: "loading-card",
                        span { class: "spinner" }
                        p { "Loading quiz..." }
                    }
                }
            }
        }
    }
}
