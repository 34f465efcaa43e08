use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::AppVm;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    // Single state container shared by every tab.
    use_context_provider(|| Signal::new(AppVm::new(ctx.initial_theme())));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "AI Wiki Quiz Generator" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
