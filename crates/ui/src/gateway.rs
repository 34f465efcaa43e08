use dioxus::prelude::*;
use futures_util::StreamExt;
use quiz_core::model::{ArticleUrl, QuizId, Theme};
use tracing::warn;

use crate::context::AppContext;
use crate::vm::{AppVm, RequestTicket};

/// Work for the gateway worker. Requests carry the ticket `AppVm` issued for them.
#[derive(Clone, Debug)]
pub enum GatewayCommand {
    Generate { ticket: RequestTicket, url: ArticleUrl },
    RefreshHistory { ticket: RequestTicket },
    OpenQuiz { ticket: RequestTicket, id: QuizId },
    SaveTheme(Theme),
}

/// Owns every backend and preference call for the routed views.
///
/// Mount it in a component that stays alive across tab switches: results are
/// applied to `AppVm` even after the view that started the request is gone.
/// `on_quiz_opened` fires once a stored quiz became the active document.
pub fn use_gateway_worker(on_quiz_opened: Callback<()>) -> Coroutine<GatewayCommand> {
    let ctx = use_context::<AppContext>();
    let app = use_context::<Signal<AppVm>>();
    use_coroutine(move |rx: UnboundedReceiver<GatewayCommand>| {
        run_worker(rx, ctx.clone(), app, on_quiz_opened)
    })
}

async fn run_worker(
    mut rx: UnboundedReceiver<GatewayCommand>,
    ctx: AppContext,
    mut app: Signal<AppVm>,
    on_quiz_opened: Callback<()>,
) {
    let quiz_api = ctx.quiz_api();
    let theme_service = ctx.theme_service();

    while let Some(command) = rx.next().await {
        match command {
            GatewayCommand::Generate { ticket, url } => {
                let result = quiz_api.generate_quiz(&url).await;
                app.write().finish_generate(ticket, result);
            }
            GatewayCommand::RefreshHistory { ticket } => {
                let result = quiz_api.list_history().await;
                app.write().finish_history(ticket, result);
            }
            GatewayCommand::OpenQuiz { ticket, id } => {
                let result = quiz_api.get_quiz(id).await;
                if app.write().finish_select_quiz(ticket, id, result) {
                    on_quiz_opened.call(());
                }
            }
            GatewayCommand::SaveTheme(theme) => {
                if let Err(err) = theme_service.save(theme).await {
                    warn!(error = %err, "failed to persist theme preference");
                }
            }
        }
    }
}

//
// ─── VIEW ACTIONS ──────────────────────────────────────────────────────────────
//

/// Start a generation for `raw_url`. Validation errors land in `AppVm` directly.
pub fn request_generate(
    mut app: Signal<AppVm>,
    worker: &Coroutine<GatewayCommand>,
    raw_url: &str,
) {
    let started = app.write().begin_generate(raw_url);
    if let Some((ticket, url)) = started {
        worker.send(GatewayCommand::Generate { ticket, url });
    }
}

pub fn request_history(mut app: Signal<AppVm>, worker: &Coroutine<GatewayCommand>) {
    let started = app.write().begin_history_refresh();
    if let Some(ticket) = started {
        worker.send(GatewayCommand::RefreshHistory { ticket });
    }
}

pub fn request_quiz(mut app: Signal<AppVm>, worker: &Coroutine<GatewayCommand>, id: QuizId) {
    let started = app.write().begin_select_quiz();
    if let Some(ticket) = started {
        worker.send(GatewayCommand::OpenQuiz { ticket, id });
    }
}

/// Flip the theme now and persist it in the background.
pub fn switch_theme(mut app: Signal<AppVm>, worker: &Coroutine<GatewayCommand>) {
    let theme = app.write().toggle_theme();
    worker.send(GatewayCommand::SaveTheme(theme));
}
