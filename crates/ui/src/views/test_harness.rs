use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{ArticleUrl, QuizDocument, QuizHistorySummary, QuizId, Theme};
use services::{QuizApi, QuizApiError, ThemeService};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::gateway::{GatewayCommand, request_generate, request_quiz, use_gateway_worker};
use crate::views::{GenerateView, HistoryView};
use crate::vm::AppVm;

/// Canned gateway. Failures come back as a 500 with the stored message.
#[derive(Clone, Default)]
pub struct StubQuizApi {
    pub document: Option<QuizDocument>,
    pub history: Vec<QuizHistorySummary>,
    pub failure: Option<String>,
    /// Latency applied to every call.
    pub delay: Duration,
    pub history_calls: Arc<AtomicUsize>,
}

impl StubQuizApi {
    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn fail<T>(&self) -> Result<T, QuizApiError> {
        Err(QuizApiError::Request {
            status: 500,
            message: self.failure.clone().unwrap_or_default(),
        })
    }

    fn document_or_fail(&self) -> Result<QuizDocument, QuizApiError> {
        match (&self.failure, &self.document) {
            (None, Some(document)) => Ok(document.clone()),
            _ => self.fail(),
        }
    }
}

#[async_trait]
impl QuizApi for StubQuizApi {
    async fn generate_quiz(&self, _url: &ArticleUrl) -> Result<QuizDocument, QuizApiError> {
        self.pause().await;
        self.document_or_fail()
    }

    async fn list_history(&self) -> Result<Vec<QuizHistorySummary>, QuizApiError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        if self.failure.is_some() {
            return self.fail();
        }
        Ok(self.history.clone())
    }

    async fn get_quiz(&self, _id: QuizId) -> Result<QuizDocument, QuizApiError> {
        self.pause().await;
        self.document_or_fail()
    }
}

struct TestApp {
    quiz_api: Arc<StubQuizApi>,
    theme_service: Arc<ThemeService>,
}

impl UiApp for TestApp {
    fn quiz_api(&self) -> Arc<dyn QuizApi> {
        self.quiz_api.clone()
    }

    fn theme_service(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme_service)
    }

    fn initial_theme(&self) -> Theme {
        Theme::Light
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Generate,
    History,
}

/// User actions the harness performs on its own once the view is mounted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HarnessScript {
    #[default]
    Idle,
    /// Submit the URL, then switch to the History view right away.
    GenerateThenLeave(String),
    /// Once history has loaded, open its first row as "View Quiz" does.
    OpenFirstHistoryRow,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    vm: AppVm,
    script: HarnessScript,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Signal::new(props.vm.clone()));
    use_context_provider(|| Signal::new(props.view));
    use_context_provider(|| props.script.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

/// Plays the role of the app layout: owns the gateway worker and swaps views.
#[component]
fn Root() -> Element {
    let mut view = use_context::<Signal<ViewKind>>();
    let app = use_context::<Signal<AppVm>>();
    let on_quiz_opened = use_callback(move |()| view.set(ViewKind::Generate));
    use_gateway_worker(on_quiz_opened);

    let (loading, active) = {
        let vm = app.read();
        (
            vm.is_loading(),
            vm.active()
                .map_or_else(|| "none".to_string(), |quiz| quiz.document().title.clone()),
        )
    };

    rsx! {
        p { class: "harness-state", "loading={loading} active={active}" }
        ScriptRunner {}
        if view() == ViewKind::Generate {
            GenerateView {}
        } else {
            HistoryView {}
        }
    }
}

#[component]
fn ScriptRunner() -> Element {
    let script = use_context::<HarnessScript>();
    let mut view = use_context::<Signal<ViewKind>>();
    let app = use_context::<Signal<AppVm>>();
    let worker = use_coroutine_handle::<GatewayCommand>();
    let mut fired = use_signal(|| false);

    use_effect(move || {
        if fired() {
            return;
        }
        match &script {
            HarnessScript::Idle => {}
            HarnessScript::GenerateThenLeave(raw) => {
                fired.set(true);
                request_generate(app, &worker, raw);
                view.set(ViewKind::History);
            }
            HarnessScript::OpenFirstHistoryRow => {
                let first = {
                    let vm = app.read();
                    if vm.is_loading() {
                        None
                    } else {
                        vm.history().first().map(|item| item.id)
                    }
                };
                if let Some(id) = first {
                    fired.set(true);
                    request_quiz(app, &worker, id);
                }
            }
        }
    });

    rsx! {}
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive spawned tasks until the rendered output contains `needle`.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..40 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, api: StubQuizApi, vm: AppVm) -> ViewHarness {
    setup_scripted_harness(view, api, vm, HarnessScript::Idle)
}

pub fn setup_scripted_harness(
    view: ViewKind,
    api: StubQuizApi,
    vm: AppVm,
    script: HarnessScript,
) -> ViewHarness {
    let storage = Storage::in_memory();
    let theme_service = Arc::new(ThemeService::new(Arc::clone(&storage.preferences)));
    let app = Arc::new(TestApp {
        quiz_api: Arc::new(api),
        theme_service,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            vm,
            script,
        },
    );

    ViewHarness { dom }
}
