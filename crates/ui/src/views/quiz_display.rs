use dioxus::prelude::*;

use crate::gateway::{GatewayCommand, switch_theme};
use crate::vm::{AppVm, OptionVm, QuestionVm, QuizDisplayVm, QuizPanel, map_quiz_panel};

#[component]
pub fn QuizDisplay() -> Element {
    let app = use_context::<Signal<AppVm>>();
    let panel = map_quiz_panel(app.read().active());

    match panel {
        QuizPanel::Nothing => rsx! {},
        QuizPanel::NoQuestions => rsx! {
            div { class: "notice notice-warning",
                p { "Quiz metadata was generated, but no questions were produced. Try a different article." }
            }
        },
        QuizPanel::Quiz(quiz) => rsx! {
            QuizBody { quiz }
        },
    }
}

#[component]
fn QuizBody(quiz: QuizDisplayVm) -> Element {
    let app = use_context::<Signal<AppVm>>();
    let worker = use_coroutine_handle::<GatewayCommand>();
    let dark = app.read().theme().is_dark();

    rsx! {
        div { class: "quiz",
            header { class: "quiz-header",
                h1 { "{quiz.title}" }
                p { class: "quiz-summary",
                    strong { "Summary:" }
                    " {quiz.summary}"
                }
                div { class: "quiz-score",
                    "Score: "
                    span { class: "score-value", "{quiz.score_label}" }
                }
                button {
                    class: "theme-toggle",
                    aria_label: "Toggle theme",
                    onclick: move |_| switch_theme(app, &worker),
                    if dark { "☀️" } else { "🌙" }
                }
            }

            div { class: "quiz-grid",
                section { class: "quiz-questions",
                    h2 { "{quiz.questions_heading}" }
                    for question in quiz.questions.iter().cloned() {
                        QuestionCard { key: "{question.index}", question }
                    }
                }

                aside { class: "quiz-meta",
                    div { class: "panel",
                        h3 { "Key Entities" }
                        p { strong { "People:" } " {quiz.people}" }
                        p { strong { "Organizations:" } " {quiz.organizations}" }
                        p { strong { "Locations:" } " {quiz.locations}" }
                    }
                    div { class: "panel",
                        h3 { "Related Topics" }
                        ul { class: "topics",
                            for topic in quiz.related_topics.iter() {
                                li { "{topic}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm) -> Element {
    let mut app = use_context::<Signal<AppVm>>();
    let index = question.index;
    let card_class = if question.revealed {
        "question-card revealed"
    } else {
        "question-card"
    };

    rsx! {
        div { class: "{card_class}",
            h4 { "{question.heading}" }
            div { class: "options",
                for option in question.options.iter().cloned() {
                    OptionItem { key: "{option.position}", index, option }
                }
            }
            button {
                class: "link-button",
                onclick: move |_| {
                    app.write().toggle_reveal(index);
                },
                "{question.toggle_label}"
            }
            if question.revealed {
                div { class: "explanation",
                    p {
                        strong { "Correct Answer:" }
                        " "
                        span { class: "answer", "{question.answer}" }
                    }
                    p {
                        strong { "Difficulty:" }
                        " "
                        span { class: "difficulty", "{question.difficulty}" }
                    }
                    p {
                        strong { "Explanation:" }
                        " {question.explanation}"
                    }
                }
            }
        }
    }
}

#[component]
fn OptionItem(index: usize, option: OptionVm) -> Element {
    let mut app = use_context::<Signal<AppVm>>();
    let text = option.text.clone();

    rsx! {
        p {
            class: "{option.tone.class()}",
            onclick: move |_| {
                app.write().select_answer(index, &text);
            },
            "{option.text}"
        }
    }
}
