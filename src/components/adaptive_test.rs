use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::app::{Page, SessionContext};
use crate::components::TestResults;
use crate::test_session::{validate_selection, TestPhase, TestSession};

/// How long the answer verdict stays on screen before the test moves on, in
/// milliseconds.
const FEEDBACK_DELAY_MS: u32 = 1_500;

#[derive(Properties, PartialEq)]
pub struct AdaptiveTestProps {
    pub navigate: Callback<Page>,
}

/// The adaptive test controller: one question outstanding at a time, answers
/// logged locally, correctness judged by the backend, a fixed delay between
/// verdict and next question. All transitions are user- or timer-driven.
#[function_component(AdaptiveTest)]
pub fn adaptive_test(props: &AdaptiveTestProps) -> Html {
    let ctx = use_context::<SessionContext>().expect("session context");
    let session = use_state(TestSession::new);
    let selected_answer = use_state(String::new);
    let feedback_message = use_state(|| None::<String>);
    let error_message = use_state(|| None::<String>);
    let fetching_feedback = use_state(|| false);
    let submitting = use_state(|| false);
    let resetting = use_state(|| false);

    let resume_text = ctx.session.resume_text.clone();

    // Fetch the next question; shared by the mount effect, the post-feedback
    // advance and the restart action.
    let load_question = {
        let session = session.clone();
        let selected_answer = selected_answer.clone();
        let feedback_message = feedback_message.clone();
        let error_message = error_message.clone();
        let resume_text = resume_text.clone();
        Callback::from(move |_: ()| {
            let session = session.clone();
            let selected_answer = selected_answer.clone();
            let feedback_message = feedback_message.clone();
            let error_message = error_message.clone();
            let resume_text = resume_text.clone();
            spawn_local(async move {
                selected_answer.set(String::new());
                feedback_message.set(None);
                match api::fetch_question(&resume_text).await {
                    Ok(question) => {
                        error_message.set(None);
                        let mut next = (*session).clone();
                        next.question_received(question);
                        session.set(next);
                    }
                    Err(err) => {
                        // Stay in the loading phase; no automatic retry.
                        error_message.set(Some(format!("Failed to load question: {}", err)));
                    }
                }
            });
        })
    };

    {
        let load_question = load_question.clone();
        let has_resume = !resume_text.is_empty();
        use_effect_with((), move |_| {
            if has_resume {
                load_question.emit(());
            }
            // Best-effort server-side cleanup when the test page goes away.
            // Only worth doing when a test was actually started; failure is
            // logged, never surfaced.
            move || {
                if has_resume {
                    spawn_local(async move {
                        if let Err(err) = api::reset_test().await {
                            web_sys::console::log_1(
                                &format!("Failed to reset test on teardown: {}", err).into(),
                            );
                        }
                    });
                }
            }
        });
    }

    let on_select = {
        let selected_answer = selected_answer.clone();
        Callback::from(move |event: Event| {
            let input = event.target_unchecked_into::<HtmlInputElement>();
            selected_answer.set(input.value());
        })
    };

    let on_submit = {
        let session = session.clone();
        let selected_answer = selected_answer.clone();
        let feedback_message = feedback_message.clone();
        let error_message = error_message.clone();
        let load_question = load_question.clone();
        let submitting = submitting.clone();
        Callback::from(move |_: MouseEvent| {
            // One answer in flight at a time; a second click while the
            // backend is still scoring must not send a second request.
            if *submitting {
                return;
            }
            let selected = (*selected_answer).clone();
            if let Err(err) = validate_selection(&selected) {
                error_message.set(Some(err.to_string()));
                return;
            }
            let Some(question) = (*session).current_question.clone() else {
                return;
            };
            submitting.set(true);
            let session = session.clone();
            let feedback_message = feedback_message.clone();
            let error_message = error_message.clone();
            let load_question = load_question.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                match api::submit_answer(&selected, &question).await {
                    Ok(verdict) => {
                        error_message.set(None);
                        let mut next = (*session).clone();
                        let Some(entry) = next.record_answer(&selected, verdict.correct) else {
                            // Stale verdict (the phase moved on); drop it.
                            submitting.set(false);
                            return;
                        };
                        feedback_message.set(Some(if entry.is_correct {
                            "Correct!".to_string()
                        } else {
                            format!("Incorrect. Correct answer: {}", entry.correct_answer)
                        }));
                        session.set(next.clone());
                        submitting.set(false);

                        // Let the user read the verdict before moving on.
                        TimeoutFuture::new(FEEDBACK_DELAY_MS).await;
                        let mut advanced = next;
                        advanced.advance();
                        let needs_fetch = advanced.phase == TestPhase::Loading;
                        session.set(advanced);
                        if needs_fetch {
                            load_question.emit(());
                        }
                    }
                    Err(err) => {
                        // Answer not logged; the user may submit again.
                        error_message.set(Some(format!(
                            "Something went wrong submitting your answer: {}",
                            err
                        )));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    let on_request_feedback = {
        let session = session.clone();
        let fetching_feedback = fetching_feedback.clone();
        let resume_text = resume_text.clone();
        Callback::from(move |_: MouseEvent| {
            if (*session).phase != TestPhase::Complete || *fetching_feedback {
                return;
            }
            let session = session.clone();
            let fetching_feedback = fetching_feedback.clone();
            let resume_text = resume_text.clone();
            fetching_feedback.set(true);
            spawn_local(async move {
                match api::fetch_detailed_feedback(&(*session).history, &resume_text).await {
                    Ok(feedback) => {
                        let mut next = (*session).clone();
                        next.store_feedback(feedback);
                        session.set(next);
                    }
                    Err(_) => {
                        // No stored record on failure; the button stays and
                        // may be pressed again.
                        super::alert("Failed to generate detailed feedback.");
                    }
                }
                fetching_feedback.set(false);
            });
        })
    };

    let on_restart = {
        let session = session.clone();
        let selected_answer = selected_answer.clone();
        let feedback_message = feedback_message.clone();
        let error_message = error_message.clone();
        let load_question = load_question.clone();
        let resetting = resetting.clone();
        Callback::from(move |_: MouseEvent| {
            if *resetting {
                return;
            }
            resetting.set(true);
            let session = session.clone();
            let selected_answer = selected_answer.clone();
            let feedback_message = feedback_message.clone();
            let error_message = error_message.clone();
            let load_question = load_question.clone();
            let resetting = resetting.clone();
            spawn_local(async move {
                match api::reset_test().await {
                    Ok(()) => {
                        session.set(TestSession::new());
                        selected_answer.set(String::new());
                        feedback_message.set(None);
                        error_message.set(None);
                        load_question.emit(());
                    }
                    Err(_) => super::alert("Failed to reset test."),
                }
                resetting.set(false);
            });
        })
    };

    let on_home = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Page::Home))
    };

    if resume_text.is_empty() {
        return html! {
            <div style="text-align:center; margin-top:3em;">
                <div style="background:#f8d7da; padding:1em; border-radius:8px; display:inline-block;">
                    <p style="color:#721c24; margin:0;">
                        { "No resume data available. Please upload a resume first." }
                    </p>
                </div>
                <div style="margin-top:1.5em;">
                    <button onclick={on_home} style="padding:0.5em 1.5em; border:1px solid #ccc; border-radius:4px; background:white; cursor:pointer;">
                        { "Return to Home" }
                    </button>
                </div>
            </div>
        };
    }

    let current = (*session).clone();
    match current.phase {
        TestPhase::Complete => html! {
            <TestResults
                history={current.history}
                feedback={current.feedback}
                fetching={*fetching_feedback}
                on_request_feedback={on_request_feedback}
                on_restart={on_restart}
                on_home={on_home}
            />
        },
        TestPhase::Loading => html! {
            <div style="text-align:center; padding:2em;">
                { match &*error_message {
                    Some(message) => html! {
                        <div style="background:#f8d7da; padding:1em; border-radius:8px; display:inline-block;">
                            <p style="color:#721c24; margin:0;">{ message }</p>
                        </div>
                    },
                    None => html! { <p>{ "Loading question..." }</p> },
                }}
            </div>
        },
        TestPhase::AwaitingAnswer | TestPhase::ShowingFeedback => {
            let showing_feedback = current.phase == TestPhase::ShowingFeedback;
            let Some(question) = current.current_question.as_ref() else {
                return html! { <p style="text-align:center; padding:2em;">{ "Loading question..." }</p> };
            };
            let answered_correctly = current
                .history
                .last()
                .map(|entry| entry.is_correct)
                .unwrap_or(false);

            html! {
                <div style="max-width:640px; margin:0 auto; padding:1.5em; background:white; border:1px solid #ddd; border-radius:12px;">
                    <h2 style="font-size:1.2em; font-weight:bold;">{ format!("Question {}", current.question_number) }</h2>
                    <p style="color:#333;">{ &question.question }</p>

                    <div style="margin-bottom:1em;">
                        { for question.options.iter().enumerate().map(|(index, option)| {
                            html! {
                                <label key={index} style="display:block; padding:0.75em; border:1px solid #ddd; border-radius:8px; margin-bottom:0.5em; cursor:pointer;">
                                    <input
                                        type="radio"
                                        name="answer"
                                        value={option.answer.clone()}
                                        checked={*selected_answer == option.answer}
                                        onchange={on_select.clone()}
                                        disabled={showing_feedback}
                                        style="margin-right:0.5em;"
                                    />
                                    { &option.answer }
                                </label>
                            }
                        })}
                    </div>

                    <button
                        onclick={on_submit}
                        disabled={selected_answer.is_empty() || showing_feedback || *submitting}
                        style="padding:0.5em 1em; background:#007bff; color:white; border:none; border-radius:4px; cursor:pointer;"
                    >
                        { "Submit Answer" }
                    </button>

                    { if let Some(message) = &*error_message {
                        html! { <p style="color:#dc3545; margin-top:1em;">{ message }</p> }
                    } else {
                        html! {}
                    }}
                    { match &*feedback_message {
                        Some(message) if showing_feedback => html! {
                            <div style={format!(
                                "margin-top:1em; padding:0.75em; border-radius:8px; {}",
                                if answered_correctly { "background:#d4edda;" } else { "background:#f8d7da;" }
                            )}>
                                { message }
                            </div>
                        },
                        _ => html! {},
                    }}
                </div>
            }
        }
    }
}
