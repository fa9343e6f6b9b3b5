use yew::prelude::*;

use crate::format::render_narrative;
use crate::test_session::TestSummary;
use crate::types::{AnsweredQuestion, DetailedFeedback};

#[derive(Properties, PartialEq)]
pub struct TestResultsProps {
    pub history: Vec<AnsweredQuestion>,
    pub feedback: Option<DetailedFeedback>,
    pub fetching: bool,
    pub on_request_feedback: Callback<MouseEvent>,
    pub on_restart: Callback<MouseEvent>,
    pub on_home: Callback<MouseEvent>,
}

fn stat_card(label: &str, value: String, color: &str) -> Html {
    html! {
        <div style="background:#f8f9fa; padding:1em; border-radius:8px; text-align:center; flex:1;">
            <div style="color:#666;">{ label }</div>
            <div style={format!("font-size:2em; font-weight:bold; color:{};", color)}>{ value }</div>
        </div>
    }
}

/// Read-only view over a frozen test history: summary statistics, the
/// per-question review and the optional narrative feedback.
#[function_component(TestResults)]
pub fn test_results(props: &TestResultsProps) -> Html {
    let summary = TestSummary::from_history(&props.history);

    html! {
        <div style="max-width:760px; margin:0 auto; padding:1.5em; background:white; border:1px solid #ddd; border-radius:12px;">
            <h2 style="font-size:1.5em; font-weight:bold; margin-bottom:1em;">{ "Test Results" }</h2>

            <div style="display:flex; gap:1em; margin-bottom:1.5em;">
                { stat_card("Questions Answered", summary.total.to_string(), "#007bff") }
                { stat_card("Correct Answers", summary.correct.to_string(), "#198754") }
                { stat_card("Accuracy", format!("{}%", summary.accuracy), "#6f42c1") }
            </div>

            <p style="margin-bottom:1.5em;">
                { "Highest difficulty level reached: " }
                <strong>{ format!("{}/10", summary.highest_difficulty) }</strong>
            </p>

            <h3 style="font-size:1.2em; font-weight:bold; margin-bottom:0.75em;">{ "Question Review" }</h3>
            <div style="margin-bottom:1.5em;">
                { for props.history.iter().enumerate().map(|(index, entry)| html! {
                    <div key={index} style="border-bottom:1px solid #eee; padding:0.75em 0;">
                        <details style="cursor:pointer;">
                            <summary>
                                <span>{ format!("Question {} (Difficulty: {}/10)", index + 1, entry.difficulty) }</span>
                                { " " }
                                <span style={if entry.is_correct { "color:#198754;" } else { "color:#dc3545;" }}>
                                    { if entry.is_correct { "✓ Correct" } else { "✗ Incorrect" } }
                                </span>
                            </summary>
                            <div style="margin-top:0.5em; padding-left:1em;">
                                <p><strong>{ "Q: " }</strong>{ &entry.question }</p>
                                <p><strong>{ "Your answer: " }</strong>{ &entry.user_answer }</p>
                                <p><strong>{ "Correct answer: " }</strong>{ &entry.correct_answer }</p>
                            </div>
                        </details>
                    </div>
                })}
            </div>

            { match &props.feedback {
                None => html! {
                    <button
                        onclick={props.on_request_feedback.clone()}
                        disabled={props.fetching}
                        style="padding:0.5em 1em; background:#6f42c1; color:white; border:none; border-radius:4px; cursor:pointer; margin-bottom:1.5em;"
                    >
                        { if props.fetching { "Generating..." } else { "Get Detailed Feedback" } }
                    </button>
                },
                Some(feedback) => html! {
                    <div style="margin-bottom:1.5em;">
                        <h3 style="font-size:1.2em; font-weight:bold; margin-bottom:0.75em;">{ "Personalized Feedback" }</h3>
                        <div style="background:#f8f9fa; padding:1em; border-radius:8px; margin-bottom:1em;">
                            { render_narrative(&feedback.feedback_summary) }
                        </div>

                        <h4 style="font-weight:bold; margin-bottom:0.5em;">{ "Skill Level Assessment" }</h4>
                        <div style="margin-bottom:1em;">
                            { for feedback.skill_levels.iter().enumerate().map(|(index, skill)| html! {
                                <div key={index} style="border-left:4px solid #007bff; padding-left:0.75em; margin-bottom:0.75em;">
                                    <p style="font-weight:500; margin:0 0 0.25em 0;">{ format!("{}: {}", skill.skill, skill.level) }</p>
                                    { render_narrative(&skill.evidence) }
                                </div>
                            })}
                        </div>

                        <h4 style="font-weight:bold; margin-bottom:0.5em;">{ "Strengths" }</h4>
                        <div style="margin-bottom:1em;">
                            { render_narrative(&feedback.strengths.join("\n")) }
                        </div>

                        <h4 style="font-weight:bold; margin-bottom:0.5em;">{ "Areas for Improvement" }</h4>
                        <div style="margin-bottom:1em;">
                            { render_narrative(&feedback.areas_for_improvement.join("\n")) }
                        </div>

                        <h4 style="font-weight:bold; margin-bottom:0.5em;">{ "Suggested Learning Path" }</h4>
                        <div style="margin-bottom:1em;">
                            { render_narrative(&feedback.suggested_improvements.join("\n")) }
                        </div>
                    </div>
                },
            }}

            <div style="display:flex; gap:1em;">
                <button
                    onclick={props.on_restart.clone()}
                    style="padding:0.5em 1em; background:#007bff; color:white; border:none; border-radius:4px; cursor:pointer;"
                >
                    { "Start New Test" }
                </button>
                <button
                    onclick={props.on_home.clone()}
                    style="padding:0.5em 1em; border:1px solid #ccc; border-radius:4px; background:white; cursor:pointer;"
                >
                    { "Return to Home" }
                </button>
            </div>
        </div>
    }
}
