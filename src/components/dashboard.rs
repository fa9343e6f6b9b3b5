use yew::prelude::*;

use crate::app::{Page, SessionContext};
use crate::components::{QueryBox, ResumeUploader};

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub navigate: Callback<Page>,
}

/// User dashboard: resume upload, free-text queries and the entry point to
/// the knowledge test.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let ctx = use_context::<SessionContext>().expect("session context");

    let on_logout = {
        let logout = ctx.logout.clone();
        Callback::from(move |_| logout.emit(()))
    };

    let on_take_test = {
        let navigate = props.navigate.clone();
        let has_resume = ctx.session.has_resume();
        Callback::from(move |_| {
            if has_resume {
                navigate.emit(Page::AdaptiveTest);
            } else {
                super::alert("Please upload your resume first!");
            }
        })
    };

    html! {
        <div>
            <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:1.5em;">
                <h1 style="font-size:1.5em; font-weight:bold; margin:0;">{ "AI Resume & Feedback Query Assistant" }</h1>
                <button onclick={on_logout} style="padding:0.4em 1em; background:#dc3545; color:white; border:none; border-radius:4px; cursor:pointer;">
                    { "Logout" }
                </button>
            </div>

            <div style="margin-bottom:1.5em;">
                <ResumeUploader />
            </div>

            { if ctx.session.has_resume() {
                html! {
                    <>
                        <div style="margin-bottom:1.5em;">
                            <QueryBox />
                        </div>
                        <div style="background:#e7f3ff; padding:1em; border-radius:8px;">
                            <h2 style="font-size:1.1em; font-weight:bold; margin:0 0 0.5em 0;">{ "Ready to test your knowledge?" }</h2>
                            <p style="margin:0 0 0.75em 0;">
                                { "Take an adaptive assessment based on your resume to identify strengths and areas for improvement." }
                            </p>
                            <button onclick={on_take_test} style="padding:0.5em 1em; background:#007bff; color:white; border:none; border-radius:4px; cursor:pointer;">
                                { "Start Knowledge Test" }
                            </button>
                        </div>
                    </>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
