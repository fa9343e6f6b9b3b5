use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::app::SessionContext;
use crate::format::render_narrative;

/// Free-text questions about the uploaded resume. The narrative answer is
/// rendered with the shared formatting rules.
#[function_component(QueryBox)]
pub fn query_box() -> Html {
    let ctx = use_context::<SessionContext>().expect("session context");
    let user_query = use_state(String::new);
    let response = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    if !ctx.session.has_resume() {
        return html! {};
    }

    let on_input = {
        let user_query = user_query.clone();
        Callback::from(move |event: InputEvent| {
            let input = event.target_unchecked_into::<HtmlInputElement>();
            user_query.set(input.value());
        })
    };

    let on_submit = {
        let user_query = user_query.clone();
        let response = response.clone();
        let error = error.clone();
        let loading = loading.clone();
        let resume_text = ctx.session.resume_text.clone();
        let token = ctx.session.token.clone();
        Callback::from(move |_| {
            let query = (*user_query).clone();
            if query.trim().is_empty() {
                error.set(Some("Please enter a query.".to_string()));
                return;
            }
            error.set(None);
            let response = response.clone();
            let error = error.clone();
            let loading = loading.clone();
            let resume_text = resume_text.clone();
            let token = token.clone();
            loading.set(true);
            spawn_local(async move {
                match api::ask_query(&query, &resume_text, token.as_deref()).await {
                    Ok(answer) => response.set(Some(answer)),
                    Err(err) => error.set(Some(format!("Request failed: {}", err))),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div>
            <h3 style="font-size:1.1em; font-weight:bold; margin-bottom:0.5em;">{ "Ask a Query" }</h3>
            <input
                type="text"
                placeholder="Enter your question"
                value={(*user_query).clone()}
                oninput={on_input}
                style="width:60%; padding:8px; border:1px solid #ccc; border-radius:4px;"
            />
            <button
                onclick={on_submit}
                disabled={*loading}
                style="margin-left:10px; padding:8px 16px; background:#007bff; color:white; border:none; border-radius:4px; cursor:pointer;"
            >
                { if *loading { "Fetching..." } else { "Get Response" } }
            </button>
            { if let Some(message) = &*error {
                html! { <p style="color:#dc3545; margin-top:1em;"><strong>{ message }</strong></p> }
            } else {
                html! {}
            }}
            { if let Some(answer) = &*response {
                html! {
                    <div style="margin-top:1.5em;">
                        <h4 style="font-weight:bold;">{ "AI Response:" }</h4>
                        { render_narrative(answer) }
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
