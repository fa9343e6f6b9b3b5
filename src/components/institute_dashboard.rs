use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::app::SessionContext;

/// Institute view: bulk-upload candidate resumes and show the backend's
/// ranked shortlist. Logout is the only way out; it clears the session and
/// returns to the landing view.
#[function_component(InstituteDashboard)]
pub fn institute_dashboard() -> Html {
    let ctx = use_context::<SessionContext>().expect("session context");
    let top_result = use_state(Vec::<String>::new);
    let uploading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_logout = {
        let logout = ctx.logout.clone();
        Callback::from(move |_| logout.emit(()))
    };

    let on_files_change = {
        let top_result = top_result.clone();
        let uploading = uploading.clone();
        let error = error.clone();
        Callback::from(move |event: Event| {
            let input = event.target_unchecked_into::<HtmlInputElement>();
            let Some(list) = input.files() else {
                return;
            };
            let files: Vec<web_sys::File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
            if files.is_empty() {
                return;
            }
            let top_result = top_result.clone();
            let uploading = uploading.clone();
            let error = error.clone();
            uploading.set(true);
            spawn_local(async move {
                match api::upload_resumes_bulk(&files).await {
                    Ok(names) => {
                        error.set(None);
                        top_result.set(names);
                    }
                    Err(err) => {
                        error.set(Some(format!("Upload failed: {}", err)));
                    }
                }
                uploading.set(false);
            });
        })
    };

    html! {
        <div>
            <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:1.5em;">
                <h1 style="font-size:1.5em; font-weight:bold; margin:0;">{ "Best Resume Selection" }</h1>
                <button onclick={on_logout} style="padding:0.4em 1em; background:#dc3545; color:white; border:none; border-radius:4px; cursor:pointer;">
                    { "Logout" }
                </button>
            </div>

            <div style="margin-bottom:1.5em;">
                <input
                    type="file"
                    multiple=true
                    accept=".pdf"
                    onchange={on_files_change}
                    style="display:block; width:100%; border:1px solid #ccc; border-radius:4px; padding:0.5em; cursor:pointer;"
                />
                { if *uploading {
                    html! { <p style="color:#0056b3; margin-top:0.5em;">{ "Uploading..." }</p> }
                } else {
                    html! {}
                }}
                { if let Some(message) = &*error {
                    html! { <p style="color:#721c24; margin-top:0.5em;">{ message }</p> }
                } else {
                    html! {}
                }}
            </div>

            { if top_result.is_empty() {
                html! {}
            } else {
                html! {
                    <div style="padding:1em; border:1px solid #c3e6cb; border-radius:8px; background:#d4edda;">
                        <h2 style="font-size:1.1em; font-weight:bold; margin:0 0 0.5em 0;">{ "Top Resume Results" }</h2>
                        <ol style="margin:0; padding-left:1.5em;">
                            { for top_result.iter().map(|name| html! { <li>{ name }</li> }) }
                        </ol>
                    </div>
                }
            }}
        </div>
    }
}
