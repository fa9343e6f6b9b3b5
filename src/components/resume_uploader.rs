use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::app::SessionContext;

#[derive(Clone, PartialEq)]
enum UploadStatus {
    Idle,
    Uploading,
    Done,
    Failed(String),
}

/// One-shot resume upload: picks a PDF, sends it for text extraction and
/// stores the result in the session. A failed upload leaves the session's
/// resume text untouched.
#[function_component(ResumeUploader)]
pub fn resume_uploader() -> Html {
    let ctx = use_context::<SessionContext>().expect("session context");
    let status = use_state(|| UploadStatus::Idle);

    let on_file_change = {
        let status = status.clone();
        let set_resume_text = ctx.set_resume_text.clone();
        Callback::from(move |event: Event| {
            let input = event.target_unchecked_into::<HtmlInputElement>();
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            let status = status.clone();
            let set_resume_text = set_resume_text.clone();
            status.set(UploadStatus::Uploading);
            spawn_local(async move {
                match api::upload_resume(&file).await {
                    Ok(resume_text) => {
                        set_resume_text.emit(resume_text);
                        status.set(UploadStatus::Done);
                    }
                    Err(err) => {
                        status.set(UploadStatus::Failed(format!("Upload failed: {}", err)));
                    }
                }
            });
        })
    };

    html! {
        <div>
            <h3 style="font-size:1.1em; font-weight:bold; margin-bottom:0.5em;">{ "Upload Your Resume (PDF only)" }</h3>
            <input type="file" accept="application/pdf" onchange={on_file_change} />
            { match &*status {
                UploadStatus::Idle => html! {},
                UploadStatus::Uploading => html! {
                    <p style="color:#0056b3; margin-top:0.5em;">{ "Uploading..." }</p>
                },
                UploadStatus::Done => html! {
                    <p style="color:#155724; margin-top:0.5em;">{ "Upload successful!" }</p>
                },
                UploadStatus::Failed(message) => html! {
                    <p style="color:#721c24; margin-top:0.5em;">{ message }</p>
                },
            }}
        </div>
    }
}
