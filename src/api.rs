//! Backend HTTP client. One async function per endpoint; every call is a
//! plain request/response exchange with no retry logic. Failures surface to
//! the caller as [`ApiError`] and the user decides whether to try again.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::ApiError;
use crate::types::{
    AnswerVerdict, AnsweredQuestion, DetailedFeedback, Question, SignupRequest, TokenResponse,
};

/// Backend base URL; override at build time with API_BASE_URL.
const API_BASE: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

fn endpoint(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

fn window() -> Result<web_sys::Window, ApiError> {
    web_sys::window().ok_or_else(|| ApiError::Network("window not available".to_string()))
}

/// FastAPI-style error bodies carry a `detail` field; fall back to the
/// status code when there is none.
async fn error_detail(resp: &web_sys::Response) -> String {
    if let Ok(promise) = resp.json() {
        if let Ok(body) = JsFuture::from(promise).await {
            if let Ok(detail) = js_sys::Reflect::get(&body, &JsValue::from_str("detail")) {
                if let Some(detail) = detail.as_string() {
                    return detail;
                }
            }
        }
    }
    format!("Request failed with status {}", resp.status())
}

async fn send(request: &web_sys::Request) -> Result<web_sys::Response, ApiError> {
    let resp_value = JsFuture::from(window()?.fetch_with_request(request)).await?;
    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Network("unexpected fetch response".to_string()))?;
    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::Backend(error_detail(&resp).await))
    }
}

async fn response_value(resp: &web_sys::Response) -> Result<JsValue, ApiError> {
    Ok(JsFuture::from(resp.json()?).await?)
}

async fn response_json<T: DeserializeOwned>(resp: &web_sys::Response) -> Result<T, ApiError> {
    let value = response_value(resp).await?;
    serde_wasm_bindgen::from_value(value).map_err(|err| ApiError::Network(err.to_string()))
}

async fn post_json_value<B: Serialize>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<JsValue, ApiError> {
    let payload =
        serde_json::to_string(body).map_err(|err| ApiError::Network(err.to_string()))?;
    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&payload));

    let request = web_sys::Request::new_with_str_and_init(&endpoint(path), &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    if let Some(token) = token {
        request
            .headers()
            .set("Authorization", &format!("Bearer {}", token))?;
    }

    let resp = send(&request).await?;
    response_value(&resp).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let value = post_json_value(path, body, token).await?;
    serde_wasm_bindgen::from_value(value).map_err(|err| ApiError::Network(err.to_string()))
}

async fn post_form(path: &str, form: web_sys::FormData) -> Result<web_sys::Response, ApiError> {
    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form.into());
    let request = web_sys::Request::new_with_str_and_init(&endpoint(path), &opts)?;
    send(&request).await
}

#[derive(Serialize)]
struct ResumeRequest<'a> {
    resume_text: &'a str,
}

/// Asks the backend for the next adaptive question. The backend reports
/// generation failures as an `error` field in an otherwise OK response.
pub async fn fetch_question(resume_text: &str) -> Result<Question, ApiError> {
    let value = post_json_value(
        "/adaptive_test/start",
        &ResumeRequest { resume_text },
        None,
    )
    .await?;
    if let Ok(error) = js_sys::Reflect::get(&value, &JsValue::from_str("error")) {
        if let Some(message) = error.as_string() {
            return Err(ApiError::Backend(message));
        }
    }
    serde_wasm_bindgen::from_value(value).map_err(|err| ApiError::Network(err.to_string()))
}

#[derive(Serialize)]
struct AnswerRequest<'a> {
    selected_answer: &'a str,
    current_question: &'a Question,
}

pub async fn submit_answer(
    selected_answer: &str,
    current_question: &Question,
) -> Result<AnswerVerdict, ApiError> {
    post_json(
        "/adaptive_test/answer",
        &AnswerRequest {
            selected_answer,
            current_question,
        },
        None,
    )
    .await
}

/// Drops the backend's server-side test state. The acknowledgement body is
/// ignored.
pub async fn reset_test() -> Result<(), ApiError> {
    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");
    let request = web_sys::Request::new_with_str_and_init(&endpoint("/adaptive_test/reset"), &opts)?;
    send(&request).await?;
    Ok(())
}

#[derive(Serialize)]
struct TestResultsRequest<'a> {
    questions: &'a [AnsweredQuestion],
    resume_text: &'a str,
}

#[derive(Deserialize)]
struct FeedbackResponse {
    feedback: DetailedFeedback,
}

pub async fn fetch_detailed_feedback(
    questions: &[AnsweredQuestion],
    resume_text: &str,
) -> Result<DetailedFeedback, ApiError> {
    let resp: FeedbackResponse = post_json(
        "/adaptive_test/results",
        &TestResultsRequest {
            questions,
            resume_text,
        },
        None,
    )
    .await?;
    Ok(resp.feedback)
}

/// OAuth2 password flow: form-encoded `username`/`password`, opaque token
/// back.
async fn request_token(path: &str, username: &str, password: &str) -> Result<String, ApiError> {
    let params = web_sys::UrlSearchParams::new()?;
    params.append("username", username);
    params.append("password", password);

    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&params.into());

    let request = web_sys::Request::new_with_str_and_init(&endpoint(path), &opts)?;
    let resp = send(&request).await?;
    let token: TokenResponse = response_json(&resp).await?;
    Ok(token.access_token)
}

pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    request_token("/token", email, password).await
}

pub async fn institute_login(email: &str, password: &str) -> Result<String, ApiError> {
    request_token("/admin_token", email, password).await
}

#[derive(Deserialize)]
struct MessageResponse {
    message: String,
}

pub async fn signup(profile: &SignupRequest) -> Result<String, ApiError> {
    let resp: MessageResponse = post_json("/signup", profile, None).await?;
    Ok(resp.message)
}

pub async fn institute_signup(profile: &SignupRequest) -> Result<String, ApiError> {
    let resp: MessageResponse = post_json("/adminsignup", profile, None).await?;
    Ok(resp.message)
}

#[derive(Deserialize)]
struct UploadResponse {
    resume_text: String,
}

/// Uploads one resume document; the backend answers with the extracted
/// plain text.
pub async fn upload_resume(file: &web_sys::File) -> Result<String, ApiError> {
    let form = web_sys::FormData::new()?;
    form.append_with_blob("file", file)?;
    let resp = post_form("/upload_resume", form).await?;
    let body: UploadResponse = response_json(&resp).await?;
    Ok(body.resume_text)
}

#[derive(Deserialize)]
struct BulkUploadResponse {
    top_result: Vec<String>,
}

/// Institute bulk upload: many documents in, ranked top candidate names out.
pub async fn upload_resumes_bulk(files: &[web_sys::File]) -> Result<Vec<String>, ApiError> {
    let form = web_sys::FormData::new()?;
    for file in files {
        form.append_with_blob("files", file)?;
    }
    let resp = post_form("/upload-resumes/", form).await?;
    let body: BulkUploadResponse = response_json(&resp).await?;
    Ok(body.top_result)
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    user_query: &'a str,
    resume_text: &'a str,
}

#[derive(Deserialize)]
struct QueryResponse {
    response: String,
}

/// Free-text question about the uploaded resume; returns narrative text for
/// [`crate::format::render_narrative`].
pub async fn ask_query(
    user_query: &str,
    resume_text: &str,
    token: Option<&str>,
) -> Result<String, ApiError> {
    let body: QueryResponse = post_json(
        "/ask-query",
        &QueryRequest {
            user_query,
            resume_text,
        },
        token,
    )
    .await?;
    Ok(body.response)
}
