use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::app::{Page, SessionContext};
use crate::error::ApiError;
use crate::types::SignupRequest;

/// User-facing accounts and institute accounts share the same forms but hit
/// different endpoints and land on different dashboards.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    User,
    Institute,
}

impl Audience {
    fn name_placeholder(self) -> &'static str {
        match self {
            Audience::User => "Full Name",
            Audience::Institute => "Institute Name",
        }
    }

    fn login_title(self) -> &'static str {
        match self {
            Audience::User => "Login",
            Audience::Institute => "Institute Login",
        }
    }

    fn signup_title(self) -> &'static str {
        match self {
            Audience::User => "Sign Up",
            Audience::Institute => "Institute Sign Up",
        }
    }

    fn destination(self) -> Page {
        match self {
            Audience::User => Page::Dashboard,
            Audience::Institute => Page::InstituteDashboard,
        }
    }
}

fn input_setter(state: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |event: InputEvent| {
        let input = event.target_unchecked_into::<HtmlInputElement>();
        state.set(input.value());
    })
}

fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ApiError> {
    if name.trim().is_empty()
        || email.trim().is_empty()
        || password.is_empty()
        || confirm_password.is_empty()
    {
        return Err(ApiError::Validation("All fields are required.".to_string()));
    }
    if password != confirm_password {
        return Err(ApiError::Validation("Passwords do not match.".to_string()));
    }
    Ok(())
}

const INPUT_STYLE: &str =
    "width:100%; padding:0.5em; margin-bottom:1em; border:1px solid #ccc; border-radius:4px; box-sizing:border-box;";
const BUTTON_STYLE: &str =
    "width:100%; padding:0.7em 0; font-size:1em; background:#007bff; color:white; border:none; border-radius:4px; cursor:pointer;";

#[derive(Properties, PartialEq)]
pub struct AuthPageProps {
    pub audience: Audience,
    pub navigate: Callback<Page>,
}

/// Login/signup toggle card, shared by users and institutes.
#[function_component(AuthPage)]
pub fn auth_page(props: &AuthPageProps) -> Html {
    let show_signup = use_state(|| true);

    let on_toggle = {
        let show_signup = show_signup.clone();
        Callback::from(move |_: ()| show_signup.set(!*show_signup))
    };

    let form = if *show_signup {
        html! {
            <SignupForm
                audience={props.audience}
                navigate={props.navigate.clone()}
                on_toggle={on_toggle}
            />
        }
    } else {
        html! {
            <LoginForm
                audience={props.audience}
                navigate={props.navigate.clone()}
                on_toggle={on_toggle}
            />
        }
    };

    html! {
        <div style="max-width:420px; margin:2.5em auto; padding:2em; background:white; border:1px solid #ddd; border-radius:12px; box-shadow:0 1px 4px rgba(0,0,0,0.1);">
            { form }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FormProps {
    audience: Audience,
    navigate: Callback<Page>,
    on_toggle: Callback<()>,
}

#[function_component(LoginForm)]
fn login_form(props: &FormProps) -> Html {
    let ctx = use_context::<SessionContext>().expect("session context");
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let login = ctx.login.clone();
        let navigate = props.navigate.clone();
        let audience = props.audience;
        Callback::from(move |_: MouseEvent| {
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            if email_value.trim().is_empty() || password_value.is_empty() {
                error.set(Some("All fields are required.".to_string()));
                return;
            }
            let login = login.clone();
            let navigate = navigate.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            submitting.set(true);
            spawn_local(async move {
                let result = match audience {
                    Audience::User => api::login(&email_value, &password_value).await,
                    Audience::Institute => {
                        api::institute_login(&email_value, &password_value).await
                    }
                };
                match result {
                    Ok(token) => {
                        login.emit(token);
                        navigate.emit(audience.destination());
                    }
                    Err(err) => error.set(Some(format!("Login failed: {}", err))),
                }
                submitting.set(false);
            });
        })
    };

    let on_show_signup = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_| on_toggle.emit(()))
    };

    html! {
        <div>
            <h2 style="font-size:1.4em; font-weight:bold; margin-bottom:1em;">{ props.audience.login_title() }</h2>
            { if let Some(message) = &*error {
                html! { <p style="color:#dc3545; margin-bottom:1em;">{ message }</p> }
            } else {
                html! {}
            }}
            <input
                type="email"
                placeholder="Email Address"
                value={(*email).clone()}
                oninput={input_setter(email.clone())}
                style={INPUT_STYLE}
            />
            <input
                type="password"
                placeholder="Password"
                value={(*password).clone()}
                oninput={input_setter(password.clone())}
                style={INPUT_STYLE}
            />
            <button onclick={on_submit} disabled={*submitting} style={BUTTON_STYLE}>
                { if *submitting { "Logging in..." } else { "Login" } }
            </button>
            <div style="text-align:center; margin-top:1em; font-size:0.9em;">
                <span>{ "Don't have an account? " }</span>
                <span onclick={on_show_signup} style="color:#007bff; cursor:pointer;">{ "Signup" }</span>
            </div>
        </div>
    }
}

#[function_component(SignupForm)]
fn signup_form(props: &FormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let on_toggle = props.on_toggle.clone();
        let audience = props.audience;
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = validate_signup(&name, &email, &password, &confirm_password) {
                error.set(Some(err.to_string()));
                return;
            }
            let profile = SignupRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let submitting = submitting.clone();
            let on_toggle = on_toggle.clone();
            submitting.set(true);
            spawn_local(async move {
                let result = match audience {
                    Audience::User => api::signup(&profile).await,
                    Audience::Institute => api::institute_signup(&profile).await,
                };
                match result {
                    Ok(_) => {
                        super::alert("Signup successful! Please log in.");
                        on_toggle.emit(());
                    }
                    Err(err) => error.set(Some(format!("Signup failed: {}", err))),
                }
                submitting.set(false);
            });
        })
    };

    let on_show_login = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_| on_toggle.emit(()))
    };

    html! {
        <div>
            <h2 style="font-size:1.4em; font-weight:bold; margin-bottom:1em;">{ props.audience.signup_title() }</h2>
            { if let Some(message) = &*error {
                html! { <p style="color:#dc3545; margin-bottom:1em;">{ message }</p> }
            } else {
                html! {}
            }}
            <input
                type="text"
                placeholder={props.audience.name_placeholder()}
                value={(*name).clone()}
                oninput={input_setter(name.clone())}
                style={INPUT_STYLE}
            />
            <input
                type="email"
                placeholder="Email Address"
                value={(*email).clone()}
                oninput={input_setter(email.clone())}
                style={INPUT_STYLE}
            />
            <input
                type="password"
                placeholder="Password"
                value={(*password).clone()}
                oninput={input_setter(password.clone())}
                style={INPUT_STYLE}
            />
            <input
                type="password"
                placeholder="Confirm Password"
                value={(*confirm_password).clone()}
                oninput={input_setter(confirm_password.clone())}
                style={INPUT_STYLE}
            />
            <button onclick={on_submit} disabled={*submitting} style={BUTTON_STYLE}>
                { if *submitting { "Signing up..." } else { "Sign Up" } }
            </button>
            <div style="text-align:center; margin-top:1em; font-size:0.9em;">
                <span>{ "Already have an account? " }</span>
                <span onclick={on_show_login} style="color:#007bff; cursor:pointer;">{ "Login" }</span>
            </div>
        </div>
    }
}
