use yew::prelude::*;

use crate::components::{AdaptiveTest, Audience, AuthPage, Dashboard, InstituteDashboard};
use crate::session::{BrowserStorage, Session};

/// The views of the single-page app. Navigation is plain state, no URL
/// router.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    UserAuth,
    Dashboard,
    AdaptiveTest,
    InstituteAuth,
    InstituteDashboard,
}

/// Injectable session context: the current session plus the three mutations
/// that exist (login, resume upload, logout). All writes go through the
/// storage boundary before the state updates.
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub session: Session,
    pub login: Callback<String>,
    pub set_resume_text: Callback<String>,
    pub logout: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct HomeProps {
    navigate: Callback<Page>,
}

#[function_component(HomeButtons)]
fn home_buttons(props: &HomeProps) -> Html {
    let go_user = {
        let navigate = props.navigate.clone();
        Callback::from(move |_| navigate.emit(Page::UserAuth))
    };
    let go_institute = {
        let navigate = props.navigate.clone();
        Callback::from(move |_| navigate.emit(Page::InstituteAuth))
    };

    html! {
        <div style="margin-top:3em; text-align:center;">
            <h2 style="font-size:1.5em; margin-bottom:1.5em;">{ "Select Usage Type" }</h2>
            <button onclick={go_user} style="padding:0.5em 2em; font-size:1em; margin-right:1.5em; background:#198754; color:white; border:none; border-radius:4px; cursor:pointer;">
                { "User" }
            </button>
            <button onclick={go_institute} style="padding:0.5em 2em; font-size:1em; background:#007bff; color:white; border:none; border-radius:4px; cursor:pointer;">
                { "Institute" }
            </button>
        </div>
    }
}

#[function_component(App)]
pub fn app(_props: &()) -> Html {
    let page = use_state(|| Page::Home);
    // Restore token and resume text persisted by a previous visit
    let session = use_state(|| Session::load(&BrowserStorage));

    let navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };

    let login = {
        let session = session.clone();
        Callback::from(move |token: String| {
            let next = (*session).with_token(token);
            next.save(&BrowserStorage);
            session.set(next);
        })
    };

    let set_resume_text = {
        let session = session.clone();
        Callback::from(move |resume_text: String| {
            let next = (*session).with_resume_text(resume_text);
            next.save(&BrowserStorage);
            session.set(next);
        })
    };

    let logout = {
        let session = session.clone();
        let page = page.clone();
        Callback::from(move |_| {
            let next = Session::default();
            next.save(&BrowserStorage);
            session.set(next);
            page.set(Page::Home);
        })
    };

    let context = SessionContext {
        session: (*session).clone(),
        login,
        set_resume_text,
        logout,
    };

    let view = match *page {
        Page::Home => html! { <HomeButtons navigate={navigate} /> },
        Page::UserAuth => {
            html! { <AuthPage audience={Audience::User} navigate={navigate} /> }
        }
        Page::Dashboard => html! { <Dashboard navigate={navigate} /> },
        Page::AdaptiveTest => html! { <AdaptiveTest navigate={navigate} /> },
        Page::InstituteAuth => {
            html! { <AuthPage audience={Audience::Institute} navigate={navigate} /> }
        }
        Page::InstituteDashboard => html! { <InstituteDashboard /> },
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            <div style="font-family:Arial,sans-serif; max-width:900px; margin:0 auto; padding:1.5em;">
                { view }
            </div>
        </ContextProvider<SessionContext>>
    }
}
