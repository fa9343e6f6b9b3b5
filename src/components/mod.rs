mod adaptive_test;
mod auth_page;
mod dashboard;
mod institute_dashboard;
mod query_box;
mod resume_uploader;
mod test_results;

pub use adaptive_test::AdaptiveTest;
pub use auth_page::{Audience, AuthPage};
pub use dashboard::Dashboard;
pub use institute_dashboard::InstituteDashboard;
pub use query_box::QueryBox;
pub use resume_uploader::ResumeUploader;
pub use test_results::TestResults;

/// Modal alert, used where an inline message would go unseen (e.g. failures
/// behind a button the user just left).
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
