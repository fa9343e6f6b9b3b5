//! Session state (auth token + extracted resume text) and its persistence
//! boundary. Storage is abstracted behind a small key-value trait so the
//! session logic is testable without a browser.

pub const TOKEN_KEY: &str = "access_token";
pub const RESUME_TEXT_KEY: &str = "resume_text";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// localStorage-backed store. When the browser denies storage access, reads
/// return nothing and writes are dropped.
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// The user's session: opaque auth token plus the extracted text of the
/// uploaded resume. Both fields are cleared together on logout.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub resume_text: String,
}

impl Session {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Session {
            token: store.get(TOKEN_KEY),
            resume_text: store.get(RESUME_TEXT_KEY).unwrap_or_default(),
        }
    }

    /// Writes both keys, removing whichever is unset so a cleared session
    /// leaves no stale entries behind.
    pub fn save(&self, store: &dyn KeyValueStore) {
        match &self.token {
            Some(token) => store.set(TOKEN_KEY, token),
            None => store.remove(TOKEN_KEY),
        }
        if self.resume_text.is_empty() {
            store.remove(RESUME_TEXT_KEY);
        } else {
            store.set(RESUME_TEXT_KEY, &self.resume_text);
        }
    }

    pub fn with_token(&self, token: String) -> Self {
        Session {
            token: Some(token),
            resume_text: self.resume_text.clone(),
        }
    }

    pub fn with_resume_text(&self, resume_text: String) -> Self {
        Session {
            token: self.token.clone(),
            resume_text,
        }
    }

    pub fn has_resume(&self) -> bool {
        !self.resume_text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }

    #[test]
    fn load_from_empty_store_yields_blank_session() {
        let store = MemoryStore::default();
        let session = Session::load(&store);
        assert_eq!(session.token, None);
        assert_eq!(session.resume_text, "");
        assert!(!session.has_resume());
    }

    #[test]
    fn save_and_reload_round_trip() {
        let store = MemoryStore::default();
        let session = Session::default()
            .with_token("tok-123".to_string())
            .with_resume_text("Jane Doe\nRust engineer".to_string());
        session.save(&store);

        let reloaded = Session::load(&store);
        assert_eq!(reloaded, session);
        assert!(reloaded.has_resume());
    }

    #[test]
    fn logout_clears_both_keys() {
        let store = MemoryStore::default();
        Session::default()
            .with_token("tok-123".to_string())
            .with_resume_text("text".to_string())
            .save(&store);

        Session::default().save(&store);

        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(RESUME_TEXT_KEY), None);
        assert_eq!(Session::load(&store), Session::default());
    }

    #[test]
    fn upload_replaces_resume_text_but_keeps_token() {
        let store = MemoryStore::default();
        let session = Session::default().with_token("tok".to_string());
        session.save(&store);

        session
            .with_resume_text("extracted text".to_string())
            .save(&store);

        let reloaded = Session::load(&store);
        assert_eq!(reloaded.token.as_deref(), Some("tok"));
        assert_eq!(reloaded.resume_text, "extracted text");
    }
}
