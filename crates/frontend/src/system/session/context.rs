use leptos::prelude::*;

use super::storage;

/// Explicit session object injected into views via context. Created once at
/// app start from localStorage, replaced at login, emptied at logout. Views
/// read it instead of reaching into localStorage themselves.
///
/// Expiry is only noticed when a page mounts and the backend rejects the
/// token; there is no mid-session revalidation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl Session {
    /// An empty token in storage counts as no token at all.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    // Restore session from localStorage on mount
    let session = RwSignal::new(Session {
        token: storage::get_token(),
        role: storage::get_role(),
    });

    provide_context(session);

    children()
}

/// Hook to access the session
pub fn use_session() -> RwSignal<Session> {
    use_context::<RwSignal<Session>>().expect("SessionProvider not found in component tree")
}

/// Start a session: persist token and role, update state
pub fn start_session(session: RwSignal<Session>, token: String, role: String) {
    storage::save_session(&token, &role);
    session.set(Session {
        token: Some(token),
        role: Some(role),
    });
}

/// End the session: clear storage and state
pub fn end_session(session: RwSignal<Session>) {
    storage::clear_session();
    session.set(Session::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_not_authenticated() {
        let session = Session {
            token: Some(String::new()),
            role: Some("admin".to_string()),
        };
        assert!(!session.is_authenticated());
        assert!(!Session::default().is_authenticated());
    }

    #[test]
    fn non_empty_token_is_authenticated() {
        let session = Session {
            token: Some("abc123".to_string()),
            role: None,
        };
        assert!(session.is_authenticated());
    }
}
