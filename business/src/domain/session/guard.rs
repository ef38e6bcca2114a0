use super::model::CurrentUser;
use super::storage::{CURRENT_USER_KEY, IS_LOGGED_IN_KEY, KeyValueStore, REGISTRATION_DATA_KEY};

const MAX_REDIRECTS: usize = 4;

/// Navigable routes of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Register,
    Login,
    Dashboard,
    Product(u32),
}

impl Route {
    /// Parses an application path. Unknown paths yield `None` and are
    /// handled by the catch-all redirect.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Landing),
            ["register"] => Some(Route::Register),
            ["login"] => Some(Route::Login),
            ["dashboard"] => Some(Route::Dashboard),
            ["product", id] => id.parse().ok().map(Route::Product),
            _ => None,
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Product(_))
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Landing => write!(f, "/"),
            Route::Register => write!(f, "/register"),
            Route::Login => write!(f, "/login"),
            Route::Dashboard => write!(f, "/dashboard"),
            Route::Product(id) => write!(f, "/product/{}", id),
        }
    }
}

/// Outcome of a guard: the navigation either proceeds or is replaced by a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    Admit(Route),
    Redirect(Route),
}

impl NavigationDecision {
    pub fn is_admitted(&self) -> bool {
        matches!(self, NavigationDecision::Admit(_))
    }

    pub fn route(&self) -> Route {
        match self {
            NavigationDecision::Admit(route) | NavigationDecision::Redirect(route) => *route,
        }
    }
}

/// A session is authorized when `isLoggedIn` is exactly `"true"` and
/// `currentUser` holds a non-empty value.
pub fn is_authorized(store: &dyn KeyValueStore) -> bool {
    let logged_in = store.get(IS_LOGGED_IN_KEY).is_some_and(|v| v == "true");
    let has_user = store.get(CURRENT_USER_KEY).is_some_and(|v| !v.is_empty());
    logged_in && has_user
}

/// Reads the stored user; malformed JSON counts as no user.
pub fn current_user(store: &dyn KeyValueStore) -> Option<CurrentUser> {
    store
        .get(CURRENT_USER_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
}

pub fn protected_route_guard(store: &dyn KeyValueStore, route: Route) -> NavigationDecision {
    if is_authorized(store) {
        NavigationDecision::Admit(route)
    } else {
        NavigationDecision::Redirect(Route::Login)
    }
}

/// The landing route never admits; it only dispatches.
pub fn landing_guard(store: &dyn KeyValueStore) -> NavigationDecision {
    if is_authorized(store) {
        NavigationDecision::Redirect(Route::Dashboard)
    } else {
        NavigationDecision::Redirect(Route::Register)
    }
}

/// Registration and login pages send an already logged-in visitor to the dashboard.
pub fn guest_route_guard(store: &dyn KeyValueStore, route: Route) -> NavigationDecision {
    if is_authorized(store) {
        NavigationDecision::Redirect(Route::Dashboard)
    } else {
        NavigationDecision::Admit(route)
    }
}

/// Runs the guard attached to `path`.
pub fn navigate(store: &dyn KeyValueStore, path: &str) -> NavigationDecision {
    match Route::parse(path) {
        None => NavigationDecision::Redirect(Route::Landing),
        Some(Route::Landing) => landing_guard(store),
        Some(route @ (Route::Register | Route::Login)) => guest_route_guard(store, route),
        Some(route) => protected_route_guard(store, route),
    }
}

/// Follows redirects from `path` until a route admits.
pub fn resolve(store: &dyn KeyValueStore, path: &str) -> Route {
    let mut decision = navigate(store, path);
    for _ in 0..MAX_REDIRECTS {
        match decision {
            NavigationDecision::Admit(route) => return route,
            NavigationDecision::Redirect(route) => {
                decision = navigate(store, &route.to_string());
            }
        }
    }
    decision.route()
}

/// Removes every session key. Missing keys are ignored.
pub fn clear_session(store: &dyn KeyValueStore) {
    store.remove(CURRENT_USER_KEY);
    store.remove(IS_LOGGED_IN_KEY);
    store.remove(REGISTRATION_DATA_KEY);
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    /// In-memory store for exercising guards.
    #[derive(Default)]
    pub(crate) struct FakeStore(Mutex<HashMap<String, String>>);

    impl FakeStore {
        pub(crate) fn with(entries: &[(&str, &str)]) -> Self {
            let store = Self::default();
            for (key, value) in entries {
                store.set(key, value);
            }
            store
        }

        pub(crate) fn len(&self) -> usize {
            self.0.lock().unwrap().len()
        }
    }

    impl KeyValueStore for FakeStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.lock().unwrap().get(key).cloned()
        }
        fn set(&self, key: &str, value: &str) {
            self.0
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }
        fn remove(&self, key: &str) {
            self.0.lock().unwrap().remove(key);
        }
    }

    const USER_JSON: &str = r#"{"fullName":"Ana","email":"ana@example.com"}"#;

    fn logged_in() -> FakeStore {
        FakeStore::with(&[(IS_LOGGED_IN_KEY, "true"), (CURRENT_USER_KEY, USER_JSON)])
    }

    #[test]
    fn should_parse_known_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Landing));
        assert_eq!(Route::parse(""), Some(Route::Landing));
        assert_eq!(Route::parse("/register"), Some(Route::Register));
        assert_eq!(Route::parse("/login/"), Some(Route::Login));
        assert_eq!(Route::parse("/dashboard?page=2"), Some(Route::Dashboard));
        assert_eq!(Route::parse("/product/7"), Some(Route::Product(7)));
    }

    #[test]
    fn should_not_parse_unknown_routes() {
        assert_eq!(Route::parse("/admin"), None);
        assert_eq!(Route::parse("/product/abc"), None);
        assert_eq!(Route::parse("/product"), None);
    }

    #[test]
    fn should_render_route_paths() {
        assert_eq!(Route::Product(3).to_string(), "/product/3");
        assert_eq!(Route::Landing.to_string(), "/");
    }

    #[test]
    fn should_authorize_only_complete_sessions() {
        assert!(is_authorized(&logged_in()));

        let cases: Vec<FakeStore> = vec![
            FakeStore::default(),
            FakeStore::with(&[(IS_LOGGED_IN_KEY, "true")]),
            FakeStore::with(&[(CURRENT_USER_KEY, USER_JSON)]),
            FakeStore::with(&[(IS_LOGGED_IN_KEY, "false"), (CURRENT_USER_KEY, USER_JSON)]),
            FakeStore::with(&[(IS_LOGGED_IN_KEY, "TRUE"), (CURRENT_USER_KEY, USER_JSON)]),
            FakeStore::with(&[(IS_LOGGED_IN_KEY, "true"), (CURRENT_USER_KEY, "")]),
        ];
        for store in cases {
            assert!(!is_authorized(&store));
        }
    }

    #[test]
    fn should_admit_protected_route_when_authorized() {
        let decision = protected_route_guard(&logged_in(), Route::Dashboard);
        assert_eq!(decision, NavigationDecision::Admit(Route::Dashboard));
    }

    #[test]
    fn should_redirect_protected_route_to_login_when_unauthorized() {
        let store = FakeStore::with(&[(IS_LOGGED_IN_KEY, "true")]);
        let decision = protected_route_guard(&store, Route::Product(2));
        assert_eq!(decision, NavigationDecision::Redirect(Route::Login));
    }

    #[test]
    fn should_never_admit_landing_route() {
        assert_eq!(
            landing_guard(&logged_in()),
            NavigationDecision::Redirect(Route::Dashboard)
        );
        assert_eq!(
            landing_guard(&FakeStore::default()),
            NavigationDecision::Redirect(Route::Register)
        );
    }

    #[test]
    fn should_send_logged_in_visitor_from_login_to_dashboard() {
        assert_eq!(
            navigate(&logged_in(), "/login"),
            NavigationDecision::Redirect(Route::Dashboard)
        );
        assert!(navigate(&FakeStore::default(), "/register").is_admitted());
    }

    #[test]
    fn should_redirect_unknown_paths_to_landing() {
        assert_eq!(
            navigate(&logged_in(), "/nowhere"),
            NavigationDecision::Redirect(Route::Landing)
        );
    }

    #[test]
    fn should_resolve_redirect_chains() {
        assert_eq!(resolve(&FakeStore::default(), "/nowhere"), Route::Register);
        assert_eq!(resolve(&logged_in(), "/"), Route::Dashboard);
        assert_eq!(resolve(&FakeStore::default(), "/product/4"), Route::Login);
        assert_eq!(resolve(&logged_in(), "/product/4"), Route::Product(4));
    }

    #[test]
    fn should_read_current_user_and_ignore_malformed_json() {
        assert_eq!(current_user(&logged_in()).unwrap().full_name, "Ana");

        let store = FakeStore::with(&[(IS_LOGGED_IN_KEY, "true"), (CURRENT_USER_KEY, "{oops")]);
        assert!(current_user(&store).is_none());
    }

    #[test]
    fn should_clear_all_session_keys_whatever_is_present() {
        let stores = vec![
            FakeStore::default(),
            FakeStore::with(&[(REGISTRATION_DATA_KEY, "{}")]),
            FakeStore::with(&[
                (IS_LOGGED_IN_KEY, "true"),
                (CURRENT_USER_KEY, USER_JSON),
                (REGISTRATION_DATA_KEY, "{}"),
            ]),
        ];

        for store in stores {
            clear_session(&store);
            assert_eq!(store.len(), 0);
            assert!(!is_authorized(&store));
        }
    }
}
