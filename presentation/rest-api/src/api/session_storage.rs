use poem::session::Session;

use business::domain::session::storage::KeyValueStore;

/// Exposes the request's server-side session as the session key-value store.
pub struct SessionStorage<'a>(pub &'a Session);

impl KeyValueStore for SessionStorage<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get::<String>(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.0.set(key, value);
    }

    fn remove(&self, key: &str) {
        self.0.remove(key);
    }
}
