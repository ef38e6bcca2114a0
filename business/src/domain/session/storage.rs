/// Key holding `"true"` while a user is logged in.
pub const IS_LOGGED_IN_KEY: &str = "isLoggedIn";
/// Key holding the JSON-serialized [`CurrentUser`](super::model::CurrentUser).
pub const CURRENT_USER_KEY: &str = "currentUser";
/// Key holding the JSON-serialized [`RegistrationMarker`](super::model::RegistrationMarker).
pub const REGISTRATION_DATA_KEY: &str = "registrationData";

/// Synchronous key to string store backing the session.
///
/// Implementations must make a `remove` visible to every later `get`.
/// Removing a missing key is not an error.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
