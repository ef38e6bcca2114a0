use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::session::guard::{self, NavigationDecision, Route};
use crate::domain::session::storage::KeyValueStore;
use crate::domain::session::use_cases::logout::LogoutUseCase;

pub struct LogoutUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl LogoutUseCase for LogoutUseCaseImpl {
    fn execute(&self, store: &dyn KeyValueStore) -> NavigationDecision {
        if let Some(user) = guard::current_user(store) {
            self.logger.info(&format!("Logging out {}", user.email));
        }
        guard::clear_session(store);
        NavigationDecision::Redirect(Route::Landing)
    }
}
