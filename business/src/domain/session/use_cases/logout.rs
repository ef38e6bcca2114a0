use crate::domain::session::guard::NavigationDecision;
use crate::domain::session::storage::KeyValueStore;

pub trait LogoutUseCase: Send + Sync {
    fn execute(&self, store: &dyn KeyValueStore) -> NavigationDecision;
}
