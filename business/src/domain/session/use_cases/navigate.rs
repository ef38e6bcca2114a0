use crate::domain::session::guard::{NavigationDecision, Route};
use crate::domain::session::model::CurrentUser;
use crate::domain::session::storage::KeyValueStore;

pub struct NavigateParams {
    pub path: String,
}

/// Guard evaluation for a requested path.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationOutcome {
    pub decision: NavigationDecision,
    /// Route reached after following every redirect.
    pub destination: Route,
}

pub trait NavigateUseCase: Send + Sync {
    fn execute(&self, store: &dyn KeyValueStore, params: NavigateParams) -> NavigationOutcome;
}

pub trait GetCurrentUserUseCase: Send + Sync {
    fn execute(&self, store: &dyn KeyValueStore) -> Option<CurrentUser>;
}
