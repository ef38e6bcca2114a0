use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::session::guard;
use crate::domain::session::model::CurrentUser;
use crate::domain::session::storage::KeyValueStore;
use crate::domain::session::use_cases::navigate::{
    GetCurrentUserUseCase, NavigateParams, NavigateUseCase, NavigationOutcome,
};

pub struct NavigateUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl NavigateUseCase for NavigateUseCaseImpl {
    fn execute(&self, store: &dyn KeyValueStore, params: NavigateParams) -> NavigationOutcome {
        let decision = guard::navigate(store, &params.path);
        let destination = guard::resolve(store, &params.path);
        if !decision.is_admitted() {
            self.logger.debug(&format!(
                "Navigation to {} redirected to {}",
                params.path,
                decision.route()
            ));
        }
        NavigationOutcome {
            decision,
            destination,
        }
    }
}

pub struct GetCurrentUserUseCaseImpl;

impl GetCurrentUserUseCase for GetCurrentUserUseCaseImpl {
    fn execute(&self, store: &dyn KeyValueStore) -> Option<CurrentUser> {
        if guard::is_authorized(store) {
            guard::current_user(store)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::guard::tests::FakeStore;
    use crate::domain::session::guard::{NavigationDecision, Route};
    use crate::domain::session::storage::{CURRENT_USER_KEY, IS_LOGGED_IN_KEY};
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    #[test]
    fn should_report_redirect_and_final_destination() {
        let mut logger = MockLog::new();
        logger.expect_debug().times(1).returning(|_| ());
        let use_case = NavigateUseCaseImpl {
            logger: Arc::new(logger),
        };

        let outcome = use_case.execute(
            &FakeStore::default(),
            NavigateParams {
                path: "/dashboard".to_string(),
            },
        );

        assert_eq!(outcome.decision, NavigationDecision::Redirect(Route::Login));
        assert_eq!(outcome.destination, Route::Login);
    }

    #[test]
    fn should_return_current_user_only_for_authorized_session() {
        let user_json = r#"{"fullName":"Ana","email":"ana@example.com"}"#;
        let authorized =
            FakeStore::with(&[(IS_LOGGED_IN_KEY, "true"), (CURRENT_USER_KEY, user_json)]);
        let stale = FakeStore::with(&[(IS_LOGGED_IN_KEY, "false"), (CURRENT_USER_KEY, user_json)]);

        assert_eq!(
            GetCurrentUserUseCaseImpl.execute(&authorized).unwrap().email,
            "ana@example.com"
        );
        assert!(GetCurrentUserUseCaseImpl.execute(&stale).is_none());
    }
}
