pub mod application {
    pub mod country {
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod product {
        pub mod get_by_id;
        pub mod get_categories;
        pub mod search;
    }
    pub mod session {
        pub mod logout;
        pub mod navigate;
    }
    pub mod user {
        pub mod check_email;
        pub mod get_by_id;
        pub mod login;
        pub mod register;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod country {
        pub mod directory;
        pub mod errors;
        pub mod fallback;
        pub mod model;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod product {
        pub mod catalog;
        pub mod errors;
        pub mod model;
        pub mod query;
        pub mod repository;
        pub mod use_cases {
            pub mod get_by_id;
            pub mod get_categories;
            pub mod search;
        }
    }
    pub mod session {
        pub mod guard;
        pub mod model;
        pub mod storage;
        pub mod use_cases {
            pub mod logout;
            pub mod navigate;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod validation;
        pub mod value_objects;
        pub mod use_cases {
            pub mod check_email;
            pub mod get_by_id;
            pub mod login;
            pub mod register;
        }
    }
}
