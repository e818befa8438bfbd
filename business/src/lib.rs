pub mod application {
    pub mod menu {
        pub mod get_all_tags;
        pub mod get_restaurant_menu;
    }
    pub mod order {
        pub mod place;
    }
    pub mod payment {
        pub mod create_session;
    }
    pub mod rating {
        pub mod get_for_restaurant;
        pub mod submit;
    }
    pub mod restaurant {
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod scan {
        pub mod resolve;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod store;
        pub mod value_objects;
    }
    pub mod cart {
        pub mod model;
        pub mod store;
    }
    pub mod favorite {
        pub mod model;
        pub mod store;
    }
    pub mod tag_preference {
        pub mod model;
        pub mod store;
    }
    pub mod marker {
        pub mod store;
    }
    pub mod restaurant {
        pub mod errors;
        pub mod gateway;
        pub mod geo;
        pub mod model;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod menu {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod get_all_tags;
            pub mod get_restaurant_menu;
        }
    }
    pub mod rating {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod get_for_restaurant;
            pub mod submit;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod place;
        }
    }
    pub mod payment {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod create_session;
        }
    }
    pub mod scan {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod resolve;
        }
    }
}
