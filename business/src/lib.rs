pub mod application {
    pub mod backup {
        pub mod create;
    }
    pub mod batch {
        pub mod create;
        pub mod download;
        pub mod get_all;
    }
    pub mod catalog {
        pub mod seed;
    }
    pub mod pricing {
        pub mod suggest;
    }
    pub mod product {
        pub mod get_page;
        pub mod review;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod backup {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod create;
        }
    }
    pub mod batch {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod create;
            pub mod download;
            pub mod get_all;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod import;
        pub mod services;
        pub mod use_cases {
            pub mod seed;
        }
    }
    pub mod pricing {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod suggest;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod query;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_page;
            pub mod review;
        }
    }
}
