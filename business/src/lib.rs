pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod checkout;
        pub mod clear;
        pub mod get;
        pub mod remove_item;
        #[cfg(test)]
        pub mod test_support;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod checkout;
            pub mod clear;
            pub mod get;
            pub mod remove_item;
        }
    }
    pub mod order {
        pub mod model;
        pub mod services;
    }
    pub mod product {
        pub mod model;
        pub mod services;
    }
}
