//! Porter identity gateway - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `porter_test::` paths.

#![allow(ambiguous_glob_reexports)]

pub mod component {
    pub use porter_core::*;
    pub use porter_service::*;

    pub mod store {
        pub use porter_app::store_handler::StoreHandler;
        pub use porter_store::store::*;
    }

    pub mod middleware {
        pub use porter_app::middleware::*;
    }

    // Re-export config from both core and app
    pub mod config {
        pub use porter_app::config::ConfigHandler;
        pub use porter_core::config::*;
    }
}

pub mod app {
    pub use porter_app::*;

    pub mod api {
        pub use porter_app::app::api::*;
    }
}
