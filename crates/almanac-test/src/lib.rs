//! Almanac agenda engine - integration test support.
//!
//! This crate re-exports the workspace crates to support integration tests
//! that use `almanac::` paths.

#![allow(ambiguous_glob_reexports)]

pub mod component {
    // Re-export core and engine modules at the component level
    pub use almanac_core::*;
    pub use almanac_engine::*;

    // The `error` modules of core and engine collide under the globs
    // above; name the engine one explicitly
    pub use almanac_engine::error::{EngineError, EngineResult};

    // Re-export models
    pub mod model {
        pub use almanac_store::model::*;
    }

    // Re-export store traits, backends and their error type
    pub mod store {
        pub use almanac_store::error::*;
        pub use almanac_store::store::*;
    }
}
