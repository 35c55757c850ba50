//! Core infrastructure shared by the library and the CLI
//!
//! Console output lives here; the recipe model and order flow sit at the
//! crate root.

pub mod output;
