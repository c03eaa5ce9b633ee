//! Helpers for cleaning and normalising asset paths before URL generation.
//!
//! The logic is split into focused submodules so that slash normalisation,
//! prefix application, and remote-reference filtering can be tested
//! independently of the resolver facade that orchestrates them.

mod clean;
mod filters;

pub use clean::{apply_prefix, clean_path};
pub use filters::is_remote_reference;
