//! Platform-independent logic for the gallery frontend.
//!
//! Everything here is pure Rust with no browser APIs so it can be exercised
//! by host-side tests. The `gallery-web` crate wires these types to the DOM,
//! the frame scheduler and the network.

pub mod artwork;
pub mod auth;
pub mod constants;
pub mod layout;
pub mod scroll;

pub use artwork::*;
pub use auth::*;
pub use constants::*;
pub use layout::*;
pub use scroll::*;
