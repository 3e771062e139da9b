//! Explicit caches owned by the components that need them.
//!
//! [`TtlCache`] holds one value with a time-to-live (e.g. the signed-in
//! user's profile), and [`VisibilityStore`] keeps column-visibility
//! preferences alive across the table screens of one page group. Both are
//! created by the owner and injected, never reached through globals.

mod ttl;
mod visibility;

pub use ttl::*;
pub use visibility::*;
