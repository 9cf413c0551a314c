//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! One page per `routes::ViewId`. Pages render only; access control lives in
//! `guard` and is applied by `util::auth::NavigationGuard`.

pub mod contacts;
pub mod device;
pub mod login;
pub mod profile;
