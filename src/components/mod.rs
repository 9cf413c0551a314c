//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page chrome shared by the route-level screens in `pages`.

pub mod nav_bar;
pub mod tab_bar;
