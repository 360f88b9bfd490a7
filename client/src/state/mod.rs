//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is app-wide and provided through Leptos context; `users` is the
//! page-local model of the home page's fetch cycle.

pub mod session;
pub mod users;
