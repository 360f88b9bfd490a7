//! Network layer: REST helpers and the cancellable fetch scope.

pub mod api;
pub mod scope;
