// Form guard
// Intercepts submission of marked forms until the user confirms

pub mod binder;
pub mod dom;
pub mod marker;

pub use dom::FormBinder;
