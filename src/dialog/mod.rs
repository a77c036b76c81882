// Confirmation dialog
// A single reusable overlay that resolves each request to confirmed/cancelled

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod presets;
pub mod request;
pub mod surface;

pub use config::DialogConfig;
pub use controller::DialogController;
pub use dom::{DomListener, DomSurface};
pub use error::DialogResult;
pub use request::DialogRequest;
pub use surface::DialogSurface;

/// The controller used by the page: one DOM overlay shared by every caller
pub type PageDialog = DialogController<DomSurface>;
