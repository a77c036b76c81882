// UI Components

pub mod confirm_button;
pub mod project_settings;

pub use confirm_button::ConfirmButton;
pub use project_settings::ProjectSettings;
