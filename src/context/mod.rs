pub mod dialog_context;

pub use dialog_context::DialogContext;
