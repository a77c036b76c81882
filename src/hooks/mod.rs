pub mod use_confirm;

pub use use_confirm::use_confirm;
