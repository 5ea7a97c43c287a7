pub mod forms;
pub mod inputs;
pub mod layout;
pub mod modal;
pub mod password_strength;
pub mod photo_upload;

pub use layout::Navbar;
pub use modal::Modal;
