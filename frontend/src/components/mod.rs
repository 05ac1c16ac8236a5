pub mod auth_layout;
pub mod password_field;
pub mod select_field;
pub mod text_field;
pub mod toaster;

pub use auth_layout::AuthLayout;
pub use password_field::PasswordField;
pub use select_field::SelectField;
pub use text_field::TextField;
pub use toaster::Toaster;
