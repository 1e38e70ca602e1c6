//! Page-level components, one per route

mod editor;
mod login;
mod upload;

pub use editor::EditorView;
pub use login::LoginView;
pub use upload::UploadView;
