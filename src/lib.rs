pub mod client;
pub mod controller;
pub mod errors;
pub mod models;
pub mod notify;
pub mod ui;
pub mod view;

pub use client::DirectoryClient;
pub use controller::MutationController;
pub use errors::{ClientError, SignupError};
pub use notify::Notifier;
pub use view::ViewState;
