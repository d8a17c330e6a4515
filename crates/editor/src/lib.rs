// Library crate: the editor session core. The viewport, file picker and toast
// widgets are external; they consume `RenderFrame`s and notifications and call
// into `SceneController`.

pub mod command;
pub mod controller;
pub mod error;
pub mod factory;
pub mod fixtures;
pub mod import;
pub mod notify;
pub mod render;
pub mod state;

pub use controller::SceneController;
pub use error::EditorError;
