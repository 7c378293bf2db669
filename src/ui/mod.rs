pub mod app;
mod draw;

pub use app::{Action, App, Dialog, DialogKind, Focus, Phase};
