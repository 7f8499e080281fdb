// View layer: rendering of the directory listing and its status overlay

pub mod icons;
pub mod overlay;
pub mod theme;
pub mod tree_view;

pub use overlay::{OverlayRenderer, OverlayState};
pub use theme::Theme;
pub use tree_view::TreeViewRenderer;
