pub mod app;
pub mod cards;
pub mod event;
pub mod input;
pub mod keymap;
pub mod scroll;
pub mod strip;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use strip::{
    DelegatePool, FnDelegate, IndexChanged, PageDelegate, PageView, PagedTabStrip, StripState,
};
pub use theme::Theme;
