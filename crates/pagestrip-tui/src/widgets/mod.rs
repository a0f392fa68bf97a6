mod help;
mod status_bar;
mod tab_bar;

pub use help::HelpPopup;
pub use status_bar::StatusBarWidget;
pub use tab_bar::TabBarWidget;
