// Reusable UI components

pub mod status_bar;
pub mod title_bar;
pub mod toast;
