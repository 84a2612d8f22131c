//! GTK front end: one stack page per route, a header bar and a toast overlay.

pub mod about_page;
pub mod animals_page;
pub mod audio_set;
pub mod christmas_page;
pub mod drawing_page;
pub mod focus_page;
pub mod helpers;
pub mod home_page;
pub mod math_page;
pub mod memory_page;
pub mod page;
pub mod profile_dialog;
pub mod puzzle_page;
pub mod reading_page;
pub mod sequence_page;
pub mod settings_menu;
pub mod stats_panel;
pub mod timers;
pub mod toast;
pub mod tooth_brushing_page;
pub mod window;
