pub mod content;
pub mod destroyable;
pub mod events;
pub mod game;
pub mod helpers;
pub mod model;
pub mod storage;
pub mod tone;
#[cfg(feature = "gui")]
pub mod ui;
