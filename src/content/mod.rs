//! Static content shown by the games: items, stories, animals and labels.

pub mod animals;
pub mod christmas;
pub mod drawing;
pub mod home;
pub mod math;
pub mod memory;
pub mod puzzle;
pub mod reading;
pub mod sequence;
pub mod tooth_brushing;
