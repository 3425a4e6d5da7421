pub mod attraction;
pub mod category;
pub mod event;
pub mod place;
