pub mod diff;
pub mod events;
pub mod health;
pub mod not_found;
pub mod pages;
