pub mod event;
pub mod input;
pub mod meeting;
pub mod query;
pub mod time;
