pub mod add;
pub mod on;
pub mod show;
pub mod upcoming;
