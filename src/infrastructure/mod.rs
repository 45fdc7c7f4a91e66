pub mod database;
pub mod repositories;
pub mod time;
pub mod upload;
pub mod util;
