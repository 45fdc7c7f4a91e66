pub mod category;
pub mod errors;
pub mod media;
pub mod post;
pub mod slug;
