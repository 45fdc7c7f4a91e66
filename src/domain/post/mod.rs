pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPost, Post, PostCategory, PostListFilter, PostUpdate};
pub use repository::{PostReadRepository, PostWriteRepository};
pub use value_objects::{CategorySelection, ImageUrl, PostContent, PostId, PostTitle};
