pub mod categories;
pub mod posts;
pub mod uploads;

pub use categories::CategoryDto;
pub use posts::{PostCategoryDto, PostDto};
pub use uploads::UploadedImageDto;
