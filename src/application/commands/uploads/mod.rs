mod service;

pub use service::{UploadCommandService, UploadImageCommand};
