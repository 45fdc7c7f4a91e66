// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            categories::CategoryCommandService, posts::PostCommandService,
            uploads::UploadCommandService,
        },
        ports::{time::Clock, upload::ImageUploader, util::SlugGenerator},
        queries::{categories::CategoryQueryService, posts::PostQueryService},
    },
    domain::{
        category::CategoryRepository,
        post::{PostReadRepository, PostWriteRepository},
    },
};

/// How the upload command reacts when the image host is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadFailurePolicy {
    /// Surface the failure to the caller.
    #[default]
    Fail,
    /// Echo the submitted data URL back. Development only.
    EchoDataUrl,
}

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub upload_commands: Arc<UploadCommandService>,
}

impl ApplicationServices {
    pub fn new(
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        image_uploader: Arc<dyn ImageUploader>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        upload_policy: UploadFailurePolicy,
    ) -> Self {
        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_read_repo)));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&slugger),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));

        let upload_commands = Arc::new(UploadCommandService::new(
            image_uploader,
            upload_policy == UploadFailurePolicy::EchoDataUrl,
        ));

        Self {
            post_commands,
            post_queries,
            category_commands,
            category_queries,
            upload_commands,
        }
    }
}
