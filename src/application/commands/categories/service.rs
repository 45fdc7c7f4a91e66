use std::sync::Arc;

use crate::{application::ports::util::SlugGenerator, domain::category::CategoryRepository};

pub struct CategoryCommandService {
    pub(super) repo: Arc<dyn CategoryRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
}

impl CategoryCommandService {
    pub fn new(repo: Arc<dyn CategoryRepository>, slugger: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, slugger }
    }
}
