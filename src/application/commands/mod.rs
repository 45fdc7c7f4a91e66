pub mod categories;
pub mod posts;
pub mod uploads;

use crate::application::{error::ApplicationResult, ports::util::SlugGenerator};
use crate::domain::{errors::DomainError, slug::Slug};

/// Derives the slug for a title or category name. Inputs without a single
/// word character (e.g. `"!!!"`) cannot produce a usable slug.
pub(crate) fn derive_slug(generator: &dyn SlugGenerator, source: &str) -> ApplicationResult<Slug> {
    let candidate = generator.slugify(source);
    if candidate.is_empty() {
        return Err(DomainError::validation(format!(
            "`{source}` does not contain any characters usable in a slug"
        ))
        .into());
    }
    Ok(Slug::new(candidate)?)
}
