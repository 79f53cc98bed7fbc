use crate::application::ports::util::SlugGenerator;
use crate::domain::project::generate_slug;

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        generate_slug(input)
    }
}
