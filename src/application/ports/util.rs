/// Turns a project title into the base slug that uniqueness resolution
/// starts from.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
