pub mod notion;
pub mod supabase;
pub mod time;
pub mod util;
