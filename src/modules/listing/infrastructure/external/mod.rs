pub mod http;
pub mod supabase;

pub use http::CommonHttpHandler;
pub use supabase::SupabaseListingSource;
