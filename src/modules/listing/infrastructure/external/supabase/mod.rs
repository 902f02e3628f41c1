mod client;

pub use client::SupabaseListingSource;
