mod details_page;
mod home_page;
mod search_page;

pub use details_page::*;
pub use home_page::*;
pub use search_page::*;
