mod contact_links;
mod filter_criteria;
mod price_badge;
mod search_query;
mod sort_key;

pub use contact_links::*;
pub use filter_criteria::*;
pub use price_badge::*;
pub use search_query::*;
pub use sort_key::*;
