use serde::Serialize;

use crate::modules::listing::domain::services::HomeSections;

/// Landing page state
#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub sections: HomeSections,
    /// Sorted distinct makes for the hero search panel
    pub makes: Vec<String>,
    pub is_loading: bool,
}
