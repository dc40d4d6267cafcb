//! Effects - side effects declared by the reducer

use crate::favorites::FavoriteSet;

#[derive(Debug, Clone)]
pub enum Effect {
    /// Write the whole favorites set to storage
    PersistFavorites { ids: FavoriteSet },
}
