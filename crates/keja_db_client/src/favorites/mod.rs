pub mod add_favorite;
pub mod list_favorites;
pub mod remove_favorite;
