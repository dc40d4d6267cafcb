pub mod about_page;
pub mod details_page;
pub mod favorites_page;
pub mod location_bar;
pub mod nav_bar;
pub mod not_found_page;
pub mod pokedex_app;
pub mod pokedex_page;
pub mod pokemon_card;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use about_page::AboutPage;
pub use details_page::{DetailsPage, DetailsPageProps};
pub use favorites_page::{FavoritesPage, FavoritesPageProps};
pub use location_bar::{LocationBar, LocationBarProps};
pub use nav_bar::{NavBar, NavBarProps};
pub use not_found_page::{NotFoundPage, NotFoundPageProps};
pub use pokedex_app::{PokedexApp, PokedexAppProps};
pub use pokedex_page::{PokedexPage, PokedexPageProps};
pub use pokemon_card::{PokemonCard, PokemonCardProps, image_line};
