//! Page view-models derived from [`AppState`]

use crate::catalog::PokemonRecord;
use crate::route::Route;
use crate::selection::TypeFilter;
use crate::state::AppState;

pub const POKEDEX_HEADING: &str = "Encountered Pokémon";
pub const FAVORITES_HEADING: &str = "Favorite Pokémon";
pub const NO_FAVORITES: &str = "No favorite Pokémon found";
pub const FAVORITE_CHECKBOX: &str = "Pokémon favoritado?";
pub const MORE_DETAILS: &str = "More details";
pub const NEXT_POKEMON: &str = "Próximo Pokémon";
pub const STAR_ICON: &str = "/star-icon.svg";

pub const ABOUT_HEADING: &str = "About Pokédex";
pub const ABOUT_IMAGE: &str = "https://cdn2.bulbagarden.net/upload/thumb/8/86/Gen_I_Pok%C3%A9dex.png/800px-Gen_I_Pok%C3%A9dex.png";
pub const ABOUT_IMAGE_ALT: &str = "Pokédex";
pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "This application simulates a Pokédex, a digital encyclopedia containing all Pokémon",
    "One can filter Pokémon by type, and see more details for each one of them",
];

pub const NOT_FOUND_HEADING: &str = "Page requested not found";
pub const NOT_FOUND_IMAGE: &str = "https://media.giphy.com/media/kNSeTs31XBZ3G/giphy.gif";
pub const NOT_FOUND_IMAGE_ALT: &str = "Pikachu crying because the page requested was not found";

/// Navigation links, in display order
pub const NAV_LINKS: [(&str, Route); 3] = [
    ("Home", Route::Home),
    ("About", Route::About),
    (FAVORITES_HEADING, Route::Favorites),
];

pub fn sprite_alt(record: &PokemonRecord) -> String {
    format!("{} sprite", record.name)
}

pub fn favorite_alt(record: &PokemonRecord) -> String {
    format!("{} is marked as favorite", record.name)
}

pub fn details_heading(record: &PokemonRecord) -> String {
    format!("{} Details", record.name)
}

pub fn locations_heading(record: &PokemonRecord) -> String {
    format!("Game Locations of {}", record.name)
}

pub fn location_alt(record: &PokemonRecord) -> String {
    format!("{} location", record.name)
}

#[derive(Clone, Debug, PartialEq)]
pub struct PokedexView<'a> {
    /// None only when the filter matches nothing
    pub record: Option<&'a PokemonRecord>,
    pub filter: &'a TypeFilter,
    /// Filter buttons, All first
    pub buttons: Vec<TypeFilter>,
    pub position: Option<(usize, usize)>,
    pub can_advance: bool,
    pub is_favorite: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailsView<'a> {
    pub record: &'a PokemonRecord,
    pub is_favorite: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FavoritesView<'a> {
    pub records: Vec<&'a PokemonRecord>,
    pub selected: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Page<'a> {
    Pokedex(PokedexView<'a>),
    Details(DetailsView<'a>),
    Favorites(FavoritesView<'a>),
    About,
    NotFound { path: String },
}

impl Page<'_> {
    pub fn title(&self) -> String {
        match self {
            Page::Pokedex(_) => POKEDEX_HEADING.to_string(),
            Page::Details(page) => details_heading(page.record),
            Page::Favorites(_) => FAVORITES_HEADING.to_string(),
            Page::About => ABOUT_HEADING.to_string(),
            Page::NotFound { .. } => NOT_FOUND_HEADING.to_string(),
        }
    }
}

pub fn derive(state: &AppState) -> Page<'_> {
    match state.route() {
        Route::Home => {
            let record = state.current_record();
            Page::Pokedex(PokedexView {
                record,
                filter: state.selection.filter(),
                buttons: TypeFilter::buttons(&state.catalog),
                position: state.selection.position(&state.catalog),
                can_advance: state.selection.can_advance(&state.catalog),
                is_favorite: record.is_some_and(|r| state.is_favorite(r.id)),
            })
        }
        Route::Details(id) => match state.catalog.find_by_id(*id) {
            Some(record) => Page::Details(DetailsView {
                record,
                is_favorite: state.is_favorite(record.id),
            }),
            None => Page::NotFound {
                path: state.route().path(),
            },
        },
        Route::Favorites => Page::Favorites(FavoritesView {
            records: state.favorite_records(),
            selected: state.favorites_selected,
        }),
        Route::About => Page::About,
        Route::NotFound(path) => Page::NotFound { path: path.clone() },
    }
}
