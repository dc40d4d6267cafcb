//! Type filter and cursor over the filtered catalog

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, PokemonRecord};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TypeFilter {
    #[default]
    All,
    Type(String),
}

impl TypeFilter {
    pub fn of(pokemon_type: impl Into<String>) -> Self {
        TypeFilter::Type(pokemon_type.into())
    }

    pub fn matches(&self, record: &PokemonRecord) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Type(t) => record.pokemon_type == *t,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TypeFilter::All => "All",
            TypeFilter::Type(t) => t,
        }
    }

    /// Filter buttons in display order: All, then each catalog type.
    pub fn buttons(catalog: &Catalog) -> Vec<TypeFilter> {
        std::iter::once(TypeFilter::All)
            .chain(catalog.available_types().into_iter().map(TypeFilter::of))
            .collect()
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of asking for the next Pokémon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Moved,
    /// Stepped past the last match back to the first
    Wrapped,
    /// Fewer than two matches, nothing to step to
    Disabled,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Selection {
    filter: TypeFilter,
    cursor: usize,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &TypeFilter {
        &self.filter
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns true if filter or cursor moved.
    pub fn set_filter(&mut self, filter: TypeFilter) -> bool {
        let changed = self.filter != filter || self.cursor != 0;
        self.filter = filter;
        self.cursor = 0;
        changed
    }

    /// Step through the filter buttons (All first), wrapping in both directions.
    pub fn cycle_filter(&mut self, catalog: &Catalog, forward: bool) -> bool {
        let buttons = TypeFilter::buttons(catalog);
        let current = buttons
            .iter()
            .position(|f| *f == self.filter)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % buttons.len()
        } else {
            (current + buttons.len() - 1) % buttons.len()
        };
        self.set_filter(buttons[next].clone())
    }

    pub fn filtered_len(&self, catalog: &Catalog) -> usize {
        catalog.filtered(&self.filter).count()
    }

    pub fn can_advance(&self, catalog: &Catalog) -> bool {
        self.filtered_len(catalog) > 1
    }

    pub fn advance(&mut self, catalog: &Catalog) -> Advance {
        let len = self.filtered_len(catalog);
        if len <= 1 {
            return Advance::Disabled;
        }
        if self.cursor + 1 >= len {
            self.cursor = 0;
            Advance::Wrapped
        } else {
            self.cursor += 1;
            Advance::Moved
        }
    }

    pub fn current<'c>(&self, catalog: &'c Catalog) -> Option<&'c PokemonRecord> {
        catalog.filtered(&self.filter).nth(self.cursor)
    }

    /// 1-based cursor and filtered length
    pub fn position(&self, catalog: &Catalog) -> Option<(usize, usize)> {
        let len = self.filtered_len(catalog);
        (self.cursor < len).then_some((self.cursor + 1, len))
    }
}
