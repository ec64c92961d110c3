use crate::commands::CmdResult;
use crate::model::Restaurant;
use crate::registry::Registry;
use crate::store::LineBackend;

/// Ordering requested by `list [sort_key]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Cuisine,
    Price,
}

impl SortKey {
    /// Reads a user-supplied key. Unknown or missing keys sort by name.
    pub fn parse(key: Option<&str>) -> Self {
        match key.map(str::to_lowercase).as_deref() {
            Some("price") => SortKey::Price,
            Some("cuisine") => SortKey::Cuisine,
            _ => SortKey::Name,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Cuisine => "cuisine",
            SortKey::Price => "price",
        }
    }
}

pub fn run<B: LineBackend>(registry: &Registry<B>, key: SortKey) -> CmdResult {
    let mut restaurants = registry.all();
    sort_restaurants(&mut restaurants, key);
    CmdResult::default().with_listed(restaurants)
}

/// Sorts in place. Both sorts are stable.
///
/// `SortKey::Cuisine` leaves the file order untouched.
pub fn sort_restaurants(restaurants: &mut [Restaurant], key: SortKey) {
    match key {
        SortKey::Name => restaurants.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Price => restaurants.sort_by_key(|r| r.price),
        SortKey::Cuisine => {}
    }
}
