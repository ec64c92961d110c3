use crate::commands::CmdResult;
use crate::model::{Price, Restaurant};
use crate::registry::Registry;
use crate::store::LineBackend;

/// A parsed `find` keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    needle: String,
    max_price: Option<Price>,
}

impl Query {
    pub fn new(keyword: &str) -> Self {
        let keyword = keyword.trim();
        let max_price = keyword
            .parse::<Price>()
            .ok()
            .filter(|p| p.is_positive());
        Self {
            needle: keyword.to_lowercase(),
            max_price,
        }
    }

    /// Name or cuisine contains the keyword (ignoring case), or the keyword is
    /// a positive number and the price is strictly below it.
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        restaurant.name.to_lowercase().contains(&self.needle)
            || restaurant.cuisine.to_lowercase().contains(&self.needle)
            || matches!(
                (self.max_price, restaurant.price),
                (Some(max), Some(price)) if price < max
            )
    }
}

/// Matches in file order.
pub fn run<B: LineBackend>(registry: &Registry<B>, keyword: &str) -> CmdResult {
    let query = Query::new(keyword);
    let found = registry
        .all()
        .into_iter()
        .filter(|r| query.matches(r))
        .collect();
    CmdResult::default().with_listed(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures;

    fn find(keyword: &str) -> Vec<String> {
        run(&fixtures::registry(), keyword)
            .listed
            .into_iter()
            .map(|r| r.name)
            .collect()
    }

    #[test]
    fn matches_name_ignoring_case() {
        assert_eq!(find("cafe"), vec!["Cafe Masala"]);
        assert_eq!(find("TAMALE"), vec!["Hot Tamale"]);
    }

    #[test]
    fn matches_cuisine() {
        assert_eq!(find("mexican"), vec!["Hot Tamale"]);
        assert_eq!(find("mex"), vec!["Hot Tamale"]);
    }

    #[test]
    fn matches_name_or_cuisine() {
        // "ita" hits the name "Pita Pocket" and the cuisine "italian".
        assert_eq!(find("ita"), vec!["Taste of Little Italy", "Pita Pocket"]);
    }

    #[test]
    fn numeric_keyword_matches_cheaper_restaurants() {
        assert_eq!(find("10"), vec!["Pita Pocket", "Quick Cup"]);
        assert_eq!(find("10.01"), vec![
            "Taste of Little Italy",
            "Pita Pocket",
            "Hot Tamale",
            "Quick Cup",
        ]);
    }

    #[test]
    fn non_positive_numbers_only_match_text() {
        assert!(find("0").is_empty());
        assert!(find("-5").is_empty());
    }

    #[test]
    fn no_matches() {
        assert!(find("sushi").is_empty());
    }

    #[test]
    fn query_ignores_missing_prices() {
        let query = Query::new("100");
        let r = Restaurant::from_line("Nowhere\tnone\t", 1).unwrap();
        assert!(!query.matches(&r));
    }
}
