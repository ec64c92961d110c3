use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Price, Restaurant, RestaurantAttrs};
use crate::registry::Registry;
use crate::store::LineBackend;

/// Raw answers collected by the `add` prompts.
#[derive(Debug, Clone, Default)]
pub struct Answers {
    pub name: String,
    pub cuisine: String,
    pub price: String,
}

impl Answers {
    /// Builds the record. A price answer that is not a number leaves the price
    /// unset, which makes the record invalid.
    pub fn into_restaurant(self) -> Restaurant {
        let price = self.price.trim().parse::<Price>().ok();
        if price.is_none() {
            log::debug!("Price answer {:?} is not a number", self.price);
        }
        Restaurant::new(RestaurantAttrs {
            name: Some(self.name.trim().to_string()),
            cuisine: Some(self.cuisine.trim().to_string()),
            price,
        })
    }
}

pub fn run<B: LineBackend>(registry: &mut Registry<B>, answers: Answers) -> CmdResult {
    let restaurant = answers.into_restaurant();
    let mut result = CmdResult::default();
    if restaurant.save(registry) {
        result.add_message(CmdMessage::success("Restaurant Added"));
        result.with_saved(restaurant)
    } else {
        result.add_message(CmdMessage::error("Save Error: Restaurant not added"));
        result
    }
}
