//! Menu pricing.
//!
//! An item costs the dish's base price, plus the `extra` of every picked option, plus the
//! `extra` of the picked choice within that option. A missing `extra` counts as zero.

use crate::model::{Dish, Money, OrderItemOption};
use thiserror::Error;

/// Raised when a selection names something the dish does not offer, or when a price
/// leaves the `Money` range.
///
/// Requests are validated before they reach pricing, so this signals a broken caller
/// or a corrupt menu rather than a customer mistake.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    #[error("dish {dish} has no option named {option:?}")]
    UnknownOption { dish: String, option: String },

    #[error("option {option:?} of dish {dish} has no choice named {choice:?}")]
    UnknownChoice {
        dish: String,
        option: String,
        choice: String,
    },

    #[error("price of {what} exceeds the money range")]
    Overflow { what: String },
}

/// Price of one dish with the given selections.
pub fn price_item(dish: &Dish, selections: &[OrderItemOption]) -> Result<Money, PricingError> {
    let mut price = dish.price;
    for selection in selections {
        let option = dish
            .options
            .iter()
            .find(|option| option.name == selection.name)
            .ok_or_else(|| PricingError::UnknownOption {
                dish: dish.name.clone(),
                option: selection.name.clone(),
            })?;
        price = add_extra(price, option.extra, dish)?;

        if let Some(choice_name) = &selection.choice {
            let choice = option
                .choices
                .iter()
                .find(|choice| &choice.name == choice_name)
                .ok_or_else(|| PricingError::UnknownChoice {
                    dish: dish.name.clone(),
                    option: option.name.clone(),
                    choice: choice_name.clone(),
                })?;
            price = add_extra(price, choice.extra, dish)?;
        }
    }
    Ok(price)
}

fn add_extra(price: Money, extra: Option<Money>, dish: &Dish) -> Result<Money, PricingError> {
    price
        .checked_add(extra.unwrap_or(Money::ZERO))
        .ok_or_else(|| PricingError::Overflow {
            what: format!("dish {}", dish.name),
        })
}

/// Order total from per-item prices.
pub fn order_total(item_prices: impl IntoIterator<Item = Money>) -> Result<Money, PricingError> {
    Money::checked_sum(item_prices).ok_or_else(|| PricingError::Overflow {
        what: "order".to_string(),
    })
}
