//! Walks one order from placement to delivery, logging every event each party receives.

use order_dispatch::config::DispatchConfig;
use order_dispatch::engine::{
    CreateOrderInput, CreateOrderItemInput, EditOrderInput, OrderIdInput, Output,
};
use order_dispatch::events::OrderSubscription;
use order_dispatch::lifecycle::{setup_tracing, DispatchSystem};
use order_dispatch::model::{AuthUser, DishOption, Money, OrderItemOption, OrderStatus};
use tracing::{error, info, Instrument};

fn report<T>(step: &str, output: Output<T>) -> Result<T, Box<dyn std::error::Error>> {
    match output.data {
        Some(data) if output.ok => {
            info!(step, "ok");
            Ok(data)
        }
        _ => {
            let message = output.error.unwrap_or_default();
            error!(step, error = %message, "failed");
            Err(message.into())
        }
    }
}

fn drain(who: &str, subscription: &mut OrderSubscription) {
    while let Some(event) = subscription.try_recv() {
        let order = event.order();
        info!(who, topic = %event.topic(), order_id = %order.id, status = %order.status, "Event received");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DispatchConfig::from_env()?;
    setup_tracing(&config.log_filter);

    let system = DispatchSystem::new(&config);
    let customer = AuthUser::client(1);
    let owner = AuthUser::owner(2);
    let driver = AuthUser::delivery(3);

    let restaurant = system.add_restaurant("Pho Place", owner.id).await?;
    let dish = system
        .add_dish(
            restaurant.id,
            "Beef Pho",
            Money::from_cents(1000),
            vec![DishOption::new("Size", None).with_choice("Large", Some(Money::from_cents(250)))],
        )
        .await?;

    let mut kitchen = system.api.pending_orders(Some(&owner))?;
    let mut drivers = system.api.cooked_orders(Some(&driver))?;

    let span = tracing::info_span!("place_order");
    let created = async {
        let input = CreateOrderInput {
            restaurant_id: restaurant.id,
            items: vec![CreateOrderItemInput {
                dish_id: dish.id,
                options: vec![OrderItemOption::with_choice("Size", "Large")],
            }],
        };
        system.api.create_order(Some(&customer), input).await
    }
    .instrument(span)
    .await?;
    let order_id = report("create", created)?.order_id;
    drain("owner", &mut kitchen);

    let mut customer_feed = system.api.order_updates(Some(&customer), OrderIdInput { id: order_id })?;

    for status in [OrderStatus::Cooking, OrderStatus::Cooked] {
        let edited = system
            .api
            .edit_order(Some(&owner), EditOrderInput { id: order_id, status })
            .await?;
        report("kitchen", edited)?;
    }
    drain("drivers", &mut drivers);

    let taken = system.api.take_order(Some(&driver), OrderIdInput { id: order_id }).await?;
    report("take", taken)?;

    for status in [OrderStatus::PickedUp, OrderStatus::Delivered] {
        let edited = system
            .api
            .edit_order(Some(&driver), EditOrderInput { id: order_id, status })
            .await?;
        report("delivery", edited)?;
    }
    drain("customer", &mut customer_feed);

    let order = report(
        "final",
        system.api.get_order(Some(&customer), OrderIdInput { id: order_id }).await?,
    )?
    .order;
    info!(order_id = %order.id, status = %order.status, total = ?order.total, "Order finished");

    drop((kitchen, drivers, customer_feed));
    system.shutdown().await?;
    Ok(())
}
