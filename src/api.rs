//! # Order API
//!
//! The entry points a transport layer calls. Each one runs the guard with its
//! [`Operation`]'s access rule and only then reaches the engine or the bus.
//!
//! Engine failures come back inside the [`Output`] envelope; guard denials are returned
//! as [`AccessError`] so the transport can map them to its own status codes.

use crate::engine::{
    Ack, CreateOrderInput, CreateOrderOutput, EditOrderInput, GetOrdersInput, OrderEngine,
    OrderIdInput, OrderOutput, OrdersOutput, Output,
};
use crate::events::{OrderBus, OrderFilter, OrderSubscription, Topic};
use crate::guard::{authorize_operation, AccessError, Operation};
use crate::model::AuthUser;

#[derive(Clone)]
pub struct OrderApi {
    engine: OrderEngine,
    bus: OrderBus,
}

impl OrderApi {
    pub fn new(engine: OrderEngine, bus: OrderBus) -> Self {
        Self { engine, bus }
    }

    pub async fn create_order(
        &self,
        identity: Option<&AuthUser>,
        input: CreateOrderInput,
    ) -> Result<Output<CreateOrderOutput>, AccessError> {
        let customer = authorize_operation(Operation::CreateOrder, identity)?;
        Ok(self.engine.create(&customer, input).await.into())
    }

    pub async fn get_orders(
        &self,
        identity: Option<&AuthUser>,
        input: GetOrdersInput,
    ) -> Result<Output<OrdersOutput>, AccessError> {
        let user = authorize_operation(Operation::GetOrders, identity)?;
        Ok(self.engine.get_many(&user, input).await.into())
    }

    pub async fn get_order(
        &self,
        identity: Option<&AuthUser>,
        input: OrderIdInput,
    ) -> Result<Output<OrderOutput>, AccessError> {
        let user = authorize_operation(Operation::GetOrder, identity)?;
        Ok(self.engine.get_one(&user, input).await.into())
    }

    pub async fn edit_order(
        &self,
        identity: Option<&AuthUser>,
        input: EditOrderInput,
    ) -> Result<Output<Ack>, AccessError> {
        let user = authorize_operation(Operation::EditOrder, identity)?;
        Ok(self.engine.edit(&user, input).await.into())
    }

    pub async fn take_order(
        &self,
        identity: Option<&AuthUser>,
        input: OrderIdInput,
    ) -> Result<Output<Ack>, AccessError> {
        let driver = authorize_operation(Operation::TakeOrder, identity)?;
        Ok(self.engine.claim(&driver, input).await.into())
    }

    /// New orders of the caller's restaurants.
    pub fn pending_orders(&self, identity: Option<&AuthUser>) -> Result<OrderSubscription, AccessError> {
        let owner = authorize_operation(Operation::PendingOrders, identity)?;
        Ok(self
            .bus
            .subscribe_filtered(Topic::PendingOrder, OrderFilter::PendingFor { owner: owner.id }))
    }

    /// Every order that leaves a kitchen, for drivers looking for work.
    pub fn cooked_orders(&self, identity: Option<&AuthUser>) -> Result<OrderSubscription, AccessError> {
        authorize_operation(Operation::CookedOrders, identity)?;
        Ok(self.bus.subscribe(Topic::CookedOrder))
    }

    /// Changes to one order the caller takes part in.
    pub fn order_updates(
        &self,
        identity: Option<&AuthUser>,
        input: OrderIdInput,
    ) -> Result<OrderSubscription, AccessError> {
        let user = authorize_operation(Operation::OrderUpdates, identity)?;
        Ok(self.bus.subscribe_filtered(
            Topic::OrderUpdate,
            OrderFilter::UpdatesFor {
                subscriber: user.id,
                order_id: input.id,
            },
        ))
    }
}
