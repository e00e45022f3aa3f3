use contracts::domain::a003_order::{
    Order, OrderResponse, OrderStatus, OrdersResponse, UpdateOrderStatusRequest,
};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{delete, get_json, send_json, Verb};

pub async fn fetch_orders() -> Result<Vec<Order>, ApiError> {
    let response: OrdersResponse = get_json("/order", "Failed to fetch orders").await?;
    Ok(response.orders)
}

pub async fn fetch_order(id: &str) -> Result<Order, ApiError> {
    let response: OrderResponse =
        get_json(&format!("/order/{}", id), "Failed to fetch order").await?;
    response
        .data
        .ok_or_else(|| ApiError::Decode(format!("order {} missing from response", id)))
}

/// Moves an order to `status`. Some backend versions answer without the
/// order, in which case it is read back.
pub async fn update_order_status(id: &str, status: OrderStatus) -> Result<Order, ApiError> {
    let response: OrderResponse = send_json(
        Verb::Put,
        &format!("/order/{}/status", id),
        &UpdateOrderStatusRequest { status },
        "Failed to update order status",
    )
    .await?;
    match response.data {
        Some(order) => Ok(order),
        None => fetch_order(id).await,
    }
}

pub async fn delete_order(id: &str) -> Result<(), ApiError> {
    delete(&format!("/order/{}", id), "Failed to delete order").await
}
