use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shared::list_query::sort::{cmp_f64, cmp_text};
use crate::shared::list_query::{FilterField, Filterable, Identifiable, Sortable};
use crate::shared::serde_helpers::lenient_f64;

// ============================================================================
// Status
// ============================================================================

/// Fulfilment status. The backend sends capitalized names; anything it adds
/// later is kept verbatim in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    /// Values an admin can move an order to.
    pub const EDITABLE: [OrderStatus; 4] = [
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Options of the list status filter, `"all"` first.
    pub const FILTER_OPTIONS: [(&'static str, &'static str); 6] = [
        ("all", "All Status"),
        ("processing", "Processing"),
        ("shipped", "Shipped"),
        ("delivered", "Delivered"),
        ("cancelled", "Cancelled"),
        ("pending", "Pending"),
    ];

    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Other(s) => s,
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => OrderStatus::Pending,
            "processing" => OrderStatus::Processing,
            "shipped" => OrderStatus::Shipped,
            "delivered" => OrderStatus::Delivered,
            "cancelled" | "canceled" => OrderStatus::Cancelled,
            _ => OrderStatus::Other(raw.trim().to_string()),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        OrderStatus::parse(&raw)
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
}

impl ShippingAddress {
    /// Street, city and zip on one line.
    pub fn one_line(&self) -> String {
        [
            self.address.as_deref(),
            self.city.as_deref(),
            self.zip_code.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// Product snapshot embedded in an order line when the backend populates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProduct {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
}

/// An order line references its product either by id or by embedding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductRef {
    Embedded(OrderProduct),
    Id(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub product: Option<ProductRef>,
    #[serde(default)]
    pub quantity: u32,
}

impl OrderItem {
    pub fn product(&self) -> Option<&OrderProduct> {
        match &self.product {
            Some(ProductRef::Embedded(p)) => Some(p),
            _ => None,
        }
    }

    pub fn unit_price(&self) -> f64 {
        self.product().map(|p| p.price).unwrap_or_default()
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }

    pub fn display_name(&self) -> &str {
        self.product()
            .and_then(|p| p.name.as_deref())
            .unwrap_or("Product not found")
    }
}

/// Customer reference, populated or bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderCustomer {
    Embedded {
        #[serde(rename = "_id", default)]
        id: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        email: Option<String>,
    },
    Id(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    #[serde(default)]
    pub shipping_address: Option<ShippingAddress>,
    #[serde(default)]
    pub order_status: OrderStatus,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_price: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub shipping_price: f64,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user: Option<OrderCustomer>,
}

impl Order {
    pub fn customer_name(&self) -> &str {
        self.shipping_address
            .as_ref()
            .and_then(|a| a.full_name.as_deref())
            .or(match &self.user {
                Some(OrderCustomer::Embedded { name, .. }) => name.as_deref(),
                _ => None,
            })
            .unwrap_or("-")
    }

    pub fn phone(&self) -> Option<&str> {
        self.shipping_address.as_ref().and_then(|a| a.phone.as_deref())
    }

    /// Sum of line totals for populated lines.
    pub fn subtotal(&self) -> f64 {
        self.order_items.iter().map(OrderItem::line_total).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.order_items.iter().map(|i| i.quantity).sum()
    }

    /// Last six characters of the id, as shown in tables.
    pub fn short_id(&self) -> &str {
        let start = self
            .id
            .char_indices()
            .rev()
            .nth(5)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &self.id[start..]
    }
}

impl Identifiable for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Filterable for Order {
    fn field(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Status => Some(self.order_status.as_str()),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut out = vec![self.id.as_str()];
        if let Some(addr) = &self.shipping_address {
            out.extend(addr.full_name.as_deref());
            out.extend(addr.phone.as_deref());
        }
        out
    }

    /// Dropdown values are lowercase, stored ones capitalized.
    fn field_matches(&self, field: FilterField, wanted: &str) -> bool {
        self.field(field)
            .is_some_and(|value| value.eq_ignore_ascii_case(wanted))
    }
}

impl Sortable for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "customer" => cmp_text(Some(self.customer_name()), Some(other.customer_name())),
            "orderStatus" => cmp_text(Some(self.order_status.as_str()), Some(other.order_status.as_str())),
            "totalPrice" => cmp_f64(self.total_price, other.total_price),
            "paymentMethod" => cmp_text(self.payment_method.as_deref(), other.payment_method.as_deref()),
            "createdAt" => self.created_at.cmp(&other.created_at),
            "items" => self.order_items.len().cmp(&other.order_items.len()),
            _ => Ordering::Equal,
        }
    }
}

// ============================================================================
// Stats
// ============================================================================

/// Header counters of the orders screen, over the whole snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub processing: usize,
    pub shipped: usize,
    pub delivered: usize,
    pub cancelled: usize,
    pub total_revenue: f64,
}

impl OrderStats {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut stats = OrderStats {
            total: orders.len(),
            ..Default::default()
        };
        for order in orders {
            match order.order_status {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::Processing => stats.processing += 1,
                OrderStatus::Shipped => stats.shipped += 1,
                OrderStatus::Delivered => stats.delivered += 1,
                OrderStatus::Cancelled => stats.cancelled += 1,
                OrderStatus::Other(_) => {}
            }
            stats.total_revenue += order.total_price;
        }
        stats
    }
}

// ============================================================================
// Wire envelopes
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrdersResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// `GET /order/{id}` wraps the order in `data`; mutations may use `order`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, alias = "order")]
    pub data: Option<Order>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_case_insensitive_and_keeps_unknowns() {
        assert_eq!(OrderStatus::parse("SHIPPED"), OrderStatus::Shipped);
        assert_eq!(OrderStatus::parse("canceled"), OrderStatus::Cancelled);
        assert_eq!(
            OrderStatus::parse("Returned"),
            OrderStatus::Other("Returned".into())
        );
        let json = serde_json::to_string(&UpdateOrderStatusRequest {
            status: OrderStatus::Delivered,
        })
        .unwrap();
        assert_eq!(json, r#"{"status":"Delivered"}"#);
    }

    #[test]
    fn decodes_populated_and_bare_items() {
        let json = r#"{
            "success": true,
            "orders": [{
                "_id": "66aa00112233",
                "orderItems": [
                    {"_id": "i1", "product": {"_id": "p1", "name": "Lamp", "price": 20, "images": ["/u/l.png"]}, "quantity": 2},
                    {"_id": "i2", "product": "p2", "quantity": 1}
                ],
                "shippingAddress": {"fullName": "Jane", "phone": "555", "city": "Lahore"},
                "orderStatus": "Processing",
                "totalPrice": 250,
                "shippingPrice": 10,
                "paymentMethod": "COD",
                "user": "u1"
            }]
        }"#;
        let resp: OrdersResponse = serde_json::from_str(json).unwrap();
        let order = &resp.orders[0];
        assert_eq!(order.order_status, OrderStatus::Processing);
        assert_eq!(order.order_items[0].line_total(), 40.0);
        assert_eq!(order.order_items[1].display_name(), "Product not found");
        assert_eq!(order.subtotal(), 40.0);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.customer_name(), "Jane");
        assert_eq!(order.short_id(), "112233");
        assert_eq!(order.user, Some(OrderCustomer::Id("u1".into())));
    }

    #[test]
    fn detail_envelope_accepts_data_or_order() {
        let a: OrderResponse = serde_json::from_str(r#"{"data":{"_id":"x"}}"#).unwrap();
        let b: OrderResponse = serde_json::from_str(r#"{"order":{"_id":"y"}}"#).unwrap();
        assert_eq!(a.data.map(|o| o.id).as_deref(), Some("x"));
        assert_eq!(b.data.map(|o| o.id).as_deref(), Some("y"));
    }

    #[test]
    fn stats_count_statuses_and_revenue() {
        let order = |status: OrderStatus, total: f64| Order {
            order_status: status,
            total_price: total,
            ..Default::default()
        };
        let stats = OrderStats::from_orders(&[
            order(OrderStatus::Processing, 10.0),
            order(OrderStatus::Processing, 5.0),
            order(OrderStatus::Delivered, 20.0),
            order(OrderStatus::Other("Returned".into()), 1.0),
        ]);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.processing, 2);
        assert_eq!(stats.delivered, 1);
        assert_eq!(stats.shipped, 0);
        assert_eq!(stats.total_revenue, 36.0);
    }

    #[test]
    fn short_id_of_short_id_is_whole() {
        let order = Order {
            id: "abc".into(),
            ..Default::default()
        };
        assert_eq!(order.short_id(), "abc");
    }
}
