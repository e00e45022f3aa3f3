use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::shared::list_query::sort::cmp_text;
use crate::shared::list_query::{FilterField, Filterable, Identifiable, Sortable};

/// Options of the role filter, `"all"` first.
pub const ROLE_OPTIONS: [(&str, &str); 4] = [
    ("all", "All Roles"),
    ("admin", "Admin"),
    ("moderator", "Moderator"),
    ("customer", "Customer"),
];

pub const STATUS_OPTIONS: [(&str, &str); 4] = [
    ("all", "All Status"),
    ("active", "Active"),
    ("inactive", "Inactive"),
    ("pending", "Pending"),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAddress {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl UserAddress {
    pub fn city_country(&self) -> String {
        format!(
            "{}, {}",
            self.city.as_deref().unwrap_or_default(),
            self.country.as_deref().unwrap_or_default()
        )
    }
}

/// Customer or staff account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub address: Option<UserAddress>,
    /// Only the count is shown, so the elements stay opaque.
    #[serde(default)]
    pub orders: Vec<serde_json::Value>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case("admin"))
    }

    pub fn role_label(&self) -> &'static str {
        if self.is_admin() {
            "Administrator"
        } else {
            "Customer"
        }
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}

impl Identifiable for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Filterable for User {
    fn field(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Role => self.role.as_deref(),
            FilterField::Status => self.status.as_deref(),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut out = vec![self.name.as_str(), self.email.as_str()];
        out.extend(self.phone.as_deref());
        out
    }

    /// Stored roles are lowercase while older accounts use capitalized ones.
    fn field_matches(&self, field: FilterField, wanted: &str) -> bool {
        self.field(field)
            .is_some_and(|value| value.eq_ignore_ascii_case(wanted))
    }
}

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(Some(self.name.as_str()), Some(other.name.as_str())),
            "email" => cmp_text(Some(self.email.as_str()), Some(other.email.as_str())),
            "role" => cmp_text(self.role.as_deref(), other.role.as_deref()),
            "status" => cmp_text(self.status.as_deref(), other.status.as_deref()),
            "orders" => self.order_count().cmp(&other.order_count()),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub users: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::{apply_filters, ListFilters};

    #[test]
    fn decodes_user_with_orders() {
        let json = r#"{"success":true,"users":[{
            "_id":"u1","name":"Ann","email":"a@x.test","role":"admin",
            "address":{"city":"Lahore","country":"PK"},
            "orders":["o1",{"_id":"o2"}]
        }]}"#;
        let resp: UsersResponse = serde_json::from_str(json).unwrap();
        let user = &resp.users[0];
        assert_eq!(user.order_count(), 2);
        assert_eq!(user.role_label(), "Administrator");
        assert_eq!(
            user.address.as_ref().map(UserAddress::city_country).as_deref(),
            Some("Lahore, PK")
        );
    }

    #[test]
    fn role_filter_ignores_case() {
        let users = vec![User {
            id: "u1".into(),
            role: Some("admin".into()),
            ..Default::default()
        }];
        let filters = ListFilters {
            role: "Admin".into(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&users, &filters).len(), 1);
    }
}
