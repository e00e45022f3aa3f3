use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::shared::list_query::sort::{cmp_f64, cmp_text};
use crate::shared::list_query::{FilterField, Filterable, Identifiable, Sortable};
use crate::shared::multipart::{parse_number, MultipartFields};
use crate::shared::serde_helpers::{lenient_f64, lenient_opt_f64, string_or_vec, split_tags};

// ============================================================================
// Aggregate
// ============================================================================

/// Catalog product as returned by `GET /product/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub third_level_category: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub original_price: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub stock_quantity: f64,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default, deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub average_rating: f64,
    #[serde(default)]
    pub reviews: Vec<ProductReview>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Product {
    /// Whole-percent markdown from the original price, 0 when not discounted.
    pub fn discount_percent(&self) -> u32 {
        if self.original_price > 0.0 && self.price < self.original_price && self.price >= 0.0 {
            ((self.original_price - self.price) / self.original_price * 100.0).round() as u32
        } else {
            0
        }
    }

    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0.0
    }

    /// Low stock threshold used by the stock badge.
    pub fn low_stock(&self) -> bool {
        self.stock_quantity > 0.0 && self.stock_quantity < 10.0
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// `Category / Sub / Third`, skipping missing levels.
    pub fn category_path(&self) -> String {
        [
            self.category.as_deref(),
            self.sub_category.as_deref(),
            self.third_level_category.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" / ")
    }
}

impl Identifiable for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Filterable for Product {
    fn field(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Category => self.category.as_deref(),
            FilterField::SubCategory => self.sub_category.as_deref(),
            FilterField::ThirdLevelCategory => self.third_level_category.as_deref(),
            FilterField::Status | FilterField::Role => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut out = vec![self.name.as_str()];
        out.extend(self.brand.as_deref());
        out.extend(self.sku.as_deref());
        out
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(Some(self.name.as_str()), Some(other.name.as_str())),
            "brand" => cmp_text(self.brand.as_deref(), other.brand.as_deref()),
            "category" => cmp_text(self.category.as_deref(), other.category.as_deref()),
            "subCategory" => cmp_text(self.sub_category.as_deref(), other.sub_category.as_deref()),
            "thirdLevelCategory" => cmp_text(
                self.third_level_category.as_deref(),
                other.third_level_category.as_deref(),
            ),
            "sku" => cmp_text(self.sku.as_deref(), other.sku.as_deref()),
            "price" => cmp_f64(self.price, other.price),
            "originalPrice" => cmp_f64(self.original_price, other.original_price),
            "stockQuantity" => cmp_f64(self.stock_quantity, other.stock_quantity),
            "averageRating" => cmp_f64(self.average_rating, other.average_rating),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReview {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rating: f64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

// ============================================================================
// Wire envelopes
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    #[serde(default)]
    pub success: bool,
    pub product: Product,
}

/// Body of `POST /product/admin/{id}/reviews`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub rating: u8,
    pub comment: String,
}

impl ReviewRequest {
    pub fn new(rating: u8, comment: &str) -> Result<Self, String> {
        if !(1..=5).contains(&rating) {
            return Err("Rating must be between 1 and 5".into());
        }
        let comment = comment.trim();
        if comment.is_empty() {
            return Err("Comment is required".into());
        }
        Ok(Self {
            rating,
            comment: comment.to_string(),
        })
    }
}

// ============================================================================
// Form
// ============================================================================

/// Raw inputs of the create/edit product form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub brand: String,
    pub description: String,
    pub category: String,
    pub sub_category: String,
    pub third_level_category: String,
    pub original_price: String,
    pub price: String,
    pub stock_quantity: String,
    pub sku: String,
    pub weight: String,
    pub dimensions: String,
    pub tags: String,
}

impl ProductForm {
    /// Prefills the edit form.
    pub fn from_product(p: &Product) -> Self {
        let num = |v: f64| {
            if v.fract() == 0.0 {
                format!("{}", v as i64)
            } else {
                v.to_string()
            }
        };
        Self {
            name: p.name.clone(),
            brand: p.brand.clone().unwrap_or_default(),
            description: p.description.clone().unwrap_or_default(),
            category: p.category.clone().unwrap_or_default(),
            sub_category: p.sub_category.clone().unwrap_or_default(),
            third_level_category: p.third_level_category.clone().unwrap_or_default(),
            original_price: num(p.original_price),
            price: num(p.price),
            stock_quantity: num(p.stock_quantity),
            sku: p.sku.clone().unwrap_or_default(),
            weight: p.weight.map(num).unwrap_or_default(),
            dimensions: p.dimensions.clone().unwrap_or_default(),
            tags: p.tags.join(", "),
        }
    }

    /// Checks required inputs and turns the form into multipart text fields.
    pub fn to_fields(&self) -> Result<MultipartFields, String> {
        let required = [
            (&self.name, "Product name is required"),
            (&self.brand, "Brand is required"),
            (&self.description, "Description is required"),
            (&self.category, "Category is required"),
            (&self.sub_category, "Sub Category is required"),
        ];
        for (value, message) in required {
            if value.trim().is_empty() {
                return Err(message.to_string());
            }
        }

        let original_price = parse_number(&self.original_price, "Original price")?
            .ok_or("Original price is required")?;
        let price = parse_number(&self.price, "Price")?.ok_or("Price is required")?;
        let stock = parse_number(&self.stock_quantity, "Stock quantity")?
            .ok_or("Stock quantity is required")?;
        let weight = parse_number(&self.weight, "Weight")?;
        let tags = split_tags(&self.tags).join(",");

        Ok(MultipartFields::new()
            .text("name", &self.name)
            .text("brand", &self.brand)
            .text("description", &self.description)
            .text("category", &self.category)
            .text("subCategory", &self.sub_category)
            .text("thirdLevelCategory", &self.third_level_category)
            .number("originalPrice", Some(original_price))
            .number("price", Some(price))
            .number("stockQuantity", Some(stock))
            .text("sku", &self.sku)
            .number("weight", weight)
            .text("dimensions", &self.dimensions)
            .text("tags", &tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_payload() {
        let json = r#"{
            "success": true,
            "products": [{
                "_id": "65f0",
                "name": "Desk Lamp",
                "brand": "Lumo",
                "category": "Home",
                "subCategory": "Lighting",
                "originalPrice": 50,
                "price": "40",
                "stockQuantity": 3,
                "tags": "desk, lamp",
                "images": ["/uploads/lamp.png"],
                "averageRating": 4.5,
                "reviews": [{"name": "Ann", "rating": 5, "comment": "Great"}]
            }]
        }"#;
        let resp: ProductsResponse = serde_json::from_str(json).unwrap();
        let p = &resp.products[0];
        assert_eq!(p.id, "65f0");
        assert_eq!(p.sub_category.as_deref(), Some("Lighting"));
        assert_eq!(p.third_level_category, None);
        assert_eq!(p.price, 40.0);
        assert_eq!(p.tags, vec!["desk", "lamp"]);
        assert_eq!(p.discount_percent(), 20);
        assert!(p.low_stock());
        assert_eq!(p.reviews[0].rating, 5.0);
        assert_eq!(p.category_path(), "Home / Lighting");
    }

    #[test]
    fn no_discount_when_price_not_lower() {
        let p = Product {
            original_price: 10.0,
            price: 12.0,
            ..Default::default()
        };
        assert_eq!(p.discount_percent(), 0);
        assert_eq!(Product::default().discount_percent(), 0);
    }

    #[test]
    fn form_requires_core_fields() {
        let form = ProductForm {
            name: "Lamp".into(),
            ..Default::default()
        };
        assert_eq!(form.to_fields().unwrap_err(), "Brand is required");
    }

    #[test]
    fn form_fields_use_wire_keys() {
        let form = ProductForm {
            name: "Lamp".into(),
            brand: "Lumo".into(),
            description: "Warm light".into(),
            category: "Home".into(),
            sub_category: "Lighting".into(),
            original_price: "50".into(),
            price: "39.5".into(),
            stock_quantity: "7".into(),
            tags: " desk ,lamp, ".into(),
            ..Default::default()
        };
        let fields = form.to_fields().unwrap();
        assert_eq!(fields.get("subCategory"), Some("Lighting"));
        assert_eq!(fields.get("price"), Some("39.5"));
        assert_eq!(fields.get("stockQuantity"), Some("7"));
        assert_eq!(fields.get("tags"), Some("desk,lamp"));
        assert_eq!(fields.get("thirdLevelCategory"), None);
        assert_eq!(fields.get("weight"), None);
    }

    #[test]
    fn edit_form_prefill_round_trips() {
        let product = Product {
            id: "1".into(),
            name: "Lamp".into(),
            brand: Some("Lumo".into()),
            description: Some("Warm".into()),
            category: Some("Home".into()),
            sub_category: Some("Lighting".into()),
            original_price: 50.0,
            price: 45.0,
            stock_quantity: 2.0,
            weight: Some(1.25),
            tags: vec!["a".into(), "b".into()],
            ..Default::default()
        };
        let form = ProductForm::from_product(&product);
        assert_eq!(form.price, "45");
        assert_eq!(form.weight, "1.25");
        assert_eq!(form.tags, "a, b");
        assert!(form.to_fields().is_ok());
    }

    #[test]
    fn review_validation() {
        assert!(ReviewRequest::new(0, "ok").is_err());
        assert!(ReviewRequest::new(3, "  ").is_err());
        assert_eq!(ReviewRequest::new(4, " nice ").unwrap().comment, "nice");
    }
}
