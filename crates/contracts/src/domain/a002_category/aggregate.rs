use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::shared::list_query::sort::cmp_text;
use crate::shared::list_query::{FilterField, Filterable, Identifiable, Sortable};
use crate::shared::multipart::MultipartFields;

/// Storefront category with its tile image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Identifiable for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Filterable for Category {
    fn field(&self, _field: FilterField) -> Option<&str> {
        None
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Sortable for Category {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(Some(self.name.as_str()), Some(other.name.as_str())),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    #[serde(default)]
    pub success: bool,
    pub category: Category,
}

/// Text part of the category form; the image goes as the `image` file part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub name: String,
}

impl CategoryForm {
    pub fn from_category(c: &Category) -> Self {
        Self {
            name: c.name.clone(),
        }
    }

    /// A new category needs an image; an edit may keep the stored one.
    pub fn to_fields(&self, has_image: bool, creating: bool) -> Result<MultipartFields, String> {
        if self.name.trim().is_empty() {
            return Err("Category name is required".into());
        }
        if creating && !has_image {
            return Err("Category image is required".into());
        }
        Ok(MultipartFields::new().text("name", &self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_name_and_image() {
        let form = CategoryForm {
            name: "  ".into(),
        };
        assert!(form.to_fields(true, true).is_err());

        let form = CategoryForm {
            name: "Shoes".into(),
        };
        assert_eq!(
            form.to_fields(false, true).unwrap_err(),
            "Category image is required"
        );
        assert_eq!(form.to_fields(false, false).unwrap().get("name"), Some("Shoes"));
    }

    #[test]
    fn decodes_list() {
        let resp: CategoriesResponse = serde_json::from_str(
            r#"{"success":true,"categories":[{"_id":"c1","name":"Shoes","image":"/uploads/s.png"}]}"#,
        )
        .unwrap();
        assert_eq!(resp.categories[0].image.as_deref(), Some("/uploads/s.png"));
    }
}
