use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::shared::list_query::sort::cmp_text;
use crate::shared::list_query::{FilterField, Filterable, Identifiable, Sortable};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BannerStatus {
    #[default]
    #[serde(alias = "active")]
    Active,
    #[serde(alias = "inactive")]
    Inactive,
}

impl BannerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BannerStatus::Active => "Active",
            BannerStatus::Inactive => "Inactive",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            BannerStatus::Active => BannerStatus::Inactive,
            BannerStatus::Inactive => BannerStatus::Active,
        }
    }
}

/// Home page slide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: BannerStatus,
    #[serde(default)]
    pub background_color: Option<String>,
}

impl Identifiable for Banner {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Filterable for Banner {
    fn field(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Status => Some(self.status.as_str()),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        self.title.as_deref().into_iter().collect()
    }

    fn field_matches(&self, field: FilterField, wanted: &str) -> bool {
        self.field(field)
            .is_some_and(|value| value.eq_ignore_ascii_case(wanted))
    }
}

impl Sortable for Banner {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => cmp_text(self.title.as_deref(), other.title.as_deref()),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BannersResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub banners: Vec<Banner>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerResponse {
    #[serde(default)]
    pub success: bool,
    pub banner: Banner,
}

/// JSON body of a status-only banner update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerStatusRequest {
    pub status: BannerStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips() {
        assert_eq!(BannerStatus::Active.toggled(), BannerStatus::Inactive);
        assert_eq!(BannerStatus::Inactive.toggled(), BannerStatus::Active);
    }

    #[test]
    fn decodes_and_encodes_status() {
        let banner: Banner = serde_json::from_str(
            r##"{"_id":"b1","image":"/u/b.png","title":"b.png","status":"Inactive","backgroundColor":"#fff"}"##,
        )
        .unwrap();
        assert_eq!(banner.status, BannerStatus::Inactive);
        assert_eq!(banner.background_color.as_deref(), Some("#fff"));

        let body = serde_json::to_string(&BannerStatusRequest {
            status: banner.status.toggled(),
        })
        .unwrap();
        assert_eq!(body, r#"{"status":"Active"}"#);
    }
}
