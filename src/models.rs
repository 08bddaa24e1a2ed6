//! Frontend Models
//!
//! Data structures matching the list/history API payloads.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque item identifier. The server sends either a string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    #[cfg(test)]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
            Float(f64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => ItemId(s),
            RawId::Int(n) => ItemId(n.to_string()),
            RawId::Float(n) => ItemId(n.to_string()),
        })
    }
}

/// A single grocery item as displayed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub last_bought: Option<String>,
    #[serde(default)]
    pub days_since_last_bought: Option<i64>,
}

/// Category name -> items, in the order the server sent them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Categories(Vec<(String, Vec<Item>)>);

impl Categories {
    #[cfg(test)]
    pub fn new(entries: Vec<(String, Vec<Item>)>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Item])> {
        self.0.iter().map(|(name, items)| (name.as_str(), items.as_slice()))
    }
}

impl Serialize for Categories {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, items) in &self.0 {
            map.serialize_entry(name, items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Categories {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CategoriesVisitor;

        impl<'de> Visitor<'de> for CategoriesVisitor {
            type Value = Categories;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category name to items")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, items)) = access.next_entry::<String, Vec<Item>>()? {
                    entries.push((name, items));
                }
                Ok(Categories(entries))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Categories::default())
            }
        }

        deserializer.deserialize_any(CategoriesVisitor)
    }
}

/// Current list as returned by `/get-current-list`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSnapshot {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub categories: Categories,
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub checked_items: u32,
}

impl ListSnapshot {
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

/// One completed shopping trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub completed_at: String,
    #[serde(default)]
    pub days_ago: i64,
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub checked_items: u32,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Trip history as returned by `/get-history`, most recent first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySnapshot {
    #[serde(default)]
    pub total_trips: u32,
    #[serde(default)]
    pub trips: Vec<Trip>,
}

impl HistorySnapshot {
    pub fn is_empty(&self) -> bool {
        self.total_trips == 0
    }
}

/// Entry of `added`/`skipped`: either a bare name or an object with a `name`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NamedEntry {
    Name(String),
    Detailed { name: String },
}

impl NamedEntry {
    pub fn name(&self) -> &str {
        match self {
            NamedEntry::Name(name) | NamedEntry::Detailed { name } => name,
        }
    }
}

fn entry_names<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let entries = Option::<Vec<NamedEntry>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries.into_iter().map(|e| e.name().to_string()).collect())
}

/// `/add-item` response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "entry_names")]
    pub added: Vec<String>,
    #[serde(default, deserialize_with = "entry_names")]
    pub skipped: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `/toggle-item` response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// `/delete-item` response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub deleted: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of the plain actions (`/clear-all`, `/complete-trip`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `/copy-from-last-trip` response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub copied_count: u32,
    #[serde(default)]
    pub error: Option<String>,
}

/// `/add-item` body
#[derive(Debug, Serialize)]
pub struct AddItemArgs<'a> {
    pub text: &'a str,
}

/// `/toggle-item` and `/delete-item` body
#[derive(Debug, Serialize)]
pub struct ItemIdArgs<'a> {
    #[serde(rename = "itemId")]
    pub item_id: &'a ItemId,
}

#[cfg(test)]
pub(crate) fn make_item(id: &str, name: &str, checked: bool) -> Item {
    Item {
        id: ItemId::new(id),
        name: name.to_string(),
        checked,
        frequency: None,
        last_bought: None,
        days_since_last_bought: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_snapshot_keeps_server_category_order() {
        let json = r#"{
            "date": "2024-01-01",
            "categories": {
                "Produce": [{"id": "a", "name": "Apples", "checked": false,
                             "lastBought": null, "daysSinceLastBought": null, "frequency": "Weekly"}],
                "Dairy": [{"id": "b", "name": "Milk", "checked": true}],
                "Bakery": []
            },
            "totalItems": 2,
            "checkedItems": 1
        }"#;

        let snapshot: ListSnapshot = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = snapshot.categories.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Produce", "Dairy", "Bakery"]);
        assert_eq!(snapshot.total_items, 2);
        assert_eq!(snapshot.checked_items, 1);

        let (_, produce) = snapshot.categories.iter().next().unwrap();
        assert_eq!(produce[0].frequency.as_deref(), Some("Weekly"));
        assert_eq!(produce[0].last_bought, None);
    }

    #[test]
    fn test_item_id_accepts_numbers() {
        let item: Item = serde_json::from_str(r#"{"id": 42, "name": "Eggs"}"#).unwrap();
        assert_eq!(item.id, ItemId::new("42"));
        assert!(!item.checked);
    }

    #[test]
    fn test_add_response_accepts_names_and_objects() {
        let json = r#"{
            "success": true,
            "added": [{"name": "milk", "category": "Dairy", "lastBought": null}],
            "skipped": ["bread"]
        }"#;
        let response: AddResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.added, vec!["milk".to_string()]);
        assert_eq!(response.skipped, vec!["bread".to_string()]);
    }

    #[test]
    fn test_error_body_without_success_is_failure() {
        let response: CopyResponse =
            serde_json::from_str(r#"{"error": "No previous trips found"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("No previous trips found"));
    }

    #[test]
    fn test_item_id_args_use_camel_case() {
        let id = ItemId::new("abc");
        let body = serde_json::to_string(&ItemIdArgs { item_id: &id }).unwrap();
        assert_eq!(body, r#"{"itemId":"abc"}"#);
    }
}
