//! Display Formatting
//!
//! Builds what the list and history panels show from the snapshots. The
//! snapshots are never modified; sections and counts come straight from the
//! server.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{HistorySnapshot, Item, ItemId, ListSnapshot, Trip};

/// Checked item names shown per trip before collapsing into "+K more"
pub const TRIP_SUMMARY_NAMES: usize = 3;

const CATEGORY_EMOJIS: &[(&str, &str)] = &[
    ("Produce", "🍎"),
    ("Dairy", "🥛"),
    ("Meat & Seafood", "🥩"),
    ("Bakery", "🍞"),
    ("Pantry", "🥫"),
    ("Frozen", "🧊"),
    ("Household", "🧴"),
    ("Snacks", "🍫"),
    ("Beverages", "🥤"),
    ("Other", "📦"),
];

pub fn category_emoji(category: &str) -> &'static str {
    CATEGORY_EMOJIS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, emoji)| *emoji)
        .unwrap_or("📦")
}

/// "Last bought" wins over the frequency label; either may be absent
pub fn item_metadata(item: &Item) -> Option<String> {
    let last_bought = item.last_bought.as_deref().filter(|s| !s.is_empty());
    match (last_bought, item.days_since_last_bought) {
        (Some(_), Some(days)) => Some(format!("Last bought: {} days ago", days)),
        _ => item.frequency.clone().filter(|f| !f.is_empty()),
    }
}

// ========================
// List
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRowView {
    pub id: ItemId,
    /// Plain text; rendered as a text node, never parsed as markup
    pub name: String,
    pub checked: bool,
    pub metadata: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySectionView {
    pub name: String,
    pub emoji: &'static str,
    pub items: Vec<ItemRowView>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// Placeholder shown; list container and complete-trip control hidden
    Empty,
    Sections(Vec<CategorySectionView>),
}

impl ListView {
    pub fn is_empty(&self) -> bool {
        matches!(self, ListView::Empty)
    }
}

pub fn list_view(snapshot: &ListSnapshot) -> ListView {
    if snapshot.is_empty() {
        return ListView::Empty;
    }

    let sections = snapshot
        .categories
        .iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(name, items)| CategorySectionView {
            name: name.to_string(),
            emoji: category_emoji(name),
            items: items
                .iter()
                .map(|item| ItemRowView {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    checked: item.checked,
                    metadata: item_metadata(item),
                })
                .collect(),
        })
        .collect();
    ListView::Sections(sections)
}

// ========================
// History
// ========================

pub fn days_ago_label(days_ago: i64) -> String {
    match days_ago {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        n => format!("{} days ago", n),
    }
}

/// Calendar date of an ISO-8601 timestamp as M/D/YYYY; unparseable input is shown as-is
pub fn format_trip_date(completed_at: &str) -> String {
    let date = chrono::DateTime::parse_from_rfc3339(completed_at)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(completed_at, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(completed_at, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => completed_at.to_string(),
    }
}

/// First few checked names, then "+K more"; unchecked items never appear
pub fn trip_summary(trip: &Trip) -> String {
    let checked: Vec<&str> = trip
        .items
        .iter()
        .filter(|item| item.checked)
        .map(|item| item.name.as_str())
        .collect();

    if checked.is_empty() {
        return "No items checked off".to_string();
    }

    let mut parts: Vec<String> = checked
        .iter()
        .take(TRIP_SUMMARY_NAMES)
        .map(|name| name.to_string())
        .collect();
    if checked.len() > TRIP_SUMMARY_NAMES {
        parts.push(format!("+{} more", checked.len() - TRIP_SUMMARY_NAMES));
    }
    parts.join(", ")
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripView {
    pub date: String,
    pub relative: String,
    pub stats: String,
    pub summary: String,
}

pub fn trip_view(trip: &Trip) -> TripView {
    TripView {
        date: format_trip_date(&trip.completed_at),
        relative: days_ago_label(trip.days_ago),
        stats: format!("{}/{} items", trip.checked_items, trip.total_items),
        summary: trip_summary(trip),
    }
}

/// `None` hides the history section entirely
pub fn history_view(snapshot: &HistorySnapshot) -> Option<Vec<TripView>> {
    if snapshot.is_empty() {
        return None;
    }
    Some(snapshot.trips.iter().map(trip_view).collect())
}

// ========================
// Confirmation prompts
// ========================

/// `None` when there is nothing to clear
pub fn clear_all_prompt(snapshot: &ListSnapshot) -> Option<String> {
    if snapshot.is_empty() {
        return None;
    }
    Some(format!("Delete all {} items?", snapshot.total_items))
}

/// `None` when there is nothing to complete
pub fn complete_trip_prompt(snapshot: &ListSnapshot) -> Option<String> {
    if snapshot.is_empty() {
        return None;
    }
    Some(if snapshot.checked_items > 0 {
        format!(
            "Complete trip with {} of {} items checked off?",
            snapshot.checked_items, snapshot.total_items
        )
    } else {
        "Complete trip? (No items are checked off yet)".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{make_item, Categories};

    fn snapshot(categories: Vec<(&str, Vec<Item>)>, total: u32, checked: u32) -> ListSnapshot {
        ListSnapshot {
            date: None,
            categories: Categories::new(
                categories
                    .into_iter()
                    .map(|(name, items)| (name.to_string(), items))
                    .collect(),
            ),
            total_items: total,
            checked_items: checked,
        }
    }

    fn trip(days_ago: i64, items: Vec<Item>) -> Trip {
        Trip {
            completed_at: "2024-03-05T18:30:00.123456".to_string(),
            days_ago,
            total_items: items.len() as u32,
            checked_items: items.iter().filter(|i| i.checked).count() as u32,
            items,
        }
    }

    #[test]
    fn test_empty_snapshot_renders_placeholder() {
        let view = list_view(&ListSnapshot::default());
        assert!(view.is_empty());
    }

    #[test]
    fn test_empty_categories_are_omitted() {
        let snap = snapshot(
            vec![
                ("Produce", vec![make_item("a", "Apples", false)]),
                ("Dairy", vec![]),
            ],
            1,
            0,
        );

        let ListView::Sections(sections) = list_view(&snap) else {
            panic!("expected sections");
        };
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "Produce");
        assert_eq!(sections[0].emoji, "🍎");
        assert_eq!(sections[0].items.len(), 1);
        assert_eq!(sections[0].items[0].id, ItemId::new("a"));
    }

    #[test]
    fn test_sections_follow_server_order() {
        let snap = snapshot(
            vec![
                ("Snacks", vec![make_item("s", "Chips", false)]),
                ("Bakery", vec![make_item("b", "Bread", true)]),
            ],
            2,
            1,
        );
        let ListView::Sections(sections) = list_view(&snap) else {
            panic!("expected sections");
        };
        let names: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Snacks", "Bakery"]);
        assert!(sections[1].items[0].checked);
    }

    #[test]
    fn test_metadata_prefers_last_bought() {
        let mut item = make_item("a", "Milk", false);
        item.last_bought = Some("2024-01-01".into());
        item.days_since_last_bought = Some(5);
        item.frequency = Some("weekly".into());
        assert_eq!(item_metadata(&item).as_deref(), Some("Last bought: 5 days ago"));

        let mut item = make_item("b", "Eggs", false);
        item.frequency = Some("weekly".into());
        assert_eq!(item_metadata(&item).as_deref(), Some("weekly"));

        // lastBought alone is not enough
        item.last_bought = Some("2024-01-01".into());
        assert_eq!(item_metadata(&item).as_deref(), Some("weekly"));

        assert_eq!(item_metadata(&make_item("c", "Salt", false)), None);
    }

    #[test]
    fn test_empty_last_bought_falls_back_to_frequency() {
        let mut item = make_item("a", "Rice", false);
        item.last_bought = Some(String::new());
        item.days_since_last_bought = Some(3);
        item.frequency = Some("monthly".into());
        assert_eq!(item_metadata(&item).as_deref(), Some("monthly"));
    }

    #[test]
    fn test_markup_in_names_stays_text() {
        let snap = snapshot(
            vec![("Other", vec![make_item("x", "<script>alert(1)</script>", false)])],
            1,
            0,
        );
        let ListView::Sections(sections) = list_view(&snap) else {
            panic!("expected sections");
        };
        assert_eq!(sections[0].items[0].name, "<script>alert(1)</script>");
    }

    #[test]
    fn test_unknown_category_gets_box() {
        assert_eq!(category_emoji("Garden"), "📦");
        assert_eq!(category_emoji("Meat & Seafood"), "🥩");
    }

    #[test]
    fn test_days_ago_labels() {
        assert_eq!(days_ago_label(0), "Today");
        assert_eq!(days_ago_label(1), "Yesterday");
        assert_eq!(days_ago_label(5), "5 days ago");
    }

    #[test]
    fn test_trip_summary_truncates_checked_names() {
        let items = vec![
            make_item("1", "Milk", true),
            make_item("2", "Eggs", true),
            make_item("3", "Salt", false),
            make_item("4", "Bread", true),
            make_item("5", "Apples", true),
            make_item("6", "Tea", true),
        ];
        assert_eq!(trip_summary(&trip(2, items)), "Milk, Eggs, Bread, +2 more");
    }

    #[test]
    fn test_trip_summary_without_checked_items() {
        let items = vec![make_item("1", "Milk", false)];
        assert_eq!(trip_summary(&trip(0, items)), "No items checked off");
    }

    #[test]
    fn test_trip_view() {
        let items = vec![make_item("1", "Milk", true), make_item("2", "Eggs", false)];
        let view = trip_view(&trip(1, items));
        assert_eq!(
            view,
            TripView {
                date: "3/5/2024".to_string(),
                relative: "Yesterday".to_string(),
                stats: "1/2 items".to_string(),
                summary: "Milk".to_string(),
            }
        );
    }

    #[test]
    fn test_trip_dates() {
        assert_eq!(format_trip_date("2024-12-24T08:00:00Z"), "12/24/2024");
        assert_eq!(format_trip_date("2024-01-09"), "1/9/2024");
        assert_eq!(format_trip_date("last tuesday"), "last tuesday");
    }

    #[test]
    fn test_history_hidden_without_trips() {
        assert_eq!(history_view(&HistorySnapshot::default()), None);

        let history = HistorySnapshot {
            total_trips: 1,
            trips: vec![trip(0, vec![])],
        };
        let trips = history_view(&history).unwrap();
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].relative, "Today");
    }

    #[test]
    fn test_prompts() {
        let empty = ListSnapshot::default();
        assert_eq!(clear_all_prompt(&empty), None);
        assert_eq!(complete_trip_prompt(&empty), None);

        let none_checked = snapshot(vec![], 3, 0);
        assert_eq!(clear_all_prompt(&none_checked).as_deref(), Some("Delete all 3 items?"));
        assert_eq!(
            complete_trip_prompt(&none_checked).as_deref(),
            Some("Complete trip? (No items are checked off yet)")
        );

        let some_checked = snapshot(vec![], 3, 2);
        assert_eq!(
            complete_trip_prompt(&some_checked).as_deref(),
            Some("Complete trip with 2 of 3 items checked off?")
        );
    }
}
