use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ChecklistError;

pub const DAYS_PER_WEEK: usize = 7;

/// A single checklist entry: a meal or a workout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub is_complete: bool,
    // Workouts carry a set/rep description, meals don't.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            is_complete: false,
            sets: None,
        }
    }

    pub fn workout(name: impl Into<String>, sets: impl Into<String>) -> Self {
        Self {
            sets: Some(sets.into()),
            ..Self::new(name)
        }
    }
}

/// Wire form of a [`Group`]: items in display order.
#[derive(Serialize, Deserialize)]
struct GroupRecord {
    id: Uuid,
    label: String,
    items: Vec<Item>,
}

/// One day of a checklist week.
///
/// Items are stored by id; `order` is the display order and the only thing
/// index-based addressing reads. Every structural change touches both in a
/// single `&mut self` call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "GroupRecord", into = "GroupRecord")]
pub struct Group {
    pub id: Uuid,
    pub label: String,
    order: Vec<Uuid>,
    items: HashMap<Uuid, Item>,
}

impl Group {
    pub fn new(label: impl Into<String>, items: Vec<Item>) -> Self {
        let mut group = Self {
            id: Uuid::new_v4(),
            label: label.into(),
            order: Vec::with_capacity(items.len()),
            items: HashMap::with_capacity(items.len()),
        };
        for item in items {
            group.push(item);
        }
        group
    }

    /// Appends an item. A clashing id is replaced with a fresh one.
    pub fn push(&mut self, mut item: Item) {
        if self.items.contains_key(&item.id) {
            item.id = Uuid::new_v4();
        }
        self.order.push(item.id);
        self.items.insert(item.id, item);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.order.get(index).and_then(|id| self.items.get(id))
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut Item> {
        let id = self.order.get(index)?;
        self.items.get_mut(id)
    }

    pub fn is_complete(&self) -> bool {
        self.items().all(|item| item.is_complete)
    }

    pub fn completed_count(&self) -> usize {
        self.items().filter(|item| item.is_complete).count()
    }

    /// Marks every item incomplete. Ids, names and order are kept.
    pub fn reset(&mut self) {
        for item in self.items.values_mut() {
            item.is_complete = false;
        }
    }

    /// Removes the item at `index`; later items move up one position.
    pub fn remove(&mut self, index: usize) -> Option<Item> {
        if index >= self.order.len() {
            return None;
        }
        let id = self.order.remove(index);
        self.items.remove(&id)
    }
}

impl TryFrom<GroupRecord> for Group {
    type Error = ChecklistError;

    fn try_from(record: GroupRecord) -> Result<Self, Self::Error> {
        let mut order = Vec::with_capacity(record.items.len());
        let mut items = HashMap::with_capacity(record.items.len());
        for item in record.items {
            if items.contains_key(&item.id) {
                return Err(ChecklistError::DuplicateItem(item.id));
            }
            order.push(item.id);
            items.insert(item.id, item);
        }
        Ok(Self {
            id: record.id,
            label: record.label,
            order,
            items,
        })
    }
}

impl From<Group> for GroupRecord {
    fn from(mut group: Group) -> Self {
        let items = group
            .order
            .iter()
            .filter_map(|id| group.items.remove(id))
            .collect();
        Self {
            id: group.id,
            label: group.label,
            items,
        }
    }
}

/// A checklist week: always exactly seven days.
///
/// Encoded as a plain JSON array of days. Decoding anything other than
/// seven days fails, so a truncated blob falls back to the default week.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "Vec<Group>", into = "Vec<Group>")]
pub struct Period {
    groups: Vec<Group>,
}

impl Period {
    pub fn new(groups: Vec<Group>) -> Result<Self, ChecklistError> {
        if groups.len() != DAYS_PER_WEEK {
            return Err(ChecklistError::WrongGroupCount(groups.len()));
        }
        Ok(Self { groups })
    }

    pub fn from_days(days: [Group; DAYS_PER_WEEK]) -> Self {
        Self {
            groups: days.into(),
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Result<&Group, ChecklistError> {
        self.groups
            .get(index)
            .ok_or(ChecklistError::IndexOutOfRange { group: index, item: None })
    }

    pub fn group_mut(&mut self, index: usize) -> Result<&mut Group, ChecklistError> {
        self.groups
            .get_mut(index)
            .ok_or(ChecklistError::IndexOutOfRange { group: index, item: None })
    }

    pub fn item_mut(&mut self, group: usize, item: usize) -> Result<&mut Item, ChecklistError> {
        self.groups
            .get_mut(group)
            .and_then(|g| g.item_mut(item))
            .ok_or(ChecklistError::IndexOutOfRange { group, item: Some(item) })
    }

    /// Flips one item and returns its new flag.
    pub fn toggle(&mut self, group: usize, item: usize) -> Result<bool, ChecklistError> {
        let entry = self.item_mut(group, item)?;
        entry.is_complete = !entry.is_complete;
        Ok(entry.is_complete)
    }

    pub fn is_complete(&self) -> bool {
        self.groups.iter().all(Group::is_complete)
    }

    pub fn reset(&mut self) {
        for group in &mut self.groups {
            group.reset();
        }
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    pub fn completed_count(&self) -> usize {
        self.groups.iter().map(Group::completed_count).sum()
    }
}

impl TryFrom<Vec<Group>> for Period {
    type Error = ChecklistError;

    fn try_from(groups: Vec<Group>) -> Result<Self, Self::Error> {
        Period::new(groups)
    }
}

impl From<Period> for Vec<Group> {
    fn from(period: Period) -> Self {
        period.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week() -> Period {
        let days = std::array::from_fn(|i| {
            Group::new(format!("Day {}", i + 1), vec![Item::new("a"), Item::new("b")])
        });
        Period::from_days(days)
    }

    #[test]
    fn test_remove_shifts_following_items() {
        let mut group = Group::new("Monday", vec![Item::new("a"), Item::new("b"), Item::new("c")]);
        let removed = group.remove(0).unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(group.len(), 2);
        assert_eq!(group.item(0).unwrap().name, "b");
        assert_eq!(group.item(1).unwrap().name, "c");
        assert!(group.remove(5).is_none());
    }

    #[test]
    fn test_reset_group_is_idempotent() {
        let mut period = week();
        period.toggle(2, 1).unwrap();
        let group = period.group_mut(2).unwrap();
        group.reset();
        let once = group.clone();
        group.reset();
        assert_eq!(*group, once);
        assert_eq!(group.completed_count(), 0);
        assert_eq!(group.item(1).unwrap().name, "b");
    }

    #[test]
    fn test_empty_group_counts_as_complete() {
        let group = Group::new("Rest", vec![]);
        assert!(group.is_complete());
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut period = week();
        assert_eq!(
            period.toggle(7, 0),
            Err(ChecklistError::IndexOutOfRange { group: 7, item: Some(0) })
        );
        assert_eq!(
            period.toggle(0, 2),
            Err(ChecklistError::IndexOutOfRange { group: 0, item: Some(2) })
        );
    }

    #[test]
    fn test_period_round_trip_keeps_order_and_flags() {
        let mut period = week();
        period.toggle(0, 1).unwrap();
        period.toggle(6, 0).unwrap();

        let json = serde_json::to_string(&period).unwrap();
        let decoded: Period = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, period);
        let names: Vec<_> = decoded.groups()[0].items().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(decoded.groups()[0].item(1).unwrap().is_complete);
    }

    #[test]
    fn test_decode_rejects_short_week() {
        let period = week();
        let mut groups: Vec<Group> = period.into();
        groups.pop();
        let json = serde_json::to_string(&groups).unwrap();
        assert!(serde_json::from_str::<Period>(&json).is_err());
    }

    #[test]
    fn test_decode_rejects_duplicate_item_ids() {
        let id = Uuid::new_v4();
        let json = format!(
            r#"{{"id":"{}","label":"Monday","items":[
                {{"id":"{id}","name":"a","is_complete":false}},
                {{"id":"{id}","name":"b","is_complete":false}}]}}"#,
            Uuid::new_v4()
        );
        assert!(serde_json::from_str::<Group>(&json).is_err());
    }
}
