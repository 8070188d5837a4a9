//! Record list service - the CRUD model shared by the three trackers
//!
//! A `RecordList` owns the in-memory copy of one tracker list and mirrors
//! every change to the store as a whole-list overwrite. Changes are
//! persisted first and only committed in memory once the write succeeded,
//! so the two copies never diverge.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{Activity, Categorized, DailyEntry, Expense, Record};
use crate::ports::{load_json, save_json, Store};

pub type DailyLog = RecordList<DailyEntry>;
pub type ExpenseLog = RecordList<Expense>;
pub type ActivityLog = RecordList<Activity>;

/// Sum of one group produced by [`RecordList::aggregate_by`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupTotal<K, V> {
    pub key: K,
    pub total: V,
}

/// Numeric value that can be summed over a list
///
/// Sums saturate at the type's bounds instead of overflowing.
pub trait Total: Copy + Default + PartialOrd {
    fn add_saturating(self, other: Self) -> Self;
}

impl Total for i64 {
    fn add_saturating(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl Total for Decimal {
    fn add_saturating(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

/// Ordered list of records persisted under `R::STORAGE_KEY`
pub struct RecordList<R: Record> {
    store: Arc<dyn Store>,
    records: Vec<R>,
}

impl<R: Record> RecordList<R> {
    /// Load the list from the store
    ///
    /// Records written before ids existed get one here; the list is then
    /// written back once so the ids stay stable.
    pub fn load(store: Arc<dyn Store>) -> Result<Self> {
        let mut records: Vec<R> = load_json(store.as_ref(), R::STORAGE_KEY)?.unwrap_or_default();

        let mut assigned = false;
        for record in records.iter_mut().filter(|r| r.id().is_nil()) {
            record.set_id(Uuid::new_v4());
            assigned = true;
        }
        if assigned {
            save_json(store.as_ref(), R::STORAGE_KEY, &records)?;
        }

        Ok(Self { store, records })
    }

    fn persist(&self, records: &[R]) -> Result<()> {
        save_json(self.store.as_ref(), R::STORAGE_KEY, records)
    }

    /// Persist `next` and make it the current list
    fn commit(&mut self, next: Vec<R>) -> Result<()> {
        self.persist(&next)?;
        self.records = next;
        Ok(())
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// Last record added (list order, not date order)
    pub fn latest(&self) -> Option<&R> {
        self.records.last()
    }

    /// Append a record with a freshly assigned id
    pub fn add(&mut self, mut record: R) -> Result<Uuid> {
        let id = Uuid::new_v4();
        record.set_id(id);

        let mut next = self.records.clone();
        next.push(record);
        self.commit(next)?;
        Ok(id)
    }

    /// Replace the record at `index`; out of bounds is a no-op returning false
    ///
    /// The replacement keeps the id of the record it replaces.
    pub fn update_at(&mut self, index: usize, mut record: R) -> Result<bool> {
        let Some(current) = self.records.get(index) else {
            return Ok(false);
        };
        record.set_id(current.id());

        let mut next = self.records.clone();
        next[index] = record;
        self.commit(next)?;
        Ok(true)
    }

    /// Replace the record with `id`; unknown ids are a no-op returning false
    pub fn update(&mut self, id: Uuid, record: R) -> Result<bool> {
        match self.position(id) {
            Some(index) => self.update_at(index, record),
            None => Ok(false),
        }
    }

    /// Remove the record at `index`, shifting later records down
    pub fn delete_at(&mut self, index: usize) -> Result<Option<R>> {
        if index >= self.records.len() {
            return Ok(None);
        }

        let mut next = self.records.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        Ok(Some(removed))
    }

    /// Remove the record with `id`
    pub fn delete(&mut self, id: Uuid) -> Result<Option<R>> {
        match self.position(id) {
            Some(index) => self.delete_at(index),
            None => Ok(None),
        }
    }

    /// Records matching `predicate`, in list order
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&R>
    where
        P: FnMut(&R) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Sum of `value_fn` over every record
    pub fn total<V, F>(&self, value_fn: F) -> V
    where
        V: Total,
        F: FnMut(&R) -> V,
    {
        self.records.iter().map(value_fn).fold(V::default(), V::add_saturating)
    }

    /// Sum of `value_fn` over the records matching `predicate`
    pub fn total_where<V, P, F>(&self, mut predicate: P, value_fn: F) -> V
    where
        V: Total,
        P: FnMut(&R) -> bool,
        F: FnMut(&R) -> V,
    {
        self.records
            .iter()
            .filter(|r| predicate(r))
            .map(value_fn)
            .fold(V::default(), V::add_saturating)
    }

    /// Group records by `key_fn` and sum `value_fn` per group
    ///
    /// Groups are sorted by descending total; ties keep the order in which
    /// the group first appeared. Groups summing to zero are left out.
    pub fn aggregate_by<K, V, FK, FV>(&self, mut key_fn: FK, mut value_fn: FV) -> Vec<GroupTotal<K, V>>
    where
        K: Eq + Hash + Clone,
        V: Total,
        FK: FnMut(&R) -> K,
        FV: FnMut(&R) -> V,
    {
        let mut groups: Vec<GroupTotal<K, V>> = Vec::new();
        let mut index: HashMap<K, usize> = HashMap::new();

        for record in &self.records {
            let key = key_fn(record);
            let value = value_fn(record);
            match index.get(&key) {
                Some(&i) => groups[i].total = groups[i].total.add_saturating(value),
                None => {
                    index.insert(key.clone(), groups.len());
                    groups.push(GroupTotal { key, total: value });
                }
            }
        }

        let zero = V::default();
        groups.retain(|g| g.total != zero);
        // Stable sort keeps first-appearance order for equal totals
        groups.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        groups
    }
}

impl<R: Categorized> RecordList<R> {
    /// Records in `category` (exact match on the stored value)
    pub fn by_category(&self, category: &str) -> Vec<&R> {
        self.filter(|r| r.category() == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::adapters::memory::MemoryStore;

    fn memory_store() -> Arc<dyn Store> {
        Arc::new(MemoryStore::new())
    }

    fn expense(category: &str, amount: &str) -> Expense {
        Expense::new("2024-01-01", category, amount, "")
    }

    #[test]
    fn test_add_persists_whole_list() {
        let store = memory_store();
        let mut list = ExpenseLog::load(Arc::clone(&store)).unwrap();

        let id = list.add(expense("Food", "12.50")).unwrap();
        assert!(!id.is_nil());
        assert_eq!(list.len(), 1);

        let reloaded = ExpenseLog::load(store).unwrap();
        assert_eq!(reloaded.records(), list.records());
        assert_eq!(reloaded.get(id).unwrap().amount, "12.50");
    }

    #[test]
    fn test_update_out_of_bounds_is_noop() {
        let mut list = ExpenseLog::load(memory_store()).unwrap();
        list.add(expense("Food", "1")).unwrap();

        assert!(!list.update_at(5, expense("Travel", "2")).unwrap());
        assert!(!list.update(Uuid::new_v4(), expense("Travel", "2")).unwrap());
        assert_eq!(list.records()[0].category, "Food");
    }

    #[test]
    fn test_update_keeps_id() {
        let mut list = ExpenseLog::load(memory_store()).unwrap();
        let id = list.add(expense("Food", "1")).unwrap();

        assert!(list.update(id, expense("Travel", "2")).unwrap());
        let updated = list.get(id).unwrap();
        assert_eq!(updated.category, "Travel");
        assert_eq!(updated.id, id);
    }

    #[test]
    fn test_delete_by_id_with_duplicate_records() {
        let mut list = ExpenseLog::load(memory_store()).unwrap();
        let first = list.add(expense("Food", "5")).unwrap();
        let second = list.add(expense("Food", "5")).unwrap();

        let removed = list.delete(second).unwrap().unwrap();
        assert_eq!(removed.id, second);
        assert_eq!(list.len(), 1);
        assert_eq!(list.records()[0].id, first);

        assert!(list.delete(second).unwrap().is_none());
    }

    #[test]
    fn test_aggregate_sorted_descending_without_zero_groups() {
        let mut list = ExpenseLog::load(memory_store()).unwrap();
        list.add(expense("Travel", "3")).unwrap();
        list.add(expense("Food", "10")).unwrap();
        list.add(expense("Other", "0")).unwrap();
        list.add(expense("Shopping", "3")).unwrap();

        let totals = list.aggregate_by(|e| e.category.clone(), |e| e.amount_value());
        let keys: Vec<_> = totals.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["Food", "Travel", "Shopping"]);
        assert_eq!(totals[0].total, Decimal::new(10, 0));
    }

    #[test]
    fn test_failed_write_leaves_list_unchanged() {
        let store = Arc::new(MemoryStore::new());
        let mut list = ExpenseLog::load(store.clone()).unwrap();
        let id = list.add(expense("Food", "1")).unwrap();

        store.set_read_only(true);
        assert!(list.add(expense("Food", "2")).is_err());
        assert!(list.delete(id).is_err());
        assert_eq!(list.len(), 1);
        assert_eq!(list.records()[0].id, id);
    }

    #[test]
    fn test_legacy_records_get_stable_ids() {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::with_values([(
            "activities",
            r#"[{"date":"2024-02-01","name":"Run","category":"Exercise","duration":"30","notes":""}]"#,
        )]));

        let first = ActivityLog::load(Arc::clone(&store)).unwrap();
        let id = first.records()[0].id;
        assert!(!id.is_nil());

        let second = ActivityLog::load(store).unwrap();
        assert_eq!(second.records()[0].id, id);
    }

    #[test]
    fn test_total_where_and_by_category() {
        let mut list = ActivityLog::load(memory_store()).unwrap();
        list.add(Activity::new("2024-02-01", "Run", "Exercise", "30", "")).unwrap();
        list.add(Activity::new("2024-02-01", "Code", "Work", "120", "")).unwrap();
        list.add(Activity::new("2024-02-02", "Swim", "Exercise", "45", "")).unwrap();

        assert_eq!(list.by_category("Exercise").len(), 2);
        let exercise: i64 = list.total_where(|a| a.category == "Exercise", |a| a.duration_minutes());
        assert_eq!(exercise, 75);
        assert_eq!(list.total(|a| a.duration_minutes()), 195);
    }

    #[test]
    fn test_huge_amounts_saturate() {
        let mut list = ExpenseLog::load(memory_store()).unwrap();
        list.add(expense("Food", "79228162514264337593543950335")).unwrap();
        list.add(expense("Food", "1")).unwrap();
        list.add(expense("Travel", "2")).unwrap();

        assert_eq!(list.total(|e| e.amount_value()), Decimal::MAX);
        let food: Decimal = list.total_where(|e| e.category == "Food", |e| e.amount_value());
        assert_eq!(food, Decimal::MAX);

        let totals = list.aggregate_by(|e| e.category.clone(), |e| e.amount_value());
        assert_eq!(totals[0].key, "Food");
        assert_eq!(totals[0].total, Decimal::MAX);
        assert_eq!(totals[1].total, Decimal::new(2, 0));
    }

    #[test]
    fn test_huge_durations_saturate() {
        let mut list = ActivityLog::load(memory_store()).unwrap();
        list.add(Activity::new("2024-02-01", "Run", "Exercise", "9223372036854775807", "")).unwrap();
        list.add(Activity::new("2024-02-01", "Swim", "Exercise", "1", "")).unwrap();

        assert_eq!(list.total(|a| a.duration_minutes()), i64::MAX);
        let totals = list.aggregate_by(|a| a.category.clone(), |a| a.duration_minutes());
        assert_eq!(totals[0].total, i64::MAX);
    }
}
