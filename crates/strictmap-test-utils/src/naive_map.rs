// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::test_entry::TestEntry;
use strictmap::errors::{KeyAlreadyExists, KeyDoesNotExist, PairKey};

/// A naive, inefficient composite-key map that acts as an oracle for
/// property-based tests.
///
/// Entries are stored in a flat vector and every operation is a linear scan.
/// Errors are returned in their owned forms, so that they can be compared
/// against `into_owned` errors from the map under test.
#[derive(Debug, Default)]
pub struct NaiveMap {
    entries: Vec<TestEntry>,
}

impl NaiveMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(
        &self,
        key1: u8,
        key2: char,
    ) -> Result<usize, KeyDoesNotExist<PairKey<u8, char>>> {
        if !self.contains_key1(key1) {
            return Err(KeyDoesNotExist::__internal_new(PairKey::Key1(key1)));
        }
        self.entries
            .iter()
            .position(|e| e.key1 == key1 && e.key2 == key2)
            .ok_or_else(|| {
                KeyDoesNotExist::__internal_new(PairKey::Key2 { key1, key2 })
            })
    }

    pub fn put(
        &mut self,
        entry: TestEntry,
    ) -> Result<(), KeyAlreadyExists<PairKey<u8, char>, String>> {
        if let Some(existing) = self
            .entries
            .iter()
            .find(|e| e.key1 == entry.key1 && e.key2 == entry.key2)
        {
            return Err(KeyAlreadyExists::__internal_new(
                PairKey::Key2 { key1: entry.key1, key2: entry.key2 },
                entry.value,
                existing.value.clone(),
            ));
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn get(
        &self,
        key1: u8,
        key2: char,
    ) -> Result<&String, KeyDoesNotExist<PairKey<u8, char>>> {
        let index = self.position(key1, key2)?;
        Ok(&self.entries[index].value)
    }

    pub fn replace(
        &mut self,
        key1: u8,
        key2: char,
        value: String,
    ) -> Result<String, KeyDoesNotExist<PairKey<u8, char>>> {
        let index = self.position(key1, key2)?;
        Ok(std::mem::replace(&mut self.entries[index].value, value))
    }

    pub fn remove(
        &mut self,
        key1: u8,
        key2: char,
    ) -> Result<String, KeyDoesNotExist<PairKey<u8, char>>> {
        let index = self.position(key1, key2)?;
        Ok(self.entries.remove(index).value)
    }

    /// Removes all entries under `key1`, returned sorted by `key2`.
    pub fn remove_key1(
        &mut self,
        key1: u8,
    ) -> Result<Vec<(char, String)>, KeyDoesNotExist<u8>> {
        if !self.contains_key1(key1) {
            return Err(KeyDoesNotExist::__internal_new(key1));
        }
        let mut removed = Vec::new();
        self.entries.retain(|e| {
            if e.key1 == key1 {
                removed.push((e.key2, e.value.clone()));
                false
            } else {
                true
            }
        });
        removed.sort();
        Ok(removed)
    }

    pub fn len_key1(&self, key1: u8) -> Result<usize, KeyDoesNotExist<u8>> {
        match self.entries.iter().filter(|e| e.key1 == key1).count() {
            0 => Err(KeyDoesNotExist::__internal_new(key1)),
            n => Ok(n),
        }
    }

    pub fn contains_key1(&self, key1: u8) -> bool {
        self.entries.iter().any(|e| e.key1 == key1)
    }

    pub fn contains_key2(&self, key2: char) -> bool {
        self.entries.iter().any(|e| e.key2 == key2)
    }

    pub fn contains_value(&self, value: &str) -> bool {
        self.entries.iter().any(|e| e.value == value)
    }

    /// Returns all entries, sorted.
    pub fn sorted_entries(&self) -> Vec<TestEntry> {
        let mut entries = self.entries.clone();
        entries.sort();
        entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// The single-key counterpart to [`NaiveMap`].
#[derive(Debug, Default)]
pub struct NaiveCheckedMap {
    entries: Vec<(u8, String)>,
}

impl NaiveCheckedMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: u8) -> Result<usize, KeyDoesNotExist<u8>> {
        self.entries
            .iter()
            .position(|(k, _)| *k == key)
            .ok_or_else(|| KeyDoesNotExist::__internal_new(key))
    }

    pub fn put(
        &mut self,
        key: u8,
        value: String,
    ) -> Result<(), KeyAlreadyExists<u8, String>> {
        if let Ok(index) = self.position(key) {
            return Err(KeyAlreadyExists::__internal_new(
                key,
                value,
                self.entries[index].1.clone(),
            ));
        }
        self.entries.push((key, value));
        Ok(())
    }

    pub fn get(&self, key: u8) -> Result<&String, KeyDoesNotExist<u8>> {
        let index = self.position(key)?;
        Ok(&self.entries[index].1)
    }

    pub fn replace(
        &mut self,
        key: u8,
        value: String,
    ) -> Result<String, KeyDoesNotExist<u8>> {
        let index = self.position(key)?;
        Ok(std::mem::replace(&mut self.entries[index].1, value))
    }

    pub fn remove(&mut self, key: u8) -> Result<String, KeyDoesNotExist<u8>> {
        let index = self.position(key)?;
        Ok(self.entries.remove(index).1)
    }

    pub fn contains_key(&self, key: u8) -> bool {
        self.position(key).is_ok()
    }

    /// Returns all entries, sorted by key.
    pub fn sorted_entries(&self) -> Vec<(u8, String)> {
        let mut entries = self.entries.clone();
        entries.sort();
        entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
