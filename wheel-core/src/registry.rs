use crate::config::WheelConfig;
use crate::error::{ValidationCode, WheelError};

/// Active and eliminated entries, both in insertion order.
///
/// Names are plain values. Uniqueness is case-insensitive and only enforced
/// among active entries; an eliminated name may be added back.
#[derive(Clone, Debug)]
pub struct EntryRegistry {
    active: Vec<String>,
    eliminated: Vec<String>,
    capacity: usize,
    max_name_len: usize,
}

impl EntryRegistry {
    pub fn new(config: &WheelConfig) -> Self {
        Self {
            active: Vec::with_capacity(config.capacity),
            eliminated: Vec::new(),
            capacity: config.capacity,
            max_name_len: config.max_name_len,
        }
    }

    pub fn active(&self) -> &[String] {
        &self.active
    }

    pub fn eliminated(&self) -> &[String] {
        &self.eliminated
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.active.len() >= self.capacity
    }

    /// Checks `name` against the add rules and returns the trimmed form.
    pub fn check(&self, name: &str) -> Result<String, WheelError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(WheelError::validation(ValidationCode::EmptyName));
        }
        if trimmed.chars().count() > self.max_name_len {
            return Err(WheelError::validation(ValidationCode::NameTooLong));
        }
        if self.is_full() {
            return Err(WheelError::validation(ValidationCode::CapacityReached));
        }
        let folded = trimmed.to_lowercase();
        if self
            .active
            .iter()
            .any(|entry| entry.to_lowercase() == folded)
        {
            return Err(WheelError::validation(ValidationCode::DuplicateName));
        }
        Ok(trimmed.to_string())
    }

    /// Appends the trimmed name and returns its position.
    pub fn add(&mut self, name: &str) -> Result<usize, WheelError> {
        let name = self.check(name)?;
        self.active.push(name);
        Ok(self.active.len() - 1)
    }

    pub fn remove(&mut self, index: usize) -> Result<String, WheelError> {
        if index >= self.active.len() {
            return Err(WheelError::IndexOutOfRange {
                index,
                len: self.active.len(),
            });
        }
        Ok(self.active.remove(index))
    }

    /// Moves `name` from active to the end of eliminated. Returns false if no
    /// active entry has exactly that name.
    pub(crate) fn eliminate(&mut self, name: &str) -> bool {
        match self.active.iter().position(|entry| entry == name) {
            Some(index) => {
                let entry = self.active.remove(index);
                self.eliminated.push(entry);
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.active.clear();
        self.eliminated.clear();
    }

    /// Replaces both sequences. Active names go through `add`, so a snapshot
    /// that breaks the rules is rejected and the registry is left untouched.
    pub(crate) fn restore(
        &mut self,
        active: &[String],
        eliminated: &[String],
    ) -> Result<(), WheelError> {
        let mut staged = Self {
            active: Vec::with_capacity(self.capacity),
            eliminated: eliminated.to_vec(),
            capacity: self.capacity,
            max_name_len: self.max_name_len,
        };
        for name in active {
            staged.add(name)?;
        }
        *self = staged;
        Ok(())
    }
}
