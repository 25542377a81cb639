use serde::Serialize;

/// Two-slot result history shown to the user as `R` and `P`.
///
/// Only the top-level loop holds a `&mut Memory`; handlers and the resolver
/// borrow it shared, so a symbolic read always sees the last completed result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Memory {
    last: f64,
    previous: f64,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> f64 {
        self.last
    }

    pub fn previous(&self) -> f64 {
        self.previous
    }

    /// Shifts `last` into `previous` and stores `value` as the new `last`.
    pub fn update(&mut self, value: f64) {
        *self = Self {
            last: value,
            previous: self.last,
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_shifts_last_into_previous() {
        let mut memory = Memory::new();
        assert_eq!((memory.last(), memory.previous()), (0.0, 0.0));

        memory.update(5.0);
        assert_eq!((memory.last(), memory.previous()), (5.0, 0.0));

        memory.update(12.0);
        assert_eq!((memory.last(), memory.previous()), (12.0, 5.0));
    }

    #[test]
    fn test_clear_resets_both_slots() {
        let mut memory = Memory::new();
        memory.update(3.0);
        memory.update(4.0);
        memory.clear();
        assert_eq!(memory, Memory::default());
    }

    #[test]
    fn test_snapshot_serializes_both_slots() {
        let mut memory = Memory::new();
        memory.update(1.5);
        let json = serde_json::to_value(memory).unwrap();
        assert_eq!(json, serde_json::json!({ "last": 1.5, "previous": 0.0 }));
    }
}
