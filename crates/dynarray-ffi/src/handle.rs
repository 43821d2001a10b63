//! Opaque `u64` array handles for C callers.
//!
//! A handle packs a slot index (high half) with that slot's generation
//! (low half). Destroying an array bumps its slot's generation, so every
//! copy of the old handle stops resolving. Generations begin at
//! [`FIRST_GENERATION`]; a valid handle therefore never equals
//! [`NULL_HANDLE`].

/// The handle value that never refers to an array.
pub const NULL_HANDLE: u64 = 0;

const FIRST_GENERATION: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Key {
    slot: u32,
    generation: u32,
}

impl Key {
    fn pack(self) -> u64 {
        (u64::from(self.slot) << 32) | u64::from(self.generation)
    }

    fn unpack(handle: u64) -> Self {
        Self {
            slot: (handle >> 32) as u32,
            generation: handle as u32,
        }
    }
}

struct Entry<T> {
    generation: u32,
    value: Option<T>,
}

/// Owns every live array and hands out generation-checked handles.
///
/// Emptied slots go on a free list and are reused with a bumped
/// generation. A slot whose generation would wrap to 0 is retired for good.
pub(crate) struct HandleTable<T> {
    entries: Vec<Entry<T>>,
    vacant: Vec<u32>,
}

impl<T> HandleTable<T> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            vacant: Vec::new(),
        }
    }

    /// Take ownership of `value` and return its handle.
    pub fn insert(&mut self, value: T) -> u64 {
        let slot = match self.vacant.pop() {
            Some(slot) => slot,
            None => {
                self.entries.push(Entry {
                    generation: FIRST_GENERATION,
                    value: None,
                });
                (self.entries.len() - 1) as u32
            }
        };
        let entry = &mut self.entries[slot as usize];
        entry.value = Some(value);
        Key {
            slot,
            generation: entry.generation,
        }
        .pack()
    }

    /// Index of the entry `handle` names, if its generation is current.
    fn resolve(&self, handle: u64) -> Option<usize> {
        let key = Key::unpack(handle);
        let index = key.slot as usize;
        match self.entries.get(index) {
            Some(entry) if entry.generation == key.generation => Some(index),
            _ => None,
        }
    }

    pub fn get(&self, handle: u64) -> Option<&T> {
        let index = self.resolve(handle)?;
        self.entries[index].value.as_ref()
    }

    pub fn get_mut(&mut self, handle: u64) -> Option<&mut T> {
        let index = self.resolve(handle)?;
        self.entries[index].value.as_mut()
    }

    /// Give back ownership of the array behind `handle` and invalidate it.
    ///
    /// `None` for null, stale, or unknown handles.
    pub fn remove(&mut self, handle: u64) -> Option<T> {
        let index = self.resolve(handle)?;
        let entry = &mut self.entries[index];
        let value = entry.value.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        if entry.generation != 0 {
            self.vacant.push(index as u32);
        }
        Some(value)
    }

    #[cfg(test)]
    fn live(&self) -> usize {
        self.entries.iter().filter(|e| e.value.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_never_null() {
        let mut table = HandleTable::new();
        let h = table.insert(7i32);
        assert_ne!(h, NULL_HANDLE);
        assert_eq!(table.get(NULL_HANDLE), None);
        assert_eq!(table.get(h), Some(&7));
    }

    #[test]
    fn get_mut_modifies_value() {
        let mut table = HandleTable::new();
        let h = table.insert(10i32);
        *table.get_mut(h).unwrap() = 20;
        assert_eq!(table.get(h), Some(&20));
    }

    #[test]
    fn removed_handle_is_stale() {
        let mut table = HandleTable::new();
        let h = table.insert(1i32);
        assert_eq!(table.remove(h), Some(1));
        assert_eq!(table.get(h), None);
        assert_eq!(table.get_mut(h), None);
        assert_eq!(table.remove(h), None);
        assert_eq!(table.live(), 0);
    }

    #[test]
    fn reused_slot_rejects_old_handle() {
        let mut table = HandleTable::new();
        let old = table.insert(1i32);
        table.remove(old);
        let new = table.insert(2i32);
        let (a, b) = (Key::unpack(old), Key::unpack(new));
        assert_eq!(a.slot, b.slot);
        assert_eq!(b.generation, a.generation + 1);
        assert_eq!(table.get(old), None);
        assert_eq!(table.get(new), Some(&2));
        assert_eq!(table.live(), 1);
    }

    #[test]
    fn wrapped_generation_retires_slot() {
        let mut table = HandleTable::new();
        let h = table.insert(1i32);
        table.remove(h);
        table.entries[0].generation = u32::MAX;

        let h2 = table.insert(2i32);
        assert_eq!(
            Key::unpack(h2),
            Key {
                slot: 0,
                generation: u32::MAX
            }
        );
        table.remove(h2);
        assert_eq!(table.entries[0].generation, 0);
        assert!(!table.vacant.contains(&0));

        let h3 = table.insert(3i32);
        assert_ne!(Key::unpack(h3).slot, 0, "retired slot must not be reused");
        assert_eq!(table.get(NULL_HANDLE), None);
    }
}
