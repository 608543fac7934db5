use std::collections::HashSet;

/// Per-session flag store. The browser backs these with session storage,
/// tests inject the in-memory implementation.
pub trait SessionFlags {
    fn is_set(&self, key: &str) -> bool;
    fn set(&mut self, key: &str);
    fn clear(&mut self, key: &str);
}

#[derive(Default)]
pub struct MemorySessionFlags {
    flags: HashSet<String>,
}

impl MemorySessionFlags {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionFlags for MemorySessionFlags {
    fn is_set(&self, key: &str) -> bool {
        self.flags.contains(key)
    }

    fn set(&mut self, key: &str) {
        self.flags.insert(key.to_owned());
    }

    fn clear(&mut self, key: &str) {
        self.flags.remove(key);
    }
}

// lets controllers borrow a store that outlives them
impl<S: SessionFlags> SessionFlags for &mut S {
    fn is_set(&self, key: &str) -> bool {
        (**self).is_set(key)
    }

    fn set(&mut self, key: &str) {
        (**self).set(key)
    }

    fn clear(&mut self, key: &str) {
        (**self).clear(key)
    }
}
