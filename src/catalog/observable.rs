use std::fmt::{Debug, Formatter};

pub type Listener<T> = Box<dyn FnMut(&T)>;

/// A value that tells its listeners when it changes.
///
/// Listeners run synchronously inside `set`/`update`, after the new value is
/// stored. Writing an equal value is not a change and nobody is notified.
pub struct Observable<T> {
    value: T,
    listeners: Vec<Listener<T>>,
}

impl<T: PartialEq> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        for listener in &mut self.listeners {
            listener(&self.value);
        }
        true
    }

    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> bool {
        let next = f(&self.value);
        self.set(next)
    }

    pub fn subscribe(&mut self, listener: Listener<T>) {
        self.listeners.push(listener);
    }
}

impl<T: Debug> Debug for Observable<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
