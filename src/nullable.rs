use std::fmt;
use std::hash::{Hash, Hasher};

/// A value that may be absent, remembering whether it was ever assigned.
///
/// Two facets are tracked:
///
/// - *valid*: a meaningful `T` is held.
/// - *initialized*: the container went through a constructor or setter at
///   least once. Only [`Default::default`] produces an uninitialized
///   instance, and no operation ever clears the flag again.
///
/// Equality and hashing look at validity and the value only.
#[derive(Debug, Clone, Copy)]
pub struct Nullable<T> {
    value: Option<T>,
    initialized: bool,
}

#[cold]
#[track_caller]
fn invalid_access() -> ! {
    panic!("get called on invalid Nullable")
}

impl<T> Nullable<T> {
    /// An explicitly absent value.
    pub const fn new() -> Self {
        Self {
            value: None,
            initialized: true,
        }
    }

    /// Copies the pointee if there is one; the result never aliases `from`.
    pub fn from_ptr(from: Option<&T>) -> Self
    where
        T: Clone,
    {
        match from {
            Some(value) => Self::from(value.clone()),
            None => Self::new(),
        }
    }

    pub fn from_option(from: Option<T>) -> Self {
        Self {
            value: from,
            initialized: true,
        }
    }

    /// Applies `transform` to the held value. An invalid source yields an
    /// invalid result and `transform` is never called.
    pub fn map<O, F>(self, transform: F) -> Nullable<O>
    where
        F: FnOnce(T) -> O,
    {
        match self.value {
            Some(value) => Nullable::from(transform(value)),
            None => Nullable::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics if the container is invalid. Check [`Nullable::is_valid`] first.
    #[track_caller]
    pub fn get(&self) -> &T {
        match &self.value {
            Some(value) => value,
            None => invalid_access(),
        }
    }

    /// Consuming variant of [`Nullable::get`], with the same panic.
    #[track_caller]
    pub fn into_inner(self) -> T {
        match self.value {
            Some(value) => value,
            None => invalid_access(),
        }
    }

    pub fn get_or(self, fallback: T) -> T {
        self.value.unwrap_or(fallback)
    }

    pub fn get_or_zero(self) -> T
    where
        T: Default,
    {
        self.value.unwrap_or_default()
    }

    /// Mutable access to the stored value, `None` when invalid.
    ///
    /// Writes land in the container itself. Validity can't be changed
    /// through the returned reference.
    pub fn get_ptr(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    pub fn as_option(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_option(self) -> Option<T> {
        self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = Some(value);
        self.initialized = true;
    }

    /// Assigns a copy of the pointee, or clears the value when `value` is
    /// `None`. Either way the container counts as initialized afterwards.
    pub fn set_ptr(&mut self, value: Option<&T>)
    where
        T: Clone,
    {
        self.value = value.cloned();
        self.initialized = true;
    }
}

/// The never-touched instance: invalid and uninitialized.
impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self {
            value: None,
            initialized: false,
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self {
            value: Some(value),
            initialized: true,
        }
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.value
    }
}

impl<T: PartialEq> PartialEq for Nullable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Nullable<T> {}

impl<T: Hash> Hash for Nullable<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("<nil>"),
        }
    }
}

impl<T> std::ops::Deref for Nullable<T> {
    type Target = T;
    #[track_caller]
    fn deref(&self) -> &Self::Target {
        self.get()
    }
}

impl<T> std::ops::DerefMut for Nullable<T> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut Self::Target {
        match &mut self.value {
            Some(value) => value,
            None => invalid_access(),
        }
    }
}
