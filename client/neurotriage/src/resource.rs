//! Generation-tagged fetch state.
//!
//! Every view fetch goes through a [`ResourceCell`]: `begin` hands the
//! caller a generation, and only a completion carrying the current
//! generation may change the state. A response that resolves after the
//! cell was re-begun or invalidated is dropped, so a slow "load cases"
//! reply can never overwrite the data of a later navigation.

/// Monotonically increasing request tag.
pub type Generation = u64;

/// Fetch state as the views see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource<T, E> {
    /// Nothing requested yet, or explicitly invalidated.
    Idle,
    /// A request is in flight.
    Loading,
    Ready(T),
    Failed(E),
}

impl<T, E> Resource<T, E> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Resource::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Resource::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct ResourceCell<T, E> {
    generation: Generation,
    state: Resource<T, E>,
}

impl<T, E> ResourceCell<T, E> {
    pub fn new() -> Self {
        ResourceCell {
            generation: 0,
            state: Resource::Idle,
        }
    }

    /// Starts a new request, superseding any in-flight one.
    pub fn begin(&mut self) -> Generation {
        self.generation += 1;
        self.state = Resource::Loading;
        self.generation
    }

    /// Applies a successful completion; returns false if it was stale.
    pub fn resolve(&mut self, generation: Generation, value: T) -> bool {
        if generation != self.generation {
            log::debug!(
                "dropping stale response (generation {generation}, current {})",
                self.generation
            );
            return false;
        }
        self.state = Resource::Ready(value);
        true
    }

    /// Applies a failed completion; returns false if it was stale.
    pub fn reject(&mut self, generation: Generation, error: E) -> bool {
        if generation != self.generation {
            log::debug!(
                "dropping stale failure (generation {generation}, current {})",
                self.generation
            );
            return false;
        }
        self.state = Resource::Failed(error);
        true
    }

    /// Discards the current value and supersedes in-flight requests,
    /// e.g. when the view unmounts.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.state = Resource::Idle;
    }

    pub fn state(&self) -> &Resource<T, E> {
        &self.state
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }
}

impl<T, E> Default for ResourceCell<T, E> {
    fn default() -> Self {
        ResourceCell::new()
    }
}
