use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

/// State of a single keyed query.
///
/// `data` holds the last successful payload and survives later `Loading`/`Error`
/// transitions, so a refetch shows stale data until the new result lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState<T> {
    status: QueryStatus,
    data: Option<T>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            status: QueryStatus::Idle,
            data: None,
        }
    }
}

impl<T> QueryState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters `Loading`. Returns `false` when a request for this query is already
    /// in flight and no new network call should be issued.
    pub fn begin(&mut self) -> bool {
        if self.status == QueryStatus::Loading {
            return false;
        }
        self.status = QueryStatus::Loading;
        true
    }

    pub fn resolve(&mut self, data: T) {
        self.status = QueryStatus::Success;
        self.data = Some(data);
    }

    pub fn fail(&mut self, reason: impl Into<String>) {
        self.status = QueryStatus::Error(reason.into());
    }

    pub fn status(&self) -> &QueryStatus {
        &self.status
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            QueryStatus::Error(reason) => Some(reason),
            _ => None,
        }
    }

    /// First load: a request is in flight and there is nothing to show yet.
    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading && self.data.is_none()
    }

    /// Any request in flight, including background revalidation.
    pub fn is_fetching(&self) -> bool {
        self.status == QueryStatus::Loading
    }
}

/// One `QueryState` per key. A completion for key K only ever touches the slot for K.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCache<K: Ord, T> {
    slots: BTreeMap<K, QueryState<T>>,
}

impl<K: Ord, T> Default for QueryCache<K, T> {
    fn default() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }
}

impl<K: Ord, T> QueryCache<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &K) -> Option<&QueryState<T>> {
        self.slots.get(key)
    }

    /// See [`QueryState::begin`].
    pub fn begin(&mut self, key: K) -> bool {
        self.slots.entry(key).or_default().begin()
    }

    pub fn resolve(&mut self, key: K, data: T) {
        self.slots.entry(key).or_default().resolve(data);
    }

    pub fn fail(&mut self, key: K, reason: impl Into<String>) {
        self.slots.entry(key).or_default().fail(reason);
    }

    pub fn data(&self, key: &K) -> Option<&T> {
        self.slots.get(key).and_then(QueryState::data)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
