//! Fetch status bookkeeping shared by the web app and the CLI.

use crate::aggregate::HouseholdAggregate;
use crate::error::FetchError;
use crate::query::QueryKey;
use crate::response::RawRow;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchStatus {
    #[default]
    Loading,
    Success,
    Empty,
    Error(FetchError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchResult {
    pub status: FetchStatus,
    pub rows: Vec<RawRow>,
}

impl FetchResult {
    pub fn loading() -> Self {
        Self::default()
    }

    pub fn failed(error: FetchError) -> Self {
        Self {
            status: FetchStatus::Error(error),
            rows: Vec::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn aggregate(&self) -> HouseholdAggregate {
        HouseholdAggregate::from_rows(&self.rows)
    }
}

/// Identifies one request started by [`FetchSlot::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

/// The result currently on screen together with the key it belongs to.
///
/// Every `begin` or `show` starts a new generation; responses and timeouts
/// carrying an older ticket are superseded and dropped, even for the same key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchSlot {
    generation: u64,
    key: Option<QueryKey>,
    result: FetchResult,
}

impl FetchSlot {
    pub fn key(&self) -> Option<&QueryKey> {
        self.key.as_ref()
    }

    pub fn result(&self) -> &FetchResult {
        &self.result
    }

    /// Point the slot at a new key, starting in `Loading`.
    pub fn begin(&mut self, key: Option<QueryKey>) -> RequestTicket {
        self.generation += 1;
        self.key = key;
        self.result = FetchResult::loading();
        RequestTicket {
            generation: self.generation,
        }
    }

    /// Show an already known result for `key`.
    pub fn show(&mut self, key: QueryKey, result: FetchResult) {
        self.generation += 1;
        self.key = Some(key);
        self.result = result;
    }

    fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Store `result` if `ticket` is still the current request.
    pub fn accept(&mut self, ticket: RequestTicket, result: FetchResult) -> bool {
        if !self.is_current(ticket) {
            log::debug!("dropping superseded response for {:?}", self.key);
            return false;
        }
        self.result = result;
        true
    }

    /// Turn the current request into a timeout error if it is still loading.
    pub fn expire(&mut self, ticket: RequestTicket, timeout_ms: u64) -> bool {
        if !self.is_current(ticket) || !self.result.is_loading() {
            return false;
        }
        log::warn!("request for {:?} timed out after {} ms", self.key, timeout_ms);
        self.result = FetchResult::failed(FetchError::Timeout(timeout_ms));
        true
    }
}

/// Completed results per key. Failed requests are not cached so revisiting
/// the route retries them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultCache {
    entries: HashMap<QueryKey, FetchResult>,
}

impl ResultCache {
    pub fn get(&self, key: &QueryKey) -> Option<&FetchResult> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: QueryKey, result: FetchResult) {
        match result.status {
            FetchStatus::Success | FetchStatus::Empty => {
                self.entries.insert(key, result);
            }
            FetchStatus::Loading | FetchStatus::Error(_) => {}
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(district: &str) -> QueryKey {
        QueryKey::new("111", "臺北市", district)
    }

    fn empty() -> FetchResult {
        FetchResult {
            status: FetchStatus::Empty,
            rows: Vec::new(),
        }
    }

    #[test]
    fn test_accept_current_request() {
        let mut slot = FetchSlot::default();
        let ticket = slot.begin(Some(key("大安區")));
        assert!(slot.result().is_loading());
        assert!(slot.accept(ticket, empty()));
        assert_eq!(slot.result().status, FetchStatus::Empty);
    }

    #[test]
    fn test_superseded_response_is_dropped() {
        let mut slot = FetchSlot::default();
        let first = slot.begin(Some(key("大安區")));
        slot.begin(Some(key("信義區")));
        assert!(!slot.accept(first, empty()));
        assert!(slot.result().is_loading());
        assert_eq!(slot.key(), Some(&key("信義區")));
    }

    #[test]
    fn test_expire_only_while_loading() {
        let mut slot = FetchSlot::default();
        let ticket = slot.begin(Some(key("大安區")));
        assert!(slot.expire(ticket, 15_000));
        assert_eq!(
            slot.result().status,
            FetchStatus::Error(FetchError::Timeout(15_000))
        );

        let ticket = slot.begin(Some(key("大安區")));
        slot.accept(ticket, empty());
        assert!(!slot.expire(ticket, 15_000));
    }

    #[test]
    fn test_stale_timer_for_same_key_is_ignored() {
        let mut slot = FetchSlot::default();
        let first = slot.begin(Some(key("大安區")));
        assert!(slot.accept(first, FetchResult::failed(FetchError::Transport("offline".to_string()))));

        // Resubmitting the same key starts a fresh request
        let second = slot.begin(Some(key("大安區")));
        assert!(!slot.expire(first, 15_000));
        assert!(slot.result().is_loading());
        assert!(!slot.accept(first, empty()));
        assert!(slot.result().is_loading());

        assert!(slot.accept(second, empty()));
        assert_eq!(slot.result().status, FetchStatus::Empty);
    }

    #[test]
    fn test_show_supersedes_pending_request() {
        let mut slot = FetchSlot::default();
        let pending = slot.begin(Some(key("大安區")));
        slot.show(key("大安區"), empty());
        assert!(!slot.expire(pending, 15_000));
        assert_eq!(slot.result().status, FetchStatus::Empty);
    }

    #[test]
    fn test_late_response_replaces_timeout() {
        let mut slot = FetchSlot::default();
        let ticket = slot.begin(Some(key("大安區")));
        assert!(slot.expire(ticket, 15_000));
        assert!(slot.accept(ticket, empty()));
        assert_eq!(slot.result().status, FetchStatus::Empty);
    }

    #[test]
    fn test_cache_skips_failures() {
        let mut cache = ResultCache::default();
        cache.insert(key("大安區"), FetchResult::failed(FetchError::Status(500)));
        cache.insert(key("信義區"), FetchResult::loading());
        assert!(cache.is_empty());
        cache.insert(key("大安區"), empty());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&key("大安區")), Some(&empty()));
    }
}
