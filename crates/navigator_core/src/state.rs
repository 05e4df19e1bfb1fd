use std::collections::BTreeMap;

use crate::view_model::NavViewModel;
use crate::NavEntry;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    displayed: Option<NavEntry>,
    in_flight: BTreeMap<RequestId, NavEntry>,
    next_request_id: RequestId,
    dirty: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            displayed: None,
            in_flight: BTreeMap::new(),
            next_request_id: 1,
            dirty: false,
        }
    }
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> NavViewModel {
        NavViewModel {
            displayed: self.displayed.clone(),
            in_flight: self.in_flight.len(),
            loading: !self.in_flight.is_empty(),
            dirty: self.dirty,
        }
    }

    /// Entry whose content is currently in the document, if any was loaded.
    pub fn displayed(&self) -> Option<&NavEntry> {
        self.displayed.as_ref()
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Returns and clears the dirty flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn begin_load(&mut self, entry: NavEntry) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight.insert(request_id, entry);
        self.dirty = true;
        request_id
    }

    /// Drops the request from the in-flight set and hands back its entry.
    pub(crate) fn finish_load(&mut self, request_id: RequestId) -> Option<NavEntry> {
        let entry = self.in_flight.remove(&request_id)?;
        self.dirty = true;
        Some(entry)
    }

    pub(crate) fn set_displayed(&mut self, entry: NavEntry) {
        self.displayed = Some(entry);
        self.dirty = true;
    }
}
