//! Generic CRUD collection state for the dashboard tabs.
//!
//! DESIGN
//! ======
//! Websites, servers, tasks and notes all follow the same lifecycle: lazy
//! fetch, client-side facet filtering, and a create/edit modal that submits
//! a draft and then re-fetches. One `CollectionState<E>` carries that
//! lifecycle; each entity type plugs in its shape, required-field check,
//! facets and auto-stamp policy through [`Entity`].
//!
//! The draft is a [`Draft`] enum so a modal session is either creating or
//! editing, never both. Every open or close starts a new session; a save
//! result only lands in the session that submitted it.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Filter sentinel that matches every record.
pub const ALL: &str = "All";

/// The four dashboard resources, in tab order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EntityKind {
    #[default]
    Websites,
    Servers,
    Tasks,
    Notes,
}

impl EntityKind {
    pub const ALL: [Self; 4] = [Self::Websites, Self::Servers, Self::Tasks, Self::Notes];

    pub fn label(self) -> &'static str {
        match self {
            Self::Websites => "Websites",
            Self::Servers => "Servers",
            Self::Tasks => "Tasks",
            Self::Notes => "Notes",
        }
    }

    /// Collection path on the backend, e.g. `/tasks`.
    pub fn path(self) -> &'static str {
        match self {
            Self::Websites => "/websites",
            Self::Servers => "/servers",
            Self::Tasks => "/tasks",
            Self::Notes => "/notes",
        }
    }

    /// Singular noun for modal titles.
    pub fn singular(self) -> &'static str {
        match self {
            Self::Websites => "Website",
            Self::Servers => "Server",
            Self::Tasks => "Task",
            Self::Notes => "Note",
        }
    }
}

/// A filter dimension derived from loaded records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facet {
    Category,
    Client,
    Provider,
    Status,
    Tag,
}

impl Facet {
    pub fn label(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Client => "Client",
            Self::Provider => "Provider",
            Self::Status => "Status",
            Self::Tag => "Tag",
        }
    }
}

/// A dashboard record type.
pub trait Entity: Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: EntityKind;
    /// Filter dimensions offered for this kind, in display order.
    const FACETS: &'static [Facet];

    /// Server-assigned identity; `None` until persisted.
    fn id(&self) -> Option<i64>;

    /// Minimal precondition for submitting the record.
    fn has_required_fields(&self) -> bool;

    /// Values this record contributes to `facet`, with kind-specific defaults
    /// substituted for empty fields. Most facets yield exactly one value.
    fn facet_values(&self, facet: Facet) -> Vec<String>;

    /// Fill auto-managed fields right before submission. `today` is a
    /// `YYYY-MM-DD` date.
    fn stamp(&mut self, today: &str, is_new: bool) {
        let _ = (today, is_new);
    }
}

/// The record bound to an open modal.
#[derive(Clone, Debug, PartialEq)]
pub enum Draft<E> {
    New(E),
    Editing(E),
}

impl<E: Default> Default for Draft<E> {
    fn default() -> Self {
        Self::New(E::default())
    }
}

impl<E> Draft<E> {
    pub fn record(&self) -> &E {
        match self {
            Self::New(record) | Self::Editing(record) => record,
        }
    }

    pub fn record_mut(&mut self) -> &mut E {
        match self {
            Self::New(record) | Self::Editing(record) => record,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

/// Whether a submission creates or updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveMethod {
    Create,
    Update(i64),
}

/// A validated, stamped submission ready for the network layer.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveRequest<E> {
    pub kind: EntityKind,
    pub method: SaveMethod,
    pub body: E,
    /// Modal session that issued the request.
    pub session: u64,
}

impl<E> SaveRequest<E> {
    pub fn http_method(&self) -> &'static str {
        match self.method {
            SaveMethod::Create => "POST",
            SaveMethod::Update(_) => "PUT",
        }
    }

    pub fn path(&self) -> String {
        match self.method {
            SaveMethod::Create => self.kind.path().to_owned(),
            SaveMethod::Update(id) => format!("{}/{id}", self.kind.path()),
        }
    }
}

/// List, filter and modal state for one entity kind.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionState<E> {
    pub items: Vec<E>,
    /// True once any fetch has completed successfully.
    pub loaded: bool,
    pub loading: bool,
    pub modal_open: bool,
    pub draft: Draft<E>,
    /// A submission is in flight; the submit button is disabled.
    pub saving: bool,
    pub save_error: Option<String>,
    session: u64,
    filters: BTreeMap<Facet, String>,
}

impl<E: Entity> Default for CollectionState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loaded: false,
            loading: false,
            modal_open: false,
            draft: Draft::default(),
            saving: false,
            save_error: None,
            session: 0,
            filters: BTreeMap::new(),
        }
    }
}

impl<E: Entity> CollectionState<E> {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Replace the collection wholesale with a fresh server response. Filters
    /// whose value no longer occurs in the new items fall back to `ALL`.
    pub fn replace_items(&mut self, items: Vec<E>) {
        self.items = items;
        self.loaded = true;
        self.loading = false;
        let items = &self.items;
        self.filters
            .retain(|facet, wanted| items.iter().any(|item| item.facet_values(*facet).iter().any(|v| v == wanted)));
    }

    /// A failed fetch keeps whatever was loaded before.
    pub fn fetch_failed(&mut self) {
        self.loading = false;
    }

    pub fn open_create(&mut self) {
        self.session += 1;
        self.saving = false;
        self.draft = Draft::New(E::default());
        self.save_error = None;
        self.modal_open = true;
    }

    pub fn open_edit(&mut self, record: &E) {
        self.session += 1;
        self.saving = false;
        self.draft = Draft::Editing(record.clone());
        self.save_error = None;
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.session += 1;
        self.modal_open = false;
        self.draft = Draft::default();
        self.saving = false;
        self.save_error = None;
    }

    pub fn edit_draft(&mut self, f: impl FnOnce(&mut E)) {
        f(self.draft.record_mut());
    }

    /// Validate and stamp the draft. Returns `None` (and changes nothing)
    /// when a save is already in flight or a required field is missing.
    pub fn begin_save(&mut self, today: &str) -> Option<SaveRequest<E>> {
        if self.saving || !self.draft.record().has_required_fields() {
            return None;
        }
        let method = match &self.draft {
            Draft::Editing(record) => record.id().map_or(SaveMethod::Create, SaveMethod::Update),
            Draft::New(_) => SaveMethod::Create,
        };
        let mut body = self.draft.record().clone();
        body.stamp(today, method == SaveMethod::Create);
        self.saving = true;
        self.save_error = None;
        Some(SaveRequest { kind: E::KIND, method, body, session: self.session })
    }

    /// Apply a submission result. Success closes the modal and resets the
    /// draft; failure keeps both so the user can retry. Results from an
    /// earlier modal session are dropped.
    pub fn finish_save(&mut self, session: u64, result: Result<(), String>) {
        if session != self.session {
            return;
        }
        match result {
            Ok(()) => self.close_modal(),
            Err(message) => {
                self.saving = false;
                self.save_error = Some(message);
            }
        }
    }

    pub fn filter(&self, facet: Facet) -> &str {
        self.filters.get(&facet).map_or(ALL, String::as_str)
    }

    pub fn set_filter(&mut self, facet: Facet, value: impl Into<String>) {
        let value = value.into();
        if value == ALL {
            self.filters.remove(&facet);
        } else {
            self.filters.insert(facet, value);
        }
    }

    /// `ALL` followed by every distinct value the loaded records carry for
    /// `facet`, sorted.
    pub fn filter_options(&self, facet: Facet) -> Vec<String> {
        let values: BTreeSet<String> = self.items.iter().flat_map(|item| item.facet_values(facet)).collect();
        std::iter::once(ALL.to_owned()).chain(values).collect()
    }

    /// Records matching every active filter, in server order.
    pub fn visible(&self) -> Vec<E> {
        self.items
            .iter()
            .filter(|item| {
                self.filters
                    .iter()
                    .all(|(facet, wanted)| item.facet_values(*facet).iter().any(|v| v == wanted))
            })
            .cloned()
            .collect()
    }
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
