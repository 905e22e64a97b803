//! Reactive wiring of the list-view pipeline for one list page.
//!
//! `criteria` and `direction` are separate signals: the `fixed_subset` memo
//! reads only `records` and `criteria`, `rows` adds `direction` on top.

use contracts::shared::list_view::{
    compute_fixed_subset, reorder, ListRecord, ListViewState, PageSize, SearchScope,
    SortDirection, SubsetCriteria,
};
use contracts::shared::xml_export::{export_document, XmlExportable};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use super::api_utils::fetch_list;
use super::export::download_file;

/// Record type that can be shown on a list page.
pub trait ListItem:
    ListRecord + XmlExportable + DeserializeOwned + PartialEq + Send + Sync
{
}

impl<T> ListItem for T where
    T: ListRecord + XmlExportable + DeserializeOwned + PartialEq + Send + Sync
{
}

pub struct ListViewModel<R: ListItem> {
    /// Last fetched batch, replaced as a whole.
    pub records: RwSignal<Vec<R>>,
    pub criteria: RwSignal<SubsetCriteria>,
    pub direction: RwSignal<SortDirection>,
    /// Text in the search box, applied on Enter / "Filter".
    pub search_input: RwSignal<String>,
    pub fixed_subset: Memo<Vec<R>>,
    /// What the table renders and the export writes.
    pub rows: Memo<Vec<R>>,
    api_path: &'static str,
    request_seq: StoredValue<u64>,
}

impl<R: ListItem> Clone for ListViewModel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ListItem> Copy for ListViewModel<R> {}

impl<R: ListItem> ListViewModel<R> {
    pub fn new(api_path: &'static str) -> Self {
        let initial = ListViewState::initial::<R>();
        let records = RwSignal::new(Vec::<R>::new());
        let criteria = RwSignal::new(initial.criteria);
        let direction = RwSignal::new(initial.direction);

        let fixed_subset = Memo::new(move |_| {
            records.with(|batch| criteria.with(|c| compute_fixed_subset(batch, c)))
        });
        let rows = Memo::new(move |_| {
            let direction = direction.get();
            fixed_subset.with(|subset| reorder(subset, direction))
        });

        Self {
            records,
            criteria,
            direction,
            search_input: RwSignal::new(String::new()),
            fixed_subset,
            rows,
            api_path,
            request_seq: StoredValue::new(0),
        }
    }

    pub fn state(&self) -> ListViewState {
        ListViewState {
            criteria: self.criteria.get_untracked(),
            direction: self.direction.get_untracked(),
        }
    }

    /// Writes only the parts of `next` that changed.
    fn apply_state(&self, next: ListViewState) {
        let ListViewState {
            criteria,
            direction,
        } = next;
        if self.criteria.with_untracked(|current| *current != criteria) {
            self.criteria.set(criteria);
        }
        if self.direction.get_untracked() != direction {
            self.direction.set(direction);
        }
    }

    /// Page entered or re-selected: controls back to defaults, then refetch.
    pub fn activate(&self) {
        self.search_input.set(String::new());
        self.apply_state(ListViewState::initial::<R>());
        self.fetch();
    }

    /// Fetches the batch; a failure keeps the previous one.
    pub fn fetch(&self) {
        let seq = self.request_seq.get_value().wrapping_add(1);
        self.request_seq.set_value(seq);

        let this = *self;
        spawn_local(async move {
            match fetch_list::<R>(this.api_path).await {
                Ok(items) => {
                    // page left, or a newer activation already asked for fresh data
                    if this.request_seq.try_get_value() != Some(seq) {
                        return;
                    }
                    log::info!("{}: loaded {} records", R::ENTITY, items.len());
                    this.records.set(items);
                }
                Err(e) => log::error!("{}: failed to load records: {}", R::ENTITY, e),
            }
        });
    }

    pub fn apply_filter(&self) {
        let term = self.search_input.get_untracked();
        self.apply_state(self.state().with_term(term));
    }

    /// `value` comes from the scope `<select>`.
    pub fn set_scope(&self, value: &str) {
        match SearchScope::parse::<R>(value) {
            Ok(scope) => self.apply_state(self.state().with_scope(scope)),
            Err(e) => log::warn!("{}", e),
        }
    }

    /// `value` comes from the "Records" `<select>`.
    pub fn set_page_size(&self, value: &str) {
        match value.parse::<PageSize>() {
            Ok(page_size) => self.apply_state(self.state().with_page_size(page_size)),
            Err(e) => log::warn!("{}", e),
        }
    }

    pub fn toggle_sort(&self, key: &'static str) {
        self.apply_state(self.state().toggle_sort(key));
    }

    /// Downloads the displayed rows as XML.
    pub fn export_xml(&self) {
        let file = self.rows.with_untracked(|rows| export_document(rows));
        match download_file(&file) {
            Ok(()) => log::info!(
                "{}: exported {} records to {}",
                R::ENTITY,
                self.rows.with_untracked(Vec::len),
                file.file_name
            ),
            Err(e) => log::error!("{}: export failed: {}", R::ENTITY, e),
        }
    }
}
