//! Collection store behind every list page.
//!
//! Fetches the collection, drives the create/edit dialog and the delete
//! confirmation. Mutations never touch the local list: success refetches.

pub mod state;
pub mod views;

use contracts::domain::common::{AggregateRoot, Validate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::{self, ApiFailure};
use state::{CollectionState, DialogState};

pub struct CrudStore<T: Send + Sync + 'static> {
    pub collection: RwSignal<CollectionState<T>>,
    pub dialog: RwSignal<DialogState>,
    /// Record waiting for delete confirmation
    pub pending_delete: RwSignal<Option<T>>,
}

impl<T: Send + Sync + 'static> Clone for CrudStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for CrudStore<T> {}

impl<T> CrudStore<T>
where
    T: AggregateRoot + DeserializeOwned + Clone + Send + Sync + 'static,
    T::Dto: Serialize + Send + 'static,
{
    /// Store with the first fetch already scheduled
    pub fn new() -> Self {
        let store = Self {
            collection: RwSignal::new(CollectionState::default()),
            dialog: RwSignal::new(DialogState::Closed),
            pending_delete: RwSignal::new(None),
        };
        store.refetch();
        store
    }

    pub fn items(&self) -> Signal<Vec<T>> {
        let collection = self.collection;
        Signal::derive(move || collection.with(|c| c.items.clone()))
    }

    pub fn count(&self) -> Signal<usize> {
        let collection = self.collection;
        Signal::derive(move || collection.with(|c| c.items.len()))
    }

    pub fn refetch(&self) {
        let collection = self.collection;
        collection.update(|c| c.begin_fetch());
        spawn_local(async move {
            let result = api_utils::fetch_collection::<T>().await.map_err(String::from);
            if let Err(e) = &result {
                log::warn!("{}: fetch failed: {}", T::collection_name(), e);
            }
            collection.update(|c| c.fetched(result));
        });
    }

    pub fn open_create(&self) {
        self.dialog.set(DialogState::open(None));
    }

    pub fn open_edit(&self, id: i32) {
        self.dialog.set(DialogState::open(Some(id)));
    }

    pub fn close_dialog(&self) {
        self.dialog.update(|d| d.close());
    }

    /// Record being edited, looked up in the current collection
    pub fn editing_record(&self) -> Option<T> {
        let id = self.dialog.with_untracked(|d| d.editing())?;
        self.collection
            .with_untracked(|c| c.items.iter().find(|item| item.id() == id).cloned())
    }

    /// Validate locally, then create or update depending on the dialog
    pub fn save(&self, dto: T::Dto) {
        if let Err(errors) = dto.validate() {
            self.dialog.update(|d| d.reject(errors));
            return;
        }
        let editing = self.dialog.with_untracked(|d| d.editing());
        self.submit(async move {
            match editing {
                Some(id) => api_utils::update_record::<T>(id, &dto).await.map(|_| ()),
                None => api_utils::create_record::<T>(&dto).await.map(|_| ()),
            }
        });
    }

    /// Run any mutation in the dialog lifecycle (used by pages with their own
    /// endpoints)
    pub fn submit<F>(&self, mutation: F)
    where
        F: std::future::Future<Output = Result<(), ApiFailure>> + 'static,
    {
        let store = *self;
        store.dialog.update(|d| d.begin_submit());
        spawn_local(async move {
            match mutation.await {
                Ok(()) => {
                    store.dialog.update(|d| d.close());
                    store.refetch();
                }
                Err(failure) => store
                    .dialog
                    .update(|d| d.submit_failed(failure.message, failure.fields)),
            }
        });
    }

    pub fn ask_delete(&self, record: T) {
        self.pending_delete.set(Some(record));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        let Some(record) = self.pending_delete.get_untracked() else {
            return;
        };
        self.pending_delete.set(None);
        self.mutate(async move { api_utils::delete_record::<T>(record.id()).await });
    }

    /// Mutation outside the dialog (delete, status toggles); failures go to
    /// the page error area
    pub fn mutate<F>(&self, mutation: F)
    where
        F: std::future::Future<Output = Result<(), ApiFailure>> + 'static,
    {
        let store = *self;
        spawn_local(async move {
            match mutation.await {
                Ok(()) => store.refetch(),
                Err(failure) => store.collection.update(|c| c.fail(failure.message)),
            }
        });
    }
}
