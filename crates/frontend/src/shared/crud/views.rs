//! Pieces of a list page that only depend on the store

use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thaw::{Spinner, SpinnerSize};

use super::state::CollectionState;
use super::CrudStore;
use crate::shared::api_utils::fetch_collection;
use crate::shared::components::ConfirmDialog;

/// Confirmation for `store.pending_delete`; `describe` names the record in the message
#[component]
pub fn DeleteConfirmation<T>(store: CrudStore<T>, describe: fn(&T) -> String) -> impl IntoView
where
    T: AggregateRoot + DeserializeOwned + Clone + Send + Sync + 'static,
    T::Dto: Serialize + Send + 'static,
{
    move || {
        store.pending_delete.with(|pending| pending.as_ref().map(describe)).map(|name| {
            view! {
                <ConfirmDialog
                    title=format!("Excluir {}", T::element_name().to_lowercase())
                    message=format!("Tem certeza que deseja excluir \"{}\"? Esta ação não pode ser desfeita.", name)
                    on_confirm=Callback::new(move |_| store.confirm_delete())
                    on_cancel=Callback::new(move |_| store.cancel_delete())
                />
            }
        })
    }
}

/// Spinner until the first fetch lands, then the error of the last fetch or
/// list mutation (if any)
#[component]
pub fn CollectionStatus<T>(collection: RwSignal<CollectionState<T>>) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    move || {
        let (first_load, error) = collection.with(|c| (c.loading && !c.loaded, c.error.clone()));
        if first_load {
            return view! {
                <div class="collection-status">
                    <Spinner size=SpinnerSize::Small />
                </div>
            }
            .into_any();
        }
        error
            .map(|e| view! { <div class="alert alert--error">{e}</div> })
            .into_any()
    }
}

/// Read-only collection for selects and name lookups (fetched once)
pub fn load_lookup<T>() -> RwSignal<Vec<T>>
where
    T: AggregateRoot + DeserializeOwned + Send + Sync + 'static,
{
    let items = RwSignal::new(Vec::new());
    spawn_local(async move {
        match fetch_collection::<T>().await {
            Ok(list) => items.set(list),
            Err(e) => log::warn!("{} lookup: {}", T::collection_name(), e.message),
        }
    });
    items
}

/// Name of the record with `id` in a lookup, or an empty string
pub fn lookup_name<T: AggregateRoot>(items: &[T], id: Option<i32>, name: fn(&T) -> String) -> String {
    id.and_then(|id| items.iter().find(|item| item.id() == id))
        .map(name)
        .unwrap_or_default()
}
