use contracts::domain::a002_boat::aggregate::Boat;
use contracts::domain::a003_marina::aggregate::Marina;
use contracts::domain::a004_itinerary::aggregate::Itinerary;
use contracts::domain::a008_article::aggregate::Article;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::fetch_collection;
use crate::shared::components::PageHeader;
use crate::system::auth::context::use_auth;

/// Card with the size of one collection; opens its list on click
fn count_card<T>(page_key: &'static str) -> impl IntoView
where
    T: AggregateRoot + DeserializeOwned + 'static,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let count = RwSignal::new(None::<usize>);

    spawn_local(async move {
        match fetch_collection::<T>().await {
            Ok(items) => count.set(Some(items.len())),
            Err(e) => log::warn!("dashboard {}: {}", T::collection_name(), e.message),
        }
    });

    view! {
        <div class="stat-card" on:click=move |_| ctx.open(page_key)>
            <Card>
                <div class="stat-card__label">{T::list_name()}</div>
                <div class="stat-card__value">
                    {move || match count.get() {
                        Some(n) => n.to_string().into_any(),
                        None => view! { <Spinner size=SpinnerSize::Small /> }.into_any(),
                    }}
                </div>
            </Card>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let greeting = auth.state.with_untracked(|s| {
        s.user
            .as_ref()
            .map(|u| format!("Olá, {}", u.full_name))
            .unwrap_or_default()
    });

    view! {
        <div class="page">
            <PageHeader title="Painel" subtitle=greeting />
            <div class="stat-grid">
                {count_card::<Boat>("a002_boat")}
                {count_card::<Marina>("a003_marina")}
                {count_card::<Itinerary>("a004_itinerary")}
                {count_card::<Article>("a008_article")}
            </div>
        </div>
    }
}
