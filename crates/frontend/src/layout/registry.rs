//! Page key -> view. Keys match the sidebar entries and the `?active=` value.

use leptos::prelude::*;

use crate::domain::a001_boat_type::ui::list::BoatTypeList;
use crate::domain::a002_boat::ui::list::BoatList;
use crate::domain::a003_marina::ui::list::MarinaList;
use crate::domain::a004_itinerary::ui::list::ItineraryList;
use crate::domain::a005_country::ui::list::CountryList;
use crate::domain::a006_state::ui::list::StateList;
use crate::domain::a007_city::ui::list::CityList;
use crate::domain::a008_article::ui::list::ArticleList;
use crate::system::auth::guard::RequireAdmin;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::users::ui::list::UserList;

pub fn render_page(key: &str) -> AnyView {
    match key {
        "a001_boat_type" => view! { <BoatTypeList /> }.into_any(),
        "a002_boat" => view! { <BoatList /> }.into_any(),
        "a003_marina" => view! { <MarinaList /> }.into_any(),
        "a004_itinerary" => view! { <ItineraryList /> }.into_any(),
        "a005_country" => view! { <CountryList /> }.into_any(),
        "a006_state" => view! { <StateList /> }.into_any(),
        "a007_city" => view! { <CityList /> }.into_any(),
        "a008_article" => view! { <ArticleList /> }.into_any(),
        "sys_users" => view! {
            <RequireAdmin>
                <UserList />
            </RequireAdmin>
        }
        .into_any(),
        _ => view! { <DashboardPage /> }.into_any(),
    }
}
