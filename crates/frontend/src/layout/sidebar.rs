//! Sidebar navigation

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub admin_only: bool,
}

const fn item(key: &'static str, label: &'static str, icon: &'static str) -> MenuItem {
    MenuItem {
        key,
        label,
        icon,
        admin_only: false,
    }
}

pub static MENU: [MenuItem; 10] = [
    item("dashboard", "Painel", "dashboard"),
    item("a002_boat", "Embarcações", "ship"),
    item("a001_boat_type", "Tipos de embarcação", "tag"),
    item("a004_itinerary", "Roteiros", "route"),
    item("a003_marina", "Marinas", "anchor"),
    item("a008_article", "Artigos", "file-text"),
    item("a005_country", "Países", "globe"),
    item("a006_state", "Estados", "map"),
    item("a007_city", "Cidades", "map-pin"),
    MenuItem {
        admin_only: true,
        ..item("sys_users", "Usuários", "users")
    },
];

pub fn menu_label(key: &str) -> &'static str {
    MENU.iter()
        .find(|i| i.key == key)
        .map(|i| i.label)
        .unwrap_or("Painel")
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();

    view! {
        <nav class="app-sidebar" class:hidden=move || !ctx.sidebar_open.get()>
            <div class="app-sidebar__content">
                {move || {
                    let is_admin = auth.is_admin();
                    MENU.iter()
                        .filter(|i| is_admin || !i.admin_only)
                        .map(|i| {
                            let key = i.key;
                            view! {
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || ctx.active.with(|a| a == key)
                                    on:click=move |_| ctx.open(key)
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(i.icon)}
                                        <span>{i.label}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_keys_are_unique() {
        for (i, item) in MENU.iter().enumerate() {
            assert!(MENU[i + 1..].iter().all(|other| other.key != item.key));
        }
        assert_eq!(menu_label("a006_state"), "Estados");
        assert_eq!(menu_label("unknown"), "Painel");
        assert!(MENU.iter().filter(|i| i.admin_only).all(|i| i.key == "sys_users"));
    }
}
