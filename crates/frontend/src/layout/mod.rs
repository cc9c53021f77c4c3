pub mod global_context;
pub mod header;
pub mod registry;
pub mod sidebar;

use header::Header;
use leptos::prelude::*;
use sidebar::Sidebar;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <div class="app-body">
                <Sidebar />
                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}
