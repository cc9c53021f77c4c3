use leptos::prelude::*;

/// Заголовок страницы списка: название, число записей и кнопки действий справа
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Records in the loaded collection
    #[prop(optional, into)]
    count: MaybeProp<usize>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">
                    {title}
                    {move || count.get().map(|n| view! {
                        <span class="page-header__count">{n}</span>
                    })}
                </h1>
                {move || subtitle.get().map(|s| view! {
                    <p class="page-header__subtitle">{s}</p>
                })}
            </div>
            <div class="page-header__actions">{children.map(|c| c())}</div>
        </div>
    }
}
