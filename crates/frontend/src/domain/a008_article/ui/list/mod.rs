//! Articles: tabs by publication state, status toggles and a trash with
//! restore / permanent delete.

use contracts::domain::a008_article::aggregate::{
    Article, ArticleStatusField, ArticleStatusPatch, ArticleTab,
};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use super::details::ArticleDetails;
use crate::shared::api_utils::{delete, patch_json};
use crate::shared::components::{ConfirmDialog, PageHeader};
use crate::shared::crud::views::CollectionStatus;
use crate::shared::crud::CrudStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{CellValue, TableRecord};

impl TableRecord for Article {
    fn row_id(&self) -> i32 {
        self.id
    }

    fn value(&self, key: &str) -> CellValue {
        match key {
            "title" => self.title.as_str().into(),
            "path" => self.path.as_str().into(),
            "author" => self.author.as_str().into(),
            "status" => self.status_label().into(),
            "publicationDate" => self.publication_date.as_deref().map(format_date).into(),
            "tags" => self.tags.join(", ").into(),
            _ => CellValue::Empty,
        }
    }
}

pub fn articles_in_tab(articles: &[Article], tab: ArticleTab) -> Vec<Article> {
    articles.iter().filter(|a| tab.matches(a)).cloned().collect()
}

/// "Publicados (3)"
pub fn tab_caption(articles: &[Article], tab: ArticleTab) -> String {
    let count = articles.iter().filter(|a| tab.matches(a)).count();
    format!("{} ({})", tab.label(), count)
}

fn set_status(store: CrudStore<Article>, id: i32, field: ArticleStatusField, value: bool) {
    store.mutate(async move {
        let path = format!("{}/{}/status", Article::api_path(), id);
        patch_json::<_, Article>(&path, &ArticleStatusPatch { field, value })
            .await
            .map(|_| ())
    });
}

fn purge(store: CrudStore<Article>, id: i32) {
    store.mutate(async move {
        delete(&format!("{}/{}?permanent=true", Article::api_path(), id)).await
    });
}

#[component]
fn ArticleActions(store: CrudStore<Article>, article: Article, on_purge: Callback<Article>) -> impl IntoView {
    let id = article.id;

    if article.is_deleted {
        return view! {
            <div class="row-actions" on:click=|ev| ev.stop_propagation()>
                <button
                    class="button button--icon"
                    title="Restaurar"
                    on:click=move |_| set_status(store, id, ArticleStatusField::IsDeleted, false)
                >
                    {icon("restore")}
                </button>
                <button
                    class="button button--icon button--danger"
                    title="Excluir permanentemente"
                    on:click=move |_| on_purge.run(article.clone())
                >
                    {icon("delete")}
                </button>
            </div>
        }
        .into_any();
    }

    let enabled = article.enabled;
    let is_draft = article.is_draft;
    view! {
        <div class="row-actions" on:click=|ev| ev.stop_propagation()>
            <button
                class="button button--small"
                on:click=move |_| set_status(store, id, ArticleStatusField::Enabled, !enabled)
            >
                {if enabled { "Desativar" } else { "Ativar" }}
            </button>
            <button
                class="button button--small"
                on:click=move |_| set_status(store, id, ArticleStatusField::IsDraft, !is_draft)
            >
                {if is_draft { "Publicar" } else { "Rascunho" }}
            </button>
            <button class="button button--icon" title="Editar" on:click=move |_| store.open_edit(id)>
                {icon("edit")}
            </button>
            <button
                class="button button--icon button--danger"
                title="Mover para a lixeira"
                on:click=move |_| store.ask_delete(article.clone())
            >
                {icon("delete")}
            </button>
        </div>
    }
    .into_any()
}

#[component]
pub fn ArticleList() -> impl IntoView {
    let store = CrudStore::<Article>::new();
    let tab = RwSignal::new(ArticleTab::default());
    let pending_purge = RwSignal::new(None::<Article>);

    let rows = Signal::derive(move || {
        let current = tab.get();
        store.collection.with(|c| articles_in_tab(&c.items, current))
    });

    let on_purge = Callback::new(move |article: Article| pending_purge.set(Some(article)));

    let columns = vec![
        Column::new("Título", "title"),
        Column::new("Caminho", "path"),
        Column::new("Autor", "author"),
        Column::new("Situação", "status").render(|row: &Article| {
            let color = if row.is_deleted {
                BadgeColor::Danger
            } else if row.is_draft {
                BadgeColor::Warning
            } else if row.enabled {
                BadgeColor::Success
            } else {
                BadgeColor::Subtle
            };
            let label = row.status_label();
            view! {
                <Badge appearance=BadgeAppearance::Tint color=color>{label}</Badge>
            }
            .into_any()
        }),
        Column::new("Publicação", "publicationDate"),
        Column::new("", "actions").render(move |row: &Article| {
            view! { <ArticleActions store=store article=row.clone() on_purge=on_purge /> }.into_any()
        }),
    ];

    view! {
        <div class="page">
            <PageHeader title=Article::list_name() count=store.count()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| store.open_create()>
                    {icon("plus")}
                    " Novo artigo"
                </Button>
            </PageHeader>

            <div class="tabs">
                {ArticleTab::all().into_iter().map(|t| view! {
                    <button
                        class="tabs__item"
                        class:tabs__item--active=move || tab.get() == t
                        on:click=move |_| tab.set(t)
                    >
                        {move || store.collection.with(|c| tab_caption(&c.items, t))}
                    </button>
                }).collect_view()}
            </div>

            <CollectionStatus collection=store.collection />

            <DataTable
                rows=rows
                columns=columns
                search_field="title"
                on_row_click=Callback::new(move |row: Article| {
                    if !row.is_deleted {
                        store.open_edit(row.id)
                    }
                })
            />

            <Show when=move || store.dialog.with(|d| d.is_open())>
                <ArticleDetails store=store />
            </Show>

            {move || store.pending_delete.get().map(|article| view! {
                <ConfirmDialog
                    title="Mover para a lixeira"
                    message=format!("O artigo \"{}\" será movido para a lixeira.", article.title)
                    confirm_label="Mover"
                    on_confirm=Callback::new(move |_| store.confirm_delete())
                    on_cancel=Callback::new(move |_| store.cancel_delete())
                />
            })}

            {move || pending_purge.get().map(|article| view! {
                <ConfirmDialog
                    title="Excluir artigo"
                    message=format!("Excluir \"{}\" permanentemente? Esta ação não pode ser desfeita.", article.title)
                    on_confirm=Callback::new(move |_| {
                        pending_purge.set(None);
                        purge(store, article.id);
                    })
                    on_cancel=Callback::new(move |_| pending_purge.set(None))
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a008_article::aggregate::ArticleDto;

    fn article(title: &str, enabled: bool, is_draft: bool, is_deleted: bool) -> Article {
        let mut a = Article::new_for_insert(&ArticleDto {
            title: title.into(),
            enabled,
            is_draft,
            ..Default::default()
        });
        a.is_deleted = is_deleted;
        a
    }

    fn sample() -> Vec<Article> {
        vec![
            article("Publicado", true, false, false),
            article("Rascunho", true, true, false),
            article("Desativado", false, false, false),
            article("Apagado", true, false, true),
        ]
    }

    #[test]
    fn test_tabs_partition_articles() {
        let all = sample();
        assert_eq!(articles_in_tab(&all, ArticleTab::All).len(), 4);
        for (tab, title) in [
            (ArticleTab::Published, "Publicado"),
            (ArticleTab::Drafts, "Rascunho"),
            (ArticleTab::Disabled, "Desativado"),
            (ArticleTab::Trash, "Apagado"),
        ] {
            let rows = articles_in_tab(&all, tab);
            assert_eq!(rows.len(), 1, "{:?}", tab);
            assert_eq!(rows[0].title, title);
        }
    }

    #[test]
    fn test_tab_caption_counts() {
        let all = sample();
        assert_eq!(tab_caption(&all, ArticleTab::All), "Todos (4)");
        assert_eq!(tab_caption(&all, ArticleTab::Trash), "Lixeira (1)");
    }

    #[test]
    fn test_publication_date_cell() {
        let mut a = article("Com data", true, false, false);
        a.publication_date = Some("2024-03-15".into());
        assert_eq!(a.value("publicationDate").to_string(), "15/03/2024");
        a.publication_date = None;
        assert_eq!(a.value("publicationDate"), CellValue::Empty);
    }
}
