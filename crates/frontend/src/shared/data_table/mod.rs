//! Generic list table: optional search on one field, fixed-size pages.
//!
//! The widget has no network side effects; the owning page passes the full
//! collection and re-renders it after every refetch.

pub mod state;

use leptos::prelude::*;
use std::sync::Arc;

use crate::shared::icons::icon;
use crate::shared::list_utils::TableRecord;
use state::{filter_rows, has_search, page_view, PageView, TableState};

pub type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// Column descriptor: header label, field key, optional custom renderer
pub struct Column<T> {
    pub header: &'static str,
    pub key: &'static str,
    pub render: Option<CellRenderer<T>>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            header: self.header,
            key: self.key,
            render: self.render.clone(),
        }
    }
}

impl<T> Column<T> {
    pub fn new(header: &'static str, key: &'static str) -> Self {
        Self {
            header,
            key,
            render: None,
        }
    }

    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&T) -> AnyView + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }
}

fn render_cell<T: TableRecord>(column: &Column<T>, row: &T) -> AnyView {
    match &column.render {
        Some(render) => render(row),
        None => row.value(column.key).to_string().into_any(),
    }
}

#[component]
pub fn DataTable<T>(
    /// Full in-memory collection
    #[prop(into)]
    rows: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    /// Field used by the search box; no box is rendered without it
    #[prop(optional)]
    search_field: Option<&'static str>,
    #[prop(optional)]
    on_row_click: Option<Callback<T>>,
) -> impl IntoView
where
    T: TableRecord + Clone + PartialEq + Send + Sync + 'static,
{
    let state = RwSignal::new(TableState::default());
    let column_count = columns.len();
    let columns = StoredValue::new(columns);

    let filtered = Memo::new(move |_| {
        let query = state.with(|s| s.query.clone());
        rows.with(|all| filter_rows(all, search_field, &query))
    });
    let view_state: Memo<PageView<T>> =
        Memo::new(move |_| filtered.with(|list| page_view(list, state.with(|s| s.page))));

    let go_to = move |page: usize| {
        let pages = view_state.with_untracked(|v| v.pages);
        state.update(|s| s.set_page(page, pages));
    };

    view! {
        <div class="data-table">
            {has_search(search_field).then(|| view! {
                <div class="data-table__search">
                    {icon("search")}
                    <input
                        type="text"
                        class="form__input"
                        placeholder="Pesquisar..."
                        prop:value=move || state.with(|s| s.query.clone())
                        on:input=move |ev| state.update(|s| s.set_query(event_target_value(&ev)))
                    />
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {columns.with_value(|cols| cols.iter().map(|col| view! {
                                <th class="table__header-cell">{col.header}</th>
                            }).collect_view())}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if view_state.with(|v| v.show_empty_row()) {
                                return view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--empty" colspan=column_count>
                                            "Nenhum resultado encontrado."
                                        </td>
                                    </tr>
                                }.into_any();
                            }
                            view_state.with(|v| v.rows.clone()).into_iter().map(|row| {
                                let cells = columns.with_value(|cols| {
                                    cols.iter().map(|col| view! {
                                        <td class="table__cell">{render_cell(col, &row)}</td>
                                    }).collect_view()
                                });
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--clickable=on_row_click.is_some()
                                        on:click=move |_| {
                                            if let Some(handler) = on_row_click {
                                                handler.run(row.clone());
                                            }
                                        }
                                    >
                                        {cells}
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || view_state.with(|v| v.show_footer())>
                <div class="data-table__footer">
                    <span class="data-table__summary">{move || view_state.with(|v| v.summary())}</span>
                    <div class="pagination-controls">
                        <button
                            class="pagination-btn"
                            title="Primeira página"
                            disabled=move || view_state.with(|v| v.is_first())
                            on:click=move |_| go_to(1)
                        >
                            {icon("chevrons-left")}
                        </button>
                        <button
                            class="pagination-btn"
                            title="Página anterior"
                            disabled=move || view_state.with(|v| v.is_first())
                            on:click=move |_| go_to(view_state.with_untracked(|v| v.prev_page()))
                        >
                            {icon("chevron-left")}
                        </button>
                        <span class="pagination-info">
                            {move || view_state.with(|v| v.position())}
                        </span>
                        <button
                            class="pagination-btn"
                            title="Próxima página"
                            disabled=move || view_state.with(|v| v.is_last())
                            on:click=move |_| go_to(view_state.with_untracked(|v| v.next_page()))
                        >
                            {icon("chevron-right")}
                        </button>
                        <button
                            class="pagination-btn"
                            title="Última página"
                            disabled=move || view_state.with(|v| v.is_last())
                            on:click=move |_| go_to(view_state.with_untracked(|v| v.pages))
                        >
                            {icon("chevrons-right")}
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
