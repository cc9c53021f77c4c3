//! Pure state of the data table: `{query, page}` → filtered list → page slice.

use crate::shared::list_utils::{matches_query, TableRecord};

pub const PAGE_SIZE: usize = 10;

/// Search query and current page (1-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub query: String,
    pub page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

impl TableState {
    /// Any query change returns to the first page
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Clamp into `[1, total_pages]`; with no pages the table stays on page 1
    pub fn set_page(&mut self, requested: usize, total_pages: usize) {
        self.page = requested.min(total_pages).max(1);
    }
}

pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// The search box exists only for a designated field
pub fn has_search(search_field: Option<&str>) -> bool {
    search_field.is_some()
}

/// Rows whose `search_field` contains `query` (case-insensitive).
/// An empty query or no search field keeps every row. Whitespace in the
/// query is part of the substring.
pub fn filter_rows<T>(rows: &[T], search_field: Option<&str>, query: &str) -> Vec<T>
where
    T: TableRecord + Clone,
{
    let query = query.to_lowercase();
    match search_field {
        Some(field) if !query.is_empty() => rows
            .iter()
            .filter(|row| matches_query(&row.value(field), &query))
            .cloned()
            .collect(),
        _ => rows.to_vec(),
    }
}

/// One visible page of the filtered list
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<T> {
    pub rows: Vec<T>,
    pub page: usize,
    pub pages: usize,
    pub total: usize,
    /// 1-based index of the first visible row (0 when empty)
    pub start: usize,
    pub end: usize,
}

impl<T> PageView<T> {
    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.pages
    }

    pub fn prev_page(&self) -> usize {
        self.page.saturating_sub(1)
    }

    pub fn next_page(&self) -> usize {
        self.page + 1
    }

    /// Single "no results" row in place of the body
    pub fn show_empty_row(&self) -> bool {
        self.rows.is_empty()
    }

    /// Pagination footer only when there is something to page through
    pub fn show_footer(&self) -> bool {
        self.pages > 1
    }

    pub fn position(&self) -> String {
        format!("{} / {}", self.page, self.pages)
    }

    /// Footer text, e.g. "Mostrando 11 a 20 de 25 resultados"
    pub fn summary(&self) -> String {
        format!(
            "Mostrando {} a {} de {} resultados",
            self.start, self.end, self.total
        )
    }
}

/// Slice for `page`. A page beyond the end (the list shrank after a refetch)
/// is clamped to the last one.
pub fn page_view<T: Clone>(filtered: &[T], page: usize) -> PageView<T> {
    let total = filtered.len();
    let pages = page_count(total);
    let page = page.min(pages).max(1);
    let from = (page - 1) * PAGE_SIZE;
    let to = (from + PAGE_SIZE).min(total);
    let rows = filtered.get(from..to).unwrap_or(&[]).to_vec();

    PageView {
        start: if rows.is_empty() { 0 } else { from + 1 },
        end: to,
        rows,
        page,
        pages,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::CellValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i32,
        name: String,
        active: bool,
    }

    impl TableRecord for Row {
        fn row_id(&self) -> i32 {
            self.id
        }

        fn value(&self, key: &str) -> CellValue {
            match key {
                "name" => CellValue::from(&self.name),
                "active" => CellValue::from(self.active),
                _ => CellValue::Empty,
            }
        }
    }

    fn rows(n: i32) -> Vec<Row> {
        (1..=n)
            .map(|id| Row {
                id,
                name: format!("Barco {id}"),
                active: id % 2 == 0,
            })
            .collect()
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(11), 2);
        assert_eq!(page_count(25), 3);
    }

    #[test]
    fn test_twenty_five_rows() {
        let all = rows(25);
        let mut state = TableState::default();
        state.set_page(3, page_count(all.len()));
        let view = page_view(&all, state.page);
        assert_eq!(view.pages, 3);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.rows.first().map(|r| r.id), Some(21));
        assert_eq!(view.rows.last().map(|r| r.id), Some(25));
        assert_eq!(view.summary(), "Mostrando 21 a 25 de 25 resultados");
        assert!(view.is_last());

        state.set_page(5, view.pages);
        assert_eq!(state.page, 3);
        state.set_page(0, view.pages);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_last_page_full_when_divisible() {
        let all = rows(20);
        let view = page_view(&all, 2);
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.start, 11);
    }

    #[test]
    fn test_empty_list_stays_on_page_one() {
        let mut state = TableState::default();
        state.set_page(4, page_count(0));
        assert_eq!(state.page, 1);
        let view = page_view::<Row>(&[], state.page);
        assert_eq!(view.pages, 0);
        assert!(view.rows.is_empty());
        assert_eq!(view.start, 0);
    }

    #[test]
    fn test_query_resets_page() {
        let mut state = TableState::default();
        state.set_page(3, 3);
        state.set_query("barco 1");
        assert_eq!(state.page, 1);
        assert_eq!(state.query, "barco 1");
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let all = rows(25);
        let found = filter_rows(&all, Some("name"), "BARCO 2");
        let ids: Vec<i32> = found.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 20, 21, 22, 23, 24, 25]);

        assert_eq!(filter_rows(&all, Some("name"), "").len(), 25);
        assert_eq!(filter_rows(&all, None, "barco 2").len(), 25);
        assert!(filter_rows(&all, Some("name"), "veleiro").is_empty());
    }

    #[test]
    fn test_query_whitespace_is_part_of_substring() {
        let all = vec![
            Row { id: 1, name: "Barco 1".into(), active: true },
            Row { id: 2, name: "Barco21".into(), active: true },
            Row { id: 3, name: "Lancha".into(), active: true },
        ];
        let ids = |q: &str| -> Vec<i32> {
            filter_rows(&all, Some("name"), q).iter().map(|r| r.id).collect()
        };
        assert_eq!(ids(" 1"), vec![1]);
        assert_eq!(ids("   "), Vec::<i32>::new());
        assert_eq!(ids(" "), vec![1]);
        assert_eq!(ids(""), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_box_only_with_field() {
        assert!(has_search(Some("name")));
        assert!(!has_search(None));
    }

    #[test]
    fn test_no_match_shows_single_empty_row() {
        let all = rows(25);
        let found = filter_rows(&all, Some("name"), "veleiro");
        let view = page_view(&found, 1);
        assert!(view.show_empty_row());
        assert!(!view.show_footer());

        let view = page_view(&all, 1);
        assert!(!view.show_empty_row());
    }

    #[test]
    fn test_footer_only_with_several_pages() {
        assert!(!page_view(&rows(10), 1).show_footer());
        assert!(page_view(&rows(11), 1).show_footer());
        assert!(!page_view::<Row>(&[], 1).show_footer());
    }

    #[test]
    fn test_navigation_bounds() {
        let all = rows(25);

        let first = page_view(&all, 1);
        assert!(first.is_first());
        assert!(!first.is_last());
        assert_eq!(first.position(), "1 / 3");
        assert_eq!(first.next_page(), 2);

        let middle = page_view(&all, 2);
        assert!(!middle.is_first());
        assert!(!middle.is_last());
        assert_eq!(middle.prev_page(), 1);

        let last = page_view(&all, 3);
        assert!(!last.is_first());
        assert!(last.is_last());

        // Buttons at the edges still clamp if clicked
        let mut state = TableState::default();
        state.set_page(first.prev_page(), first.pages);
        assert_eq!(state.page, 1);
        state.set_page(last.next_page(), last.pages);
        assert_eq!(state.page, 3);
    }

    #[test]
    fn test_falsy_field_excludes_row() {
        let all = rows(4);
        // `false` renders as "Não": a falsy value never matches
        assert!(filter_rows(&all, Some("active"), "não").is_empty());
        assert_eq!(filter_rows(&all, Some("active"), "sim").len(), 2);
        assert!(filter_rows(&all, Some("missing"), "a").is_empty());
    }

    #[test]
    fn test_shrunken_list_clamps_page() {
        let all = rows(12);
        let view = page_view(&all[..5], 2);
        assert_eq!(view.page, 1);
        assert_eq!(view.rows.len(), 5);
    }
}
