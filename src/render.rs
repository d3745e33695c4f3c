use crate::data_models::SearchResult;
use crate::form::Dropdown;
use crate::session::SearchPage;

pub const EMPTY_PLACEHOLDER: &str = "No results yet—try a search!";
pub const DATE_RANGE_PROMPT: &str = "Select date range";

#[derive(Debug, PartialEq, Eq)]
pub enum ResultsView<'a> {
    Cards(&'a [SearchResult]),
    Placeholder,
    /// Loading with nothing to show yet.
    Blank,
}

pub fn results_view(page: &SearchPage) -> ResultsView<'_> {
    let results = page.results();
    if !results.is_empty() {
        ResultsView::Cards(results)
    } else if page.is_loading() {
        ResultsView::Blank
    } else {
        ResultsView::Placeholder
    }
}

pub fn button_label(page: &SearchPage) -> &'static str {
    if page.is_loading() {
        "Searching..."
    } else {
        "Search Services"
    }
}

pub fn render_card(result: &SearchResult) -> String {
    format!(
        "{}\nService: {} • Location: {} • Price: {}\n{}\n",
        result.title, result.service, result.location, result.price, result.description
    )
}

/// Renders the results area only.
pub fn render_results(page: &SearchPage) -> String {
    match results_view(page) {
        ResultsView::Cards(results) => results
            .iter()
            .map(render_card)
            .collect::<Vec<_>>()
            .join("\n"),
        ResultsView::Placeholder => format!("{EMPTY_PLACEHOLDER}\n"),
        ResultsView::Blank => String::new(),
    }
}

/// Renders filters, the search button and the results area.
pub fn render_page(page: &SearchPage) -> String {
    let mut out = String::new();
    for dropdown in Dropdown::ALL {
        let arrow = if page.form.is_open(dropdown) { "▲" } else { "▼" };
        out.push_str(&format!(
            "{}: {} {}\n",
            dropdown.title(),
            page.form.label(dropdown),
            arrow
        ));
        if page.form.is_open(dropdown) {
            for option in dropdown.options() {
                out.push_str(&format!("  - {option}\n"));
            }
        }
    }

    let date_range = &page.form.criteria().date_range;
    let date_label: &str = if date_range.is_empty() {
        DATE_RANGE_PROMPT
    } else {
        date_range
    };
    out.push_str(&format!("Date Range: {date_label}\n"));
    out.push_str(&format!("[ {} ]\n\n", button_label(page)));
    out.push_str(&render_results(page));
    out
}
