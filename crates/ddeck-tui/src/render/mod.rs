//! Main render/view function (View in TEA pattern)


use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use ddeck_app::results::{raw_payload_text, ResultTab};
use ddeck_app::{AppState, View};

use crate::layout::{self, ScreenAreas};
use crate::widgets;

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let areas = layout::create(frame.area());

    frame.render_widget(
        widgets::MainHeader::new(state.view).authenticated(state.authenticated),
        areas.header,
    );
    frame.render_widget(
        widgets::StatsCards::new(&state.stats).loading(state.history_loading),
        areas.stats,
    );
    render_history(frame, &areas, state);

    match state.view {
        View::Create => {
            frame.render_widget(
                widgets::DesignFormView::new(&state.form, &state.lifecycle),
                areas.content,
            );
        }
        View::Results => render_results(frame, areas.content, state),
    }
}

fn render_history(frame: &mut Frame, areas: &ScreenAreas, state: &AppState) {
    if areas.history.width == 0 {
        return;
    }
    let viewing = state.selected.as_ref().map(|d| d.id.as_str());
    frame.render_widget(
        widgets::HistoryList::new(&state.history, state.history_cursor)
            .loading(state.history_loading)
            .error(state.history_error.as_deref())
            .viewing(viewing),
        areas.history,
    );
}

fn render_results(frame: &mut Frame, area: Rect, state: &AppState) {
    // Results view is entered only with a selection; render nothing
    // otherwise rather than panicking on a transient state.
    let Some(design) = &state.selected else {
        return;
    };

    let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).split(area);
    let result_view = &state.result_view;

    frame.render_widget(
        widgets::ResultTabsBar::new(result_view.tab, result_view.availability),
        rows[0],
    );

    match result_view.tab {
        ResultTab::Diagram => frame.render_widget(
            widgets::DiagramView::new(&result_view.diagrams, result_view.scroll),
            rows[1],
        ),
        ResultTab::Details => frame.render_widget(
            widgets::DetailsView::new(design, &result_view.sections, result_view.scroll),
            rows[1],
        ),
        ResultTab::Raw => {
            let text = raw_payload_text(design);
            frame.render_widget(widgets::RawView::new(&text, result_view.scroll), rows[1]);
        }
    }
}
