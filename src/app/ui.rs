use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::options_list::OptionsList;
use crate::components::search_box::SearchBox;
use crate::components::swatch_gallery::{SwatchGallery, Working};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

const MAX_VISIBLE_OPTIONS: u16 = 6;

pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    pub options: Rect,
    pub gallery: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect, option_count: usize) -> AppLayout {
    let option_rows = (option_count as u16).clamp(1, MAX_VISIBLE_OPTIONS);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // Header
            Constraint::Length(3),               // Search field
            Constraint::Length(option_rows + 2), // Options
            Constraint::Min(0),                  // Swatches
            Constraint::Length(1),               // Footer
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        search: chunks[1],
        options: chunks[2],
        gallery: chunks[3],
        footer: chunks[4],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let theme = app_state.theme.clone();
    let layout = get_layout(f.area(), app_state.search.options.len());

    f.render_widget(
        Header {
            state: app_state,
            theme: &theme,
        },
        layout.header,
    );

    f.render_widget(
        SearchBox {
            field: &mut app_state.search.field,
            theme: &theme,
        },
        layout.search,
    );

    let empty_message = app_state.search.empty_message();
    f.render_stateful_widget(
        OptionsList {
            options: &app_state.search.options,
            empty_message,
            theme: &theme,
        },
        layout.options,
        &mut app_state.search.list_state,
    );

    if app_state.working() {
        f.render_widget(
            Working {
                spinner: app_state.spinner(),
                theme: &theme,
            },
            layout.gallery,
        );
    } else {
        f.render_widget(
            SwatchGallery {
                palette: &app_state.selection.palette,
                theme: &theme,
            },
            layout.gallery,
        );
    }

    f.render_widget(
        Footer {
            state: app_state,
            theme: &theme,
        },
        layout.footer,
    );
}
