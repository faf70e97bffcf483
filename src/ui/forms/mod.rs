//! The prompt form: selectors, text areas and the Copy Prompt button

mod field_renderer;

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::FieldName;
use field_renderer::draw_field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Label of the copy button
pub const COPY_BUTTON_LABEL: &str = "Copy Prompt";

fn field_constraint(field: FieldName) -> Constraint {
    match field {
        FieldName::DiagramType | FieldName::DetailLevel => Constraint::Length(3),
        FieldName::Selection => Constraint::Min(5),
        FieldName::Notes => Constraint::Min(4),
    }
}

/// Draw the prompt form
pub fn draw_prompt_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Prompt ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let constraints: Vec<Constraint> = FieldName::ALL
        .iter()
        .map(|field| field_constraint(*field))
        .chain([Constraint::Length(BUTTON_HEIGHT)])
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    for (idx, field) in FieldName::ALL.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            *field,
            &form.values,
            form.active_field_index == idx,
        );
    }

    let button_area = chunks[FieldName::ALL.len()];
    let button_width = (COPY_BUTTON_LABEL.chars().count() as u16 + 4).min(button_area.width);
    render_button(
        frame,
        Rect {
            width: button_width,
            ..button_area
        },
        COPY_BUTTON_LABEL,
        form.is_copy_button_active(),
    );
}
