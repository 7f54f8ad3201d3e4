//! Compose component
//!
//! Modal form for a new post. The text areas are rebuilt from the
//! `ComposeForm` snapshot on every frame.

use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;
use tui_textarea::{CursorMove, TextArea};

use crate::{
    core::state::{
        task::TaskKind,
        ui::{ComposeField, ComposeForm, TextAreaState},
        AppState,
    },
    domain::forum::Category,
    presentation::components::centered_rect,
};

const MODAL_WIDTH: u16 = 70;
const MODAL_HEIGHT: u16 = 18;

#[derive(Debug, Clone, Default)]
pub struct ComposeComponent;

impl ComposeComponent {
    pub fn new() -> Self {
        Self
    }

    fn text_area<'a>(
        snapshot: &TextAreaState,
        title: &'a str,
        focused: bool,
        focus_style: Style,
    ) -> TextArea<'a> {
        let mut textarea = TextArea::from(snapshot.content.lines());
        textarea.move_cursor(CursorMove::Jump(
            snapshot.cursor_position.line as u16,
            snapshot.cursor_position.column as u16,
        ));
        let mut block = Block::bordered().title(title);
        if focused {
            block = block.border_style(focus_style);
        } else {
            textarea.set_cursor_style(Style::default());
        }
        textarea.set_cursor_line_style(Style::default());
        textarea.set_block(block);
        textarea
    }

    /// Category choices with the current one bracketed, e.g. `general [technology] ...`
    pub fn category_line(form: &ComposeForm) -> String {
        Category::iter()
            .map(|c| {
                if c == form.category {
                    format!("[{c}]")
                } else {
                    c.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(form) = &state.ui.compose else {
            return;
        };
        let styles = &state.config.config.styles;
        let focus_style = styles.get_or_default("nav_active");

        let modal = centered_rect(area, MODAL_WIDTH, MODAL_HEIGHT);
        frame.render_widget(Clear, modal);

        let submitting = state.tasks.is_pending(TaskKind::CreatePost);
        let title = if submitting {
            "New post (submitting...)"
        } else {
            "New post: ctrl-p to publish, tab to switch field, esc to close"
        };
        let block = Block::bordered()
            .title(title)
            .border_style(styles.get_or_default("title"));
        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        let [title_area, body_area, category_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .areas(inner);

        let title_input = Self::text_area(
            &form.title,
            "Title",
            form.focus == ComposeField::Title,
            focus_style,
        );
        frame.render_widget(&title_input, title_area);

        let body_input = Self::text_area(
            &form.body,
            "Body",
            form.focus == ComposeField::Body,
            focus_style,
        );
        frame.render_widget(&body_input, body_area);

        let mut category_block = Block::bordered().title("Category (left/right)");
        if form.focus == ComposeField::Category {
            category_block = category_block.border_style(focus_style);
        }
        frame.render_widget(
            Paragraph::new(Self::category_line(form))
                .style(styles.get_or_default("category"))
                .block(category_block),
            category_area,
        );
    }
}
