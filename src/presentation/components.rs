//! Component collection
//!
//! Components are stateless renderers that receive `AppState` during render.
//! `Components::render` lays out one frame.

use ratatui::prelude::*;

use crate::core::state::{ui::Section, AppState};

pub mod compose;
pub mod forum;
pub mod header;
pub mod home;
pub mod notifications;
pub mod profile;
pub mod status_bar;

pub use compose::ComposeComponent;
pub use forum::ForumComponent;
pub use header::HeaderComponent;
pub use home::HomeComponent;
pub use notifications::NotificationsComponent;
pub use profile::ProfileComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub header: HeaderComponent,
    pub home: HomeComponent,
    pub forum: ForumComponent,
    pub profile: ProfileComponent,
    pub compose: ComposeComponent,
    pub notifications: NotificationsComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        // [header (tabs + border), section, status line]
        let [header_area, main_area, status_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        self.header.view(state, frame, header_area);
        match state.ui.section {
            Section::Home => self.home.view(state, frame, main_area),
            Section::Forum => self.forum.view(state, frame, main_area),
            Section::Profile => self.profile.view(state, frame, main_area),
        }
        self.status_bar.view(state, frame, status_area);

        // Overlays
        self.compose.view(state, frame, main_area);
        self.notifications.view(state, frame, main_area);
    }
}

/// A `width` x `height` rect centered in `area`, clamped to it
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
pub(crate) mod test_support {
    use color_eyre::eyre::Result;
    use ratatui::{backend::TestBackend, Frame, Terminal};

    /// Draw once into a `TestBackend` and return the rows with trailing blanks trimmed
    pub fn render_view(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> Result<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height))?;
        terminal.draw(draw)?;
        let buffer = terminal.backend().buffer();
        Ok((0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
