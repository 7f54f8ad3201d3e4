use ratatui::prelude::*;
use ratatui::widgets::{Tabs, Widget};

use crate::domain::forum::CategoryFilter;

/// Category filter tabs above the forum list
#[derive(Clone, Debug)]
pub struct FilterBarWidget {
    active: CategoryFilter,
    highlight: Style,
}

impl FilterBarWidget {
    pub fn new(active: CategoryFilter, highlight: Style) -> Self {
        Self { active, highlight }
    }

    pub fn titles(&self) -> Vec<String> {
        CategoryFilter::options()
            .iter()
            .map(CategoryFilter::label)
            .collect()
    }

    pub fn selected_index(&self) -> usize {
        CategoryFilter::options()
            .iter()
            .position(|f| *f == self.active)
            .unwrap_or(0)
    }
}

impl Widget for FilterBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let tabs = Tabs::new(self.titles())
            .select(self.selected_index())
            .highlight_style(self.highlight);

        tabs.render(area, buf);
    }
}
