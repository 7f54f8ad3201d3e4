use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::{
    domain::{forum::Post, text},
    presentation::{config::Styles, widgets::post_stats::PostStats},
};

/// Body lines shown before the text is cut with an ellipsis
pub const BODY_MAX_LINES: usize = 3;

/// Styles resolved once per frame and copied into every card
#[derive(Clone, Copy, Debug, Default)]
pub struct CardStyles {
    pub author: Style,
    pub category: Style,
    pub rewarded: Style,
    pub muted: Style,
    pub selected: Style,
}

impl CardStyles {
    pub fn from_styles(styles: &Styles) -> Self {
        Self {
            author: styles.get_or_default("author"),
            category: styles.get_or_default("category"),
            rewarded: styles.get_or_default("rewarded"),
            muted: styles.get_or_default("muted"),
            selected: styles.get_or_default("selected"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PostCard {
    pub post: Post,
    pub now: DateTime<Utc>,
    /// Key hint for the reward action, e.g. `r`
    pub reward_hint: Option<String>,
    pub styles: CardStyles,
    pub padding: Padding, // Only use to calc width/height
    pub highlight: bool,
}

impl PostCard {
    pub fn new(
        post: Post,
        now: DateTime<Utc>,
        reward_hint: Option<String>,
        styles: CardStyles,
        padding: Padding,
    ) -> Self {
        Self {
            post,
            now,
            reward_hint,
            styles,
            padding,
            highlight: false,
        }
    }

    pub fn relative_time(&self) -> String {
        text::format_relative_time(self.post.created_at, self.now)
    }

    fn shows_reward_hint(&self) -> bool {
        !self.post.rewarded && self.reward_hint.is_some()
    }

    fn body(&self, width: usize) -> String {
        text::truncate_text(&text::wrap_text(&self.post.body, width), BODY_MAX_LINES)
    }

    pub fn calculate_height(&self, area: &Rect) -> u16 {
        let width = area
            .width
            .saturating_sub(self.padding.left + self.padding.right);

        // header + title + stats + separator
        let mut fixed_lines = 4;
        if self.shows_reward_hint() {
            fixed_lines += 1;
        }

        let body: Text = self.body(width as usize).into();
        fixed_lines + body.height() as u16
    }

    fn header(&self) -> Line<'static> {
        let author_style = if self.highlight {
            self.styles.author.patch(self.styles.selected)
        } else {
            self.styles.author
        };
        let mut spans = vec![
            Span::styled(format!("[{}] ", self.post.author_initial()), author_style),
            Span::styled(self.post.author_name.clone(), author_style),
            Span::styled(format!(" · {} · ", self.relative_time()), self.styles.muted),
            Span::styled(self.post.category.to_string(), self.styles.category),
        ];
        if self.post.rewarded {
            spans.push(Span::raw(" "));
            spans.push(Span::styled("[Rewarded]", self.styles.rewarded));
        }
        Line::from(spans)
    }
}

impl Widget for PostCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut text = Text::from(self.header());

        text.extend(Text::from(Line::styled(
            self.post.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.extend(Text::from(self.body(area.width as usize)));
        text.extend::<Text>(
            PostStats::new(
                self.post.like_count,
                self.post.comment_count,
                self.post.reward_total,
            )
            .into(),
        );

        if let (false, Some(key)) = (self.post.rewarded, &self.reward_hint) {
            text.extend(Text::from(Line::styled(
                format!("Press {key} to reward this post"),
                self.styles.muted,
            )));
        }

        text.extend(Text::styled(
            "─".repeat(area.width as usize),
            self.styles.muted,
        ));

        Paragraph::new(text).render(area, buf);
    }
}
