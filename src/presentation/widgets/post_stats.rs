use ratatui::prelude::*;
use thousands::Separable;

use crate::domain::forum::TOKEN_SYMBOL;

/// Engagement line of a post card
pub struct PostStats {
    likes: u32,
    comments: u32,
    reward_total: u64,
}

impl PostStats {
    pub fn new(likes: u32, comments: u32, reward_total: u64) -> Self {
        Self {
            likes,
            comments,
            reward_total,
        }
    }
}

impl From<PostStats> for Text<'_> {
    fn from(value: PostStats) -> Self {
        let mut spans = vec![
            Span::styled(
                format!("{} Likes", value.likes.separate_with_commas()),
                Style::default().fg(Color::LightRed),
            ),
            Span::raw(" "),
            Span::styled(
                format!("{} Comments", value.comments.separate_with_commas()),
                Style::default().fg(Color::LightBlue),
            ),
        ];
        if value.reward_total > 0 {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!(
                    "{} {TOKEN_SYMBOL}",
                    value.reward_total.separate_with_commas()
                ),
                Style::default().fg(Color::LightYellow),
            ));
        }
        Line::from(spans).into()
    }
}
