use analysis::status::{ConfidenceTier, StatusTier};
use ratatui::style::{Color, Modifier, Style};

#[derive(Clone, Copy)]
pub(crate) enum ValueStyle {
    Normal,
    Important,
    Dim,
}

pub(crate) struct Theme {
    border: Color,
    title: Color,
    text: Color,
    dim: Color,
    accent: Color,
    warn: Color,
    ok: Color,
    info: Color,
    error: Color,
}

impl Theme {
    pub(crate) fn dark() -> Self {
        Self {
            border: Color::DarkGray,
            title: Color::Blue,
            text: Color::White,
            dim: Color::Gray,
            accent: Color::Cyan,
            warn: Color::Yellow,
            ok: Color::Green,
            info: Color::Blue,
            error: Color::Red,
        }
    }

    pub(crate) fn block<'a>(&self, title: &'a str) -> ratatui::widgets::Block<'a> {
        ratatui::widgets::Block::default()
            .title(ratatui::text::Span::styled(
                title,
                Style::default()
                    .fg(self.title)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(ratatui::widgets::Borders::ALL)
            .border_style(Style::default().fg(self.border))
    }

    pub(crate) fn help_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub(crate) fn key_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub(crate) fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn warn_style(&self) -> Style {
        Style::default().fg(self.warn).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn value_style(&self, level: ValueStyle) -> Style {
        match level {
            ValueStyle::Normal => Style::default().fg(self.text),
            ValueStyle::Important => Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD),
            ValueStyle::Dim => Style::default().fg(self.dim),
        }
    }

    /// Badge color for a verification status tier.
    pub(crate) fn tier_style(&self, tier: StatusTier) -> Style {
        let color = match tier {
            StatusTier::Ok => self.ok,
            StatusTier::Warn => self.warn,
            StatusTier::Info => self.info,
            StatusTier::Bad => self.error,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn confidence_style(&self, tier: ConfidenceTier) -> Style {
        let color = match tier {
            ConfidenceTier::High => self.ok,
            ConfidenceTier::Medium => self.warn,
            ConfidenceTier::Low => self.error,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}
