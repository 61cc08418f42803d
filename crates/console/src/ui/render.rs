use analysis::client::MAX_INPUT_CHARS;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};

use crate::app::{AppState, Phase, ViewMode};

use super::format::format_verdict_text;
use super::text::wrap_text_lines;
use super::theme::{Theme, ValueStyle};

pub(crate) fn draw_ui(frame: &mut ratatui::Frame, app: &mut AppState) {
    if app.view_mode == ViewMode::ResultFullscreen {
        draw_result_fullscreen(frame, app);
        return;
    }

    let theme = Theme::dark();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let mut header_spans = vec![Span::styled(
        "Analyze electoral news for misinformation",
        theme.value_style(ValueStyle::Normal),
    )];
    if let Some(language) = app.input_language() {
        header_spans.push(Span::styled("   Detected: ", theme.key_style()));
        header_spans.push(Span::styled(language, theme.accent_style()));
    }
    let header = Paragraph::new(Line::from(header_spans)).block(theme.block("Veritas"));
    frame.render_widget(header, chunks[0]);

    let input_title = format!("News text ({}/{} characters)", app.input_chars(), MAX_INPUT_CHARS);
    let input_block = theme.block(&input_title);
    let input_inner = input_block.inner(chunks[1]);
    let mut input_lines = wrap_text_lines(&app.input, input_inner.width.max(1) as usize);
    if let Some(last) = input_lines.last_mut() {
        last.push('▏');
    }
    let visible = input_inner.height.max(1) as usize;
    let skip = input_lines.len().saturating_sub(visible);
    let input_widget = Paragraph::new(input_lines[skip..].join("\n"))
        .block(input_block)
        .style(theme.value_style(ValueStyle::Normal));
    frame.render_widget(input_widget, chunks[1]);

    let result_title = match app.phase {
        Phase::Done(_) => "Analysis Result",
        _ => "Status",
    };
    let result_block = theme.block(result_title);
    let result_inner = result_block.inner(chunks[2]);
    let result_widget = match &app.phase {
        Phase::Idle => Paragraph::new(vec![
            Line::styled(
                "Paste or type the news text above.",
                theme.value_style(ValueStyle::Dim),
            ),
            Line::styled(
                "Ctrl+S submits it to the analysis service.",
                theme.value_style(ValueStyle::Dim),
            ),
        ]),
        Phase::Loading => {
            let language = analysis::language::detect_language(&app.input);
            Paragraph::new(vec![
                Line::styled("Analyzing with AI...", theme.accent_style()),
                Line::styled(
                    format!("Processing in {language}... this may take a few seconds"),
                    theme.value_style(ValueStyle::Dim),
                ),
            ])
        }
        Phase::Error(message) => Paragraph::new(Line::styled(message.clone(), theme.error_style())),
        Phase::Done(result) => {
            Paragraph::new(format_verdict_text(&theme, result, result_inner.width))
        }
    };
    let result_widget = result_widget
        .block(result_block)
        .style(theme.value_style(ValueStyle::Normal))
        .wrap(Wrap { trim: false });
    frame.render_widget(Clear, chunks[2]);
    frame.render_widget(result_widget, chunks[2]);

    let mut footer_spans = vec![Span::styled(
        "Ctrl+S=analyze  Ctrl+L=clear  Ctrl+R=result  Ctrl+Q=quit  ",
        theme.help_style(),
    )];
    if app.confirm_quit {
        footer_spans.push(Span::styled(
            "Ctrl+Q again to exit / Esc to cancel  ",
            theme.warn_style(),
        ));
    }
    let footer = Paragraph::new(Line::from(footer_spans)).block(theme.block("Controls"));
    frame.render_widget(footer, chunks[3]);
}

fn draw_result_fullscreen(frame: &mut ratatui::Frame, app: &mut AppState) {
    let theme = Theme::dark();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(frame.area());

    let result_block = theme.block("Analysis Result (fullscreen)");
    let inner = result_block.inner(chunks[0]);
    let text = match app.result() {
        Some(result) => format_verdict_text(&theme, result, inner.width),
        None => ratatui::text::Text::from("no result yet"),
    };
    app.set_result_metrics(text.lines.len(), inner.height);

    let result_panel = Paragraph::new(text)
        .block(result_block)
        .style(theme.value_style(ValueStyle::Normal))
        .scroll((app.result_scroll as u16, 0));
    frame.render_widget(result_panel, chunks[0]);

    let mut footer_spans = vec![Span::styled(
        "j/k=scroll  gg/G=top/bottom  Ctrl+f/b=page  Esc=back  Ctrl+Q=quit  ",
        theme.help_style(),
    )];
    if app.confirm_quit {
        footer_spans.push(Span::styled(
            "Ctrl+Q again to exit / Esc to cancel  ",
            theme.warn_style(),
        ));
    }
    footer_spans.push(Span::styled(
        format!(
            "line {}/{}",
            app.result_scroll.saturating_add(1),
            app.result_total_lines
        ),
        theme.accent_style(),
    ));
    let footer = Paragraph::new(Line::from(footer_spans)).block(theme.block("Controls"));
    frame.render_widget(footer, chunks[1]);
}
