use analysis::client::MAX_INPUT_CHARS;
use analysis::language::detect_language;
use analysis::AnalysisResult;

/// Input length at which the language annotation appears.
const LANGUAGE_HINT_MIN_CHARS: usize = 20;

/// Submission lifecycle. The phases are mutually exclusive and there is at
/// most one request in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum Phase {
    #[default]
    Idle,
    Loading,
    Error(String),
    Done(Box<AnalysisResult>),
}

pub(crate) enum UiEvent {
    Verdict(Box<AnalysisResult>),
    Failed(String),
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub(crate) enum ViewMode {
    #[default]
    Form,
    ResultFullscreen,
}

#[derive(Default)]
pub(crate) struct AppState {
    pub(crate) input: String,
    pub(crate) phase: Phase,
    pub(crate) view_mode: ViewMode,
    pub(crate) result_scroll: usize,
    pub(crate) result_max_scroll: usize,
    pub(crate) result_total_lines: usize,
    pub(crate) result_view_height: u16,
    pub(crate) pending_g: bool,
    pub(crate) confirm_quit: bool,
}

impl AppState {
    pub(crate) fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Verdict(result) => {
                self.phase = Phase::Done(result);
                self.result_scroll = 0;
                self.pending_g = false;
            }
            UiEvent::Failed(message) => {
                self.phase = Phase::Error(message);
            }
        }
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub(crate) fn result(&self) -> Option<&AnalysisResult> {
        match &self.phase {
            Phase::Done(result) => Some(result),
            _ => None,
        }
    }

    pub(crate) fn clear_form(&mut self) {
        if self.is_loading() {
            return;
        }
        self.input.clear();
        self.phase = Phase::Idle;
        self.view_mode = ViewMode::Form;
        self.result_scroll = 0;
        self.pending_g = false;
    }

    pub(crate) fn push_char(&mut self, ch: char) {
        if self.input_chars() < MAX_INPUT_CHARS {
            self.input.push(ch);
        }
    }

    pub(crate) fn pop_char(&mut self) {
        self.input.pop();
    }

    pub(crate) fn input_chars(&self) -> usize {
        self.input.chars().count()
    }

    /// Live language annotation, shown once there is enough text to guess.
    pub(crate) fn input_language(&self) -> Option<&'static str> {
        if self.input_chars() > LANGUAGE_HINT_MIN_CHARS {
            Some(detect_language(&self.input))
        } else {
            None
        }
    }

    pub(crate) fn enter_result_fullscreen(&mut self) {
        if self.result().is_none() {
            return;
        }
        self.view_mode = ViewMode::ResultFullscreen;
        self.result_scroll = 0;
        self.pending_g = false;
        self.confirm_quit = false;
    }

    pub(crate) fn exit_result_fullscreen(&mut self) {
        self.view_mode = ViewMode::Form;
        self.pending_g = false;
    }

    pub(crate) fn set_result_metrics(&mut self, total_lines: usize, view_height: u16) {
        let total_lines = total_lines.max(1);
        self.result_total_lines = total_lines;
        self.result_view_height = view_height;
        self.result_max_scroll = total_lines.saturating_sub(view_height as usize);
        if self.result_scroll > self.result_max_scroll {
            self.result_scroll = self.result_max_scroll;
        }
    }

    pub(crate) fn scroll_down(&mut self, lines: usize) {
        self.result_scroll = (self.result_scroll + lines).min(self.result_max_scroll);
        self.pending_g = false;
    }

    pub(crate) fn scroll_up(&mut self, lines: usize) {
        self.result_scroll = self.result_scroll.saturating_sub(lines);
        self.pending_g = false;
    }

    pub(crate) fn scroll_to_top(&mut self) {
        self.result_scroll = 0;
        self.pending_g = false;
    }

    pub(crate) fn scroll_to_bottom(&mut self) {
        self.result_scroll = self.result_max_scroll;
        self.pending_g = false;
    }

    pub(crate) fn page_size(&self) -> usize {
        let height = self.result_view_height.max(1) as usize;
        height.saturating_sub(1).max(1)
    }

    pub(crate) fn half_page_size(&self) -> usize {
        let height = self.result_view_height.max(1) as usize;
        (height / 2).max(1)
    }
}
