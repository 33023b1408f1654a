use blog_search_api_types::SearchResult;
use log::debug;
use std::time::Duration;

use crate::{
    config::{FailureDisplay, ResponseOrdering, SearchConfig},
    error::AppResult,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// What the results dropdown holds. Results keep the backend's order and are
/// capped only when rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PanelContent {
    #[default]
    Blank,
    Results {
        query: String,
        results: Vec<SearchResult>,
    },
    NoResults {
        query: String,
    },
    Failure,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Panel {
    visibility: Visibility,
    content: PanelContent,
}

impl Panel {
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    fn show(&mut self, content: PanelContent) {
        self.content = content;
        self.visibility = Visibility::Visible;
    }

    fn hide(&mut self) {
        self.visibility = Visibility::Hidden;
    }

    fn clear(&mut self) {
        self.content = PanelContent::Blank;
        self.visibility = Visibility::Hidden;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputAction {
    Cleared,
    /// Call [`SearchWidget::debounce_elapsed`] with `ticket` after `delay`,
    /// replacing any timer armed earlier.
    Debounce { ticket: DebounceTicket, delay: Duration },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub sequence: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Rendered,
    Stale,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Ignored,
    DismissAndBlur,
}

/// Everything the search box decides, without any timers, listeners or DOM
/// nodes. The component feeds it events and carries out what it returns.
#[derive(Clone, Debug)]
pub struct SearchWidget {
    config: SearchConfig,
    panel: Panel,
    debounce_generation: u64,
    pending: Option<String>,
    sequence: u64,
    // responses numbered below this are stale under LatestWins
    accept_from: u64,
}

impl SearchWidget {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            panel: Panel::default(),
            debounce_generation: 0,
            pending: None,
            sequence: 0,
            accept_from: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn input(&mut self, raw: &str) -> InputAction {
        self.debounce_generation += 1;
        let query = raw.trim();
        if query.is_empty() {
            self.pending = None;
            self.panel.clear();
            // nothing in flight may reopen the panel
            self.accept_from = self.sequence + 1;
            return InputAction::Cleared;
        }
        self.pending = Some(query.to_string());
        InputAction::Debounce {
            ticket: DebounceTicket(self.debounce_generation),
            delay: self.config.debounce(),
        }
    }

    /// Returns the request to send, or `None` when a later keystroke
    /// superseded `ticket`.
    pub fn debounce_elapsed(&mut self, ticket: DebounceTicket) -> Option<SearchRequest> {
        if ticket.0 != self.debounce_generation {
            return None;
        }
        let query = self.pending.take()?;
        self.sequence += 1;
        if self.config.ordering == ResponseOrdering::LatestWins {
            self.accept_from = self.sequence;
        }
        debug!("dispatching search #{} for {query:?}", self.sequence);
        Some(SearchRequest {
            query,
            sequence: self.sequence,
        })
    }

    pub fn complete(
        &mut self,
        request: &SearchRequest,
        outcome: AppResult<Vec<SearchResult>>,
    ) -> Completion {
        if self.config.ordering == ResponseOrdering::LatestWins
            && request.sequence < self.accept_from
        {
            debug!("dropping stale search #{}", request.sequence);
            return Completion::Stale;
        }
        match outcome {
            Ok(results) if results.is_empty() => {
                self.panel.show(PanelContent::NoResults {
                    query: request.query.clone(),
                });
                Completion::Rendered
            }
            Ok(results) => {
                self.panel.show(PanelContent::Results {
                    query: request.query.clone(),
                    results,
                });
                Completion::Rendered
            }
            Err(e) => {
                debug!("search #{} failed: {e}", request.sequence);
                if self.config.failure_display == FailureDisplay::Message {
                    self.panel.show(PanelContent::Failure);
                }
                Completion::Failed
            }
        }
    }

    /// Returns whether the click hid the panel.
    pub fn click(&mut self, inside_wrapper: bool) -> bool {
        if inside_wrapper || !self.panel.is_visible() {
            return false;
        }
        self.panel.hide();
        true
    }

    pub fn key_down(&mut self, key: &str) -> KeyAction {
        if key != "Escape" {
            return KeyAction::Ignored;
        }
        self.panel.hide();
        KeyAction::DismissAndBlur
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn post(slug: &str, title: &str) -> SearchResult {
        SearchResult {
            slug: slug.to_string(),
            title: title.to_string(),
            date_str: "2024年03月01日".to_string(),
            tags: vec!["rust".to_string()],
            summary: None,
        }
    }

    fn ticket(action: InputAction) -> DebounceTicket {
        match action {
            InputAction::Debounce { ticket, .. } => ticket,
            InputAction::Cleared => panic!("expected a debounce"),
        }
    }

    /// Types `query`, lets the timer fire and returns the request.
    fn dispatch(widget: &mut SearchWidget, query: &str) -> SearchRequest {
        let t = ticket(widget.input(query));
        widget.debounce_elapsed(t).unwrap()
    }

    fn shown_slugs(widget: &SearchWidget) -> Vec<String> {
        match widget.panel().content() {
            PanelContent::Results { results, .. } => results.iter().map(|r| r.slug.clone()).collect(),
            _ => vec![],
        }
    }

    #[test]
    fn starts_hidden_and_empty() {
        let widget = SearchWidget::new(SearchConfig::default());
        assert_eq!(widget.panel().visibility(), Visibility::Hidden);
        assert_eq!(widget.panel().content(), &PanelContent::Blank);
    }

    #[test]
    fn blank_input_clears_without_request() {
        let mut widget = SearchWidget::new(SearchConfig::default());
        let request = dispatch(&mut widget, "rust");
        widget.complete(&request, Ok(vec![post("a", "Rust")]));
        assert!(widget.panel().is_visible());

        let t = ticket(widget.input("ru"));
        assert_eq!(widget.input("   \t"), InputAction::Cleared);
        assert_eq!(widget.panel(), &Panel::default());
        // the timer armed before the clear must not fire a request
        assert_eq!(widget.debounce_elapsed(t), None);
    }

    #[test]
    fn debounce_uses_configured_delay() {
        let mut widget = SearchWidget::new(SearchConfig {
            debounce_ms: 120,
            ..SearchConfig::default()
        });
        match widget.input("r") {
            InputAction::Debounce { delay, .. } => assert_eq!(delay, Duration::from_millis(120)),
            InputAction::Cleared => panic!("expected a debounce"),
        }
    }

    #[test]
    fn rapid_typing_sends_only_the_last_query() {
        let mut widget = SearchWidget::new(SearchConfig::default());
        let tickets: Vec<_> = ["r", "ru", "rus", " rust "]
            .into_iter()
            .map(|value| ticket(widget.input(value)))
            .collect();
        let (last, earlier) = tickets.split_last().unwrap();
        for t in earlier {
            assert_eq!(widget.debounce_elapsed(*t), None);
        }
        let request = widget.debounce_elapsed(*last).unwrap();
        assert_eq!(request.query, "rust");
        assert_eq!(request.sequence, 1);
        // a timer can only fire once
        assert_eq!(widget.debounce_elapsed(*last), None);
    }

    #[test]
    fn empty_response_shows_no_results() {
        let mut widget = SearchWidget::new(SearchConfig::default());
        let request = dispatch(&mut widget, "<script>");
        assert_eq!(widget.complete(&request, Ok(vec![])), Completion::Rendered);
        assert!(widget.panel().is_visible());
        assert_eq!(
            widget.panel().content(),
            &PanelContent::NoResults {
                query: "<script>".to_string()
            }
        );
    }

    #[test]
    fn response_keeps_backend_order() {
        let mut widget = SearchWidget::new(SearchConfig::default());
        let request = dispatch(&mut widget, "post");
        let results: Vec<_> = (0..10).map(|i| post(&format!("p{i}"), "Post")).collect();
        widget.complete(&request, Ok(results));
        let expected: Vec<_> = (0..10).map(|i| format!("p{i}")).collect();
        assert_eq!(shown_slugs(&widget), expected);
    }

    #[test]
    fn latest_dispatch_wins() {
        let mut widget = SearchWidget::new(SearchConfig::default());
        let slow = dispatch(&mut widget, "ru");
        let fast = dispatch(&mut widget, "rust");
        assert_eq!(
            widget.complete(&fast, Ok(vec![post("new", "Rust 2024")])),
            Completion::Rendered
        );
        assert_eq!(
            widget.complete(&slow, Ok(vec![post("old", "Ruby")])),
            Completion::Stale
        );
        assert_eq!(shown_slugs(&widget), vec!["new".to_string()]);
    }

    #[test]
    fn arrival_order_lets_slow_responses_overwrite() {
        let mut widget = SearchWidget::new(SearchConfig {
            ordering: ResponseOrdering::Arrival,
            ..SearchConfig::default()
        });
        let slow = dispatch(&mut widget, "ru");
        let fast = dispatch(&mut widget, "rust");
        widget.complete(&fast, Ok(vec![post("new", "Rust 2024")]));
        assert_eq!(
            widget.complete(&slow, Ok(vec![post("old", "Ruby")])),
            Completion::Rendered
        );
        assert_eq!(shown_slugs(&widget), vec!["old".to_string()]);
    }

    #[test]
    fn response_after_clear_stays_hidden() {
        let mut widget = SearchWidget::new(SearchConfig::default());
        let request = dispatch(&mut widget, "rust");
        widget.input("");
        assert_eq!(
            widget.complete(&request, Ok(vec![post("a", "Rust")])),
            Completion::Stale
        );
        assert_eq!(widget.panel(), &Panel::default());
    }

    #[test]
    fn silent_failure_keeps_previous_panel() {
        let mut widget = SearchWidget::new(SearchConfig::default());
        let first = dispatch(&mut widget, "rust");
        widget.complete(&first, Ok(vec![post("a", "Rust")]));
        let before = widget.panel().clone();

        let second = dispatch(&mut widget, "rusty");
        assert_eq!(
            widget.complete(&second, Err(AppError::Status(503))),
            Completion::Failed
        );
        assert_eq!(widget.panel(), &before);
    }

    #[test]
    fn failure_message_when_enabled() {
        let mut widget = SearchWidget::new(SearchConfig {
            failure_display: FailureDisplay::Message,
            ..SearchConfig::default()
        });
        let request = dispatch(&mut widget, "rust");
        let malformed = serde_json::from_str::<Vec<SearchResult>>("<html>")
            .map_err(AppError::from);
        assert_eq!(widget.complete(&request, malformed), Completion::Failed);
        assert!(widget.panel().is_visible());
        assert_eq!(widget.panel().content(), &PanelContent::Failure);
    }

    #[test]
    fn outside_click_hides_inside_click_does_not() {
        let mut widget = SearchWidget::new(SearchConfig::default());
        let request = dispatch(&mut widget, "rust");
        widget.complete(&request, Ok(vec![post("a", "Rust")]));

        assert!(!widget.click(true));
        assert!(widget.panel().is_visible());

        assert!(widget.click(false));
        assert_eq!(widget.panel().visibility(), Visibility::Hidden);
        // content survives a dismissal
        assert_eq!(shown_slugs(&widget), vec!["a".to_string()]);
        assert!(!widget.click(false));
    }

    #[test]
    fn escape_dismisses_and_blurs() {
        let mut widget = SearchWidget::new(SearchConfig::default());
        assert_eq!(widget.key_down("Escape"), KeyAction::DismissAndBlur);

        let request = dispatch(&mut widget, "nothing");
        widget.complete(&request, Ok(vec![]));
        assert_eq!(widget.key_down("Enter"), KeyAction::Ignored);
        assert!(widget.panel().is_visible());
        assert_eq!(widget.key_down("Escape"), KeyAction::DismissAndBlur);
        assert!(!widget.panel().is_visible());
    }
}
