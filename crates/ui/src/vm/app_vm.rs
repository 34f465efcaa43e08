use quiz_core::model::{ArticleUrl, QuizDocument, QuizHistorySummary, QuizId, Theme};
use quiz_core::{AnswerOutcome, QuizSession};
use services::QuizApiError;
use tracing::debug;

//
// ─── REQUESTS ──────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    Generate,
    History,
    SelectQuiz,
}

/// Handle for the single gateway request allowed in flight.
///
/// Results are only applied when they come back with the ticket that is still
/// current; anything else is stale and dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    id: u64,
    kind: RequestKind,
}

impl RequestTicket {
    #[must_use]
    pub fn kind(&self) -> RequestKind {
        self.kind
    }
}

//
// ─── ACTIVE QUIZ ───────────────────────────────────────────────────────────────
//

/// The loaded document and the session scored against it.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveQuiz {
    document: QuizDocument,
    session: QuizSession,
}

impl ActiveQuiz {
    #[must_use]
    pub fn new(document: QuizDocument) -> Self {
        let session = QuizSession::new(&document.questions);
        Self { document, session }
    }

    #[must_use]
    pub fn document(&self) -> &QuizDocument {
        &self.document
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }
}

//
// ─── APP STATE ─────────────────────────────────────────────────────────────────
//

/// Application-level state shared by every tab.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppVm {
    active: Option<ActiveQuiz>,
    in_flight: Option<RequestTicket>,
    next_request_id: u64,
    generate_error: Option<String>,
    history: Vec<QuizHistorySummary>,
    history_error: Option<String>,
    theme: Theme,
    url_input: String,
}

impl AppVm {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn in_flight_kind(&self) -> Option<RequestKind> {
        self.in_flight.map(|ticket| ticket.kind)
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveQuiz> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn generate_error(&self) -> Option<&str> {
        self.generate_error.as_deref()
    }

    #[must_use]
    pub fn history(&self) -> &[QuizHistorySummary] {
        &self.history
    }

    #[must_use]
    pub fn history_error(&self) -> Option<&str> {
        self.history_error.as_deref()
    }

    /// Draft text of the URL field; kept here so it survives tab switches.
    #[must_use]
    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn set_url_input(&mut self, value: String) {
        self.url_input = value;
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Replace the active document; always starts a fresh session.
    pub fn load_document(&mut self, document: QuizDocument) {
        self.active = Some(ActiveQuiz::new(document));
    }

    /// Validate the URL and start a generation request.
    ///
    /// Returns `None` while another request is in flight or when the URL is
    /// rejected (the reason is stored as the generate error).
    pub fn begin_generate(&mut self, raw_url: &str) -> Option<(RequestTicket, ArticleUrl)> {
        if self.is_loading() {
            return None;
        }
        let url = match ArticleUrl::parse(raw_url) {
            Ok(url) => url,
            Err(err) => {
                self.generate_error = Some(err.to_string());
                return None;
            }
        };
        let ticket = self.begin(RequestKind::Generate)?;
        self.generate_error = None;
        self.active = None;
        Some((ticket, url))
    }

    /// Apply a generation result. Returns `true` when a new document was loaded;
    /// the URL field is cleared in that case only.
    pub fn finish_generate(
        &mut self,
        ticket: RequestTicket,
        result: Result<QuizDocument, QuizApiError>,
    ) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        match result {
            Ok(document) => {
                self.load_document(document);
                self.url_input.clear();
                true
            }
            Err(err) => {
                self.generate_error = Some(format!(
                    "Failed to generate quiz: {err}. Check that the quiz backend is reachable."
                ));
                false
            }
        }
    }

    pub fn begin_history_refresh(&mut self) -> Option<RequestTicket> {
        let ticket = self.begin(RequestKind::History)?;
        self.history_error = None;
        Some(ticket)
    }

    /// Apply a history listing. Returns `true` when the list was replaced.
    pub fn finish_history(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<QuizHistorySummary>, QuizApiError>,
    ) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        match result {
            Ok(items) => {
                self.history = items;
                true
            }
            Err(err) => {
                self.history_error = Some(format!("Error fetching history: {err}"));
                false
            }
        }
    }

    pub fn begin_select_quiz(&mut self) -> Option<RequestTicket> {
        let ticket = self.begin(RequestKind::SelectQuiz)?;
        self.active = None;
        self.history_error = None;
        Some(ticket)
    }

    /// Apply a stored quiz. Returns `true` when it became the active document,
    /// which is the cue to switch to the quiz tab.
    pub fn finish_select_quiz(
        &mut self,
        ticket: RequestTicket,
        id: QuizId,
        result: Result<QuizDocument, QuizApiError>,
    ) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        match result {
            Ok(document) => {
                self.load_document(document);
                true
            }
            Err(err) => {
                self.history_error = Some(format!("Error fetching quiz {id}: {err}"));
                false
            }
        }
    }

    /// Forward a click on an option to the active session.
    pub fn select_answer(&mut self, index: usize, option: &str) -> Option<AnswerOutcome> {
        let active = self.active.as_mut()?;
        match active.session.select_answer(index, option) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                debug!(error = %err, "ignoring answer for unknown question");
                None
            }
        }
    }

    pub fn toggle_reveal(&mut self, index: usize) -> Option<bool> {
        let active = self.active.as_mut()?;
        match active.session.toggle_reveal(index) {
            Ok(revealed) => Some(revealed),
            Err(err) => {
                debug!(error = %err, "ignoring reveal for unknown question");
                None
            }
        }
    }

    fn begin(&mut self, kind: RequestKind) -> Option<RequestTicket> {
        if self.is_loading() {
            return None;
        }
        self.next_request_id = self.next_request_id.wrapping_add(1);
        let ticket = RequestTicket {
            id: self.next_request_id,
            kind,
        };
        self.in_flight = Some(ticket);
        Some(ticket)
    }

    fn settle(&mut self, ticket: RequestTicket) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
            true
        } else {
            debug!(?ticket, "dropping stale gateway response");
            false
        }
    }
}
