use crate::{
    client::{
        api::PhysicsApi,
        render,
        storage::{ApiKeyStore, KeyValueStore},
        ClientError, ClientResult,
    },
    constants::sample_questions::SAMPLE_QUESTIONS,
    models::dto::{request::GeneratePhysicsRequest, response::GeneratePhysicsResponse},
};

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading {
        question: String,
    },
    Success {
        question: String,
        response: GeneratePhysicsResponse,
    },
    Error {
        message: String,
    },
}

/// Where the sample-question list is shown for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplePlacement {
    InForm,
    BelowResult,
}

/// Identifies one submission. Only the latest ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct Submission {
    pub ticket: Ticket,
    pub request: GeneratePhysicsRequest,
}

/// Form state for one user: the current view, the stored provider key,
/// the settings panel and the question prefilled from the sample list.
pub struct Session<S: KeyValueStore> {
    state: ViewState,
    generation: u64,
    keys: ApiKeyStore<S>,
    api_key: Option<String>,
    settings_open: bool,
    selected_question: String,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        let keys = ApiKeyStore::new(store);
        let api_key = keys.load();
        Self {
            state: ViewState::Idle,
            generation: 0,
            keys,
            api_key,
            settings_open: false,
            selected_question: String::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn set_settings_open(&mut self, open: bool) {
        self.settings_open = open;
    }

    pub fn selected_question(&self) -> &str {
        &self.selected_question
    }

    pub fn is_form_enabled(&self) -> bool {
        !matches!(self.state, ViewState::Loading { .. })
    }

    pub fn sample_placement(&self) -> SamplePlacement {
        match self.state {
            ViewState::Success { .. } => SamplePlacement::BelowResult,
            _ => SamplePlacement::InForm,
        }
    }

    /// Starts a submission. Blank questions are ignored. A submission made
    /// while another is in flight supersedes it.
    pub fn begin(&mut self, question: &str) -> Option<Submission> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }

        self.generation += 1;
        self.state = ViewState::Loading {
            question: question.to_string(),
        };

        let mut request = GeneratePhysicsRequest::new(question);
        if let Some(key) = &self.api_key {
            request = request.with_api_key(key.clone());
        }

        Some(Submission {
            ticket: Ticket(self.generation),
            request,
        })
    }

    /// Applies the outcome of a submission. Returns `false` when the ticket
    /// is stale and the outcome was discarded.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: ClientResult<GeneratePhysicsResponse>,
    ) -> bool {
        if ticket.0 != self.generation {
            log::debug!(
                "Discarding response for submission {} (current is {})",
                ticket.0,
                self.generation
            );
            return false;
        }

        let question = match &self.state {
            ViewState::Loading { question } => question.clone(),
            _ => return false,
        };

        self.state = match outcome {
            Ok(response) => ViewState::Success { question, response },
            Err(err) => {
                let message = err.to_string();
                if mentions_api_key(&message) {
                    self.settings_open = true;
                }
                ViewState::Error { message }
            }
        };
        true
    }

    pub async fn submit<A: PhysicsApi + ?Sized>(
        &mut self,
        api: &A,
        question: &str,
    ) -> Option<&ViewState> {
        let submission = self.begin(question)?;
        let outcome = api.generate(submission.request).await;
        self.complete(submission.ticket, outcome);
        Some(&self.state)
    }

    /// Back to the empty form. Any in-flight submission becomes stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = ViewState::Idle;
    }

    pub fn select_sample(&mut self, index: usize) -> Option<&str> {
        let question = SAMPLE_QUESTIONS.get(index)?;
        self.selected_question = question.to_string();
        Some(&self.selected_question)
    }

    pub fn set_selected_question(&mut self, question: impl Into<String>) {
        self.selected_question = question.into();
    }

    /// Saving an empty value clears the stored key.
    pub fn save_api_key(&mut self, api_key: &str) -> Result<(), ClientError> {
        self.keys.save(api_key)?;
        self.api_key = self.keys.load();
        Ok(())
    }

    pub fn clear_api_key(&mut self) -> Result<(), ClientError> {
        self.keys.clear()?;
        self.api_key = None;
        Ok(())
    }

    /// Iframe `srcdoc` for the current result.
    pub fn src_doc(&self) -> Option<String> {
        match &self.state {
            ViewState::Success { response, .. } => {
                Some(render::frame_document(&response.result.code))
            }
            _ => None,
        }
    }

    pub fn preview(&self) -> Option<String> {
        match &self.state {
            ViewState::Success { question, response } => {
                Some(render::preview_page(question, &response.result))
            }
            _ => None,
        }
    }
}

fn mentions_api_key(message: &str) -> bool {
    message.to_lowercase().contains("api key")
}
