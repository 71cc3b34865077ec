use std::sync::Arc;

use services::QuestionBankService;

pub trait UiApp: Send + Sync {
    fn bank_service(&self) -> Arc<QuestionBankService>;

    /// Where the bank is read from, for log lines.
    fn bank_source(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    bank_service: Arc<QuestionBankService>,
    bank_source: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            bank_service: app.bank_service(),
            bank_source: app.bank_source(),
        }
    }

    #[must_use]
    pub fn bank_service(&self) -> Arc<QuestionBankService> {
        Arc::clone(&self.bank_service)
    }

    #[must_use]
    pub fn bank_source(&self) -> &str {
        &self.bank_source
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
