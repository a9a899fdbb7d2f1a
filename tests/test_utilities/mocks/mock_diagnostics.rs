use yum_deps::prelude::*;

/// Mock DiagnosticsSink for testing that captures messages per level
#[derive(Default, Clone)]
pub struct MockDiagnostics {
    pub messages: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter_map(|m| m.strip_prefix("Warning: ").map(str::to_string))
            .collect()
    }

    pub fn failures(&self) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter_map(|m| m.strip_prefix("Failure: ").map(str::to_string))
            .collect()
    }
}

impl DiagnosticsSink for MockDiagnostics {
    fn debug(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Debug: {}", message));
    }

    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Warning: {}", message));
    }

    fn fail(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Failure: {}", message));
    }
}
