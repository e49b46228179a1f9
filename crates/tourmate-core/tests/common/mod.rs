use tourmate_core::{FormDescriptor, FormSession, OrchestratorBuilder, RequestOrchestrator};
use wiremock::MockServer;

/// Helper function to create an orchestrator pointed at a mock service
pub fn orchestrator_for(server: &MockServer) -> RequestOrchestrator {
    OrchestratorBuilder::new()
        .with_base_url(Some(server.uri()))
        .build()
        .expect("Failed to build orchestrator")
}

/// Helper function to create a session with the given field values
pub fn filled_session(form: &'static FormDescriptor, values: &[(&str, &str)]) -> FormSession {
    let mut session = FormSession::new(form);
    for (name, value) in values {
        session
            .set_field(name, *value)
            .expect("Failed to set field");
    }
    session
}
