use async_trait::async_trait;
use ferrous_recon_application::ports::DnsResolver;
use ferrous_recon_domain::{Answer, DomainError, RecordType};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Records every call; unknown names fail the way the resolver service does.
#[derive(Clone, Default)]
pub struct MockDnsResolver {
    responses: Arc<RwLock<HashMap<String, Vec<Answer>>>>,
    error_responses: Arc<RwLock<HashMap<String, DomainError>>>,
    calls: Arc<std::sync::Mutex<Vec<(String, String, RecordType)>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(&self, name: &str, answers: Vec<Answer>) {
        self.responses
            .write()
            .await
            .insert(name.to_string(), answers);
    }

    pub async fn set_address(&self, name: &str, ip: &str) {
        self.set_response(name, vec![Answer::new(name, RecordType::A, 5, ip)])
            .await;
    }

    pub async fn set_response_error(&self, name: &str, error: DomainError) {
        self.error_responses
            .write()
            .await
            .insert(name.to_string(), error);
    }

    pub fn calls(&self) -> Vec<(String, String, RecordType)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(
        &self,
        name: &str,
        server: &str,
        record_type: RecordType,
    ) -> Result<Vec<Answer>, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), server.to_string(), record_type));

        if let Some(err) = self.error_responses.read().await.get(name).cloned() {
            return Err(err);
        }

        match self.responses.read().await.get(name) {
            Some(answers) if !answers.is_empty() => Ok(answers.clone()),
            _ => Err(DomainError::QueryUnsuccessful),
        }
    }
}
