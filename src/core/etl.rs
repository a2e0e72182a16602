use crate::core::outcome::check_outcome;
use crate::core::{Pipeline, TransferReport};
use crate::utils::error::Result;
use chrono::Utc;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Fetch → transform → submit → check. The first failing stage ends the run.
    pub async fn run(&self) -> Result<TransferReport> {
        let started_at = Utc::now();
        tracing::info!("🚀 Starting user transfer");

        // Extract
        let source_users = self.pipeline.extract().await?;
        let fetched = source_users.len();
        tracing::info!("📥 Fetched {} source users", fetched);

        // Transform
        let destination_users = self.pipeline.transform(source_users).await?;
        let submitted = destination_users.len();
        tracing::info!("🔧 Transformed {} users", submitted);

        // Load
        let response = self.pipeline.load(destination_users).await?;
        tracing::debug!("Destination response status: {}", response.status);

        let response = check_outcome(response)?;

        Ok(TransferReport {
            fetched,
            submitted,
            status: response.status,
            started_at,
            finished_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transform::transform_users;
    use crate::domain::model::{
        DestinationUser, SourceAddress, SourceCompany, SourceUser, SubmitResponse,
    };
    use crate::utils::error::TransferError;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct MockPipeline {
        users: Vec<SourceUser>,
        fail_extract: bool,
        response_status: u16,
        loaded: Arc<Mutex<Option<Vec<DestinationUser>>>>,
    }

    impl MockPipeline {
        fn new(users: Vec<SourceUser>, response_status: u16) -> Self {
            Self {
                users,
                fail_extract: false,
                response_status,
                loaded: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait::async_trait]
    impl Pipeline for MockPipeline {
        async fn extract(&self) -> Result<Vec<SourceUser>> {
            if self.fail_extract {
                return Err(TransferError::HttpStatus {
                    status: 503,
                    body: "unavailable".to_string(),
                });
            }
            Ok(self.users.clone())
        }

        async fn transform(&self, users: Vec<SourceUser>) -> Result<Vec<DestinationUser>> {
            Ok(transform_users(&users))
        }

        async fn load(&self, users: Vec<DestinationUser>) -> Result<SubmitResponse> {
            *self.loaded.lock().await = Some(users);
            Ok(SubmitResponse {
                status: self.response_status,
                body: "done".to_string(),
            })
        }
    }

    fn user(name: &str) -> SourceUser {
        SourceUser {
            name: name.to_string(),
            company: SourceCompany {
                name: "Deckow-Crist".to_string(),
            },
            address: SourceAddress {
                street: "Victor Plains".to_string(),
                city: "Wisokyburgh".to_string(),
                zipcode: "90566-7771".to_string(),
            },
            website: "anastasia.net".to_string(),
            phone: "010-692-6593 x09125".to_string(),
        }
    }

    #[tokio::test]
    async fn test_run_success_reports_counts() {
        let pipeline = MockPipeline::new(vec![user("Ervin Howell"), user("Kurtis Weissnat")], 200);
        let loaded = pipeline.loaded.clone();
        let engine = EtlEngine::new(pipeline);

        let report = engine.run().await.unwrap();

        assert_eq!(report.fetched, 2);
        assert_eq!(report.submitted, 2);
        assert_eq!(report.status, 200);
        assert!(report.finished_at >= report.started_at);
        assert_eq!(loaded.lock().await.as_ref().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_run_propagates_rejected_submission() {
        let engine = EtlEngine::new(MockPipeline::new(vec![user("Ervin Howell")], 500));

        let err = engine.run().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_run_short_circuits_on_extract_failure() {
        let mut pipeline = MockPipeline::new(vec![user("Ervin Howell")], 200);
        pipeline.fail_extract = true;
        let loaded = pipeline.loaded.clone();
        let engine = EtlEngine::new(pipeline);

        let err = engine.run().await.unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert!(loaded.lock().await.is_none());
    }
}
