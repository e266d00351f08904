//! Quiz API routes
//!
//! ```text
//! GET /health                      unauthenticated liveness probe
//! GET /api/quizzes                 public view of every quiz
//! GET /api/quizzes/{id}            public view of one quiz
//! GET /api/quizzes/{id}/answers    revealing view of one quiz
//! ```
//!
//! Every `/api` route sits behind the API key check; the request log wraps
//! everything, so rejected requests are logged too.

use super::error::ApiError;
use super::middleware::{log_requests, require_api_key};
use axum::{
    Json, Router,
    extract::{OriginalUri, Path, State},
    middleware,
    routing::get,
};
use quiz_application::{ApiKeyGuard, QuizCatalogUseCase, RequestLogger};
use quiz_domain::{AnswerVisibility, Quiz, QuizId, QuizRepository};
use serde_json::{Value, json};
use std::sync::Arc;

/// Shared, read-only state of the API
pub struct ApiState<R: QuizRepository + 'static> {
    pub catalog: QuizCatalogUseCase<R>,
    pub guard: ApiKeyGuard,
    pub request_logger: Arc<dyn RequestLogger>,
    /// Include internal detail in 500 bodies
    pub expose_error_details: bool,
}

impl<R: QuizRepository + 'static> ApiState<R> {
    pub fn new(
        repository: Arc<R>,
        guard: ApiKeyGuard,
        request_logger: Arc<dyn RequestLogger>,
    ) -> Self {
        Self {
            catalog: QuizCatalogUseCase::new(repository),
            guard,
            request_logger,
            expose_error_details: false,
        }
    }

    pub fn with_error_details(mut self, expose: bool) -> Self {
        self.expose_error_details = expose;
        self
    }
}

/// Build the full application router.
pub fn build_router<R: QuizRepository + 'static>(state: ApiState<R>) -> Router {
    let state = Arc::new(state);

    let api = Router::new()
        .route("/quizzes", get(list_quizzes::<R>))
        .route("/quizzes/{id}", get(get_quiz::<R>))
        .route("/quizzes/{id}/answers", get(get_quiz_answers::<R>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key::<R>,
        ));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            log_requests::<R>,
        ))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_quizzes<R: QuizRepository + 'static>(
    State(state): State<Arc<ApiState<R>>>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<Quiz>>, ApiError> {
    state
        .catalog
        .list_public()
        .await
        .map(Json)
        .map_err(|e| ApiError::from_catalog(e, uri.path(), state.expose_error_details))
}

async fn get_quiz<R: QuizRepository + 'static>(
    State(state): State<Arc<ApiState<R>>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<Json<Quiz>, ApiError> {
    fetch(&state, uri.path(), &id, AnswerVisibility::Hidden).await
}

async fn get_quiz_answers<R: QuizRepository + 'static>(
    State(state): State<Arc<ApiState<R>>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<Json<Quiz>, ApiError> {
    fetch(&state, uri.path(), &id, AnswerVisibility::Revealed).await
}

async fn fetch<R: QuizRepository + 'static>(
    state: &ApiState<R>,
    path: &str,
    raw_id: &str,
    visibility: AnswerVisibility,
) -> Result<Json<Quiz>, ApiError> {
    // The id space is numeric; anything else cannot name a quiz.
    let id: QuizId = raw_id
        .parse()
        .map_err(|_| ApiError::NotFound(format!("Quiz with ID {} not found", raw_id)))?;

    state
        .catalog
        .get(id, visibility)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_catalog(e, path, state.expose_error_details))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use quiz_application::{API_KEY_HEADER, NoRequestLogger, RequestRecord};
    use quiz_domain::{OptionId, Question, QuestionId, QuizOption};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    const KEY: &str = "test-api-key-123456";

    // ==================== Test doubles ====================

    /// Counts reads so tests can prove nothing was read.
    struct CountingRepository {
        quizzes: Vec<Quiz>,
        reads: AtomicUsize,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("connection refused")]
    struct StoreDown;

    #[async_trait]
    impl QuizRepository for CountingRepository {
        type Error = StoreDown;

        async fn list(&self) -> Result<Vec<Quiz>, StoreDown> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.quizzes.clone())
        }

        async fn find(&self, id: QuizId) -> Result<Option<Quiz>, StoreDown> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.quizzes.iter().find(|q| q.id == id).cloned())
        }
    }

    struct DownRepository;

    #[async_trait]
    impl QuizRepository for DownRepository {
        type Error = StoreDown;

        async fn list(&self) -> Result<Vec<Quiz>, StoreDown> {
            Err(StoreDown)
        }

        async fn find(&self, _id: QuizId) -> Result<Option<Quiz>, StoreDown> {
            Err(StoreDown)
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        records: Mutex<Vec<RequestRecord>>,
    }

    impl RequestLogger for RecordingLogger {
        fn log(&self, record: RequestRecord) {
            self.records.lock().unwrap().push(record);
        }
    }

    fn sample_quiz() -> Quiz {
        let quiz_id = QuizId::new(1);
        let qid = QuestionId::new(1);
        Quiz::new(quiz_id, "General Knowledge Quiz")
            .with_description("Test your general knowledge with these questions (5 minutes)")
            .with_question(
                Question::new(qid, quiz_id, "What is the capital of France?")
                    .with_option(QuizOption::new(OptionId::new(1), qid, "London"))
                    .with_option(QuizOption::new(OptionId::new(2), qid, "Paris").correct()),
            )
    }

    fn repository() -> Arc<CountingRepository> {
        Arc::new(CountingRepository {
            quizzes: vec![sample_quiz()],
            reads: AtomicUsize::new(0),
        })
    }

    fn app(repository: Arc<CountingRepository>) -> Router {
        build_router(ApiState::new(
            repository,
            ApiKeyGuard::new(KEY),
            Arc::new(NoRequestLogger),
        ))
    }

    fn get(uri: &str, key: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(key) = key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn correct_flags(body: &Value) -> Vec<bool> {
        body["questions"]
            .as_array()
            .unwrap()
            .iter()
            .flat_map(|q| q["options"].as_array().unwrap().iter())
            .map(|o| o["isCorrect"].as_bool().unwrap())
            .collect()
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn list_returns_public_view() {
        let response = app(repository())
            .oneshot(get("/api/quizzes", Some(KEY)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        let quizzes = body.as_array().unwrap();
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0]["title"], "General Knowledge Quiz");
        assert!(correct_flags(&quizzes[0]).iter().all(|flag| !flag));
    }

    #[tokio::test]
    async fn single_quiz_hides_answers() {
        let response = app(repository())
            .oneshot(get("/api/quizzes/1", Some(KEY)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["questions"][0]["quizId"], 1);
        assert_eq!(correct_flags(&body), vec![false, false]);
    }

    #[tokio::test]
    async fn answers_endpoint_reveals_flags() {
        let response = app(repository())
            .oneshot(get("/api/quizzes/1/answers", Some(KEY)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(correct_flags(&read_json(response).await), vec![false, true]);
    }

    #[tokio::test]
    async fn unknown_id_is_404_on_both_endpoints() {
        for uri in ["/api/quizzes/99", "/api/quizzes/99/answers"] {
            let response = app(repository()).oneshot(get(uri, Some(KEY))).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
            let body = read_json(response).await;
            assert_eq!(body["error"], "Not Found");
            assert_eq!(body["message"], "Quiz with ID 99 not found");
        }
    }

    #[tokio::test]
    async fn non_numeric_id_is_404() {
        let repo = repository();
        let response = app(repo.clone())
            .oneshot(get("/api/quizzes/abc", Some(KEY)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(repo.reads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_key_is_rejected_before_any_read() {
        let repo = repository();
        let response = app(repo.clone())
            .oneshot(get("/api/quizzes/1/answers", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = read_json(response).await;
        assert_eq!(body["error"], "Unauthorized");
        assert_eq!(
            body["message"],
            "API Key is missing. Please provide X-API-Key header."
        );
        assert_eq!(repo.reads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn wrong_key_is_rejected_before_any_read() {
        let repo = repository();
        let response = app(repo.clone())
            .oneshot(get("/api/quizzes", Some("nope")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(read_json(response).await["message"], "Invalid API Key.");
        assert_eq!(repo.reads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn health_needs_no_key() {
        let response = app(repository())
            .oneshot(get("/health", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn storage_failure_is_generic_500() {
        let router = build_router(ApiState::new(
            Arc::new(DownRepository),
            ApiKeyGuard::new(KEY),
            Arc::new(NoRequestLogger),
        ));
        let response = router
            .oneshot(get("/api/quizzes", Some(KEY)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(body["error"], "Internal Server Error");
        assert_eq!(body["message"], super::super::error::GENERIC_INTERNAL_MESSAGE);
        assert_eq!(body["path"], "/api/quizzes");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn storage_failure_detail_in_development() {
        let router = build_router(
            ApiState::new(
                Arc::new(DownRepository),
                ApiKeyGuard::new(KEY),
                Arc::new(NoRequestLogger),
            )
            .with_error_details(true),
        );
        let response = router
            .oneshot(get("/api/quizzes/1", Some(KEY)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(read_json(response).await["message"], "connection refused");
    }

    #[tokio::test]
    async fn every_request_is_logged_including_rejections() {
        let logger = Arc::new(RecordingLogger::default());
        let router = build_router(ApiState::new(
            repository(),
            ApiKeyGuard::new(KEY),
            logger.clone(),
        ));

        router
            .clone()
            .oneshot(get("/api/quizzes", Some(KEY)))
            .await
            .unwrap();
        router.oneshot(get("/api/quizzes", None)).await.unwrap();

        let records = logger.records.lock().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].method, "GET");
        assert_eq!(records[0].path, "/api/quizzes");
        assert_eq!(records[0].status, 200);
        assert_eq!(records[1].status, 401);
        assert!(records[1].is_failure());
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn rejection_warning_names_the_full_path() {
        let captured = CapturedLog::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _default = tracing::subscriber::set_default(subscriber);

        let response = app(repository())
            .oneshot(get("/api/quizzes/1", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        let warning = output
            .lines()
            .find(|line| line.contains("API key missing"))
            .expect("guard warning logged");
        assert!(warning.contains("/api/quizzes/1"), "{}", warning);
    }
}
