//! Integration test harness for Scrutin.
//!
//! Spins up an in-process axum server on an ephemeral port standing in for
//! the survey service, and builds [`ApiClient`] instances pointed at it
//! with a temp-dir session store.
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use scrutin_integration_tests::TestService;
//!
//! #[tokio::test]
//! async fn test_ping() {
//!     let service = TestService::spawn(
//!         Router::new().route("/ping", get(|| async { "pong" })),
//!     )
//!     .await;
//!     let api = service.api();
//!     // ...
//! }
//! ```

use axum::Router;
use tokio::net::TcpListener;

use scrutin_client::{ApiClient, ApiConfig, SessionStore};
use scrutin_core::Session;

/// An in-process stand-in for the survey service plus the client state
/// needed to talk to it.
pub struct TestService {
    base_url: String,
    session_dir: tempfile::TempDir,
}

impl TestService {
    /// Bind the router to an ephemeral local port and serve it for the
    /// lifetime of the test process.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn spawn(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve");
        });

        Self {
            base_url: format!("http://{addr}"),
            session_dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    /// Base URL of the mock service.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session store all clients from this harness share.
    #[must_use]
    pub fn store(&self) -> SessionStore {
        SessionStore::new(self.session_dir.path().join("session.json"))
    }

    /// A client pointed at the mock service, using this harness's store.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be constructed.
    #[must_use]
    pub fn api(&self) -> ApiClient {
        let config = ApiConfig::new(
            self.base_url.parse().expect("valid base url"),
            self.session_dir.path().join("session.json"),
        );
        ApiClient::new(&config, self.store()).expect("client builds")
    }

    /// Seed the store with a logged-in session carrying the given token.
    ///
    /// # Panics
    ///
    /// Panics if the session cannot be written.
    pub fn seed_session(&self, token: &str) {
        self.store()
            .save(&Session {
                access_token: token.to_string(),
                username: "bob".to_string(),
                user_id: "1".to_string(),
                is_admin: "0".to_string(),
            })
            .expect("seed session");
    }
}
