//! Scrutin Client - HTTP client library for the survey service.
//!
//! Everything goes through one place: [`ApiClient`] in the [`gateway`]
//! module performs a single HTTP request with optional bearer auth,
//! negotiates JSON vs. plain-text response bodies, and normalizes failures
//! into [`GatewayError`]. The endpoint modules ([`surveys`], [`comments`],
//! [`users`], [`admin`]) are thin typed wrappers over it.
//!
//! The one exception is login: the service expects form-urlencoded
//! credentials there, so [`auth::login`] keeps its own request path beside
//! the JSON gateway. That inconsistency belongs to the remote API and is
//! preserved on purpose.
//!
//! # Example
//!
//! ```rust,no_run
//! use scrutin_client::{ApiClient, ApiConfig, SessionStore, surveys};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ApiConfig::from_env()?;
//! let store = SessionStore::new(config.session_file.clone());
//! let api = ApiClient::new(&config, store)?;
//!
//! for survey in surveys::list(&api).await? {
//!     println!("#{} {}", survey.id, survey.title);
//! }
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod admin;
pub mod auth;
pub mod comments;
pub mod config;
pub mod gateway;
pub mod session;
pub mod surveys;
pub mod users;

pub use auth::AuthError;
pub use config::{ApiConfig, ConfigError};
pub use gateway::{ApiClient, GatewayError, Method, Payload, RequestOptions};
pub use session::{SessionError, SessionStore};
pub use surveys::Submission;
