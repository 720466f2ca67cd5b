#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog;
pub mod error;
pub mod progress_service;
pub mod progress_view;
pub mod quiz_session;

pub use finlit_core::Clock;

pub use app_services::AppServices;
pub use catalog::Catalog;
pub use error::{AppServicesError, CatalogError, QuizSessionError, QuizStartError};
pub use progress_service::ProgressTracker;
pub use progress_view::ProgressSnapshot;
pub use quiz_session::{QuizAnswer, QuizOutcome, QuizProgress, QuizSession};
