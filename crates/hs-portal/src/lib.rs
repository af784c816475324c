//! # hs-portal
//!
//! Page logic for the HackSphere participant portal.
//!
//! A [`Portal`] owns one [`Session`] and the current [`Route`]. Each page has a
//! form type under [`forms`] holding its input, inline errors, and loading
//! flag. The [`router`] decides which page a session may see. Server round
//! trips go through two seams: [`TeamRegistrar`] for team creation and
//! [`Uploader`] for artifact uploads.
//!
//! [`Route`]: hs_core::enums::Route

pub mod delay;
pub mod error;
pub mod forms;
pub mod portal;
pub mod registrar;
pub mod router;
pub mod session;
pub mod upload;
pub mod views;

pub use delay::SimulatedDelay;
pub use error::PortalError;
pub use forms::FieldErrors;
pub use forms::dashboard::{SUBMITTED_MESSAGE, SubmissionDraft};
pub use forms::login::LoginForm;
pub use forms::register::{MemberErrors, RegisterForm};
pub use forms::terms::TermsForm;
pub use portal::Portal;
pub use registrar::TeamRegistrar;
pub use router::{Decision, Navigation};
pub use session::Session;
pub use upload::{SimulatedUploader, UploadError, UploadedArtifact, Uploader};
pub use views::{DashboardView, TermsView};
