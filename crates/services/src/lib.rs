#![forbid(unsafe_code)]

pub mod assessment_flow;
pub mod autoplay;
pub mod presentation;
pub mod renderer;

pub use assessment_flow::{AssessmentService, Evaluation, SubmitRejection};
pub use autoplay::{AutoPlayHandle, auto_play};
pub use presentation::{PresentationService, Timing};
pub use renderer::Renderer;
