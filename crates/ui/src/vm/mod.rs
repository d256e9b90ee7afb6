mod assessment_vm;
mod deck_vm;

pub use assessment_vm::{AssessmentPhase, AssessmentVm, Notice};
pub use deck_vm::{DeckIntent, DeckVm, RenderState, SignalRenderer};
