/// Submission progress of a form. The submit control is disabled and shows a
/// loading indicator while `Submitting`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

impl SubmitState {
    pub fn is_submitting(self) -> bool {
        self == SubmitState::Submitting
    }
}
