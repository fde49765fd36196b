//! Mutation lifecycle shared by every create/update action.
//!
//! A screen owns one coordinator per form. At most one mutation is in
//! flight at a time; a second submit while one is running is rejected
//! without touching the server. A successful mutation never patches the
//! list locally: the caller's `on_success` refetches the whole sequence.

use leptos::prelude::*;

use crate::shared::api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationState {
    Idle,
    Submitting,
    Success,
    Failed(ApiError),
}

impl MutationState {
    /// Transition to `Submitting`, or refuse when a mutation is already
    /// running.
    pub fn begin(&mut self) -> bool {
        if matches!(self, MutationState::Submitting) {
            return false;
        }
        *self = MutationState::Submitting;
        true
    }

    pub fn finish(&mut self) {
        *self = MutationState::Success;
    }

    pub fn fail(&mut self, error: ApiError) {
        *self = MutationState::Failed(error);
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, MutationState::Submitting)
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            MutationState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Reactive wrapper around [`MutationState`] for a screen.
#[derive(Clone, Copy)]
pub struct MutationCoordinator {
    state: RwSignal<MutationState>,
}

impl MutationCoordinator {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(MutationState::Idle),
        }
    }

    pub fn state(&self) -> Signal<MutationState> {
        self.state.into()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.is_submitting())
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.with(|s| s.error().map(|e| e.to_string()))
    }

    /// Fail without contacting the server (client-side validation).
    pub fn reject(&self, message: impl Into<String>) {
        self.state
            .update(|s| s.fail(ApiError::Validation(message.into())));
    }

    /// Run `op`; on success call `on_success` (the refetch). Returns
    /// immediately if a mutation is already in flight.
    pub fn run<Fut>(&self, op: Fut, on_success: impl Fn() + 'static)
    where
        Fut: std::future::Future<Output = Result<(), ApiError>> + 'static,
    {
        let mut started = false;
        self.state.update(|s| started = s.begin());
        if !started {
            return;
        }
        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            match op.await {
                Ok(()) => {
                    state.update(|s| s.finish());
                    on_success();
                }
                Err(e) => {
                    e.surface("mutation failed");
                    state.update(|s| s.fail(e));
                }
            }
        });
    }
}

impl Default for MutationCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_submit_is_refused_while_running() {
        let mut state = MutationState::Idle;
        assert!(state.begin());
        assert!(!state.begin());
        assert!(state.is_submitting());
    }

    #[test]
    fn resubmit_allowed_after_terminal_states() {
        let mut state = MutationState::Idle;
        assert!(state.begin());
        state.finish();
        assert_eq!(state, MutationState::Success);
        assert!(state.begin());
        state.fail(ApiError::Domain("phone not found".into()));
        assert!(state.error().is_some());
        assert!(state.begin());
    }

    #[test]
    fn failed_create_leaves_the_fetched_rows_untouched() {
        use crate::shared::list_view::{ListView, PageIndexing, Searchable, Sortable};

        #[derive(Clone, PartialEq, Debug)]
        struct Row(i64);
        impl Sortable for Row {
            fn compare_by_field(&self, other: &Self, _: &str) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }
        impl Searchable for Row {
            fn matches_filter(&self, _: &str) -> bool {
                true
            }
        }

        let mut view = ListView::new(10, PageIndexing::OneBased);
        view.replace(vec![Row(1), Row(2), Row(3)]);
        let before = view.raw().to_vec();

        // A failed mutation never refetches, so the raw sequence is exactly
        // what the last fetch produced.
        let mut state = MutationState::Idle;
        state.begin();
        state.fail(ApiError::Domain("phone not found".into()));
        assert!(state.error().is_some());
        assert_eq!(view.raw(), before.as_slice());
        assert_eq!(view.visible(), before);
    }

    #[test]
    fn failure_keeps_the_error_until_the_next_begin() {
        let mut state = MutationState::Idle;
        state.begin();
        state.fail(ApiError::Validation("Name is required".into()));
        assert_eq!(
            state.error(),
            Some(&ApiError::Validation("Name is required".into()))
        );
        state.begin();
        assert!(state.error().is_none());
    }
}
