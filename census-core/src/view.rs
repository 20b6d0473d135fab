//! Result view controller.
//!
//! Decides what the result region shows and when the page scrolls to it.

use crate::fetch::FetchStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultView {
    /// Nothing requested yet, or a request still inside the loading debounce.
    #[default]
    Idle,
    Loading,
    Empty,
    Chart,
    Error,
}

/// Pick the visible state.
///
/// `loading_debounced` is true once a request has been in flight for the
/// whole loading debounce window.
pub fn resolve(search_requested: bool, status: &FetchStatus, loading_debounced: bool) -> ResultView {
    if !search_requested {
        return ResultView::Idle;
    }
    match status {
        FetchStatus::Loading if loading_debounced => ResultView::Loading,
        FetchStatus::Loading => ResultView::Idle,
        FetchStatus::Empty => ResultView::Empty,
        FetchStatus::Success => ResultView::Chart,
        FetchStatus::Error(_) => ResultView::Error,
    }
}

/// Enablement of the submit button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitControl {
    pub disabled: bool,
    /// Spinner over the button label.
    pub processing: bool,
}

/// `submitting` is the cosmetic flag raised on submit and cleared after the
/// presentation delay. `controls_settled` is false from the start of a request
/// until the control debounce after it completes.
pub fn submit_control(
    submittable: bool,
    submitting: bool,
    controls_settled: bool,
    status: &FetchStatus,
) -> SubmitControl {
    let processing = submitting
        && !matches!(status, FetchStatus::Empty | FetchStatus::Error(_));
    SubmitControl {
        disabled: !submittable || !controls_settled,
        processing,
    }
}

/// One-shot scroll requests: entering `Chart`, or a new submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollTrigger {
    last_view: ResultView,
    last_submitting: bool,
}

impl ScrollTrigger {
    /// Record the current state; returns true when the page should scroll.
    pub fn observe(&mut self, view: ResultView, submitting: bool) -> bool {
        let entered_chart = view == ResultView::Chart && self.last_view != ResultView::Chart;
        let submitted = submitting && !self.last_submitting;
        self.last_view = view;
        self.last_submitting = submitting;
        entered_chart || submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    #[test]
    fn test_idle_without_search() {
        for status in [
            FetchStatus::Loading,
            FetchStatus::Success,
            FetchStatus::Empty,
            FetchStatus::Error(FetchError::Status(500)),
        ] {
            assert_eq!(resolve(false, &status, true), ResultView::Idle);
        }
    }

    #[test]
    fn test_loading_waits_for_debounce() {
        assert_eq!(resolve(true, &FetchStatus::Loading, false), ResultView::Idle);
        assert_eq!(resolve(true, &FetchStatus::Loading, true), ResultView::Loading);
    }

    #[test]
    fn test_completed_states() {
        assert_eq!(resolve(true, &FetchStatus::Success, true), ResultView::Chart);
        assert_eq!(resolve(true, &FetchStatus::Empty, false), ResultView::Empty);
        assert_eq!(
            resolve(true, &FetchStatus::Error(FetchError::Timeout(1)), false),
            ResultView::Error
        );
    }

    #[test]
    fn test_submit_control() {
        let idle = submit_control(false, false, true, &FetchStatus::Loading);
        assert!(idle.disabled);
        assert!(!idle.processing);

        let ready = submit_control(true, false, true, &FetchStatus::Success);
        assert!(!ready.disabled);

        let busy = submit_control(true, true, false, &FetchStatus::Loading);
        assert!(busy.disabled);
        assert!(busy.processing);

        let empty = submit_control(true, true, false, &FetchStatus::Empty);
        assert!(!empty.processing);
    }

    #[test]
    fn test_scroll_is_one_shot() {
        let mut trigger = ScrollTrigger::default();
        assert!(!trigger.observe(ResultView::Idle, false));
        assert!(trigger.observe(ResultView::Chart, false));
        assert!(!trigger.observe(ResultView::Chart, false));
        assert!(trigger.observe(ResultView::Chart, true));
        assert!(!trigger.observe(ResultView::Chart, true));
        assert!(!trigger.observe(ResultView::Empty, false));
        assert!(trigger.observe(ResultView::Chart, false));
    }
}
