use std::cell::RefCell;
use std::rc::Rc;

use crate::timer::Scheduler;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you within 24-48 hours.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    pub fn class(self) -> &'static str {
        match self {
            FeedbackKind::Success => "success",
            FeedbackKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: FeedbackKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: FeedbackKind::Error }
    }
}

/// Shows one message at a time and hides it after a fixed window.
/// Showing a new message restarts the window.
pub struct FeedbackBoard<S: Scheduler> {
    scheduler: S,
    visible_ms: u32,
    render: Rc<dyn Fn(Option<Feedback>)>,
    hide: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> FeedbackBoard<S> {
    pub fn new(scheduler: S, visible_ms: u32, render: impl Fn(Option<Feedback>) + 'static) -> Self {
        Self {
            scheduler,
            visible_ms,
            render: Rc::new(render),
            hide: RefCell::new(None),
        }
    }

    pub fn show(&self, feedback: Feedback) {
        (self.render)(Some(feedback));
        let render = self.render.clone();
        let handle = self
            .scheduler
            .schedule(self.visible_ms, Box::new(move || render(None)));
        // Replacing the handle cancels the previous hide.
        *self.hide.borrow_mut() = Some(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::testing::ManualScheduler;

    fn board(scheduler: &ManualScheduler) -> (FeedbackBoard<ManualScheduler>, Rc<RefCell<Option<Feedback>>>) {
        let shown = Rc::new(RefCell::new(None));
        let sink = shown.clone();
        let board = FeedbackBoard::new(scheduler.clone(), 5_000, move |f| *sink.borrow_mut() = f);
        (board, shown)
    }

    #[test]
    fn message_hides_after_five_seconds() {
        let scheduler = ManualScheduler::new();
        let (board, shown) = board(&scheduler);

        board.show(Feedback::success(SUCCESS_MESSAGE));
        scheduler.advance(4_999);
        assert_eq!(shown.borrow().as_ref().map(|f| f.kind), Some(FeedbackKind::Success));

        scheduler.advance(1);
        assert_eq!(*shown.borrow(), None);
    }

    #[test]
    fn later_message_restarts_the_window() {
        let scheduler = ManualScheduler::new();
        let (board, shown) = board(&scheduler);

        board.show(Feedback::error("first"));
        scheduler.advance(3_000);
        board.show(Feedback::error("second"));

        scheduler.advance(2_500);
        assert_eq!(shown.borrow().as_ref().map(|f| f.text.as_str()), Some("second"));

        scheduler.advance(2_500);
        assert_eq!(*shown.borrow(), None);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn kinds_map_to_css_classes() {
        assert_eq!(Feedback::success("ok").kind.class(), "success");
        assert_eq!(Feedback::error("no").kind.class(), "error");
    }
}
