//! State behind the "new todo" page.
//!
//! [`NewTodoForm`] is a plain struct with one setter per input. UI code reads
//! it, calls a setter when a widget changes, and calls [`NewTodoForm::submit`]
//! when the user asks to create the todo. Setters never validate: a month of
//! 0 is stored as 0. Whatever checks exist happen wherever the draft ends up.

use crate::date::{Clock, DueDate};
use crate::todo::TodoDraft;

/// Receives a draft when the form is submitted.
///
/// The form does not wait for, or look at, the outcome.
pub trait TodoDispatch {
    fn post_todo(&mut self, draft: TodoDraft);
}

impl<F: FnMut(TodoDraft)> TodoDispatch for F {
    fn post_todo(&mut self, draft: TodoDraft) {
        self(draft)
    }
}

/// Editable fields of a todo that has not been created yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoForm {
    title: String,
    content: String,
    due_date: DueDate,
}

impl NewTodoForm {
    /// Empty title and content, due today.
    ///
    /// `clock` is read once, here.
    pub fn new(clock: &(impl Clock + ?Sized)) -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            due_date: DueDate::today(clock),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn due_date(&self) -> DueDate {
        self.due_date
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_year(&mut self, year: i32) {
        self.due_date.year = year;
    }

    pub fn set_month(&mut self, month: i32) {
        self.due_date.month = month;
    }

    pub fn set_date(&mut self, date: i32) {
        self.due_date.date = date;
    }

    /// Snapshot of the current fields.
    pub fn draft(&self) -> TodoDraft {
        TodoDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            due_date: self.due_date,
        }
    }

    /// Hand one draft of the current fields to `dispatch`.
    ///
    /// The form keeps its fields; clearing them is up to whoever owns it.
    pub fn submit(&self, dispatch: &mut impl TodoDispatch) {
        let draft = self.draft();
        log::debug!("submitting todo draft {:?}", draft.title);
        dispatch.post_todo(draft);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::FixedClock;
    use chrono::NaiveDate;

    fn form() -> NewTodoForm {
        NewTodoForm::new(&FixedClock(NaiveDate::from_ymd_opt(2019, 5, 7).unwrap()))
    }

    #[derive(Default)]
    struct Recorder(Vec<TodoDraft>);

    impl TodoDispatch for Recorder {
        fn post_todo(&mut self, draft: TodoDraft) {
            self.0.push(draft);
        }
    }

    #[test]
    fn starts_empty_and_due_today() {
        let form = form();
        assert_eq!(form.title(), "");
        assert_eq!(form.content(), "");
        assert_eq!(form.due_date(), DueDate::new(2019, 5, 7));
    }

    #[test]
    fn title_input_only_changes_title() {
        let mut form = form();
        form.set_title("TEST_TITLE");
        assert_eq!(form.title(), "TEST_TITLE");
        assert_eq!(form.content(), "");
        assert_eq!(form.due_date(), DueDate::new(2019, 5, 7));
    }

    #[test]
    fn content_input_only_changes_content() {
        let mut form = form();
        form.set_content("TEST_CONTENT");
        assert_eq!(form.title(), "");
        assert_eq!(form.content(), "TEST_CONTENT");
        assert_eq!(form.due_date(), DueDate::new(2019, 5, 7));
    }

    #[test]
    fn year_input_accepts_zero() {
        let mut form = form();
        form.set_year(0);
        assert_eq!(form.title(), "");
        assert_eq!(form.content(), "");
        assert_eq!(form.due_date(), DueDate::new(0, 5, 7));
    }

    #[test]
    fn month_input_accepts_zero_without_normalizing() {
        let mut form = form();
        form.set_month(0);
        assert_eq!(form.title(), "");
        assert_eq!(form.content(), "");
        assert_eq!(form.due_date(), DueDate::new(2019, 0, 7));
    }

    #[test]
    fn date_input_accepts_zero() {
        let mut form = form();
        form.set_date(0);
        assert_eq!(form.title(), "");
        assert_eq!(form.content(), "");
        assert_eq!(form.due_date(), DueDate::new(2019, 5, 0));
    }

    #[test]
    fn negative_parts_are_stored_verbatim() {
        let mut form = form();
        form.set_year(-4);
        form.set_month(-1);
        form.set_date(-30);
        assert_eq!(form.due_date(), DueDate::new(-4, -1, -30));
    }

    #[test]
    fn setters_do_not_touch_earlier_edits() {
        let mut form = form();
        form.set_title("a");
        form.set_content("b");
        form.set_month(12);
        form.set_title("c");
        assert_eq!(form.title(), "c");
        assert_eq!(form.content(), "b");
        assert_eq!(form.due_date(), DueDate::new(2019, 12, 7));
    }

    #[test]
    fn submit_dispatches_exactly_once_with_current_fields() {
        let mut form = form();
        form.set_title("TEST_TITLE");
        form.set_content("TEST_CONTENT");
        form.set_date(9);

        let mut recorder = Recorder::default();
        form.submit(&mut recorder);

        assert_eq!(
            recorder.0,
            vec![TodoDraft {
                title: "TEST_TITLE".into(),
                content: "TEST_CONTENT".into(),
                due_date: DueDate::new(2019, 5, 9),
            }]
        );
    }

    #[test]
    fn submit_keeps_the_form_and_drafts_are_independent() {
        let mut form = form();
        form.set_title("first");

        let mut drafts: Vec<TodoDraft> = Vec::new();
        form.submit(&mut |draft: TodoDraft| drafts.push(draft));
        form.set_title("second");
        form.submit(&mut |draft: TodoDraft| drafts.push(draft));

        assert_eq!(form.title(), "second");
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].title, "first");
        assert_eq!(drafts[1].title, "second");
    }
}
