//! The "new todo" page.
//!
//! Widgets edit copies of the form fields; a changed widget is written back
//! through the form's setter for that field.

use todo_shared::{NewTodoForm, TodoDispatch};

/// What the user asked for besides editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewTodoIntent {
    Cancel,
}

pub fn show(
    ui: &mut egui::Ui,
    form: &mut NewTodoForm,
    dispatch: &mut impl TodoDispatch,
) -> Option<NewTodoIntent> {
    let widgets = draw(ui, form, dispatch);
    widgets.cancel.clicked().then_some(NewTodoIntent::Cancel)
}

/// One frame's responses, one per input on the page.
pub struct Widgets {
    pub title: egui::Response,
    pub content: egui::Response,
    pub year: egui::Response,
    pub month: egui::Response,
    pub date: egui::Response,
    pub submit: egui::Response,
    pub cancel: egui::Response,
}

/// Draw the page and apply this frame's edits to `form`.
///
/// A click on Submit dispatches the form once; Cancel is only reported.
pub fn draw(
    ui: &mut egui::Ui,
    form: &mut NewTodoForm,
    dispatch: &mut impl TodoDispatch,
) -> Widgets {
    ui.heading("Add a new todo");
    ui.add_space(8.0);

    let (title, content, [year, month, date]) = egui::Grid::new("new_todo_fields")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Title");
            let mut title = form.title().to_owned();
            let title_response =
                ui.add(egui::TextEdit::singleline(&mut title).hint_text("What needs doing?"));
            if title_response.changed() {
                form.set_title(title);
            }
            ui.end_row();

            ui.label("Content");
            let mut content = form.content().to_owned();
            let content_response = ui.add(egui::TextEdit::multiline(&mut content).desired_rows(4));
            if content_response.changed() {
                form.set_content(content);
            }
            ui.end_row();

            ui.label("Due");
            let due_responses = ui
                .horizontal(|ui| {
                    let due = form.due_date();

                    let mut year = due.year;
                    let year_response = ui.add(egui::DragValue::new(&mut year).prefix("year "));
                    if year_response.changed() {
                        form.set_year(year);
                    }
                    let mut month = due.month;
                    let month_response = ui.add(egui::DragValue::new(&mut month).prefix("month "));
                    if month_response.changed() {
                        form.set_month(month);
                    }
                    let mut date = due.date;
                    let date_response = ui.add(egui::DragValue::new(&mut date).prefix("date "));
                    if date_response.changed() {
                        form.set_date(date);
                    }
                    [year_response, month_response, date_response]
                })
                .inner;
            ui.end_row();

            (title_response, content_response, due_responses)
        })
        .inner;

    ui.add_space(8.0);
    let (submit, cancel) = ui
        .horizontal(|ui| (ui.button("Submit"), ui.button("Cancel")))
        .inner;
    if submit.clicked() {
        form.submit(dispatch);
    }

    Widgets {
        title,
        content,
        year,
        month,
        date,
        submit,
        cancel,
    }
}
