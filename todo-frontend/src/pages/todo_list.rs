use todo_shared::{Todo, TodoId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListIntent {
    Open(TodoId),
    Toggle(TodoId),
    Delete(TodoId),
    New,
}

pub fn show(ui: &mut egui::Ui, todos: &[Todo]) -> Option<ListIntent> {
    let mut intent = None;

    ui.horizontal(|ui| {
        ui.heading("Todo List");
        if ui.button("New todo").clicked() {
            intent = Some(ListIntent::New);
        }
    });
    ui.add_space(8.0);

    if todos.is_empty() {
        ui.weak("Nothing to do.");
        return intent;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for todo in todos {
            ui.horizontal(|ui| {
                let mut done = todo.done;
                if ui.checkbox(&mut done, "").changed() {
                    intent = Some(ListIntent::Toggle(todo.id));
                }

                let mut title = egui::RichText::new(&todo.title);
                if todo.done {
                    title = title.strikethrough().weak();
                }
                if ui.link(title).clicked() {
                    intent = Some(ListIntent::Open(todo.id));
                }
                ui.weak(todo.due_date.to_string());

                if ui.small_button("Delete").clicked() {
                    intent = Some(ListIntent::Delete(todo.id));
                }
            });
        }
    });

    intent
}
