use todo_shared::{Todo, TodoId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailIntent {
    Back,
    Toggle(TodoId),
    Delete(TodoId),
}

/// One todo. `None` while it is still being fetched.
pub fn show(ui: &mut egui::Ui, todo: Option<&Todo>) -> Option<DetailIntent> {
    let mut intent = None;

    let Some(todo) = todo else {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading...");
        });
        if ui.button("Back").clicked() {
            intent = Some(DetailIntent::Back);
        }
        return intent;
    };

    ui.heading(&todo.title);
    ui.weak(format!("Due {}", todo.due_date));
    ui.add_space(8.0);
    ui.label(&todo.content);
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui.button("Back").clicked() {
            intent = Some(DetailIntent::Back);
        }
        let label = if todo.done { "Mark not done" } else { "Mark done" };
        if ui.button(label).clicked() {
            intent = Some(DetailIntent::Toggle(todo.id));
        }
        if ui.button("Delete").clicked() {
            intent = Some(DetailIntent::Delete(todo.id));
        }
    });

    intent
}
