//! The app shell: routing, the store, and the glue between pages and server.

use todo_shared::{Action, Clock, History, NewTodoForm, Route, TodoListState};

use crate::dispatch::{Dispatcher, Reply, Request};
use crate::pages::{self, DetailIntent, ListIntent, NewTodoIntent};

pub struct TodoApp {
    state: TodoListState,
    history: History,
    /// Present only while the new-todo page is shown.
    new_todo: Option<NewTodoForm>,
    dispatcher: Dispatcher,
    clock: Box<dyn Clock>,
    error: Option<String>,
}

impl TodoApp {
    pub fn new(
        state: TodoListState,
        start: Route,
        dispatcher: Dispatcher,
        clock: impl Clock + 'static,
    ) -> Self {
        let mut app = Self {
            state,
            history: History::new(Route::TodoList),
            new_todo: None,
            dispatcher,
            clock: Box::new(clock),
            error: None,
        };
        if start != Route::TodoList {
            app.navigate(start);
        }
        app
    }

    pub fn state(&self) -> &TodoListState {
        &self.state
    }

    pub fn route(&self) -> &Route {
        self.history.current()
    }

    pub fn new_todo_form(&self) -> Option<&NewTodoForm> {
        self.new_todo.as_ref()
    }

    pub fn new_todo_form_mut(&mut self) -> Option<&mut NewTodoForm> {
        self.new_todo.as_mut()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the new-todo form, if it is open.
    pub fn submit_new_todo(&mut self) {
        if let Some(form) = &self.new_todo {
            form.submit(&mut self.dispatcher);
        }
    }

    pub fn navigate(&mut self, route: Route) {
        self.history.push(route);
        self.enter_current();
    }

    pub fn back(&mut self) {
        if self.history.back() {
            self.enter_current();
        }
    }

    fn dispatch(&mut self, action: Action) {
        self.state.reduce(action);
    }

    /// Set up whatever the current route needs.
    fn enter_current(&mut self) {
        let route = self.history.current().clone();

        // The form lives exactly as long as its page.
        self.new_todo = match route {
            Route::NewTodo => Some(NewTodoForm::new(self.clock.as_ref())),
            _ => None,
        };

        match route {
            Route::TodoList => {
                self.dispatch(Action::ClearSelection);
                self.dispatcher.send(Request::List);
            }
            Route::TodoDetail(id) => {
                match self.state.get(id).cloned() {
                    Some(todo) => self.dispatch(Action::SelectTodo(todo)),
                    None => self.dispatch(Action::ClearSelection),
                }
                self.dispatcher.send(Request::Get(id));
            }
            Route::NewTodo | Route::NotFound(_) => {}
        }
    }

    /// Fold finished requests into the store.
    pub fn process_replies(&mut self) {
        let replies: Vec<Reply> = self.dispatcher.replies().collect();
        for reply in replies {
            match reply {
                Reply::Listed(todos) => self.dispatch(Action::SetTodos(todos)),
                Reply::Fetched(todo) => {
                    if self.route() == &Route::TodoDetail(todo.id) {
                        self.dispatch(Action::SelectTodo(todo));
                    }
                }
                Reply::Created(todo) => {
                    self.error = None;
                    self.dispatch(Action::AddTodo(todo));
                    if self.route() == &Route::NewTodo {
                        self.navigate(Route::TodoList);
                    }
                }
                Reply::Toggled(todo) => self.dispatch(Action::UpdateTodo(todo)),
                Reply::Deleted(id) => {
                    self.dispatch(Action::DeleteTodo(id));
                    if self.route() == &Route::TodoDetail(id) {
                        self.navigate(Route::TodoList);
                    }
                }
                Reply::Failed { request, message } => {
                    log::error!("{request} failed: {message}");
                    self.error = Some(message);
                }
            }
        }
    }

    fn on_list(&mut self, intent: ListIntent) {
        match intent {
            ListIntent::Open(id) => self.navigate(Route::TodoDetail(id)),
            ListIntent::Toggle(id) => self.dispatcher.send(Request::Toggle(id)),
            ListIntent::Delete(id) => self.dispatcher.send(Request::Delete(id)),
            ListIntent::New => self.navigate(Route::NewTodo),
        }
    }

    fn on_detail(&mut self, intent: DetailIntent) {
        match intent {
            DetailIntent::Back => self.back(),
            DetailIntent::Toggle(id) => self.dispatcher.send(Request::Toggle(id)),
            DetailIntent::Delete(id) => self.dispatcher.send(Request::Delete(id)),
        }
    }

    /// Draw one frame.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.process_replies();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.link("Todos").clicked() {
                    self.navigate(Route::TodoList);
                }
                ui.weak(self.route().path());
            });
            if let Some(error) = &self.error {
                ui.colored_label(ui.visuals().error_fg_color, error);
            }
        });

        let mut list_intent = None;
        let mut detail_intent = None;
        let mut new_todo_intent = None;

        egui::CentralPanel::default().show(ctx, |ui| match self.history.current() {
            Route::TodoList => list_intent = pages::todo_list::show(ui, &self.state.todos),
            Route::TodoDetail(_) => {
                detail_intent = pages::todo_detail::show(ui, self.state.selected_todo.as_ref())
            }
            Route::NewTodo => {
                if let Some(form) = self.new_todo.as_mut() {
                    new_todo_intent = pages::new_todo::show(ui, form, &mut self.dispatcher);
                }
            }
            Route::NotFound(path) => {
                ui.heading("Not found");
                ui.label(format!("Nothing lives at {path}."));
            }
        });

        if let Some(intent) = list_intent {
            self.on_list(intent);
        }
        if let Some(intent) = detail_intent {
            self.on_detail(intent);
        }
        if let Some(NewTodoIntent::Cancel) = new_todo_intent {
            self.back();
        }
    }
}
