fn main() {
    todo_build::frontend("todo-frontend");
}
