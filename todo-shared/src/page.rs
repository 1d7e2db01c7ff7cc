//! How the server hands initial state to the frontend page.

/// Placeholder in `index.html`, replaced by the server with the state script.
pub const INITIAL_STATE_MARKER: &str = "<!--TODO_INITIAL_STATE-->";

/// `id` of the `<script type="application/json">` element holding the state.
pub const STATE_ELEMENT_ID: &str = "todo-state";
