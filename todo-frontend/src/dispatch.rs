//! Requests to the todo API and the replies that come back.
//!
//! The UI thread never waits: [`Dispatcher::send`] hands a request to a
//! [`Transport`], which answers later through a channel. The app drains the
//! channel once per frame.

use std::sync::mpsc::{Receiver, Sender, TryIter, channel};

use todo_shared::{Todo, TodoDispatch, TodoDraft, TodoId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List,
    Get(TodoId),
    Post(TodoDraft),
    Toggle(TodoId),
    Delete(TodoId),
}

impl Request {
    pub fn name(&self) -> &'static str {
        match self {
            Request::List => "list",
            Request::Get(_) => "get",
            Request::Post(_) => "post",
            Request::Toggle(_) => "toggle",
            Request::Delete(_) => "delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Listed(Vec<Todo>),
    Fetched(Todo),
    Created(Todo),
    Toggled(Todo),
    Deleted(TodoId),
    Failed {
        request: &'static str,
        message: String,
    },
}

/// Carries a request to the server and sends exactly one reply back.
pub trait Transport {
    fn send(&self, request: Request, reply: Sender<Reply>);
}

pub struct Dispatcher {
    transport: Box<dyn Transport>,
    tx: Sender<Reply>,
    rx: Receiver<Reply>,
}

impl Dispatcher {
    pub fn new(transport: impl Transport + 'static) -> Self {
        let (tx, rx) = channel();
        Self {
            transport: Box::new(transport),
            tx,
            rx,
        }
    }

    pub fn send(&self, request: Request) {
        log::debug!("sending {} request", request.name());
        self.transport.send(request, self.tx.clone());
    }

    /// Replies received so far.
    pub fn replies(&self) -> TryIter<'_, Reply> {
        self.rx.try_iter()
    }
}

impl TodoDispatch for Dispatcher {
    fn post_todo(&mut self, draft: TodoDraft) {
        self.send(Request::Post(draft));
    }
}

#[cfg(feature = "hydrate")]
pub use http::HttpTransport;

#[cfg(feature = "hydrate")]
mod http {
    use std::sync::mpsc::Sender;

    use todo_shared::client::{ClientError, TodoClient};

    use super::{Reply, Request, Transport};

    /// Sends requests with `fetch` and wakes egui when the reply lands.
    pub struct HttpTransport {
        client: TodoClient,
        ctx: egui::Context,
    }

    impl HttpTransport {
        pub fn new(client: TodoClient, ctx: egui::Context) -> Self {
            Self { client, ctx }
        }
    }

    impl Transport for HttpTransport {
        fn send(&self, request: Request, reply: Sender<Reply>) {
            let client = self.client.clone();
            let ctx = self.ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let name = request.name();
                let result: Result<Reply, ClientError> = match request {
                    Request::List => client.list().await.map(Reply::Listed),
                    Request::Get(id) => client.get(id).await.map(Reply::Fetched),
                    Request::Post(draft) => client.post_todo(&draft).await.map(Reply::Created),
                    Request::Toggle(id) => client.toggle(id).await.map(Reply::Toggled),
                    Request::Delete(id) => client.delete(id).await.map(|()| Reply::Deleted(id)),
                };
                let message = result.unwrap_or_else(|e| {
                    log::error!("{name} request failed: {e}");
                    Reply::Failed {
                        request: name,
                        message: e.to_string(),
                    }
                });
                let _ = reply.send(message);
                ctx.request_repaint();
            });
        }
    }
}
