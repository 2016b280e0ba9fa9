// Per-test server bootstrap so every test observes its own repository.

use tokio::task::JoinHandle;

pub struct TestServer {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// Bind an ephemeral port and serve a fresh match server on it.
pub async fn spawn_server() -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    // The listener is already bound, so requests queue until the server accepts them.
    let handle = tokio::spawn(async move {
        match_server::run(listener).await.expect("server failed");
    });

    TestServer {
        base_url: format!("http://{addr}"),
        handle,
    }
}
