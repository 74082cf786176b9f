use reqwest::{redirect::Policy, Client};
use tokio::net::TcpListener;

/// HTTP test application wrapper
///
/// Runs the real router on a random port so each test gets its own server.
pub struct TestApp {
    /// Server base URL (e.g., "http://127.0.0.1:54321")
    pub address: String,
    /// HTTP client for making requests
    pub client: Client,
}

impl TestApp {
    pub async fn new() -> Self {
        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{port}");

        tokio::spawn(async move {
            axum::serve(listener, calc_web::app()).await.unwrap();
        });

        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { address, client }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// POST the form fields to /report and return the page body
    pub async fn post_report(&self, fields: &[(&str, &str)]) -> String {
        let response = self
            .client
            .post(self.url("/report"))
            .form(fields)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        response.text().await.unwrap()
    }
}
