#![allow(dead_code)]

use notification_service::config::NotificationConfig;
use notification_service::startup::Application;
use service_core::config::Config as CoreConfig;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_in("development").await
    }

    pub async fn spawn_in(environment: &str) -> Self {
        // Use random port for testing (port 0)
        let config = NotificationConfig {
            common: CoreConfig {
                port: 0,
                environment: Some(environment.to_string()),
            },
            ..NotificationConfig::default()
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn post_notification(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url("/notification/create-new-notification"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
