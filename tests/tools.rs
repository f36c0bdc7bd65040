#![allow(dead_code)]
use hyper::StatusCode;
use routcome::{http::body_to_bytes, Responder};
use std::collections::HashMap;

/// Installs `env_logger` once per test binary. Honours `RUST_LOG`.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Encodes a responder and checks the resulting HTTP response.
pub struct ResponseCaseBuilder<R> {
    name: Option<String>,
    responder: R,

    status: StatusCode,
    headers: HashMap<String, String>,
    absent_headers: Vec<String>,
    body: Vec<u8>,
}

impl<R> ResponseCaseBuilder<R>
where
    R: Responder,
{
    pub fn new(responder: R) -> Self {
        Self {
            name: None,
            responder,
            status: StatusCode::OK,
            headers: HashMap::new(),
            absent_headers: vec![],
            body: vec![],
        }
    }

    pub fn name<T: ToString>(mut self, name: T) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn header<K, L>(mut self, key: K, value: L) -> Self
    where
        K: ToString,
        L: ToString,
    {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn without_header<K: ToString>(mut self, key: K) -> Self {
        self.absent_headers.push(key.to_string());
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        self
    }

    pub fn run(self) -> anyhow::Result<()> {
        init_logger();

        let name = self.name.unwrap_or_default();
        let response = self.responder.into_response()?;

        assert_eq!(response.status(), self.status, "test case {}", name);

        for (key, value) in &self.headers {
            let actual = response
                .headers()
                .get(key.as_str())
                .map(|v| v.to_str())
                .transpose()?;
            assert_eq!(actual, Some(value.as_str()), "test case {}, header {}", name, key);
        }

        for key in &self.absent_headers {
            assert!(
                response.headers().get(key.as_str()).is_none(),
                "test case {}, unexpected header {}",
                name,
                key
            );
        }

        let body_bytes = body_to_bytes(response.into_body())?.to_vec();
        assert_eq!(
            body_bytes,
            self.body,
            "test case {}, left: {}, right: {}",
            name,
            String::from_utf8_lossy(&body_bytes),
            String::from_utf8_lossy(&self.body)
        );

        Ok(())
    }
}
