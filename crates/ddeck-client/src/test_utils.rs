//! Test helpers for exercising the design flow without a server
//!
//! Available to downstream crates via the `test-helpers` feature.

use std::collections::VecDeque;
use std::sync::Mutex;

use ddeck_core::{ArchStyle, Complexity, Design, DesignSpec, Error, Result};

use crate::api::DesignApi;

/// A call observed by [`ScriptedApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Submit { prompt: String },
    List,
    FetchOne { id: String },
}

/// A gateway stand-in that replays scripted responses in order.
///
/// Each operation pops the next scripted result for that operation; an
/// unscripted call fails with a service error so tests notice
/// unexpected traffic.
#[derive(Debug, Default)]
pub struct ScriptedApi {
    submits: Mutex<VecDeque<Result<Design>>>,
    lists: Mutex<VecDeque<Result<Vec<Design>>>>,
    fetches: Mutex<VecDeque<Result<Design>>>,
    calls: Mutex<Vec<ApiCall>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_submit(&self, result: Result<Design>) {
        self.submits.lock().unwrap().push_back(result);
    }

    pub fn push_list(&self, result: Result<Vec<Design>>) {
        self.lists.lock().unwrap().push_back(result);
    }

    pub fn push_fetch(&self, result: Result<Design>) {
        self.fetches.lock().unwrap().push_back(result);
    }

    /// Calls observed so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn next<T>(queue: &Mutex<VecDeque<Result<T>>>, op: &str) -> Result<T> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::service(format!("unscripted {op} call"))))
    }
}

impl DesignApi for ScriptedApi {
    async fn submit(&self, spec: &DesignSpec) -> Result<Design> {
        // Mirror the real gateway contract: local validation failures
        // never count as network traffic.
        spec.validate()?;
        self.record(ApiCall::Submit {
            prompt: spec.prompt.clone(),
        });
        Self::next(&self.submits, "submit")
    }

    async fn list(&self) -> Result<Vec<Design>> {
        self.record(ApiCall::List);
        Self::next(&self.lists, "list")
    }

    async fn fetch_one(&self, id: &str) -> Result<Design> {
        self.record(ApiCall::FetchOne { id: id.to_string() });
        Self::next(&self.fetches, "fetch_one")
    }
}

/// Minimal design fixture.
pub fn sample_design(id: &str) -> Design {
    Design {
        id: id.to_string(),
        prompt: format!("Design {id}"),
        style: ArchStyle::Microservices,
        complexity: Complexity::Basic,
        services: vec![],
        created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        user_id: None,
        raw_output: None,
    }
}

/// A spec fixture with a valid prompt.
pub fn sample_spec(prompt: &str) -> DesignSpec {
    DesignSpec {
        prompt: prompt.to_string(),
        style: ArchStyle::EventDriven,
        complexity: Complexity::Basic,
        services: vec!["auth".to_string(), "chat".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DesignApi as _;

    #[tokio::test]
    async fn test_scripted_api_replays_in_order() {
        let api = ScriptedApi::new();
        api.push_fetch(Ok(sample_design("d1")));
        api.push_fetch(Err(Error::not_found("d2")));

        assert_eq!(api.fetch_one("d1").await.unwrap().id, "d1");
        assert!(matches!(
            api.fetch_one("d2").await.unwrap_err(),
            Error::NotFound { .. }
        ));
        assert_eq!(
            api.calls(),
            vec![
                ApiCall::FetchOne { id: "d1".into() },
                ApiCall::FetchOne { id: "d2".into() }
            ]
        );
    }

    #[tokio::test]
    async fn test_unscripted_call_fails_loudly() {
        let api = ScriptedApi::new();
        assert!(api.list().await.is_err());
    }

    #[tokio::test]
    async fn test_submit_validates_before_recording() {
        let api = ScriptedApi::new();
        let mut spec = sample_spec("");
        spec.prompt = "  ".to_string();

        assert!(api.submit(&spec).await.is_err());
        assert!(api.calls().is_empty());
    }
}
