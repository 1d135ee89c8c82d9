//! Shared test helpers for SDK tests.

#![allow(dead_code)]

use pagarme::{Method, PagarMe, PagarMeError, PagarMeResult, QueryExecutor, ServiceConfig};
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

/// One request seen by [`RecordingExecutor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub parameters: BTreeMap<String, String>,
}

/// Executor that answers with canned bodies in order and records requests.
#[derive(Default)]
pub struct RecordingExecutor {
    responses: Mutex<VecDeque<String>>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingExecutor {
    pub fn with_responses<I, S>(responses: I) -> Arc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Call {
        self.calls().pop().expect("no calls recorded")
    }
}

impl QueryExecutor for RecordingExecutor {
    fn execute(
        &self,
        method: Method,
        path: &str,
        parameters: &BTreeMap<String, String>,
    ) -> PagarMeResult<String> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            parameters: parameters.clone(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| PagarMeError::Executor("no canned response left".into()))
    }
}

pub const API_KEY: &str = "ak_test_123";

/// A client over a recording executor answering with `responses`.
pub fn client<I, S>(responses: I) -> (PagarMe, Arc<RecordingExecutor>)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let executor = RecordingExecutor::with_responses(responses);
    let client = PagarMe::new(ServiceConfig::new(API_KEY, "ek_test_123"), executor.clone());
    (client, executor)
}

/// Form parameters from `(key, value)` pairs.
pub fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
