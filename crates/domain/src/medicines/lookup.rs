use serde::Serialize;
use serde_json::Value;

use crate::completion::{CompletionClient, CompletionRequest};
use crate::errors::Error;

use super::inputs::MedicineQuery;
use super::prompt::{build_prompt, SYSTEM_PROMPT};

pub const TEMPERATURE: f32 = 0.3;

/// Shape of a successful lookup.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum LookupResult {
    /// `get_all = false`: the parsed reply, whatever its JSON type
    Single(Value),
    /// `get_all = true`: always a list
    Many(Vec<Value>),
}

/// Runs one lookup: parse names, prompt the model once, parse its reply.
pub async fn lookup(
    client: &dyn CompletionClient,
    query: &MedicineQuery,
) -> Result<LookupResult, Error> {
    let names = query.names();
    let request = CompletionRequest::new(
        SYSTEM_PROMPT.to_string(),
        build_prompt(&names, query.get_all),
        TEMPERATURE,
    );

    let content = client.complete_json(request).await?;
    let value: Value = serde_json::from_str(&content).map_err(Error::MalformedResponse)?;

    Ok(normalize(value, query.get_all))
}

/// Wraps a lone object into a list when every record was requested.
pub fn normalize(value: Value, get_all: bool) -> LookupResult {
    match (get_all, value) {
        (true, Value::Array(items)) => LookupResult::Many(items),
        (true, other) => LookupResult::Many(vec![other]),
        (false, value) => LookupResult::Single(value),
    }
}
