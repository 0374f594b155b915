//! Todo Commands
//!
//! Frontend bindings for the todo backend commands.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::invoke;
use crate::models::Todo;
use crate::service::{DataError, DataResult};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct TodoArgs<'a> {
    todo: &'a Todo,
}

// ========================
// Commands
// ========================

/// Invoke a command and decode its result
async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> DataResult<T> {
    let result = invoke(cmd, args).await.map_err(|e| {
        DataError::Invoke(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
    })?;
    serde_wasm_bindgen::from_value(result).map_err(|e| DataError::Serialization(e.to_string()))
}

fn to_args<T: Serialize>(args: &T) -> DataResult<JsValue> {
    serde_wasm_bindgen::to_value(args).map_err(|e| DataError::Serialization(e.to_string()))
}

pub async fn list_todos() -> DataResult<Vec<Todo>> {
    call("list_todos", JsValue::NULL).await
}

pub async fn get_todo(id: &str) -> DataResult<Todo> {
    call("get_todo", to_args(&IdArgs { id })?).await
}

pub async fn create_todo(todo: &Todo) -> DataResult<Todo> {
    call("create_todo", to_args(&TodoArgs { todo })?).await
}

pub async fn update_todo(todo: &Todo) -> DataResult<Todo> {
    call("update_todo", to_args(&TodoArgs { todo })?).await
}

pub async fn delete_todo(id: &str) -> DataResult<()> {
    let js_args = to_args(&IdArgs { id })?;
    invoke("delete_todo", js_args).await.map_err(|e| {
        DataError::Invoke(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
    })?;
    Ok(())
}
