//! Chat route group mounted under `/api`.
//!
//! Sibling registrant on the same server process as the RPC endpoint and the
//! authentication bridge; it shares nothing with either beyond the router.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::http::server::AppState;

/// One stored chat message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub body: String,
}

/// Incoming message payload.
#[derive(Debug, Deserialize)]
pub struct NewMessage {
    pub body: String,
}

/// In-memory message store shared across requests.
#[derive(Clone, Default)]
pub struct ChatStore {
    messages: Arc<RwLock<Vec<ChatMessage>>>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages in insertion order.
    pub async fn list(&self) -> Vec<ChatMessage> {
        self.messages.read().await.clone()
    }

    pub async fn append(&self, message: ChatMessage) {
        self.messages.write().await.push(message);
    }
}

/// Routes nested under `/api/chat`.
pub fn router() -> Router<AppState> {
    Router::new().route("/messages", get(list_messages).post(post_message))
}

async fn list_messages(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    Json(state.chat.list().await)
}

async fn post_message(
    State(state): State<AppState>,
    Json(input): Json<NewMessage>,
) -> Result<(StatusCode, Json<ChatMessage>), StatusCode> {
    if input.body.trim().is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let message = ChatMessage {
        id: Uuid::new_v4(),
        body: input.body,
    };
    state.chat.append(message.clone()).await;
    Ok((StatusCode::CREATED, Json(message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_keeps_insertion_order() {
        let store = ChatStore::new();
        for body in ["first", "second", "third"] {
            store
                .append(ChatMessage {
                    id: Uuid::new_v4(),
                    body: body.to_string(),
                })
                .await;
        }

        let bodies: Vec<String> = store
            .list()
            .await
            .into_iter()
            .map(|message| message.body)
            .collect();
        assert_eq!(bodies, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn store_clones_share_messages() {
        let store = ChatStore::new();
        let clone = store.clone();
        clone
            .append(ChatMessage {
                id: Uuid::new_v4(),
                body: "shared".to_string(),
            })
            .await;

        assert_eq!(store.list().await.len(), 1);
    }
}
