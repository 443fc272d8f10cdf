use greetboard::{ApiClient, AppState, ClientError, InsertGreeting, MemoryStorage};
use std::sync::Arc;
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let state = AppState::new(Arc::new(MemoryStorage::new()));
    let app = greetboard::app(state, 64 * 1024);
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server failed");
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn client_drives_counter_through_contract() {
    let client = ApiClient::new(spawn_server().await);

    assert_eq!(client.counter().await.unwrap().value, 0);
    client.increment().await.unwrap();
    client.increment().await.unwrap();
    assert_eq!(client.decrement().await.unwrap().value, 1);
    assert_eq!(client.reset().await.unwrap().value, 0);
}

#[tokio::test]
async fn client_creates_lists_and_deletes_greetings() {
    let client = ApiClient::new(format!("{}/", spawn_server().await));

    let created = client
        .create_greeting(&InsertGreeting::new("A", "B"))
        .await
        .unwrap();
    assert_eq!(client.greetings().await.unwrap(), vec![created.clone()]);

    assert!(client.delete_greeting(created.id).await.unwrap());
    assert!(!client.delete_greeting(created.id).await.unwrap());
    assert!(client.greetings().await.unwrap().is_empty());
}

#[tokio::test]
async fn client_surfaces_validation_errors() {
    let client = ApiClient::new(spawn_server().await);

    match client.create_greeting(&InsertGreeting::new("A", "")).await {
        Err(ClientError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("message")),
        other => panic!("expected validation error, got {:?}", other),
    }
}
