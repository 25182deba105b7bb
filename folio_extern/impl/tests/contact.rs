use std::net::SocketAddr;

use folio_api_rest::{RestServer, RestServerConfig};
use folio_core_contact_contracts::MockContactService;
use folio_extern_contracts::contact::ContactRelayApiService;
use folio_extern_impl::contact::{ContactRelayApiServiceConfig, ContactRelayApiServiceImpl};
use folio_models::contact::{ContactSubmission, RelayResponse};
use tokio::net::TcpListener;
use url::Url;

#[tokio::test]
async fn sent() {
    let contact =
        MockContactService::new().with_send_message(submission(), RelayResponse::sent());
    let sut = make_sut(contact).await;

    let result = sut.send(submission()).await.unwrap();

    assert_eq!(result, RelayResponse::sent());
}

#[tokio::test]
async fn failed() {
    let contact =
        MockContactService::new().with_send_message(submission(), RelayResponse::failed());
    let sut = make_sut(contact).await;

    let result = sut.send(submission()).await.unwrap();

    assert_eq!(result, RelayResponse::failed());
}

#[tokio::test]
async fn rejected() {
    let sut = make_sut(MockContactService::new()).await;

    let result = sut
        .send(ContactSubmission {
            email: "foo".into(),
            ..submission()
        })
        .await
        .unwrap();

    assert!(!result.success);
    assert_eq!(result.message, "Please enter a valid email address");
}

#[tokio::test]
async fn unreachable() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let sut = make_client(addr);

    sut.send(submission()).await.unwrap_err();
}

#[tokio::test]
async fn not_a_relay() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, axum::Router::new()).await.unwrap();
    });
    let sut = make_client(addr);

    sut.send(submission()).await.unwrap_err();
}

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "A".into(),
        email: "a@b.com".into(),
        message: "hi".into(),
    }
}

async fn make_sut(contact: MockContactService) -> ContactRelayApiServiceImpl {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = RestServer::new(contact, RestServerConfig { addr }).router();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    make_client(addr)
}

fn make_client(addr: SocketAddr) -> ContactRelayApiServiceImpl {
    let endpoint = format!("http://{addr}/").parse::<Url>().unwrap();
    let config = ContactRelayApiServiceConfig::new(&endpoint).unwrap();
    ContactRelayApiServiceImpl::new(config).unwrap()
}
