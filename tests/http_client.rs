//! HTTP client tests
//!
//! `HttpBooksApi` against a mock server: request shapes, error envelope
//! decoding, and the coordinator's rollback when the server refuses.

mod common;

use assert_matches::assert_matches;
use bookshelf::client::{
    ApiError, BooksApi, Config, HttpBooksApi, ListStore, MutationCoordinator, MutationOutcome,
    Rollback,
};
use bookshelf::shared::{Book, NewBook, RecordId};
use common::{book, id_of};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> HttpBooksApi {
    HttpBooksApi::new(Config::for_server(server.uri()).unwrap())
}

#[tokio::test]
async fn test_list_books() {
    let server = MockServer::start().await;
    let books = vec![book('A', "T1"), book('B', "T2")];
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&books))
        .expect(1)
        .mount(&server)
        .await;

    let listed = api_for(&server).list_books().await.unwrap();
    assert_eq!(listed, books);
}

#[tokio::test]
async fn test_list_rejects_short_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "abc", "title": "T", "author": "A", "comments": [] }
        ])))
        .mount(&server)
        .await;

    let result = api_for(&server).list_books().await;
    assert_matches!(result, Err(ApiError::Decode { .. }));
}

#[tokio::test]
async fn test_add_book_sends_title_and_author() {
    let server = MockServer::start().await;
    let created = book('C', "Dune");
    Mock::given(method("POST"))
        .and(path("/api/books"))
        .and(body_json(json!({ "title": "Dune", "author": "Author" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&created))
        .expect(1)
        .mount(&server)
        .await;

    let result = api_for(&server)
        .add_book(&NewBook::new("Dune", "Author"))
        .await
        .unwrap();
    assert_eq!(result, created);
}

#[tokio::test]
async fn test_error_envelope_is_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/books"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "error": "missing required field title" })),
        )
        .mount(&server)
        .await;

    let error = api_for(&server)
        .add_book(&NewBook::new("", "Author"))
        .await
        .unwrap_err();
    assert_eq!(error, ApiError::server(400, "missing required field title"));
}

#[tokio::test]
async fn test_non_json_error_body_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let error = api_for(&server).list_books().await.unwrap_err();
    assert_eq!(error, ApiError::server(502, "Bad Gateway"));
}

#[tokio::test]
async fn test_delete_book_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/books/{}", id_of('A'))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "delete successful" })))
        .expect(1)
        .mount(&server)
        .await;

    api_for(&server).delete_book(&id_of('A')).await.unwrap();
}

#[tokio::test]
async fn test_reserved_characters_in_id_stay_in_one_segment() {
    let server = MockServer::start().await;
    let cases = [
        ("aaaaaaaaaaaaaaaaaaaaa/..", "/api/books/aaaaaaaaaaaaaaaaaaaaa%2F.."),
        ("aaaaaaaaaaaaaaaaaaaa#xyz", "/api/books/aaaaaaaaaaaaaaaaaaaa%23xyz"),
        ("aaaaaaaaaaaaaaaaaaaaaaa?", "/api/books/aaaaaaaaaaaaaaaaaaaaaaa%3F"),
    ];
    for (_, encoded) in cases {
        Mock::given(method("DELETE"))
            .and(path(encoded))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "result": "delete successful" })),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let api = api_for(&server);
    for (raw, _) in cases {
        let id = RecordId::parse(raw).unwrap();
        api.delete_book(&id).await.unwrap();
    }
}

#[tokio::test]
async fn test_delete_confirmed_by_status_alone() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/books/{}", id_of('A'))))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/books/{}", id_of('B'))))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let store = ListStore::with_books(vec![book('A', "T1"), book('B', "T2")]).unwrap();
    let coordinator = MutationCoordinator::new(api_for(&server), store.clone());

    assert_eq!(
        coordinator.remove_optimistically(&id_of('A')).await,
        MutationOutcome::Confirmed
    );
    assert_eq!(
        coordinator.remove_optimistically(&id_of('B')).await,
        MutationOutcome::Confirmed
    );
    assert!(store.snapshot().is_empty());
}

#[tokio::test]
async fn test_add_comment_body() {
    let server = MockServer::start().await;
    let mut commented = book('A', "T1");
    commented
        .comments
        .push(bookshelf::shared::Comment::new(id_of('A'), "nice"));
    Mock::given(method("POST"))
        .and(path(format!("/api/books/{}", id_of('A'))))
        .and(body_json(json!({ "comment": "nice" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&commented))
        .mount(&server)
        .await;

    let result = api_for(&server).add_comment(&id_of('A'), "nice").await.unwrap();
    assert_eq!(result, commented);
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let server = MockServer::start().await;
    let api = api_for(&server);
    drop(server);

    let result = api.delete_book(&id_of('A')).await;
    assert_matches!(result, Err(ApiError::Network { .. }));
}

#[tokio::test]
async fn test_delete_success_scenario() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/books/{}", id_of('A'))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "delete successful" })))
        .mount(&server)
        .await;

    let store = ListStore::with_books(vec![book('A', "T1"), book('B', "T2")]).unwrap();
    let coordinator = MutationCoordinator::new(api_for(&server), store.clone());

    let outcome = coordinator.remove_optimistically(&id_of('A')).await;

    assert_eq!(outcome, MutationOutcome::Confirmed);
    assert_eq!(store.snapshot().books(), &[book('B', "T2")]);
}

#[tokio::test]
async fn test_delete_rejected_by_server_rolls_back() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "no book exists" })),
        )
        .mount(&server)
        .await;

    let books = vec![book('A', "T1"), book('B', "T2")];
    let store = ListStore::with_books(books.clone()).unwrap();
    let coordinator = MutationCoordinator::new(api_for(&server), store.clone());

    let outcome = coordinator.remove_optimistically(&id_of('B')).await;

    assert_eq!(
        outcome,
        MutationOutcome::RolledBack {
            error: ApiError::server(400, "no book exists"),
            rollback: Rollback::Exact,
        }
    );
    assert_eq!(store.snapshot().to_vec(), books);
}

#[tokio::test]
async fn test_undecodable_success_body_rolls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let store = ListStore::new();
    let coordinator = MutationCoordinator::new(api_for(&server), store.clone());

    let outcome = coordinator
        .add_optimistically(NewBook::new("Dune", "Author"))
        .await;

    assert_matches!(
        outcome,
        MutationOutcome::RolledBack { error: ApiError::Decode { .. }, rollback: Rollback::Exact }
    );
    assert_eq!(store.snapshot().books(), &[] as &[Book]);
}
