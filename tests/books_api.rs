//! HTTP integration tests.
//!
//! Starts the router on an ephemeral port and exercises it with reqwest.

use bookshelf_api::app;
use serde_json::{json, Value};

/// Bind to port 0 and return the base url.
async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app()).await.unwrap();
    });
    format!("http://{addr}")
}

async fn add_book(client: &reqwest::Client, base: &str, body: Value) -> Value {
    let resp = client
        .post(format!("{base}/books"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    resp.json().await.unwrap()
}

async fn list(client: &reqwest::Client, base: &str, query: &str) -> Vec<Value> {
    let resp = client
        .get(format!("{base}/books{query}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "success");
    body["data"]["books"].as_array().unwrap().clone()
}

#[tokio::test]
async fn welcome_route() {
    let base = start_server().await;
    let body: Value = reqwest::get(format!("{base}/"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "success");
    assert!(body["message"].as_str().unwrap().contains("/books"));
}

#[tokio::test]
async fn create_returns_full_book() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let body = add_book(
        &client,
        &base,
        json!({
            "name": "Buku A", "year": 2010, "author": "John Doe",
            "summary": "Lorem ipsum", "publisher": "Dicoding Indonesia",
            "pageCount": 100, "readPage": 25
        }),
    )
    .await;

    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Buku berhasil ditambahkan");
    let book = &body["data"];
    assert_eq!(book["id"].as_str().unwrap().len(), 16);
    assert_eq!(book["name"], "Buku A");
    assert_eq!(book["pageCount"], 100);
    assert_eq!(book["readPage"], 25);
    assert_eq!(book["finished"], false);
    assert_eq!(book["reading"], true);
    assert_eq!(book["insertedAt"], book["updatedAt"]);
}

#[tokio::test]
async fn create_rejects_invalid_books() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/books"))
        .json(&json!({ "year": 2010, "pageCount": 10, "readPage": 50 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "status": "fail", "message": "Gagal menambahkan buku. Mohon isi nama buku" })
    );

    let resp = client
        .post(format!("{base}/books"))
        .json(&json!({ "name": "A", "pageCount": 10, "readPage": 50 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount"
    );

    assert!(list(&client, &base, "").await.is_empty());
}

#[tokio::test]
async fn malformed_json_is_a_fail_envelope() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/books"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn finished_filter_example() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let a = add_book(
        &client,
        &base,
        json!({ "name": "Dicoding", "publisher": "Dicoding Indonesia", "pageCount": 100, "readPage": 100 }),
    )
    .await;
    let a_id = a["data"]["id"].as_str().unwrap().to_string();
    let b = add_book(
        &client,
        &base,
        json!({ "name": "Belajar", "publisher": "Penerbit", "pageCount": 50, "readPage": 0 }),
    )
    .await;
    let b_id = b["data"]["id"].as_str().unwrap().to_string();

    let resp = client
        .get(format!("{base}/books/{a_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let detail: Value = resp.json().await.unwrap();
    assert_eq!(detail["data"]["book"]["finished"], true);

    let unfinished = list(&client, &base, "?finished=0").await;
    assert_eq!(
        unfinished,
        vec![json!({ "id": &b_id, "name": "Belajar", "publisher": "Penerbit" })]
    );

    let finished = list(&client, &base, "?finished=1").await;
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0]["id"], a_id);

    let not_reading = list(&client, &base, "?reading=0").await;
    assert_eq!(not_reading.len(), 1);
    assert_eq!(not_reading[0]["id"], b_id);

    let by_name = list(&client, &base, "?name=dico").await;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0]["name"], "Dicoding");
}

#[tokio::test]
async fn list_paginates() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    for name in ["One", "Two", "Three", "Four", "Five"] {
        add_book(&client, &base, json!({ "name": name, "pageCount": 10, "readPage": 1 })).await;
    }

    let names = |books: Vec<Value>| -> Vec<String> {
        books
            .iter()
            .map(|b| b["name"].as_str().unwrap().to_string())
            .collect()
    };

    assert_eq!(names(list(&client, &base, "").await), ["One", "Two"]);
    assert_eq!(names(list(&client, &base, "?page=3").await), ["Five"]);
    assert_eq!(
        names(list(&client, &base, "?page=2&limit=3").await),
        ["Four", "Five"]
    );
    assert!(list(&client, &base, "?page=10").await.is_empty());
}

#[tokio::test]
async fn repeated_query_keys_still_list() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    add_book(&client, &base, json!({ "name": "alpha" })).await;
    add_book(&client, &base, json!({ "name": "beta" })).await;

    let resp = client
        .get(format!("{base}/books?name=a&name=b"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "success");
    let names: Vec<&str> = body["data"]["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["alpha", "beta"]);

    let first_wins = list(&client, &base, "?name=beta&name=alpha").await;
    assert_eq!(first_wins.len(), 1);
    assert_eq!(first_wins[0]["name"], "beta");
}

#[tokio::test]
async fn zero_limit_uses_filter_default() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    for name in ["A", "B", "C"] {
        add_book(&client, &base, json!({ "name": name, "pageCount": 5, "readPage": 5 })).await;
    }

    assert_eq!(list(&client, &base, "?limit=0&finished=1").await.len(), 3);
    assert_eq!(list(&client, &base, "?limit=0").await.len(), 2);
}

#[tokio::test]
async fn get_unknown_book_is_not_found() {
    let base = start_server().await;
    let resp = reqwest::get(format!("{base}/books/xxxxx")).await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "status": "fail", "message": "Buku tidak ditemukan" })
    );
}

#[tokio::test]
async fn update_round_trip() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let created = add_book(
        &client,
        &base,
        json!({ "name": "Draft", "pageCount": 10, "readPage": 0 }),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();
    let inserted_at = created["data"]["insertedAt"].clone();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let resp = client
        .put(format!("{base}/books/{id}"))
        .json(&json!({
            "name": "Final", "year": 2021, "author": "Jane", "summary": "Done",
            "publisher": "Pub", "pageCount": 200, "readPage": 200
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "status": "success", "message": "Buku berhasil diperbarui" })
    );

    let detail: Value = client
        .get(format!("{base}/books/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let book = &detail["data"]["book"];
    assert_eq!(book["id"], id.as_str());
    assert_eq!(book["name"], "Final");
    assert_eq!(book["year"], 2021);
    assert_eq!(book["author"], "Jane");
    assert_eq!(book["summary"], "Done");
    assert_eq!(book["publisher"], "Pub");
    assert_eq!(book["pageCount"], 200);
    assert_eq!(book["readPage"], 200);
    assert_eq!(book["finished"], true);
    assert_eq!(book["insertedAt"], inserted_at);

    let inserted: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(inserted_at).unwrap();
    let updated: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(book["updatedAt"].clone()).unwrap();
    assert!(updated > inserted);
}

#[tokio::test]
async fn update_failures() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/books/missing"))
        .json(&json!({ "name": "", "pageCount": 1, "readPage": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let resp = client
        .put(format!("{base}/books/missing"))
        .json(&json!({ "name": "A", "pageCount": 1, "readPage": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Gagal memperbarui buku. Id tidak ditemukan");
}

#[tokio::test]
async fn delete_book() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let created = add_book(&client, &base, json!({ "name": "Temp" })).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let resp = client
        .delete(format!("{base}/books/unknown"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Buku gagal dihapus. Id tidak ditemukan");
    assert_eq!(list(&client, &base, "").await.len(), 1);

    let resp = client
        .delete(format!("{base}/books/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Buku berhasil dihapus");

    let resp = client
        .get(format!("{base}/books/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}
