mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn expect_not_implemented(res: reqwest::Response, operation: &str) -> Result<()> {
    assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);
    let body: Value = res.json().await?;
    assert_eq!(body["status_code"], 501);
    assert_eq!(body["message"], format!("Not implemented ({})", operation));
    Ok(())
}

#[tokio::test]
async fn chat_endpoints_answer_501() -> Result<()> {
    let (server, _store) = common::spawn().await?;
    let c = &server.client;

    let res = c
        .post(server.url("/chats/"))
        .json(&json!({ "user_id": "u", "title": "t", "content": "c" }))
        .send()
        .await?;
    expect_not_implemented(res, "create_chat").await?;

    // Any body, including one that does not look like a chat
    let res = c.post(server.url("/chats/")).body("not json").send().await?;
    expect_not_implemented(res, "create_chat").await?;

    expect_not_implemented(c.get(server.url("/chats/u1")).send().await?, "get_chats").await?;
    expect_not_implemented(c.get(server.url("/chats/u1/c1")).send().await?, "get_chat").await?;
    expect_not_implemented(c.delete(server.url("/chats/u1/c1")).send().await?, "delete_chat").await?;

    Ok(())
}

#[tokio::test]
async fn letter_endpoints_answer_501() -> Result<()> {
    let (server, _store) = common::spawn().await?;
    let c = &server.client;

    let res = c
        .post(server.url("/letters/"))
        .json(&json!({ "user_id": "u", "title": "t", "content": "c" }))
        .send()
        .await?;
    expect_not_implemented(res, "create_letter").await?;

    expect_not_implemented(c.get(server.url("/letters/u1")).send().await?, "get_letters").await?;
    expect_not_implemented(c.get(server.url("/letters/u1/l1")).send().await?, "get_letter").await?;
    expect_not_implemented(c.delete(server.url("/letters/u1/l1")).send().await?, "delete_letter").await?;

    Ok(())
}
