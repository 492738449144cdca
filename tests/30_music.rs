mod common;

use anyhow::Result;
use melo_api::database::{Collection, DocumentStore};
use mongodb::bson::{doc, oid::ObjectId, Bson};
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn create_music_with_existing_user_and_baby_is_accepted() -> Result<()> {
    let (server, store) = common::spawn().await?;
    let user_id = common::create_user(&server).await?;
    let baby_id = common::create_baby(&server, &user_id).await?;

    let res = server
        .client
        .post(server.url("/models/music"))
        .json(&common::music_body(&user_id, &baby_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::ACCEPTED);
    let body: Value = res.json().await?;
    let music_id = body["music_id"].as_str().expect("music_id string").to_string();
    assert_eq!(body.as_object().unwrap().len(), 1);

    let stored = store
        .find_one(Collection::Music, doc! { "_id": ObjectId::parse_str(&music_id)? })
        .await?
        .expect("stored music record");
    assert_eq!(stored.get("music_url"), Some(&Bson::Null));
    assert_eq!(stored.get_str("user_id")?, user_id);
    assert_eq!(stored.get_str("baby_id")?, baby_id);
    assert_eq!(stored.get_str("duration")?, "1m30s");

    Ok(())
}

#[tokio::test]
async fn create_music_for_missing_baby_is_404() -> Result<()> {
    let (server, store) = common::spawn().await?;
    let user_id = common::create_user(&server).await?;

    let res = server
        .client
        .post(server.url("/models/music"))
        .json(&common::music_body(&user_id, "64b7f0c2e4b0a1a2b3c4d5e6"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?["message"], "Baby Not found");
    assert_eq!(store.count(Collection::Music).await, 0);

    Ok(())
}

#[tokio::test]
async fn create_music_for_missing_user_is_404() -> Result<()> {
    let (server, store) = common::spawn().await?;

    let res = server
        .client
        .post(server.url("/models/music"))
        .json(&common::music_body("64b7f0c2e4b0a1a2b3c4d5e6", "64b7f0c2e4b0a1a2b3c4d5e7"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?["message"], "User Not found");
    assert_eq!(store.count(Collection::Music).await, 0);

    Ok(())
}

#[tokio::test]
async fn create_music_rejects_unknown_instrument() -> Result<()> {
    let (server, store) = common::spawn().await?;
    let user_id = common::create_user(&server).await?;
    let baby_id = common::create_baby(&server, &user_id).await?;

    let mut body = common::music_body(&user_id, &baby_id);
    body["instrument"] = json!("violin");

    let res = server.client.post(server.url("/models/music")).json(&body).send().await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(store.count(Collection::Music).await, 0);

    Ok(())
}

#[tokio::test]
async fn get_and_delete_music() -> Result<()> {
    let (server, store) = common::spawn().await?;
    let user_id = common::create_user(&server).await?;
    let baby_id = common::create_baby(&server, &user_id).await?;

    let created: Value = server
        .client
        .post(server.url("/models/music"))
        .json(&common::music_body(&user_id, &baby_id))
        .send()
        .await?
        .json()
        .await?;
    let music_id = created["music_id"].as_str().unwrap().to_string();
    let query = format!("user_id={}&baby_id={}&music_id={}", user_id, baby_id, music_id);

    let res = server.client.get(server.url(&format!("/models/music?{}", query))).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let music: Value = res.json().await?;
    assert_eq!(music["id"], json!(music_id));
    assert_eq!(music["music_url"], Value::Null);
    assert_eq!(music["genre"], "jazz");
    assert!(music.get("_id").is_none());

    let res = server.client.delete(server.url(&format!("/models/music?{}", query))).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({ "music_id": music_id }));
    assert_eq!(store.count(Collection::Music).await, 0);

    let res = server.client.get(server.url(&format!("/models/music?{}", query))).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn music_lookup_is_scoped_to_baby() -> Result<()> {
    let (server, _store) = common::spawn().await?;
    let user_id = common::create_user(&server).await?;
    let baby_id = common::create_baby(&server, &user_id).await?;
    let other_baby = common::create_baby(&server, &user_id).await?;

    let created: Value = server
        .client
        .post(server.url("/models/music"))
        .json(&common::music_body(&user_id, &baby_id))
        .send()
        .await?
        .json()
        .await?;
    let music_id = created["music_id"].as_str().unwrap();

    let res = server
        .client
        .delete(server.url(&format!(
            "/models/music?user_id={}&baby_id={}&music_id={}",
            user_id, other_baby, music_id
        )))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}
