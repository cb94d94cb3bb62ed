//! 重启恢复测试 - 状态写入 redb 后重新打开工作目录

mod common;

use common::TestApp;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_state_survives_restart() {
    let app = TestApp::new();
    let settings = app.configure(2, 3).await;
    app.post("/update_headcount", json!({ "headcount": 3 })).await;
    let (_, body) = app
        .post("/update_headcount", json!({ "headcount": 7 }))
        .await;
    assert_eq!(body[0]["queue_no"], 1);

    let TestApp { dir, state, router } = app;
    drop(router);
    drop(state);

    let app = TestApp::in_dir(dir);
    let (status, owner) = app.get("/owner").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(owner["id"], settings["id"]);
    assert_eq!(owner["table_count"], json!([]));

    let (_, queue) = app.get("/get_queue").await;
    assert_eq!(queue, json!([1]));

    // 号码在重启后继续递增
    let (_, body) = app
        .post("/update_headcount", json!({ "headcount": 1 }))
        .await;
    assert_eq!(body[0]["queue_no"], 2);
}

#[tokio::test]
async fn test_called_ticket_table_survives_restart() {
    let app = TestApp::new();
    app.configure(1, 2).await;
    app.post("/update_headcount", json!({ "headcount": 2 })).await;
    app.post("/update_headcount", json!({ "headcount": 2 })).await;
    app.post("/table_unallocate", json!({ "table_name": "T1" }))
        .await;
    let (status, _) = app
        .post("/allocate_queue", json!({ "queue_no": 1, "table_name": ["T1"] }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let TestApp { dir, state, router } = app;
    drop(router);
    drop(state);

    let app = TestApp::in_dir(dir);
    let (_, tables) = app.get("/tables").await;
    assert_eq!(
        tables,
        json!([{ "name": "T1", "occupied": true, "queue_no": 1 }])
    );
}
