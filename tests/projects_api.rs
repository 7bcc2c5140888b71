//! End-to-end tests for the project API over a real socket.

use reqwest::StatusCode;
use serde_json::{json, Number, Value};

use project_service::client::{ClientError, ProjectClient};
use project_service::projects::{NewProject, Project, ProjectPatch, ProjectStatus};

mod common;

#[tokio::test]
async fn test_health() {
    let server = common::start_server().await;
    let client = ProjectClient::with_client(common::http_client(), &server.base_url());

    let health = client.health().await.unwrap();
    assert_eq!(health.message, "It's working!");
}

#[tokio::test]
async fn test_project_lifecycle() {
    let server = common::start_server().await;
    let http = common::http_client();
    let before = chrono::Utc::now();

    // Create
    let res = http
        .post(server.url("/projects"))
        .json(&json!({"title": "Migrate DB", "priority": 1, "status": "Planejado"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Project = res.json().await.unwrap();
    assert!(!created.id.is_nil());
    assert!(created.created_at >= before);
    assert_eq!(created.description, None);

    // Read
    let path = format!("/projects/{}", created.id);
    let res = http.get(server.url(&path)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: Project = res.json().await.unwrap();
    assert_eq!(fetched, created);

    // Update
    let res = http
        .put(server.url(&path))
        .json(&json!({"status": "Concluído"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Project = res.json().await.unwrap();
    assert_eq!(updated.status, ProjectStatus::Completed);
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.title, created.title);

    // Delete
    let res = http.delete(server.url(&path)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.bytes().await.unwrap().is_empty());

    // Gone
    let res = http.get(server.url(&path)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"message": "Projeto não encontrado"}));
}

#[tokio::test]
async fn test_wire_format() {
    let server = common::start_server().await;
    let http = common::http_client();

    let res = http
        .post(server.url("/projects"))
        .json(&json!({
            "title": "Docs",
            "description": "write them",
            "priority": 3,
            "status": "Em andamento"
        }))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();

    let object = body.as_object().unwrap();
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["createdAt", "description", "id", "priority", "status", "title"]);
    assert_eq!(body["status"], "Em andamento");
    assert!(chrono::DateTime::parse_from_rfc3339(body["createdAt"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_create_validation_leaves_collection_unchanged() {
    let server = common::start_server().await;
    let http = common::http_client();

    let cases = [
        (
            json!({"priority": 1, "status": "Planejado"}),
            "Os campos Título, Prioridade e Status são obrigatórios.",
        ),
        (
            json!({"title": "T", "status": "Planejado"}),
            "Os campos Título, Prioridade e Status são obrigatórios.",
        ),
        (
            json!({"title": "T", "priority": 1}),
            "Os campos Título, Prioridade e Status são obrigatórios.",
        ),
        (
            json!({"title": "T", "priority": "alta", "status": "Planejado"}),
            "A prioridade deve ser registrada como número de 1 (mais alta) a 3 (mais baixa)",
        ),
        (
            json!({"title": "T", "priority": 1, "status": "Done"}),
            "O status deve ser um dos seguintes: Planejado, Em andamento, Concluído, Cancelado",
        ),
    ];

    for (payload, message) in cases {
        let res = http
            .post(server.url("/projects"))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["message"], message);
    }

    assert!(server.store.is_empty());
}

#[tokio::test]
async fn test_list_keeps_insertion_order() {
    let server = common::start_server().await;
    let client = ProjectClient::with_client(common::http_client(), &server.base_url());

    let mut ids = Vec::new();
    for (title, priority) in [("low", 3), ("high", 1), ("mid", 2)] {
        let project = client
            .create(&NewProject {
                title: title.into(),
                description: None,
                priority: priority.into(),
                status: ProjectStatus::Planned,
            })
            .await
            .unwrap();
        ids.push(project.id);
    }

    let listed: Vec<_> = client.list().await.unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(listed, ids);

    client.delete(&ids[1].to_string()).await.unwrap();
    let listed: Vec<_> = client.list().await.unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(listed, [ids[0], ids[2]]);
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let server = common::start_server().await;
    let client = ProjectClient::with_client(common::http_client(), &server.base_url());
    let unknown = uuid::Uuid::new_v4().to_string();

    for result in [
        client.get(&unknown).await.map(|_| ()),
        client.update(&unknown, &ProjectPatch::default()).await.map(|_| ()),
        client.delete(&unknown).await,
    ] {
        match result {
            Err(ClientError::Api { status, message }) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(message, "Projeto não encontrado");
            }
            other => panic!("expected 404, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_delete_is_not_repeatable() {
    let server = common::start_server().await;
    let client = ProjectClient::with_client(common::http_client(), &server.base_url());

    let project = client
        .create(&NewProject {
            title: "once".into(),
            description: None,
            priority: 1.into(),
            status: ProjectStatus::Cancelled,
        })
        .await
        .unwrap();
    let id = project.id.to_string();

    assert!(client.delete(&id).await.is_ok());
    assert!(matches!(
        client.delete(&id).await,
        Err(ClientError::Api { status, .. }) if status == StatusCode::NOT_FOUND
    ));
}

#[tokio::test]
async fn test_update_through_client_clears_description() {
    let server = common::start_server().await;
    let client = ProjectClient::with_client(common::http_client(), &server.base_url());

    let project = client
        .create(&NewProject {
            title: "t".into(),
            description: Some("to be removed".into()),
            priority: 2.into(),
            status: ProjectStatus::Planned,
        })
        .await
        .unwrap();

    let patch = ProjectPatch {
        description: Some(None),
        priority: Some(1.into()),
        ..Default::default()
    };
    let updated = client.update(&project.id.to_string(), &patch).await.unwrap();

    assert_eq!(updated.description, None);
    assert_eq!(updated.priority, Number::from(1));
    assert_eq!(updated.title, "t");
}

#[tokio::test]
async fn test_priority_accepts_any_json_number() {
    let server = common::start_server().await;
    let http = common::http_client();

    for raw in ["1.5", "18446744073709551615", "1e20", "-3"] {
        let body = format!(r#"{{"title": "T", "priority": {}, "status": "Planejado"}}"#, raw);
        let res = http
            .post(server.url("/projects"))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED, "priority {}", raw);

        let created: Value = res.json().await.unwrap();
        let sent: Value = serde_json::from_str(raw).unwrap();
        assert_eq!(created["priority"], sent, "priority {}", raw);
    }
    assert_eq!(server.store.len(), 4);
}

#[tokio::test]
async fn test_update_without_body_keeps_record() {
    let server = common::start_server().await;
    let http = common::http_client();

    let res = http
        .post(server.url("/projects"))
        .json(&json!({"title": "T", "priority": 2, "status": "Planejado"}))
        .send()
        .await
        .unwrap();
    let created: Project = res.json().await.unwrap();

    let res = http
        .put(server.url(&format!("/projects/{}", created.id)))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let unchanged: Project = res.json().await.unwrap();
    assert_eq!(unchanged, created);
}

#[tokio::test]
async fn test_body_limit() {
    let mut config = project_service::ServiceConfig::default();
    config.limits.max_body_bytes = 64;
    let server = common::start_server_with(config).await;
    let http = common::http_client();

    let res = http
        .post(server.url("/projects"))
        .json(&json!({"title": "x".repeat(500), "priority": 1, "status": "Planejado"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(server.store.is_empty());
}
