mod common;

use anyhow::Result;
use landadmin_api::auth::{generate_jwt_with, Claims};
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn missing_token_is_authentication_required() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/api/projects/pending")).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        res.json::<Value>().await?,
        json!({ "success": false, "message": "Authentication required" })
    );
    Ok(())
}

#[tokio::test]
async fn wrong_role_gets_role_specific_message() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .put(server.url("/api/lots/9/valuation"))
        .bearer_auth(common::token_for("land_officer"))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        res.json::<Value>().await?,
        json!({
            "success": false,
            "message": "Access denied. Only Financial Officers can perform this action."
        })
    );
    Ok(())
}

#[tokio::test]
async fn matching_role_reaches_handler() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .put(server.url("/api/lots/9/valuation"))
        .bearer_auth(common::token_for("financial_officer"))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["method"], "PUT");
    assert_eq!(body["data"]["route"], "/api/lots/:id/valuation");
    assert_eq!(body["data"]["user"]["role"], "financial_officer");
    Ok(())
}

#[tokio::test]
async fn role_set_gate_lists_required_roles() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(server.url("/api/assignments/land-officers"))
        .bearer_auth(common::token_for("land_officer"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        res.json::<Value>().await?["message"],
        "Access denied. Required roles: project_engineer, chief_engineer"
    );

    let res = client
        .get(server.url("/api/assignments/land-officers"))
        .bearer_auth(common::token_for("chief_engineer"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn unknown_role_claim_is_forbidden() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(server.url("/api/lots/plan/1"))
        .bearer_auth(common::token_for("landowner"))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        res.json::<Value>().await?["message"],
        "Access denied. Required roles: chief_engineer, project_engineer, financial_officer, land_officer"
    );
    Ok(())
}

#[tokio::test]
async fn expired_token_is_invalid() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(server.url("/api/projects/pending"))
        .bearer_auth(common::expired_token_for("chief_engineer"))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        res.json::<Value>().await?,
        json!({ "success": false, "message": "Invalid token" })
    );
    Ok(())
}

#[tokio::test]
async fn token_signed_with_another_secret_is_invalid() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let claims = Claims::new("attacker", "chief_engineer");
    let forged = generate_jwt_with(&claims, "landadmin-development-secret")?;

    let res = client
        .get(server.url("/api/projects/pending"))
        .bearer_auth(forged)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        res.json::<Value>().await?,
        json!({ "success": false, "message": "Invalid token" })
    );
    Ok(())
}

#[tokio::test]
async fn invalid_token_is_rejected_before_gate() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for header in ["Bearer not.a.token", "Basic dXNlcjpwYXNz"] {
        let res = client
            .get(server.url("/api/messages"))
            .header("Authorization", header)
            .send()
            .await?;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "header {}", header);
        assert_eq!(
            res.json::<Value>().await?,
            json!({ "success": false, "message": "Invalid token" })
        );
    }
    Ok(())
}
