mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn register_login_and_me() {
    let app = TestApp::spawn().await;
    let token = app.login_as("coach").await;

    let (status, body) = app.get("/auth/me", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "coach");
    assert!(body["last_login"].is_string());
    assert!(body.get("password_hash").is_none());

    let duplicate = json!({ "username": "COACH", "password": "another-pass" });
    let (status, body) = app
        .request(Method::POST, "/auth/register", None, Some(duplicate))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflict");
}

#[tokio::test]
async fn login_reports_token_shape_and_rejects_bad_passwords() {
    let app = TestApp::spawn().await;
    app.login_as("coach").await;

    let (status, body) = app
        .request(
            Method::POST,
            "/auth/login",
            None,
            Some(json!({ "username": "coach", "password": "secret123" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 900);

    let (status, body) = app
        .request(
            Method::POST,
            "/auth/login",
            None,
            Some(json!({ "username": "coach", "password": "wrong-password" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn registration_is_validated() {
    let app = TestApp::spawn().await;
    for payload in [
        json!({ "username": "ab", "password": "secret123" }),
        json!({ "username": "coach", "password": "12345" }),
        json!({ "username": "coach" }),
    ] {
        let (status, body) = app
            .request(Method::POST, "/auth/register", None, Some(payload))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "BadRequest");
    }
}

#[tokio::test]
async fn api_requires_a_token() {
    let app = TestApp::spawn().await;
    let (status, body) = app.request(Method::GET, "/api/games", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");

    let (status, _) = app.get("/api/games", "not-a-token").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn teams_crud() {
    let app = TestApp::spawn().await;
    let token = app.login_as("coach").await;

    let bears = app.create_team(&token, "Chicago Bears", "chi").await;
    let (status, body) = app.get(&format!("/api/teams/{bears}"), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["abbreviation"], "CHI");

    let (status, _) = app
        .post(
            "/api/teams",
            &token,
            json!({ "name": "Chicago Bears", "city": "Chicago", "abbreviation": "CHB" }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .post(
            "/api/teams",
            &token,
            json!({ "name": "Bad Abbr", "city": "Nowhere", "abbreviation": "X1" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .request(Method::DELETE, &format!("/api/teams/{bears}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.get(&format!("/api/teams/{bears}"), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");
}

#[tokio::test]
async fn games_are_scheduled_scored_and_filtered() {
    let app = TestApp::spawn().await;
    let token = app.login_as("coach").await;
    let bears = app.create_team(&token, "Chicago Bears", "CHI").await;
    let lions = app.create_team(&token, "Detroit Lions", "DET").await;
    let packers = app.create_team(&token, "Green Bay Packers", "GB").await;

    let (status, game) = app
        .post(
            "/api/games",
            &token,
            json!({ "season": 2024, "week": 1, "home_team_id": bears, "away_team_id": lions }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(game["home_team_name"], "Chicago Bears");
    assert!(game["home_score"].is_null());
    let game_id = game["id"].as_i64().unwrap();

    app.post(
        "/api/games",
        &token,
        json!({ "season": 2024, "week": 2, "home_team_id": packers, "away_team_id": lions }),
    )
    .await;

    let (status, updated) = app
        .request(
            Method::PUT,
            &format!("/api/games/{game_id}"),
            Some(&token),
            Some(json!({ "home_score": 27, "away_score": 24, "attendance": 61500 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["home_score"], 27);
    assert_eq!(updated["attendance"], 61500);

    let (_, games) = app.get("/api/games?team=lions&week=&season=2024", &token).await;
    assert_eq!(games.as_array().unwrap().len(), 2);

    let (_, games) = app.get("/api/games?team=bears", &token).await;
    assert_eq!(games.as_array().unwrap().len(), 1);

    let (_, games) = app.get("/api/games?week=2", &token).await;
    assert_eq!(games[0]["home_team_name"], "Green Bay Packers");

    let (status, _) = app.get("/api/games?week=two", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/api/games/4040", &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_games_are_rejected() {
    let app = TestApp::spawn().await;
    let token = app.login_as("coach").await;
    let bears = app.create_team(&token, "Chicago Bears", "CHI").await;

    for payload in [
        json!({ "season": 2024, "week": 19, "home_team_id": bears, "away_team_id": bears + 1 }),
        json!({ "season": 2024, "week": 1, "home_team_id": bears, "away_team_id": bears }),
        json!({ "season": 2024, "week": 1, "home_team_id": bears, "away_team_id": 999 }),
    ] {
        let (status, body) = app.post("/api/games", &token, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    }
}

#[tokio::test]
async fn players_and_injuries() {
    let app = TestApp::spawn().await;
    let token = app.login_as("coach").await;
    let bears = app.create_team(&token, "Chicago Bears", "CHI").await;

    let (status, player) = app
        .post(
            "/api/players",
            &token,
            json!({
                "team_id": bears,
                "name": "Speedy Back",
                "position": "rb",
                "jersey_number": 29,
                "rushing_yards": 1012,
                "touchdowns": 9
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(player["position"], "RB");
    let player_id = player["id"].as_i64().unwrap();

    let (_, players) = app
        .get(&format!("/api/players?team_id={bears}&position=rb"), &token)
        .await;
    assert_eq!(players.as_array().unwrap().len(), 1);

    let (status, injury) = app
        .post(
            "/api/injuries",
            &token,
            json!({
                "player_id": player_id,
                "status": "questionable",
                "description": "Hamstring",
                "reported_on": "2024-10-02"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(injury["team_name"], "Chicago Bears");
    let injury_id = injury["id"].as_i64().unwrap();

    let (_, injuries) = app.get("/api/injuries?status=questionable", &token).await;
    assert_eq!(injuries.as_array().unwrap().len(), 1);

    let (status, _) = app.get("/api/injuries?status=probable", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(
            "/api/injuries",
            &token,
            json!({ "player_id": 999, "status": "out", "description": "Knee" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .request(Method::DELETE, &format!("/api/injuries/{injury_id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .request(Method::DELETE, &format!("/api/injuries/{injury_id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
