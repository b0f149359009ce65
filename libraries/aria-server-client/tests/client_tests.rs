//! Tests for the Aria server client library.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real service.

use aria_core::traits::{CatalogSearch, FavoritesBackend, ListeningSink};
use aria_core::types::{Profile, SourceRef, Track};
use aria_server_client::{
    AriaServerClient, CatalogClient, RemoteFavorites, RemoteListening, ServerClientError,
    ServerConfig,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn track(id: &str) -> Track {
    Track::new(
        id,
        format!("Track {id}"),
        "Test Artist",
        SourceRef::Url(format!("https://cdn.example.com/{id}.m4a")),
    )
}

async fn authenticated_client(server: &MockServer) -> AriaServerClient {
    AriaServerClient::new(ServerConfig::with_session(
        server.uri(),
        "token-123",
        "user-1",
    ))
    .expect("valid config")
}

// =============================================================================
// Server Config Tests
// =============================================================================

mod server_config {
    use super::*;

    #[test]
    fn test_new_with_url() {
        let config = ServerConfig::new("https://example.com");
        assert_eq!(config.url, "https://example.com");
        assert!(config.access_token.is_none());
        assert!(config.user_id.is_none());
    }

    #[test]
    fn test_with_session() {
        let config = ServerConfig::with_session("https://example.com", "token", "user-1");
        assert_eq!(config.access_token.as_deref(), Some("token"));
        assert_eq!(config.user_id.as_deref(), Some("user-1"));
    }
}

// =============================================================================
// Authentication Tests
// =============================================================================

mod auth {
    use super::*;

    #[tokio::test]
    async fn test_login_stores_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(json!({
                "email": "listener@example.com",
                "password": "hunter2",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "fresh-token",
                "user_id": "user-9",
                "username": "listener",
            })))
            .mount(&server)
            .await;

        let client = AriaServerClient::new(ServerConfig::new(server.uri())).unwrap();
        let login = client.login("listener@example.com", "hunter2").await.unwrap();

        assert_eq!(login.user_id, "user-9");
        assert!(client.is_authenticated().await);
        assert_eq!(client.identity().await.unwrap().as_str(), "user-9");
    }

    #[tokio::test]
    async fn test_login_rejection_maps_to_auth_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
            .mount(&server)
            .await;

        let client = AriaServerClient::new(ServerConfig::new(server.uri())).unwrap();
        let result = client.login("listener@example.com", "wrong").await;

        assert!(matches!(result, Err(ServerClientError::AuthFailed(_))));
        assert!(!client.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        assert!(client.is_authenticated().await);
        client.logout().await;
        assert!(!client.is_authenticated().await);
        assert!(client.favorites().await.is_err());
    }
}

// =============================================================================
// Favorites Tests
// =============================================================================

mod favorites {
    use super::*;

    #[tokio::test]
    async fn test_list_sends_bearer_and_parses_tracks() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/user-1/liked-tracks"))
            .and(header("authorization", "Bearer token-123"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(vec![track("a"), track("b")]),
            )
            .mount(&server)
            .await;

        let client = authenticated_client(&server).await;
        let tracks = client.favorites().await.unwrap().list().await.unwrap();

        let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_insert_posts_the_track() {
        let server = MockServer::start().await;
        let liked = track("a");
        Mock::given(method("POST"))
            .and(path("/api/users/user-1/liked-tracks"))
            .and(body_json(&liked))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = authenticated_client(&server).await;
        client.favorites().await.unwrap().insert(&liked).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_targets_the_track_id() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/users/user-1/liked-tracks/a"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = authenticated_client(&server).await;
        client.favorites().await.unwrap().delete("a").await.unwrap();
    }

    #[tokio::test]
    async fn test_expired_token_maps_to_auth_required() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/user-1/liked-tracks"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = authenticated_client(&server).await;
        let result = client.favorites().await.unwrap().list().await;

        assert!(matches!(result, Err(ServerClientError::AuthRequired)));
    }

    #[tokio::test]
    async fn test_server_error_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/user-1/liked-tracks"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let client = authenticated_client(&server).await;
        match client.favorites().await.unwrap().list().await {
            Err(ServerClientError::ServerError { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("Expected ServerError, got {other:?}"),
        }
    }
}

// =============================================================================
// Profile Tests
// =============================================================================

mod profile {
    use super::*;

    #[tokio::test]
    async fn test_get_parses_profile() {
        let server = MockServer::start().await;
        let profile = Profile {
            username: Some("listener".into()),
            full_name: Some("A Listener".into()),
            avatar_url: None,
            minutes_listened: 1234,
        };
        Mock::given(method("GET"))
            .and(path("/api/profiles/user-1"))
            .and(header("authorization", "Bearer token-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&profile))
            .mount(&server)
            .await;

        let client = authenticated_client(&server).await;
        let fetched = client.profile().await.unwrap().get().await.unwrap();

        assert_eq!(fetched, profile);
    }

    #[tokio::test]
    async fn test_add_minutes_posts_the_increment() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/profiles/user-1/minutes"))
            .and(body_json(json!({ "minutes": 2 })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = authenticated_client(&server).await;
        client.profile().await.unwrap().add_minutes(2).await.unwrap();
    }

    #[tokio::test]
    async fn test_add_minutes_failure_is_typed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/profiles/user-1/minutes"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = authenticated_client(&server).await;
        let result = client.profile().await.unwrap().add_minutes(1).await;

        assert!(matches!(
            result,
            Err(ServerClientError::ServerError { status: 500, .. })
        ));
    }
}

// =============================================================================
// Playlist Tests
// =============================================================================

mod playlists {
    use super::*;

    #[tokio::test]
    async fn test_save_round_trips_the_record() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/users/user-1/playlists"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "pl-1",
                "name": "Night Drive Mix",
                "prompt": "upbeat synthwave for a night drive",
                "tracks": [track("a")],
                "created_at": "2025-06-01T12:00:00Z",
            })))
            .mount(&server)
            .await;

        let client = authenticated_client(&server).await;
        let record = client
            .playlists()
            .await
            .unwrap()
            .save(
                "Night Drive Mix",
                "upbeat synthwave for a night drive",
                vec![track("a")],
            )
            .await
            .unwrap();

        assert_eq!(record.id, "pl-1");
        assert_eq!(record.tracks.len(), 1);
    }

    #[tokio::test]
    async fn test_list_parses_records() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/user-1/playlists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": "pl-2",
                "name": "Focus Flow",
                "prompt": "deep focus",
                "tracks": [],
                "created_at": "2025-06-02T08:30:00Z",
            }])))
            .mount(&server)
            .await;

        let client = authenticated_client(&server).await;
        let records = client.playlists().await.unwrap().list().await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Focus Flow");
    }
}

// =============================================================================
// Catalog Tests
// =============================================================================

mod catalog {
    use super::*;

    #[tokio::test]
    async fn test_search_maps_results_and_drops_unplayable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("term", "night drive"))
            .and(query_param("media", "music"))
            .and(query_param("entity", "song"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    {
                        "trackId": 42,
                        "trackName": "Night Drive",
                        "artistName": "Neon Fields",
                        "artworkUrl100": "https://img.example.com/100x100/c.jpg",
                        "previewUrl": "https://cdn.example.com/p.m4a",
                        "trackTimeMillis": 215000,
                        "primaryGenreName": "Synthwave",
                    },
                    {
                        "trackId": 43,
                        "trackName": "No Preview",
                        "artistName": "Anyone",
                    },
                ],
            })))
            .mount(&server)
            .await;

        let catalog = CatalogClient::new(server.uri()).unwrap();
        let tracks = catalog.search("night drive").await.unwrap();

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].id, "42");
        assert_eq!(
            tracks[0].cover_url.as_deref(),
            Some("https://img.example.com/600x600/c.jpg")
        );
    }

    #[tokio::test]
    async fn test_empty_query_short_circuits() {
        // No mock mounted: a request would fail the test
        let catalog = CatalogClient::new("http://127.0.0.1:9").unwrap();
        let tracks = catalog.search("   ").await.unwrap();
        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn test_best_match_returns_first_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    {
                        "trackId": 1,
                        "trackName": "First",
                        "artistName": "Artist",
                        "previewUrl": "https://cdn.example.com/1.m4a",
                    },
                    {
                        "trackId": 2,
                        "trackName": "Second",
                        "artistName": "Artist",
                        "previewUrl": "https://cdn.example.com/2.m4a",
                    },
                ],
            })))
            .mount(&server)
            .await;

        let catalog = CatalogClient::new(server.uri()).unwrap();
        let best = catalog.best_match("First", "Artist").await.unwrap();

        assert_eq!(best.unwrap().id, "1");
    }
}

// =============================================================================
// Bridge Tests
// =============================================================================

mod bridge {
    use super::*;
    use std::time::Duration;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_remote_favorites_load_blocks_for_the_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/user-1/liked-tracks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(vec![track("a")]))
            .mount(&server)
            .await;

        let client = authenticated_client(&server).await;
        let favorites = client.favorites().await.unwrap();
        let mut backend = RemoteFavorites::new(favorites, tokio::runtime::Handle::current());

        // The synchronous trait is driven from a host thread
        let loaded = tokio::task::spawn_blocking(move || backend.load())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "a");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_remote_favorites_insert_is_fire_and_forget() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/users/user-1/liked-tracks"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;

        let client = authenticated_client(&server).await;
        let favorites = client.favorites().await.unwrap();
        let mut backend = RemoteFavorites::new(favorites, tokio::runtime::Handle::current());

        backend.insert(&track("a")).unwrap();

        // The write lands asynchronously
        for _ in 0..100 {
            if !server.received_requests().await.unwrap().is_empty() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("Spawned insert never reached the server");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_remote_listening_reports_success_synchronously() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/profiles/user-1/minutes"))
            .and(body_json(json!({ "minutes": 3 })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = authenticated_client(&server).await;
        let profile = client.profile().await.unwrap();
        let mut sink = RemoteListening::new(profile, tokio::runtime::Handle::current());

        let outcome = tokio::task::spawn_blocking(move || sink.add_minutes(3))
            .await
            .unwrap();

        assert!(outcome.is_ok());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_remote_listening_failure_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/profiles/user-1/minutes"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = authenticated_client(&server).await;
        let profile = client.profile().await.unwrap();
        let mut sink = RemoteListening::new(profile, tokio::runtime::Handle::current());

        let outcome = tokio::task::spawn_blocking(move || sink.add_minutes(1))
            .await
            .unwrap();

        assert!(outcome.is_err());
    }
}
