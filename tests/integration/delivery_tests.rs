//! Delivery pipeline integration tests
//!
//! Runs `ApiClient` with the reqwest transport against a wiremock backend.

#[cfg(test)]
mod tests {
    use crate::common::{ConfigFactory, ErrorPayloadAssertions, TestBackend, closed_port_url};
    use course_eval_client::{ApiClient, ApiRequest, ClientError};
    use serde::Deserialize;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, header_exists, method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[derive(Debug, Deserialize)]
    struct Course {
        id: u32,
        title: String,
    }

    // ==================== Success path ====================

    #[tokio::test]
    async fn test_get_decodes_typed_payload() {
        let backend = TestBackend::start().await;
        Mock::given(method("GET"))
            .and(path("/courses"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "title": "Algorithms"},
                {"id": 2, "title": "Databases"}
            ])))
            .expect(1)
            .mount(&backend.server)
            .await;

        let client = backend.client(ConfigFactory::fast(&backend.uri()));
        let courses: Vec<Course> = client.get("/courses").await.unwrap();

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[1].id, 2);
        assert_eq!(courses[1].title, "Databases");
    }

    #[tokio::test]
    async fn test_bearer_token_and_request_id_sent() {
        let backend = TestBackend::start().await;
        Mock::given(method("POST"))
            .and(path("/courses/3/evaluations"))
            .and(header("authorization", "Bearer student-token"))
            .and(header_exists("x-request-id"))
            .and(body_json(json!({"score": 5, "comment": "Great"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 40})))
            .expect(1)
            .mount(&backend.server)
            .await;

        let client = backend.client(ConfigFactory::fast(&backend.uri()));
        client.session().set_token("student-token");

        let created: serde_json::Value = client
            .post("/courses/3/evaluations", &json!({"score": 5, "comment": "Great"}))
            .await
            .unwrap();

        assert_eq!(created["id"], 40);
    }

    #[tokio::test]
    async fn test_configured_default_headers_sent() {
        let backend = TestBackend::start().await;
        Mock::given(method("GET"))
            .and(path("/courses"))
            .and(header("x-term", "2024-fall"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&backend.server)
            .await;

        let mut config = ConfigFactory::fast(&backend.uri());
        config
            .default_headers
            .insert("X-Term".to_string(), "2024-fall".to_string());
        let client = backend.client(config);

        client.execute_json(ApiRequest::get("/courses")).await.unwrap();
        backend.server.verify().await;
    }

    #[tokio::test]
    async fn test_no_content_decodes_to_unit() {
        let backend = TestBackend::start().await;
        Mock::given(method("DELETE"))
            .and(path("/surveys/8"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&backend.server)
            .await;

        let client = backend.client(ConfigFactory::fast(&backend.uri()));
        let result: Result<(), _> = client.delete("/surveys/8").await;

        assert!(result.is_ok());
    }

    // ==================== Server errors ====================

    #[tokio::test]
    async fn test_unauthenticated_clears_session_and_redirects() {
        let backend = TestBackend::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"detail": "Could not validate credentials"})),
            )
            .expect(1)
            .mount(&backend.server)
            .await;

        let client = backend.client(ConfigFactory::fast(&backend.uri()));
        client.session().set_token("stale");
        client.session().set_identity(json!({"id": 3}));

        let error = client.execute_json(ApiRequest::get("/me")).await.unwrap_err();

        assert!(matches!(error, ClientError::Unauthenticated { .. }));
        assert_eq!(error.to_string(), "Could not validate credentials");
        error.assert_plain();
        assert!(!client.session().is_authenticated());
        assert!(client.session().identity().is_none());
        assert_eq!(backend.navigator.routes(), vec!["/login".to_string()]);
    }

    #[tokio::test]
    async fn test_validation_errors_joined() {
        let backend = TestBackend::start().await;
        Mock::given(method("PUT"))
            .and(path("/profile"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({"detail": [
                {"loc": ["body", "email"], "msg": "value is not a valid email address"},
                {"loc": ["body", "name"], "msg": "field required"}
            ]})))
            .expect(1)
            .mount(&backend.server)
            .await;

        let client = backend.client(ConfigFactory::fast(&backend.uri()));
        let error = client
            .put::<serde_json::Value, _>("/profile", &json!({"email": "nope"}))
            .await
            .unwrap_err();

        assert_eq!(error.status(), Some(422));
        assert_eq!(
            error.to_string(),
            "value is not a valid email address; field required"
        );
        assert!(backend.navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn test_server_error_not_retried() {
        let backend = TestBackend::start().await;
        Mock::given(method("GET"))
            .and(path("/reports"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .expect(1)
            .mount(&backend.server)
            .await;

        let client = backend.client(ConfigFactory::fast(&backend.uri()));
        let error = client
            .execute_json(ApiRequest::get("/reports"))
            .await
            .unwrap_err();

        assert!(matches!(error, ClientError::Server { status: 500, .. }));
        assert_eq!(error.to_string(), "Server error (500)");
        assert_eq!(client.stats().retries, 0);
    }

    // ==================== Retries ====================

    #[tokio::test]
    async fn test_refused_connection_reports_unreachable() {
        let client = ApiClient::new(&ConfigFactory::fast(&closed_port_url())).unwrap();

        let error = client
            .execute_json(ApiRequest::get("/courses"))
            .await
            .unwrap_err();

        assert!(matches!(error, ClientError::Unreachable { attempts: 3 }));
        assert_eq!(
            error.to_string(),
            "Unable to reach the server. It may be starting up, please try again in a moment."
        );
        error.assert_plain();
        assert_eq!(client.stats().retries, 2);
    }

    #[tokio::test]
    async fn test_slow_first_response_is_retried() {
        let backend = TestBackend::start().await;
        Mock::given(method("GET"))
            .and(path("/dashboard"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"warm": false}))
                    .set_delay(Duration::from_secs(3)),
            )
            .up_to_n_times(1)
            .with_priority(1)
            .mount(&backend.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"warm": true})))
            .with_priority(2)
            .mount(&backend.server)
            .await;

        let client = backend.client(ConfigFactory::short_timeout(&backend.uri(), 2));
        let value = client
            .execute_json(ApiRequest::get("/dashboard"))
            .await
            .unwrap();

        assert_eq!(value, json!({"warm": true}));
        assert_eq!(client.stats().retries, 1);
    }

    #[tokio::test]
    async fn test_timeout_without_retries() {
        let backend = TestBackend::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&backend.server)
            .await;

        let client = backend.client(ConfigFactory::short_timeout(&backend.uri(), 0));
        let error = client
            .execute_json(ApiRequest::get("/slow"))
            .await
            .unwrap_err();

        assert!(matches!(error, ClientError::Unreachable { attempts: 1 }));
    }

    // ==================== Throttle ====================

    #[tokio::test]
    async fn test_mutation_throttle_blocks_before_network() {
        let backend = TestBackend::start().await;
        Mock::given(method("POST"))
            .and(path("/courses/9/evaluations"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
            .expect(3)
            .mount(&backend.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/courses/9/evaluations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&backend.server)
            .await;

        let client = backend.client(ConfigFactory::with_mutation_limit(&backend.uri(), 3));
        let submit = || ApiRequest::post("/courses/9/evaluations").json(json!({"score": 3}));

        for _ in 0..3 {
            client.execute_json(submit()).await.unwrap();
        }
        let error = client.execute_json(submit()).await.unwrap_err();
        error.assert_rate_limited();

        // Still blocked, reads pass
        assert!(client.execute_json(submit()).await.is_err());
        client
            .execute_json(ApiRequest::get("/courses/9/evaluations"))
            .await
            .unwrap();
        client
            .execute_json(ApiRequest::get("/courses/9/evaluations"))
            .await
            .unwrap();

        let status = client.rate_limit_status("POST:/courses/9/evaluations");
        assert!(status.is_blocked);
        assert_eq!(status.request_count, 3);
        assert_eq!(client.stats().rate_limited, 2);

        backend.server.verify().await;
    }

    #[tokio::test]
    async fn test_shared_limiter_across_clients() {
        let backend = TestBackend::start().await;
        Mock::given(method("PATCH"))
            .and(path("/settings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(2)
            .mount(&backend.server)
            .await;

        let config = ConfigFactory::with_mutation_limit(&backend.uri(), 2);
        let first = backend.client(config.clone());
        let second = backend.client(config).with_limiter(first.limiter().clone());

        first.execute_json(ApiRequest::patch("/settings")).await.unwrap();
        second.execute_json(ApiRequest::patch("/settings")).await.unwrap();
        let error = first
            .execute_json(ApiRequest::patch("/settings"))
            .await
            .unwrap_err();

        error.assert_rate_limited();
        backend.server.verify().await;
    }
}
