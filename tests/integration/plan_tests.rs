//! `/api/plan` round trips

#[cfg(test)]
mod tests {
    use crate::common::{
        StubImageProvider, StubTextProvider, TextReply, app_state,
    };
    use actix_web::http::{StatusCode, header};
    use actix_web::{test, web};
    use redesign_gateway::server::create_app;
    use redesign_gateway::{ErrorResponse, ShoppingList};
    use std::sync::Arc;
    use tempfile::TempDir;

    const COMPLETION: &str = r#"```json
{
  "items": [
    {"name": "Диван", "quantity": 1, "unit": "шт", "unit_price": 45000, "store": "Hoff"},
    {"name": "Краска", "quantity": "3", "unit": "л", "unit_price": "1 200,50", "store": "Леруа Мерлен"}
  ],
  "total_cost": 48601.5
}
```"#;

    fn post(body: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/plan")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(body.to_string())
    }

    #[actix_web::test]
    async fn test_plan_returns_shopping_list() {
        let dir = TempDir::new().unwrap();
        let text = StubTextProvider::json(COMPLETION);
        let state = app_state(&dir, StubImageProvider::inline(b"x"), text.clone(), |_| {}).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let req = post(r#"{"prompt":"Светлая гостиная в скандинавском стиле","budget":150000}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let list: ShoppingList = test::read_body_json(resp).await;
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].name, "Диван");
        assert_eq!(list.items[1].quantity, 3.0);
        assert_eq!(list.items[1].unit_price, 1200.5);
        assert_eq!(list.total_cost, 48601.5);

        let inputs = text.inputs();
        assert_eq!(inputs.len(), 1);
        assert!(inputs[0].contains("Светлая гостиная в скандинавском стиле"));
        assert!(inputs[0].contains("150000"));
    }

    #[actix_web::test]
    async fn test_total_is_summed_when_missing() {
        let dir = TempDir::new().unwrap();
        let text = StubTextProvider::json(
            r#"{"items":[{"name":"Лампа","quantity":2,"unit":"шт","unit_price":1999.99,"store":"IKEA"}]}"#,
        );
        let state = app_state(&dir, StubImageProvider::inline(b"x"), text, |_| {}).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let resp = test::call_service(&app, post(r#"{"prompt":"loft"}"#).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let list: ShoppingList = test::read_body_json(resp).await;
        assert_eq!(list.total_cost, 3999.98);
    }

    #[actix_web::test]
    async fn test_empty_body_is_missing_prompt() {
        let dir = TempDir::new().unwrap();
        let text = StubTextProvider::json(COMPLETION);
        let state = app_state(&dir, StubImageProvider::inline(b"x"), text.clone(), |_| {}).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        for body in ["", "{}", r#"{"prompt":"   "}"#] {
            let resp = test::call_service(&app, post(body).to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let error: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(error.code, "MISSING_PROMPT");
        }
        assert!(text.inputs().is_empty());
    }

    #[actix_web::test]
    async fn test_invalid_json_body() {
        let dir = TempDir::new().unwrap();
        let state = app_state(
            &dir,
            StubImageProvider::inline(b"x"),
            StubTextProvider::json(COMPLETION),
            |_| {},
        )
        .await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let resp = test::call_service(&app, post(r#"{"prompt": "#).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert!(!error.ok);
        assert_eq!(error.code, "INVALID_REQUEST");
    }

    #[actix_web::test]
    async fn test_unparseable_completion() {
        let dir = TempDir::new().unwrap();
        let text = StubTextProvider::json("Извините, не могу составить список.");
        let state = app_state(&dir, StubImageProvider::inline(b"x"), text, |_| {}).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let resp = test::call_service(&app, post(r#"{"prompt":"loft"}"#).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.code, "INVALID_PROVIDER_OUTPUT");
    }

    #[actix_web::test]
    async fn test_hanging_completion_times_out() {
        let dir = TempDir::new().unwrap();
        let text = StubTextProvider::new(TextReply::Hang);
        let state = app_state(&dir, StubImageProvider::inline(b"x"), text, |config| {
            config.gateway.provider.timeout_seconds = 1;
        })
        .await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let resp = test::call_service(&app, post(r#"{"prompt":"loft"}"#).to_request()).await;
        assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.code, "PROVIDER_TIMEOUT");
    }

    #[actix_web::test]
    async fn test_provider_failure_is_forwarded() {
        let dir = TempDir::new().unwrap();
        let text = StubTextProvider::new(TextReply::Fail(503, "overloaded".to_string()));
        let state = app_state(&dir, StubImageProvider::inline(b"x"), text, |_| {}).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let resp = test::call_service(&app, post(r#"{"prompt":"loft"}"#).to_request()).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.code, "PROVIDER_ERROR");
        assert_eq!(error.details.as_deref(), Some("stub status 503: overloaded"));
    }

    #[actix_web::test]
    async fn test_oversized_body_is_rejected() {
        let dir = TempDir::new().unwrap();
        let text: Arc<StubTextProvider> = StubTextProvider::json(COMPLETION);
        let state = app_state(&dir, StubImageProvider::inline(b"x"), text.clone(), |config| {
            config.gateway.server.max_body_size = 64;
        })
        .await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let body = format!(r#"{{"prompt":"{}"}}"#, "a".repeat(256));
        let resp = test::call_service(&app, post(&body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.code, "PAYLOAD_TOO_LARGE");
        assert!(text.inputs().is_empty());
    }
}
