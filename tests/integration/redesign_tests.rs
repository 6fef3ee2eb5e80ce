//! `/api/redesign` round trips

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{MultipartBody, jpeg};
    use crate::common::{
        ImageReply, StubImageProvider, StubTextProvider, app_state, staged_files,
    };
    use actix_web::http::{StatusCode, header};
    use actix_web::{test, web};
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use futures::future::join_all;
    use redesign_gateway::server::create_app;
    use redesign_gateway::{ErrorResponse, RedesignOutput};
    use std::sync::Arc;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    fn post(body: (String, Vec<u8>)) -> test::TestRequest {
        let (content_type, data) = body;
        test::TestRequest::post()
            .uri("/api/redesign")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(data)
    }

    fn decode_data_url(image: &str) -> Vec<u8> {
        let payload = image
            .strip_prefix("data:image/png;base64,")
            .expect("png data URL");
        STANDARD.decode(payload).unwrap()
    }

    #[actix_web::test]
    async fn test_text_only_generates_image() {
        let dir = TempDir::new().unwrap();
        let image = StubImageProvider::inline(b"fixed image bytes");
        let state = app_state(&dir, image.clone(), StubTextProvider::json("{}"), |_| {}).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let body = MultipartBody::new().text("prompt", "modern").finish();
        let resp = test::call_service(&app, post(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let output: RedesignOutput = test::read_body_json(resp).await;
        assert!(output.ok);
        assert_eq!(
            output.image,
            format!("data:image/png;base64,{}", STANDARD.encode(b"fixed image bytes"))
        );
        assert_eq!(decode_data_url(&output.image), b"fixed image bytes");

        let generations = image.generations();
        assert_eq!(generations.len(), 1);
        assert_eq!(generations[0].prompt, "modern");
        assert_eq!(generations[0].size, "1024x1024");
        assert!(image.edits().is_empty());
    }

    #[actix_web::test]
    async fn test_blank_prompt_with_photo_edits_with_fallback() {
        let dir = TempDir::new().unwrap();
        let url = "https://cdn.example.com/renders/42.png";
        let image = StubImageProvider::remote(url);
        let state = app_state(&dir, image.clone(), StubTextProvider::json("{}"), |_| {}).await;
        let fallback = state.config.gateway.redesign.fallback_instruction.clone();
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let photo = jpeg(1024);
        let body = MultipartBody::new()
            .text("prompt", "")
            .file("image", "room.jpg", "image/jpeg", &photo)
            .finish();
        let resp = test::call_service(&app, post(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let output: RedesignOutput = test::read_body_json(resp).await;
        assert_eq!(output.image, url);

        let edits = image.edits();
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].prompt, fallback);
        assert_eq!(edits[0].images[0].filename, "room.jpg");
        assert_eq!(edits[0].images[0].mime_type, "image/jpeg");
        assert_eq!(edits[0].images[0].bytes.as_ref(), photo.as_slice());
        assert_eq!(staged_files(dir.path()), 0);
    }

    #[actix_web::test]
    async fn test_style_and_wishes_extend_prompt() {
        let dir = TempDir::new().unwrap();
        let image = StubImageProvider::inline(b"x");
        let state = app_state(&dir, image.clone(), StubTextProvider::json("{}"), |_| {}).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let body = MultipartBody::new()
            .text("prompt", "Make the room brighter")
            .text("style", "Japandi")
            .text("wishes", "low furniture, linen curtains")
            .file("image", "room.png", "image/png", b"\x89PNG....")
            .finish();
        let resp = test::call_service(&app, post(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        assert_eq!(
            image.edits()[0].prompt,
            "Make the room brighter. Japandi interior, low furniture, linen curtains"
        );
    }

    #[actix_web::test]
    async fn test_missing_prompt_and_image_is_rejected_before_provider() {
        let dir = TempDir::new().unwrap();
        let image = StubImageProvider::inline(b"x");
        let state = app_state(&dir, image.clone(), StubTextProvider::json("{}"), |_| {}).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let body = MultipartBody::new().text("style", "Loft").finish();
        let resp = test::call_service(&app, post(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert!(!error.ok);
        assert_eq!(error.code, "MISSING_PROMPT");
        assert_eq!(image.calls(), 0);
    }

    #[actix_web::test]
    async fn test_require_image_rejects_text_only() {
        let dir = TempDir::new().unwrap();
        let image = StubImageProvider::inline(b"x");
        let state = app_state(&dir, image.clone(), StubTextProvider::json("{}"), |config| {
            config.gateway.redesign.require_image = true;
        })
        .await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let body = MultipartBody::new().text("prompt", "modern").finish();
        let resp = test::call_service(&app, post(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.code, "MISSING_IMAGE");
        assert_eq!(image.calls(), 0);
    }

    #[actix_web::test]
    async fn test_empty_provider_response() {
        let dir = TempDir::new().unwrap();
        let image = Arc::new(StubImageProvider::new(ImageReply::Empty));
        let state = app_state(&dir, image, StubTextProvider::json("{}"), |_| {}).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let body = MultipartBody::new()
            .text("prompt", "modern")
            .file("image", "room.jpg", "image/jpeg", &jpeg(256))
            .finish();
        let resp = test::call_service(&app, post(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert!(!error.ok);
        assert_eq!(error.code, "EMPTY_PROVIDER_RESPONSE");
        assert_eq!(staged_files(dir.path()), 0);
    }

    #[actix_web::test]
    async fn test_provider_error_keeps_status_and_cleans_up() {
        let dir = TempDir::new().unwrap();
        let image = Arc::new(StubImageProvider::new(ImageReply::Fail(
            503,
            "engine overloaded".to_string(),
        )));
        let state = app_state(&dir, image.clone(), StubTextProvider::json("{}"), |_| {}).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let body = MultipartBody::new()
            .text("prompt", "modern")
            .file("image", "room.jpg", "image/jpeg", &jpeg(512))
            .finish();
        let resp = test::call_service(&app, post(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.code, "PROVIDER_ERROR");
        assert_eq!(
            error.details.as_deref(),
            Some("stub status 503: engine overloaded")
        );
        assert_eq!(image.calls(), 1);
        assert_eq!(staged_files(dir.path()), 0);
    }

    #[actix_web::test]
    async fn test_rate_limited_provider_is_internal_error() {
        let dir = TempDir::new().unwrap();
        let image = Arc::new(StubImageProvider::new(ImageReply::Fail(
            429,
            "Rate limit reached".to_string(),
        )));
        let state = app_state(&dir, image, StubTextProvider::json("{}"), |_| {}).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let body = MultipartBody::new().text("prompt", "modern").finish();
        let resp = test::call_service(&app, post(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.details.as_deref(), Some("stub status 429: Rate limit reached"));
    }

    #[actix_web::test]
    async fn test_hanging_provider_times_out_and_cleans_up() {
        let dir = TempDir::new().unwrap();
        let image = Arc::new(StubImageProvider::new(ImageReply::Hang));
        let state = app_state(&dir, image, StubTextProvider::json("{}"), |config| {
            config.gateway.provider.timeout_seconds = 1;
        })
        .await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let body = MultipartBody::new()
            .text("prompt", "modern")
            .file("image", "room.jpg", "image/jpeg", &jpeg(2048))
            .finish();

        let started = Instant::now();
        let resp = test::call_service(&app, post(body).to_request()).await;
        assert!(started.elapsed() < Duration::from_secs(3));
        assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.code, "PROVIDER_TIMEOUT");
        assert_eq!(staged_files(dir.path()), 0);
    }

    #[actix_web::test]
    async fn test_truncated_upload_is_malformed_and_cleans_up() {
        let dir = TempDir::new().unwrap();
        let image = StubImageProvider::inline(b"x");
        let state = app_state(&dir, image.clone(), StubTextProvider::json("{}"), |_| {}).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let body = MultipartBody::new()
            .text("prompt", "modern")
            .file("image", "first.png", "image/png", &jpeg(4096))
            .truncated("second.png", &jpeg(300));
        let resp = test::call_service(&app, post(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.code, "MALFORMED_UPLOAD");
        assert_eq!(image.calls(), 0);
        assert_eq!(staged_files(dir.path()), 0);
    }

    #[actix_web::test]
    async fn test_non_multipart_body_is_malformed() {
        let dir = TempDir::new().unwrap();
        let image = StubImageProvider::inline(b"x");
        let state = app_state(&dir, image.clone(), StubTextProvider::json("{}"), |_| {}).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let req = test::TestRequest::post()
            .uri("/api/redesign")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(r#"{"prompt":"modern"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.code, "MALFORMED_UPLOAD");
        assert_eq!(image.calls(), 0);
    }

    #[actix_web::test]
    async fn test_oversized_upload_is_rejected() {
        let dir = TempDir::new().unwrap();
        let image = StubImageProvider::inline(b"x");
        let state = app_state(&dir, image.clone(), StubTextProvider::json("{}"), |config| {
            config.gateway.upload.max_total_bytes = 16 * 1024;
        })
        .await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let body = MultipartBody::new()
            .text("prompt", "modern")
            .file("image", "huge.jpg", "image/jpeg", &jpeg(64 * 1024))
            .finish();
        let resp = test::call_service(&app, post(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.code, "PAYLOAD_TOO_LARGE");
        assert_eq!(image.calls(), 0);
        assert_eq!(staged_files(dir.path()), 0);
    }

    #[actix_web::test]
    async fn test_multiple_images_reach_capable_provider() {
        let dir = TempDir::new().unwrap();
        let image = Arc::new(
            StubImageProvider::new(ImageReply::Remote("https://cdn.example.com/x.png".into()))
                .with_multiple_inputs(),
        );
        let state = app_state(&dir, image.clone(), StubTextProvider::json("{}"), |_| {}).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let body = MultipartBody::new()
            .text("prompt", "add this sofa")
            .file("image", "room.jpg", "image/jpeg", &jpeg(300))
            .file("image", "sofa.webp", "image/webp", b"RIFF....WEBP")
            .finish();
        let resp = test::call_service(&app, post(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let edits = image.edits();
        assert_eq!(edits[0].images.len(), 2);
        assert_eq!(edits[0].images[1].filename, "sofa.webp");
        assert_eq!(edits[0].images[1].mime_type, "image/webp");
    }

    #[actix_web::test]
    async fn test_concurrent_requests_keep_their_own_results() {
        let dir = TempDir::new().unwrap();
        let image = Arc::new(
            StubImageProvider::new(ImageReply::EchoImage).with_delay(Duration::from_millis(50)),
        );
        let state = app_state(&dir, image.clone(), StubTextProvider::json("{}"), |_| {}).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let markers: Vec<Vec<u8>> = (0..8)
            .map(|i| {
                let mut bytes = jpeg(1024);
                bytes.extend_from_slice(format!("marker-{}", i).as_bytes());
                bytes
            })
            .collect();
        let requests = markers.iter().enumerate().map(|(i, marker)| {
            let body = MultipartBody::new()
                .text("prompt", &format!("request {}", i))
                .file("image", "room.jpg", "image/jpeg", marker)
                .finish();
            test::call_service(&app, post(body).to_request())
        });

        let responses = join_all(requests).await;
        for (marker, resp) in markers.iter().zip(responses) {
            assert_eq!(resp.status(), StatusCode::OK);
            let output: RedesignOutput = test::read_body_json(resp).await;
            assert_eq!(&decode_data_url(&output.image), marker);
        }

        for edit in image.edits() {
            let index: usize = edit.prompt.trim_start_matches("request ").parse().unwrap();
            assert_eq!(edit.images[0].bytes.as_ref(), markers[index].as_slice());
        }
        assert_eq!(image.calls(), markers.len());
        assert_eq!(staged_files(dir.path()), 0);
    }
}
