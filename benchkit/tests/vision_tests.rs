//! Vision client tests against a local mock of the Gemini endpoint

use benchkit::config::Settings;
use benchkit::resistor::{BandMode, ResistorBands};
use benchkit::vision::{
    prompts, ComponentAnalysis, ComponentAnalyzer, GeminiClient, ImagePayload, VisionError,
    VisionProvider,
};
use benchkit::ToolRoute;
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;

const ENDPOINT: &str = "/v1beta/models/gemini-2.0-flash-exp:generateContent";

fn answer(text: &str) -> String {
    json!({
        "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }]
    })
    .to_string()
}

fn client(server: &mockito::ServerGuard) -> GeminiClient {
    GeminiClient::new("test-key").with_base_url(server.url())
}

fn image() -> ImagePayload {
    ImagePayload::from_bytes("image/jpeg", b"fake jpeg")
}

#[tokio::test]
async fn test_band_detection_request_and_merge() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_body(Matcher::PartialJson(json!({
            "contents": [{ "parts": [
                { "text": prompts::BAND_DETECTION.text },
                { "inline_data": { "mime_type": "image/jpeg", "data": image().data } }
            ]}],
            "generationConfig": { "topK": 1, "maxOutputTokens": 256 }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(answer(
            "```json\n{\"band1\": \"green\", \"band2\": \"blue\", \"band3\": \"red\", \"band4\": \"gold\", \"band5\": null}\n```",
        ))
        .create_async()
        .await;

    let analyzer = ComponentAnalyzer::new(Arc::new(client(&server)));
    let detected = analyzer
        .detect_bands(&image(), ResistorBands::default())
        .await
        .unwrap()
        .unwrap();

    mock.assert_async().await;
    assert_eq!(detected.bands.mode, BandMode::FourBand);
    assert_eq!(detected.bands.decode().unwrap().ohms, 5_600.0);
}

#[tokio::test]
async fn test_identification_routes_to_ic_finder() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": { "maxOutputTokens": 512 }
        })))
        .with_status(200)
        .with_body(answer(
            r#"{"type": "Integrated Circuit", "name": "NE555", "description": "Timer", "specifications": {"partNumber": "NE555P"}}"#,
        ))
        .create_async()
        .await;

    let analyzer = ComponentAnalyzer::new(Arc::new(client(&server)));
    let analysis = analyzer.identify(&image()).await.unwrap().unwrap();

    assert!(matches!(analysis, ComponentAnalysis::Identified(_)));
    assert_eq!(
        analysis.route(),
        Some(ToolRoute::IcFinder {
            query: "NE555".to_string()
        })
    );
}

#[tokio::test]
async fn test_prose_answer_is_description_only() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(answer("This appears to be a ceramic capacitor."))
        .create_async()
        .await;

    let analyzer = ComponentAnalyzer::new(Arc::new(client(&server)));
    let analysis = analyzer.identify(&image()).await.unwrap().unwrap();
    assert_eq!(
        analysis,
        ComponentAnalysis::DescriptionOnly {
            description: "This appears to be a ceramic capacitor.".to_string()
        }
    );
    assert_eq!(analysis.route(), None);
}

#[tokio::test]
async fn test_api_error_is_reported_without_retry() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body("quota exceeded")
        .expect(1)
        .create_async()
        .await;

    let result = client(&server)
        .generate(&prompts::BAND_DETECTION, &image())
        .await;

    mock.assert_async().await;
    match result {
        Err(VisionError::ApiError { status, message }) => {
            assert_eq!(status, 429);
            assert_eq!(message, "quota exceeded");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_candidates_is_invalid_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"candidates": []}"#)
        .create_async()
        .await;

    let result = client(&server)
        .generate(&prompts::COMPONENT_IDENTIFICATION, &image())
        .await;
    assert!(matches!(result, Err(VisionError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_client_from_settings() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/custom-model:generateContent")
        .match_query(Matcher::UrlEncoded("key".into(), "from-settings".into()))
        .with_status(200)
        .with_body(answer("{\"band1\": \"red\"}"))
        .create_async()
        .await;

    let settings = Settings {
        gemini_api_key: Some("from-settings".to_string()),
        gemini_model: "custom-model".to_string(),
        gemini_base_url: server.url(),
        request_timeout_secs: 5,
    };
    let client = GeminiClient::from_settings(&settings).unwrap();
    assert!(client.is_configured());
    let text = client
        .generate(&prompts::BAND_DETECTION, &image())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(text, "{\"band1\": \"red\"}");
}
