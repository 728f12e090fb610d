mod common;

use common::TestApp;
use serde_json::json;

async fn causes(app: &TestApp, text: &str) -> Vec<String> {
    let response = app.post_json("/ai/analyze", &json!({ "text": text })).await;
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.unwrap();
    serde_json::from_value(body["possible_causes"].clone()).unwrap()
}

#[tokio::test]
async fn covid_phrases_match_covid_only() {
    let app = TestApp::spawn().await;
    assert_eq!(
        causes(&app, "I have a dry cough and loss of smell").await,
        vec!["COVID-19"]
    );
}

#[tokio::test]
async fn unmatched_text_returns_fallback_pair() {
    let app = TestApp::spawn().await;
    assert_eq!(
        causes(&app, "just tired").await,
        vec!["General Viral Infection", "Dehydration"]
    );
}

#[tokio::test]
async fn many_matches_are_cut_to_first_three() {
    let app = TestApp::spawn().await;
    assert_eq!(
        causes(&app, "Chills, runny nose, throbbing head, loss of taste, constipation").await,
        vec!["Viral Fever", "COVID-19", "Typhoid"]
    );
}

#[tokio::test]
async fn missing_text_is_a_validation_error() {
    let app = TestApp::spawn().await;
    let response = app.post_json("/ai/analyze", &json!({})).await;
    assert_eq!(response.status().as_u16(), 422);
}
