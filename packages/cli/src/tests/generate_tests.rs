use blueprint_ai::AIConfig;
use blueprint_core::DocumentType;

use crate::generate::{render_document, RenderRequest};

fn request(document_type: DocumentType) -> RenderRequest {
    RenderRequest {
        name: "Acme Tracker".to_string(),
        project_type: "saas".to_string(),
        industry: Some("finance".to_string()),
        description: None,
        document_type,
        use_ai: false,
    }
}

#[tokio::test]
async fn test_render_mvp_from_template() {
    let html = render_document(&request(DocumentType::Mvp), &AIConfig::default())
        .await
        .unwrap();
    assert!(html.contains("MVP Blueprint: Acme Tracker"));
    assert!(html.contains("Secure transaction processing"));
}

#[tokio::test]
async fn test_render_rejects_blank_name() {
    let mut req = request(DocumentType::Plan);
    req.name = "  ".to_string();
    let err = render_document(&req, &AIConfig::default()).await.unwrap_err();
    assert!(err.to_string().contains("name"));
}

#[tokio::test]
async fn test_render_with_ai_requires_key() {
    let mut req = request(DocumentType::Roadmap);
    req.use_ai = true;
    assert!(render_document(&req, &AIConfig::default()).await.is_err());
}
