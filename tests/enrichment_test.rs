//! 外部参照テスト
//!
//! ローカルのスタブHTTPサーバーで、失敗時に空の結果となることを検証

use sector_profiler::common::SectorClassifier;
use sector_profiler::enrichment::{
    lookup_knowledge, lookup_registry, OpenCorporatesClient, WikidataClient, UNMAPPED,
};
use sector_profiler::lookup::{LookupOutcome, Profiler};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const TIMEOUT: Duration = Duration::from_millis(500);

/// 固定レスポンスを返すスタブサーバーを起動し、ベースURLを返す
async fn serve(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

/// 接続を受け付けるが応答しないサーバー
async fn serve_silent() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_secs(10)).await;
                drop(socket);
            });
        }
    });

    format!("http://{}", addr)
}

/// 閉じたポートのURL
async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn registry(base_url: String) -> OpenCorporatesClient {
    OpenCorporatesClient::new(base_url, None, TIMEOUT).unwrap()
}

fn knowledge(base_url: String) -> WikidataClient {
    WikidataClient::new(format!("{}/w/api.php", base_url), "en", TIMEOUT).unwrap()
}

const REGISTRY_BODY: &str = r#"{
    "results": {
        "companies": [
            { "company": { "name": "ACME HOSPITAL CO., LTD.", "industry_codes": [ { "industry_code": { "description": "Hospital activities" } } ] } },
            { "company": { "name": "ACME HOLDINGS CO., LTD.", "company_type": "Private Limited Company", "industry_codes": [] } },
            { "company": { "name": "ACME TELECOM", "industry_codes": [ { "industry_code": { "description": "Wired telecommunications activities" } } ] } },
            { "company": { "name": "ACME FOURTH", "industry_codes": [] } }
        ]
    }
}"#;

#[tokio::test]
async fn test_registry_success() {
    let base = serve("200 OK", REGISTRY_BODY).await;
    let classifier = SectorClassifier::builtin();
    let candidates = lookup_registry(&registry(base), &classifier, "acme").await;

    assert_eq!(candidates.len(), 3);
    assert_eq!(candidates[0].sector.as_deref(), Some("Healthcare"));
    assert_eq!(candidates[1].sector_label(), UNMAPPED);
    assert_eq!(candidates[2].sector.as_deref(), Some("Telecommunications"));
}

/// 業種コードのない会社は会社種別（法人形態）で分類しない
#[tokio::test]
async fn test_registry_company_type_is_unmapped() {
    let body = r#"{
        "results": {
            "companies": [
                { "company": { "name": "SIAM HOLDINGS CO., LTD.", "company_type": "Private Limited Company", "industry_codes": [] } },
                { "company": { "name": "SIAM GROUP PCL", "company_type": "Public Limited Company" } }
            ]
        }
    }"#;
    let base = serve("200 OK", body).await;
    let candidates = lookup_registry(&registry(base), &SectorClassifier::builtin(), "siam").await;

    assert_eq!(candidates.len(), 2);
    for candidate in &candidates {
        assert_eq!(candidate.industry, "");
        assert_eq!(candidate.sector_label(), UNMAPPED);
        assert!(candidate.score.is_none());
        assert!(candidate.recommended_services.is_none());
    }
}

#[tokio::test]
async fn test_registry_server_error_is_empty() {
    let base = serve("500 Internal Server Error", r#"{"error":"boom"}"#).await;
    let candidates = lookup_registry(&registry(base), &SectorClassifier::builtin(), "acme").await;
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn test_registry_malformed_body_is_empty() {
    let base = serve("200 OK", "<html>not json</html>").await;
    let candidates = lookup_registry(&registry(base), &SectorClassifier::builtin(), "acme").await;
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn test_registry_timeout_is_empty() {
    let base = serve_silent().await;
    let started = std::time::Instant::now();
    let candidates = lookup_registry(&registry(base), &SectorClassifier::builtin(), "acme").await;

    assert!(candidates.is_empty());
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_registry_connection_refused_is_empty() {
    let base = closed_port().await;
    let candidates = lookup_registry(&registry(base), &SectorClassifier::builtin(), "acme").await;
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn test_knowledge_success() {
    let base = serve(
        "200 OK",
        r#"{ "search": [ { "id": "Q1", "label": "Acme Corporation", "description": "fictional company" } ] }"#,
    )
    .await;
    let entry = lookup_knowledge(&knowledge(base), "acme").await;

    assert_eq!(entry.label.as_deref(), Some("Acme Corporation"));
    assert_eq!(entry.category.as_deref(), Some("fictional company"));
}

#[tokio::test]
async fn test_knowledge_failures_are_empty() {
    let not_found = serve("404 Not Found", "{}").await;
    assert!(lookup_knowledge(&knowledge(not_found), "acme").await.is_empty());

    let no_hits = serve("200 OK", r#"{ "search": [] }"#).await;
    assert!(lookup_knowledge(&knowledge(no_hits), "acme").await.is_empty());

    let silent = serve_silent().await;
    assert!(lookup_knowledge(&knowledge(silent), "acme").await.is_empty());
}

/// 照合なし・外部参照も空なら「該当なし」
#[tokio::test]
async fn test_unknown_with_failing_sources_is_no_match() {
    let profiler = Profiler::new(SectorClassifier::builtin())
        .with_knowledge_source(knowledge(serve("503 Service Unavailable", "{}").await))
        .with_registry_source(registry(closed_port().await));

    assert_eq!(profiler.lookup("xyz123").await, LookupOutcome::NoMatch);
}

#[tokio::test]
async fn test_unknown_with_registry_hits_is_enriched() {
    let profiler = Profiler::new(SectorClassifier::builtin())
        .with_registry_source(registry(serve("200 OK", REGISTRY_BODY).await));

    match profiler.lookup("xyz123").await {
        LookupOutcome::Enriched(enrichment) => {
            assert!(enrichment.knowledge.is_empty());
            assert_eq!(enrichment.registry.len(), 3);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}
