//! Integration tests for factcheck-out with the real template file.
//!
//! These tests verify the full rendering pipeline from a verification
//! response to terminal text using grammars/result-templates.yaml.

use factcheck_core::{ClaimInput, EvidencePoint, Source, Tone, Verdict, VerifyResponse};
use factcheck_out::{builtin_renderer, load_renderer, quick, TemplateRenderer};

/// Path to the templates file relative to the workspace root
const TEMPLATES_PATH: &str = "grammars/result-templates.yaml";

/// Get the absolute path to the templates file
fn templates_path() -> String {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = std::path::Path::new(&manifest_dir).parent().unwrap().parent().unwrap();
    workspace_root.join(TEMPLATES_PATH).to_string_lossy().to_string()
}

fn response(verdict: Verdict) -> VerifyResponse {
    VerifyResponse {
        original_claim: "Scientists have discovered a cure for all types of cancer".to_string(),
        extracted_claim: "A complete cure for all types of cancer has been discovered in 2025".to_string(),
        verdict,
        confidence_score: 0.92,
        real_news_summary: "No universal cure for all types of cancer has been discovered.".to_string(),
        detailed_explanation: "Cancer is hundreds of different diseases.".to_string(),
        evidence_points: vec![
            EvidencePoint {
                point: "No major journal has published a universal cure".to_string(),
                source: Some("Nature Medicine".to_string()),
            },
            EvidencePoint {
                point: "Breakthroughs focus on specific cancer types".to_string(),
                source: None,
            },
        ],
        sources: vec![
            Source {
                title: "Cancer Research Progress 2025".to_string(),
                url: "https://example.com/cancer".to_string(),
                publisher: Some("WHO".to_string()),
            },
            Source {
                title: "Fact check: cancer cure rumours".to_string(),
                url: "https://example.org/fact-check".to_string(),
                publisher: None,
            },
        ],
        agent_reasoning: Some("Cross-referenced fact-check databases and news search.".to_string()),
        extra: Default::default(),
    }
}

fn renderer() -> &'static TemplateRenderer<'static> {
    builtin_renderer().unwrap()
}

// =============================================================================
// Verdict Header
// =============================================================================

#[test]
fn test_badge_and_headline_per_verdict() {
    let cases = [
        (Verdict::True, Tone::Green, "✓ TRUE", Some("This claim is true")),
        (Verdict::False, Tone::Red, "✗ FALSE", Some("This claim is false")),
        (Verdict::Misleading, Tone::Yellow, "⚠ MISLEADING", Some("This claim is misleading")),
        (Verdict::Unverified, Tone::Gray, "? UNVERIFIED", Some("We couldn't verify this claim")),
        (
            Verdict::Unknown("PARTLY_TRUE".to_string()),
            Tone::Gray,
            "? PARTLY_TRUE",
            None,
        ),
    ];

    for (verdict, tone, badge, headline) in cases {
        let card = renderer().render_result(&response(verdict)).unwrap();
        assert_eq!(card.tone, tone);
        assert!(card.badge.starts_with(badge), "badge was {:?}", card.badge);
        assert!(card.badge.contains("Confidence: 92%"));
        assert_eq!(card.headline.as_deref(), headline);
    }
}

// =============================================================================
// Card Body
// =============================================================================

#[test]
fn test_full_card_sections() {
    let card = renderer().render_result(&response(Verdict::False)).unwrap();
    let body = &card.body;

    assert!(body.contains("Real News Summary"));
    assert!(body.contains("No universal cure"));
    assert!(body.contains("Detailed Explanation"));
    assert!(body.contains("Evidence Points"));
    assert!(body.contains("1. No major journal has published a universal cure"));
    assert!(body.contains("Source: Nature Medicine"));
    assert!(body.contains("2. Breakthroughs focus on specific cancer types"));
    assert!(body.contains("Cancer Research Progress 2025 - WHO"));
    assert!(body.contains("https://example.org/fact-check"));
    assert!(body.contains("How was this verified?"));
    assert!(body.contains("Original claim: Scientists have discovered"));
    assert!(body.contains("Analyzed as: A complete cure"));

    let summary_at = body.find("Real News Summary").unwrap();
    let evidence_at = body.find("Evidence Points").unwrap();
    let sources_at = body.find("Sources").unwrap();
    assert!(summary_at < evidence_at && evidence_at < sources_at);
}

#[test]
fn test_evidence_order_preserved() {
    let card = renderer().render_result(&response(Verdict::True)).unwrap();
    let first = card.body.find("No major journal").unwrap();
    let second = card.body.find("Breakthroughs focus").unwrap();
    assert!(first < second);
}

#[test]
fn test_optional_sections_omitted() {
    let mut bare = response(Verdict::Unverified);
    bare.evidence_points.clear();
    bare.sources.clear();
    bare.agent_reasoning = None;
    bare.extracted_claim = bare.original_claim.clone();

    let card = renderer().render_result(&bare).unwrap();
    assert!(!card.body.contains("Evidence Points"));
    assert!(!card.body.contains("🔗 Sources"));
    assert!(!card.body.contains("How was this verified?"));
    assert!(!card.body.contains("Analyzed as:"));
    assert!(card.body.contains("Original claim:"));
}

#[test]
fn test_blank_reasoning_omitted() {
    let mut resp = response(Verdict::True);
    resp.agent_reasoning = Some("   ".to_string());
    let card = renderer().render_result(&resp).unwrap();
    assert!(!card.body.contains("How was this verified?"));
}

#[test]
fn test_unicode_content() {
    let mut resp = response(Verdict::Misleading);
    resp.real_news_summary = "दिल्ली में भूकंप की खबर भ्रामक है".to_string();
    let card = renderer().render_result(&resp).unwrap();
    assert!(card.body.contains("दिल्ली में भूकंप"));
}

// =============================================================================
// Other Views
// =============================================================================

#[test]
fn test_loader_shows_steps_and_claim() {
    let text = renderer()
        .render_loader(Some("Airline Y canceled 45 flights due to severe weather warnings"))
        .unwrap();
    assert!(text.contains("Verifying your claim..."));
    assert!(text.contains("Claim: Airline Y canceled"));
    assert!(text.contains("🔍 Extracting claim → ✓ Cross-referencing → 📊 Analyzing"));
}

#[test]
fn test_input_status_tracks_length() {
    let empty = renderer().render_input_status(&ClaimInput::new(""), false).unwrap();
    assert!(empty.starts_with("0 characters"));
    assert!(empty.contains("(enter a claim to verify)"));

    let typed = renderer()
        .render_input_status(&ClaimInput::new("a".repeat(150)), false)
        .unwrap();
    assert!(typed.starts_with("150 characters"));
    assert!(typed.contains(&format!("[{}{}]", "█".repeat(15), "░".repeat(15))));
    assert!(!typed.contains("(enter a claim to verify)"));

    let loading = renderer()
        .render_input_status(&ClaimInput::new("a".repeat(150)), true)
        .unwrap();
    assert!(loading.contains("(enter a claim to verify)"));
}

#[test]
fn test_tips_and_banner() {
    let tips = renderer().render_tips().unwrap();
    assert!(tips.contains("Include key details (who, what, where, when)."));
    assert!(tips.contains("City X recorded a 7.2 magnitude earthquake on Friday."));

    let banner = renderer().render_banner("1.0.0", "http://127.0.0.1:8000").unwrap();
    assert!(banner.contains("FactCheckit 1.0.0"));
    assert!(banner.contains("http://127.0.0.1:8000"));
}

#[test]
fn test_quick_result() {
    let card = quick::result(&response(Verdict::True)).unwrap();
    assert_eq!(card.headline.as_deref(), Some("This claim is true"));
}

// =============================================================================
// Template Files
// =============================================================================

#[test]
fn test_load_shipped_file() {
    let renderer = load_renderer(&templates_path()).unwrap();
    let card = renderer.render_result(&response(Verdict::False)).unwrap();
    assert!(card.badge.contains("FALSE"));
}

#[test]
fn test_user_file_overrides_one_template() {
    let dir = std::env::temp_dir().join(format!("factcheck-out-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("custom.yaml");
    std::fs::write(
        &path,
        r#"
version: "1.0-custom"
templates:
  error_banner:
    description: Louder failure
    template: "ERROR >> {{message}}"
"#,
    )
    .unwrap();

    let renderer = load_renderer(path.to_str().unwrap()).unwrap();
    assert_eq!(renderer.render_error("boom").unwrap(), "ERROR >> boom");
    assert!(renderer.render_loader(None).unwrap().contains("Verifying your claim..."));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_missing_file_is_template_error() {
    assert!(load_renderer("/nonexistent/factcheck.yaml").is_err());
}
