//! Contract Invariant Tests
//!
//! These tests verify the non-negotiable guarantees.

use eventpage_core::{
    assist::AssistCopy,
    color::{hex_to_rgb, lighten, Rgb},
    config::{EventConfig, SectionFlags},
    pipeline::{ExportPipeline, PipelineError},
    render,
    theme::ThemePreset,
    validation::FailureMode,
};

const INJECTION: &str = "<script>alert('x')</script>";

fn create_test_config() -> EventConfig {
    let mut config = EventConfig::default();
    config.colors.accent = "#c23b22".to_string();
    config.event_price = "8".to_string();
    config.event_capacity = "25 spots".to_string();
    config
}

/// Every free-text field of the record, for injection sweeps
fn text_fields(config: &mut EventConfig) -> Vec<&mut String> {
    let [a, b, c, d] = &mut config.inclusions;
    vec![
        &mut config.event_name_en,
        &mut config.event_name_jp,
        &mut config.event_date,
        &mut config.event_date_card,
        &mut config.event_time,
        &mut config.event_venue,
        &mut config.event_venue_note,
        &mut config.event_price,
        &mut config.event_price_note,
        &mut config.event_capacity,
        &mut config.event_url,
        &mut config.hero_tagline,
        &mut config.transition_jp,
        &mut config.transition_sub,
        &mut config.exp_headline,
        &mut config.exp_desc,
        &mut config.quote_text,
        &mut config.quote_attr,
        &mut a.title,
        &mut a.detail,
        &mut b.title,
        &mut b.detail,
        &mut c.title,
        &mut c.detail,
        &mut d.title,
        &mut d.detail,
    ]
}

#[test]
fn invariant_render_deterministic() {
    let config = create_test_config();
    assert_eq!(render(&config), render(&config.clone()));

    let mut sparse = config;
    sparse.sections = SectionFlags::none();
    sparse.colors.gold = "notacolor".to_string();
    assert_eq!(render(&sparse), render(&sparse.clone()));
}

#[test]
fn invariant_document_is_self_contained() {
    let html = render(&create_test_config());
    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(html.ends_with("</body></html>"));
    assert_eq!(html.matches("<link ").count(), 1);
    assert!(!html.contains("<script src"));
    assert!(!html.contains("fetch("));
}

#[test]
fn invariant_pricing_example() {
    let html = render(&create_test_config());
    assert!(html.contains("$8"));
    assert!(html.contains("Limited to 25 spots"));
    assert!(html.contains(r#"<span class="price-currency">$</span><span class="price-amount">8</span>"#));
}

#[test]
fn invariant_text_fields_escaped() {
    let count = text_fields(&mut create_test_config()).len();

    for i in 0..count {
        let mut config = create_test_config();
        *text_fields(&mut config).swap_remove(i) = INJECTION.to_string();

        let html = render(&config);
        // The only raw <script> tag is the page's own behavior block
        assert_eq!(html.matches("<script>").count(), 1, "field #{i}");
        assert!(html.contains("&lt;script&gt;alert('x')&lt;/script&gt;"), "field #{i}");
    }
}

#[test]
fn invariant_rsvp_url_escaped_in_href() {
    let mut config = create_test_config();
    config.event_url = r#"https://example.org/?a=1&b="2""#.to_string();
    let html = render(&config);
    assert!(html.contains(r#"<a href="https://example.org/?a=1&amp;b=&quot;2&quot;" class="cta-final"#));
}

#[test]
fn invariant_hidden_sections_absent() {
    let flags: [(&str, fn(&mut SectionFlags)); 6] = [
        ("class=\"preloader\"", |s| s.preloader = false),
        ("class=\"transition-section\"", |s| s.transition = false),
        ("class=\"experience\"", |s| s.experience = false),
        ("class=\"inclusions-section\"", |s| s.inclusions = false),
        ("class=\"interlude\"", |s| s.quote = false),
        ("data-parallax=", |s| s.kanji = false),
    ];

    for (marker, hide) in flags {
        let mut config = create_test_config();
        assert!(render(&config).contains(marker), "{marker} missing when shown");
        hide(&mut config.sections);
        assert!(!render(&config).contains(marker), "{marker} present when hidden");
    }
}

#[test]
fn invariant_lighten_zero_identity() {
    for hex in ["#c23b22", "#B8860B", "f5f0e8", "#000000", "#ffffff", "garbage"] {
        assert_eq!(hex_to_rgb(&lighten(hex, 0.0)), hex_to_rgb(hex), "{hex}");
    }
}

#[test]
fn invariant_lighten_bounded() {
    for hex in ["#c23b22", "#4a7dff", "#000000", "#fefefe", "#ffffff"] {
        let before = hex_to_rgb(hex);
        for pct in 0..=100 {
            let after = hex_to_rgb(&lighten(hex, f64::from(pct)));
            assert!(after.r >= before.r && after.g >= before.g && after.b >= before.b);
        }
    }
}

#[test]
fn invariant_malformed_color_degrades() {
    assert_eq!(hex_to_rgb("notacolor"), Rgb::BLACK);
    assert_eq!(lighten("notacolor", 10.0), "#1a1a1a");

    let mut config = create_test_config();
    config.colors.accent = "notacolor".to_string();
    let html = render(&config);
    assert!(html.contains("rgba(0,0,0,.25)"));
}

#[test]
fn invariant_assist_merge_skips_empty() {
    let mut config = create_test_config();
    let original_jp = config.event_name_jp.clone();

    let copy = AssistCopy::from_json(r#"{"eventNameJp": "", "heroTagline": "New tagline"}"#).unwrap();
    let report = copy.merge_into(&mut config);

    assert_eq!(config.event_name_jp, original_jp);
    assert_eq!(config.hero_tagline, "New tagline");
    assert_eq!(report.updated, vec!["heroTagline"]);
}

#[test]
fn invariant_preset_touches_only_colors() {
    let mut config = create_test_config();
    config.sections.quote = false;
    let before = config.clone();

    ThemePreset::Matcha.apply(&mut config);

    let mut expected = before;
    expected.colors = ThemePreset::Matcha.colors();
    assert_eq!(config, expected);
}

#[test]
fn invariant_export_calls_validate() {
    let pipeline = ExportPipeline::default();
    let mut config = create_test_config();
    config.event_url = "javascript:alert(document.cookie)".to_string();

    let err = pipeline.export(&config).unwrap_err();
    assert!(err.to_string().contains("rsvp_url"));
    match err {
        PipelineError::ValidationFailed(result) => {
            assert!(!result.valid);
            assert!(result.has_errors());
        }
        other => panic!("expected validation failure, got {other:?}"),
    }

    // Preview still renders the record
    assert!(pipeline.preview(&config).contains("javascript:alert(document.cookie)"));

    // Warn mode records the violation but exports
    let page = ExportPipeline::new(FailureMode::Warn).export(&config).unwrap();
    assert!(page.validation.has_errors());
}

#[test]
fn invariant_export_matches_preview() {
    let pipeline = ExportPipeline::default();
    let config = create_test_config();

    let first = pipeline.export(&config).unwrap();
    let second = pipeline.export(&config).unwrap();

    assert_eq!(first.html, pipeline.preview(&config));
    assert_eq!(first.filename, "karaoke-night.html");
    assert_eq!(first.document_hash, second.document_hash);
    assert_eq!(first.config_hash, second.config_hash);
    assert_ne!(first.id, second.id);
    assert_eq!(first.size_bytes, first.html.len());
}

#[test]
fn invariant_export_writes_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = create_test_config();
    config.event_name_en = "Sake   Tasting Night".to_string();

    let page = ExportPipeline::default().export(&config).unwrap();
    let path = page.write_to(dir.path()).unwrap();

    assert_eq!(path, dir.path().join("sake-tasting-night.html"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), page.html);
}

#[test]
fn invariant_export_stays_in_dir() {
    let root = tempfile::tempdir().unwrap();
    let out = root.path().join("out");
    std::fs::create_dir(&out).unwrap();

    for name in ["../escaped", "..\\escaped", "/etc/escaped", ".."] {
        let mut config = create_test_config();
        config.event_name_en = name.to_string();

        let page = ExportPipeline::default().export(&config).unwrap();
        let path = page.write_to(&out).unwrap();

        assert_eq!(path.parent(), Some(out.as_path()), "{name}");
        assert!(path.is_file(), "{name}");
    }
    assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 1);
}

#[test]
fn invariant_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("event.json");
    std::fs::write(&path, r#"{"eventNameEn": "Matcha Social", "eventPrice": "12", "showKanji": false}"#).unwrap();

    let config = EventConfig::load(&path).unwrap();
    let html = render(&config);

    assert!(html.contains(">Matcha<br>Social</h1>"));
    assert!(html.contains("$12 / person"));
    assert!(!html.contains("data-parallax"));
}
