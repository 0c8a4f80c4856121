//! Integration test: the checker end-to-end, the way a host drives it.
//!
//! Covers the full pipeline: declared options (TOML or JSON) → validated
//! config → scan → rendered reports, plus running the checker behind a
//! trait object next to other checks.

use regex_line_length::{
    check, reports, Checker, CheckerBox, Config, ConfigError, LineLengthChecker, Options,
    Severity, Violation,
};

fn config_from_toml(options: &str) -> Config {
    Options::from_toml(options)
        .expect("options should parse")
        .into_config()
        .expect("options should validate")
}

// ── Happy path: default configuration ──

#[test]
fn default_limit_allows_79_character_line() {
    let config = config_from_toml("");
    let content = "x".repeat(79);
    assert_eq!(check(&content, &config).count(), 0);
}

#[test]
fn default_limit_flags_81_character_line() {
    let config = config_from_toml("");
    let content = "x".repeat(81);
    let violations: Vec<Violation> = check(&content, &config).collect();
    assert_eq!(violations, vec![Violation::new(1, 81, 80)]);
}

#[test]
fn empty_file_passes_without_trailing_newline() {
    let config = config_from_toml("");
    assert_eq!(check("", &config).count(), 0);
}

// ── Options pipeline ──

#[test]
fn options_pipeline_suppresses_matching_lines() {
    let config = config_from_toml(
        r#"
max-line-length = 40
ignore-line-regexes = ["NOLINT", "https?://"]
"#,
    );

    let content = format!(
        "{}\n{} NOLINT\nsee https://example.com/a/very/long/path/elsewhere",
        "a".repeat(50),
        "b".repeat(50)
    );
    let violations: Vec<Violation> = check(&content, &config).collect();

    assert_eq!(violations, vec![Violation::new(1, 50, 40)]);
}

#[test]
fn options_pipeline_accepts_json_hosts() {
    let options: Options =
        serde_json::from_str(r#"{"max-line-length": 40, "ignore-line-regexes": ["NOLINT"]}"#)
            .expect("options should deserialize");
    let config = options.into_config().expect("options should validate");

    assert_eq!(config.max_line_length(), 40);
    let content = format!("{} NOLINT", "x".repeat(60));
    assert_eq!(check(&content, &config).count(), 0);
}

// ── Configuration errors surface before any scan ──

#[test]
fn zero_limit_fails_configuration() {
    let err = Options::from_toml("max-line-length = 0")
        .expect("options should parse")
        .into_config()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidConfiguration { value: 0 }));
}

#[test]
fn negative_limit_fails_configuration() {
    let err = Options::from_toml("max-line-length = -3")
        .expect("options should parse")
        .into_config()
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidConfiguration { value: -3 }
    ));
}

#[test]
fn invalid_regex_identifies_the_pattern() {
    let err = Options::from_toml(r#"ignore-line-regexes = ["fine", "(bad"]"#)
        .expect("options should parse")
        .into_config()
        .unwrap_err();
    match err {
        ConfigError::InvalidPattern { pattern, reason } => {
            assert_eq!(pattern, "(bad");
            assert!(!reason.is_empty());
        }
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

#[test]
fn malformed_options_fail_with_parse_error() {
    assert!(matches!(
        Options::from_toml("max-line-length = \"eighty\"").and_then(Options::into_config),
        Err(ConfigError::Parse { .. })
    ));
}

// ── Report rendering ──

#[test]
fn reports_render_for_host() {
    let config = config_from_toml("");
    let content = format!("short line\n{}\nanother short line", "y".repeat(90));
    let rendered: Vec<String> = reports(&content, &config).map(|r| r.to_string()).collect();

    assert_eq!(rendered.len(), 1);
    insta::assert_snapshot!(
        rendered[0],
        @"2: warning [REGEXLINELENGTH] This line is 90 characters long, but the convention is 80 characters."
    );
}

#[test]
fn report_json_matches_host_contract() {
    let config = config_from_toml("max-line-length = 20");
    let content = "this line is definitely too long";
    let all: Vec<_> = reports(content, &config).collect();
    assert_eq!(all.len(), 1);

    let json = serde_json::to_value(&all[0]).expect("report should serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "severity": "warning",
            "code": "REGEXLINELENGTH",
            "line_number": 1,
            "message": "This line is 32 characters long, but the convention is 20 characters.",
            "line": "this line is definitely too long",
        })
    );
}

#[test]
fn report_carries_the_offending_line_content() {
    let config = config_from_toml("max-line-length = 10");
    let content = "ok\nthis one is too long\nok";
    let all: Vec<_> = reports(content, &config).collect();

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].line, "this one is too long");
    assert_eq!(all[0].line_number, 2);
    assert_eq!(all[0].severity, Severity::Warning);
}

// ── Trait-object hosts ──

#[test]
fn checker_runs_as_trait_object() {
    let checkers: Vec<CheckerBox> = vec![Box::new(LineLengthChecker::new())];
    let config = config_from_toml("max-line-length = 10");
    let content = "short\nthis line is far too long for ten";

    for checker in &checkers {
        assert_eq!(checker.code(), "REGEXLINELENGTH");
        assert_eq!(checker.name(), "regex-line-length");
        assert_eq!(checker.severity(), Severity::Warning);

        let violations: Vec<Violation> = checker.check(content, &config).collect();
        assert_eq!(violations, vec![Violation::new(2, 33, 10)]);
    }
}

#[test]
fn scan_streams_in_ascending_line_order() {
    let config = config_from_toml("max-line-length = 5");
    let content = "aaaaaaaa\nok\nbbbbbbbb\ncccccccc";
    let mut violations = check(content, &config);

    assert_eq!(violations.next().map(|v| v.line_number), Some(1));
    assert_eq!(violations.next().map(|v| v.line_number), Some(3));
    assert_eq!(violations.next().map(|v| v.line_number), Some(4));
    assert_eq!(violations.next(), None);
}
