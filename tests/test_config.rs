mod common;

use std::time::Duration;

use common::*;

fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_defaults_without_environment() -> anyhow::Result<()> {
    let config = SiteConfig::from_vars(Vec::new())?;

    assert_eq!(config, SiteConfig::default());
    assert_eq!(config.asset_root, "");
    assert_eq!(config.submit_delay(), DEFAULT_SUBMIT_DELAY);
    assert_eq!(config.submit_delay_ms, DEFAULT_SUBMIT_DELAY_MS);
    assert_eq!(config.scroll_threshold, SCROLL_THRESHOLD);

    Ok(())
}

#[test]
fn test_prefixed_variables_override_defaults() -> anyhow::Result<()> {
    let config = SiteConfig::from_vars(vars(&[
        ("PORTFOLIO_ASSET_ROOT", "https://cdn.example.com"),
        ("PORTFOLIO_SUBMIT_DELAY_MS", "10"),
        ("PORTFOLIO_SCROLL_THRESHOLD", "80"),
        ("UNRELATED", "ignored"),
    ]))?;

    assert_eq!(config.asset_root, "https://cdn.example.com");
    assert_eq!(config.submit_delay(), Duration::from_millis(10));
    assert_eq!(config.scroll_threshold, 80.0);

    Ok(())
}

#[test]
fn test_malformed_value_is_an_error() {
    let result = SiteConfig::from_vars(vars(&[("PORTFOLIO_SUBMIT_DELAY_MS", "soon")]));

    assert!(result.is_err());
}

#[test]
fn test_asset_url_resolution() {
    let local = SiteConfig::default();
    assert_eq!(local.asset_url("/images/LAUSD.png"), "/images/LAUSD.png");
    assert_eq!(local.asset_url("images/LAUSD.png"), "/images/LAUSD.png");

    let cdn = SiteConfig {
        asset_root: "https://cdn.example.com/site/".to_string(),
        ..SiteConfig::default()
    };
    assert_eq!(
        cdn.asset_url("/images/LAUSD.png"),
        "https://cdn.example.com/site/images/LAUSD.png"
    );
    assert_eq!(
        cdn.asset_url("https://elsewhere.example.com/a.png"),
        "https://elsewhere.example.com/a.png"
    );
}

#[test]
fn test_large_delay_is_kept_exactly() -> anyhow::Result<()> {
    let config = SiteConfig::from_vars(vars(&[(
        "PORTFOLIO_SUBMIT_DELAY_MS",
        "18446744073709551615",
    )]))?;

    assert_eq!(config.submit_delay_ms, u64::MAX);
    assert_eq!(config.submit_delay(), Duration::from_millis(u64::MAX));

    Ok(())
}
