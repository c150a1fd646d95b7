//! Window, sidebar, and search validation.

use super::helpers::{validate_range, validate_range_u64};
use crate::schema::{LiteConfig, QUERY_PLACEHOLDER};

pub(super) fn validate_window(errors: &mut Vec<String>, config: &LiteConfig) {
    validate_range(
        errors,
        "window.titlebar_height",
        config.window.titlebar_height,
        0,
        100,
    );
    validate_range(errors, "window.width", config.window.width, 200, 16384);
    validate_range(errors, "window.height", config.window.height, 150, 16384);
}

pub(super) fn validate_sidebar(errors: &mut Vec<String>, config: &LiteConfig) {
    validate_range(errors, "sidebar.width", config.sidebar.width, 120, 600);
    validate_range_u64(
        errors,
        "sidebar.hide_delay_ms",
        config.sidebar.hide_delay_ms,
        0,
        5000,
    );
}

pub(super) fn validate_search(errors: &mut Vec<String>, config: &LiteConfig) {
    let engine = &config.search.engine;
    if !engine.contains(QUERY_PLACEHOLDER) {
        errors.push(format!(
            "search.engine '{engine}' must contain the {QUERY_PLACEHOLDER} placeholder"
        ));
    }
    if !(engine.starts_with("https://") || engine.starts_with("http://")) {
        errors.push(format!("search.engine '{engine}' must be an http(s) URL"));
    }
}
