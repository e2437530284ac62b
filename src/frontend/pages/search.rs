//! Search page: filter form backed by the reference tables, plus saved presets.

use crate::backend::api::ApiClient;
use crate::backend::models::marker::format_price;
use crate::backend::models::reference::{
    ApprovalStatusId, approval_statuses, legal_document_kinds, property_types,
};
use crate::backend::models::{PreferencePreset, SearchCriteria};
use crate::frontend::components::common::{Notice, NoticeKind};
use crate::frontend::services::use_session;
use dioxus::prelude::*;

const MILLION: u64 = 1_000_000;

#[component]
pub fn Search() -> Element {
    let session = use_session();
    let api = use_context::<ApiClient>();
    let mut criteria = use_signal(SearchCriteria::default);

    // Re-runs when the session token changes.
    let mut presets = use_resource(move || {
        let client = api.with_token(session.token().as_deref());
        async move { client.fetch_preference_presets().await }
    });

    let presets_view = match &*presets.read() {
        None => rsx! { Notice { kind: NoticeKind::Info, message: "Loading presets..." } },
        Some(Err(e)) => rsx! {
            Notice { kind: NoticeKind::Error, message: e.to_string() }
            button { class: "button secondary", onclick: move |_| presets.restart(), "Retry" }
        },
        Some(Ok(list)) if list.is_empty() => {
            rsx! { Notice { kind: NoticeKind::Info, message: "No saved presets yet." } }
        }
        Some(Ok(list)) => {
            let selected = criteria.read().preset_id.clone();
            let items = list.iter().cloned().map(|preset| preset_item(preset, selected.as_deref(), criteria));
            rsx! { ul { class: "preset-list", {items} } }
        }
    };

    let current = criteria.read().clone();
    let filters = &current.filters;
    let property_type = filters.property_type.clone().unwrap_or_default();
    let legal_document = filters.legal_document_id.map(|id| id.to_string()).unwrap_or_default();
    let status = filters.status.map(ApprovalStatusId::as_str).unwrap_or_default();
    let min_price = filters.min_price.map(|p| (p / MILLION).to_string()).unwrap_or_default();
    let max_price = filters.max_price.map(|p| (p / MILLION).to_string()).unwrap_or_default();
    let min_area = filters.min_area.map(|a| a.to_string()).unwrap_or_default();
    let max_area = filters.max_area.map(|a| a.to_string()).unwrap_or_default();
    let location = filters.location.clone().unwrap_or_default();
    let summary = summarize(&current);

    rsx! {
        section { class: "page search",
            h1 { "Search listings" }

            div { class: "presets",
                h2 { "Saved presets" }
                {presets_view}
            }

            div { class: "filters",
                label { class: "field",
                    span { "Property type" }
                    select {
                        value: "{property_type}",
                        onchange: move |e| criteria.write().filters.property_type = non_empty(e.value()),
                        option { value: "", "Any" }
                        for kind in property_types() {
                            option { key: "{kind.id}", value: "{kind.id}", "{kind.name}" }
                        }
                    }
                }
                label { class: "field",
                    span { "Legal documents" }
                    select {
                        value: "{legal_document}",
                        onchange: move |e| criteria.write().filters.legal_document_id = parse_u64(&e.value()).and_then(|v| u32::try_from(v).ok()),
                        option { value: "", "Any" }
                        for kind in legal_document_kinds() {
                            option { key: "{kind.id}", value: "{kind.id}", "{kind.name}" }
                        }
                    }
                }
                label { class: "field",
                    span { "Approval status" }
                    select {
                        value: "{status}",
                        onchange: move |e| criteria.write().filters.status = ApprovalStatusId::parse(&e.value()),
                        option { value: "", "Any" }
                        for item in approval_statuses() {
                            option { key: "{item.id}", value: "{item.id}", "{item.name}" }
                        }
                    }
                }
                div { class: "field-row",
                    label { class: "field",
                        span { "Min price (triệu)" }
                        input {
                            r#type: "number",
                            min: "0",
                            value: "{min_price}",
                            oninput: move |e| criteria.write().filters.min_price = parse_u64(&e.value()).and_then(|v| v.checked_mul(MILLION)),
                        }
                    }
                    label { class: "field",
                        span { "Max price (triệu)" }
                        input {
                            r#type: "number",
                            min: "0",
                            value: "{max_price}",
                            oninput: move |e| criteria.write().filters.max_price = parse_u64(&e.value()).and_then(|v| v.checked_mul(MILLION)),
                        }
                    }
                }
                div { class: "field-row",
                    label { class: "field",
                        span { "Min area (m²)" }
                        input {
                            r#type: "number",
                            min: "0",
                            value: "{min_area}",
                            oninput: move |e| criteria.write().filters.min_area = parse_f64(&e.value()),
                        }
                    }
                    label { class: "field",
                        span { "Max area (m²)" }
                        input {
                            r#type: "number",
                            min: "0",
                            value: "{max_area}",
                            oninput: move |e| criteria.write().filters.max_area = parse_f64(&e.value()),
                        }
                    }
                }
                label { class: "field",
                    span { "Location" }
                    input {
                        r#type: "text",
                        value: "{location}",
                        placeholder: "Quận, thành phố",
                        oninput: move |e| criteria.write().filters.location = Some(e.value()).filter(|v| !v.is_empty()),
                    }
                }
            }

            div { class: "summary",
                p { "{summary}" }
                button {
                    class: "button secondary",
                    disabled: current.active_count() == 0,
                    onclick: move |_| criteria.write().clear(),
                    "Clear filters"
                }
            }
        }
    }
}

fn preset_item(
    preset: PreferencePreset,
    selected: Option<&str>,
    mut criteria: Signal<SearchCriteria>,
) -> Element {
    let class = if selected == Some(preset.id.as_str()) {
        "preset active"
    } else {
        "preset"
    };
    let key = preset.id.clone();
    let name = preset.name.clone();

    rsx! {
        li { key: "{key}",
            button {
                class: "{class}",
                onclick: move |_| {
                    log::debug!("Applying preset {}", preset.id);
                    criteria.write().apply_preset(&preset);
                },
                "{name}"
            }
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

fn parse_f64(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// One-line description of the active filters.
fn summarize(criteria: &SearchCriteria) -> String {
    let count = criteria.active_count();
    if count == 0 {
        return "No filters set".to_string();
    }

    let f = &criteria.filters;
    let price = match (f.min_price, f.max_price) {
        (Some(min), Some(max)) => Some(format!("{} - {}", format_price(min), format_price(max))),
        (Some(min), None) => Some(format!("from {}", format_price(min))),
        (None, Some(max)) => Some(format!("up to {}", format_price(max))),
        (None, None) => None,
    };

    match price {
        Some(price) => format!("{count} filter(s) active, price {price}"),
        None => format!("{count} filter(s) active"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_trims_and_drops_blanks() {
        assert_eq!(non_empty("  ".into()), None);
        assert_eq!(non_empty(" canho ".into()).as_deref(), Some("canho"));
    }

    #[test]
    fn number_parsing() {
        assert_eq!(parse_u64("1500"), Some(1500));
        assert_eq!(parse_u64("-3"), None);
        assert_eq!(parse_f64("45.5"), Some(45.5));
        assert_eq!(parse_f64("-1"), None);
        assert_eq!(parse_f64(""), None);
    }

    #[test]
    fn summary_describes_price_range() {
        let mut criteria = SearchCriteria::default();
        assert_eq!(summarize(&criteria), "No filters set");

        criteria.filters.min_price = Some(800 * MILLION);
        criteria.filters.max_price = Some(2_000 * MILLION);
        criteria.filters.property_type = Some("nha".into());
        assert_eq!(
            summarize(&criteria),
            "3 filter(s) active, price 800 triệu - 2 tỷ"
        );
    }
}
