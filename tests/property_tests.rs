//! Property-based tests for the classifier.

use proptest::prelude::*;

use url_guardian::core::DEFAULT_BRANDS;
use url_guardian::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_label() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,10}"
}

fn arb_hostname() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_label(), 2..5).prop_map(|labels| labels.join("."))
}

fn arb_scheme() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("http://"), Just("https://")]
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_classification_is_deterministic(input in ".{0,80}") {
        prop_assert_eq!(classify(&input), classify(&input));
    }

    #[test]
    fn prop_verdict_flags_are_consistent(input in ".{0,80}") {
        let verdict = classify(&input);
        prop_assert!(!(verdict.is_valid && verdict.is_suspicious));
        prop_assert_eq!(verdict.is_valid, verdict.parsed_components.is_some());
        prop_assert_eq!(verdict.is_valid, verdict.details.is_empty());
    }

    #[test]
    fn prop_missing_prefix_is_always_rejected(input in "[^h].{0,60}") {
        let verdict = classify(&input);
        prop_assert_eq!(verdict.kind(), VerdictKind::MissingScheme);
    }

    #[test]
    fn prop_plain_hosts_are_accepted(scheme in arb_scheme(), host in arb_hostname()) {
        // Keep clear of the free-TLD and brand heuristics.
        prop_assume!(!host.ends_with(".tk") && !host.ends_with(".ml") && !host.ends_with(".ga")
            && !host.ends_with(".cf") && !host.ends_with(".gq"));
        prop_assume!(!DEFAULT_BRANDS.iter().any(|b| host.contains(b)));

        let url = format!("{}{}/", scheme, host);
        let verdict = classify(&url);
        prop_assert_eq!(verdict.kind(), VerdictKind::Accepted);
        let parts = verdict.parsed_components.unwrap();
        prop_assert_eq!(parts.hostname, host);
        prop_assert_eq!(parts.path, "/");
    }

    #[test]
    fn prop_empty_label_is_invalid_domain(scheme in arb_scheme(), a in arb_label(), b in arb_label()) {
        let url = format!("{}{}..{}", scheme, a, b);
        prop_assert_eq!(classify(&url).kind(), VerdictKind::InvalidDomain);
    }

    #[test]
    fn prop_brand_subdomain_is_suspicious(
        brand in prop::sample::select(DEFAULT_BRANDS.to_vec()),
        host in arb_hostname(),
    ) {
        let url = format!("https://{}.{}/", brand, host);
        let verdict = classify(&url);
        prop_assert!(verdict.is_suspicious);
        prop_assert!(verdict.details.iter().any(|d| d == "Suspicious domain mimicking known brand"));
    }
}
