use super::common::*;
use crate::decision::{Country, CreditSegment, ProfileError, ProfileResolver, Sex};

#[test]
fn segment_boundaries_follow_last_four_digits() {
    let rules = rules();
    let resolver = ProfileResolver::new(&rules);

    let cases = [
        (DEBT_2499, CreditSegment::Debt),
        (SEGMENT_1_2500, CreditSegment::Segment1),
        (SEGMENT_1_4999, CreditSegment::Segment1),
        (SEGMENT_2_5000, CreditSegment::Segment2),
        (SEGMENT_2_7499, CreditSegment::Segment2),
        (SEGMENT_3_7500, CreditSegment::Segment3),
        (SEGMENT_3_9999, CreditSegment::Segment3),
    ];

    for (code, expected) in cases {
        let profile = resolver
            .resolve(code, None, reference_date())
            .expect("profile resolves");
        assert_eq!(profile.credit_segment, expected, "segment for {code}");
    }
}

#[test]
fn segment_modifiers_match_rule_table() {
    let rules = rules();

    assert_eq!(rules.credit_modifier(CreditSegment::Debt), 0);
    assert_eq!(rules.credit_modifier(CreditSegment::Segment1), 100);
    assert_eq!(rules.credit_modifier(CreditSegment::Segment2), 300);
    assert_eq!(rules.credit_modifier(CreditSegment::Segment3), 1000);
}

#[test]
fn suffix_mapping_covers_full_range() {
    assert_eq!(CreditSegment::from_suffix(0), CreditSegment::Debt);
    assert_eq!(CreditSegment::from_suffix(9999), CreditSegment::Segment3);
    assert_eq!(CreditSegment::from_suffix(2499), CreditSegment::Debt);
    assert_eq!(CreditSegment::from_suffix(7500), CreditSegment::Segment3);
}

#[test]
fn defaults_to_home_country() {
    let rules = rules();
    let resolver = ProfileResolver::new(&rules);

    let profile = resolver
        .resolve(SEGMENT_3_7500, None, reference_date())
        .expect("profile resolves");

    assert_eq!(profile.country, Country::Estonia);
    assert_eq!(profile.sex, Sex::Male);
    assert_eq!(profile.age_years, 55);
}

#[test]
fn threads_explicit_country() {
    let mut rules = rules();
    rules.home_country = Country::Lithuania;
    let resolver = ProfileResolver::new(&rules);

    let defaulted = resolver
        .resolve(SEGMENT_3_7500, None, reference_date())
        .expect("profile resolves");
    assert_eq!(defaulted.country, Country::Lithuania);

    let explicit = resolver
        .resolve(SEGMENT_3_7500, Some(Country::Latvia), reference_date())
        .expect("profile resolves");
    assert_eq!(explicit.country, Country::Latvia);
}

#[test]
fn rejects_malformed_codes() {
    let rules = rules();
    let resolver = ProfileResolver::new(&rules);

    match resolver.resolve(FEBRUARY_30, None, reference_date()) {
        Err(ProfileError::InvalidIdentifier(_)) => {}
        other => panic!("expected invalid identifier, got {other:?}"),
    }
}

#[test]
fn rejects_birth_dates_after_reference_date() {
    let rules = rules();
    let resolver = ProfileResolver::new(&rules);

    match resolver.resolve(BORN_2030, None, reference_date()) {
        Err(ProfileError::BornAfterReferenceDate { today, .. }) => {
            assert_eq!(today, reference_date())
        }
        other => panic!("expected future birth date rejection, got {other:?}"),
    }
}
