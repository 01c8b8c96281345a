use super::*;

#[test]
fn reference_values_map_to_expected_labels() {
    let cases = [
        (10.0, "优"),
        (50.0, "良"),
        (100.0, "轻度污染"),
        (140.0, "中度污染"),
        (200.0, "重度污染"),
        (300.0, "严重污染"),
    ];
    for (v, label) in cases {
        assert_eq!(AqiCategory::classify(v).label(), label, "value {v}");
    }
}

#[test]
fn breakpoints_belong_to_the_lower_category() {
    assert_eq!(AqiCategory::classify(35.0), AqiCategory::Excellent);
    assert_eq!(AqiCategory::classify(35.01), AqiCategory::Good);
    assert_eq!(AqiCategory::classify(250.0), AqiCategory::HeavilyPolluted);
    assert_eq!(AqiCategory::classify(250.5), AqiCategory::SeverelyPolluted);
}

#[test]
fn severity_is_monotone_in_concentration() {
    let mut prev = AqiCategory::classify(-50.0);
    assert_eq!(prev, AqiCategory::Excellent);
    let mut v = -50.0;
    while v < 1000.0 {
        let cur = AqiCategory::classify(v);
        assert!(cur >= prev, "severity dropped at {v}");
        assert!(AqiCategory::ALL.contains(&cur));
        prev = cur;
        v += 0.5;
    }
    assert_eq!(prev, AqiCategory::SeverelyPolluted);
    assert_eq!(AqiCategory::classify(f64::INFINITY), AqiCategory::SeverelyPolluted);
    assert_eq!(AqiCategory::classify(f64::NAN), AqiCategory::Excellent);
}

#[test]
fn each_category_has_a_distinct_color() {
    let mut colors: Vec<_> = AqiCategory::ALL.iter().map(|c| c.color()).collect();
    colors.dedup();
    assert_eq!(colors.len(), 6);
    for (i, c) in AqiCategory::ALL.iter().enumerate() {
        assert_eq!(usize::from(c.severity()), i);
    }
}
