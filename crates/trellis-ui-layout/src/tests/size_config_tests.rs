use super::SizeConfig;

#[test]
fn add_sums_each_component() {
    let a = SizeConfig::elastic(10.0, 20.0, 40.0);
    let b = SizeConfig::elastic(1.0, 2.0, 3.0);
    assert_eq!(SizeConfig::add(a, b), SizeConfig::elastic(11.0, 22.0, 43.0));
    assert_eq!(a + b, SizeConfig::elastic(11.0, 22.0, 43.0));
}

#[test]
fn maximum_takes_each_component_independently() {
    let a = SizeConfig::elastic(10.0, 12.0, 15.0);
    let b = SizeConfig::elastic(5.0, 20.0, 20.0);
    assert_eq!(
        SizeConfig::maximum(a, b),
        SizeConfig::elastic(10.0, 20.0, 20.0)
    );
}

#[test]
fn empty_sum_is_zero() {
    let total: SizeConfig = std::iter::empty().sum();
    assert_eq!(total, SizeConfig::ZERO);
    assert_eq!(SizeConfig::default(), SizeConfig::ZERO);
}

#[test]
fn unbounded_max_survives_summing() {
    let total: SizeConfig = [SizeConfig::fixed(10.0), SizeConfig::stretchy(f32::INFINITY)]
        .into_iter()
        .sum();
    assert_eq!(total.nat, 10.0);
    assert!(total.max.is_infinite());
}

#[test]
fn compressible_is_never_negative() {
    assert_eq!(SizeConfig::elastic(10.0, 20.0, 30.0).compressible(), 10.0);
    let malformed = SizeConfig::elastic(30.0, 20.0, 30.0);
    assert!(!malformed.is_valid());
    assert_eq!(malformed.compressible(), 0.0);
}

#[test]
fn fixed_config_has_no_play() {
    let config = SizeConfig::fixed(42.0);
    assert!(config.is_fixed());
    assert_eq!(config.compressible(), 0.0);
    assert_eq!(config.expandable(), 0.0);
    assert_eq!(config.with_nat(40.0).nat, 40.0);
}
