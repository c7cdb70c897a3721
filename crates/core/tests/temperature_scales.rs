//! Affine temperature scales
mod common;

use approx::assert_relative_eq;
use measurement::{Temperature, TemperatureUnit};

#[test]
fn test_fixed_points_on_every_scale() {
    common::init_tracing();

    let cases = [
        (Temperature::ABSOLUTE_ZERO, -273.15, 0.0, -459.67, 0.0),
        (Temperature::FREEZING, 0.0, 273.15, 32.0, 491.67),
        (Temperature::BOILING, 100.0, 373.15, 212.0, 671.67),
    ];
    for (temp, celsius, kelvin, fahrenheit, rankine) in cases {
        assert_relative_eq!(temp.value(TemperatureUnit::Celsius), celsius, epsilon = 1e-9);
        assert_relative_eq!(temp.value(TemperatureUnit::Kelvin), kelvin, epsilon = 1e-9);
        assert_relative_eq!(temp.value(TemperatureUnit::Fahrenheit), fahrenheit, epsilon = 1e-9);
        assert_relative_eq!(temp.value(TemperatureUnit::Rankine), rankine, epsilon = 1e-9);
    }
}

#[test]
fn test_minus_forty_crossover() {
    common::init_tracing();
    let t = Temperature::new(-40.0, TemperatureUnit::Fahrenheit);
    assert_relative_eq!(t.value(TemperatureUnit::Celsius), -40.0, epsilon = 1e-9);
}

#[test]
fn test_body_temperature() {
    common::init_tracing();
    let t = Temperature::new(98.6, TemperatureUnit::Fahrenheit);
    assert_relative_eq!(t.value(TemperatureUnit::Celsius), 37.0, epsilon = 1e-9);
    assert_relative_eq!(t.value(TemperatureUnit::Kelvin), 310.15, epsilon = 1e-9);
}

#[test]
fn test_default_is_absolute_zero() {
    common::init_tracing();
    assert_eq!(Temperature::default(), Temperature::ABSOLUTE_ZERO);
    assert!(!Temperature::default().is_positive());
}

#[test]
fn test_addition_combines_kelvin_magnitudes() {
    common::init_tracing();
    let a = Temperature::new(10.0, TemperatureUnit::Kelvin);
    let b = Temperature::new(5.0, TemperatureUnit::Kelvin);
    assert_eq!((a + b).value(TemperatureUnit::Kelvin), 15.0);
    assert_eq!((a - b).value(TemperatureUnit::Kelvin), 5.0);

    // 20 °C + 20 °C is 586.3 K, not 40 °C
    let room = Temperature::new(20.0, TemperatureUnit::Celsius);
    assert_relative_eq!((room + room).value(TemperatureUnit::Kelvin), 586.3, epsilon = 1e-9);
}

#[test]
fn test_ordering_is_scale_independent() {
    common::init_tracing();
    let warm = Temperature::new(80.0, TemperatureUnit::Fahrenheit);
    let cool = Temperature::new(20.0, TemperatureUnit::Celsius);
    assert!(warm > cool);
    assert!(Temperature::FREEZING < cool);
    assert!(Temperature::new(-1.0, TemperatureUnit::Kelvin).is_negative());
}
