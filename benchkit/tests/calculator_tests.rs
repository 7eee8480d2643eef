//! Integration tests for the calculators

use benchkit::calc::{LedInput, TimerMode};
use benchkit::prelude::*;
use benchkit::units::{parse_capacitance_value, parse_frequency_value, parse_resistance_value};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= b.abs() * 1e-9
}

#[test]
fn test_ohms_law_every_target_from_every_pair() {
    // 12 V across 24 Ω: 0.5 A, 6 W
    let full = [12.0, 0.5, 24.0, 6.0];

    for target in Quantity::ALL {
        let others: Vec<Quantity> = Quantity::ALL.into_iter().filter(|q| *q != target).collect();
        for (i, a) in others.iter().enumerate() {
            for b in &others[i + 1..] {
                let known = ElectricalQuantities::new()
                    .with(*a, full[*a as usize])
                    .with(*b, full[*b as usize]);
                let solution = solve(target, &known);
                let value = solution.value().unwrap_or_else(|| {
                    panic!("{} from {} and {} should solve", target, a, b)
                });
                assert!(
                    close(value, full[target as usize]),
                    "{} from {} and {}: {}",
                    target,
                    a,
                    b,
                    value
                );
            }
        }
    }
}

#[test]
fn test_ohms_law_display_rounds_but_keeps_precision() {
    let known = ElectricalQuantities::from_inputs("10", "3", "", "");
    let solution = solve(Quantity::Resistance, &known);
    assert_eq!(solution.display(), "3.33 Ω");
    assert!(close(solution.value().unwrap(), 10.0 / 3.0));
}

#[test]
fn test_ohms_law_never_produces_non_finite_values() {
    for (v, i, r, p) in [("0", "0", "", ""), ("5", "", "0", ""), ("", "0", "", "3"), ("-1", "", "", "2")] {
        let known = ElectricalQuantities::from_inputs(v, i, r, p);
        for target in Quantity::ALL {
            let solution = solve(target, &known);
            for q in Quantity::ALL {
                if let Some(value) = solution.quantities.get(q) {
                    assert!(value.is_finite(), "{} became {}", q, value);
                }
            }
        }
    }
}

#[test]
fn test_series_parallel_with_suffixed_values() {
    let values = benchkit::calc::parse_resistances(&["1k", "4k7", "abc", "-5", "220"]);
    assert_eq!(values.len(), 4);

    let series = Calculation::ResistorSeries(values.clone()).evaluate().unwrap();
    assert_eq!(
        series.readings[0].to_string(),
        "Equivalent Series Resistance: 5920.00 Ω"
    );

    let parallel = Calculation::ResistorParallel(vec![100.0, 100.0]).evaluate().unwrap();
    assert_eq!(parallel.readings[0].display_value(), "50.00");

    assert_eq!(
        Calculation::ResistorSeries(vec![0.0, -1.0]).evaluate(),
        Err(CalcError::NoValidInput)
    );
}

#[test]
fn test_led_defaults_match_bench_example() {
    let report = Calculation::LedResistor(LedInput::default()).evaluate().unwrap();
    assert_eq!(report.reading("Resistor Value").unwrap().display_value(), "150.00");
    assert_eq!(report.reading("Power Dissipation").unwrap().display_value(), "0.060");

    let err = Calculation::LedResistor(LedInput {
        supply_voltage: Some(3.0),
        forward_voltage: Some(3.2),
        current_ma: Some(20.0),
    })
    .evaluate()
    .unwrap_err();
    assert!(matches!(err, CalcError::ForwardVoltageTooHigh { .. }));
}

#[test]
fn test_reactance_from_unit_strings() {
    let report = Calculation::CapacitorReactance {
        frequency: parse_frequency_value("1kHz"),
        capacitance: parse_capacitance_value("1uF"),
    }
    .evaluate()
    .unwrap();
    assert_eq!(report.readings[0].display_value(), "159.15");

    let missing = Calculation::InductorReactance {
        frequency: parse_frequency_value("fast"),
        inductance: Some(0.01),
    }
    .evaluate();
    assert!(matches!(missing, Err(CalcError::InvalidInput(_))));
}

#[test]
fn test_timer_astable_report() {
    let report = Calculation::Timer555(TimerMode::Astable {
        r1: parse_resistance_value("1k"),
        r2: parse_resistance_value("10k"),
        capacitance: parse_capacitance_value("10uF"),
    })
    .evaluate()
    .unwrap();

    // f = 1.44 / (21k * 10uF) = 6.857 Hz
    assert_eq!(report.reading("Frequency").unwrap().display_value(), "6.86");
    // duty = 11k / 21k
    assert_eq!(report.reading("Duty Cycle").unwrap().display_value(), "52.38");
}

#[test]
fn test_calculator_keys() {
    let keys: Vec<&str> = CalculatorKind::ALL.iter().map(|k| k.key()).collect();
    assert_eq!(
        keys,
        vec![
            "ohmsLaw",
            "resistorParallel",
            "resistorSeries",
            "ledResistor",
            "capacitorReactance",
            "inductorReactance",
            "timer555"
        ]
    );
    assert!("ohmslaw".parse::<CalculatorKind>().is_ok());
    assert!(matches!(
        "transistor".parse::<CalculatorKind>(),
        Err(CalcError::UnknownCalculator(_))
    ));
}
