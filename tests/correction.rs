//! 보정 엔진 회귀 테스트. 단일 운전점 (Q=0.05, H=50, η=0.7) 기준.
use approx::assert_relative_eq;
use pump_curve_analyzer::correction::{
    adjust_curve, apply_impeller_trim, apply_viscosity_correction, calculate_power,
    CorrectionParams, FluidProperties,
};
use pump_curve_analyzer::curve::{Curve, CurveSample};

fn single_point() -> Curve {
    Curve::from_samples([CurveSample {
        flow: 0.05,
        head: 50.0,
        efficiency: 0.7,
    }])
}

fn params(trim_ratio: f64, viscosity_factor: f64) -> CorrectionParams {
    CorrectionParams {
        trim_ratio,
        viscosity_factor,
    }
}

#[test]
fn trim_scales_head_with_square_of_ratio() {
    for head in [0.0, 12.5, 50.0, 120.0] {
        for ratio in [0.0, 0.5, 0.8, 1.0] {
            assert_relative_eq!(apply_impeller_trim(head, ratio), head * ratio * ratio);
        }
        assert_eq!(apply_impeller_trim(head, 1.0), head);
    }
}

#[test]
fn viscosity_identity_and_linearity() {
    assert_eq!(apply_viscosity_correction(42.0, 0.66, 1.0), (42.0, 0.66));
    let (h, e) = apply_viscosity_correction(40.0, 0.8, 0.5);
    assert_relative_eq!(h, 20.0);
    assert_relative_eq!(e, 0.4);
    let (h2, e2) = apply_viscosity_correction(40.0, 0.8, 0.25);
    assert_relative_eq!(h2 * 2.0, h);
    assert_relative_eq!(e2 * 2.0, e);
}

#[test]
fn power_is_linear_in_flow_and_head_and_inverse_in_efficiency() {
    let fluid = FluidProperties::default();
    let p = calculate_power(0.05, 50.0, 0.7, fluid);
    assert_relative_eq!(calculate_power(0.10, 50.0, 0.7, fluid), 2.0 * p, max_relative = 1e-12);
    assert_relative_eq!(calculate_power(0.05, 100.0, 0.7, fluid), 2.0 * p, max_relative = 1e-12);
    assert_relative_eq!(calculate_power(0.05, 50.0, 0.35, fluid), 2.0 * p, max_relative = 1e-12);
}

#[test]
fn power_uses_fluid_properties() {
    let brine = FluidProperties {
        density_kg_m3: 1200.0,
        gravity_m_s2: 9.81,
    };
    let water = calculate_power(0.05, 50.0, 0.7, FluidProperties::default());
    assert_relative_eq!(
        calculate_power(0.05, 50.0, 0.7, brine),
        water * 1.2,
        max_relative = 1e-12
    );
}

#[test]
fn no_adjustment_keeps_head_and_efficiency() {
    let adj = adjust_curve(&single_point(), params(1.0, 1.0), FluidProperties::default());
    assert_eq!(adj.flow(), &[0.05]);
    assert_relative_eq!(adj.head()[0], 50.0);
    assert_relative_eq!(adj.efficiency()[0], 0.7);
    let p = adj.power_kw()[0].expect("finite power");
    assert_relative_eq!(p, 35.035_714_285_714, epsilon = 1e-9);
    assert!(adj.warnings().is_empty());
}

#[test]
fn trim_only() {
    let adj = adjust_curve(&single_point(), params(0.8, 1.0), FluidProperties::default());
    assert_relative_eq!(adj.head()[0], 32.0, epsilon = 1e-12);
    assert_relative_eq!(adj.efficiency()[0], 0.7);
    let p = adj.power_kw()[0].expect("finite power");
    assert_relative_eq!(p, 22.422_857_142_857, epsilon = 1e-9);
}

#[test]
fn viscosity_only_leaves_power_unchanged() {
    let adj = adjust_curve(&single_point(), params(1.0, 0.5), FluidProperties::default());
    assert_relative_eq!(adj.head()[0], 25.0);
    assert_relative_eq!(adj.efficiency()[0], 0.35);
    let p = adj.power_kw()[0].expect("finite power");
    assert_relative_eq!(p, 35.035_714_285_714, epsilon = 1e-9);

    // 양정과 효율이 같은 비율로 줄면 동력은 그대로다
    for factor in [0.55, 0.7, 0.95] {
        let adj = adjust_curve(&single_point(), params(1.0, factor), FluidProperties::default());
        assert_relative_eq!(
            adj.power_kw()[0].unwrap(),
            35.035_714_285_714,
            epsilon = 1e-9
        );
    }
}

#[test]
fn trim_is_applied_before_viscosity() {
    let (trim, visc) = (0.9, 0.6);
    let adj = adjust_curve(&single_point(), params(trim, visc), FluidProperties::default());
    let trimmed = apply_impeller_trim(50.0, trim);
    let (h, e) = apply_viscosity_correction(trimmed, 0.7, visc);
    assert_eq!(adj.head()[0], h);
    assert_eq!(adj.efficiency()[0], e);
}

#[test]
fn zero_efficiency_gives_undefined_power() {
    assert!(!calculate_power(0.05, 50.0, 0.0, FluidProperties::default()).is_finite());

    let base = Curve::from_samples([
        CurveSample {
            flow: 0.0,
            head: 55.0,
            efficiency: 0.0,
        },
        CurveSample {
            flow: 0.05,
            head: 50.0,
            efficiency: 0.7,
        },
    ]);
    let adj = adjust_curve(&base, params(1.0, 1.0), FluidProperties::default());
    assert_eq!(adj.power_kw()[0], None);
    assert!(adj.power_kw()[1].is_some());
    assert_eq!(adj.undefined_power_indices(), vec![0]);
    assert_eq!(adj.warnings().len(), 1);
}

#[test]
fn flow_is_never_modified() {
    let base = pump_curve_analyzer::loader::example_curve();
    let adj = adjust_curve(&base, params(0.5, 0.5), FluidProperties::default());
    assert_eq!(adj.flow(), base.flow());
    assert_eq!(adj.len(), base.len());
}

#[test]
fn empty_curve_adjusts_to_empty() {
    let adj = adjust_curve(&Curve::default(), params(0.7, 0.7), FluidProperties::default());
    assert!(adj.is_empty());
    assert!(adj.warnings().is_empty());
}
