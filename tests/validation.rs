// tests/validation.rs
//
// Data-type set and region-code grammar.
//
use grid_carbon::core::validate::{is_valid_data_type, is_valid_region_code, normalize_region};
use grid_carbon::core::DataType;

#[test]
fn data_type_accepts_exactly_the_two_endpoints() {
    assert!(is_valid_data_type("carbon-intensity"));
    assert!(is_valid_data_type("electricity-mix"));

    for bad in ["", "carbon", "power-breakdown", "CARBON-INTENSITY", "electricity-mix "] {
        assert!(!is_valid_data_type(bad), "{bad:?} should be rejected");
    }
}

#[test]
fn region_examples() {
    assert!(is_valid_region_code("US-NEISO"));
    assert!(is_valid_region_code("cm"));
    assert!(!is_valid_region_code("USA"));
    assert!(!is_valid_region_code("US-"));
    assert!(!is_valid_region_code(""));
}

#[test]
fn region_allows_several_segments() {
    assert!(is_valid_region_code("US-CAL-CISO"));
    assert!(is_valid_region_code("DK-DK1"));
    assert!(is_valid_region_code("jp-tk"));
    assert!(!is_valid_region_code("US--CISO"));
    assert!(!is_valid_region_code("-US"));
    assert!(!is_valid_region_code("U1"));
    assert!(!is_valid_region_code("US_NEISO"));
}

#[test]
fn normalize_region_trims_and_uppercases() {
    assert_eq!(normalize_region("  us-neiso "), "US-NEISO");
}

#[test]
fn data_type_parses_wire_strings_only() {
    assert_eq!("carbon-intensity".parse::<DataType>(), Ok(DataType::CarbonIntensity));
    assert_eq!("electricity-mix".parse::<DataType>(), Ok(DataType::ElectricityMix));
    assert!("Electricity-Mix".parse::<DataType>().is_err());
    assert_eq!(DataType::ElectricityMix.to_string(), "electricity-mix");
}
