// ABOUTME: Tests for micronutrient adequacy assessment
// ABOUTME: Daily values, percent-of-DV banding, intake parsing, and report order
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use mealplan_dashboard::intelligence::{
    assess_micronutrients, AdequacyStatus, Micronutrient, MicronutrientIntake,
};

#[test]
fn test_status_bands() {
    assert_eq!(AdequacyStatus::from_percent(140.0), AdequacyStatus::Adequate);
    assert_eq!(AdequacyStatus::from_percent(90.0), AdequacyStatus::Adequate);
    assert_eq!(AdequacyStatus::from_percent(89.9), AdequacyStatus::Moderate);
    assert_eq!(AdequacyStatus::from_percent(50.0), AdequacyStatus::Moderate);
    assert_eq!(AdequacyStatus::from_percent(49.9), AdequacyStatus::Low);
    assert_eq!(AdequacyStatus::from_percent(0.0), AdequacyStatus::Low);
}

#[test]
fn test_assessment_covers_every_nutrient_in_order() {
    let report = assess_micronutrients(&MicronutrientIntake::new());

    assert_eq!(report.len(), Micronutrient::ALL.len());
    for (row, nutrient) in report.iter().zip(Micronutrient::ALL) {
        assert_eq!(row.nutrient, nutrient);
        assert_eq!(row.amount, 0.0);
        assert_eq!(row.status, AdequacyStatus::Low);
    }
}

#[test]
fn test_percent_of_daily_value() {
    let intake = MicronutrientIntake::new()
        .with(Micronutrient::Iron, 18.0)
        .with(Micronutrient::VitaminD, 10.0)
        .with(Micronutrient::Zinc, 5.4)
        .with(Micronutrient::Calcium, 1100.0);

    let report = assess_micronutrients(&intake);
    let row = |nutrient| report.iter().find(|r| r.nutrient == nutrient).unwrap();

    let iron = row(Micronutrient::Iron);
    assert_eq!(iron.percent_dv, 100.0);
    assert_eq!(iron.status, AdequacyStatus::Adequate);
    assert_eq!(iron.unit, "mg");

    let vitamin_d = row(Micronutrient::VitaminD);
    assert_eq!(vitamin_d.percent_dv, 50.0);
    assert_eq!(vitamin_d.status, AdequacyStatus::Moderate);
    assert_eq!(vitamin_d.unit, "mcg");

    assert_eq!(row(Micronutrient::Zinc).status, AdequacyStatus::Low);
    assert_eq!(row(Micronutrient::Calcium).status, AdequacyStatus::Moderate);
}

#[test]
fn test_intake_deserializes_from_camel_case_keys() {
    let intake: MicronutrientIntake =
        serde_json::from_str(r#"{"vitaminB12": 3.1, "folate": 250, "potassium": 2900}"#).unwrap();

    assert_eq!(intake.amount(Micronutrient::VitaminB12), 3.1);
    assert_eq!(intake.amount(Micronutrient::Folate), 250.0);
    assert_eq!(intake.amount(Micronutrient::Magnesium), 0.0);
}

#[test]
fn test_nutrient_names_parse_loosely() {
    assert_eq!(
        "vitamin_d".parse::<Micronutrient>().unwrap(),
        Micronutrient::VitaminD
    );
    assert_eq!(
        "Vitamin B12".parse::<Micronutrient>().unwrap(),
        Micronutrient::VitaminB12
    );
    assert_eq!("IRON".parse::<Micronutrient>().unwrap(), Micronutrient::Iron);
    assert!("vitamin z".parse::<Micronutrient>().is_err());
}

#[test]
fn test_report_serializes_for_display() {
    let intake: MicronutrientIntake = [(Micronutrient::Magnesium, 420.0)].into_iter().collect();

    let report = assess_micronutrients(&intake);
    let json = serde_json::to_value(&report).unwrap();
    let magnesium = json
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["nutrient"] == "magnesium")
        .unwrap();

    assert_eq!(magnesium["percentDv"], 100.0);
    assert_eq!(magnesium["dailyValue"], 420.0);
    assert_eq!(magnesium["status"], "adequate");
}
