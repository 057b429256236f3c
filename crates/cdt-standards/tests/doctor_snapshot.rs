use cdt_standards::{DoctorReport, load_embedded_catalog};

#[test]
fn embedded_doctor_report_snapshot_is_stable() {
    let catalog = load_embedded_catalog().expect("embedded catalog");
    let report = DoctorReport::from_catalog(&catalog);

    insta::assert_json_snapshot!(report, {
        ".fingerprint" => "[fingerprint]",
    }, @r#"
    {
      "schema": "cdt-coder.catalog-doctor",
      "schema_version": 1,
      "version": "CDT 2024",
      "source": "embedded:cdt_codes.csv",
      "fingerprint": "[fingerprint]",
      "counts": {
        "codes": 152,
        "categories": {
          "adjunctive_services": 15,
          "diagnostic": 24,
          "endodontics": 15,
          "implant_services": 11,
          "oral_surgery": 12,
          "orthodontics": 12,
          "periodontics": 11,
          "preventive": 11,
          "prosthodontics": 14,
          "restorative": 27
        }
      }
    }
    "#);
}

#[test]
fn doctor_report_carries_catalog_fingerprint() {
    let catalog = load_embedded_catalog().expect("embedded catalog");
    let report = DoctorReport::from_catalog(&catalog);

    assert_eq!(report.fingerprint, catalog.fingerprint());
    assert_eq!(report.counts.codes, catalog.len());
    assert_eq!(
        report.counts.categories.values().sum::<usize>(),
        catalog.len()
    );
}
