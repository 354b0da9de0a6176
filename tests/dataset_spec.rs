use std::io::Write;

use launch_dash::dataset::{Dataset, DatasetError};
use launch_dash::models::Outcome;
use speculate2::speculate;

const VALID_CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version
1,CCAFS LC-40,0,500,F9 v1.0
2,VAFB SLC-4E,1,2000,F9 v1.1
3,CCAFS LC-40,1,4000,F9 FT
4,KSC LC-39A,1,6000,F9 B4
";

speculate! {
    describe "loading" {
        it "parses records from a valid csv" {
            let dataset = Dataset::from_csv_reader(VALID_CSV.as_bytes())
                .expect("Failed to parse dataset");

            assert_eq!(dataset.len(), 4);
            let first = &dataset.records()[0];
            assert_eq!(first.site, "CCAFS LC-40");
            assert_eq!(first.payload_mass_kg, 500.0);
            assert_eq!(first.outcome, Outcome::Failure);
            assert_eq!(first.booster_version, "F9 v1.0");
        }

        it "tolerates extra columns" {
            // "Flight Number" is not a required column but must not break
            // the load.
            let dataset = Dataset::from_csv_reader(VALID_CSV.as_bytes())
                .expect("Failed to parse dataset");
            assert_eq!(dataset.len(), 4);
        }

        it "loads from a file on disk" {
            let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
            file.write_all(VALID_CSV.as_bytes()).expect("Failed to write csv");

            let dataset = Dataset::load(file.path()).expect("Failed to load dataset");
            assert_eq!(dataset.len(), 4);
        }

        it "fails on a missing file" {
            let result = Dataset::load("does/not/exist.csv");
            assert!(matches!(result, Err(DatasetError::Io { .. })));
        }

        it "fails on a missing required column" {
            let csv = "\
Launch Site,class,Booster Version
CCAFS LC-40,1,F9 v1.0
";
            let result = Dataset::from_csv_reader(csv.as_bytes());
            match result {
                Err(DatasetError::MissingColumn(column)) => {
                    assert_eq!(column, "Payload Mass (kg)");
                }
                other => panic!("expected MissingColumn, got {:?}", other.map(|d| d.len())),
            }
        }

        it "fails on an unparsable cell" {
            let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version
CCAFS LC-40,not-a-class,500,F9 v1.0
";
            let result = Dataset::from_csv_reader(csv.as_bytes());
            assert!(matches!(result, Err(DatasetError::Malformed(_))));
        }

        it "fails on an out-of-range outcome class" {
            let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version
CCAFS LC-40,2,500,F9 v1.0
";
            let result = Dataset::from_csv_reader(csv.as_bytes());
            assert!(matches!(result, Err(DatasetError::Malformed(_))));
        }
    }

    describe "summaries" {
        before {
            let dataset = Dataset::from_csv_reader(VALID_CSV.as_bytes())
                .expect("Failed to parse dataset");
        }

        it "lists sites in first-appearance order" {
            assert_eq!(
                dataset.sites(),
                &["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]
            );
        }

        it "reports payload bounds from the records" {
            assert_eq!(dataset.payload_bounds(), (500.0, 6000.0));
        }

        it "reports zero bounds for an empty table" {
            let empty = Dataset::from_records(vec![]);
            assert!(empty.is_empty());
            assert_eq!(empty.payload_bounds(), (0.0, 0.0));
        }
    }
}
