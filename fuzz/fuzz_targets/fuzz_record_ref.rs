#![no_main]

use libfuzzer_sys::fuzz_target;
use nannymiles::domain::value_objects::{parse_record_date, week_start};

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let _ = raw.parse::<nannymiles::RecordRef>();
        let _ = raw.parse::<nannymiles::TripType>();
        if let Ok(date) = parse_record_date(raw) {
            assert!(week_start(date) <= date);
        }
    }
});
