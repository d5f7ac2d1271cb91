#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing must never panic
        if let Ok(config) = toml::from_str::<nannymiles::Config>(content) {
            let _ = config.validate();
            let _ = config.data_file();
        }
    }
});
