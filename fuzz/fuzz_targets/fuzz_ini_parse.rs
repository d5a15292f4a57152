#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // INI parsing must never panic, whatever the input
        let parsed = inistack::codec::parse_str(content);
        let _ = inistack::codec::serialize(&parsed.document);
    }
});
