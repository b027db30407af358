//! Fuzz target for SSDP answer parsing
//!
//! Datagrams from the LAN are untrusted. Parsing must never panic, and an
//! accepted answer always names a device address.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rokucli_client::DeviceLocation;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Some(device) = DeviceLocation::from_response(text) {
        assert!(!device.addr.is_empty());
        assert!(!device.location.is_empty());
    }
});
