//! Fuzz target for Command::from_ecp_key
//!
//! Any decoded key must encode back to a key that decodes to the same
//! command. Invalid keys return an error, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rokucli_proto::Command;

fuzz_target!(|key: &str| {
    if let Ok(command) = Command::from_ecp_key(key) {
        let encoded = command.ecp_key();
        assert_eq!(Command::from_ecp_key(&encoded), Ok(command));
    }
});
