//! Choosing a device when discovery finds more than one.
//!
//! Runs before the terminal switches to raw mode, so it works on plain line
//! I/O. Generic over the reader and writer to keep it testable.

use std::io::{self, BufRead, Write};

use rokucli_client::DeviceLocation;

/// Pick one device from `devices`.
///
/// An empty list yields `None` and a single device is returned without
/// prompting. Otherwise a numbered list is written to `output` and the user is
/// asked for a number until the answer is valid. End of input yields `None`.
///
/// # Errors
///
/// Propagates I/O errors from `input` or `output`.
pub fn choose_device<'a, R, W>(
    devices: &'a [DeviceLocation],
    mut input: R,
    mut output: W,
) -> io::Result<Option<&'a DeviceLocation>>
where
    R: BufRead,
    W: Write,
{
    match devices {
        [] => return Ok(None),
        [only] => return Ok(Some(only)),
        _ => {},
    }

    writeln!(output, "Found {} devices:", devices.len())?;
    for (i, device) in devices.iter().enumerate() {
        writeln!(output, "  {}) {}", i + 1, device.addr)?;
    }

    let mut line = String::new();
    loop {
        write!(output, "Select a device [1-{}]: ", devices.len())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=devices.len()).contains(&n) => return Ok(devices.get(n - 1)),
            _ => writeln!(output, "Please enter a number between 1 and {}.", devices.len())?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(addr: &str) -> DeviceLocation {
        DeviceLocation { location: format!("http://{addr}/"), addr: addr.to_string() }
    }

    #[test]
    fn single_device_is_used_without_prompting() {
        let devices = [device("10.0.0.5:8060")];
        let mut output = Vec::new();

        let chosen = choose_device(&devices, &b""[..], &mut output).unwrap();

        assert_eq!(chosen, Some(&devices[0]));
        assert!(output.is_empty());
    }

    #[test]
    fn empty_list_chooses_nothing() {
        let chosen = choose_device(&[], &b"1\n"[..], Vec::new()).unwrap();
        assert_eq!(chosen, None);
    }

    #[test]
    fn reprompts_until_the_answer_is_in_range() {
        let devices = [device("10.0.0.5:8060"), device("10.0.0.6:8060")];
        let mut output = Vec::new();

        let chosen = choose_device(&devices, &b"x\n3\n2\n"[..], &mut output).unwrap();

        assert_eq!(chosen, Some(&devices[1]));
        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "Found 2 devices:\n  1) 10.0.0.5:8060\n  2) 10.0.0.6:8060\n\
             Select a device [1-2]: Please enter a number between 1 and 2.\n\
             Select a device [1-2]: Please enter a number between 1 and 2.\n\
             Select a device [1-2]: "
        );
    }

    #[test]
    fn end_of_input_aborts() {
        let devices = [device("10.0.0.5:8060"), device("10.0.0.6:8060")];
        let chosen = choose_device(&devices, &b""[..], Vec::new()).unwrap();
        assert_eq!(chosen, None);
    }
}
