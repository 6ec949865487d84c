//! Text rendering of an [`AddressReport`].

use std::io::{self, Write};

use super::AddressReport;

/// Writes the grouped report: one `IPv4:` / `IPv6:` header per requested
/// family, followed by `  - <iface>: <addr> <addr>` lines or `  (none)`.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_grouped<W: Write>(report: &AddressReport, out: &mut W) -> io::Result<()> {
    for (family, group) in report.sections() {
        writeln!(out, "{family}:")?;
        if group.is_empty() {
            writeln!(out, "  (none)")?;
            continue;
        }
        for (interface, addresses) in group.iter() {
            writeln!(out, "  - {interface}: {}", addresses.join(" "))?;
        }
    }
    Ok(())
}

/// Writes every address on its own line, IPv4 block before IPv6 block.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_flat<W: Write>(report: &AddressReport, out: &mut W) -> io::Result<()> {
    for address in report.flat_addresses() {
        writeln!(out, "{address}")?;
    }
    Ok(())
}

/// Writes the report in the layout selected by `one_per_line`.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_report<W: Write>(
    report: &AddressReport,
    one_per_line: bool,
    out: &mut W,
) -> io::Result<()> {
    if one_per_line {
        write_flat(report, out)
    } else {
        write_grouped(report, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::AddressFamily;
    use crate::report::InterfaceAddressGroup;

    fn render(report: &AddressReport, one_per_line: bool) -> String {
        let mut buf = Vec::new();
        write_report(report, one_per_line, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample_report() -> AddressReport {
        let mut v4 = InterfaceAddressGroup::new();
        v4.push("eth0", "198.51.100.10".to_string());
        v4.push("eth0", "198.51.100.11".to_string());
        v4.push("wlan0", "192.168.1.20".to_string());

        let mut v6 = InterfaceAddressGroup::new();
        v6.push("eth0", "2001:db8::10".to_string());

        let mut report = AddressReport::default();
        report.set(AddressFamily::V4, v4);
        report.set(AddressFamily::V6, v6);
        report
    }

    #[test]
    fn grouped_lists_each_interface_on_one_line() {
        assert_eq!(
            render(&sample_report(), false),
            "IPv4:\n  - eth0: 198.51.100.10 198.51.100.11\n  - wlan0: 192.168.1.20\nIPv6:\n  - eth0: 2001:db8::10\n"
        );
    }

    #[test]
    fn grouped_marks_empty_family_as_none() {
        let mut report = AddressReport::default();
        report.set(AddressFamily::V4, InterfaceAddressGroup::new());
        report.set(AddressFamily::V6, InterfaceAddressGroup::new());

        assert_eq!(render(&report, false), "IPv4:\n  (none)\nIPv6:\n  (none)\n");
    }

    #[test]
    fn grouped_omits_unrequested_family() {
        let mut report = AddressReport::default();
        report.set(AddressFamily::V6, InterfaceAddressGroup::new());

        assert_eq!(render(&report, false), "IPv6:\n  (none)\n");
    }

    #[test]
    fn flat_is_one_address_per_line() {
        assert_eq!(
            render(&sample_report(), true),
            "198.51.100.10\n198.51.100.11\n192.168.1.20\n2001:db8::10\n"
        );
    }

    #[test]
    fn flat_with_no_addresses_is_empty() {
        let mut report = AddressReport::default();
        report.set(AddressFamily::V4, InterfaceAddressGroup::new());

        assert_eq!(render(&report, true), "");
    }

    #[test]
    fn writer_errors_propagate() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let result = write_report(&sample_report(), false, &mut FailingWriter);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }
}
