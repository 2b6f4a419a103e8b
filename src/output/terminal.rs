//! Terminal report rendering.
//!
//! Pure string building, no printing, so the full report can be asserted in
//! tests without capturing stdout.

use crate::models::Ipv4Info;

/// Render the full report, one labelled field per line.
///
/// The labels and their order match the original program exactly.
pub fn render_report(info: &Ipv4Info) -> String {
    let lines = [
        format!("--- Informace o IP adrese {info} ---"),
        format!("Adresa: {}", info.addr),
        "Typ IP: IPv4".to_string(),
        format!("Maska sítě: {}", info.mask),
        format!("Prefix délka: {}", info.prefix),
        format!("Je privátní: {}", info.is_private()),
        format!("Je veřejná: {}", info.is_public()),
        format!("Broadcast adresa: {}", info.broadcast()),
        format!("Maximální počet hostů: {}", info.max_hosts()),
        format!(
            "Rozsah adresy: {} - {}",
            info.first_usable(),
            info.last_usable()
        ),
        format!("Síťová adresa: {}", info.network),
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_report_full() {
        let info = Ipv4Info::new("192.168.1.1/24").unwrap();
        let expected = "\
--- Informace o IP adrese 192.168.1.1/24 ---
Adresa: 192.168.1.1
Typ IP: IPv4
Maska sítě: 255.255.255.0
Prefix délka: 24
Je privátní: true
Je veřejná: false
Broadcast adresa: 192.168.1.255
Maximální počet hostů: 254
Rozsah adresy: 192.168.1.1 - 192.168.1.254
Síťová adresa: 192.168.1.0";
        assert_eq!(render_report(&info), expected);
    }

    #[test]
    fn test_render_report_host_prefix() {
        let info = Ipv4Info::new("8.8.8.8/32").unwrap();
        let report = render_report(&info);
        assert!(report.contains("Je privátní: false"));
        assert!(report.contains("Je veřejná: true"));
        assert!(report.contains("Maximální počet hostů: -1"));
        assert!(report.contains("Broadcast adresa: 8.8.8.8"));
    }
}
