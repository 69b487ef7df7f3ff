use crate::models::Provider;

/// Provider roster the service boots with. Approval is fixed at seed time;
/// no runtime workflow changes it.
pub fn providers() -> Vec<Provider> {
    let entry = |id: &str, name: &str, services: &[&str], location: &str, price: i64| Provider {
        id: id.to_string(),
        name: name.to_string(),
        services: services.iter().map(|s| s.to_string()).collect(),
        location: location.to_string(),
        price,
        approved: true,
    };

    vec![
        entry(
            "p1",
            "John's Cooling Services",
            &["ac-installation", "fan-repair"],
            "Bangalore",
            800,
        ),
        entry("p2", "Elite CCTV & Security", &["cctv-installation"], "Mumbai", 1200),
        entry("p3", "Pure Water Experts", &["water-purifier-setup"], "Pune", 700),
        entry(
            "p4",
            "PlumbRight",
            &[
                "pipe-leakage-repair",
                "wash-basin-sink-installation",
                "water-tank-cleaning",
            ],
            "Hyderabad",
            600,
        ),
        entry(
            "p5",
            "Spark Electric Works",
            &[
                "switchboard-fix",
                "switchboard-socket-installation",
                "tube-light-led-fitting",
                "ceiling-fan-repair",
            ],
            "Delhi",
            650,
        ),
        entry(
            "p6",
            "ComputeCare",
            &[
                "computer-laptop-assembly",
                "ram-hard-disk-ssd-installation",
                "monitor-or-printer-setup",
            ],
            "Chennai",
            900,
        ),
        entry("p7", "Heat & Geyser Care", &["geyser-repair"], "Bangalore", 750),
    ]
}
