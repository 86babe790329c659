use std::fmt;

/// Coarse device family derived from a request's `User-Agent` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Device {
    Iphone,
    Ipad,
    Android,
    Windows,
    Mac,
    Linux,
    Other,
}

/// Markers checked in order; the first hit decides the device.
const MARKERS: &[(&str, Device)] = &[
    ("iphone", Device::Iphone),
    ("ipad", Device::Ipad),
    ("android", Device::Android),
    ("windows", Device::Windows),
    ("mac os", Device::Mac),
    ("macintosh", Device::Mac),
    ("linux", Device::Linux),
];

impl Device {
    /// Every label, in marker order with `Other` last.
    pub const ALL: [Device; 7] = [
        Device::Iphone,
        Device::Ipad,
        Device::Android,
        Device::Windows,
        Device::Mac,
        Device::Linux,
        Device::Other,
    ];

    /// Classifies a user-agent. A missing header is treated as empty and yields `Other`.
    pub fn classify(user_agent: Option<&str>) -> Device {
        let ua = user_agent.unwrap_or_default().to_lowercase();
        MARKERS
            .iter()
            .find(|(marker, _)| ua.contains(marker))
            .map(|(_, device)| *device)
            .unwrap_or(Device::Other)
    }

    /// Label used in metrics and on the dashboard.
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Iphone => "iphone",
            Device::Ipad => "ipad",
            Device::Android => "android",
            Device::Windows => "windows",
            Device::Mac => "mac",
            Device::Linux => "linux",
            Device::Other => "other",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
