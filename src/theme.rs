//! Light/dark mode fan-out to independently rendered regions
//!
//! The regions are siblings, so nothing propagates the mode for free. The
//! broadcast holds the mode and pushes it to every region that is currently
//! mounted; a region that mounts later picks up the current mode.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Named UI regions that carry the theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Sidebar,
    GlobalRoot,
    UploadContainer,
}

impl Region {
    pub const ALL: &'static [Region] = &[
        Region::Sidebar,
        Region::GlobalRoot,
        Region::UploadContainer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Sidebar => "sidebar",
            Region::GlobalRoot => "global-root",
            Region::UploadContainer => "upload-container",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThemeBroadcast {
    mode: ThemeMode,
    mounted: BTreeMap<Region, ThemeMode>,
}

impl ThemeBroadcast {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            mounted: BTreeMap::new(),
        }
    }

    /// Broadcast with every region mounted
    pub fn with_all_regions(mode: ThemeMode) -> Self {
        let mut broadcast = Self::new(mode);
        for region in Region::ALL {
            broadcast.mount(*region);
        }
        broadcast
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn mount(&mut self, region: Region) {
        self.mounted.insert(region, self.mode);
    }

    pub fn unmount(&mut self, region: Region) {
        self.mounted.remove(&region);
    }

    pub fn is_mounted(&self, region: Region) -> bool {
        self.mounted.contains_key(&region)
    }

    /// Mode last delivered to `region`, `None` while it is absent
    pub fn mode_for(&self, region: Region) -> Option<ThemeMode> {
        self.mounted.get(&region).copied()
    }

    /// Set the mode and deliver it to every mounted region.
    ///
    /// Setting, not toggling: applying the same value twice is a no-op.
    pub fn apply_theme_mode(&mut self, to_dark: bool) {
        self.mode = ThemeMode::from_dark(to_dark);
        for region in Region::ALL {
            match self.mounted.get_mut(region) {
                Some(mode) => *mode = self.mode,
                None => tracing::trace!("Region {} not mounted, skipping", region.as_str()),
            }
        }
        tracing::debug!("Theme mode applied: {}", self.mode.as_str());
    }

    /// Flip the mode, as the "Toggle dark mode" button does
    pub fn toggle(&mut self) {
        self.apply_theme_mode(!self.is_dark());
    }
}
