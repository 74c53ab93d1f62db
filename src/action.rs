use crate::settings::{CodeModel, SettingsPatch};
use crate::theme::Region;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Tick,
    Render,

    // Settings dialog
    SettingsOpen,
    SettingsClose,
    SettingsNextItem,
    SettingsPrevItem,
    SettingsStartEdit,
    SettingsCancelEdit,
    /// Merge a patch into the settings store
    SettingsApply(SettingsPatch),
    SelectModel(CodeModel),

    // Theme
    ToggleDarkMode,
    SetDarkMode(bool),
    /// Mount the region if absent, unmount it if present
    ToggleRegion(Region),
}
