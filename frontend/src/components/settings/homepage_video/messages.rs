pub enum Msg {
    SettingLoaded(String),
    LoadFailed(String),
    UpdateDraft(String),
    Save,
    SaveSucceeded,
    SaveFailed(String),
    Revert,
    DismissError,
}
