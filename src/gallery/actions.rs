#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,

    // Navigation
    NextPage,
    PreviousPage,
    SelectPage(usize),

    // Appearance
    CycleTheme,
    CycleSymbols,
    ToggleSentinels,

    // Periodic
    Tick,

    // Feedback shown in the status bar
    Notify(String),

    Quit,
}
