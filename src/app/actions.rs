#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    GoTop,
    GoBottom,
    ToggleHelp,
    Resize,
}
