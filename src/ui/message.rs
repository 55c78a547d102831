use std::time::Duration;

use uuid::Uuid;

use crate::mood::MoodRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    Quit,
    Tick(Duration),

    // Landing and navigation
    EnterApp,
    OpenPage(String),
    ToggleMenu,
    CloseMenu,
    MenuUp,
    MenuDown,
    MenuActivate,

    // Page selection
    MoveSelection(isize),
    MoveSelectionRow(isize),
    ActivateSelection,
    ToggleLikeSelected,

    // Player
    OpenPlayer { mood: String, index: usize },
    ClosePlayer,
    TogglePlayPause,
    NextTrack,
    PreviousTrack,
    ToggleLikeCurrent,

    // Custom mood dialog
    OpenMoodDialog,
    DismissMoodDialog,
    FormInput(char),
    FormPaste(String),
    FormBackspace,
    FormFocusNext,
    FormFocusPrevious,
    FormCyclePreset(bool),
    SubmitMood,
}

/// A generator call the state has committed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: Uuid,
    pub request: MoodRequest,
}

/// Work the state asks the app loop to do outside of itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Generate(Submission),
    CancelGeneration(Uuid),
}
