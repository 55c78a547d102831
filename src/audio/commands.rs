#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaCommand {
    Load { src: String, autoplay: bool },
    Play,
    Pause,
    Stop,
}
